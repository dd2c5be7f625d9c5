//! Street data structures.

use std::ops::Range;

/// How the entry cell of a lane is filled on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRule {
    /// Always this value.
    Fixed(bool),
    /// Occupied with the given percentage.
    Chance(u8),
}

/// Occupancy grid of the street.
///
/// Row = lane index (0 is the far wall side, `height - 1` the start row),
/// column = position in the lane (0 is the entry edge). Dimensions are
/// fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstacleField {
    width: usize,
    height: usize,
    pub(crate) occupancy: Vec<Vec<bool>>,
}

impl ObstacleField {
    /// Create an empty street.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            occupancy: vec![vec![false; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether an obstacle occupies the cell. Panics outside the grid.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.occupancy[row][col]
    }

    /// Place or clear an obstacle. Panics outside the grid.
    pub fn set(&mut self, row: usize, col: usize, occupied: bool) {
        self.occupancy[row][col] = occupied;
    }

    pub fn lane(&self, row: usize) -> &[bool] {
        &self.occupancy[row]
    }

    /// Lanes that carry traffic. The start row and the far-wall row stay clear.
    pub fn interior_lanes(&self) -> Range<usize> {
        1..self.height.saturating_sub(1)
    }

    /// Copy of the full grid, row-major.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.occupancy.clone()
    }

    /// Number of occupied cells across the whole grid.
    pub fn occupied_count(&self) -> usize {
        self.occupancy
            .iter()
            .map(|lane| lane.iter().filter(|&&cell| cell).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_empty() {
        let field = ObstacleField::new(80, 12);
        assert_eq!(field.width(), 80);
        assert_eq!(field.height(), 12);
        assert_eq!(field.occupied_count(), 0);
        assert_eq!(field.to_rows().len(), 12);
        assert!(field.to_rows().iter().all(|lane| lane.len() == 80));
    }

    #[test]
    fn test_interior_lanes_skip_boundary_rows() {
        assert_eq!(ObstacleField::new(80, 12).interior_lanes(), 1..11);
        assert_eq!(ObstacleField::new(80, 3).interior_lanes(), 1..2);
        assert!(ObstacleField::new(80, 2).interior_lanes().is_empty());
    }

    #[test]
    fn test_set_and_read_cell() {
        let mut field = ObstacleField::new(10, 4);
        field.set(2, 7, true);
        assert!(field.is_occupied(2, 7));
        assert!(!field.is_occupied(2, 6));
        assert_eq!(field.occupied_count(), 1);
        assert!(field.lane(2)[7]);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_read_is_an_invariant_violation() {
        let field = ObstacleField::new(10, 4);
        field.is_occupied(4, 0);
    }
}
