//! Player token position.

/// A one-cell move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Player position on the street. `y == 0` is the far wall,
/// `y == height - 1` the start row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub x: usize,
    pub y: usize,
    width: usize,
    height: usize,
}

impl Player {
    /// Player at the start position of a `width` × `height` street.
    pub fn new(width: usize, height: usize) -> Self {
        let (x, y) = Self::start_position(width, height);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Middle of the bottom row.
    pub fn start_position(width: usize, height: usize) -> (usize, usize) {
        (width / 2, height.saturating_sub(1))
    }

    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn reset(&mut self) {
        (self.x, self.y) = Self::start_position(self.width, self.height);
    }

    /// Move one cell, clamped to the street. Returns whether the position changed.
    pub fn step(&mut self, direction: Direction) -> bool {
        let before = self.position();
        match direction {
            Direction::Up => self.y = self.y.saturating_sub(1),
            Direction::Down => {
                if self.y + 1 < self.height {
                    self.y += 1;
                }
            }
            Direction::Left => self.x = self.x.saturating_sub(1),
            Direction::Right => {
                if self.x + 1 < self.width {
                    self.x += 1;
                }
            }
        }
        self.position() != before
    }

    pub fn at_far_wall(&self) -> bool {
        self.y == 0
    }
}
