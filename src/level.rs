//! Level counter shown on the bottom wall.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCounter {
    number: u32,
}

impl Default for LevelCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelCounter {
    pub fn new() -> Self {
        Self { number: 1 }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn increment(&mut self) {
        self.number = self.number.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.number = 1;
    }

    /// Text drawn over the bottom wall.
    pub fn label(&self) -> String {
        format!(" LEVEL: {} ", self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_one() {
        assert_eq!(LevelCounter::new().number(), 1);
        assert_eq!(LevelCounter::default().label(), " LEVEL: 1 ");
    }

    #[test]
    fn test_increment_and_reset() {
        let mut level = LevelCounter::new();
        level.increment();
        level.increment();
        assert_eq!(level.number(), 3);
        assert_eq!(level.label(), " LEVEL: 3 ");
        level.reset();
        assert_eq!(level.number(), 1);
    }
}
