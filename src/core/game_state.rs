//! Game state shared by the concurrent activities.
//!
//! One `Game` owns the street, the player, the level counter and the
//! speed controller. The game loop keeps it behind a single mutex, so
//! every read (render, collision check) sees a fully applied tick.

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::level::LevelCounter;
use crate::player::{Direction, Player};
use crate::speed::SpeedController;
use crate::street::ObstacleField;
use rand::Rng;

/// Colour state of the boundary walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallTint {
    #[default]
    Plain,
    Win,
    Loss,
}

/// Win or loss, as reported by the checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Win,
    Loss,
}

impl Transition {
    /// Wall tint flashed for this transition.
    pub fn tint(self) -> WallTint {
        match self {
            Transition::Win => WallTint::Win,
            Transition::Loss => WallTint::Loss,
        }
    }
}

/// Everything one render pass needs, copied out under the lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub rows: Vec<Vec<bool>>,
    pub player: (usize, usize),
    pub label: String,
    pub walls: WallTint,
}

impl Scene {
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug)]
pub struct Game {
    pub field: ObstacleField,
    pub player: Player,
    pub level: LevelCounter,
    pub speed: SpeedController,
    walls: WallTint,
    flash_generation: u64,
    ticks: u64,
}

impl Game {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            field: ObstacleField::new(config.width, config.height),
            player: Player::new(config.width, config.height),
            level: LevelCounter::new(),
            speed: SpeedController::new(config.initial_interval),
            walls: WallTint::Plain,
            flash_generation: 0,
            ticks: 0,
        })
    }

    /// Populate the street before it is shown.
    pub fn warm_up<R: Rng>(&mut self, passes: usize, rng: &mut R) {
        for _ in 0..passes {
            self.field.advance(rng);
        }
        log::debug!(
            "warm-up: {} passes, {} obstacles on the street",
            passes,
            self.field.occupied_count()
        );
    }

    /// One simulation tick.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        self.field.advance(rng);
        self.ticks += 1;
        log::trace!("tick {}", self.ticks);
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn walls(&self) -> WallTint {
        self.walls
    }

    /// Move the player; moving up may complete a crossing.
    pub fn apply_move(&mut self, direction: Direction) -> Option<Transition> {
        self.player.step(direction);
        if direction == Direction::Up {
            self.check_winning()
        } else {
            None
        }
    }

    /// Win transition when the player stands on the far wall row.
    pub fn check_winning(&mut self) -> Option<Transition> {
        if !self.player.at_far_wall() {
            return None;
        }
        self.win();
        Some(Transition::Win)
    }

    /// Whether the player's cell holds an obstacle.
    pub fn collides(&self) -> bool {
        let (x, y) = self.player.position();
        self.field.is_occupied(y, x)
    }

    pub fn win(&mut self) {
        self.player.reset();
        self.speed.speed_up();
        self.level.increment();
        log::info!(
            "crossed: level {} at {}ms",
            self.level.number(),
            self.speed.interval_ms()
        );
    }

    /// Loss transition. The caller decides when a collision counts.
    pub fn apply_loss(&mut self) -> Transition {
        log::info!("hit at level {}", self.level.number());
        self.player.reset();
        self.speed.reset();
        self.level.reset();
        Transition::Loss
    }

    /// Start a new wall flash; older flashes stop touching the walls.
    pub fn begin_flash(&mut self) -> u64 {
        self.flash_generation += 1;
        self.flash_generation
    }

    /// Set the wall tint if `generation` is still the newest flash.
    pub fn tint_walls(&mut self, generation: u64, tint: WallTint) -> bool {
        if generation != self.flash_generation {
            return false;
        }
        self.walls = tint;
        true
    }

    pub fn scene(&self) -> Scene {
        Scene {
            rows: self.field.to_rows(),
            player: self.player.position(),
            label: self.level.label(),
            walls: self.walls,
        }
    }
}
