//! Traffic generation rules.

use super::types::{EntryRule, ObstacleField};
use crate::core::constants::{FALLBACK_OCCUPANCY_PERCENT, LOOKAHEAD_CELLS};
use rand::Rng;

impl EntryRule {
    /// Rule used when no lookahead window is available.
    pub const FALLBACK: EntryRule = EntryRule::Chance(FALLBACK_OCCUPANCY_PERCENT);

    /// Produce the entry cell value.
    pub fn resolve<R: Rng>(self, rng: &mut R) -> bool {
        match self {
            EntryRule::Fixed(occupied) => occupied,
            EntryRule::Chance(percent) => roll_percent(rng, percent),
        }
    }
}

/// Occupied iff a uniform draw in `[0, 100)` exceeds `100 - percent`.
pub fn roll_percent<R: Rng>(rng: &mut R, percent: u8) -> bool {
    let threshold = 100 - u32::from(percent.min(100));
    rng.gen_range(0..100u32) > threshold
}

/// Decision table for the entry cell, keyed on lookahead columns 1..=5.
///
/// A long run of obstacles ahead lowers the chance of another one; a long
/// gap ahead raises it. Rows are matched top to bottom.
pub fn entry_rule(window: [bool; LOOKAHEAD_CELLS]) -> EntryRule {
    use EntryRule::{Chance, Fixed};

    match window {
        [true, true, true, true, true] => Chance(40),
        [true, true, true, true, false] => Chance(70),
        [true, true, true, false, _] => Chance(90),
        [true, true, false, _, _] => Fixed(true),
        [true, false, _, _, _] => Fixed(true),
        [false, false, false, false, false] => Chance(20),
        [false, false, false, false, true] => Chance(15),
        [false, false, false, true, _] => Chance(5),
        [false, false, true, _, _] => Fixed(false),
        [false, true, _, _, _] => Fixed(false),
    }
}

impl ObstacleField {
    /// Columns 1..=5 of a lane, or `None` when the lane is too narrow.
    pub fn lookahead(&self, row: usize) -> Option<[bool; LOOKAHEAD_CELLS]> {
        self.occupancy[row]
            .get(1..=LOOKAHEAD_CELLS)
            .and_then(|cells| cells.try_into().ok())
    }

    /// Advance every interior lane by one tick.
    ///
    /// The entry rule is chosen from the pre-shift lane, then the lane
    /// shifts one column toward the player (the last cell falls off) and
    /// column 0 receives the rule's value.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        for row in self.interior_lanes() {
            let rule = self.lookahead(row).map_or(EntryRule::FALLBACK, entry_rule);
            let lane = &mut self.occupancy[row];
            if lane.is_empty() {
                continue;
            }
            lane.rotate_right(1);
            lane[0] = rule.resolve(rng);
        }
    }
}
