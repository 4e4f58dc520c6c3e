use std::collections::BTreeSet;

use rand::Rng;
use rand::RngExt;
use serde::{Deserialize, Serialize};

use crate::{Cell, Die, Direction, Laser, Mirror, MirrorKind, SaveError, Slot, Target, in_bounds};

/// Point values of the three targets handed out at reset.
pub const TARGET_VALUES: [u32; 3] = [20, 30, 50];

/// One mirror of each orientation starts in the palette.
pub const MIRROR_KINDS: [MirrorKind; 2] = [MirrorKind::Slash, MirrorKind::Backslash];

pub const DICE_COUNT: usize = 2;

const DIE_FACES: u8 = 6;

/// Full game state. One struct serves three jobs: the live state mutated by
/// commands, the snapshot pushed onto the undo/redo stacks, and the record
/// written to the save file (field names match the on-disk JSON).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub score: u32,
    pub laser: Laser,
    #[serde(rename = "points")]
    pub targets: Vec<Target>,
    pub mirrors: Vec<Mirror>,
    pub dice: Vec<Die>,
}

impl GameState {
    /// Fresh baseline: everything in the palette, score zero, dice rolled.
    pub fn initial<R: Rng>(rng: &mut R) -> Self {
        Self {
            score: 0,
            laser: Laser {
                pos: None,
                dir: Direction::Up,
            },
            targets: TARGET_VALUES
                .iter()
                .map(|&value| Target { pos: None, value })
                .collect(),
            mirrors: MIRROR_KINDS
                .iter()
                .map(|&kind| Mirror { pos: None, kind })
                .collect(),
            dice: (0..DICE_COUNT).map(|_| Die { value: roll(rng) }).collect(),
        }
    }

    /// Cells taken by placed pieces, recomputed from scratch on every call so
    /// it can never go stale across mutations.
    pub fn occupied_cells(&self) -> BTreeSet<Cell> {
        self.slots().flatten().collect()
    }

    pub fn target_index_at(&self, cell: Cell) -> Option<usize> {
        self.targets
            .iter()
            .position(|target| target.pos == Some(cell))
    }

    pub fn mirror_kind_at(&self, cell: Cell) -> Option<MirrorKind> {
        self.mirrors
            .iter()
            .find(|mirror| mirror.pos == Some(cell))
            .map(|mirror| mirror.kind)
    }

    /// Rejects a record that could not have come from a legal game: a piece
    /// off the board's edge, or two pieces stacked on one cell.
    pub fn validate(&self) -> Result<(), SaveError> {
        let mut seen = BTreeSet::new();
        for cell in self.slots().flatten() {
            if !in_bounds(cell) {
                log::warn!("save record places a piece out of bounds at {cell:?}");
                return Err(SaveError::Invalid);
            }
            if !seen.insert(cell) {
                log::warn!("save record stacks two pieces at {cell:?}");
                return Err(SaveError::Invalid);
            }
        }
        Ok(())
    }

    fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        core::iter::once(self.laser.pos)
            .chain(self.targets.iter().map(|target| target.pos))
            .chain(self.mirrors.iter().map(|mirror| mirror.pos))
    }
}

pub(crate) fn roll<R: Rng>(rng: &mut R) -> u8 {
    rng.random_range(1..=DIE_FACES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn fresh() -> GameState {
        GameState::initial(&mut SmallRng::seed_from_u64(7))
    }

    #[test]
    fn initial_state_matches_the_reset_contract() {
        let state = fresh();
        assert_eq!(state.score, 0);
        assert_eq!(state.laser.pos, None);
        assert_eq!(state.laser.dir, Direction::Up);
        assert_eq!(
            state.targets.iter().map(|t| t.value).collect::<Vec<_>>(),
            vec![20, 30, 50]
        );
        assert_eq!(state.mirrors.len(), 2);
        assert!(state.targets.iter().all(|t| t.pos.is_none()));
        assert!(state.mirrors.iter().all(|m| m.pos.is_none()));
        assert_eq!(state.dice.len(), DICE_COUNT);
        assert!(state.dice.iter().all(|die| (1..=6).contains(&die.value)));
    }

    #[test]
    fn occupancy_is_recomputed_from_piece_positions() {
        let mut state = fresh();
        assert!(state.occupied_cells().is_empty());

        state.laser.pos = Some((3, 3));
        state.mirrors[0].pos = Some((5, 5));
        let occupied = state.occupied_cells();
        assert_eq!(occupied.len(), 2);
        assert!(occupied.contains(&(3, 3)));
        assert!(occupied.contains(&(5, 5)));
    }

    #[test]
    fn validate_rejects_stacked_pieces() {
        let mut state = fresh();
        state.mirrors[0].pos = Some((2, 2));
        state.targets[0].pos = Some((2, 2));
        assert!(matches!(state.validate(), Err(SaveError::Invalid)));
    }

    #[test]
    fn validate_rejects_out_of_bounds_positions() {
        let mut state = fresh();
        state.laser.pos = Some((8, 0));
        assert!(matches!(state.validate(), Err(SaveError::Invalid)));
    }
}
