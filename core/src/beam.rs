use smallvec::SmallVec;

use crate::{Cell, GRID_SIZE, GameState, step};

/// Longest beam the tracer will follow: one step per board cell.
pub const MAX_BEAM_STEPS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Ordered cells the beam visited, ready for the renderer to animate.
pub type BeamPath = SmallVec<[Cell; 16]>;

/// Outcome of one fire command. The tracer itself never mutates the state;
/// the session applies `hit` afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trace {
    pub path: BeamPath,
    pub hit: Option<Hit>,
}

/// The target the beam struck, by index into the state's target list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Hit {
    pub target: usize,
    pub value: u32,
    pub cell: Cell,
}

impl Trace {
    pub fn score_delta(&self) -> u32 {
        self.hit.map_or(0, |hit| hit.value)
    }
}

/// Walks the beam cell by cell from the cell ahead of the emitter.
///
/// Per visited cell: a target ends the beam and scores; a mirror bends the
/// heading and the beam continues from the same cell; re-entering the
/// emitter's own cell ends the beam. Leaving the board ends it with no
/// score. A step budget of one step per board cell caps the walk so firing
/// always terminates, whatever the mirror layout.
pub fn trace(state: &GameState) -> Trace {
    let Some(origin) = state.laser.pos else {
        log::debug!("fire ignored, laser is not on the board");
        return Trace::default();
    };

    let mut dir = state.laser.dir;
    let mut path = BeamPath::new();
    // The emitter's own cell is never part of the path.
    let mut cursor = step(origin, dir);

    while let Some(cell) = cursor {
        if path.len() == MAX_BEAM_STEPS {
            log::warn!("beam exhausted its step budget, cutting it off");
            break;
        }
        path.push(cell);

        if let Some(target) = state.target_index_at(cell) {
            let value = state.targets[target].value;
            log::debug!("beam reached a {value}-point target at {cell:?}");
            return Trace {
                path,
                hit: Some(Hit {
                    target,
                    value,
                    cell,
                }),
            };
        }

        if let Some(kind) = state.mirror_kind_at(cell) {
            dir = kind.reflect(dir);
        }

        if cell == origin {
            // Beam looped back into the emitter.
            break;
        }

        cursor = step(cell, dir);
    }

    Trace { path, hit: None }
}
