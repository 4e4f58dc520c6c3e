use std::path::PathBuf;

use crate::{Cell, Direction, PieceId, Trace};

/// One player input, dispatched through [`crate::GameSession::apply`]. The
/// input layer (drag-and-drop, buttons, keys) reduces to these.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Drop a piece onto a board cell.
    Place { piece: PieceId, cell: Cell },
    RotateLaser,
    RollDice,
    Fire,
    Undo,
    Redo,
    Reset,
    /// `None` falls back to [`crate::save::DEFAULT_SAVE_FILE`].
    Save { path: Option<PathBuf> },
    Load { path: Option<PathBuf> },
}

/// What a command did, returned to the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandOutcome {
    Placed(PlaceOutcome),
    Rotated(Direction),
    Rolled(Vec<u8>),
    Fired(Trace),
    History(HistoryOutcome),
    Reset,
    Saved,
    Loaded,
}

/// Result of a drop attempt. A rejected drop is not an error; the piece
/// just went back to its palette slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaceOutcome {
    Placed,
    ReturnedToPalette,
}

impl PlaceOutcome {
    pub const fn was_placed(self) -> bool {
        matches!(self, Self::Placed)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HistoryOutcome {
    Restored,
    NoChange,
}

impl HistoryOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Restored)
    }
}
