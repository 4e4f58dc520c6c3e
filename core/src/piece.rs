use serde::{Deserialize, Serialize};

use crate::{Cell, Direction};

/// Where a piece currently sits; `None` means it is in the palette tray, off
/// the board and invisible to occupancy checks and the tracer.
pub type Slot = Option<Cell>;

/// Diagonal orientation of a mirror, written the way it looks on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MirrorKind {
    #[serde(rename = "/")]
    Slash,
    #[serde(rename = "\\")]
    Backslash,
}

impl MirrorKind {
    /// Turns an incoming beam heading into the outgoing one.
    ///
    /// `/` maps up<->left and down<->right; `\` maps up<->right and
    /// down<->left (rows grow downward).
    pub const fn reflect(self, incoming: Direction) -> Direction {
        use Direction::*;
        match (self, incoming) {
            (Self::Slash, Up) => Left,
            (Self::Slash, Down) => Right,
            (Self::Slash, Left) => Up,
            (Self::Slash, Right) => Down,
            (Self::Backslash, Up) => Right,
            (Self::Backslash, Down) => Left,
            (Self::Backslash, Left) => Down,
            (Self::Backslash, Right) => Up,
        }
    }
}

/// The single laser emitter. It never leaves the game; only its slot and
/// heading change.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Laser {
    #[serde(default)]
    pub pos: Slot,
    pub dir: Direction,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mirror {
    #[serde(default)]
    pub pos: Slot,
    #[serde(rename = "type")]
    pub kind: MirrorKind,
}

/// Scoring piece; consumed for good when the beam strikes it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    #[serde(default)]
    pub pos: Slot,
    pub value: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    pub value: u8,
}

/// Names one piece for a place command. Mirror and target indices refer to
/// the current ordering in the game state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceId {
    Laser,
    Mirror(usize),
    Target(usize),
}
