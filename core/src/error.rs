use thiserror::Error;

use crate::PieceId;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("no such piece: {0:?}")]
    UnknownPiece(PieceId),
    #[error(transparent)]
    Save(#[from] SaveError),
}

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("could not access the save file")]
    Io(#[from] std::io::Error),
    #[error("malformed save record")]
    Malformed(#[from] serde_json::Error),
    #[error("save record violates board invariants")]
    Invalid,
}

pub type Result<T, E = GameError> = core::result::Result<T, E>;
