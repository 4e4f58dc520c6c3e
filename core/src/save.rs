//! JSON save-file codec.
//!
//! The on-disk shape is the state record itself:
//!
//! ```json
//! {
//!   "score": 50,
//!   "laser": {"pos": [3, 3], "dir": "right"},
//!   "points": [{"pos": null, "value": 20}],
//!   "mirrors": [{"pos": [5, 5], "type": "\\"}],
//!   "dice": [{"value": 4}, {"value": 2}]
//! }
//! ```
//!
//! A missing `pos` reads back as unplaced; a missing `score`, `dir`, `value`
//! or `type` fails the whole load.

use std::fs;
use std::path::Path;

use crate::{GameState, SaveError};

/// File name used when the caller does not pick one.
pub const DEFAULT_SAVE_FILE: &str = "lazer_showdown_save.json";

pub fn to_json(state: &GameState) -> Result<String, SaveError> {
    Ok(serde_json::to_string(state)?)
}

pub fn from_json(json: &str) -> Result<GameState, SaveError> {
    let state: GameState = serde_json::from_str(json)?;
    state.validate()?;
    Ok(state)
}

pub fn write_file(path: &Path, state: &GameState) -> Result<(), SaveError> {
    fs::write(path, to_json(state)?)?;
    log::debug!("saved game to {}", path.display());
    Ok(())
}

pub fn read_file(path: &Path) -> Result<GameState, SaveError> {
    let state = from_json(&fs::read_to_string(path)?)?;
    log::debug!("loaded game from {}", path.display());
    Ok(state)
}
