use std::path::Path;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::{
    Cell, Command, CommandOutcome, Direction, GameState, History, HistoryOutcome, Mirror,
    MirrorKind, PieceId, PlaceOutcome, Result, Slot, Trace, beam, in_bounds, save, state::roll,
};

/// Owns the live state, the undo/redo history, and the dice RNG.
///
/// Commands are synchronous and run to completion; every mutating command
/// first records the pre-mutation snapshot so undo can take it back. The
/// session performs no I/O beyond the explicit save and load commands.
#[derive(Clone, Debug)]
pub struct GameSession {
    state: GameState,
    history: History,
    rng: SmallRng,
}

impl GameSession {
    /// Starts a fresh game. The seed fixes the dice sequence, so replays
    /// are reproducible.
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let state = GameState::initial(&mut rng);
        Self {
            state,
            history: History::default(),
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome> {
        Ok(match command {
            Command::Place { piece, cell } => CommandOutcome::Placed(self.place(piece, cell)?),
            Command::RotateLaser => CommandOutcome::Rotated(self.rotate_laser()),
            Command::RollDice => CommandOutcome::Rolled(self.roll_dice()),
            Command::Fire => CommandOutcome::Fired(self.fire()),
            Command::Undo => CommandOutcome::History(self.undo()),
            Command::Redo => CommandOutcome::History(self.redo()),
            Command::Reset => {
                self.reset();
                CommandOutcome::Reset
            }
            Command::Save { path } => {
                self.save_to(path.as_deref())?;
                CommandOutcome::Saved
            }
            Command::Load { path } => {
                self.load_from(path.as_deref())?;
                CommandOutcome::Loaded
            }
        })
    }

    /// Drops `piece` onto `cell`. The drop lands iff the cell is on the
    /// board and no other piece occupies it; any rejected drop sends the
    /// piece back to the palette instead of erroring. Placing a mirror
    /// restocks the palette with a fresh mirror of the same orientation.
    pub fn place(&mut self, piece: PieceId, cell: Cell) -> Result<PlaceOutcome> {
        // Validate the id before touching history, so a stale index cannot
        // burn an undo step.
        let prior = self.slot_of(piece)?;
        self.checkpoint();

        let mut occupied = self.state.occupied_cells();
        if let Some(own) = prior {
            occupied.remove(&own);
        }

        let accepted = in_bounds(cell) && !occupied.contains(&cell);
        self.set_slot(piece, accepted.then_some(cell));

        if accepted {
            log::debug!("placed {piece:?} at {cell:?}");
            if let PieceId::Mirror(index) = piece {
                self.restock_mirror(self.state.mirrors[index].kind);
            }
            Ok(PlaceOutcome::Placed)
        } else {
            log::debug!("rejected drop of {piece:?} at {cell:?}, back to the palette");
            Ok(PlaceOutcome::ReturnedToPalette)
        }
    }

    /// Advances the emitter's heading one stop clockwise.
    pub fn rotate_laser(&mut self) -> Direction {
        self.checkpoint();
        self.state.laser.dir = self.state.laser.dir.rotated();
        self.state.laser.dir
    }

    /// Re-rolls every die, returning the new faces.
    pub fn roll_dice(&mut self) -> Vec<u8> {
        self.checkpoint();
        for die in &mut self.state.dice {
            die.value = roll(&mut self.rng);
        }
        self.state.dice.iter().map(|die| die.value).collect()
    }

    /// Fires the laser. A struck target is consumed and its value added to
    /// the score; with the emitter unplaced this is a recorded no-op.
    pub fn fire(&mut self) -> Trace {
        self.checkpoint();
        let trace = beam::trace(&self.state);
        if let Some(hit) = trace.hit {
            self.state.score += hit.value;
            self.state.targets.remove(hit.target);
            log::debug!(
                "scored {} at {:?}, total {}",
                hit.value,
                hit.cell,
                self.state.score
            );
        }
        trace
    }

    pub fn undo(&mut self) -> HistoryOutcome {
        match self.history.undo(&self.state) {
            Some(snapshot) => {
                self.state = snapshot;
                HistoryOutcome::Restored
            }
            None => HistoryOutcome::NoChange,
        }
    }

    pub fn redo(&mut self) -> HistoryOutcome {
        match self.history.redo(&self.state) {
            Some(snapshot) => {
                self.state = snapshot;
                HistoryOutcome::Restored
            }
            None => HistoryOutcome::NoChange,
        }
    }

    /// Starts over: fresh baseline state, both history stacks cleared.
    pub fn reset(&mut self) {
        self.state = GameState::initial(&mut self.rng);
        self.history.clear();
        log::debug!("game reset");
    }

    pub fn save_to(&self, path: Option<&Path>) -> Result<()> {
        let path = path.unwrap_or(Path::new(save::DEFAULT_SAVE_FILE));
        save::write_file(path, &self.state)?;
        Ok(())
    }

    /// Atomic: on any error the current state and history are untouched.
    /// A successful load becomes the new baseline and clears the history.
    pub fn load_from(&mut self, path: Option<&Path>) -> Result<()> {
        let path = path.unwrap_or(Path::new(save::DEFAULT_SAVE_FILE));
        let state = save::read_file(path)?;
        self.state = state;
        self.history.clear();
        Ok(())
    }

    fn checkpoint(&mut self) {
        self.history.record(self.state.clone());
    }

    /// Keeps the palette stocked: after a mirror lands on the board, make
    /// sure an unplaced mirror of the same orientation is still on offer.
    /// Targets deliberately get no such treatment.
    fn restock_mirror(&mut self, kind: MirrorKind) {
        let spare = self
            .state
            .mirrors
            .iter()
            .any(|mirror| mirror.pos.is_none() && mirror.kind == kind);
        if !spare {
            self.state.mirrors.push(Mirror { pos: None, kind });
        }
    }

    fn slot_of(&self, piece: PieceId) -> Result<Slot> {
        use crate::GameError::UnknownPiece;
        match piece {
            PieceId::Laser => Ok(self.state.laser.pos),
            PieceId::Mirror(index) => self
                .state
                .mirrors
                .get(index)
                .map(|mirror| mirror.pos)
                .ok_or(UnknownPiece(piece)),
            PieceId::Target(index) => self
                .state
                .targets
                .get(index)
                .map(|target| target.pos)
                .ok_or(UnknownPiece(piece)),
        }
    }

    fn set_slot(&mut self, piece: PieceId, slot: Slot) {
        match piece {
            PieceId::Laser => self.state.laser.pos = slot,
            PieceId::Mirror(index) => self.state.mirrors[index].pos = slot,
            PieceId::Target(index) => self.state.targets[index].pos = slot,
        }
    }
}
