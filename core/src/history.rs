use crate::GameState;

/// Undo and redo stacks of full-state snapshots.
///
/// Unbounded; cleared whenever a new game starts or a save file is loaded.
/// Recording a snapshot always clears the redo stack, so redo only ever
/// replays what undo just took back.
#[derive(Clone, Debug, Default)]
pub struct History {
    undo: Vec<GameState>,
    redo: Vec<GameState>,
}

impl History {
    /// Pushes the pre-mutation snapshot; called before every mutating command.
    pub fn record(&mut self, snapshot: GameState) {
        self.undo.push(snapshot);
        self.redo.clear();
    }

    /// Pops the most recent snapshot, parking `current` on the redo stack.
    /// `None` when there is nothing to undo.
    pub fn undo(&mut self, current: &GameState) -> Option<GameState> {
        let snapshot = self.undo.pop()?;
        self.redo.push(current.clone());
        Some(snapshot)
    }

    pub fn redo(&mut self, current: &GameState) -> Option<GameState> {
        let snapshot = self.redo.pop()?;
        self.undo.push(current.clone());
        Some(snapshot)
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn state(score: u32) -> GameState {
        let mut state = GameState::initial(&mut SmallRng::seed_from_u64(0));
        state.score = score;
        state
    }

    #[test]
    fn undo_returns_snapshots_most_recent_first() {
        let mut history = History::default();
        history.record(state(0));
        history.record(state(20));

        let current = state(50);
        assert_eq!(history.undo(&current).unwrap().score, 20);
        assert_eq!(history.undo(&state(20)).unwrap().score, 0);
        assert!(history.undo(&state(0)).is_none());
    }

    #[test]
    fn redo_replays_what_undo_took_back() {
        let mut history = History::default();
        history.record(state(0));

        let current = state(30);
        let restored = history.undo(&current).unwrap();
        assert_eq!(restored.score, 0);
        assert_eq!(history.redo(&restored).unwrap().score, 30);
        assert!(history.redo(&current).is_none());
    }

    #[test]
    fn recording_clears_the_redo_stack() {
        let mut history = History::default();
        history.record(state(0));
        let _ = history.undo(&state(10));
        assert!(history.can_redo());

        history.record(state(0));
        assert!(!history.can_redo());
    }
}
