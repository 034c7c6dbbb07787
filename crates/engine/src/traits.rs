//! Uniform surface over the four engines.

use arcade_core::{
    CreatureEngine, CreatureSnapshot, RandomSource, SnakeEngine, SnakeSnapshot, TetrisEngine,
    TetrisSnapshot, WordEngine, WordSnapshot,
};

use crate::types::{CreatureIntent, IntentError, SnakeIntent, TetrisIntent, TetrisOutcome, WordIntent};

/// A game as a state value plus transitions.
pub trait Engine {
    type Intent;
    type Snapshot;

    /// Apply one intent. A rejected intent leaves the state unchanged.
    fn apply_intent(&mut self, intent: Self::Intent) -> Result<(), IntentError>;

    fn snapshot(&self) -> Self::Snapshot;

    fn is_terminal(&self) -> bool;

    fn restart(&mut self);
}

/// Engines that also advance on a timer.
pub trait TimedEngine: Engine {
    /// One timer step. Returns `true` if the state changed.
    fn tick(&mut self) -> bool;

    /// Interval until the next tick, at the current state.
    fn tick_interval_ms(&self) -> u32;

    /// Whether time currently counts towards the next tick.
    fn is_ticking(&self) -> bool {
        !self.is_terminal()
    }
}

impl<R: RandomSource> Engine for WordEngine<R> {
    type Intent = WordIntent;
    type Snapshot = WordSnapshot;

    fn apply_intent(&mut self, intent: WordIntent) -> Result<(), IntentError> {
        WordEngine::apply_intent(self, intent)
    }

    fn snapshot(&self) -> WordSnapshot {
        WordEngine::snapshot(self)
    }

    fn is_terminal(&self) -> bool {
        WordEngine::is_terminal(self)
    }

    fn restart(&mut self) {
        WordEngine::restart(self)
    }
}

impl<R: RandomSource> Engine for CreatureEngine<R> {
    type Intent = CreatureIntent;
    type Snapshot = CreatureSnapshot;

    fn apply_intent(&mut self, intent: CreatureIntent) -> Result<(), IntentError> {
        CreatureEngine::apply_intent(self, intent)
    }

    fn snapshot(&self) -> CreatureSnapshot {
        CreatureEngine::snapshot(self)
    }

    fn is_terminal(&self) -> bool {
        CreatureEngine::is_terminal(self)
    }

    fn restart(&mut self) {
        CreatureEngine::restart(self)
    }
}

impl<R: RandomSource> Engine for SnakeEngine<R> {
    type Intent = SnakeIntent;
    type Snapshot = SnakeSnapshot;

    fn apply_intent(&mut self, intent: SnakeIntent) -> Result<(), IntentError> {
        SnakeEngine::apply_intent(self, intent)
    }

    fn snapshot(&self) -> SnakeSnapshot {
        SnakeEngine::snapshot(self)
    }

    fn is_terminal(&self) -> bool {
        SnakeEngine::is_terminal(self)
    }

    fn restart(&mut self) {
        SnakeEngine::restart(self)
    }
}

impl<R: RandomSource> TimedEngine for SnakeEngine<R> {
    fn tick(&mut self) -> bool {
        SnakeEngine::tick(self)
    }

    fn tick_interval_ms(&self) -> u32 {
        SnakeEngine::tick_interval_ms(self)
    }
}

impl<R: RandomSource> Engine for TetrisEngine<R> {
    type Intent = TetrisIntent;
    type Snapshot = TetrisSnapshot;

    fn apply_intent(&mut self, intent: TetrisIntent) -> Result<(), IntentError> {
        TetrisEngine::apply_intent(self, intent)
    }

    fn snapshot(&self) -> TetrisSnapshot {
        TetrisEngine::snapshot(self)
    }

    fn is_terminal(&self) -> bool {
        TetrisEngine::is_terminal(self)
    }

    fn restart(&mut self) {
        TetrisEngine::restart(self)
    }
}

impl<R: RandomSource> TimedEngine for TetrisEngine<R> {
    fn tick(&mut self) -> bool {
        TetrisEngine::tick(self)
    }

    fn tick_interval_ms(&self) -> u32 {
        self.drop_interval_ms()
    }

    fn is_ticking(&self) -> bool {
        self.outcome() == TetrisOutcome::InProgress
    }
}
