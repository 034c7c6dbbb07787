//! Session - one running game driven by queued intents and elapsed time
//!
//! Hosts push intents as input arrives and call [`Session::advance`] once per
//! frame with the elapsed time. Within one call every queued intent is applied
//! in arrival order before any timer tick fires, and each tick is a single
//! atomic engine transition.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::clock::TickClock;
use crate::traits::{Engine, TimedEngine};
use crate::types::IntentError;

/// What one `advance`/`drain` call did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    pub intents_applied: u32,
    /// Rejections worth showing to the player, in order.
    pub rejected: Vec<IntentError>,
    /// Silent rejections (geometry, reversals).
    pub ignored: u32,
    pub ticks: u32,
}

impl StepReport {
    /// Whether anything in the engine may have changed.
    pub fn changed(&self) -> bool {
        self.intents_applied > 0 || self.ticks > 0
    }

    /// Most recent rejection to surface, if any.
    pub fn last_rejection(&self) -> Option<&IntentError> {
        self.rejected.last()
    }
}

/// A running game.
pub struct Session<E: Engine> {
    engine: E,
    queue: VecDeque<E::Intent>,
    clock: TickClock,
    running: bool,
}

impl<E: Engine> Session<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            queue: VecDeque::new(),
            clock: TickClock::new(),
            running: true,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn snapshot(&self) -> E::Snapshot {
        self.engine.snapshot()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pending_intents(&self) -> usize {
        self.queue.len()
    }

    /// Queue an intent for the next `advance`/`drain`. Ignored once stopped.
    pub fn push(&mut self, intent: E::Intent) {
        if self.running {
            self.queue.push_back(intent);
        }
    }

    /// Apply every queued intent in arrival order.
    pub fn drain(&mut self) -> StepReport {
        let mut report = StepReport::default();
        self.drain_into(&mut report);
        report
    }

    fn drain_into(&mut self, report: &mut StepReport) {
        while let Some(intent) = self.queue.pop_front() {
            match self.engine.apply_intent(intent) {
                Ok(()) => report.intents_applied += 1,
                Err(err) if err.is_silent() => report.ignored += 1,
                Err(err) => {
                    debug!(%err, "intent rejected");
                    report.rejected.push(err);
                }
            }
        }
    }

    /// Leave the game: pending intents and any partial tick are discarded and
    /// later calls do nothing until [`Session::restart`].
    pub fn stop(&mut self) {
        self.running = false;
        self.queue.clear();
        self.clock.reset();
        debug!("session stopped");
    }

    /// Fresh game in the same session.
    pub fn restart(&mut self) {
        self.queue.clear();
        self.clock.reset();
        self.engine.restart();
        self.running = true;
        debug!("session restarted");
    }
}

impl<E: TimedEngine> Session<E> {
    /// Apply queued intents, then fire as many whole ticks as `elapsed_ms`
    /// (plus carried-over time) allows.
    ///
    /// Paused or finished engines accumulate no time.
    pub fn advance(&mut self, elapsed_ms: u32) -> StepReport {
        let mut report = StepReport::default();
        if !self.running {
            return report;
        }

        self.drain_into(&mut report);

        if !self.engine.is_ticking() {
            self.clock.reset();
            return report;
        }

        self.clock.accumulate(elapsed_ms);
        while self.clock.take_tick(self.engine.tick_interval_ms()) {
            self.engine.tick();
            report.ticks += 1;
            if !self.engine.is_ticking() {
                self.clock.reset();
                break;
            }
        }
        if report.ticks > 0 {
            trace!(ticks = report.ticks, "session ticked");
        }
        report
    }

    /// Milliseconds until the next tick would fire, for poll timeouts.
    pub fn until_next_tick_ms(&self) -> Option<u64> {
        (self.running && self.engine.is_ticking())
            .then(|| self.clock.until_next_ms(self.engine.tick_interval_ms()))
    }
}
