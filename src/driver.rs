//! Connects the [`Reactor`] state machine to a browser interval timer.

use crate::analytics::{track, Milestone};
use crate::error::PortalError;
use crate::haptics::{vibrate_rumble, vibrate_tick};
use crate::reactor::config::TICK_MS;
use crate::reactor::{Reactor, Stage, StartOutcome, TickOutcome, TimerHandle, TimerSlot};
use leptos::leptos_dom::helpers::{set_interval_with_handle, IntervalHandle};
use leptos::*;
use log::{debug, warn};
use std::time::Duration;

impl TimerHandle for IntervalHandle {
    fn cancel(&self) {
        self.clear();
    }
}

/// Reactive handle on the experiment.
///
/// Holds the reactor state as a signal for the view, and the single live
/// ramp timer. Copyable so it can be moved into event handlers freely.
#[derive(Clone, Copy)]
pub struct ReactorDriver {
    reactor: RwSignal<Reactor>,
    timer: StoredValue<TimerSlot<IntervalHandle>>,
}

impl ReactorDriver {
    /// Create the driver in the current reactive scope. The timer is
    /// cancelled when that scope is disposed.
    pub fn new() -> Self {
        let driver = Self {
            reactor: create_rw_signal(Reactor::new()),
            timer: store_value(TimerSlot::new()),
        };
        on_cleanup(move || driver.cancel_timer());
        driver
    }

    pub fn state(&self) -> ReadSignal<Reactor> {
        self.reactor.read_only()
    }

    /// Start the ramp for the current stage. No-op while one is running.
    pub fn start(&self) {
        let outcome = self
            .reactor
            .try_update(Reactor::start)
            .unwrap_or(StartOutcome::Busy);
        let StartOutcome::Started { toward } = outcome else {
            return;
        };

        vibrate_tick();
        track(match toward {
            Stage::HeatingPlanck => Milestone::PlanckStarted,
            _ => Milestone::HeatingStarted,
        });

        match self.schedule() {
            Ok(handle) => self.timer.update_value(|slot| slot.arm(handle)),
            Err(e) => {
                warn!("{}", e);
                self.reactor.update(|r| {
                    r.abort();
                });
            }
        }
    }

    /// Stop any in-flight ramp and return the reactor to its initial state.
    pub fn reset(&self) {
        self.cancel_timer();
        self.reactor.update(Reactor::reset);
        vibrate_tick();
        track(Milestone::ExperimentReset);
    }

    fn schedule(&self) -> Result<IntervalHandle, PortalError> {
        let driver = *self;
        set_interval_with_handle(move || driver.on_tick(), Duration::from_millis(TICK_MS))
            .map_err(PortalError::schedule)
    }

    fn on_tick(&self) {
        match self.reactor.try_update(Reactor::tick) {
            Some(TickOutcome::Heating { .. }) => {}
            Some(TickOutcome::Completed { stage }) => {
                self.cancel_timer();
                if stage.is_terminal() {
                    vibrate_rumble();
                    track(Milestone::PortalOpened);
                }
            }
            // Stray tick, or the signal is gone with its scope
            Some(TickOutcome::Idle) | None => self.cancel_timer(),
        }
    }

    fn cancel_timer(&self) {
        if self.timer.try_update_value(|slot| slot.cancel()).is_none() {
            debug!("timer slot already disposed");
        }
    }
}

impl Default for ReactorDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_timer_is_quiet_when_idle_or_disposed() {
        let runtime = create_runtime();
        let driver = ReactorDriver::new();

        // Nothing armed yet
        driver.cancel_timer();
        assert_eq!(driver.state().get_untracked(), Reactor::new());

        runtime.dispose();
        // Slot is gone with the runtime; cancelling must not panic
        driver.cancel_timer();
    }
}
