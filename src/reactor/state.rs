use super::config::AMBIENT_TEMP;
use super::ramp::Ramp;
use super::stage::Stage;
use log::{debug, info};

/// Where the experiment is in its lifecycle.
///
/// ```text
/// Idle --start--> RampingLow --20 000°C--> AwaitingPlanck --start-->
///     RampingPlanck --200 ticks--> PortalOpen --reset--> Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    RampingLow,
    AwaitingPlanck,
    RampingPlanck,
    PortalOpen,
}

impl Phase {
    /// CSS class marking the lab area while in this phase
    pub fn css_class(&self) -> &'static str {
        match self {
            Phase::Idle => "phase-idle",
            Phase::RampingLow => "phase-ramping-low",
            Phase::AwaitingPlanck => "phase-awaiting-planck",
            Phase::RampingPlanck => "phase-ramping-planck",
            Phase::PortalOpen => "phase-portal-open",
        }
    }
}

/// Answer to a start request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// A ramp began; its completion will move the reactor into this stage.
    Started { toward: Stage },
    /// A ramp is already in flight. Nothing changed.
    Busy,
    /// The terminal stage has been reached. Nothing changed.
    Finished,
}

/// Answer to a timer tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// No ramp is active; the tick was stray.
    Idle,
    /// The ramp moved the temperature and is still running.
    Heating { temperature: f64 },
    /// The ramp hit its target and the reactor advanced to `stage`.
    Completed { stage: Stage },
}

/// The whole experiment state.
///
/// `animating` is derived from whether a ramp is present, so it is false
/// exactly when no ramp is in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct Reactor {
    temperature: f64,
    stage: Stage,
    portal_open: bool,
    ramp: Option<Ramp>,
}

impl Default for Reactor {
    fn default() -> Self {
        Self::new()
    }
}

impl Reactor {
    pub fn new() -> Self {
        Self {
            temperature: AMBIENT_TEMP,
            stage: Stage::Idle,
            portal_open: false,
            ramp: None,
        }
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn portal_open(&self) -> bool {
        self.portal_open
    }

    pub fn is_animating(&self) -> bool {
        self.ramp.is_some()
    }

    /// The secondary reset button is offered once the first stage is done,
    /// until the portal overlay takes over with its own reset.
    pub fn reset_offered(&self) -> bool {
        self.stage.is_upgraded() && !self.portal_open
    }

    pub fn phase(&self) -> Phase {
        match (self.stage, self.is_animating()) {
            (Stage::Idle, false) => Phase::Idle,
            (Stage::Idle, true) => Phase::RampingLow,
            (Stage::HeatingLow, false) => Phase::AwaitingPlanck,
            (Stage::HeatingLow, true) => Phase::RampingPlanck,
            (Stage::HeatingPlanck, _) => Phase::PortalOpen,
        }
    }

    /// Begin the ramp for the current stage.
    ///
    /// Ignored while another ramp is running or once the experiment is over.
    pub fn start(&mut self) -> StartOutcome {
        if self.is_animating() {
            debug!("start ignored: ramp already in flight");
            return StartOutcome::Busy;
        }
        let (ramp, toward) = match self.stage {
            Stage::Idle => (Ramp::low(self.temperature), Stage::HeatingLow),
            Stage::HeatingLow => (Ramp::planck(self.temperature), Stage::HeatingPlanck),
            Stage::HeatingPlanck => {
                debug!("start ignored: experiment finished");
                return StartOutcome::Finished;
            }
        };
        info!(
            "ramp started from {:.0}°C toward {:e}°C",
            self.temperature,
            ramp.target()
        );
        self.ramp = Some(ramp);
        StartOutcome::Started { toward }
    }

    /// Advance the active ramp by one tick.
    pub fn tick(&mut self) -> TickOutcome {
        let Some(ramp) = self.ramp.as_mut() else {
            return TickOutcome::Idle;
        };
        let step = ramp.advance();
        self.temperature = self.temperature.max(step.temperature);
        if !step.done {
            return TickOutcome::Heating {
                temperature: self.temperature,
            };
        }

        self.ramp = None;
        if let Some(next) = self.stage.next() {
            self.stage = next;
        }
        if self.stage.is_terminal() {
            self.portal_open = true;
            info!("Planck temperature reached, portal open");
        } else {
            info!("stage {} reached at {:.0}°C", self.stage.index(), self.temperature);
        }
        TickOutcome::Completed { stage: self.stage }
    }

    /// Drop the in-flight ramp without changing stage. Used when the timer
    /// for it could not be scheduled.
    pub fn abort(&mut self) -> bool {
        self.ramp.take().is_some()
    }

    /// Return to the initial state, discarding any in-flight ramp.
    pub fn reset(&mut self) {
        if self.is_animating() {
            info!("reset during ramp, ramp discarded");
        } else {
            info!("experiment reset");
        }
        *self = Self::new();
    }
}
