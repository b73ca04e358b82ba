mod bands;
pub mod config;
mod format;
mod ramp;
mod stage;
mod state;
mod timer;

pub use bands::{band_for, core_glow, Band, CoreColor, BANDS};
pub use format::{format_celsius, format_temperature};
pub use ramp::{Ramp, RampStep};
pub use stage::{Stage, StageProfile};
pub use state::{Phase, Reactor, StartOutcome, TickOutcome};
pub use timer::{TimerHandle, TimerSlot};
