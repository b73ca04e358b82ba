//! Fixed experiment constants. Nothing here is user-configurable.

/// Temperature the reactor starts at and returns to on reset, in °C.
pub const AMBIENT_TEMP: f64 = 20.0;

/// Target of the first heating stage, in °C.
pub const LOW_TARGET: f64 = 20_000.0;

/// Planck temperature, target of the second heating stage, in °C.
pub const PLANCK_TEMP: f64 = 1.417e32;

/// Number of ticks the log-space Planck ramp takes.
pub const PLANCK_STEPS: u32 = 200;

/// The low ramp closes `1 / LOW_STEP_DIVISOR` of the remaining gap per tick.
pub const LOW_STEP_DIVISOR: f64 = 100.0;

/// Period of the ramp timer in milliseconds.
pub const TICK_MS: u64 = 30;
