//! Tick-driven engine simulation.
//!
//! [`EngineState`] owns the control inputs, the dynamic state (rpm, boost,
//! pending shift target), the gearbox and the active engine profile. Each
//! call to [`EngineState::step`] advances the state by `dt` seconds:
//!
//! 1. Engine off: rpm is forced to 0 and the tick ends.
//! 2. RPM: accelerate under throttle when in gear, otherwise coast toward
//!    idle; then glide toward any pending shift target; clamp to redline.
//! 3. Boost: approach the commanded boost at a fixed lag rate.
//! 4. Derived outputs: horsepower, knock level and fuel economy.
//!
//! The derived quantities are pure functions in [`physics`] so they can be
//! checked on their own.

mod config;
pub mod physics;
mod state;

pub use config::SimulatorConfig;
pub use physics::KnockLevel;
pub use state::{Controls, EngineState, TickOutput};

/// Reference tick length in seconds (200 ms).
pub const REFERENCE_TICK: f64 = 0.2;

/// Fraction of redline at which a dashboard should show the danger zone.
pub const REDLINE_WARNING_FRACTION: f64 = 0.95;
