//! # Tuner Core
//!
//! A tick-driven engine behaviour simulator for live tuning dashboards.
//!
//! This library provides:
//! - Torque curves loaded from CSV or tables, with a built-in fallback
//! - A six-speed gearbox with shift stepping and ratio lookup
//! - The engine simulation: RPM dynamics, turbo lag, shift glide, and
//!   derived horsepower, knock risk and fuel economy
//! - Engine asset discovery behind a provider interface
//! - A headless simulation loop driven by control scripts (CLI only)
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`curve`] - Torque curve model and loading
//! - [`gearbox`] - Gear sequence and ratios
//! - [`engine`] - Engine profiles and providers
//! - [`sim`] - The simulation state and tick
//! - [`script`] - Control script parser (CLI only)
//! - [`telemetry`] - Headless simulation loop (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! tuner --assets assets/engines --engine k20a pull.tune > pull.csv
//! ```
//!
//! ### Library
//!
//! ```
//! use tuner_core::{EngineState, GearId};
//!
//! let mut sim = EngineState::new();
//! sim.set_engine_on(true);
//! sim.set_gear(GearId::Forward(1));
//! sim.set_throttle(100.0);
//!
//! let out = sim.step(0.2);
//! assert!(out.rpm > 0.0);
//! ```
//!
//! ## Simulation Method
//!
//! Each call to `step(dt)`:
//!
//! 1. Integrates rpm: throttle acceleration in gear, coast toward idle
//!    otherwise, glide toward any post-shift target, clamp to redline
//! 2. Moves boost toward the commanded value at a fixed lag rate
//! 3. Looks up torque on the curve and derives horsepower, knock and MPG
//!
//! The simulator is single-threaded and owns all of its state; run one
//! instance per simulated engine.

pub mod curve;
pub mod engine;
pub mod error;
pub mod gearbox;
pub mod sim;

#[cfg(feature = "cli")]
pub mod script;
#[cfg(feature = "cli")]
pub mod telemetry;

// Re-export main types for convenience
pub use curve::{Curve, CurveLoad, CurveSource};
pub use engine::{EngineProfile, EngineProvider};
pub use error::{Result, TunerError};
pub use gearbox::{GearId, Gearbox};
pub use sim::{EngineState, KnockLevel, SimulatorConfig, TickOutput};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmEngineSim;

/// Default tick length in seconds (200 ms).
pub const DEFAULT_TICK: f64 = sim::REFERENCE_TICK;
