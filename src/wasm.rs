//! WASM bindings for Tuner Core.
//!
//! This module provides JavaScript-friendly bindings so a browser dashboard
//! can drive the simulator from a `setInterval` loop.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmEngineSim } from 'tuner_core';
//!
//! await init();
//!
//! const sim = new WasmEngineSim();
//! sim.set_engine_on(true);
//! sim.set_gear("1");
//! sim.set_throttle(80);
//!
//! setInterval(() => {
//!   sim.step(0.2);
//!   gauge.update(sim.rpm, sim.horsepower, sim.knock, sim.mpg);
//! }, 200);
//! ```

use wasm_bindgen::prelude::*;

use crate::curve::CurveSource;
use crate::engine::{BuiltinProvider, EngineDescriptor};
use crate::sim::{EngineState, TickOutput};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible engine simulator.
///
/// Wraps the native `EngineState` and keeps the outputs of the last tick so
/// JavaScript can read them as properties.
#[wasm_bindgen]
pub struct WasmEngineSim {
    state: EngineState,
    last: TickOutput,
}

#[wasm_bindgen]
impl WasmEngineSim {
    /// Create a simulator running the default engine profile.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmEngineSim {
        WasmEngineSim {
            state: EngineState::new(),
            last: TickOutput::OFF,
        }
    }

    /// Create a simulator with a single engine built from a flat curve table.
    ///
    /// # Arguments
    /// * `redline` - Maximum RPM
    /// * `idle_rpm` - Idle RPM
    /// * `curve` - Interleaved `[rpm0, torque0, rpm1, torque1, ...]`; an
    ///   empty or malformed table falls back to the default curve
    #[wasm_bindgen]
    pub fn with_engine(redline: u32, idle_rpm: u32, curve: &[f64]) -> WasmEngineSim {
        let table = curve.chunks_exact(2).map(|p| (p[0], p[1])).collect();
        let provider = BuiltinProvider::new().with_engine(
            EngineDescriptor::new("custom")
                .with_limits(redline, idle_rpm)
                .with_curve(CurveSource::Table(table)),
        );
        WasmEngineSim {
            state: EngineState::with_provider(Box::new(provider)),
            last: TickOutput::OFF,
        }
    }

    /// Advance by `dt` seconds.
    #[wasm_bindgen]
    pub fn step(&mut self, dt: f64) {
        self.last = self.state.step(dt);
    }

    #[wasm_bindgen]
    pub fn set_throttle(&mut self, pct: f64) {
        self.state.set_throttle(pct);
    }

    #[wasm_bindgen]
    pub fn set_timing(&mut self, deg: f64) {
        self.state.set_timing(deg);
    }

    #[wasm_bindgen]
    pub fn set_boost_cmd(&mut self, psi: f64) {
        self.state.set_boost_cmd(psi);
    }

    #[wasm_bindgen]
    pub fn set_afr(&mut self, afr: f64) {
        self.state.set_afr(afr);
    }

    /// Select a gear by name (`"N"`, `"1"` ... `"6"`).
    #[wasm_bindgen]
    pub fn set_gear(&mut self, name: &str) {
        self.state.set_gear_by_name(name);
    }

    #[wasm_bindgen]
    pub fn set_engine_on(&mut self, on: bool) {
        self.state.set_engine_on(on);
    }

    #[wasm_bindgen]
    pub fn upshift(&mut self) {
        self.state.upshift();
    }

    #[wasm_bindgen]
    pub fn downshift(&mut self) {
        self.state.downshift();
    }

    #[wasm_bindgen(getter)]
    pub fn rpm(&self) -> f64 {
        self.last.rpm
    }

    #[wasm_bindgen(getter)]
    pub fn horsepower(&self) -> f64 {
        self.last.horsepower
    }

    /// Knock level of the last tick: `"LOW"`, `"MED"` or `"HIGH"`.
    #[wasm_bindgen(getter)]
    pub fn knock(&self) -> String {
        self.last.knock.as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn mpg(&self) -> f64 {
        self.last.mpg
    }

    #[wasm_bindgen(getter)]
    pub fn boost(&self) -> f64 {
        self.state.boost_psi()
    }

    #[wasm_bindgen(getter)]
    pub fn gear(&self) -> String {
        self.state.gear().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn redline(&self) -> f64 {
        self.state.redline()
    }

    /// Whether the tachometer should show the danger zone.
    #[wasm_bindgen(getter)]
    pub fn near_redline(&self) -> bool {
        self.state.near_redline()
    }
}

impl Default for WasmEngineSim {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the reference tick length in seconds.
#[wasm_bindgen]
pub fn reference_tick() -> f64 {
    crate::sim::REFERENCE_TICK
}
