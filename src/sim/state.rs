//! The engine simulation record and its tick.

use tracing::{debug, warn};

use crate::engine::{BuiltinProvider, EngineProfile, EngineProvider};
use crate::gearbox::{GearId, Gearbox};

use super::physics::{self, KnockLevel};
use super::{SimulatorConfig, REDLINE_WARNING_FRACTION};

/// Driver-set control inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    /// Throttle opening, 0..=100 %
    pub throttle_pct: f64,
    /// Ignition advance, degrees BTDC
    pub timing_deg: f64,
    /// Commanded boost (PSI)
    pub boost_cmd_psi: f64,
    /// Air-fuel ratio
    pub afr: f64,
    /// Selected gear
    pub gear: GearId,
    /// Ignition on
    pub engine_on: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            throttle_pct: 0.0,
            timing_deg: 10.0,
            boost_cmd_psi: 5.0,
            afr: 13.5,
            gear: GearId::Neutral,
            engine_on: false,
        }
    }
}

/// Outputs of one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutput {
    /// Brake horsepower
    pub horsepower: f64,
    /// Knock risk
    pub knock: KnockLevel,
    /// Fuel economy (MPG)
    pub mpg: f64,
    /// Crank speed (RPM)
    pub rpm: f64,
}

impl TickOutput {
    /// Output of a tick with the engine off.
    pub const OFF: TickOutput = TickOutput {
        horsepower: 0.0,
        knock: KnockLevel::Low,
        mpg: 0.0,
        rpm: 0.0,
    };
}

/// Simulated engine.
///
/// Owns the control inputs, the dynamic state, the gearbox, the active
/// profile and the provider profiles are selected from. One instance per
/// simulated engine; nothing is shared between instances.
pub struct EngineState {
    controls: Controls,
    config: SimulatorConfig,
    gearbox: Gearbox,
    profile: EngineProfile,
    provider: Box<dyn EngineProvider>,
    rpm: f64,
    /// Post-shift rpm target; 0 means no glide in progress
    rpm_target: f64,
    boost_psi: f64,
}

impl EngineState {
    /// Create a simulator with no engine assets (default profile).
    pub fn new() -> Self {
        Self::with_provider(Box::new(BuiltinProvider::new()))
    }

    /// Create a simulator that selects engines from `provider`.
    ///
    /// The first engine the provider lists is loaded; an empty provider
    /// gives the default profile.
    pub fn with_provider(provider: Box<dyn EngineProvider>) -> Self {
        Self::with_config(provider, SimulatorConfig::default())
    }

    /// Create a simulator with a custom configuration.
    pub fn with_config(provider: Box<dyn EngineProvider>, config: SimulatorConfig) -> Self {
        let mut state = Self {
            controls: Controls::default(),
            config,
            gearbox: Gearbox::default(),
            profile: EngineProfile::default(),
            provider,
            rpm: 0.0,
            rpm_target: 0.0,
            boost_psi: 0.0,
        };
        let first = state.provider.list().into_iter().next();
        state.load_engine(first.as_deref());
        state
    }

    /// Replace the gearbox. The current gear is kept if it still exists.
    pub fn with_gearbox(mut self, gearbox: Gearbox) -> Self {
        if gearbox.ratio(self.controls.gear) == 0.0 {
            self.controls.gear = GearId::Neutral;
        }
        self.gearbox = gearbox;
        self
    }

    // ───────────────── engine selection ──

    /// Select an engine by identifier.
    ///
    /// Unknown or absent identifiers select the default profile. The
    /// profile is replaced as a whole; rpm is clamped to the new redline.
    pub fn load_engine(&mut self, id: Option<&str>) {
        let profile = match id {
            Some(id) => match self.provider.resolve(id) {
                Some(profile) => {
                    debug!(engine = id, redline = profile.redline(), "engine loaded");
                    profile
                }
                None => {
                    warn!(engine = id, "unknown engine, using default profile");
                    EngineProfile::default()
                }
            },
            None => EngineProfile::default(),
        };
        self.set_profile(profile);
    }

    /// Install a profile directly, replacing the active one.
    pub fn set_profile(&mut self, profile: EngineProfile) {
        self.profile = profile;
        self.rpm = self.rpm.min(self.redline());
        self.rpm_target = self.rpm_target.min(self.redline());
    }

    /// Identifiers the provider offers.
    pub fn engines(&self) -> Vec<String> {
        self.provider.list()
    }

    /// The provider engines are selected from.
    pub fn provider(&self) -> &dyn EngineProvider {
        self.provider.as_ref()
    }

    // ───────────────── control inputs ──

    /// Set throttle opening, clamped to 0..=100 %. NaN is ignored.
    pub fn set_throttle(&mut self, pct: f64) {
        if let Some(v) = accept("throttle", pct) {
            self.controls.throttle_pct = v.clamp(0.0, 100.0);
        }
    }

    /// Set ignition timing (degrees BTDC). NaN is ignored.
    pub fn set_timing(&mut self, deg: f64) {
        if let Some(v) = accept("timing", deg) {
            self.controls.timing_deg = v;
        }
    }

    /// Set commanded boost, floored at 0 PSI. NaN is ignored.
    pub fn set_boost_cmd(&mut self, psi: f64) {
        if let Some(v) = accept("boost", psi) {
            self.controls.boost_cmd_psi = v.max(0.0);
        }
    }

    /// Set air-fuel ratio. NaN is ignored.
    pub fn set_afr(&mut self, afr: f64) {
        if let Some(v) = accept("afr", afr) {
            self.controls.afr = v;
        }
    }

    /// Select a gear directly, without an rpm retarget.
    pub fn set_gear(&mut self, gear: GearId) {
        self.controls.gear = gear;
    }

    /// Select a gear by name; unknown names select neutral.
    pub fn set_gear_by_name(&mut self, name: &str) {
        self.controls.gear = GearId::parse(name).unwrap_or(GearId::Neutral);
    }

    /// Switch the ignition. Turning it off stops the crank immediately
    /// and drops any pending shift target.
    pub fn set_engine_on(&mut self, on: bool) {
        self.controls.engine_on = on;
        if !on {
            self.rpm = 0.0;
            self.rpm_target = 0.0;
        }
    }

    /// Force the crank speed, clamped to `0..=redline`.
    ///
    /// Ignored while the engine is off.
    pub fn set_rpm(&mut self, rpm: f64) {
        if !self.controls.engine_on {
            return;
        }
        if let Some(v) = accept("rpm", rpm) {
            self.rpm = v.clamp(0.0, self.redline());
        }
    }

    // ───────────────── main tick ──

    /// Advance the simulation by `dt` seconds.
    ///
    /// Negative or non-finite `dt` is treated as 0.
    pub fn step(&mut self, dt: f64) -> TickOutput {
        if !self.controls.engine_on {
            self.rpm = 0.0;
            return TickOutput::OFF;
        }

        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        self.update_rpm(dt);
        self.update_boost(dt);

        let c = &self.controls;
        let curve = self.profile.curve();
        let horsepower = physics::horsepower(
            |rpm| curve.torque_at(rpm),
            self.rpm,
            self.boost_psi,
            c.afr,
            c.timing_deg,
            c.throttle_pct,
        );
        let knock = KnockLevel::classify(physics::knock_score(c.timing_deg, self.boost_psi, c.afr));
        let mpg = physics::mpg(c.throttle_pct, c.afr);

        TickOutput {
            horsepower,
            knock,
            mpg,
            rpm: self.rpm,
        }
    }

    fn update_rpm(&mut self, dt: f64) {
        let cfg = &self.config;
        let ratio = self.gearbox.ratio(self.controls.gear);
        let thr = self.controls.throttle_pct / 100.0;

        // Throttle only drives the crank when a gear is engaged
        if thr > 0.01 && ratio > 0.0 {
            let accel = cfg.accel_rate * thr * (ratio / cfg.reference_ratio);
            self.rpm += accel * dt;
        } else {
            let decay = if ratio == 0.0 {
                cfg.coast_rate_neutral
            } else {
                cfg.coast_rate_in_gear
            };
            self.rpm = (self.rpm - decay * dt).max(self.idle_rpm());
        }

        if self.rpm_target != 0.0 {
            let step = cfg.glide_rate * dt;
            let delta = self.rpm_target - self.rpm;
            if delta.abs() <= step {
                self.rpm = self.rpm_target;
                self.rpm_target = 0.0;
            } else {
                self.rpm += step.copysign(delta);
            }
        }

        self.rpm = self.rpm.clamp(0.0, self.redline());
    }

    fn update_boost(&mut self, dt: f64) {
        let lag = self.config.boost_lag_psi * (dt / self.config.reference_tick);
        let cmd = self.controls.boost_cmd_psi;
        if self.boost_psi < cmd {
            self.boost_psi = (self.boost_psi + lag).min(cmd);
        } else if self.boost_psi > cmd {
            self.boost_psi = (self.boost_psi - lag).max(cmd);
        }
    }

    // ───────────────── shifts ──

    /// Shift one gear up.
    pub fn upshift(&mut self) {
        self.shift(1);
    }

    /// Shift one gear down.
    pub fn downshift(&mut self) {
        self.shift(-1);
    }

    fn shift(&mut self, step: i32) {
        let old = self.gearbox.ratio(self.controls.gear);
        self.controls.gear = self.gearbox.next_gear(self.controls.gear, step);
        let new = self.gearbox.ratio(self.controls.gear);

        // Output shaft speed is held, so crank speed scales with the ratio.
        // The target never exceeds redline, which rpm is clamped to.
        self.rpm_target = if old > 0.0 && new > 0.0 {
            (self.rpm * (new / old)).min(self.redline())
        } else {
            0.0
        };
        debug!(gear = %self.controls.gear, target = self.rpm_target, "shift");
    }

    // ───────────────── readouts ──

    /// Current control inputs.
    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    /// Simulator constants.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Active engine profile.
    pub fn profile(&self) -> &EngineProfile {
        &self.profile
    }

    /// The gearbox.
    pub fn gearbox(&self) -> &Gearbox {
        &self.gearbox
    }

    /// Selected gear.
    pub fn gear(&self) -> GearId {
        self.controls.gear
    }

    /// Crank speed (RPM).
    pub fn rpm(&self) -> f64 {
        self.rpm
    }

    /// Pending post-shift rpm target, 0 when none.
    pub fn rpm_target(&self) -> f64 {
        self.rpm_target
    }

    /// Actual boost after turbo lag (PSI).
    pub fn boost_psi(&self) -> f64 {
        self.boost_psi
    }

    /// Redline of the active profile (RPM).
    pub fn redline(&self) -> f64 {
        self.profile.redline() as f64
    }

    /// Idle speed of the active profile (RPM).
    pub fn idle_rpm(&self) -> f64 {
        self.profile.idle_rpm() as f64
    }

    /// Whether rpm is in the redline warning zone.
    pub fn near_redline(&self) -> bool {
        self.rpm >= REDLINE_WARNING_FRACTION * self.redline()
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EngineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineState")
            .field("controls", &self.controls)
            .field("profile", &self.profile)
            .field("rpm", &self.rpm)
            .field("rpm_target", &self.rpm_target)
            .field("boost_psi", &self.boost_psi)
            .finish_non_exhaustive()
    }
}

fn accept(input: &str, value: f64) -> Option<f64> {
    if value.is_nan() {
        debug!(input, "ignoring NaN control input");
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CurveSource;
    use crate::engine::EngineDescriptor;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn running(gear: &str, throttle: f64) -> EngineState {
        let mut sim = EngineState::new();
        sim.set_engine_on(true);
        sim.set_gear_by_name(gear);
        sim.set_throttle(throttle);
        sim
    }

    #[test]
    fn test_engine_off_short_circuits() {
        let mut sim = EngineState::new();
        sim.set_throttle(100.0);
        sim.set_gear(GearId::Forward(1));
        for _ in 0..5 {
            assert_eq!(sim.step(0.2), TickOutput::OFF);
        }
        assert_eq!(sim.rpm(), 0.0);
        // Boost is not spooled while off
        assert_eq!(sim.boost_psi(), 0.0);
    }

    #[test]
    fn test_turning_off_zeroes_rpm() {
        let mut sim = running("3", 50.0);
        sim.set_rpm(4000.0);
        sim.set_engine_on(false);
        assert_eq!(sim.rpm(), 0.0);
        sim.set_rpm(3000.0);
        assert_eq!(sim.rpm(), 0.0);
    }

    #[test]
    fn test_third_gear_full_throttle() {
        let mut sim = running("3", 100.0);
        sim.set_timing(10.0);
        sim.set_afr(13.5);
        sim.set_boost_cmd(5.0);
        sim.set_rpm(3000.0);

        let out = sim.step(0.2);
        let expected = 3000.0 + 4500.0 * (1.52 / 3.8) * 0.2;
        assert_relative_eq!(out.rpm, expected, max_relative = 1e-9);
        assert!(out.rpm > 3000.0);
        assert!(out.horsepower > 0.0);
        assert_eq!(out.knock, KnockLevel::Low);
        assert_eq!(sim.boost_psi(), 0.5);
    }

    #[test]
    fn test_neutral_ignores_throttle() {
        let mut sim = running("N", 100.0);
        sim.set_rpm(3000.0);
        let out = sim.step(0.2);
        assert_relative_eq!(out.rpm, 3000.0 - 800.0 * 0.2, max_relative = 1e-9);
    }

    #[test]
    fn test_coast_in_gear_floors_at_idle() {
        let mut sim = running("2", 0.0);
        sim.set_rpm(1200.0);
        let out = sim.step(0.2);
        assert_relative_eq!(out.rpm, 960.0, max_relative = 1e-9);
        let out = sim.step(0.2);
        assert_eq!(out.rpm, 900.0);
        let out = sim.step(0.2);
        assert_eq!(out.rpm, 900.0);
    }

    #[test]
    fn test_start_settles_at_idle() {
        let mut sim = running("N", 0.0);
        let out = sim.step(0.2);
        assert_eq!(out.rpm, 900.0);
        assert_eq!(out.mpg, 40.0);
    }

    #[test]
    fn test_rpm_capped_at_redline() {
        let mut sim = running("1", 100.0);
        sim.set_rpm(7400.0);
        let out = sim.step(0.2);
        assert_eq!(out.rpm, 7500.0);
        assert!(sim.near_redline());
    }

    #[test]
    fn test_boost_lag_both_directions() {
        let mut sim = running("N", 0.0);
        sim.set_boost_cmd(1.2);
        sim.step(0.2);
        assert_relative_eq!(sim.boost_psi(), 0.5, max_relative = 1e-9);
        sim.step(0.2);
        sim.step(0.2);
        assert_relative_eq!(sim.boost_psi(), 1.2, max_relative = 1e-9);

        sim.set_boost_cmd(0.0);
        sim.step(0.1);
        assert_relative_eq!(sim.boost_psi(), 0.95, max_relative = 1e-9);
        for _ in 0..10 {
            sim.step(0.2);
        }
        assert_eq!(sim.boost_psi(), 0.0);
    }

    #[test]
    fn test_knock_high_with_spooled_boost() {
        let mut sim = running("N", 0.0);
        sim.set_afr(10.0);
        sim.set_timing(25.0);
        sim.set_boost_cmd(15.0);
        let mut out = TickOutput::OFF;
        for _ in 0..31 {
            out = sim.step(0.2);
        }
        assert_eq!(sim.boost_psi(), 15.0);
        assert_eq!(out.knock, KnockLevel::High);
    }

    #[test]
    fn test_zero_throttle_mpg_ignores_afr() {
        for afr in [9.0, 14.7, 18.0] {
            let mut sim = running("4", 0.0);
            sim.set_afr(afr);
            assert_eq!(sim.step(0.2).mpg, 40.0);
        }
    }

    #[test]
    fn test_upshift_sets_target_and_glides() {
        let mut sim = running("1", 0.0);
        sim.set_rpm(6000.0);
        sim.upshift();
        assert_eq!(sim.gear(), GearId::Forward(2));
        let target = 6000.0 * (2.3 / 3.8);
        assert_relative_eq!(sim.rpm_target(), target, max_relative = 1e-9);

        let mut ticks = 0;
        while sim.rpm_target() != 0.0 {
            let out = sim.step(0.2);
            assert!(out.rpm >= target - 1e-9, "overshot target: {}", out.rpm);
            ticks += 1;
            assert!(ticks < 10);
        }
        assert_relative_eq!(sim.rpm(), target, max_relative = 1e-9);
    }

    #[test]
    fn test_downshift_glide_converges_in_bound() {
        let mut sim = running("2", 100.0);
        sim.set_rpm(3000.0);
        sim.downshift();
        let target = sim.rpm_target();
        assert_relative_eq!(target, 3000.0 * 3.8 / 2.3, max_relative = 1e-9);

        let bound = ((target - 3000.0).abs() / 4000.0 / 0.2).ceil() as usize;
        let mut converged = false;
        for _ in 0..bound {
            let out = sim.step(0.2);
            if sim.rpm_target() == 0.0 {
                assert_relative_eq!(out.rpm, target, max_relative = 1e-9);
                converged = true;
                break;
            }
        }
        assert!(converged);
    }

    #[test]
    fn test_downshift_near_redline_coasts_down() {
        let mut sim = running("2", 0.0);
        sim.set_rpm(7000.0);
        sim.downshift();
        assert_eq!(sim.gear(), GearId::Forward(1));
        assert_eq!(sim.rpm_target(), 7500.0);

        sim.step(0.2);
        assert_eq!(sim.rpm_target(), 0.0);
        let peak = sim.rpm();
        assert_eq!(peak, 7500.0);

        let mut prev = peak;
        for _ in 0..50 {
            let rpm = sim.step(0.2).rpm;
            assert!(rpm <= prev);
            prev = rpm;
        }
        assert!(prev < peak);
        assert_eq!(prev, sim.idle_rpm());
    }

    #[test]
    fn test_engine_off_drops_shift_target() {
        let mut sim = running("1", 0.0);
        sim.set_rpm(6000.0);
        sim.upshift();
        assert!(sim.rpm_target() > 0.0);

        sim.set_engine_on(false);
        assert_eq!(sim.rpm_target(), 0.0);
        sim.step(0.2);
        sim.set_engine_on(true);
        sim.set_throttle(0.0);

        for _ in 0..10 {
            let out = sim.step(0.2);
            assert_eq!(out.rpm, sim.idle_rpm());
            assert_eq!(sim.rpm_target(), 0.0);
        }
    }

    #[test]
    fn test_engine_switch_caps_pending_target() {
        let provider = BuiltinProvider::new().with_engine(
            EngineDescriptor::new("k20").with_limits(6000, 800),
        );
        let mut sim = EngineState::with_provider(Box::new(provider));
        sim.load_engine(None);
        sim.set_engine_on(true);
        sim.set_gear(GearId::Forward(2));
        sim.set_rpm(4000.0);
        sim.downshift();
        assert!(sim.rpm_target() > 6000.0);

        sim.load_engine(Some("k20"));
        assert_eq!(sim.rpm_target(), 6000.0);
    }

    #[test]
    fn test_shift_through_neutral_clears_target() {
        let mut sim = running("1", 0.0);
        sim.set_rpm(5000.0);
        sim.downshift();
        assert_eq!(sim.gear(), GearId::Neutral);
        assert_eq!(sim.rpm_target(), 0.0);
        sim.upshift();
        assert_eq!(sim.gear(), GearId::Forward(1));
        assert_eq!(sim.rpm_target(), 0.0);
    }

    #[test]
    fn test_shift_saturates() {
        let mut sim = running("6", 0.0);
        sim.set_rpm(3000.0);
        sim.upshift();
        assert_eq!(sim.gear(), GearId::Forward(6));
        // Same ratio: target equals current rpm
        assert_relative_eq!(sim.rpm_target(), 3000.0, max_relative = 1e-9);
    }

    #[test]
    fn test_setter_validation() {
        let mut sim = EngineState::new();
        sim.set_throttle(150.0);
        assert_eq!(sim.controls().throttle_pct, 100.0);
        sim.set_throttle(-5.0);
        assert_eq!(sim.controls().throttle_pct, 0.0);
        sim.set_boost_cmd(-3.0);
        assert_eq!(sim.controls().boost_cmd_psi, 0.0);
        sim.set_afr(12.0);
        sim.set_afr(f64::NAN);
        assert_eq!(sim.controls().afr, 12.0);
        sim.set_gear_by_name("R");
        assert_eq!(sim.gear(), GearId::Neutral);
    }

    #[test]
    fn test_bad_dt_is_zero() {
        let mut sim = running("3", 100.0);
        sim.set_rpm(3000.0);
        assert_eq!(sim.step(-1.0).rpm, 3000.0);
        assert_eq!(sim.step(f64::NAN).rpm, 3000.0);
        assert_eq!(sim.step(f64::INFINITY).rpm, 3000.0);
    }

    #[test]
    fn test_load_engine_swaps_profile() {
        let provider = BuiltinProvider::new().with_engine(
            EngineDescriptor::new("k20")
                .with_limits(6000, 800)
                .with_curve(CurveSource::Table(vec![(1000.0, 100.0), (6000.0, 150.0)])),
        );
        let mut sim = EngineState::with_provider(Box::new(provider));
        assert_eq!(sim.redline(), 6000.0);
        assert_eq!(sim.idle_rpm(), 800.0);
        assert_eq!(sim.engines(), vec!["k20".to_string()]);

        sim.load_engine(Some("missing"));
        assert_eq!(sim.profile(), &EngineProfile::default());

        sim.set_engine_on(true);
        sim.set_rpm(7400.0);
        sim.load_engine(Some("k20"));
        assert_eq!(sim.rpm(), 6000.0);
        assert_eq!(sim.profile().curve().torque_at(9000.0), 150.0);

        sim.load_engine(None);
        assert_eq!(sim.redline(), 7500.0);
    }

    #[test]
    fn test_custom_gearbox_and_config() {
        let config = SimulatorConfig::new().with_boost_lag(1.0);
        let mut sim = EngineState::with_config(Box::new(BuiltinProvider::new()), config)
            .with_gearbox(Gearbox::new(vec![3.0, 1.5]).unwrap());
        sim.set_engine_on(true);
        sim.set_gear(GearId::Forward(2));
        sim.set_rpm(4000.0);
        sim.upshift();
        assert_eq!(sim.gear(), GearId::Forward(2));
        sim.downshift();
        assert_eq!(sim.gear(), GearId::Forward(1));
        // 8000 rpm would exceed the default redline
        assert_eq!(sim.rpm_target(), 7500.0);

        sim.step(0.2);
        assert_eq!(sim.boost_psi(), 1.0);
    }

    #[test]
    fn test_power_increases_with_rpm() {
        let mut sim = running("3", 70.0);
        sim.set_rpm(3000.0);
        let low = sim.step(0.2).horsepower;
        sim.set_rpm(6000.0);
        let high = sim.step(0.2).horsepower;
        assert!(high > low);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Throttle(f64),
        Boost(f64),
        Up,
        Down,
        Toggle,
        Step(f64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (-20.0f64..150.0).prop_map(Op::Throttle),
            (-5.0f64..30.0).prop_map(Op::Boost),
            Just(Op::Up),
            Just(Op::Down),
            Just(Op::Toggle),
            (0.0f64..1.0).prop_map(Op::Step),
        ]
    }

    proptest! {
        #[test]
        fn prop_rpm_within_bounds(ops in prop::collection::vec(op(), 1..200)) {
            let mut sim = EngineState::new();
            sim.set_engine_on(true);
            for op in ops {
                match op {
                    Op::Throttle(t) => sim.set_throttle(t),
                    Op::Boost(b) => sim.set_boost_cmd(b),
                    Op::Up => sim.upshift(),
                    Op::Down => sim.downshift(),
                    Op::Toggle => sim.set_engine_on(!sim.controls().engine_on),
                    Op::Step(dt) => {
                        let out = sim.step(dt);
                        prop_assert!(out.rpm >= 0.0);
                        prop_assert!(out.rpm <= sim.redline());
                        prop_assert!(sim.boost_psi() >= 0.0);
                        if !sim.controls().engine_on {
                            prop_assert_eq!(out, TickOutput::OFF);
                            prop_assert_eq!(sim.rpm(), 0.0);
                        }
                    }
                }
            }
        }
    }
}
