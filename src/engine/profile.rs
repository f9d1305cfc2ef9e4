//! Engine profile and descriptor types.

use crate::curve::{load_curve, Curve, CurveLoad, CurveSource};

use super::{DEFAULT_IDLE_RPM, DEFAULT_REDLINE};

/// Immutable engine characteristics used by the simulator.
///
/// A profile is replaced as a whole when another engine is selected; it is
/// never edited in place.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineProfile {
    redline: u32,
    idle_rpm: u32,
    curve: Curve,
}

impl EngineProfile {
    /// Create a new profile.
    ///
    /// Redline is at least 1 RPM and idle never exceeds redline.
    pub fn new(redline: u32, idle_rpm: u32, curve: Curve) -> Self {
        let redline = redline.max(1);
        Self {
            redline,
            idle_rpm: idle_rpm.min(redline),
            curve,
        }
    }

    /// Maximum permitted RPM.
    pub fn redline(&self) -> u32 {
        self.redline
    }

    /// RPM the engine settles at with no load.
    pub fn idle_rpm(&self) -> u32 {
        self.idle_rpm
    }

    /// Torque curve.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }
}

impl Default for EngineProfile {
    fn default() -> Self {
        Self::new(DEFAULT_REDLINE, DEFAULT_IDLE_RPM, Curve::default())
    }
}

/// Descriptor of an engine as supplied by an asset source.
///
/// The curve is kept as a source and only read when the descriptor is
/// turned into a profile.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineDescriptor {
    /// Identifier used to select the engine
    pub key: String,
    /// Human-readable name
    pub display: String,
    /// Maximum permitted RPM
    pub redline: u32,
    /// Idle RPM
    pub idle_rpm: u32,
    /// Torque curve source
    pub curve_source: CurveSource,
}

impl EngineDescriptor {
    /// Create a descriptor with default limits and no curve.
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            display: key.clone(),
            key,
            redline: DEFAULT_REDLINE,
            idle_rpm: DEFAULT_IDLE_RPM,
            curve_source: CurveSource::None,
        }
    }

    /// Set the display name.
    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = display.into();
        self
    }

    /// Set redline and idle speed.
    pub fn with_limits(mut self, redline: u32, idle_rpm: u32) -> Self {
        self.redline = redline;
        self.idle_rpm = idle_rpm;
        self
    }

    /// Set the curve source.
    pub fn with_curve(mut self, source: CurveSource) -> Self {
        self.curve_source = source;
        self
    }

    /// Build the profile, loading the curve (with fallback).
    ///
    /// The curve load outcome is returned alongside so callers can tell
    /// whether the default curve was substituted.
    pub fn load(&self) -> (EngineProfile, CurveLoad) {
        let load = load_curve(&self.curve_source);
        let profile = EngineProfile::new(self.redline, self.idle_rpm, load.curve().clone());
        (profile, load)
    }

    /// Build the profile, discarding the load outcome.
    pub fn to_profile(&self) -> EngineProfile {
        self.load().0
    }
}
