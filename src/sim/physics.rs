//! Derived engine quantities.
//!
//! All functions here are pure: they take the already-updated rpm, boost
//! and control values and return one output each.

use std::fmt;

/// Torque (lb-ft) times rpm divided by this gives horsepower.
pub const HP_CONSTANT: f64 = 5252.0;

/// Atmospheric pressure at sea level (PSI).
pub const ATMOSPHERE_PSI: f64 = 14.7;

/// Stoichiometric air-fuel ratio for gasoline.
pub const STOICH_AFR: f64 = 14.7;

/// Best fuel economy (MPG), reached at idle and when coasting.
pub const MAX_MPG: f64 = 40.0;

/// Discrete knock risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum KnockLevel {
    #[default]
    Low,
    Med,
    High,
}

impl KnockLevel {
    /// Score above which knock risk is medium.
    pub const MED_THRESHOLD: f64 = 6.0;
    /// Score above which knock risk is high.
    pub const HIGH_THRESHOLD: f64 = 12.0;

    /// Classify a knock score.
    pub fn classify(score: f64) -> Self {
        if score > Self::HIGH_THRESHOLD {
            Self::High
        } else if score > Self::MED_THRESHOLD {
            Self::Med
        } else {
            Self::Low
        }
    }

    /// Dashboard label.
    pub fn as_str(&self) -> &'static str {
        match self {
            KnockLevel::Low => "LOW",
            KnockLevel::Med => "MED",
            KnockLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for KnockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horsepower at the given operating point.
///
/// `base_hp = torque * rpm / 5252`, scaled by:
/// - volumetric efficiency `1 + boost / 14.7`
/// - AFR efficiency: 1.05 inside 12.0..=13.6, otherwise 0.9
/// - timing efficiency `1 + (timing - 10) / 100`
/// - throttle fraction
///
/// Returns 0 without consulting the torque at or below 0 rpm.
pub fn horsepower(
    torque_at: impl FnOnce(f64) -> f64,
    rpm: f64,
    boost_psi: f64,
    afr: f64,
    timing_deg: f64,
    throttle_pct: f64,
) -> f64 {
    if rpm <= 0.0 {
        return 0.0;
    }

    let base_hp = torque_at(rpm) * rpm / HP_CONSTANT;
    let ve = 1.0 + boost_psi / ATMOSPHERE_PSI;
    let afr_eff = if (12.0..=13.6).contains(&afr) { 1.05 } else { 0.9 };
    let timing_eff = 1.0 + (timing_deg - 10.0) / 100.0;
    let throttle_eff = throttle_pct / 100.0;

    base_hp * ve * afr_eff * timing_eff * throttle_eff
}

/// Knock score from over-advanced timing, high boost and rich mixtures.
pub fn knock_score(timing_deg: f64, boost_psi: f64, afr: f64) -> f64 {
    let mut score = 0.0;
    if timing_deg > 20.0 {
        score += timing_deg - 20.0;
    }
    if boost_psi > 12.0 {
        score += (boost_psi - 12.0) * 1.5;
    }
    if afr < 12.5 {
        score += (12.5 - afr) * 3.0;
    }
    score
}

/// Fuel economy in MPG.
///
/// Capped at [`MAX_MPG`] below 1% throttle, otherwise falls linearly with
/// throttle and scales with AFR relative to stoichiometric.
pub fn mpg(throttle_pct: f64, afr: f64) -> f64 {
    if throttle_pct < 1.0 {
        MAX_MPG
    } else {
        (afr / STOICH_AFR) * (1.0 - throttle_pct / 100.0) * MAX_MPG
    }
}
