//! Sorted torque table with interpolated lookup.

use crate::error::{Result, TunerError};

use super::DEFAULT_CURVE;

/// A single `(rpm, torque)` point of a torque curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    /// Crank speed in RPM
    pub rpm: f64,
    /// Torque at that speed (lb-ft)
    pub torque: f64,
}

impl CurveSample {
    /// Create a new sample.
    pub fn new(rpm: f64, torque: f64) -> Self {
        Self { rpm, torque }
    }
}

/// A torque curve.
///
/// Invariants: at least one sample, rpm strictly increasing, every value
/// finite and non-negative. The only way to build one is through
/// [`Curve::from_pairs`] / [`Curve::from_samples`] or [`Curve::default`].
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    samples: Vec<CurveSample>,
}

impl Curve {
    /// Build a curve from `(rpm, torque)` pairs in any order.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        Self::from_samples(
            pairs
                .iter()
                .map(|&(rpm, torque)| CurveSample::new(rpm, torque))
                .collect(),
        )
    }

    /// Build a curve from samples in any order.
    ///
    /// Samples are sorted by rpm. Empty input, negative or non-finite
    /// values, and repeated rpm values are rejected.
    pub fn from_samples(mut samples: Vec<CurveSample>) -> Result<Self> {
        if samples.is_empty() {
            return Err(TunerError::EmptyCurve);
        }

        for s in &samples {
            if !s.rpm.is_finite() || !s.torque.is_finite() {
                return Err(TunerError::invalid_sample(s.rpm, s.torque, "value is not finite"));
            }
            if s.rpm < 0.0 || s.torque < 0.0 {
                return Err(TunerError::invalid_sample(s.rpm, s.torque, "value is negative"));
            }
        }

        samples.sort_by(|a, b| a.rpm.total_cmp(&b.rpm));

        if let Some(pair) = samples.windows(2).find(|w| w[0].rpm == w[1].rpm) {
            return Err(TunerError::invalid_sample(
                pair[1].rpm,
                pair[1].torque,
                "rpm appears more than once",
            ));
        }

        Ok(Self { samples })
    }

    /// The sorted samples.
    pub fn samples(&self) -> &[CurveSample] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the curve has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Torque at the given rpm.
    ///
    /// Below the first sample the first torque is returned, above the last
    /// sample the last torque. In between, the two bracketing samples are
    /// found by binary search and linearly interpolated. NaN reads as the
    /// first sample.
    pub fn torque_at(&self, rpm: f64) -> f64 {
        let pts = &self.samples;
        let first = pts[0];
        let last = pts[pts.len() - 1];

        if rpm.is_nan() || rpm <= first.rpm {
            return first.torque;
        }
        if rpm >= last.rpm {
            return last.torque;
        }

        // Index of the last sample with sample.rpm <= rpm
        let i = pts.partition_point(|s| s.rpm <= rpm) - 1;
        let (p0, p1) = (pts[i], pts[i + 1]);
        p0.torque + (rpm - p0.rpm) * (p1.torque - p0.torque) / (p1.rpm - p0.rpm)
    }

    /// Peak torque and the rpm it occurs at.
    pub fn peak_torque(&self) -> CurveSample {
        self.samples
            .iter()
            .copied()
            .fold(self.samples[0], |best, s| if s.torque > best.torque { s } else { best })
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self {
            samples: DEFAULT_CURVE
                .iter()
                .map(|&(rpm, torque)| CurveSample::new(rpm, torque))
                .collect(),
        }
    }
}
