//! Simulator tuning constants.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TunerError};

use super::REFERENCE_TICK;

/// Rate constants for the RPM and boost models.
///
/// The defaults reproduce the reference behaviour; a JSON file may override
/// any subset of fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Full-throttle acceleration in first gear (RPM/s).
    pub accel_rate: f64,
    /// Ratio that `accel_rate` is normalised to (first gear).
    pub reference_ratio: f64,
    /// Coast-down rate in neutral (RPM/s).
    pub coast_rate_neutral: f64,
    /// Coast-down rate in gear (RPM/s).
    pub coast_rate_in_gear: f64,
    /// Rate at which rpm glides to a post-shift target (RPM/s).
    pub glide_rate: f64,
    /// Boost change per reference tick (PSI).
    pub boost_lag_psi: f64,
    /// Tick length the boost lag is calibrated for (s).
    pub reference_tick: f64,
    /// Tick length a driver should use when it has no other cadence (s).
    pub dt: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            accel_rate: 4500.0,
            reference_ratio: 3.8,
            coast_rate_neutral: 800.0,
            coast_rate_in_gear: 1200.0,
            glide_rate: 4000.0,
            boost_lag_psi: 0.5,
            reference_tick: REFERENCE_TICK,
            dt: REFERENCE_TICK,
        }
    }
}

impl SimulatorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file and validate it.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| TunerError::file_read(path, e))?;
        Self::from_json_str(&text).map_err(|e| match e {
            TunerError::ConfigParse { source, .. } => TunerError::ConfigParse {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })
    }

    /// Parse a configuration from JSON text and validate it.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).map_err(|e| TunerError::ConfigParse {
            path: "<inline>".to_string(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Set the full-throttle first-gear acceleration (RPM/s).
    pub fn with_accel_rate(mut self, accel_rate: f64) -> Self {
        self.accel_rate = accel_rate;
        self
    }

    /// Set the coast-down rates for neutral and in gear (RPM/s).
    pub fn with_coast_rates(mut self, neutral: f64, in_gear: f64) -> Self {
        self.coast_rate_neutral = neutral;
        self.coast_rate_in_gear = in_gear;
        self
    }

    /// Set the shift glide rate (RPM/s).
    pub fn with_glide_rate(mut self, glide_rate: f64) -> Self {
        self.glide_rate = glide_rate;
        self
    }

    /// Set the boost change per reference tick (PSI).
    ///
    /// Larger values spool faster:
    /// - 0.5 (default): laggy single turbo
    /// - 2.0: small twin-scroll
    pub fn with_boost_lag(mut self, psi_per_tick: f64) -> Self {
        self.boost_lag_psi = psi_per_tick;
        self
    }

    /// Set the tick length the boost lag is calibrated for (s).
    pub fn with_reference_tick(mut self, reference_tick: f64) -> Self {
        self.reference_tick = reference_tick;
        self
    }

    /// Set the default driver tick length (s).
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Check that every rate is finite and positive.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("accel_rate", self.accel_rate),
            ("reference_ratio", self.reference_ratio),
            ("coast_rate_neutral", self.coast_rate_neutral),
            ("coast_rate_in_gear", self.coast_rate_in_gear),
            ("glide_rate", self.glide_rate),
            ("boost_lag_psi", self.boost_lag_psi),
            ("reference_tick", self.reference_tick),
            ("dt", self.dt),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(TunerError::invalid_config(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SimulatorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SimulatorConfig::new()
            .with_accel_rate(6000.0)
            .with_coast_rates(500.0, 900.0)
            .with_glide_rate(3000.0)
            .with_boost_lag(1.0)
            .with_reference_tick(0.1)
            .with_dt(0.05);
        assert_eq!(config.accel_rate, 6000.0);
        assert_eq!(config.coast_rate_neutral, 500.0);
        assert_eq!(config.coast_rate_in_gear, 900.0);
        assert_eq!(config.glide_rate, 3000.0);
        assert_eq!(config.boost_lag_psi, 1.0);
        assert_eq!(config.dt, 0.05);
        assert_eq!(config.reference_tick, 0.1);
    }

    #[test]
    fn test_partial_json() {
        let config = SimulatorConfig::from_json_str(r#"{"glide_rate": 2500.0}"#).unwrap();
        assert_eq!(config.glide_rate, 2500.0);
        assert_eq!(config.accel_rate, 4500.0);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            SimulatorConfig::new().with_dt(0.0).validate(),
            Err(TunerError::InvalidConfig { .. })
        ));
        assert!(matches!(
            SimulatorConfig::from_json_str(r#"{"accel_rate": -1.0}"#),
            Err(TunerError::InvalidConfig { .. })
        ));
        assert!(matches!(
            SimulatorConfig::from_json_str(r#"{"accel_rate": "fast"}"#),
            Err(TunerError::ConfigParse { .. })
        ));
    }
}
