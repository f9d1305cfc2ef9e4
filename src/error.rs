//! Error types for the engine tuning simulator.
//!
//! This module provides a unified error type [`TunerError`] that covers
//! every fallible boundary of the crate: torque curve parsing, engine asset
//! discovery, configuration, control scripts and telemetry output.
//!
//! The simulation tick itself never fails. Curve and engine problems are
//! downgraded to built-in defaults where they are loaded, and the error that
//! caused the fallback is kept (see [`crate::curve::CurveLoad`]).

use thiserror::Error;

/// Result type alias using [`TunerError`].
pub type Result<T> = std::result::Result<T, TunerError>;

/// Unified error type for all tuner operations.
#[derive(Error, Debug)]
pub enum TunerError {
    // ============ Torque Curve Errors ============
    /// A row of a curve CSV could not be parsed
    #[error("Curve parse error at line {line}: {message}")]
    CurveParse { line: usize, message: String },

    /// The curve source contained no samples
    #[error("Torque curve has no samples")]
    EmptyCurve,

    /// A curve sample is not usable (negative, non-finite or repeated rpm)
    #[error("Invalid curve sample (rpm {rpm}, torque {torque}): {message}")]
    InvalidSample {
        rpm: f64,
        torque: f64,
        message: String,
    },

    // ============ Engine Asset Errors ============
    /// Engine identifier is not known to the provider
    #[error("Unknown engine '{id}'")]
    UnknownEngine { id: String },

    /// Engine metadata file is not valid JSON
    #[error("Invalid engine metadata '{path}': {source}")]
    MetaParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    // ============ Configuration Errors ============
    /// Invalid simulator configuration value
    #[error("Invalid simulator configuration: {message}")]
    InvalidConfig { message: String },

    /// Configuration file is not valid JSON
    #[error("Invalid configuration file '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    // ============ Script Errors ============
    /// Error while parsing a control script
    #[error("Script error at line {line}: {message}")]
    ScriptParse { line: usize, message: String },

    // ============ I/O Errors ============
    /// Error reading a file
    #[error("Failed to read '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing telemetry output
    #[error("Telemetry output error: {source}")]
    TelemetryOutput {
        #[source]
        source: std::io::Error,
    },
}

impl TunerError {
    /// Create a curve parse error
    pub fn curve_parse(line: usize, message: impl Into<String>) -> Self {
        Self::CurveParse {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid sample error
    pub fn invalid_sample(rpm: f64, torque: f64, message: impl Into<String>) -> Self {
        Self::InvalidSample {
            rpm,
            torque,
            message: message.into(),
        }
    }

    /// Create a script parse error
    pub fn script(line: usize, message: impl Into<String>) -> Self {
        Self::ScriptParse {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a file read error
    pub fn file_read(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::FileReadError {
            path: path.display().to_string(),
            source,
        }
    }
}
