//! Torque curve model.
//!
//! A torque curve is a table of `(rpm, torque)` samples sorted by rpm.
//! Queries between samples are linearly interpolated; queries outside the
//! table are held flat at the nearest end sample.
//!
//! Curves come from a [`CurveSource`]: nothing at all, a CSV file, or an
//! in-memory table. Loading never fails. A source that is missing or
//! malformed yields the built-in [`DEFAULT_CURVE`] and the outcome records
//! why (see [`CurveLoad`]).
//!
//! # CSV format
//!
//! ```text
//! RPM,Torque
//! 1000,180
//! 2000,230
//! ```

mod loader;
mod model;

pub use loader::{load_curve, parse_curve_csv, CurveLoad, CurveSource};
pub use model::{Curve, CurveSample};

/// Built-in fallback curve, `(rpm, torque)`.
pub const DEFAULT_CURVE: [(f64, f64); 7] = [
    (1000.0, 180.0),
    (2000.0, 230.0),
    (3000.0, 280.0),
    (4000.0, 320.0),
    (5000.0, 340.0),
    (6000.0, 330.0),
    (7000.0, 300.0),
];
