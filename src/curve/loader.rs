//! Curve sources and fallback loading.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{Result, TunerError};

use super::Curve;

/// Where a torque curve comes from.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CurveSource {
    /// No curve supplied; the default curve is used.
    #[default]
    None,
    /// A CSV file with an optional `RPM,Torque` header.
    Path(PathBuf),
    /// An in-memory `(rpm, torque)` table.
    Table(Vec<(f64, f64)>),
}

/// Outcome of loading a curve.
#[derive(Debug)]
pub enum CurveLoad {
    /// The source was read successfully.
    Loaded(Curve),
    /// The default curve was substituted.
    ///
    /// `reason` is `None` when no source was given at all, otherwise the
    /// error that made the source unusable.
    Defaulted {
        curve: Curve,
        reason: Option<TunerError>,
    },
}

impl CurveLoad {
    /// The curve to simulate with, whichever path produced it.
    pub fn curve(&self) -> &Curve {
        match self {
            CurveLoad::Loaded(curve) => curve,
            CurveLoad::Defaulted { curve, .. } => curve,
        }
    }

    /// Consume the outcome and keep the curve.
    pub fn into_curve(self) -> Curve {
        match self {
            CurveLoad::Loaded(curve) => curve,
            CurveLoad::Defaulted { curve, .. } => curve,
        }
    }

    /// Whether the built-in default curve was substituted.
    pub fn is_defaulted(&self) -> bool {
        matches!(self, CurveLoad::Defaulted { .. })
    }
}

/// Load a curve, falling back to [`Curve::default`] on any failure.
///
/// Failures are logged at `warn` level and kept in the returned outcome.
pub fn load_curve(source: &CurveSource) -> CurveLoad {
    let result = match source {
        CurveSource::None => {
            return CurveLoad::Defaulted {
                curve: Curve::default(),
                reason: None,
            }
        }
        CurveSource::Path(path) => read_curve_file(path),
        CurveSource::Table(pairs) => Curve::from_pairs(pairs),
    };

    match result {
        Ok(curve) => CurveLoad::Loaded(curve),
        Err(err) => {
            warn!(source = ?source, error = %err, "unusable torque curve, using built-in default");
            CurveLoad::Defaulted {
                curve: Curve::default(),
                reason: Some(err),
            }
        }
    }
}

fn read_curve_file(path: &Path) -> Result<Curve> {
    let content = std::fs::read_to_string(path).map_err(|e| TunerError::file_read(path, e))?;
    parse_curve_csv(&content)
}

/// Parse CSV text into a curve.
///
/// Each data line holds `rpm,torque`. A first line that is not numeric is
/// taken as the header and skipped. Blank lines are ignored. Any other line
/// that does not parse as two numbers is an error.
pub fn parse_curve_csv(input: &str) -> Result<Curve> {
    let mut pairs = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match parse_row(line) {
            Ok(pair) => pairs.push(pair),
            Err(_) if idx == 0 => continue,
            Err(message) => return Err(TunerError::curve_parse(line_no, message)),
        }
    }

    Curve::from_pairs(&pairs)
}

fn parse_row(line: &str) -> std::result::Result<(f64, f64), String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 2 {
        return Err(format!("expected 2 fields, found {}", fields.len()));
    }

    let rpm = fields[0]
        .parse::<f64>()
        .map_err(|_| format!("invalid rpm {:?}", fields[0]))?;
    let torque = fields[1]
        .parse::<f64>()
        .map_err(|_| format!("invalid torque {:?}", fields[1]))?;
    Ok((rpm, torque))
}
