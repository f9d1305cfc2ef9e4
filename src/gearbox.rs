//! Gear selection and ratio table.
//!
//! The gearbox holds an ordered shift sequence, neutral first, followed by
//! the forward gears. Neutral always has ratio 0, which the simulator reads
//! as "drivetrain disconnected".

use std::fmt;

use crate::error::{Result, TunerError};

/// Standard six-speed forward ratios, first gear first.
pub const STANDARD_RATIOS: [f64; 6] = [3.8, 2.3, 1.52, 1.0, 0.8, 0.65];

/// A gear position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GearId {
    /// Neutral (ratio 0)
    #[default]
    Neutral,
    /// Forward gear, numbered from 1
    Forward(u8),
}

impl GearId {
    /// Parse a gear name: `N` (any case) or a forward gear number.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("n") {
            return Some(Self::Neutral);
        }
        match s.parse::<u8>() {
            Ok(n) if n > 0 => Some(Self::Forward(n)),
            _ => None,
        }
    }

    /// Check if this is neutral.
    pub fn is_neutral(&self) -> bool {
        matches!(self, Self::Neutral)
    }
}

impl fmt::Display for GearId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GearId::Neutral => write!(f, "N"),
            GearId::Forward(n) => write!(f, "{}", n),
        }
    }
}

/// Ordered gear sequence with ratios.
#[derive(Debug, Clone, PartialEq)]
pub struct Gearbox {
    /// Forward ratios; index 0 is first gear
    forward: Vec<f64>,
}

impl Gearbox {
    /// Create a gearbox from forward ratios, first gear first.
    ///
    /// Every ratio must be finite and positive, and there must be at least
    /// one forward gear.
    pub fn new(forward: Vec<f64>) -> Result<Self> {
        if forward.is_empty() {
            return Err(TunerError::invalid_config("gearbox needs at least one forward gear"));
        }
        if forward.len() > u8::MAX as usize {
            return Err(TunerError::invalid_config("too many forward gears"));
        }
        if let Some(bad) = forward.iter().find(|r| !r.is_finite() || **r <= 0.0) {
            return Err(TunerError::invalid_config(format!(
                "gear ratio must be positive, got {}",
                bad
            )));
        }
        Ok(Self { forward })
    }

    /// Number of forward gears.
    pub fn forward_gears(&self) -> usize {
        self.forward.len()
    }

    /// The full shift sequence, neutral first.
    pub fn order(&self) -> Vec<GearId> {
        std::iter::once(GearId::Neutral)
            .chain((1..=self.forward.len()).map(|n| GearId::Forward(n as u8)))
            .collect()
    }

    /// Ratio of the given gear. Neutral and unknown gears give 0.
    pub fn ratio(&self, gear: GearId) -> f64 {
        match gear {
            GearId::Neutral => 0.0,
            GearId::Forward(n) => self
                .forward
                .get((n as usize).wrapping_sub(1))
                .copied()
                .unwrap_or(0.0),
        }
    }

    /// Ratio of a gear given by name. Unparseable names give 0.
    pub fn ratio_by_name(&self, name: &str) -> f64 {
        GearId::parse(name).map(|g| self.ratio(g)).unwrap_or(0.0)
    }

    /// Gear reached by moving `step` positions through the shift sequence.
    ///
    /// The move saturates at neutral and at the top gear. A current gear
    /// that is not part of the sequence shifts to neutral.
    pub fn next_gear(&self, current: GearId, step: i32) -> GearId {
        let Some(idx) = self.index_of(current) else {
            return GearId::Neutral;
        };
        let last = self.forward.len() as i64;
        let next = (idx as i64 + step as i64).clamp(0, last);
        if next == 0 {
            GearId::Neutral
        } else {
            GearId::Forward(next as u8)
        }
    }

    fn index_of(&self, gear: GearId) -> Option<usize> {
        match gear {
            GearId::Neutral => Some(0),
            GearId::Forward(n) if n >= 1 && (n as usize) <= self.forward.len() => Some(n as usize),
            GearId::Forward(_) => None,
        }
    }
}

impl Default for Gearbox {
    fn default() -> Self {
        Self {
            forward: STANDARD_RATIOS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gear_names() {
        assert_eq!(GearId::parse("N"), Some(GearId::Neutral));
        assert_eq!(GearId::parse("n"), Some(GearId::Neutral));
        assert_eq!(GearId::parse("3"), Some(GearId::Forward(3)));
        assert_eq!(GearId::parse("0"), None);
        assert_eq!(GearId::parse("R"), None);
        assert_eq!(GearId::Forward(4).to_string(), "4");
        assert_eq!(GearId::Neutral.to_string(), "N");
    }

    #[test]
    fn test_standard_ratios() {
        let gb = Gearbox::default();
        assert_eq!(gb.ratio(GearId::Neutral), 0.0);
        assert_eq!(gb.ratio(GearId::Forward(1)), 3.8);
        assert_eq!(gb.ratio(GearId::Forward(3)), 1.52);
        assert_eq!(gb.ratio(GearId::Forward(6)), 0.65);
    }

    #[test]
    fn test_unknown_gear_ratio_is_zero() {
        let gb = Gearbox::default();
        assert_eq!(gb.ratio(GearId::Forward(7)), 0.0);
        assert_eq!(gb.ratio(GearId::Forward(0)), 0.0);
        assert_eq!(gb.ratio_by_name("R"), 0.0);
        assert_eq!(gb.ratio_by_name("2"), 2.3);
    }

    #[test]
    fn test_next_gear_steps_and_saturates() {
        let gb = Gearbox::default();
        assert_eq!(gb.next_gear(GearId::Neutral, 1), GearId::Forward(1));
        assert_eq!(gb.next_gear(GearId::Forward(1), -1), GearId::Neutral);
        assert_eq!(gb.next_gear(GearId::Neutral, -1), GearId::Neutral);
        assert_eq!(gb.next_gear(GearId::Forward(6), 1), GearId::Forward(6));
        assert_eq!(gb.next_gear(GearId::Forward(3), 10), GearId::Forward(6));
        assert_eq!(gb.next_gear(GearId::Forward(3), -10), GearId::Neutral);
    }

    #[test]
    fn test_next_gear_from_unknown_is_neutral() {
        let gb = Gearbox::default();
        assert_eq!(gb.next_gear(GearId::Forward(9), 1), GearId::Neutral);
        assert_eq!(gb.next_gear(GearId::Forward(0), -1), GearId::Neutral);
    }

    #[test]
    fn test_custom_gearbox() {
        let gb = Gearbox::new(vec![3.0, 1.5]).unwrap();
        assert_eq!(gb.order(), vec![GearId::Neutral, GearId::Forward(1), GearId::Forward(2)]);
        assert_eq!(gb.next_gear(GearId::Forward(2), 1), GearId::Forward(2));
        assert!(Gearbox::new(vec![]).is_err());
        assert!(Gearbox::new(vec![2.0, 0.0]).is_err());
    }
}
