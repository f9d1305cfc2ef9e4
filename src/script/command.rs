//! Script commands.

use crate::gearbox::GearId;
use crate::sim::EngineState;

/// A single script command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Set throttle (%)
    Throttle(f64),
    /// Set ignition timing (degrees BTDC)
    Timing(f64),
    /// Set commanded boost (PSI)
    Boost(f64),
    /// Set air-fuel ratio
    Afr(f64),
    /// Select a gear without retargeting rpm
    Gear(GearId),
    /// Ignition on
    EngineOn,
    /// Ignition off
    EngineOff,
    /// Shift up one gear
    Upshift,
    /// Shift down one gear
    Downshift,
    /// Select an engine; `None` selects the default profile
    Engine(Option<String>),
    /// Run this many ticks
    Step(usize),
}

impl Command {
    /// Apply the command to a simulator.
    ///
    /// Returns the number of ticks to run afterwards, which is non-zero
    /// only for [`Command::Step`].
    pub fn apply(&self, sim: &mut EngineState) -> usize {
        match self {
            Command::Throttle(v) => sim.set_throttle(*v),
            Command::Timing(v) => sim.set_timing(*v),
            Command::Boost(v) => sim.set_boost_cmd(*v),
            Command::Afr(v) => sim.set_afr(*v),
            Command::Gear(g) => sim.set_gear(*g),
            Command::EngineOn => sim.set_engine_on(true),
            Command::EngineOff => sim.set_engine_on(false),
            Command::Upshift => sim.upshift(),
            Command::Downshift => sim.downshift(),
            Command::Engine(id) => sim.load_engine(id.as_deref()),
            Command::Step(n) => return *n,
        }
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_setters() {
        let mut sim = EngineState::new();
        assert_eq!(Command::Throttle(40.0).apply(&mut sim), 0);
        assert_eq!(Command::Gear(GearId::Forward(2)).apply(&mut sim), 0);
        assert_eq!(Command::EngineOn.apply(&mut sim), 0);
        assert_eq!(sim.controls().throttle_pct, 40.0);
        assert_eq!(sim.gear(), GearId::Forward(2));
        assert!(sim.controls().engine_on);

        Command::Upshift.apply(&mut sim);
        assert_eq!(sim.gear(), GearId::Forward(3));
    }

    #[test]
    fn test_apply_step_returns_count() {
        let mut sim = EngineState::new();
        assert_eq!(Command::Step(7).apply(&mut sim), 7);
    }
}
