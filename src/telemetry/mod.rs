//! Headless simulation loop for the CLI frontend.
//!
//! Runs a control script against an [`EngineState`] at a fixed tick and
//! writes one CSV record per tick:
//!
//! ```text
//! t,rpm,hp,knock,mpg,gear,boost
//! 0.200,900.0,0.0,LOW,40.00,N,0.50
//! ```

use std::io::{self, Write};

use tracing::info;

use crate::error::{Result, TunerError};
use crate::script::Command;
use crate::sim::{EngineState, TickOutput};

/// Header line of the telemetry CSV.
pub const HEADER: &str = "t,rpm,hp,knock,mpg,gear,boost";

/// Telemetry record writer.
pub struct TelemetryOutput<W: Write> {
    out: W,
}

impl<W: Write> TelemetryOutput<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the CSV header.
    pub fn write_header(&mut self) -> Result<()> {
        writeln!(self.out, "{}", HEADER).map_err(output_error)
    }

    /// Write one tick record.
    pub fn write_tick(&mut self, t: f64, tick: &TickOutput, sim: &EngineState) -> Result<()> {
        writeln!(
            self.out,
            "{:.3},{:.1},{:.1},{},{:.2},{},{:.2}",
            t,
            tick.rpm,
            tick.horsepower,
            tick.knock,
            tick.mpg,
            sim.gear(),
            sim.boost_psi()
        )
        .map_err(output_error)
    }

    /// Flush the output stream.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().map_err(output_error)
    }

    /// Recover the inner writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn output_error(e: io::Error) -> TunerError {
    TunerError::TelemetryOutput { source: e }
}

/// Summary of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunSummary {
    /// Ticks executed
    pub ticks: usize,
    /// Simulated time (s)
    pub elapsed: f64,
    /// Highest horsepower seen
    pub peak_hp: f64,
    /// Highest rpm seen
    pub peak_rpm: f64,
}

/// Run `commands` against `sim`, writing a record for every tick.
pub fn run<W: Write>(
    sim: &mut EngineState,
    commands: &[Command],
    dt: f64,
    output: &mut TelemetryOutput<W>,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    output.write_header()?;

    for cmd in commands {
        let ticks = cmd.apply(sim);
        for _ in 0..ticks {
            let tick = sim.step(dt);
            summary.ticks += 1;
            summary.elapsed += dt;
            summary.peak_hp = summary.peak_hp.max(tick.horsepower);
            summary.peak_rpm = summary.peak_rpm.max(tick.rpm);
            output.write_tick(summary.elapsed, &tick, sim)?;
        }
    }

    output.flush()?;
    info!(
        ticks = summary.ticks,
        peak_hp = summary.peak_hp,
        peak_rpm = summary.peak_rpm,
        "run complete"
    );
    Ok(summary)
}

/// Run `commands` against `sim`, writing telemetry to stdout.
pub fn run_to_stdout(sim: &mut EngineState, commands: &[Command], dt: f64) -> Result<RunSummary> {
    let stdout = io::stdout();
    let mut output = TelemetryOutput::new(stdout.lock());
    run(sim, commands, dt, &mut output)
}
