//! Tuner - Headless Engine Simulator
//!
//! Runs a control script against the engine simulator and writes one CSV
//! telemetry record per tick to stdout.
//!
//! # Usage
//!
//! ```bash
//! tuner --assets assets/engines --engine k20a pull.tune > pull.csv
//! echo -e "on\ngear 1\nthrottle 100\nstep 20" | tuner
//! ```

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tuner_core::{
    engine::{BuiltinProvider, DirectoryProvider, EngineProvider},
    error::{Result, TunerError},
    script, telemetry, EngineState, SimulatorConfig,
};

/// Engine tuning simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Control script (reads stdin when omitted)
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Engine asset folder to scan for engines
    #[arg(short, long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Engine to select at start (defaults to the first one found)
    #[arg(short, long, value_name = "ID")]
    engine: Option<String>,

    /// Tick length in seconds (overrides the config file)
    #[arg(long, value_name = "SECONDS")]
    dt: Option<f64>,

    /// JSON file overriding simulator constants
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// List the engines found and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tuner_core=info,tuner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    // Simulator constants
    let mut config = match &args.config {
        Some(path) => SimulatorConfig::from_json_file(path)?,
        None => SimulatorConfig::default(),
    };
    if let Some(dt) = args.dt {
        config = config.with_dt(dt);
        config.validate()?;
    }

    // Engine assets
    let provider: Box<dyn EngineProvider> = match &args.assets {
        Some(root) => Box::new(DirectoryProvider::scan(root)?),
        None => Box::new(BuiltinProvider::new()),
    };

    if args.list {
        for id in provider.list() {
            let name = provider.display_name(&id).unwrap_or_else(|| id.clone());
            println!("{}\t{}", id, name);
        }
        return Ok(());
    }

    // Control script
    let commands = match &args.script {
        Some(path) => script::parse_file(path)?,
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .map_err(|e| TunerError::file_read(std::path::Path::new("<stdin>"), e))?;
            script::parse(&input)?
        }
    };

    // Create simulator
    let dt = config.dt;
    let mut sim = EngineState::with_config(provider, config);
    if let Some(id) = &args.engine {
        let profile = sim.provider().require(id)?;
        sim.set_profile(profile);
    }

    // Run
    telemetry::run_to_stdout(&mut sim, &commands, dt)?;

    Ok(())
}
