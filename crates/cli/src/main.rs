//! Branch predictor simulator CLI.
//!
//! Replays a branch trace through one predictor and prints its accuracy. It performs:
//! 1. **Configuration:** Built-in defaults, optionally a JSON file, then the `--predictor` option.
//! 2. **Simulation:** Reads `<pc> <outcome>` records from a file or stdin, predicting and
//!    training on each in order.
//! 3. **Report:** Prints the predictor name, branch count, mispredictions and misprediction rate.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use bpsim_core::bru::perceptron::PerceptronPredictor;
use bpsim_core::sim::TraceReader;
use bpsim_core::{BranchPredictor, Config, PredictorEngine, PredictorType, SimError, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "bpsim",
    author,
    version,
    about = "Trace-driven branch predictor simulator",
    long_about = "Replay a branch trace through a predictor and report its misprediction rate.\n\nTrace lines are '<hex pc> <0|1>'. Without a TRACE argument the trace is read from stdin, so compressed traces can be piped in.\n\nExamples:\n  bpsim --predictor gshare:13 traces/fp_1\n  bzip2 -dc traces/int_1.bz2 | bpsim -p tournament:9:10:10\n  bpsim --config sweep.json traces/mm_1"
)]
struct Cli {
    /// Trace file to replay (stdin when omitted).
    trace: Option<PathBuf>,

    /// Predictor: static | gshare:<G> | tournament:<G>:<L>:<P> | custom.
    #[arg(short, long, value_name = "SPEC")]
    predictor: Option<Config>,

    /// JSON configuration file; --predictor overrides its scheme and widths.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log every branch (prediction and outcome) to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let result = load_config(&cli).and_then(|config| {
        init_tracing(config.log_level());
        run(&cli, &config)
    });

    if let Err(e) = result {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    }
}

/// Installs a stderr subscriber at `level`; `RUST_LOG` overrides it.
fn init_tracing(level: Level) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::from_level(level).into())
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Merges the configuration sources, later ones winning.
fn load_config(cli: &Cli) -> Result<Config, SimError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };
    if let Some(option) = &cli.predictor {
        config.apply_predictor(option);
    }
    config.verbose |= cli.verbose;
    Ok(config)
}

/// Builds the engine, replays the trace and prints the report.
///
/// The custom slot is filled with the bundled perceptron policy.
fn run(cli: &Cli, config: &Config) -> Result<(), SimError> {
    let engine = match config.predictor {
        PredictorType::Custom => PredictorEngine::with_custom(
            config,
            Box::new(PerceptronPredictor::from_config(config)?),
        )?,
        _ => PredictorEngine::new(config)?,
    };

    let mut sim = Simulator::with_engine(engine, config.verbose);
    let stats = match &cli.trace {
        Some(path) => *sim.run(TraceReader::from_path(path)?)?,
        None => *sim.run(TraceReader::new(io::stdin().lock()))?,
    };

    println!("{}", sim.engine().name());
    println!("{stats}");
    Ok(())
}
