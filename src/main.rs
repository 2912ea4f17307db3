use std::path::PathBuf;

use clap::{Parser, Subcommand};

use counterkit::telemetry::init_tracing;
use counterkit::{demo, BoundedCounter, CounterConfig, CounterOverrides, Operation};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log counter internals at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Also write bunyan JSON logs to a daily rolling file in this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk through the built-in counter scenarios
    Demo,
    /// Replay a JSON list of operations against a configured counter
    Run {
        /// TOML counter config; flags below override its fields
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long, allow_negative_numbers = true)]
        initial: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        step: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i64>,
        /// JSON array of operations, e.g. ["Increment", {"Set": 8}]
        #[arg(short, long)]
        ops: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_command_line_args();

    let guard = init_tracing(args.verbose, args.log_dir.as_deref())?;

    let outcome = match args.command {
        Command::Demo => run_demo(),
        Command::Run { config, initial, step, min, max, ops } => {
            let overrides = CounterOverrides {
                initial_value: initial,
                step,
                min,
                max,
            };
            run_operations(config, overrides, ops)
        }
    };

    if let Err(e) = outcome {
        tracing::error!("counterkit failed: {}", e);
        drop(guard);
        std::process::exit(1);
    }
    Ok(())
}

fn parse_command_line_args() -> Args {
    Args::parse()
}

fn run_demo() -> Result<(), Box<dyn std::error::Error>> {
    for section in demo::run_all()? {
        println!("{}", section);
    }
    Ok(())
}

fn run_operations(
    config_path: Option<PathBuf>,
    overrides: CounterOverrides,
    ops_path: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => CounterConfig::read_file(path)?,
        None => CounterConfig::default(),
    };
    let config = overrides.apply(config);
    let mut counter = BoundedCounter::new(config)?;

    let operations = Operation::list_from_bytes(&std::fs::read(&ops_path)?)?;
    tracing::info!("Replaying {} operations from {}", operations.len(), ops_path.display());

    println!("{:<24} {}", "start", counter.value());
    for operation in operations {
        let result = operation.apply(&mut counter);
        println!("{:<24} {}", operation.to_string(), result);
    }
    Ok(())
}
