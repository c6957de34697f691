//! Command-line driver for the sine error-statistics engine.
//!
//! Runs until interrupted. SIGINT/SIGTERM stop the run after the current
//! iteration and print the final report; SIGHUP prints a snapshot without
//! stopping.
//!
//! ```bash
//! # Default run: seed 1111, 512-bit working precision, until Ctrl-C
//! sincheck
//!
//! # Reproducible capped run with JSON output
//! sincheck --seed 42 --iterations 100000 --json
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use sincheck::{constants, ComparisonEngine, Config, ControlFlags, ReportFormat};

/// Relative-error statistics for sine implementations.
#[derive(Parser, Debug)]
#[command(name = "sincheck")]
#[command(about = "Compare sine implementations against a high-precision reference")]
#[command(version)]
struct Args {
    /// RNG seed; a fixed seed makes the run fully reproducible
    #[arg(long, default_value_t = constants::DEFAULT_SEED)]
    seed: u64,

    /// Working precision in bits for the reference and the statistics
    #[arg(long, default_value_t = constants::DEFAULT_WORKING_PREC)]
    precision: u32,

    /// Stop after this many outer iterations instead of waiting for SIGINT
    #[arg(long)]
    iterations: Option<u64>,

    /// Emit reports as JSON arrays instead of text blocks
    #[arg(long)]
    json: bool,
}

/// Shared with the signal handlers; the handlers only store to atomics.
static CONTROL: ControlFlags = ControlFlags::new();

extern "C" fn on_signal(signal: libc::c_int) {
    match signal {
        libc::SIGINT | libc::SIGTERM => CONTROL.request_stop(),
        libc::SIGHUP => CONTROL.request_snapshot(),
        _ => {}
    }
}

fn install_signal_handlers() {
    unsafe {
        libc::signal(libc::SIGINT, on_signal as libc::sighandler_t);
        libc::signal(libc::SIGTERM, on_signal as libc::sighandler_t);
        libc::signal(libc::SIGHUP, on_signal as libc::sighandler_t);
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut config = Config::new().seed(args.seed).precision(args.precision);
    if let Some(n) = args.iterations {
        config = config.max_iterations(n);
    }
    if args.json {
        config = config.format(ReportFormat::Json);
    }

    let mut engine = match ComparisonEngine::new(config) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };

    install_signal_handlers();
    eprintln!(
        "{}",
        "sincheck: sampling until SIGINT; SIGHUP prints a snapshot".dimmed()
    );

    let mut out = io::stdout().lock();
    if let Err(err) = engine.run(&CONTROL, &mut out) {
        eprintln!("{} {err}", "error:".red().bold());
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
