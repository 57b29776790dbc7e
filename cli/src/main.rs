//! Linrec CLI - recover linear recurrences and evaluate far terms
//!
//! Commands:
//! - solve: term N of the recurrence sampled by the given values
//! - find: minimal recurrence coefficients
//! - extend: the next terms, unrolled one by one
//! - zfunc: Z-array of a string
//! - hash: polynomial hash of a substring

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use linrec::text::{z_function, HashParams, PrefixHash};
use linrec::{RecurrenceError, RecurrenceSolver, SolverConfig, DEFAULT_MODULUS};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

mod types;

use types::*;

#[derive(Parser)]
#[command(name = "linrec")]
#[command(about = "Linear recurrences over prime fields", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Reject composite moduli with a primality test
    #[arg(long, global = true)]
    verify_modulus: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate term N of the recurrence sampled by VALUES
    Solve {
        /// Prime modulus
        #[arg(short, long, default_value_t = DEFAULT_MODULUS)]
        modulus: u64,

        /// Zero-based index of the term to evaluate
        #[arg(short = 'n', long)]
        index: u64,

        /// Even number of sample terms
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Print the minimal recurrence coefficients of VALUES
    Find {
        /// Prime modulus
        #[arg(short, long, default_value_t = DEFAULT_MODULUS)]
        modulus: u64,

        /// Even number of sample terms
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Print the COUNT terms following VALUES
    Extend {
        /// Prime modulus
        #[arg(short, long, default_value_t = DEFAULT_MODULUS)]
        modulus: u64,

        /// Number of terms to generate
        #[arg(short, long, default_value_t = 10)]
        count: usize,

        /// Even number of sample terms
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Print the Z-array of TEXT
    Zfunc {
        text: String,
    },

    /// Hash the inclusive byte range [L, R] of TEXT
    Hash {
        text: String,

        #[arg(short, long)]
        l: usize,

        #[arg(short, long)]
        r: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let verify = cli.verify_modulus;
    let result = match cli.command {
        Commands::Solve { modulus, index, values } => {
            cmd_solve(modulus, verify, index, &values).map(|r| print(&r, cli.json))
        }
        Commands::Find { modulus, values } => {
            cmd_find(modulus, verify, &values).map(|r| print(&r, cli.json))
        }
        Commands::Extend { modulus, count, values } => {
            cmd_extend(modulus, verify, count, &values).map(|r| print(&r, cli.json))
        }
        Commands::Zfunc { text } => {
            print(&cmd_zfunc(text), cli.json);
            Ok(())
        }
        Commands::Hash { text, l, r } => cmd_hash(&text, l, r).map(|r| print(&r, cli.json)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "command failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print<R: Report>(report: &R, json: bool) {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(out) => println!("{}", out),
            Err(err) => eprintln!("error: {}", err),
        }
    } else {
        println!("{}", report.render());
    }
}

fn solver(modulus: u64, verify_modulus: bool) -> Result<RecurrenceSolver, RecurrenceError> {
    let config = SolverConfig::new(modulus, verify_modulus);
    debug!(?config, "building solver");
    RecurrenceSolver::new(config)
}

fn cmd_solve(
    modulus: u64,
    verify_modulus: bool,
    index: u64,
    values: &[i64],
) -> Result<SolveReport, RecurrenceError> {
    let value = solver(modulus, verify_modulus)?.solve(values, index)?;
    Ok(SolveReport { modulus, index, value })
}

fn cmd_find(
    modulus: u64,
    verify_modulus: bool,
    values: &[i64],
) -> Result<FindReport, RecurrenceError> {
    let recurrence = solver(modulus, verify_modulus)?.find(values)?;
    Ok(FindReport {
        modulus,
        order: recurrence.order(),
        coefficients: recurrence.coefficients(),
    })
}

fn cmd_extend(
    modulus: u64,
    verify_modulus: bool,
    count: usize,
    values: &[i64],
) -> Result<ExtendReport, RecurrenceError> {
    let solver = solver(modulus, verify_modulus)?;
    let recurrence = solver.find(values)?;
    let prefix = solver.field().reduce_all(values);
    Ok(ExtendReport {
        modulus,
        order: recurrence.order(),
        terms: recurrence.extend(&prefix, count),
    })
}

fn cmd_zfunc(text: String) -> ZReport {
    let z = z_function(text.as_bytes());
    ZReport { text, z }
}

fn cmd_hash(text: &str, l: usize, r: usize) -> Result<HashReport, RecurrenceError> {
    let params = HashParams::default();
    let hash = PrefixHash::new(&params, text.as_bytes())?.query(l, r)?;
    Ok(HashReport { l, r, hash })
}
