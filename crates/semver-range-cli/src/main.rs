mod check;
mod config;
mod demo;
mod filter;
mod parse;
mod range;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;
use std::process::ExitCode;

use config::SemverConfig;

#[derive(Parser, Debug)]
#[command(name = "semver-range")]
#[command(about = "Check semantic versions against npm-style ranges")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Print debug output (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether a version satisfies a range
    Check(check::CheckArgs),

    /// Show the components of a version
    Parse(parse::ParseArgs),

    /// Show the comparators a range expands to
    Range(range::RangeArgs),

    /// Print the versions that satisfy a range
    Filter(filter::FilterArgs),

    /// Walk through how pre-release versions interact with caret ranges
    Demo,
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

/// Dispatch a subcommand; only check and filter read semver-range.toml
fn dispatch(command: Commands, cwd: &Path) -> Result<i32> {
    match command {
        Commands::Check(check_args) => {
            let config = SemverConfig::load(cwd)?;
            check::execute(check_args, config.as_ref())
        }
        Commands::Parse(parse_args) => parse::execute(parse_args),
        Commands::Range(range_args) => range::execute(range_args),
        Commands::Filter(filter_args) => {
            let config = SemverConfig::load(cwd)?;
            filter::execute(filter_args, config.as_ref())
        }
        Commands::Demo => demo::execute(),
    }
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logging(args.verbose);

    let cwd = std::env::current_dir()?;
    dispatch(args.command, &cwd)
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
