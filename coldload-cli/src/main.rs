use clap::{Parser, Subcommand};
use std::io;

use coldload_cli::cli::{cmd_calculate, cmd_insulation, cmd_presets, cmd_products, CalculateOptions};

/// coldload - refrigeration cooling-load calculator for cold rooms and freezers
#[derive(Parser, Debug)]
#[command(name = "coldload", version, author, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate the cooling load of a room
    Calculate(CalculateOptions),
    /// List the embedded presets
    Presets,
    /// Print the product catalog
    Products,
    /// Print the insulation U-factor table
    Insulation,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG, when set, takes precedence over --verbose
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Calculate(options) => cmd_calculate(&options, &mut out).map(|_| ()),
        Command::Presets => cmd_presets(&mut out),
        Command::Products => cmd_products(&mut out),
        Command::Insulation => cmd_insulation(&mut out),
    }
}
