mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lectern", about = "Read PDFs and send passages for translation or analysis")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to the platform config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show file name, digest, DOI and page count of a PDF
    Info(commands::info::InfoArgs),
    /// Print the extracted text of a PDF
    Text(commands::text::TextArgs),
    /// Print the first DOI found in a PDF
    Doi(commands::doi::DoiArgs),
    /// Send text for translation and stream the answer
    Translate(commands::exchange::ExchangeArgs),
    /// Send text for analysis and stream the answer
    Analyze(commands::exchange::ExchangeArgs),
    /// Print or save the default configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();
    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Text(args) => commands::text::run(args),
        Commands::Doi(args) => commands::doi::run(args),
        Commands::Translate(args) => {
            commands::exchange::run(args, lectern_core::exchange::ExchangeKind::Translate, config)
        }
        Commands::Analyze(args) => {
            commands::exchange::run(args, lectern_core::exchange::ExchangeKind::Analyze, config)
        }
        Commands::Config(args) => commands::config::run(args, config),
    }
}
