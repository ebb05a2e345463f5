use clap::{Args, Parser, Subcommand};
use nutriscore::error::AppError;
use std::path::PathBuf;

use crate::demo::{run_demo, run_fill, run_quality, run_score, DemoArgs};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "Nutri-Score Profiler",
    about = "Score food products and audit nutrition datasets from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single product from its per-100g nutrient values
    Score(ScoreArgs),
    /// Inspect or repair a product CSV export
    Dataset {
        #[command(subcommand)]
        command: DatasetCommand,
    },
    /// Run an end-to-end demo over a bundled sample table
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum DatasetCommand {
    /// Fill absent score/grade columns and write the repaired table
    Fill(FillArgs),
    /// Report per-column missing-value rates
    Quality(QualityArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Optional product name echoed in the output
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Energy per 100g, in kJ
    #[arg(long)]
    pub(crate) energy: f64,
    /// Saturated fat per 100g, in grams
    #[arg(long)]
    pub(crate) saturated_fat: f64,
    /// Sugars per 100g, in grams
    #[arg(long)]
    pub(crate) sugars: f64,
    /// Fiber per 100g, in grams
    #[arg(long)]
    pub(crate) fiber: f64,
    /// Proteins per 100g, in grams
    #[arg(long)]
    pub(crate) proteins: f64,
    /// Sodium per 100g, in milligrams
    #[arg(long)]
    pub(crate) sodium: f64,
}

#[derive(Args, Debug)]
pub(crate) struct FillArgs {
    /// Input product CSV export
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Output path for the repaired table (defaults to stdout)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct QualityArgs {
    /// Input product CSV export
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Missing-rate percentage above which a column is flagged
    #[arg(long)]
    pub(crate) threshold: Option<f64>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Dataset {
            command: DatasetCommand::Fill(args),
        } => run_fill(args),
        Command::Dataset {
            command: DatasetCommand::Quality(args),
        } => run_quality(args),
        Command::Demo(args) => run_demo(args),
    }
}
