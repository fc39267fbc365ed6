use crate::commands::{
    run_catalog, run_curve, run_recommend, CatalogArgs, CurveArgs, RecommendArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use steel_atlas::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Steel Atlas",
    about = "Browse knife steels, get recommendations and simulate tempering from the command line",
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
    /// Rank steels against questionnaire answers
    Recommend(RecommendArgs),
    /// Read a steel's tempering curve at a given temperature
    Curve(CurveArgs),
    /// List catalog steels, optionally filtered
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Load the steel catalog from this CSV instead of the configured source
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::Curve(args) => run_curve(args),
        Command::Catalog(args) => run_catalog(args),
    }
}
