use crate::predict::{run_catalog, run_predict, PredictArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use college_predictor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "college-predictor",
    about = "Rank colleges against an entrance exam score, from the command line or over HTTP",
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
    /// Evaluate a score and print the ranked college report
    Predict(PredictArgs),
    /// List supported categories and their reference colleges
    Catalog,
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

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Predict(args) => run_predict(args),
        Command::Catalog => run_catalog(),
    }
}
