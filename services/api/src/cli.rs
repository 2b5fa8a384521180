use crate::demo::{run_batch, run_classify, run_demo, run_reference, BatchArgs, ClassifyArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use dv_charge::error::AppError;
use dv_charge::ReferenceKind;

#[derive(Parser, Debug)]
#[command(
    name = "DV Charge Classifier",
    about = "Classify incident descriptions into domestic-violence charge tiers",
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
    /// Classify a single incident description
    Classify(ClassifyArgs),
    /// Classify every row of an `id,description` CSV export
    Batch(BatchArgs),
    /// Print a reference guide of example injuries or conduct
    Reference {
        /// One of: moderate, great, indifference
        kind: ReferenceKind,
    },
    /// Run the documented example incidents through the classifier
    Demo,
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
        Command::Classify(args) => run_classify(args),
        Command::Batch(args) => run_batch(args),
        Command::Reference { kind } => {
            run_reference(kind);
            Ok(())
        }
        Command::Demo => {
            run_demo();
            Ok(())
        }
    }
}
