use crate::report::{run_assess, run_tracks, AssessArgs, TracksArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use skill_quest::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Skill Quest",
    about = "Run the Skill Quest learner-progress API or score skills offline",
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
    /// List career domains and the tracks in each
    Tracks(TracksArgs),
    /// Score a skills CSV against a catalog track and print the readiness report
    Assess(AssessArgs),
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
        Command::Tracks(args) => run_tracks(args),
        Command::Assess(args) => run_assess(args),
    }
}
