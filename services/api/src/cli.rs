use crate::report::{run_score, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use disc_profile::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "disc-profile",
    about = "Score DISC assessment answers over HTTP or from the command line",
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
    /// Score an answer file and print the resulting profile
    Score(ScoreArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Token map to resolve selections with: trait-keys, column-letters, or a JSON file
    #[arg(long)]
    pub(crate) token_map: Option<String>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["disc-profile"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn score_subcommand_parses_flags() {
        let cli = Cli::try_parse_from([
            "disc-profile",
            "score",
            "--answers",
            "answers.csv",
            "--token-map",
            "column-letters",
            "--report",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.answers, PathBuf::from("answers.csv"));
                assert_eq!(args.token_map.as_deref(), Some("column-letters"));
                assert!(args.report);
                assert!(!args.json);
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }
}
