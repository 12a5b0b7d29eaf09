use clap::{ArgAction, Parser, Subcommand};
use commands::{auth, export, inspect, merge};
use std::path::PathBuf;
use std::process::ExitCode;
use traktexport_client::ClientError;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "traktexport")]
#[command(about = "Export data from your Trakt account")]
#[command(version)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Authenticate (or re-authenticate), only needs to be done once
    Auth {
        username: String,
    },
    /// Run a full export and print it to stdout
    ///
    /// Assumes authentication has already been set up. Fetches every account
    /// section plus the complete watch history and prints the raw JSON
    /// document to stdout.
    Export {
        username: String,
    },
    /// Export recent history only and print it to stdout
    ///
    /// Fetches only watch history, most recent first. Use --pages to stop
    /// early, then merge the result with an older full export to bring it up
    /// to date.
    #[command(name = "partial_export")]
    PartialExport {
        username: String,

        /// Stop after this many pages of history
        #[arg(long)]
        pages: Option<u32>,
    },
    /// Parse an export file and summarize it
    Inspect {
        file: PathBuf,
    },
    /// Merge export files into one full export
    ///
    /// Takes every non-history section from the full export with the most
    /// history and combines the history of all inputs, deduplicated by
    /// history id and sorted newest first. Merged output can be merged again.
    Merge {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

/// Distinct exit codes so scripts can tell an outage from a bad setup
fn exit_code(report: &color_eyre::Report) -> u8 {
    let client_error = report.chain().find_map(|e| e.downcast_ref::<ClientError>());
    match client_error {
        Some(e) if e.is_service_unavailable() => 3,
        Some(ClientError::NotAuthenticated) => 2,
        _ => 1,
    }
}

async fn run(cli: Cli, output: &output::Output) -> color_eyre::Result<()> {
    match cli.command {
        Commands::Auth { username } => auth::run_auth(&username, output).await,
        Commands::Export { username } => export::run_export(&username, output).await,
        Commands::PartialExport { username, pages } => {
            export::run_partial_export(&username, pages, output).await
        }
        Commands::Inspect { file } => inspect::run_inspect(&file, output),
        Commands::Merge { files } => merge::run_merge(&files, output),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = color_eyre::install() {
        eprintln!("{:?}", e);
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose, cli.quiet) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    let output = output::Output::new(cli.output, cli.quiet);

    match run(cli, &output).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            let code = exit_code(&report);
            if output.is_human() {
                eprintln!("{:?}", report);
            } else {
                output.error(format!("{:#}", report));
            }
            ExitCode::from(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use color_eyre::eyre::WrapErr;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_partial_export_args() {
        let cli = Cli::parse_from([
            "traktexport",
            "partial_export",
            "sean",
            "--pages",
            "3",
            "--output",
            "json-pretty",
        ]);
        assert_eq!(cli.output, output::OutputFormat::JsonPretty);
        match cli.command {
            Commands::PartialExport { username, pages } => {
                assert_eq!(username, "sean");
                assert_eq!(pages, Some(3));
            }
            _ => panic!("expected partial_export"),
        }
    }

    #[test]
    fn test_merge_requires_files() {
        assert!(Cli::try_parse_from(["traktexport", "merge"]).is_err());
    }

    #[test]
    fn test_exit_codes() {
        let unavailable: color_eyre::Result<()> =
            Err::<(), _>(ClientError::ServiceUnavailable { status: 503 })
                .wrap_err("Full export of sean failed");
        assert_eq!(exit_code(&unavailable.unwrap_err()), 3);

        let unauthenticated = color_eyre::Report::new(ClientError::NotAuthenticated);
        assert_eq!(exit_code(&unauthenticated), 2);

        let other = color_eyre::eyre::eyre!("bad config");
        assert_eq!(exit_code(&other), 1);
    }
}
