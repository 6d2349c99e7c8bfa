//! commit-compose CLI
//!
//! Walk through a commit message form in the terminal and print the result.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use commit_compose::error::{Error, Result};
use commit_compose::repo::{RepoState, detect_repository, detect_repository_at};
use commit_compose::tui::run::run;
use commit_compose::tui::state::Outcome;
use commit_compose::tui::theme::Theme;
use commit_compose::tui::view::render_completed;

/// Exit status after Ctrl+C, following the shell convention for SIGINT.
const EXIT_INTERRUPTED: u8 = 130;

#[derive(Parser)]
#[command(name = "commit-compose")]
#[command(about = "Compose a structured commit message interactively")]
#[command(version)]
struct Cli {
    /// Check <DIR> for the repository instead of the current directory
    #[arg(short = 'C', value_name = "DIR")]
    directory: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match compose(cli.directory) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries nothing but the commit message.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "commit_compose=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

// ============================================================================
// SESSION
// ============================================================================

fn compose(directory: Option<PathBuf>) -> Result<ExitCode> {
    let state = match directory {
        Some(dir) => detect_repository_at(&dir)?,
        None => detect_repository()?,
    };

    match &state {
        RepoState::NotARepository { expected } => {
            return Err(Error::NotARepository {
                expected: expected.clone(),
            });
        }
        RepoState::Root { git_dir, .. } => info!(git_dir = %git_dir.display(), "{}", state),
    }

    let outcome = run(Theme::default()).map_err(Error::Terminal)?;

    match outcome {
        Outcome::Completed(draft) => {
            println!("{}", render_completed(&draft));
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Cancelled => Ok(ExitCode::SUCCESS),
        Outcome::Interrupted => Ok(ExitCode::from(EXIT_INTERRUPTED)),
    }
}
