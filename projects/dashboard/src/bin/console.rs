use std::{io, process::ExitCode};

use projects_dashboard::{
    config::{load_dotenv, Config, ConfigError},
    console::{self, ConsoleError},
    domain::repos::GitHubRepos,
};
use thiserror::Error;
use tracing::error;
use utils_trace::init_stderr as tracing_init;

#[derive(Debug, Error)]
pub enum MainError {
    #[error("TracingInit: {source}")]
    TracingInit {
        #[source]
        source: utils_trace::TracingInitError,
    },
    #[error("Config: {source}")]
    Config {
        #[source]
        source: ConfigError,
    },
    #[error("Console: {source}")]
    Console {
        #[source]
        source: ConsoleError,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(MainError::Config { source }) => {
            eprintln!("❌ {source}");
            ExitCode::FAILURE
        }
        Err(err) => {
            if !already_reported(&err) {
                error!("{err}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Fetch errors were already written to stderr by `console::run`.
fn already_reported(err: &MainError) -> bool {
    matches!(
        err,
        MainError::Console {
            source: ConsoleError::FetchRepositories { .. },
        }
    )
}

async fn run() -> Result<(), MainError> {
    tracing_init("error")
        .map_err(|source| MainError::TracingInit { source })?;

    load_dotenv();
    let config = Config::from_env()
        .map_err(|source| MainError::Config { source })?;
    let github = GitHubRepos::new(config);

    console::run(&github, &mut io::stdout().lock(), &mut io::stderr().lock())
        .await
        .map_err(|source| MainError::Console { source })?;

    Ok(())
}
