use thiserror::Error;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber, logging to stdout.
///
/// `RUST_LOG` wins over `level` when it is set and valid.
pub fn init(level: &str) -> Result<(), TracingInitError> {
    init_with_writer(level, std::io::stdout)
}

/// Same as [`init`] but logs to stderr, leaving stdout for program output.
pub fn init_stderr(level: &str) -> Result<(), TracingInitError> {
    init_with_writer(level, std::io::stderr)
}

pub fn init_with_writer<W>(level: &str, writer: W) -> Result<(), TracingInitError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|source| TracingInitError::InvalidFilter { source })?;

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(writer));

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|source| TracingInitError::SetGlobalDefault { source })?;

    Ok(())
}

#[derive(Debug, Error)]
pub enum TracingInitError {
    #[error("InvalidFilter: {source}")]
    InvalidFilter {
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("SetGlobalDefault: {source}")]
    SetGlobalDefault {
        source: tracing::subscriber::SetGlobalDefaultError,
    },
}
