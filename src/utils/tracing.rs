use color_eyre::eyre::Result;
use std::error::Error;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use super::constants::DEFAULT_LOG_FILTER;

/// Diagnostics go to stderr, stdout is reserved for the import transcript.
pub fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(())
}

/// Renders an error followed by each of its causes, one per line.
pub fn format_error_chain(e: &(dyn Error + 'static)) -> String {
    let mut report = e.to_string();
    let mut current = e.source();
    while let Some(cause) = current {
        report.push_str(&format!("\n  caused by: {}", cause));
        current = cause.source();
    }
    report
}

pub fn log_error_chain(e: &(dyn Error + 'static)) {
    tracing::error!("{}", format_error_chain(e));
}
