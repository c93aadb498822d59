use std::error::Error;

use tracing::{level_filters::LevelFilter, Level};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::format::FmtSpan;

/// Installs the JSON subscriber and routes `log` records (teloxide's) into it.
pub fn init(level: Level) -> Result<(), Box<dyn Error + Send + Sync>> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::from_level(level))
        .json()
        .with_span_events(FmtSpan::ENTER)
        .log_internal_errors(true)
        .with_line_number(true)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    LogTracer::init()?;
    Ok(())
}
