//! Logger setup for the service.

use std::io::Write;

use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Installs the global `env_logger` logger.
///
/// `RUST_LOG` is read first, then `level` is applied on top of it for this
/// crate and as the default for everything else. HTTP client and server
/// internals never log below `info`.
///
/// `Plain` writes one coloured line per record; `Json` writes one object per
/// line with `ts` (Unix millis), `level`, `target` and `msg`.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=up_down=debug,reqwest=info up_down --api-key secret
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for noisy in ["reqwest", "hyper", "hyper_util"] {
        builder.filter_module(noisy, LevelFilter::Info);
    }
    builder.filter_module("up_down", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| writeln!(buf, "{}", json_line(record)));
        }
        LogFormat::Plain => {
            colored::control::set_override(true);
            builder.format(|buf, record| {
                let (marker, label) = level_style(record.level());
                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    marker,
                    record.target().cyan(),
                    label,
                    record.args()
                )
            });
        }
    }

    builder.try_init()?;
    Ok(())
}

fn json_line(record: &Record<'_>) -> serde_json::Value {
    serde_json::json!({
        "ts": chrono::Utc::now().timestamp_millis(),
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    })
}

/// Emoji marker and coloured label for a level.
fn level_style(level: Level) -> (&'static str, ColoredString) {
    let label = level.as_str();
    match level {
        Level::Error => ("❌", label.red()),
        Level::Warn => ("⚠️", label.yellow()),
        Level::Info => ("✔️", label.green()),
        Level::Debug => ("🔍", label.blue()),
        Level::Trace => ("🔬", label.purple()),
    }
}
