//! Logging initialization.
//!
//! One init surface with two output formats: compact console lines for
//! interactive use and JSON for log aggregation. The choice rides on
//! configuration so deployments pick their sink without code changes;
//! filtering follows `RUST_LOG` when set.

use std::str::FromStr;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// Log Format
// =============================================================================

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-oriented compact console lines.
    #[default]
    Compact,
    /// One JSON object per line, for log aggregation.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "Unknown log format: '{other}'. Expected 'compact' or 'json'"
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compact => write!(formatter, "compact"),
            Self::Json => write!(formatter, "json"),
        }
    }
}

// =============================================================================
// Subscriber Installation
// =============================================================================

/// Installs the global tracing subscriber.
///
/// The filter honors `RUST_LOG` and defaults to info for this crate and
/// the HTTP trace layer. The registry can only be installed once per
/// process; `main` is the only caller.
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("nuromancy=info,tower_http=info"));

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact())
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("compact", LogFormat::Compact)]
    #[case("COMPACT", LogFormat::Compact)]
    #[case("json", LogFormat::Json)]
    #[case("Json", LogFormat::Json)]
    fn test_log_format_from_str_valid(#[case] input: &str, #[case] expected: LogFormat) {
        assert_eq!(input.parse::<LogFormat>(), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("pretty")]
    #[case("yaml")]
    fn test_log_format_from_str_invalid(#[case] input: &str) {
        let error = input.parse::<LogFormat>().unwrap_err();
        assert!(error.contains("Unknown log format"));
    }

    #[rstest]
    fn test_log_format_defaults_to_compact() {
        assert_eq!(LogFormat::default(), LogFormat::Compact);
    }

    #[rstest]
    fn test_log_format_display_round_trips() {
        assert_eq!(LogFormat::Compact.to_string(), "compact");
        assert_eq!(LogFormat::Json.to_string(), "json");
        assert_eq!(
            LogFormat::Compact.to_string().parse::<LogFormat>(),
            Ok(LogFormat::Compact)
        );
    }
}
