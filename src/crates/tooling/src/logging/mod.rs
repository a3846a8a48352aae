//! Logging utilities
//!
//! Subscriber setup plus small helpers for structured logging with tracing.

use crate::{Result, ToolingError};
use regex::Regex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use std::time::{Duration, Instant};
use tracing::debug;
use tracing_subscriber::EnvFilter;

static SUBSCRIBER_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Install the global fmt subscriber
///
/// `RUST_LOG` takes precedence over `default_filter`. Returns `Ok(false)`
/// when a subscriber was already installed by an earlier call.
///
/// ```rust,ignore
/// tooling::logging::init_logging("info,action_bridge=debug")?;
/// ```
pub fn init_logging(default_filter: &str) -> Result<bool> {
    if SUBSCRIBER_INSTALLED.swap(true, Ordering::SeqCst) {
        return Ok(false);
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| ToolingError::Logging(e.to_string()))?;

    Ok(true)
}

/// Log execution time of a future at debug level
///
/// ```rust,ignore
/// let actions = timed("capability discovery", source.discover()).await?;
/// ```
pub async fn timed<F, T>(name: &str, future: F) -> T
where
    F: std::future::Future<Output = T>,
{
    let start = Instant::now();
    debug!("Starting: {}", name);

    let result = future.await;

    debug!("Completed: {} in {}", name, format_duration(start.elapsed()));
    result
}

/// Format duration in human-readable form
///
/// ```rust
/// use tooling::logging::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();

    if micros < 1000 {
        format!("{}μs", micros)
    } else if micros < 1_000_000 {
        format!("{}ms", micros / 1000)
    } else if micros < 60_000_000 {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    } else {
        let seconds = micros / 1_000_000;
        format!("{}m{}s", seconds / 60, seconds % 60)
    }
}

fn redaction_patterns() -> &'static [(Regex, &'static str)] {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (r"(?i)(private[\s_-]?key)\s*[:=]\s*\S+", "$1: [REDACTED]"),
            (r"(?i)(api[\s_-]?key|apikey)\s*[:=]\s*\S+", "$1: [REDACTED]"),
            (r"(?i)(password|passwd|pwd)\s*[:=]\s*\S+", "$1: [REDACTED]"),
            (r"(?i)(token)\s*[:=]\s*\S+", "$1: [REDACTED]"),
            (r"(?i)(secret)\s*[:=]\s*\S+", "$1: [REDACTED]"),
            (
                r"(?i)(authorization|auth)\s*:\s*bearer\s+\S+",
                "$1: Bearer [REDACTED]",
            ),
            // raw 32-byte hex keys
            (r"\b0x[0-9a-fA-F]{64}\b", "[REDACTED]"),
        ]
        .into_iter()
        .filter_map(|(pattern, replacement)| {
            Regex::new(pattern).ok().map(|re| (re, replacement))
        })
        .collect()
    })
}

/// Sanitize string for logging
///
/// Replaces key material and common secret patterns with redacted markers.
///
/// ```rust
/// use tooling::logging::sanitize_for_logging;
///
/// let sanitized = sanitize_for_logging("private_key=0xdeadbeef");
/// assert!(sanitized.contains("[REDACTED]"));
/// ```
pub fn sanitize_for_logging(input: &str) -> String {
    redaction_patterns()
        .iter()
        .fold(input.to_string(), |acc, (re, replacement)| {
            re.replace_all(&acc, *replacement).into_owned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_micros(500)), "500μs");
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m5s");
    }

    #[test]
    fn test_sanitize_private_key() {
        let sanitized = sanitize_for_logging("EVM_PRIVATE_KEY=0xabc123");
        assert!(sanitized.contains("[REDACTED]"));
        assert!(!sanitized.contains("0xabc123"));
    }

    #[test]
    fn test_sanitize_raw_hex_key() {
        let key = format!("0x{}", "a1".repeat(32));
        let sanitized = sanitize_for_logging(&format!("signing with {}", key));
        assert_eq!(sanitized, "signing with [REDACTED]");
    }

    #[test]
    fn test_sanitize_bearer_token() {
        let sanitized = sanitize_for_logging("Authorization: Bearer abc123xyz");
        assert!(sanitized.contains("[REDACTED]"));
        assert!(!sanitized.contains("abc123xyz"));
    }

    #[test]
    fn test_sanitize_preserves_safe_data() {
        let input = "stake 10 ETH on behalf of user-42";
        assert_eq!(sanitize_for_logging(input), input);
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        let first = init_logging("warn");
        assert!(first.is_ok());
        assert!(!init_logging("debug").unwrap());
    }

    #[tokio::test]
    async fn test_timed() {
        let result = timed("test_operation", async { 42 }).await;
        assert_eq!(result, 42);
    }
}
