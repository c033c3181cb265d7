//! Logging and tracing configuration
//!
//! All diagnostics go to stderr so the comparison tool owns stdout.

use std::ffi::OsString;
use std::io::IsTerminal;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "corediff=info,warn";

/// Initialize tracing for the CLI (stderr logging)
///
/// Logs are controlled by the `RUST_LOG` environment variable.
/// Default level is INFO for this crate, WARN for dependencies.
/// Escape codes are only written when stderr is a terminal.
pub fn init_cli() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let ansi = stderr_color();

    // Error labels printed with `colored` follow the same decision
    colored::control::set_override(ansi);

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

/// Whether stderr output should be colored
pub fn stderr_color() -> bool {
    use_color(std::io::stderr().is_terminal(), std::env::var_os("NO_COLOR"))
}

/// `NO_COLOR` set to anything non-empty disables color even on a terminal
fn use_color(is_terminal: bool, no_color: Option<OsString>) -> bool {
    is_terminal && no_color.map_or(true, |v| v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piped_output_is_never_colored() {
        assert!(!use_color(false, None));
        assert!(!use_color(false, Some(OsString::new())));
    }

    #[test]
    fn test_terminal_is_colored_unless_no_color() {
        assert!(use_color(true, None));
        assert!(use_color(true, Some(OsString::new())));
        assert!(!use_color(true, Some(OsString::from("1"))));
    }
}
