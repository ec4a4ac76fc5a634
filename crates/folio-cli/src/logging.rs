use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

/// Install the global subscriber; logs go to stderr
///
/// `RUST_LOG` wins over `--log-level`. Interactive commands log nothing unless
/// `RUST_LOG` asks for it, since stderr shares the terminal with the TUI.
pub fn init(level: LogLevel, interactive: bool) {
    let fallback = if interactive {
        "off".to_string()
    } else {
        level.to_string()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A subscriber may already be installed (e.g. when embedded); keep it.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
