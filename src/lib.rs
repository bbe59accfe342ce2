//! # Broadcast
//!
//! A lightweight, synchronous publish/subscribe facility:
//! - Topic subscriptions with optional namespaces (`"change.ui"`)
//! - Several topics per call (`"create update delete"`)
//! - Context values handed to listeners on every delivery
//! - A catch-all `"all"` topic notified after every publish
//!
//! ## Architecture
//!
//! 1. **broadcast-core** - Broadcaster, topic parsing, listeners, errors
//! 2. **broadcast-settings** - Option files (JSON/TOML) and default locations
//! 3. **broadcast** - Logging setup and the demo binary

pub mod demo;

pub use broadcast_core::{
    args, broadcaster, context, emit, init_broadcaster, on, Aliases, BroadcastError,
    BroadcastOptions, Broadcaster, Callback, Context, Delivery, Subscription, SubscriptionId,
    Topic, ALL_TOPIC,
};
pub use demo::run_demo;
pub use broadcast_settings::{
    default_options_path, load_options, load_or_default, save_options, OptionsFormat,
    SettingsError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable selecting the log output format (`pretty` or `json`)
pub const LOG_FORMAT_ENV: &str = "BROADCAST_LOG_FORMAT";

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output, pretty by default or JSON when `BROADCAST_LOG_FORMAT=json`
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    if json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stdout)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_target(true)
            .with_level(true)
            .with_thread_names(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
