//! Process-wide broadcaster instance

use std::sync::OnceLock;

use super::bus::Broadcaster;
use crate::options::BroadcastOptions;

/// Global broadcaster instance
static BROADCASTER: OnceLock<Broadcaster> = OnceLock::new();

/// Get or initialize the global broadcaster
///
/// Created with default options on first use and never torn down.
pub fn broadcaster() -> &'static Broadcaster {
    BROADCASTER.get_or_init(Broadcaster::new)
}

/// Initialize the global broadcaster with custom options
///
/// Must be called before any calls to `broadcaster()`. Returns the rejected
/// options if the broadcaster has already been initialized.
pub fn init_broadcaster(options: BroadcastOptions) -> Result<(), BroadcastOptions> {
    BROADCASTER
        .set(Broadcaster::with_options(options))
        .map_err(|bus| *bus.options())
}

/// Build an argument vector from values convertible into `serde_json::Value`
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        ::std::vec![$($crate::serde_json::Value::from($arg)),*]
    };
}

/// Publish a topic on the global broadcaster
#[macro_export]
macro_rules! emit {
    ($topic:expr $(, $arg:expr)* $(,)?) => {
        $crate::broadcaster::broadcaster().publish($topic, $crate::args![$($arg),*])
    };
}

/// Subscribe a callback on the global broadcaster
#[macro_export]
macro_rules! on {
    ($topic:expr, $handler:expr) => {
        $crate::broadcaster::broadcaster().subscribe($topic, $crate::Callback::new($handler))
    };
}
