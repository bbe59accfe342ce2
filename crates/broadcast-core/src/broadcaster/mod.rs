//! # Broadcaster Module
//!
//! A synchronous, in-process publish/subscribe hub keyed by topic name.
//!
//! ## Overview
//!
//! - Listeners subscribe to one or more topics, optionally namespaced
//!   (`"change.ui"`), optionally with a bound context
//! - Publishing a topic runs its listeners in registration order on the
//!   calling thread, then notifies the `"all"` listeners
//! - Namespaces allow bulk removal (`unsubscribe(".ui")`)
//!
//! ## Usage
//!
//! ```rust
//! use broadcast_core::{args, Broadcaster, Callback};
//!
//! let events = Broadcaster::new();
//! let say = Callback::new(|delivery| {
//!     println!("{}", delivery.args()[0]);
//!     Ok(())
//! });
//!
//! events.subscribe("say", say.clone());
//! events.publish("say", args!["Hello World"]).unwrap();
//! events.unsubscribe_callback("say", &say);
//! ```

mod aliases;
mod bus;
mod global;
mod subscription;

pub use aliases::Aliases;
pub use bus::Broadcaster;
pub use global::{broadcaster, init_broadcaster};
pub use subscription::{Subscription, SubscriptionId};
