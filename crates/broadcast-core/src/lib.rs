//! # Broadcast Core
//!
//! Synchronous topic-based publish/subscribe.
//! Provides the [`Broadcaster`], topic parsing, listener callbacks and the
//! process-wide broadcaster instance.

pub mod broadcaster;
pub mod error;
pub mod listener;
pub mod options;
pub mod topic;

pub use broadcaster::{
    broadcaster, init_broadcaster, Aliases, Broadcaster, Subscription, SubscriptionId,
};
pub use error::{BroadcastError, Result};
pub use listener::{context, Callback, Context, Delivery, ListenerFn};
pub use options::BroadcastOptions;
pub use topic::{parse_topics, Topic, ALL_TOPIC, NAMESPACE_SEPARATOR};

#[doc(hidden)]
pub use serde_json;
