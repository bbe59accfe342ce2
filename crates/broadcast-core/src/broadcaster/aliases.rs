//! Alternate method names for the broadcaster

use serde_json::Value;

use super::bus::Broadcaster;
use crate::error::Result;
use crate::listener::{Callback, Context};

/// Alias surface of a [`Broadcaster`].
///
/// Only available when the broadcaster was built with
/// [`BroadcastOptions::alias_on`](crate::BroadcastOptions::alias_on) set.
/// Every method forwards to its canonical counterpart.
#[derive(Debug, Clone, Copy)]
pub struct Aliases<'a> {
    broadcaster: &'a Broadcaster,
}

impl<'a> Aliases<'a> {
    pub(crate) fn new(broadcaster: &'a Broadcaster) -> Self {
        Self { broadcaster }
    }

    /// Alias of [`Broadcaster::subscribe`]
    pub fn on(&self, topic: &str, callback: Callback) -> &'a Broadcaster {
        self.broadcaster.subscribe(topic, callback)
    }

    /// Alias of [`Broadcaster::subscribe_with_context`]
    pub fn on_with_context(
        &self,
        topic: &str,
        callback: Callback,
        context: Context,
    ) -> &'a Broadcaster {
        self.broadcaster.subscribe_with_context(topic, callback, context)
    }

    /// Alias of [`Broadcaster::publish`]
    pub fn trigger<I>(&self, topic: &str, args: I) -> Result<&'a Broadcaster>
    where
        I: IntoIterator<Item = Value>,
    {
        self.broadcaster.publish(topic, args)
    }

    /// Alias of [`Broadcaster::publish`]
    pub fn emit<I>(&self, topic: &str, args: I) -> Result<&'a Broadcaster>
    where
        I: IntoIterator<Item = Value>,
    {
        self.broadcaster.publish(topic, args)
    }

    /// Alias of [`Broadcaster::unsubscribe`]
    pub fn off(&self, topic: &str) -> &'a Broadcaster {
        self.broadcaster.unsubscribe(topic)
    }

    /// Alias of [`Broadcaster::unsubscribe_callback`]
    pub fn off_callback(&self, topic: &str, callback: &Callback) -> &'a Broadcaster {
        self.broadcaster.unsubscribe_callback(topic, callback)
    }
}
