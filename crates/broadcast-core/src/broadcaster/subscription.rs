//! Subscription records stored per topic

use std::fmt;

use uuid::Uuid;

use crate::listener::{Callback, Context};

/// Unique identifier of a subscription record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// A callback registered under one topic.
///
/// Returned by [`Broadcaster::subscriptions`](crate::Broadcaster::subscriptions)
/// as a snapshot; holding a clone does not keep the registration alive.
#[derive(Clone)]
pub struct Subscription {
    id: SubscriptionId,
    callback: Callback,
    namespace: Option<String>,
    context: Option<Context>,
}

impl Subscription {
    pub(crate) fn new(
        callback: Callback,
        namespace: Option<String>,
        context: Option<Context>,
    ) -> Self {
        Self {
            id: SubscriptionId::new(),
            callback,
            namespace,
            context,
        }
    }

    /// Record identifier
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Registered callback
    pub fn callback(&self) -> &Callback {
        &self.callback
    }

    /// Namespace given at registration
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Context bound at registration
    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    /// Whether this record is selected by a removal filter.
    pub(crate) fn is_selected(&self, namespace: Option<&str>, callback: Option<&Callback>) -> bool {
        let namespace_matches = namespace.is_none_or(|ns| self.namespace() == Some(ns));
        let callback_matches = callback.is_none_or(|cb| self.callback.same(cb));
        namespace_matches && callback_matches
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("callback", &self.callback)
            .field("namespace", &self.namespace)
            .field("has_context", &self.context.is_some())
            .finish()
    }
}
