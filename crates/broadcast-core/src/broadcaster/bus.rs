//! Broadcaster implementation.
//!
//! Holds the topic → subscription table and implements subscribe, publish
//! and unsubscribe on top of it.

use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;

use super::aliases::Aliases;
use super::subscription::Subscription;
use crate::error::{BroadcastError, Result};
use crate::listener::{Callback, Context, Delivery};
use crate::options::BroadcastOptions;
use crate::topic::{parse_topics, Topic, ALL_TOPIC};

/// Synchronous topic-based publish/subscribe hub.
///
/// Listeners run on the publishing thread, in registration order. The table
/// lock is released before any listener runs, so listeners may freely call
/// back into the same broadcaster.
pub struct Broadcaster {
    /// Bare topic name → subscriptions in registration order
    subscriptions: RwLock<HashMap<String, Vec<Subscription>>>,
    options: BroadcastOptions,
}

impl Broadcaster {
    /// Create a broadcaster with default options
    pub fn new() -> Self {
        Self::with_options(BroadcastOptions::default())
    }

    /// Create a broadcaster with custom options
    pub fn with_options(options: BroadcastOptions) -> Self {
        Self {
            subscriptions: RwLock::new(HashMap::new()),
            options,
        }
    }

    /// Construction options
    pub fn options(&self) -> &BroadcastOptions {
        &self.options
    }

    /// Alias surface (`on`, `trigger`), if enabled by the options
    pub fn aliases(&self) -> Option<Aliases<'_>> {
        self.options.alias_on.then(|| Aliases::new(self))
    }

    /// Subscribe `callback` to every topic token in `topic`.
    ///
    /// `topic` may hold several whitespace-separated tokens, each optionally
    /// namespaced (`"change.ui"`). Namespace-only tokens (`".ui"`) name no
    /// topic and are skipped.
    pub fn subscribe(&self, topic: &str, callback: Callback) -> &Self {
        self.register(topic, callback, None)
    }

    /// Subscribe with a context handed to the callback on every delivery
    pub fn subscribe_with_context(
        &self,
        topic: &str,
        callback: Callback,
        context: Context,
    ) -> &Self {
        self.register(topic, callback, Some(context))
    }

    /// Subscribe several topic/callback pairs sharing one optional context.
    ///
    /// Pairs are registered in iteration order.
    pub fn subscribe_many<I, S>(&self, pairs: I, context: Option<Context>) -> &Self
    where
        I: IntoIterator<Item = (S, Callback)>,
        S: AsRef<str>,
    {
        for (topic, callback) in pairs {
            self.register(topic.as_ref(), callback, context.clone());
        }
        self
    }

    fn register(&self, spec: &str, callback: Callback, context: Option<Context>) -> &Self {
        let mut subscriptions = self.subscriptions.write();
        for topic in parse_topics(spec) {
            if topic.is_namespace_only() {
                tracing::debug!("Ignoring subscription to namespace-only topic '{}'", topic);
                continue;
            }
            let subscription = Subscription::new(
                callback.clone(),
                topic.namespace().map(str::to_string),
                context.clone(),
            );
            tracing::debug!("Subscription {} added to '{}'", subscription.id(), topic);
            subscriptions
                .entry(topic.name().to_string())
                .or_default()
                .push(subscription);
        }
        self
    }

    /// Publish `topic` with `args`.
    ///
    /// Every matching listener is invoked in registration order, then the
    /// `"all"` listeners receive the bare topic name followed by `args`.
    /// The first listener error aborts the remaining deliveries and is
    /// returned.
    pub fn publish<I>(&self, topic: &str, args: I) -> Result<&Self>
    where
        I: IntoIterator<Item = Value>,
    {
        let topic = Topic::parse(topic);
        let args: Vec<Value> = args.into_iter().collect();

        self.dispatch(&topic, &args)?;

        if !topic.is_all() {
            let mut all_args = Vec::with_capacity(args.len() + 1);
            all_args.push(Value::String(topic.name().to_string()));
            all_args.extend(args);
            self.dispatch(&Topic::bare(ALL_TOPIC), &all_args)?;
        }

        Ok(self)
    }

    /// Run one dispatch round over a snapshot of the topic's listeners.
    fn dispatch(&self, topic: &Topic, args: &[Value]) -> Result<()> {
        let snapshot: Vec<Subscription> = {
            let subscriptions = self.subscriptions.read();
            subscriptions
                .get(topic.name())
                .map(|list| {
                    list.iter()
                        .filter(|sub| topic.accepts(sub.namespace()))
                        .cloned()
                        .collect()
                })
                .unwrap_or_default()
        };

        tracing::trace!(
            topic = %topic,
            listeners = snapshot.len(),
            args = args.len(),
            "Dispatching"
        );

        for subscription in &snapshot {
            let delivery = Delivery::new(
                self,
                topic.name(),
                subscription.namespace(),
                subscription.context(),
                args,
            );
            subscription
                .callback()
                .call(&delivery)
                .map_err(|source| BroadcastError::Listener {
                    topic: topic.name().to_string(),
                    source,
                })?;
        }

        Ok(())
    }

    /// Remove every subscription for every topic
    pub fn clear(&self) -> &Self {
        let mut subscriptions = self.subscriptions.write();
        let topics = subscriptions.len();
        subscriptions.clear();
        tracing::debug!("Cleared subscriptions for {} topics", topics);
        self
    }

    /// Remove all subscriptions addressed by `topic`.
    ///
    /// - `"name"` removes the whole topic.
    /// - `"name.ns"` removes the `ns` subscriptions of `name`.
    /// - `".ns"` removes the `ns` subscriptions of every topic.
    pub fn unsubscribe(&self, topic: &str) -> &Self {
        self.remove(topic, None)
    }

    /// Remove every occurrence of `callback` among the subscriptions
    /// addressed by `topic` (same topic forms as [`unsubscribe`](Self::unsubscribe)).
    pub fn unsubscribe_callback(&self, topic: &str, callback: &Callback) -> &Self {
        self.remove(topic, Some(callback))
    }

    fn remove(&self, spec: &str, callback: Option<&Callback>) -> &Self {
        let mut subscriptions = self.subscriptions.write();

        for topic in parse_topics(spec) {
            let namespace = topic.namespace();

            if topic.is_namespace_only() {
                let mut removed = 0;
                subscriptions.retain(|_, list| {
                    let before = list.len();
                    list.retain(|sub| !sub.is_selected(namespace, callback));
                    removed += before - list.len();
                    !list.is_empty()
                });
                tracing::debug!("Removed {} subscriptions in namespace '{}'", removed, topic);
                continue;
            }

            if namespace.is_none() && callback.is_none() {
                if let Some(list) = subscriptions.remove(topic.name()) {
                    tracing::debug!("Removed {} subscriptions from '{}'", list.len(), topic);
                }
                continue;
            }

            let emptied = match subscriptions.get_mut(topic.name()) {
                Some(list) => {
                    let before = list.len();
                    list.retain(|sub| !sub.is_selected(namespace, callback));
                    tracing::debug!(
                        "Removed {} subscriptions from '{}'",
                        before - list.len(),
                        topic
                    );
                    list.is_empty()
                }
                None => false,
            };
            if emptied {
                subscriptions.remove(topic.name());
            }
        }

        self
    }

    /// Topics that currently have subscriptions, in no particular order
    pub fn topics(&self) -> Vec<String> {
        self.subscriptions.read().keys().cloned().collect()
    }

    /// Snapshot of the subscriptions registered under the bare topic `name`
    pub fn subscriptions(&self, name: &str) -> Vec<Subscription> {
        self.subscriptions
            .read()
            .get(name)
            .cloned()
            .unwrap_or_default()
    }

    /// Whether `topic` (bare or namespaced) has at least one listener
    pub fn has_subscribers(&self, topic: &str) -> bool {
        let topic = Topic::parse(topic);
        self.subscriptions
            .read()
            .get(topic.name())
            .is_some_and(|list| list.iter().any(|sub| topic.accepts(sub.namespace())))
    }

    /// Total number of subscription records across all topics
    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.read().values().map(Vec::len).sum()
    }

    /// Whether no subscriptions are registered
    pub fn is_empty(&self) -> bool {
        self.subscriptions.read().is_empty()
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Broadcaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let subscriptions = self.subscriptions.read();
        f.debug_struct("Broadcaster")
            .field("topics", &subscriptions.len())
            .field("subscribers", &subscriptions.values().map(Vec::len).sum::<usize>())
            .field("options", &self.options)
            .finish()
    }
}
