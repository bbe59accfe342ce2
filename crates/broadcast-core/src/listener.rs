//! Listener callbacks and the delivery handed to them
//!
//! Callbacks are opaque functions compared by identity. A registration may
//! carry a context value; during dispatch the callback receives it through
//! [`Delivery::context`], which stands in for a bound receiver. Without a
//! context the receiver is the broadcaster itself ([`Delivery::broadcaster`]).

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::Broadcaster;

/// Signature of a listener function.
pub type ListenerFn = dyn Fn(&Delivery<'_>) -> anyhow::Result<()> + Send + Sync;

/// Context value bound to a subscription.
pub type Context = Arc<dyn Any + Send + Sync>;

/// A registered listener callback.
///
/// Cloning is cheap and keeps identity: clones compare equal, while two
/// callbacks built from identical closures do not.
#[derive(Clone)]
pub struct Callback(Arc<ListenerFn>);

impl Callback {
    /// Wrap a function as a callback
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Delivery<'_>) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Identity comparison
    pub fn same(&self, other: &Callback) -> bool {
        // Compare data pointers only; vtable pointers are not unique.
        std::ptr::eq(
            Arc::as_ptr(&self.0) as *const (),
            Arc::as_ptr(&other.0) as *const (),
        )
    }

    pub(crate) fn call(&self, delivery: &Delivery<'_>) -> anyhow::Result<()> {
        (self.0)(delivery)
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for Callback {}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback({:p})", Arc::as_ptr(&self.0) as *const ())
    }
}

/// A single invocation of a listener.
pub struct Delivery<'a> {
    broadcaster: &'a Broadcaster,
    topic: &'a str,
    namespace: Option<&'a str>,
    context: Option<&'a Context>,
    args: &'a [Value],
}

impl<'a> Delivery<'a> {
    pub(crate) fn new(
        broadcaster: &'a Broadcaster,
        topic: &'a str,
        namespace: Option<&'a str>,
        context: Option<&'a Context>,
        args: &'a [Value],
    ) -> Self {
        Self {
            broadcaster,
            topic,
            namespace,
            context,
            args,
        }
    }

    /// The broadcaster dispatching this delivery.
    ///
    /// Listeners may publish, subscribe or unsubscribe through it.
    pub fn broadcaster(&self) -> &'a Broadcaster {
        self.broadcaster
    }

    /// Bare topic being dispatched (`"all"` for catch-all deliveries)
    pub fn topic(&self) -> &'a str {
        self.topic
    }

    /// Namespace the listener was registered under
    pub fn namespace(&self) -> Option<&'a str> {
        self.namespace
    }

    /// Published arguments
    pub fn args(&self) -> &'a [Value] {
        self.args
    }

    /// Argument at `index`
    pub fn arg(&self, index: usize) -> Option<&'a Value> {
        self.args.get(index)
    }

    /// Raw context bound at registration
    pub fn raw_context(&self) -> Option<&'a Context> {
        self.context
    }

    /// Context bound at registration, downcast to `T`.
    ///
    /// Returns `None` when no context was bound or it has another type.
    pub fn context<T: Any>(&self) -> Option<&'a T> {
        self.context.and_then(|context| context.downcast_ref::<T>())
    }
}

impl fmt::Debug for Delivery<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delivery")
            .field("topic", &self.topic)
            .field("namespace", &self.namespace)
            .field("has_context", &self.context.is_some())
            .field("args", &self.args)
            .finish()
    }
}

/// Wrap a value as a subscription context
pub fn context<T: Any + Send + Sync>(value: T) -> Context {
    Arc::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_callback_identity() {
        let a = Callback::new(|_| Ok(()));
        let b = Callback::new(|_| Ok(()));
        let a2 = a.clone();

        assert_eq!(a, a2);
        assert_ne!(a, b);
        assert!(a.same(&a2));
        assert!(!a.same(&b));
    }

    #[test]
    fn test_delivery_accessors() {
        let bus = Broadcaster::new();
        let ctx = context(String::from("receiver"));
        let args = vec![json!(20), json!("hello")];
        let delivery = Delivery::new(&bus, "change", Some("ui"), Some(&ctx), &args);

        assert_eq!(delivery.topic(), "change");
        assert_eq!(delivery.namespace(), Some("ui"));
        assert_eq!(delivery.args().len(), 2);
        assert_eq!(delivery.arg(1), Some(&json!("hello")));
        assert_eq!(delivery.arg(2), None);
        assert_eq!(
            delivery.context::<String>().map(String::as_str),
            Some("receiver")
        );
        assert!(delivery.context::<u32>().is_none());
    }

    #[test]
    fn test_callback_call_returns_listener_result() {
        let bus = Broadcaster::new();
        let failing = Callback::new(|d| anyhow::bail!("bad topic {}", d.topic()));
        let delivery = Delivery::new(&bus, "t", None, None, &[]);

        let err = failing.call(&delivery).unwrap_err();
        assert_eq!(err.to_string(), "bad topic t");
    }
}
