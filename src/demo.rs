//! Walkthrough of the broadcaster used by the `broadcast` binary

use std::sync::{Arc, Mutex};

use broadcast_core::{args, context, Broadcaster, Callback};

/// Run the change/42 walkthrough on `bus` and return what the listeners saw.
///
/// A `change` listener with a context, a namespaced `change.audit` listener
/// and an `"all"` listener are registered; `change` is published, the plain
/// listener is removed, `change` is published again and finally the `audit`
/// namespace is dropped.
pub fn run_demo(bus: &Broadcaster) -> anyhow::Result<Vec<String>> {
    let transcript = Arc::new(Mutex::new(Vec::new()));

    let log = transcript.clone();
    let on_change = Callback::new(move |d| {
        let owner = d.context::<String>().map(String::as_str).unwrap_or("-");
        record(&log, format!("{} got {:?} for {}", d.topic(), d.args(), owner))
    });

    let log = transcript.clone();
    let on_audit = Callback::new(move |d| {
        record(&log, format!("audit saw {} ({:?})", d.topic(), d.namespace()))
    });

    let log = transcript.clone();
    let on_all = Callback::new(move |d| record(&log, format!("all saw {:?}", d.args())));

    bus.subscribe_with_context("change", on_change.clone(), context(String::from("model")))
        .subscribe("change.audit", on_audit)
        .subscribe("all", on_all);

    match bus.aliases() {
        Some(aliases) => aliases.trigger("change", args![42])?,
        None => bus.publish("change", args![42])?,
    };

    bus.unsubscribe_callback("change", &on_change);
    bus.publish("change", args![43])?;

    bus.unsubscribe(".audit");
    bus.publish("change", args![44])?;
    tracing::info!(remaining = bus.subscriber_count(), "Demo finished");

    let lines = transcript
        .lock()
        .map_err(|_| anyhow::anyhow!("transcript lock poisoned"))?
        .clone();
    Ok(lines)
}

fn record(log: &Mutex<Vec<String>>, line: String) -> anyhow::Result<()> {
    tracing::info!("{}", line);
    log.lock()
        .map_err(|_| anyhow::anyhow!("transcript lock poisoned"))?
        .push(line);
    Ok(())
}
