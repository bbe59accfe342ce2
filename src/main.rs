use std::path::PathBuf;

use broadcast::{init_logging, load_or_default, run_demo, Broadcaster, VERSION};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    // Optional options file as the first argument
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let options = load_or_default(path.as_deref())?;
    tracing::info!(version = VERSION, ?options, "Starting broadcast demo");

    let bus = Broadcaster::with_options(options);
    let transcript = run_demo(&bus)?;
    tracing::info!(deliveries = transcript.len(), "Listeners notified");

    Ok(())
}
