//! # Example: reentrant
//!
//! Demonstrates handlers that call back into the registry while an emit is running.
//!
//! Shows how to:
//! - Share a registry through `Arc` and capture a `Weak` in handlers.
//! - Unsubscribe from inside a handler (one-shot "wait for" pattern).
//! - Emit a follow-up event from inside a handler.
//!
//! ## Run
//! ```bash
//! RUST_LOG=eventree=debug cargo run --example reentrant
//! ```

use std::sync::Arc;

use eventree::Registry;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry: Arc<Registry<&'static str>> = Arc::new(Registry::default());

    let weak = Arc::downgrade(&registry);
    registry.subscribe("job.done", "notifier", move |ctx| {
        println!("[{ctx}] job finished, announcing and leaving");
        if let Some(r) = weak.upgrade() {
            r.emit("announce.job").unsubscribe("job", ctx);
        }
    });
    registry.subscribe("announce", "speaker", |ctx| println!("[{ctx}] announcement"));

    registry.emit("job.done").emit("job.done");

    println!("names left: {:?}", registry.event_names());
}
