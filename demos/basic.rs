//! # Example: basic
//!
//! Demonstrates hierarchical delivery and unsubscribe fan-out.
//!
//! Shows how to:
//! - Subscribe handlers on several levels of one hierarchy.
//! - Emit a leaf event and observe ancestor order.
//! - Unsubscribe a context from a whole subtree.
//!
//! ## Flow
//! ```text
//! emit("lecture.begin") ──► "lecture.begin" subscribers ──► "lecture" subscribers
//! unsubscribe("lecture", "daria") ──► removes daria from "lecture" and "lecture.*"
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=eventree=debug cargo run --example basic
//! ```

use std::sync::Arc;

use eventree::{create_registry, Registry};
use tracing_subscriber::EnvFilter;

/// Per-student context; the registry only compares it with `==`.
#[derive(Debug, PartialEq)]
struct Student {
    name: &'static str,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry: Arc<Registry<Arc<Student>>> = Arc::new(create_registry());
    let daria = Arc::new(Student { name: "daria" });
    let sam = Arc::new(Student { name: "sam" });

    registry
        .subscribe("lecture", Arc::clone(&daria), |s| {
            println!("[lecture]       {} takes notes", s.name)
        })
        .subscribe("lecture.begin", Arc::clone(&daria), |s| {
            println!("[lecture.begin] {} sits down", s.name)
        })
        .subscribe("lecture.begin", Arc::clone(&sam), |s| {
            println!("[lecture.begin] {} opens a laptop", s.name)
        })
        .subscribe("lecture.end", Arc::clone(&sam), |s| {
            println!("[lecture.end]   {} leaves", s.name)
        });

    println!("-- emit lecture.begin");
    registry.emit("lecture.begin");

    println!("-- emit lecture.end");
    registry.emit("lecture.end");

    println!("-- unsubscribe daria from lecture.*");
    registry.unsubscribe("lecture", &daria).emit("lecture.begin");

    println!(
        "-- remaining names: {:?} ({} subscriptions)",
        registry.event_names(),
        registry.len()
    );
}
