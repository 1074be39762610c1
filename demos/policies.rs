//! # Example: policies
//!
//! Demonstrates bounded-count and bounded-frequency subscriptions, and the two
//! unsubscribe policies.
//!
//! Shows how to:
//! - Limit a handler to the first `n` occurrences ([`Registry::subscribe_times`]).
//! - Deliver only the 1st and every `n`-th occurrence ([`Registry::subscribe_throttled`]).
//! - Keep detached subscriptions inert ([`UnsubscribePolicy::Decay`]) and reclaim them
//!   with [`Registry::compact`].
//!
//! ## Run
//! ```bash
//! RUST_LOG=eventree=trace cargo run --example policies
//! ```

use eventree::{MatchRule, Registry, RegistryBuilder, RepeatPolicy, UnsubscribePolicy};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry: Registry<u32> = RegistryBuilder::default()
        .with_match_rule(MatchRule::Hierarchical)
        .with_unsubscribe_policy(UnsubscribePolicy::Decay)
        .build();

    registry
        .subscribe_times("tick", 1, |id| println!("  [{id}] first three ticks only"), 3)
        .subscribe_throttled("tick", 2, |id| println!("  [{id}] tick 1, 4, 7, ..."), 3)
        .subscribe_with_repeat("tick", 3, |id| println!("  [{id}] never"), RepeatPolicy::Times(0))
        .subscribe("tick.fast", 4, |id| println!("  [{id}] every fast tick"));

    for n in 1..=7 {
        println!("tick #{n} (via tick.fast)");
        registry.emit("tick.fast");
    }

    registry.unsubscribe("tick", &4);
    println!(
        "after unsubscribe: {} stored, {} live on tick.fast",
        registry.len(),
        registry.listener_count("tick.fast")
    );

    let dropped = registry.compact();
    println!("compact dropped {dropped}; {} stored", registry.len());
}
