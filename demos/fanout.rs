//! # Demo: fanout
//!
//! Publishes the events of one short run to two observers.
//!
//! Shows how to:
//! - Implement the [`Observe`] trait.
//! - Adopt a [`RunRef`] once the run is registered.
//! - Keep noisy tags out of the bus trace via [`BusConfig::quiet_tags`].
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --example fanout
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use runbus::{
    Bus, BusConfig, Event, FlowRef, HostedId, LogWriter, NodeRef, Observe, RunRef, SYS_NODE_UPDATE,
};
use tracing_subscriber::EnvFilter;

/// Prints only the events nodes are allowed to see.
struct RouteFeed;

#[async_trait]
impl Observe for RouteFeed {
    async fn notify(&self, ev: Event) {
        if ev.is_system() {
            return;
        }
        println!("[route] #{} tag={} good={}", ev.id, ev.tag, ev.good);
    }

    fn name(&self) -> &'static str {
        "route-feed"
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let bus = Bus::new(BusConfig::default().with_quiet_tag(SYS_NODE_UPDATE));
    bus.register(Arc::new(LogWriter::new()));
    bus.register(Arc::new(RouteFeed));

    let mut run = RunRef::new(FlowRef::new("build", 1), "h1");
    let trigger = Event::new(run.clone(), NodeRef::trigger("push"), "push");
    bus.publish(trigger.with_opt("branch", "main"));

    run.adopt(HostedId::new("h1", 1))?;
    for line in ["compiling", "linking"] {
        let update = Event::new(run.clone(), NodeRef::task("compile"), SYS_NODE_UPDATE);
        bus.publish(update.with_opt("line", line));
    }
    bus.publish(Event::new(run, NodeRef::task("compile"), "").with_good());

    // notifications are detached; give them a moment before exiting
    tokio::time::sleep(Duration::from_millis(100)).await;
    Ok(())
}
