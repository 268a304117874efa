//! # LogWriter: event logger
//!
//! A minimal observer that writes incoming [`Event`]s through `tracing`.
//! System events go to `debug`, everything else to `info`.
//!
//! ## Example output
//! ```text
//! INFO runbus: event id=1 run=runref_build-1_na tag=push good=false node=trigger.push (trigger)
//! INFO runbus: event id=4 run=runref_build-1_h1-7 tag=task.compile.good good=true node=task.compile
//! ```

use async_trait::async_trait;
use tracing::{debug, info};

use crate::events::Event;
use crate::observers::Observe;

/// Event writer observer.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Observe for LogWriter {
    async fn notify(&self, e: Event) {
        let stage = if e.is_adopted() { "" } else { " (trigger)" };
        if e.is_system() {
            debug!(
                "event id={} run={} tag={} node={}{}",
                e.id, e.run_ref, e.tag, e.source_node, stage
            );
        } else {
            info!(
                "event id={} run={} tag={} good={} node={}{}",
                e.id, e.run_ref, e.tag, e.good, e.source_node, stage
            );
        }
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::SYS_NODE_UPDATE;
    use crate::ids::{FlowRef, HostedId, NodeRef, RunRef};
    use crate::testing::capture;
    use crate::Bus;
    use std::sync::Arc;
    use tracing::Level;

    #[tokio::test]
    async fn test_writes_system_and_routed_events() {
        let (logs, _guard) = capture(Level::DEBUG);
        let run = RunRef::new(FlowRef::new("build", 1), "h1");
        let w = LogWriter::new();
        w.notify(Event::new(run.clone(), NodeRef::task("compile"), SYS_NODE_UPDATE))
            .await;
        w.notify(Event::new(run, NodeRef::task("compile"), "").with_good())
            .await;

        let system = logs.lines_with("tag=sys.node.update");
        assert_eq!(system.len(), 1, "{}", logs.text());
        assert!(system[0].contains("DEBUG"), "{}", system[0]);
        assert!(system[0].contains("node=task.compile (trigger)"), "{}", system[0]);

        let routed = logs.lines_with("tag=task.compile.good");
        assert_eq!(routed.len(), 1, "{}", logs.text());
        assert!(routed[0].contains("INFO"), "{}", routed[0]);
        assert!(routed[0].contains("good=true"), "{}", routed[0]);
        assert_eq!(w.name(), "LogWriter");
    }

    #[tokio::test]
    async fn test_system_events_hidden_at_info() {
        let (logs, _guard) = capture(Level::INFO);
        let run = RunRef::with_run(FlowRef::new("build", 1), HostedId::new("h1", 3), "h1");
        let w = LogWriter::new();
        w.notify(Event::new(run.clone(), NodeRef::task("compile"), SYS_NODE_UPDATE))
            .await;
        w.notify(Event::new(run, NodeRef::merge("join"), "task.compile.good"))
            .await;

        assert!(logs.lines_with("sys.node.update").is_empty());
        let routed = logs.lines_with("node=merge.join");
        assert_eq!(routed.len(), 1, "{}", logs.text());
        assert!(!routed[0].contains("(trigger)"), "{}", routed[0]);
    }

    #[tokio::test]
    async fn test_registers_on_bus() {
        let bus = Bus::default();
        bus.register(Arc::new(LogWriter::new()));
        bus.publish(Event::new(RunRef::default(), NodeRef::trigger("push"), "push"));
        assert_eq!(bus.observer_count(), 1);
        assert_eq!(bus.last_id(), 1);
    }
}
