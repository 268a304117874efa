//! # Events produced during flow execution.
//!
//! An [`Event`] records one occurrence: which run it belongs to (possibly an
//! unadopted placeholder for trigger-stage events), which node emitted it, a
//! routing tag, a success flag, a sequence id and an open [`Opts`] payload.
//!
//! ## Tags
//! - Tags match `node.type` for trigger nodes and `node.listen` for task/merge nodes.
//! - Tags starting with [`SYS_PREFIX`] are internal signalling that nodes never see.
//! - [`Event::set_good`] rewrites the tag to `<class>.<id>.good`.
//!
//! ## Ordering
//! `id` is left at `0` by producers and assigned exactly once by
//! [`Bus::publish`](crate::Bus::publish). Within one run, a greater id happened
//! later. A flow-initiating trigger event carries id `1` on a fresh bus.
//!
//! ## Example
//! ```rust
//! use runbus::{Event, FlowRef, NodeRef, RunRef};
//!
//! let run = RunRef::new(FlowRef::new("build", 1), "h1");
//! let mut ev = Event::new(run, NodeRef::task("compile"), "sys.node.update")
//!     .with_opt("line", "compiling crate");
//!
//! assert!(ev.is_system());
//! ev.set_good();
//! assert_eq!(ev.tag, "task.compile.good");
//! assert!(!ev.is_system());
//! ```

use serde::{Deserialize, Serialize};

use crate::events::opts::{OptValue, Opts};
use crate::ids::{NodeRef, RunRef};

/// Prefix of internal events that nodes can not see.
pub const SYS_PREFIX: &str = "sys.";

/// Per-output-line progress update from a running node (noisy).
pub const SYS_NODE_UPDATE: &str = "sys.node.update";

/// A moment-in-time occurrence within (or ahead of) a run.
///
/// `Clone` is the private copy handed to each observer: the `opts` map is
/// freshly allocated, its values are shared (see [`OptValue`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Run this event is scoped to. Unadopted for general/trigger-routing events.
    pub run_ref: RunRef,
    /// Node that emitted the event, in the context of `run_ref`.
    pub source_node: NodeRef,
    /// Routing label.
    pub tag: String,
    /// Set when this event is classed as a success.
    pub good: bool,
    /// Unique, ordered id. Assigned by the bus; `0` until published.
    pub id: u64,
    /// Optional payload.
    #[serde(default)]
    pub opts: Opts,
}

impl Event {
    /// Creates an unpublished event (`id == 0`, `good == false`, empty opts).
    #[must_use]
    pub fn new(run_ref: RunRef, source_node: NodeRef, tag: impl Into<String>) -> Self {
        Self {
            run_ref,
            source_node,
            tag: tag.into(),
            good: false,
            id: 0,
            opts: Opts::new(),
        }
    }

    /// Attaches one payload entry.
    #[inline]
    pub fn with_opt(mut self, key: impl Into<String>, value: impl Into<OptValue>) -> Self {
        self.opts.insert(key.into(), value.into());
        self
    }

    /// Replaces the whole payload.
    #[inline]
    pub fn with_opts(mut self, opts: Opts) -> Self {
        self.opts = opts;
        self
    }

    /// Builder form of [`Event::set_good`].
    #[inline]
    pub fn with_good(mut self) -> Self {
        self.set_good();
        self
    }

    /// Looks up a payload entry.
    pub fn opt(&self, key: &str) -> Option<&OptValue> {
        self.opts.get(key)
    }

    /// Marks this as a good event, routed as `<class>.<id>.good`.
    ///
    /// Overwrites any previous tag. There is no way back to "not good".
    /// Only the node owning `source_node` should call this.
    pub fn set_good(&mut self) {
        self.good = true;
        self.tag = format!("{}.{}.good", self.source_node.class, self.source_node.id);
    }

    /// True if this is an internal system event.
    #[inline]
    pub fn is_system(&self) -> bool {
        if self.tag.len() < 3 {
            return false;
        }
        self.tag.starts_with(SYS_PREFIX)
    }

    /// True if the event belongs to a run that has been assigned an id.
    #[inline]
    pub fn is_adopted(&self) -> bool {
        self.run_ref.is_adopted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{FlowRef, HostedId};

    fn event(tag: &str) -> Event {
        Event::new(
            RunRef::new(FlowRef::new("build", 1), "h1"),
            NodeRef::task("build"),
            tag,
        )
    }

    #[test]
    fn test_is_system() {
        assert!(!event("").is_system());
        assert!(!event("sy").is_system());
        assert!(!event("sys").is_system());
        assert!(!event("sys-node").is_system());
        assert!(!event("task.sys.good").is_system());
        assert!(event("sys.").is_system());
        assert!(event(SYS_NODE_UPDATE).is_system());
    }

    #[test]
    fn test_set_good_overwrites_tag() {
        for prior in ["", "sys.node.update", "push", "task.build.good"] {
            let mut ev = event(prior);
            ev.set_good();
            assert!(ev.good);
            assert_eq!(ev.tag, "task.build.good");
        }
    }

    #[test]
    fn test_set_good_uses_node_class() {
        let ev = Event::new(RunRef::default(), NodeRef::merge("join"), "x").with_good();
        assert_eq!(ev.tag, "merge.join.good");
    }

    #[test]
    fn test_new_is_unpublished() {
        let ev = event("push");
        assert_eq!(ev.id, 0);
        assert!(!ev.good);
        assert!(ev.opts.is_empty());
        assert!(!ev.is_adopted());
    }

    #[test]
    fn test_clone_gets_own_opts_map() {
        let original = event("push").with_opt("branch", "main");
        let mut copy = original.clone();
        copy.opts.insert("extra".into(), OptValue::from(1));
        copy.opts.remove("branch");

        assert_eq!(original.opt("branch").and_then(OptValue::as_str), Some("main"));
        assert!(original.opt("extra").is_none());
    }

    #[test]
    fn test_adopted_follows_run_ref() {
        let run = RunRef::with_run(FlowRef::new("build", 1), HostedId::new("h1", 9), "h2");
        let ev = Event::new(run, NodeRef::task("build"), "push");
        assert!(ev.is_adopted());
    }
}
