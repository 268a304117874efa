//! Events: the record type, its payload, and the distribution bus.
//!
//! ## Contents
//! - [`Event`] one occurrence within (or ahead of) a run, with tag classification
//! - [`Opts`], [`OptValue`] open, shallow-shared payload
//! - [`Bus`] sequence numbering and fire-and-forget fan-out to observers
//!
//! ## Quick reference
//! - **Publishers**: node executors, trigger detectors, system components.
//! - **Consumers**: anything implementing [`Observe`](crate::Observe).

mod bus;
mod event;
mod opts;

pub use bus::Bus;
pub use event::{Event, SYS_NODE_UPDATE, SYS_PREFIX};
pub use opts::{OptValue, Opts};
