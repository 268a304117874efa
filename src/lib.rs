//! # runbus
//!
//! **runbus** is the identity and event-distribution layer of a distributed
//! flow-execution system.
//!
//! It defines how one run of a flow is referenced anywhere in a cluster, and how
//! the events produced while executing that run are numbered and fanned out to
//! observers (triggers, persistence, UI feeds, loggers) without the producer
//! ever waiting on them.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │   trigger    │   │ node executor│   │    system    │
//!     │  (producer)  │   │  (producer)  │   │  (producer)  │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            │ Event{id: 0}     │                  │
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Bus                                                              │
//! │  - Mutex<counter>: id = ++counter (only critical section)         │
//! │  - debug trace line per publish                                   │
//! │  - RwLock<Vec<Observer>> (append-only, registration order)        │
//! └──────┬──────────────────┬──────────────────┬──────────────────────┘
//!        ▼ spawn            ▼ spawn            ▼ spawn      (detached, never awaited)
//!   ┌──────────┐       ┌──────────┐       ┌──────────┐
//!   │ persist  │       │ ui feed  │       │ triggers │    each gets a private copy
//!   │ .notify()│       │ .notify()│       │ .notify()│    panics caught and logged
//!   └──────────┘       └──────────┘       └──────────┘
//! ```
//!
//! ### Identity
//! ```text
//! RunRef ─┬─ flow: FlowRef           which flow definition
//!         ├─ run: HostedId           initiating host + host-local id (0 = not adopted)
//!         └─ exec_host: String       executing host (routing hint, ignored by ==)
//! ```
//!
//! ## Features
//! | Area          | Description                                              | Key types                          |
//! |---------------|----------------------------------------------------------|------------------------------------|
//! | **Identity**  | Host-scoped ids and cluster-wide run references.         | [`HostedId`], [`RunRef`]           |
//! | **Events**    | Event record, tag classification, open payload.          | [`Event`], [`Opts`], [`OptValue`]  |
//! | **Bus**       | Dense sequence ids and fire-and-forget fan-out.          | [`Bus`], [`BusConfig`]             |
//! | **Observers** | Extension point for event consumers.                     | [`Observe`], [`LogWriter`]         |
//! | **Errors**    | Typed errors for id parsing and run adoption.            | [`IdError`]                        |
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use runbus::{Bus, BusConfig, Event, FlowRef, HostedId, NodeRef, Observe, RunRef};
//!
//! struct Printer;
//!
//! #[async_trait]
//! impl Observe for Printer {
//!     async fn notify(&self, ev: Event) {
//!         println!("{} #{} {}", ev.run_ref, ev.id, ev.tag);
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bus = Bus::new(BusConfig::default());
//!     bus.register(Arc::new(Printer));
//!
//!     let mut run = RunRef::new(FlowRef::new("build", 1), "h1");
//!     bus.publish(Event::new(run.clone(), NodeRef::trigger("push"), "push"));
//!
//!     run.adopt(HostedId::new("h1", 1))?;
//!     bus.publish(Event::new(run, NodeRef::task("compile"), "push").with_good());
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod events;
mod ids;
mod observers;
#[cfg(test)]
mod testing;

// ---- Public re-exports ----

pub use config::BusConfig;
pub use error::IdError;
pub use events::{Bus, Event, OptValue, Opts, SYS_NODE_UPDATE, SYS_PREFIX};
pub use ids::{FlowRef, HostedId, NodeClass, NodeRef, RunRef};
pub use observers::{LogWriter, Observe};
