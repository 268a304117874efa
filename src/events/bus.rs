//! # Event bus: sequence numbering and fire-and-forget fan-out.
//!
//! [`Bus`] numbers every published [`Event`] and hands an independent copy of it
//! to each registered [`Observe`]r on its own detached task.
//!
//! ## Architecture
//! ```text
//! Producers (many):                           Observers (registered at setup):
//!   node executor ──┐                      ┌──► spawn ─► persist.notify(copy)
//!   trigger       ──┼──► Bus::publish(ev) ─┼──► spawn ─► ui_feed.notify(copy)
//!   system        ──┘    │                 └──► spawn ─► triggers.notify(copy)
//!                        │
//!                        ├─ lock counter; id = ++counter; unlock
//!                        └─ debug trace line (unless quiet tag)
//! ```
//!
//! ## Rules
//! - **Dense ids**: each publish consumes exactly one increment; ids start at 1.
//! - **Short critical section**: only the increment and assignment hold the counter lock.
//! - **Non-blocking publish**: observers are never awaited; a slow one delays nobody.
//! - **Isolation**: a panicking notification is caught and logged at `warn`.
//! - **No ordering of delivery**: observers may see events out of id order.
//! - **No backpressure**: in-flight notifications are unbounded.
//!
//! ## Scheduling
//! Each notification is spawned onto, in order of preference:
//! 1. the runtime of the publishing thread,
//! 2. the runtime the bus was created in,
//! 3. a detached thread driving it with `futures::executor::block_on`
//!    (no tokio reactor there; only for buses built outside any runtime).

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use futures::FutureExt;
use tokio::runtime::Handle;
use tracing::{debug, warn};

use crate::config::BusConfig;
use crate::events::Event;
use crate::observers::Observe;

/// Numbers events and distributes them to observers.
///
/// ### Properties
/// - **Cloneable**: clones share one counter and one observer list.
/// - **Infallible**: `publish()` always returns normally.
/// - **Fire-and-forget**: no delivery or durability guarantees.
#[derive(Clone)]
pub struct Bus {
    inner: Arc<Inner>,
}

struct Inner {
    /// Last issued id.
    counter: Mutex<u64>,
    /// Append-only, in registration order.
    observers: RwLock<Vec<Arc<dyn Observe>>>,
    cfg: BusConfig,
    /// Runtime the bus was created in, for publishes from plain threads.
    runtime: Option<Handle>,
}

impl Bus {
    /// Creates a bus with no observers whose first id will be 1.
    ///
    /// If called inside a tokio runtime, that runtime also runs notifications
    /// for events published from threads outside it.
    #[must_use]
    pub fn new(cfg: BusConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                counter: Mutex::new(0),
                observers: RwLock::new(Vec::new()),
                cfg,
                runtime: Handle::try_current().ok(),
            }),
        }
    }

    /// Adds an observer. It receives every event published after this returns.
    ///
    /// Safe to call while other threads publish; an in-flight publish may or
    /// may not include the new observer.
    pub fn register(&self, observer: Arc<dyn Observe>) {
        self.inner
            .observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observer);
    }

    /// Assigns the next id to `ev` and notifies every observer with its own copy.
    ///
    /// Any id already set by the producer is overwritten. The payload map is
    /// always present, so downstream code never sees a missing map.
    pub fn publish(&self, mut ev: Event) {
        {
            let mut counter = self
                .inner
                .counter
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *counter += 1;
            ev.id = *counter;
        }

        if self.inner.cfg.traces(&ev.tag) {
            let stage = if ev.run_ref.is_adopted() {
                ""
            } else {
                " (trigger)"
            };
            debug!(
                "<{}-ev:{}> - bus publish type:<{}>{} from: {}",
                ev.run_ref, ev.id, ev.tag, stage, ev.source_node
            );
        }

        for observer in self.observers() {
            dispatch(self.inner.runtime.as_ref(), observer, ev.clone());
        }
    }

    /// Last id handed out; `0` before the first publish.
    pub fn last_id(&self) -> u64 {
        *self
            .inner
            .counter
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.inner
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Settings this bus was created with.
    pub fn config(&self) -> &BusConfig {
        &self.inner.cfg
    }

    /// Snapshot of the observer list, so the read lock is not held while dispatching.
    fn observers(&self) -> Vec<Arc<dyn Observe>> {
        self.inner
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new(BusConfig::default())
    }
}

impl fmt::Debug for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bus")
            .field("last_id", &self.last_id())
            .field("observers", &self.observer_count())
            .field("cfg", &self.inner.cfg)
            .finish()
    }
}

/// Launches one detached notification; never waits for it.
fn dispatch(runtime: Option<&Handle>, observer: Arc<dyn Observe>, ev: Event) {
    let fut = async move {
        let notified = AssertUnwindSafe(observer.notify(ev)).catch_unwind().await;
        if let Err(panic_err) = notified {
            warn!(
                observer = observer.name(),
                "observer panicked: {}",
                panic_message(&*panic_err)
            );
        }
    };
    spawn_detached(runtime, fut);
}

fn spawn_detached<F>(runtime: Option<&Handle>, fut: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(handle) = Handle::try_current() {
        handle.spawn(fut);
        return;
    }
    if let Some(handle) = runtime {
        handle.spawn(fut);
        return;
    }
    let spawned = std::thread::Builder::new()
        .name("runbus-notify".to_string())
        .spawn(move || futures::executor::block_on(fut));
    if let Err(err) = spawned {
        warn!("failed to start notification thread: {err}");
    }
}

fn panic_message(any: &(dyn Any + Send)) -> String {
    if let Some(msg) = any.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = any.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
