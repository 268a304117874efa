//! # Observer trait.
//!
//! [`Observe`] is the extension point for anything that wants to hear about
//! published events: triggers, persistence, UI feeds, loggers.
//!
//! ## Delivery model
//! ```text
//! Bus::publish(ev) ──┬──► spawn ─► observer A.notify(copy of ev)
//!                    ├──► spawn ─► observer B.notify(copy of ev)
//!                    └──► spawn ─► observer N.notify(copy of ev)
//! ```
//!
//! ## Rules
//! - Every notification runs as its own detached task; the publisher never waits.
//! - Each call receives a private copy of the event; mutate it freely.
//! - Delivery order is **not** id order. Use [`Event::id`] to reorder if needed.
//! - No acknowledgement, no retry. A panic is caught and logged, nothing more.
//!
//! ## Example
//! ```rust
//! use async_trait::async_trait;
//! use runbus::{Event, Observe};
//!
//! struct Persist;
//!
//! #[async_trait]
//! impl Observe for Persist {
//!     async fn notify(&self, ev: Event) {
//!         if ev.is_system() {
//!             return;
//!         }
//!         // write ev to the run history store...
//!     }
//!
//!     fn name(&self) -> &'static str { "persist" }
//! }
//! ```

use async_trait::async_trait;

use crate::events::Event;

/// Receiver of published events.
///
/// ### Implementation requirements
/// - Use async I/O; avoid blocking the executor.
/// - Handle errors internally: nothing is reported back to the publisher.
/// - Tolerate out-of-order delivery.
#[async_trait]
pub trait Observe: Send + Sync + 'static {
    /// Handles one published event.
    ///
    /// Called from a detached task, never in the publisher's context.
    async fn notify(&self, event: Event);

    /// Name used in logs when a notification panics.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
