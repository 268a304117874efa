//! # Event observers.
//!
//! This module provides the [`Observe`] trait and built-in implementations
//! for handling events fanned out by the [`Bus`](crate::Bus).
//!
//! ## Observer kinds
//! - **Passive observers** react to events (logging, UI feeds, alerts).
//! - **Routing observers** feed events back into execution (trigger and merge matching).
//!
//! Observers register during setup via [`Bus::register`](crate::Bus::register)
//! and are never unregistered.

mod embedded;
mod observer;

pub use embedded::LogWriter;
pub use observer::Observe;
