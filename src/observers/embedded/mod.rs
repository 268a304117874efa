//! # Built-in observers
//!
//! - [`LogWriter`]: writes every event through `tracing` (demo/debug).

mod log;

pub use log::LogWriter;
