//! Identity model: host-scoped ids and cluster-wide run references.
//!
//! ## Contents
//! - [`HostedId`] id unique within the host that issued it
//! - [`RunRef`] flow + initiating [`HostedId`] + executing host
//! - [`FlowRef`], [`NodeRef`], [`NodeClass`] handles into the flow definition model

mod flow;
mod hosted;
mod run;

pub use flow::{FlowRef, NodeClass, NodeRef};
pub use hosted::HostedId;
pub use run::RunRef;
