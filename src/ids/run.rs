//! # Cluster-wide run references.
//!
//! A [`RunRef`] identifies one execution of one flow anywhere in the cluster.
//!
//! ```text
//! RunRef
//!   ├─ flow       which flow definition is being run
//!   ├─ run        HostedId of the host that INITIATED the run (identity)
//!   └─ exec_host  host currently (or last) EXECUTING the run (routing hint)
//! ```
//!
//! ## Rules
//! - `run.id == 0` means the reference is a placeholder that has not been
//!   adopted yet (trigger-stage events).
//! - Adoption happens once; ids are never reused or revoked.
//! - Equality and hashing consider `flow` and `run` only. Two references to the
//!   same run are equal whichever host currently executes it.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::IdError;
use crate::ids::{FlowRef, HostedId};

/// Uniquely identifies and routes a particular run across the cluster.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RunRef {
    /// Flow this run instantiates.
    pub flow: FlowRef,
    /// Host and id that initiated the run.
    ///
    /// Cluster unique, but not necessarily the host executing it (see `exec_host`).
    pub run: HostedId,
    /// Host that is executing, or executed, the run.
    pub exec_host: String,
}

impl RunRef {
    /// Creates an unadopted placeholder for a run about to start on `exec_host`.
    #[must_use]
    pub fn new(flow: FlowRef, exec_host: impl Into<String>) -> Self {
        let exec_host = exec_host.into();
        Self {
            flow,
            run: HostedId::unset(exec_host.clone()),
            exec_host,
        }
    }

    /// Creates a reference with every field given.
    #[must_use]
    pub fn with_run(flow: FlowRef, run: HostedId, exec_host: impl Into<String>) -> Self {
        Self {
            flow,
            run,
            exec_host: exec_host.into(),
        }
    }

    /// True once the reference has been assigned a concrete run id.
    #[inline]
    pub fn is_adopted(&self) -> bool {
        self.run.is_set()
    }

    /// Binds this placeholder to the run id assigned by the scheduler.
    ///
    /// ### Errors
    /// - [`IdError::AlreadyAdopted`] if a run id is already held.
    /// - [`IdError::Unassigned`] if `run` carries the reserved zero id.
    pub fn adopt(&mut self, run: HostedId) -> Result<(), IdError> {
        if self.is_adopted() {
            return Err(IdError::AlreadyAdopted {
                current: self.run.to_string(),
            });
        }
        if !run.is_set() {
            return Err(IdError::Unassigned { host: run.host });
        }
        self.run = run;
        Ok(())
    }

    /// Records that execution moved to another host. Identity is unchanged.
    pub fn migrate(&mut self, exec_host: impl Into<String>) {
        self.exec_host = exec_host.into();
    }
}

impl PartialEq for RunRef {
    fn eq(&self, other: &Self) -> bool {
        self.flow == other.flow && self.run == other.run
    }
}

impl Eq for RunRef {}

impl Hash for RunRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.flow.hash(state);
        self.run.hash(state);
    }
}

/// Diagnostic form only; not a parseable wire format.
impl fmt::Display for RunRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "runref_{}_{}", self.flow, self.run)
    }
}
