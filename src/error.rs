//! Error types used by the identity layer.
//!
//! The event bus itself is infallible: publishing never fails from the
//! caller's point of view. Errors only arise where callers hand the crate
//! external input, namely parsing a [`HostedId`](crate::HostedId) from its
//! canonical form and adopting a [`RunRef`](crate::RunRef).
//!
//! [`IdError::as_label`] gives a short stable label for logs/metrics.

use thiserror::Error;

/// # Errors produced by identity parsing and run adoption.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input did not have the `<host>-<id>` shape.
    #[error("malformed hosted id {input:?}: expected <host>-<id>")]
    Malformed {
        /// The rejected input.
        input: String,
    },

    /// The host part was empty.
    #[error("hosted id {input:?} has an empty host")]
    EmptyHost {
        /// The rejected input.
        input: String,
    },

    /// The id part was not a valid unsigned integer.
    #[error("hosted id {input:?} has a non-numeric id")]
    BadNumber {
        /// The rejected input.
        input: String,
    },

    /// A zero id was supplied where a real, assigned id is required.
    ///
    /// Zero is reserved for "unassigned" and renders as the sentinel, so
    /// `host-0` is never a canonical form and can never adopt a run.
    #[error("hosted id for host {host:?} is unassigned (id 0)")]
    Unassigned {
        /// Host the id belongs to.
        host: String,
    },

    /// The run reference was already adopted; ids are never reassigned.
    #[error("run {current} is already adopted")]
    AlreadyAdopted {
        /// Canonical form of the run id already held.
        current: String,
    },
}

impl IdError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use runbus::IdError;
    ///
    /// let err = IdError::Unassigned { host: "h1".into() };
    /// assert_eq!(err.as_label(), "id_unassigned");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            IdError::Malformed { .. } => "id_malformed",
            IdError::EmptyHost { .. } => "id_empty_host",
            IdError::BadNumber { .. } => "id_bad_number",
            IdError::Unassigned { .. } => "id_unassigned",
            IdError::AlreadyAdopted { .. } => "run_already_adopted",
        }
    }
}
