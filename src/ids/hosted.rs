//! # Host-scoped identifiers.
//!
//! A [`HostedId`] pairs the owning host's name with an id that is only unique
//! within that host's own numbering. Id `0` is reserved for "unassigned" and
//! renders as [`HostedId::UNSET_SENTINEL`] rather than `host-0`.
//!
//! ## Canonical form
//! ```text
//! HostedId { host: "h1", id: 5 }   → "h1-5"
//! HostedId { host: "h1", id: 0 }   → "na"
//! ```
//! Parsing splits on the **last** `-`, so host names may themselves contain dashes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IdError;

/// An id unique within the scope of the host that created it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostedId {
    /// Name of the owning host.
    pub host: String,
    /// Host-local sequence number; `0` means unassigned.
    pub id: u64,
}

impl HostedId {
    /// Rendering of any id with `id == 0`.
    pub const UNSET_SENTINEL: &'static str = "na";

    #[must_use]
    pub fn new(host: impl Into<String>, id: u64) -> Self {
        Self {
            host: host.into(),
            id,
        }
    }

    /// Unassigned id owned by `host`.
    #[must_use]
    pub fn unset(host: impl Into<String>) -> Self {
        Self::new(host, 0)
    }

    /// True once a real, non-zero id has been assigned.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.id != 0
    }
}

impl fmt::Display for HostedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.id == 0 {
            return f.write_str(Self::UNSET_SENTINEL);
        }
        write!(f, "{}-{}", self.host, self.id)
    }
}

impl FromStr for HostedId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::UNSET_SENTINEL {
            return Ok(Self::default());
        }
        let (host, id) = s.rsplit_once('-').ok_or_else(|| IdError::Malformed {
            input: s.to_owned(),
        })?;
        if host.is_empty() {
            return Err(IdError::EmptyHost {
                input: s.to_owned(),
            });
        }
        let id: u64 = id.parse().map_err(|_| IdError::BadNumber {
            input: s.to_owned(),
        })?;
        if id == 0 {
            return Err(IdError::Unassigned {
                host: host.to_owned(),
            });
        }
        Ok(Self::new(host, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_renders_sentinel_for_any_host() {
        for host in ["", "x", "host-with-dash", "h1"] {
            assert_eq!(HostedId::new(host, 0).to_string(), "na");
        }
    }

    #[test]
    fn test_assigned_renders_host_and_id() {
        assert_eq!(HostedId::new("x", 5).to_string(), "x-5");
        assert_eq!(HostedId::new("eu-west-1", 42).to_string(), "eu-west-1-42");
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(HostedId::new("h1", 5), HostedId::new("h1", 5));
        assert_ne!(HostedId::new("h1", 5), HostedId::new("h2", 5));
        assert_ne!(HostedId::new("h1", 5), HostedId::new("h1", 6));
    }

    #[test]
    fn test_parse_canonical_form() {
        let id: HostedId = "eu-west-1-42".parse().unwrap();
        assert_eq!(id, HostedId::new("eu-west-1", 42));

        let unset: HostedId = "na".parse().unwrap();
        assert!(!unset.is_set());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "nodash".parse::<HostedId>(),
            Err(IdError::Malformed { .. })
        ));
        assert!(matches!(
            "-5".parse::<HostedId>(),
            Err(IdError::EmptyHost { .. })
        ));
        assert!(matches!(
            "h1-five".parse::<HostedId>(),
            Err(IdError::BadNumber { .. })
        ));
        assert!(matches!(
            "h1-0".parse::<HostedId>(),
            Err(IdError::Unassigned { .. })
        ));
    }
}
