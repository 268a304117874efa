//! # Bus configuration.
//!
//! Provides [`BusConfig`], the settings read by [`Bus::new`](crate::Bus::new).
//!
//! ## Tracing
//! Each publish emits one `debug` line. Some tags are noisy (a
//! [`SYS_NODE_UPDATE`](crate::SYS_NODE_UPDATE) is issued for every line of node
//! output), so tags listed in `quiet_tags` skip the line. Quiet events are
//! still numbered and delivered.

/// Settings for an event bus.
///
/// ## Field semantics
/// - `trace`: emit the per-publish `debug` line at all
/// - `quiet_tags`: exact tags that never produce the line
#[derive(Clone, Debug)]
pub struct BusConfig {
    /// Emit a diagnostic line for every publish.
    pub trace: bool,

    /// Tags excluded from the per-publish diagnostic line.
    pub quiet_tags: Vec<String>,
}

impl BusConfig {
    /// Returns a config with `tag` added to the quiet list.
    #[must_use]
    pub fn with_quiet_tag(mut self, tag: impl Into<String>) -> Self {
        self.quiet_tags.push(tag.into());
        self
    }

    /// True if a publish with this tag should be traced.
    #[inline]
    pub fn traces(&self, tag: &str) -> bool {
        self.trace && !self.is_quiet(tag)
    }

    #[inline]
    pub fn is_quiet(&self, tag: &str) -> bool {
        self.quiet_tags.iter().any(|t| t == tag)
    }
}

impl Default for BusConfig {
    /// Default configuration:
    ///
    /// - `trace = true`
    /// - `quiet_tags = []` (every publish is traced)
    fn default() -> Self {
        Self {
            trace: true,
            quiet_tags: Vec::new(),
        }
    }
}
