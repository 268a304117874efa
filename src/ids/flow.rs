//! # Flow and node references.
//!
//! The flow definition model lives outside this crate; these are the opaque,
//! comparable and displayable handles the identity layer and events carry.
//!
//! ```text
//! FlowRef { id: "build", ver: 3 }            → "build-3"
//! NodeRef { class: Task, id: "compile" }     → "task.compile"
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one version of a flow definition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlowRef {
    /// Flow identifier, unique across the cluster.
    pub id: String,
    /// Definition version.
    pub ver: u32,
}

impl FlowRef {
    #[must_use]
    pub fn new(id: impl Into<String>, ver: u32) -> Self {
        Self { id: id.into(), ver }
    }
}

impl fmt::Display for FlowRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.id, self.ver)
    }
}

/// Kind of node within a flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeClass {
    /// Detects an external condition and initiates a run.
    Trigger,
    /// Executes work.
    Task,
    /// Waits on several upstream events.
    Merge,
}

impl NodeClass {
    /// Lowercase name used in tags and log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeClass::Trigger => "trigger",
            NodeClass::Task => "task",
            NodeClass::Merge => "merge",
        }
    }
}

impl fmt::Display for NodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a node within the context of a flow.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeRef {
    pub class: NodeClass,
    pub id: String,
}

impl NodeRef {
    #[must_use]
    pub fn new(class: NodeClass, id: impl Into<String>) -> Self {
        Self {
            class,
            id: id.into(),
        }
    }

    #[inline]
    pub fn trigger(id: impl Into<String>) -> Self {
        Self::new(NodeClass::Trigger, id)
    }

    #[inline]
    pub fn task(id: impl Into<String>) -> Self {
        Self::new(NodeClass::Task, id)
    }

    #[inline]
    pub fn merge(id: impl Into<String>) -> Self {
        Self::new(NodeClass::Merge, id)
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.class, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_forms() {
        assert_eq!(FlowRef::new("build", 3).to_string(), "build-3");
        assert_eq!(NodeRef::task("compile").to_string(), "task.compile");
        assert_eq!(NodeRef::merge("join").to_string(), "merge.join");
    }

    #[test]
    fn test_node_class_serializes_lowercase() {
        let json = serde_json::to_string(&NodeRef::trigger("push")).unwrap();
        assert_eq!(json, r#"{"class":"trigger","id":"push"}"#);
    }
}
