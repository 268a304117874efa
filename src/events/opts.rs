//! # Open-ended event payload.
//!
//! [`Opts`] maps string keys to [`OptValue`]s. Compound values (`Str`, `List`,
//! `Map`) are `Arc`-backed and immutable, so cloning an `Opts` allocates a new
//! map while the values themselves are shared. That is the copy the bus hands to
//! each observer: mutating one copy's map never touches another's.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Optional data carried by an event.
pub type Opts = HashMap<String, OptValue>;

/// A dynamically-typed, immutable payload value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),
    List(Arc<[OptValue]>),
    Map(Arc<BTreeMap<String, OptValue>>),
}

impl OptValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            OptValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, OptValue::Null)
    }
}

impl From<bool> for OptValue {
    fn from(v: bool) -> Self {
        OptValue::Bool(v)
    }
}

impl From<i64> for OptValue {
    fn from(v: i64) -> Self {
        OptValue::Int(v)
    }
}

impl From<i32> for OptValue {
    fn from(v: i32) -> Self {
        OptValue::Int(i64::from(v))
    }
}

impl From<f64> for OptValue {
    fn from(v: f64) -> Self {
        OptValue::Float(v)
    }
}

impl From<&str> for OptValue {
    fn from(v: &str) -> Self {
        OptValue::Str(Arc::from(v))
    }
}

impl From<String> for OptValue {
    fn from(v: String) -> Self {
        OptValue::Str(Arc::from(v))
    }
}

impl From<Vec<OptValue>> for OptValue {
    fn from(v: Vec<OptValue>) -> Self {
        OptValue::List(Arc::from(v))
    }
}

impl From<BTreeMap<String, OptValue>> for OptValue {
    fn from(v: BTreeMap<String, OptValue>) -> Self {
        OptValue::Map(Arc::new(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_compound_storage() {
        let list = OptValue::from(vec![OptValue::from(1), OptValue::from("a")]);
        let copy = list.clone();
        match (&list, &copy) {
            (OptValue::List(a), OptValue::List(b)) => assert!(Arc::ptr_eq(a, b)),
            _ => panic!("expected lists"),
        }
    }

    #[test]
    fn test_accessors() {
        assert_eq!(OptValue::from("x").as_str(), Some("x"));
        assert_eq!(OptValue::from(7).as_i64(), Some(7));
        assert_eq!(OptValue::from(true).as_bool(), Some(true));
        assert_eq!(OptValue::from(7).as_str(), None);
        assert!(OptValue::default().is_null());
    }

    #[test]
    fn test_untagged_json_shape() {
        let mut inner = BTreeMap::new();
        inner.insert("exit".to_string(), OptValue::from(0));
        let v = OptValue::from(vec![
            OptValue::from("line"),
            OptValue::from(inner),
            OptValue::Null,
        ]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"["line",{"exit":0},null]"#);
        let back: OptValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
