use crate::proto::google::firestore::v1::Value;
use std::fmt::Display;

/// Location of a value inside a document, printed as `/a/b[]`.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceKey {
    Root,
    Map(String, Box<TraceKey>),
    Array(Box<TraceKey>),
}

impl TraceKey {
    pub(crate) fn child(&self, key: impl Into<String>) -> TraceKey {
        TraceKey::Map(key.into(), Box::new(self.clone()))
    }

    pub(crate) fn element(&self) -> TraceKey {
        TraceKey::Array(Box::new(self.clone()))
    }
}

impl Display for TraceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TraceKey::Root => write!(f, ""),
            TraceKey::Map(key, parent) => write!(f, "{}/{}", parent, key),
            TraceKey::Array(parent) => write!(f, "{}[]", parent),
        }
    }
}

pub(crate) struct KeyValueSet(pub(crate) TraceKey, pub(crate) Value);
