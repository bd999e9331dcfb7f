//! Generated Google API modules, re-exported under their protobuf package paths.

pub use super::googleapis::google::{api, firestore, longrunning, rpc, r#type};
