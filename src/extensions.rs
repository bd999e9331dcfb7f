//! Hand-written helpers on the generated Firestore types.

mod common;
mod document;
mod value;
mod value_type;
