mod collection_reference;
mod document_reference;

pub use collection_reference::{collection, CollectionReference};
pub use document_reference::DocumentReference;
