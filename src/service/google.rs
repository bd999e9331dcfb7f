pub mod firestore;
pub mod longrunning;
