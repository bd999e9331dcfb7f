//! Firestore v1 and Firestore Admin v1 protobuf bindings with a thin gRPC
//! client on top.
//!
//! The generated messages and clients live in [`proto`]. [`init`] fixes the
//! project for the process; after that the wrappers in [`firestore`] and
//! [`longrunning`] share one authenticated channel. Regenerating the bindings
//! needs the `codegen` feature.
//!
//! ```no_run
//! # async fn run() -> Result<(), grpc_firestore::Error> {
//! #[derive(serde::Deserialize)]
//! struct User {
//!     name: String,
//! }
//!
//! grpc_firestore::init("my-project").await?;
//! let user: User = grpc_firestore::firestore::v1::collection("users")
//!     .doc("malt")
//!     .get()
//!     .await?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "codegen")]
pub mod codegen;
pub mod config;
mod extensions;
pub mod object;
pub mod proto;
pub mod serde_document;
pub mod service;
mod util;

pub use config::Config;
pub use service::google::{firestore, longrunning};
pub use service::Error;

use tracing::info;

/// Initializes the process for `project_id`'s default database and connects.
///
/// `FIRESTORE_EMULATOR_HOST`, when set, redirects every call to the emulator.
pub async fn init(project_id: impl Into<String>) -> Result<(), Error> {
    init_with_config(Config::new(project_id)).await
}

pub async fn init_with_config(config: Config) -> Result<(), Error> {
    info!(
        project_id = config.project_id(),
        database_id = config.database_id(),
        emulator_host = ?config.emulator_host(),
        "initializing"
    );
    service::init(config).await
}
