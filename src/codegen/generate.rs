use super::Error;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// The files handed to `protoc`; their imports are found under the proto dir.
pub const ENTRY_PROTOS: &[&str] = &[
    "google/firestore/admin/v1/firestore_admin.proto",
    "google/firestore/admin/v1/location.proto",
    "google/firestore/v1/firestore.proto",
    "google/longrunning/operations.proto",
];

/// Writes client-only bindings for [`ENTRY_PROTOS`] into `out_dir`, plus a
/// `mod.rs` that nests them by package.
pub fn generate(proto_dir: &Path, out_dir: &Path) -> Result<(), Error> {
    fs::create_dir_all(out_dir)?;
    let protos: Vec<PathBuf> = ENTRY_PROTOS.iter().map(|p| proto_dir.join(p)).collect();
    debug!(?protos, "compiling");
    tonic_build::configure()
        .include_file("mod.rs")
        .build_server(false)
        .out_dir(out_dir)
        .compile(&protos, &[proto_dir.to_path_buf()])
        .map_err(Error::Generate)
}
