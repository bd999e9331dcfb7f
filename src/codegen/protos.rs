use super::{Error, Sources};
use std::{fs, path::Path};
use tracing::debug;

/// The repository a vendored proto comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Googleapis,
    /// Well-known types under `protobuf/src`.
    Protobuf,
}

/// The entry protos and everything they import, as import paths.
pub const PROTO_FILES: &[(Origin, &str)] = &[
    (Origin::Googleapis, "google/firestore/admin/v1/database.proto"),
    (Origin::Googleapis, "google/firestore/admin/v1/field.proto"),
    (Origin::Googleapis, "google/firestore/admin/v1/firestore_admin.proto"),
    (Origin::Googleapis, "google/firestore/admin/v1/index.proto"),
    (Origin::Googleapis, "google/firestore/admin/v1/location.proto"),
    (Origin::Googleapis, "google/firestore/admin/v1/operation.proto"),
    (Origin::Googleapis, "google/firestore/v1/aggregation_result.proto"),
    (Origin::Googleapis, "google/firestore/v1/bloom_filter.proto"),
    (Origin::Googleapis, "google/firestore/v1/common.proto"),
    (Origin::Googleapis, "google/firestore/v1/document.proto"),
    (Origin::Googleapis, "google/firestore/v1/firestore.proto"),
    (Origin::Googleapis, "google/firestore/v1/query.proto"),
    (Origin::Googleapis, "google/firestore/v1/write.proto"),
    (Origin::Googleapis, "google/api/annotations.proto"),
    (Origin::Googleapis, "google/api/client.proto"),
    (Origin::Googleapis, "google/api/field_behavior.proto"),
    (Origin::Googleapis, "google/api/http.proto"),
    (Origin::Googleapis, "google/api/launch_stage.proto"),
    (Origin::Googleapis, "google/api/resource.proto"),
    (Origin::Googleapis, "google/api/routing.proto"),
    (Origin::Googleapis, "google/longrunning/operations.proto"),
    (Origin::Googleapis, "google/rpc/code.proto"),
    (Origin::Googleapis, "google/rpc/status.proto"),
    (Origin::Googleapis, "google/type/latlng.proto"),
    (Origin::Protobuf, "google/protobuf/any.proto"),
    (Origin::Protobuf, "google/protobuf/descriptor.proto"),
    (Origin::Protobuf, "google/protobuf/duration.proto"),
    (Origin::Protobuf, "google/protobuf/empty.proto"),
    (Origin::Protobuf, "google/protobuf/field_mask.proto"),
    (Origin::Protobuf, "google/protobuf/struct.proto"),
    (Origin::Protobuf, "google/protobuf/timestamp.proto"),
    (Origin::Protobuf, "google/protobuf/wrappers.proto"),
];

/// Replaces the contents of `dest` with [`PROTO_FILES`] from `sources`.
///
/// Every source is checked before `dest` is touched, so a missing file leaves
/// the previous copy in place.
pub fn copy_protos(sources: &Sources, dest: &Path) -> Result<(), Error> {
    let files = PROTO_FILES
        .iter()
        .map(|(origin, path)| (sources.root(*origin).join(path), dest.join(path)))
        .collect::<Vec<_>>();
    if let Some((missing, _)) = files.iter().find(|(from, _)| !from.is_file()) {
        return Err(Error::MissingProto(missing.clone()));
    }

    if dest.exists() {
        fs::remove_dir_all(dest)?;
    }
    for (from, to) in files {
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent)?;
        }
        debug!(from = %from.display(), to = %to.display(), "copying");
        fs::copy(&from, &to)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{copy_protos, Origin, PROTO_FILES};
    use crate::codegen::{Error, Sources};
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn checkouts() -> (TempDir, Sources) {
        let root = tempdir().unwrap();
        let sources = Sources::local(root.path().join("googleapis"), root.path().join("protobuf"));
        for (origin, path) in PROTO_FILES {
            let file = sources.root(*origin).join(path);
            fs::create_dir_all(file.parent().unwrap()).unwrap();
            fs::write(&file, format!("// {}\n", path)).unwrap();
        }
        (root, sources)
    }

    #[test]
    fn test_copy_replaces_dest() {
        let (_root, sources) = checkouts();
        let dest = tempdir().unwrap();
        let stale = dest.path().join("google/firestore/v1beta1/firestore.proto");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "old").unwrap();

        copy_protos(&sources, dest.path()).unwrap();

        assert!(!stale.exists());
        for (_, path) in PROTO_FILES {
            assert_eq!(
                format!("// {}\n", path),
                fs::read_to_string(dest.path().join(path)).unwrap()
            );
        }
    }

    #[test]
    fn test_missing_proto() {
        let (_root, sources) = checkouts();
        let missing = sources
            .root(Origin::Googleapis)
            .join("google/type/latlng.proto");
        fs::remove_file(&missing).unwrap();

        let dest = tempdir().unwrap();
        let kept = dest.path().join("kept.proto");
        fs::write(&kept, "kept").unwrap();

        match copy_protos(&sources, dest.path()) {
            Err(Error::MissingProto(path)) => assert_eq!(missing, path),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(kept.exists());
    }
}
