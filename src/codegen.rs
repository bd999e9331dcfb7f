//! Refreshes the vendored `.proto` files and the checked-in bindings under
//! `src/proto/googleapis`.
//!
//! [`run`] fetches `googleapis` and `protobuf`, copies the files listed in
//! [`PROTO_FILES`] into the proto directory and regenerates the Rust code with
//! `tonic-build`. Generation needs `protoc` on `PATH` (or `PROTOC` set).

mod generate;
mod protos;
mod sources;

pub use generate::{generate, ENTRY_PROTOS};
pub use protos::{copy_protos, Origin, PROTO_FILES};
pub use sources::Sources;

use std::{io, path::PathBuf, process::ExitStatus};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum Error {
    #[error("`{command}` failed with {status}")]
    Git { command: String, status: ExitStatus },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("{} is missing from the checkout", .0.display())]
    MissingProto(PathBuf),
    #[error("failed to generate bindings: {0}")]
    Generate(io::Error),
}

#[derive(Debug, Clone)]
pub struct UpdateOptions {
    /// Where repositories are cloned.
    pub work_dir: PathBuf,
    pub proto_dir: PathBuf,
    pub out_dir: PathBuf,
    pub googleapis_url: String,
    pub googleapis_ref: String,
    pub protobuf_url: String,
    pub protobuf_ref: String,
    /// Existing checkouts used instead of cloning.
    pub googleapis_checkout: Option<PathBuf>,
    pub protobuf_checkout: Option<PathBuf>,
    /// Keep the clones in `work_dir` afterwards.
    pub keep: bool,
    /// Only refresh `proto_dir`.
    pub skip_generate: bool,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        UpdateOptions {
            work_dir: std::env::temp_dir().join("grpc_firestore-update"),
            proto_dir: PathBuf::from("proto"),
            out_dir: PathBuf::from("src/proto/googleapis"),
            googleapis_url: "https://github.com/googleapis/googleapis.git".into(),
            googleapis_ref: "master".into(),
            protobuf_url: "https://github.com/protocolbuffers/protobuf.git".into(),
            protobuf_ref: "main".into(),
            googleapis_checkout: None,
            protobuf_checkout: None,
            keep: false,
            skip_generate: false,
        }
    }
}

pub fn run(options: &UpdateOptions) -> Result<(), Error> {
    info!(work_dir = %options.work_dir.display(), "fetching proto sources");
    let sources = Sources::fetch(options)?;

    let result = update(&sources, options);
    if options.keep {
        info!(work_dir = %options.work_dir.display(), "keeping clones");
        result
    } else {
        // clones go even when an update step failed
        let removed = sources.remove_clones();
        result.and(removed)
    }
}

fn update(sources: &Sources, options: &UpdateOptions) -> Result<(), Error> {
    info!(proto_dir = %options.proto_dir.display(), "copying {} proto files", PROTO_FILES.len());
    copy_protos(sources, &options.proto_dir)?;

    if options.skip_generate {
        info!("skipping code generation");
        Ok(())
    } else {
        info!(out_dir = %options.out_dir.display(), "generating bindings");
        generate(&options.proto_dir, &options.out_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::{run, Error, UpdateOptions, PROTO_FILES};
    use std::{fs, path::Path, process::Command};
    use tempfile::tempdir;

    /// Commits `files` to branch `main` of a new repository at `dir` and
    /// returns its `file://` URL.
    pub(super) fn git_repo(dir: &Path, files: &[(&str, &str)]) -> String {
        let git = |args: &[&str]| {
            let status = Command::new("git")
                .arg("-C")
                .arg(dir)
                .args(args)
                .status()
                .unwrap();
            assert!(status.success(), "git {:?} failed", args);
        };
        fs::create_dir_all(dir).unwrap();
        git(&["init", "-q"]);
        git(&["symbolic-ref", "HEAD", "refs/heads/main"]);
        for (path, contents) in files {
            let file = dir.join(path);
            fs::create_dir_all(file.parent().unwrap()).unwrap();
            fs::write(file, contents).unwrap();
        }
        git(&["add", "."]);
        git(&[
            "-c",
            "user.name=update-protos",
            "-c",
            "user.email=update-protos@localhost",
            "-c",
            "commit.gpgsign=false",
            "commit",
            "-q",
            "-m",
            "protos",
        ]);
        format!("file://{}", dir.display())
    }

    #[test]
    fn test_run_with_checkouts() {
        let root = tempdir().unwrap();
        let googleapis = root.path().join("googleapis");
        let protobuf = root.path().join("protobuf");
        for (origin, path) in PROTO_FILES {
            let file = match origin {
                super::Origin::Googleapis => googleapis.join(path),
                super::Origin::Protobuf => protobuf.join("src").join(path),
            };
            fs::create_dir_all(file.parent().unwrap()).unwrap();
            fs::write(&file, "syntax = \"proto3\";\n").unwrap();
        }

        let options = UpdateOptions {
            work_dir: root.path().join("work"),
            proto_dir: root.path().join("proto"),
            googleapis_checkout: Some(googleapis.clone()),
            protobuf_checkout: Some(protobuf),
            skip_generate: true,
            ..Default::default()
        };
        run(&options).unwrap();

        assert!(options
            .proto_dir
            .join("google/firestore/v1/firestore.proto")
            .is_file());
        assert!(options
            .proto_dir
            .join("google/firestore/admin/v1/firestore_admin.proto")
            .is_file());
        assert!(options.proto_dir.join("google/protobuf/timestamp.proto").is_file());
        // local checkouts are never removed
        assert!(googleapis.is_dir());
    }

    #[test]
    fn test_failed_run_removes_clones() {
        let root = tempdir().unwrap();
        let url = git_repo(&root.path().join("remote"), &[("README.md", "no protos\n")]);
        let protobuf = root.path().join("protobuf");
        fs::create_dir_all(&protobuf).unwrap();

        let mut options = UpdateOptions {
            work_dir: root.path().join("work"),
            proto_dir: root.path().join("proto"),
            googleapis_url: url,
            protobuf_checkout: Some(protobuf.clone()),
            skip_generate: true,
            ..Default::default()
        };
        let clone = options.work_dir.join("googleapis");

        match run(&options) {
            Err(Error::MissingProto(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(!clone.exists());
        assert!(protobuf.is_dir());

        options.keep = true;
        match run(&options) {
            Err(Error::MissingProto(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(clone.join("README.md").is_file());
    }
}
