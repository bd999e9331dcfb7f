use super::{Error, Origin, UpdateOptions};
use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};
use tracing::{debug, info};

/// Checkouts of `googleapis` and `protobuf`, cloned or supplied by the caller.
#[derive(Debug)]
pub struct Sources {
    googleapis: PathBuf,
    protobuf: PathBuf,
    clones: Vec<PathBuf>,
}

impl Sources {
    /// Uses the configured checkouts and shallow-clones the rest into
    /// `work_dir`, one repository after the other.
    pub fn fetch(options: &UpdateOptions) -> Result<Self, Error> {
        let mut clones = Vec::new();
        let mut checkout = |local: &Option<PathBuf>,
                            name: &str,
                            url: &str,
                            git_ref: &str|
         -> Result<PathBuf, Error> {
            match local {
                Some(path) => {
                    info!(path = %path.display(), "using local {}", name);
                    Ok(path.clone())
                }
                None => {
                    let dest = options.work_dir.join(name);
                    clone(url, git_ref, &dest)?;
                    clones.push(dest.clone());
                    Ok(dest)
                }
            }
        };

        fs::create_dir_all(&options.work_dir)?;
        let googleapis = checkout(
            &options.googleapis_checkout,
            "googleapis",
            &options.googleapis_url,
            &options.googleapis_ref,
        )?;
        let protobuf = checkout(
            &options.protobuf_checkout,
            "protobuf",
            &options.protobuf_url,
            &options.protobuf_ref,
        )?;
        Ok(Sources {
            googleapis,
            protobuf,
            clones,
        })
    }

    pub fn local(googleapis: impl Into<PathBuf>, protobuf: impl Into<PathBuf>) -> Self {
        Sources {
            googleapis: googleapis.into(),
            protobuf: protobuf.into(),
            clones: Vec::new(),
        }
    }

    /// The directory `origin`'s import paths are relative to.
    pub fn root(&self, origin: Origin) -> PathBuf {
        match origin {
            Origin::Googleapis => self.googleapis.clone(),
            Origin::Protobuf => self.protobuf.join("src"),
        }
    }

    /// Deletes what [`Sources::fetch`] cloned. Local checkouts stay.
    pub fn remove_clones(self) -> Result<(), Error> {
        for clone in self.clones {
            debug!(path = %clone.display(), "removing clone");
            fs::remove_dir_all(clone)?;
        }
        Ok(())
    }
}

fn clone(url: &str, git_ref: &str, dest: &Path) -> Result<(), Error> {
    if dest.exists() {
        fs::remove_dir_all(dest)?;
    }
    info!(url, git_ref, "cloning");
    let mut command = Command::new("git");
    command
        .args(["clone", "--depth", "1", "--branch", git_ref, url])
        .arg(dest);
    run_git(command)
}

fn run_git(mut command: Command) -> Result<(), Error> {
    let line = format!("{:?}", command);
    debug!(command = %line, "running");
    let status = command.status()?;
    if status.success() {
        Ok(())
    } else {
        Err(Error::Git {
            command: line,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Sources;
    use crate::codegen::{tests::git_repo, Error, Origin, UpdateOptions};
    use std::{fs, path::PathBuf};
    use tempfile::tempdir;

    #[test]
    fn test_roots() {
        let sources = Sources::local("/tmp/googleapis", "/tmp/protobuf");
        assert_eq!(PathBuf::from("/tmp/googleapis"), sources.root(Origin::Googleapis));
        assert_eq!(PathBuf::from("/tmp/protobuf/src"), sources.root(Origin::Protobuf));
        sources.remove_clones().unwrap();
    }

    #[test]
    fn test_fetch_clones_ref() {
        let root = tempdir().unwrap();
        let url = git_repo(
            &root.path().join("remote"),
            &[("google/type/latlng.proto", "syntax = \"proto3\";\n")],
        );
        let protobuf = root.path().join("protobuf");
        let options = UpdateOptions {
            work_dir: root.path().join("work"),
            googleapis_url: url,
            protobuf_checkout: Some(protobuf.clone()),
            ..Default::default()
        };

        let sources = Sources::fetch(&options).unwrap();
        let clone = options.work_dir.join("googleapis");
        assert_eq!(clone, sources.root(Origin::Googleapis));
        assert_eq!(protobuf.join("src"), sources.root(Origin::Protobuf));
        assert_eq!(
            "syntax = \"proto3\";\n",
            fs::read_to_string(clone.join("google/type/latlng.proto")).unwrap()
        );

        sources.remove_clones().unwrap();
        assert!(!clone.exists());
    }

    #[test]
    fn test_fetch_git_failure() {
        let root = tempdir().unwrap();
        let url = git_repo(&root.path().join("remote"), &[("README.md", "x\n")]);
        let missing = format!("file://{}", root.path().join("missing").display());

        for (url, git_ref) in [(url, "no-such-branch"), (missing, "main")] {
            let options = UpdateOptions {
                work_dir: root.path().join("work"),
                googleapis_url: url.clone(),
                googleapis_ref: git_ref.into(),
                protobuf_checkout: Some(root.path().join("protobuf")),
                ..Default::default()
            };
            match Sources::fetch(&options) {
                Err(Error::Git { command, status }) => {
                    assert!(!status.success());
                    assert!(command.contains(git_ref), "{}", command);
                    assert!(command.contains(&url), "{}", command);
                }
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }
}
