use once_cell::sync::OnceCell;
use thiserror::Error;

static CONFIG: OnceCell<Config> = OnceCell::new();

const DEFAULT_DATABASE_ID: &str = "(default)";
const EMULATOR_HOST_ENV: &str = "FIRESTORE_EMULATOR_HOST";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grpc_firestore::init was called more than once")]
    AlreadyInitialized,
    #[error("need to set project_id with grpc_firestore::init")]
    NotInitialized,
}

/// Process-wide connection settings, fixed by [`crate::init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    project_id: String,
    database_id: String,
    emulator_host: Option<String>,
}

impl Config {
    /// Settings for the default database of `project_id`.
    ///
    /// The emulator host is taken from `FIRESTORE_EMULATOR_HOST` when it is set
    /// and not empty.
    pub fn new(project_id: impl Into<String>) -> Config {
        let emulator_host = std::env::var(EMULATOR_HOST_ENV)
            .ok()
            .filter(|host| !host.is_empty());
        Config {
            project_id: project_id.into(),
            database_id: DEFAULT_DATABASE_ID.into(),
            emulator_host,
        }
    }

    pub fn with_database_id(mut self, database_id: impl Into<String>) -> Config {
        self.database_id = database_id.into();
        self
    }

    pub fn with_emulator_host(mut self, emulator_host: Option<String>) -> Config {
        self.emulator_host = emulator_host;
        self
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn database_id(&self) -> &str {
        &self.database_id
    }

    pub fn emulator_host(&self) -> Option<&str> {
        self.emulator_host.as_deref()
    }

    /// `projects/{project_id}/databases/{database_id}`
    pub fn database_path(&self) -> String {
        format!(
            "projects/{}/databases/{}",
            self.project_id, self.database_id
        )
    }

    /// `projects/{project_id}/databases/{database_id}/documents`
    pub fn documents_path(&self) -> String {
        format!("{}/documents", self.database_path())
    }

    /// Parent of a collection group's indexes and fields in the admin API.
    pub fn collection_group_path(&self, collection_id: &str) -> String {
        format!("{}/collectionGroups/{}", self.database_path(), collection_id)
    }
}

pub(crate) fn init(config: Config) -> Result<(), ConfigError> {
    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)
}

pub fn get() -> Result<&'static Config, ConfigError> {
    CONFIG.get().ok_or(ConfigError::NotInitialized)
}

#[cfg(test)]
mod tests {
    use super::{get, init, Config, ConfigError};

    #[test]
    fn test_paths() {
        let config = Config::new("malt03").with_emulator_host(None);
        assert_eq!("(default)", config.database_id());
        assert_eq!("projects/malt03/databases/(default)", config.database_path());
        assert_eq!(
            "projects/malt03/databases/(default)/documents",
            config.documents_path()
        );
        assert_eq!(
            "projects/malt03/databases/(default)/collectionGroups/users",
            config.collection_group_path("users")
        );

        let config = config.with_database_id("staging");
        assert_eq!(
            "projects/malt03/databases/staging/documents",
            config.documents_path()
        );
    }

    #[test]
    fn test_emulator_host() {
        let config = Config::new("p").with_emulator_host(Some("localhost:8080".into()));
        assert_eq!(Some("localhost:8080"), config.emulator_host());
    }

    #[test]
    fn test_init_twice() {
        init(Config::new("first")).unwrap();
        assert_eq!("first", get().unwrap().project_id());
        assert_eq!(
            Err(ConfigError::AlreadyInitialized),
            init(Config::new("second"))
        );
        assert_eq!("first", get().unwrap().project_id());
    }
}
