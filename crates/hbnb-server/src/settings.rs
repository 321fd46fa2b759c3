//! Server settings, read once from `HBNB_*` environment variables

use config::{ConfigError, Environment};
use serde::Deserialize;
use std::collections::HashMap;

/// Which backend serves the storage facade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Db,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `HBNB_TYPE_STORAGE`: `file` or `db`.
    pub type_storage: StorageBackend,
    /// `HBNB_FILE_PATH`
    pub file_path: String,
    pub mysql_user: Option<String>,
    pub mysql_pwd: Option<String>,
    pub mysql_host: Option<String>,
    pub mysql_db: Option<String>,
    /// `HBNB_ENV`. `test` wipes the database schema at startup.
    pub env: Option<String>,
    /// `HBNB_DATABASE_URL`, used instead of the `HBNB_MYSQL_*` parts when set.
    pub database_url: Option<String>,
    pub bind_address: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            type_storage: StorageBackend::File,
            file_path: "file.json".to_string(),
            mysql_user: None,
            mysql_pwd: None,
            mysql_host: None,
            mysql_db: None,
            env: None,
            database_url: None,
            bind_address: "0.0.0.0:5000".to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(None)
    }

    /// Read settings from `source` instead of the process environment when
    /// given. Keys are full variable names, e.g. `HBNB_TYPE_STORAGE`.
    pub fn from_source(source: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        config::Config::builder()
            .add_source(
                Environment::with_prefix("HBNB")
                    .prefix_separator("_")
                    .separator("__")
                    .source(source),
            )
            .build()?
            .try_deserialize()
    }

    pub fn is_test(&self) -> bool {
        self.env.as_deref() == Some("test")
    }

    pub fn database_url(&self) -> String {
        if let Some(url) = &self.database_url {
            return url.clone();
        }

        format!(
            "mysql://{}:{}@{}/{}",
            self.mysql_user.as_deref().unwrap_or_default(),
            self.mysql_pwd.as_deref().unwrap_or_default(),
            self.mysql_host.as_deref().unwrap_or("localhost"),
            self.mysql_db.as_deref().unwrap_or_default(),
        )
    }
}
