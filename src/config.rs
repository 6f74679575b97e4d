use crate::error::SchemaError;
use serde_derive::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3306;
pub const DEFAULT_USERNAME: &str = "root";

/// Everything needed to open a connection to the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionOptions {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: Option<String>,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        ConnectionOptions {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            username: DEFAULT_USERNAME.into(),
            password: String::new(),
            database: None,
        }
    }
}

/// Partially specified connection settings, as given on the command line or in a config file.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConnectionConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
}

impl ConnectionConfig {
    /// Fills every unset value from `fallback`.
    pub fn or(self, fallback: ConnectionConfig) -> ConnectionConfig {
        ConnectionConfig {
            host: self.host.or(fallback.host),
            port: self.port.or(fallback.port),
            username: self.username.or(fallback.username),
            password: self.password.or(fallback.password),
            database: self.database.or(fallback.database),
        }
    }

    pub fn into_options(self) -> ConnectionOptions {
        let defaults = ConnectionOptions::default();

        ConnectionOptions {
            host: self.host.unwrap_or(defaults.host),
            port: self.port.unwrap_or(defaults.port),
            username: self.username.unwrap_or(defaults.username),
            password: self.password.unwrap_or(defaults.password),
            database: self.database.filter(|database| !database.is_empty()),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConfigFile {
    pub connection: ConnectionConfig,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;

        Self::parse(&content).map_err(|err| SchemaError::config(path, err))
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
