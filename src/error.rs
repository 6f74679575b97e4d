use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("1146, Table '{table}' doesn't exist")]
    TableNotFound { table: String },
    #[error("1046, No database selected")]
    NoDatabaseSelected,
    #[error("connectivity error: {context}: {source}")]
    Connectivity {
        context: String,
        #[source]
        source: sqlx::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SchemaError {
    pub fn table_not_found(table: impl Into<String>) -> Self {
        Self::TableNotFound {
            table: table.into(),
        }
    }

    pub fn connectivity(context: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Connectivity {
            context: context.into(),
            source,
        }
    }

    pub fn config(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Config {
            path: path.into(),
            source,
        }
    }

    pub fn is_table_not_found(&self) -> bool {
        matches!(self, SchemaError::TableNotFound { .. })
    }
}
