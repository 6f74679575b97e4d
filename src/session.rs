use crate::catalog::CatalogConnection;
use crate::error::SchemaError;
use tracing::{debug, warn};

/// A catalog connection together with the database currently in use.
pub struct Session<C> {
    connection: C,
    database: Option<String>,
}

impl<C: CatalogConnection> Session<C> {
    pub fn new(connection: C, database: Option<String>) -> Self {
        Session {
            connection,
            database: database.filter(|database| !database.is_empty()),
        }
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// Name of the selected database, if any.
    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    /// Switches to `database`. On failure, or for an empty name, the session is left with no
    /// database selected.
    pub async fn use_database(&mut self, database: &str) -> Result<(), SchemaError> {
        if database.is_empty() {
            self.database = None;
            return Ok(());
        }

        match self.connection.select_database(database).await {
            Ok(()) => {
                debug!(database, "database selected");
                self.database = Some(database.to_string());
                Ok(())
            }
            Err(err) => {
                warn!(database, error = %err, "failed to select database");
                self.database = None;
                Err(SchemaError::connectivity(
                    format!("cannot use database '{}'", database),
                    err,
                ))
            }
        }
    }
}
