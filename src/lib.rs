pub mod catalog;
pub mod column_mapping;
pub mod config;
pub mod database_schema;
pub mod error;
pub mod naming;
pub mod repl;
pub mod session;
pub mod struct_generator;
pub mod types;

pub use catalog::{CatalogConnection, MySqlCatalog};
pub use error::SchemaError;
pub use session::Session;
