pub mod column_meta;
pub mod field_meta;
pub mod table_meta;

pub use column_meta::ColumnMeta;
pub use field_meta::FieldMeta;
pub use table_meta::TableMeta;

use std::collections::BTreeMap;

/// Catalog rows grouped by raw table name.
pub type TableColumns = BTreeMap<String, Vec<ColumnMeta>>;
