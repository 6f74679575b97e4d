use super::column_meta::ColumnMeta;
use super::field_meta::FieldMeta;
use crate::naming::type_name;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableMeta {
    pub table_name: String, // as stored in the catalog
    pub type_name: String,  // CamelCase, prefix segment stripped
    pub fields: Vec<FieldMeta>,
}

impl TableMeta {
    /// Fields keep the order of `columns`, which the fetcher returns by ordinal position.
    pub fn from_columns(table_name: &str, columns: &[ColumnMeta]) -> Self {
        TableMeta {
            table_name: table_name.to_string(),
            type_name: type_name(table_name),
            fields: columns.iter().map(FieldMeta::from).collect(),
        }
    }
}
