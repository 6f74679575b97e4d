use super::column_meta::ColumnMeta;
use crate::column_mapping::{resolve_type, TypeResolution};
use crate::naming::camel_case;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldMeta {
    pub field_name: String, // CamelCase
    pub field_type: TypeResolution,
    pub column_name: String, // original, used by the gorm tag
    pub json_name: String,   // CamelCase
    pub comment: String,
}

impl FieldMeta {
    /// Struct tag carrying the original column name and the json key.
    pub fn tag(&self) -> String {
        format!(
            "`gorm:\"{}\" json:\"{}\"`",
            self.column_name, self.json_name
        )
    }
}

impl From<&ColumnMeta> for FieldMeta {
    fn from(column: &ColumnMeta) -> Self {
        let field_name = camel_case(&column.name);

        FieldMeta {
            json_name: field_name.clone(),
            field_name,
            field_type: resolve_type(&column.declared_type),
            column_name: column.name.clone(),
            comment: column.comment.clone(),
        }
    }
}
