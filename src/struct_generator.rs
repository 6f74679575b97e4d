use crate::catalog::CatalogConnection;
use crate::database_schema::get_table_columns;
use crate::session::Session;
use crate::types::{FieldMeta, TableColumns, TableMeta};
use tracing::warn;

const INDENT: &str = "\t";

/// Renders one Go struct per table, in map order. Never fails: columns with an unmapped
/// type get an empty type token.
pub fn generate(tables: &TableColumns) -> String {
    tables
        .iter()
        .map(|(table_name, columns)| render_table(&TableMeta::from_columns(table_name, columns)))
        .collect()
}

pub fn render_table(table: &TableMeta) -> String {
    let mut content = format!("type {} struct {{\n", table.type_name);

    for field in table.fields.iter() {
        if !field.field_type.is_resolved() {
            warn!(
                table = %table.table_name,
                column = %field.column_name,
                "no Go type for column, leaving it empty"
            );
        }
        content.push_str(&render_field(field));
    }

    content.push_str("}\n\n");
    content
}

pub fn render_field(field: &FieldMeta) -> String {
    let comment = if field.comment.is_empty() {
        String::new()
    } else {
        format!(" // {}", field.comment)
    };

    format!(
        "{}{} {} {}{}\n",
        INDENT,
        field.field_name,
        field.field_type.token(),
        field.tag(),
        comment
    )
}

/// Generates structs for each of `tables` in the given order.
///
/// Names are trimmed and blank names skipped, since an empty name would match every table.
/// A table that does not exist contributes its diagnostic in parentheses instead of a struct,
/// and the remaining tables are still generated. Any other error is written the same way but
/// ends the batch, keeping the blocks generated before it.
pub async fn make<C: CatalogConnection>(session: &Session<C>, tables: &[&str]) -> String {
    let mut content = String::from("\n");

    let tables = tables
        .iter()
        .map(|table| table.trim())
        .filter(|table| !table.is_empty());

    for table in tables {
        match get_table_columns(session, table).await {
            Ok(columns) => content.push_str(&generate(&columns)),
            Err(err) => {
                content.push_str(&format!("({})\n\n", err));
                if !err.is_table_not_found() {
                    warn!(table, error = %err, "stopping batch");
                    break;
                }
            }
        }
    }

    content
}
