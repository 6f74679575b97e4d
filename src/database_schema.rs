use crate::catalog::CatalogConnection;
use crate::error::SchemaError;
use crate::session::Session;
use crate::types::{ColumnMeta, TableColumns};
use tracing::debug;

/// Fetches the columns of `table` from the session's database, grouped by table name.
///
/// Zero matching rows is reported as [`SchemaError::TableNotFound`]; this is the only way a
/// missing table is detected.
pub async fn get_table_columns<C: CatalogConnection>(
    session: &Session<C>,
    table: &str,
) -> Result<TableColumns, SchemaError> {
    let database = session.database().ok_or(SchemaError::NoDatabaseSelected)?;

    debug!(database, table, "querying column catalog");

    let rows: Vec<ColumnMeta> = session
        .connection()
        .column_rows(database, table)
        .await
        .map_err(|err| {
            SchemaError::connectivity(format!("failed to read columns of '{}'", table), err)
        })?;

    if rows.is_empty() {
        return Err(SchemaError::table_not_found(table));
    }

    Ok(group_by_table(rows))
}

/// Groups rows by their table, keeping row order inside each group.
pub fn group_by_table(rows: Vec<ColumnMeta>) -> TableColumns {
    rows.into_iter()
        .fold(TableColumns::new(), |mut tables, column| {
            tables
                .entry(column.table_name.clone())
                .or_insert_with(Vec::new)
                .push(column);
            tables
        })
}
