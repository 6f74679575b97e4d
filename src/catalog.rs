use crate::config::ConnectionOptions;
use crate::types::ColumnMeta;
use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use tracing::debug;

const CHARSET: &str = "utf8mb4";

const COLUMNS_QUERY: &str = "SELECT CAST(COLUMN_NAME AS CHAR) AS column_name, \
    CAST(DATA_TYPE AS CHAR) AS data_type, \
    CAST(IS_NULLABLE AS CHAR) AS is_nullable, \
    CAST(TABLE_NAME AS CHAR) AS table_name, \
    CAST(COLUMN_COMMENT AS CHAR) AS column_comment \
    FROM information_schema.COLUMNS WHERE table_schema = ?";

const TABLE_FILTER: &str = " AND TABLE_NAME = ?";

const ORDER_BY: &str = " ORDER BY TABLE_NAME ASC, ORDINAL_POSITION ASC";

/// Read access to a server's column catalog.
#[async_trait]
pub trait CatalogConnection: Send + Sync {
    /// Points the connection at `database`, failing if it cannot be reached.
    async fn select_database(&mut self, database: &str) -> Result<(), sqlx::Error>;

    /// Columns of `table` in `database`, ordered by table name then ordinal position.
    /// An empty `table` matches every table of the database.
    async fn column_rows(&self, database: &str, table: &str)
        -> Result<Vec<ColumnMeta>, sqlx::Error>;
}

#[derive(sqlx::FromRow)]
struct CatalogRow {
    column_name: String,
    data_type: String,
    is_nullable: String,
    table_name: String,
    column_comment: String,
}

impl From<CatalogRow> for ColumnMeta {
    fn from(row: CatalogRow) -> Self {
        ColumnMeta {
            nullable: ColumnMeta::parse_nullable(&row.is_nullable),
            name: row.column_name,
            declared_type: row.data_type,
            table_name: row.table_name,
            comment: row.column_comment,
        }
    }
}

pub fn columns_query(table: &str) -> String {
    let mut query = String::from(COLUMNS_QUERY);
    if !table.is_empty() {
        query.push_str(TABLE_FILTER);
    }
    query.push_str(ORDER_BY);
    query
}

pub struct MySqlCatalog {
    options: ConnectionOptions,
    pool: MySqlPool,
}

impl MySqlCatalog {
    /// Connects with `options` and verifies the server is reachable.
    pub async fn open(options: ConnectionOptions) -> Result<Self, sqlx::Error> {
        let pool = connect(&options, options.database.as_deref()).await?;

        Ok(MySqlCatalog { options, pool })
    }
}

async fn connect(
    options: &ConnectionOptions,
    database: Option<&str>,
) -> Result<MySqlPool, sqlx::Error> {
    let mut connect_options = MySqlConnectOptions::new()
        .host(&options.host)
        .port(options.port)
        .username(&options.username)
        .password(&options.password)
        .charset(CHARSET);

    if let Some(database) = database {
        connect_options = connect_options.database(database);
    }

    debug!(host = %options.host, port = options.port, ?database, "connecting");

    // connect_with opens a connection up front, so an unreachable server or unknown
    // database fails here
    MySqlPoolOptions::new()
        .max_connections(1)
        .connect_with(connect_options)
        .await
}

#[async_trait]
impl CatalogConnection for MySqlCatalog {
    async fn select_database(&mut self, database: &str) -> Result<(), sqlx::Error> {
        let pool = connect(&self.options, Some(database)).await?;

        let previous = std::mem::replace(&mut self.pool, pool);
        previous.close().await;
        self.options.database = Some(database.to_string());

        Ok(())
    }

    async fn column_rows(
        &self,
        database: &str,
        table: &str,
    ) -> Result<Vec<ColumnMeta>, sqlx::Error> {
        let query = columns_query(table);

        let mut statement = sqlx::query_as::<_, CatalogRow>(&query).bind(database);
        if !table.is_empty() {
            statement = statement.bind(table);
        }

        let rows = statement.fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(ColumnMeta::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::columns_query;

    #[test]
    fn query_filters_by_table_when_given() {
        let query = columns_query("app_user");

        assert!(query.contains("WHERE table_schema = ? AND TABLE_NAME = ?"));
        assert!(query.ends_with("ORDER BY TABLE_NAME ASC, ORDINAL_POSITION ASC"));
    }

    #[test]
    fn empty_table_scans_whole_database() {
        let query = columns_query("");

        assert!(!query.contains("TABLE_NAME = ?"));
        assert!(query.contains("table_schema = ?"));
        assert!(query.ends_with("ORDER BY TABLE_NAME ASC, ORDINAL_POSITION ASC"));
    }
}
