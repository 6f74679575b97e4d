#![allow(dead_code)]

use async_trait::async_trait;
use mystruct::types::ColumnMeta;
use mystruct::CatalogConnection;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory column catalog. Rows carry their ordinal position and are returned sorted the
/// way `information_schema` is queried: by table name, then ordinal position.
#[derive(Default)]
pub struct FakeCatalog {
    databases: HashMap<String, Vec<(u32, ColumnMeta)>>,
    pub selected: Option<String>,
    pub offline: bool,
    pub failing_table: Option<String>,
    queries: AtomicUsize,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column(
        mut self,
        database: &str,
        table: &str,
        ordinal: u32,
        column: (&str, &str, &str),
    ) -> Self {
        let (name, declared_type, comment) = column;
        self.databases
            .entry(database.to_string())
            .or_default()
            .push((ordinal, ColumnMeta::new(name, declared_type, true, table, comment)));
        self
    }

    pub fn with_database(mut self, database: &str) -> Self {
        self.databases.entry(database.to_string()).or_default();
        self
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogConnection for FakeCatalog {
    async fn select_database(&mut self, database: &str) -> Result<(), sqlx::Error> {
        if self.offline || !self.databases.contains_key(database) {
            return Err(sqlx::Error::Protocol(format!("Unknown database '{}'", database)));
        }
        self.selected = Some(database.to_string());
        Ok(())
    }

    async fn column_rows(
        &self,
        database: &str,
        table: &str,
    ) -> Result<Vec<ColumnMeta>, sqlx::Error> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        if self.offline || self.failing_table.as_deref() == Some(table) {
            return Err(sqlx::Error::PoolClosed);
        }

        let mut rows: Vec<(u32, ColumnMeta)> = self
            .databases
            .get(database)
            .map(|rows| {
                rows.iter()
                    .filter(|(_, column)| table.is_empty() || column.table_name == table)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        rows.sort_by(|(a_pos, a), (b_pos, b)| {
            a.table_name.cmp(&b.table_name).then(a_pos.cmp(b_pos))
        });

        Ok(rows.into_iter().map(|(_, column)| column).collect())
    }
}

/// `shop` with `app_user` (columns declared out of alphabetical order) and `app_order`.
pub fn shop_catalog() -> FakeCatalog {
    FakeCatalog::new()
        .with_column("shop", "app_user", 3, ("email", "varchar", "login email"))
        .with_column("shop", "app_user", 1, ("id", "bigint unsigned", ""))
        .with_column("shop", "app_user", 4, ("created_at", "datetime", "creation time"))
        .with_column("shop", "app_user", 2, ("nick_name", "varchar", ""))
        .with_column("shop", "app_order", 1, ("id", "int", ""))
        .with_column("shop", "app_order", 2, ("total", "decimal", "order total"))
        .with_column("shop", "app_order", 3, ("meta", "json", ""))
        .with_database("empty")
}
