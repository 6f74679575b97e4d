/// One row of `information_schema.COLUMNS`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnMeta {
    pub name: String,          // snake_case, as declared
    pub declared_type: String, // DATA_TYPE, lower-case
    pub nullable: bool,        // IS_NULLABLE = 'YES'
    pub table_name: String,
    pub comment: String, // empty when the column has no comment
}

impl ColumnMeta {
    pub fn new(
        name: impl Into<String>,
        declared_type: impl Into<String>,
        nullable: bool,
        table_name: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            nullable,
            table_name: table_name.into(),
            comment: comment.into(),
        }
    }

    /// Reads the catalog's `YES` / `NO` nullability flag.
    pub fn parse_nullable(is_nullable: &str) -> bool {
        is_nullable.eq_ignore_ascii_case("YES")
    }
}
