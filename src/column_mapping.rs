use std::fmt;

/// Go types a MySQL column can be generated as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GoType {
    Int64,
    Bool,
    String,
    Time,
    Float64,
}

impl GoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoType::Int64 => "int64",
            GoType::Bool => "bool",
            GoType::String => "string",
            GoType::Time => "time.Time",
            GoType::Float64 => "float64",
        }
    }
}

impl fmt::Display for GoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeResolution {
    Resolved(GoType),
    /// No mapping for the catalog type; rendered as an empty type token.
    Unresolved,
}

impl TypeResolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, TypeResolution::Resolved(_))
    }

    /// Type token as written into the struct field.
    pub fn token(&self) -> &'static str {
        match self {
            TypeResolution::Resolved(go_type) => go_type.as_str(),
            TypeResolution::Unresolved => "",
        }
    }
}

/// Maps a catalog `DATA_TYPE` to its Go type. Matching is exact, so the input is expected in
/// the lower case MySQL reports it in.
pub fn resolve_type(declared_type: &str) -> TypeResolution {
    let go_type = match declared_type {
        "int" | "integer" | "tinyint" | "smallint" | "mediumint" | "bigint" | "int unsigned"
        | "integer unsigned" | "tinyint unsigned" | "smallint unsigned"
        | "mediumint unsigned" | "bigint unsigned" | "bit" => GoType::Int64,
        "bool" => GoType::Bool,
        "enum" | "set" | "varchar" | "char" | "tinytext" | "mediumtext" | "text" | "longtext"
        | "blob" | "tinyblob" | "mediumblob" | "longblob" | "binary" | "varbinary" => {
            GoType::String
        }
        "date" | "datetime" | "timestamp" | "time" => GoType::Time,
        "float" | "double" | "decimal" => GoType::Float64,
        _ => return TypeResolution::Unresolved,
    };

    TypeResolution::Resolved(go_type)
}
