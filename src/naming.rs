//! Identifier conversion from catalog names to Go identifiers.
//!
//! Only the first character of each `_`-separated segment is upper-cased; the rest of the
//! segment is kept as written.

/// `user_name` -> `UserName`. Empty segments (leading, trailing or doubled `_`) are dropped.
pub fn camel_case(name: &str) -> String {
    name.split('_').map(capitalize).collect()
}

/// Struct name for a table. The first `_`-separated segment is treated as a table prefix and
/// stripped, so `app_user_profile` becomes `UserProfile`.
///
/// A name without any `_` is consumed entirely by the prefix and yields an empty string.
pub fn type_name(table_name: &str) -> String {
    table_name.trim().split('_').skip(1).map(capitalize).collect()
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{camel_case, type_name};

    #[test]
    fn camel_case_joins_segments() {
        assert_eq!(camel_case("user_name"), "UserName");
        assert_eq!(camel_case("id"), "Id");
        assert_eq!(camel_case("created_at"), "CreatedAt");
    }

    #[test]
    fn camel_case_drops_empty_segments() {
        assert_eq!(camel_case("_x_"), "X");
        assert_eq!(camel_case(""), "");
        assert_eq!(camel_case("a__b"), "AB");
        assert_eq!(camel_case("___"), "");
    }

    #[test]
    fn camel_case_keeps_segment_tail_as_written() {
        assert_eq!(camel_case("userID"), "UserID");
        assert_eq!(camel_case("html_URL"), "HtmlURL");
        assert_eq!(camel_case("x_y"), "XY");
    }

    #[test]
    fn type_name_strips_table_prefix() {
        assert_eq!(type_name("app_user_profile"), "UserProfile");
        assert_eq!(type_name("t_order"), "Order");
        assert_eq!(type_name("  app_user "), "User");
    }

    #[test]
    fn type_name_of_single_segment_table_is_empty() {
        // the only segment is taken as the prefix
        assert_eq!(type_name("x"), "");
        assert_eq!(type_name("users"), "");
    }
}
