//! Utilities for records output format

/// Escape backslashes and double quotes for a quoted records field.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\\', r"\\").replace('"', r#"\""#)
}

/// Render a vertex name as a single records token.
///
/// Plain names are emitted as-is. Names that are empty, equal to `-`
/// (the empty-list marker), or contain whitespace, commas, quotes or
/// backslashes are quoted.
pub fn vertex_token(name: &str) -> String {
    let needs_quotes = name.is_empty()
        || name == "-"
        || name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, ',' | '"' | '\\'));
    if needs_quotes {
        format!("\"{}\"", escape_quotes(name))
    } else {
        name.to_string()
    }
}

/// Render a vertex list as one comma-separated token, `-` when empty
pub fn vertex_list(names: &[String]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names
            .iter()
            .map(|n| vertex_token(n))
            .collect::<Vec<_>>()
            .join(",")
    }
}
