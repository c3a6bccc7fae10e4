//! Case-insensitive comparisons shared by in-memory matching and SQL patterns.

pub fn eq_ignore_case(value: &str, wanted: &str) -> bool {
    value.to_lowercase() == wanted.to_lowercase()
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// `ILIKE` pattern equivalent to [`eq_ignore_case`].
pub fn exact_pattern(value: &str) -> String {
    escape_like(value)
}

/// `ILIKE` pattern equivalent to [`contains_ignore_case`].
pub fn contains_pattern(value: &str) -> String {
    format!("%{}%", escape_like(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignore_case_handles_accents() {
        assert!(eq_ignore_case("MÉDIA", "média"));
        assert!(contains_ignore_case("Sem Glúten e sem lactose", "GLÚTEN"));
        assert!(!contains_ignore_case("vegano", "vegetariano"));
    }

    #[test]
    fn test_patterns_escape_wildcards() {
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(exact_pattern("doce"), "doce");
        assert_eq!(exact_pattern("a\\b"), "a\\\\b");
    }
}
