use regex::Regex;
use std::sync::LazyLock;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug pattern"));

// 小寫字母或數字後接大寫字母
static CASE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid case boundary pattern"));

/// Converts text into a URL-friendly slug: `"Hello World!"` becomes `"hello-world"`.
///
/// Every run of characters outside `[a-z0-9]` (after lower-casing) collapses into
/// one hyphen, and hyphens at either end are dropped.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_ALPHANUMERIC
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Converts CamelCase to snake_case.
///
/// An underscore goes before each uppercase letter that follows a lowercase
/// letter or digit, so acronyms stay together: `"getHTTPResponse"` becomes
/// `"get_httpresponse"`.
pub fn camel_to_snake(text: &str) -> String {
    CASE_BOUNDARY.replace_all(text, "${1}_${2}").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World!"), "hello-world");
        assert_eq!(slugify("  Rust -- is   FUN  "), "rust-is-fun");
        assert_eq!(slugify("Version 2.0 Release"), "version-2-0-release");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slugify_non_ascii_becomes_separator() {
        assert_eq!(slugify("Café au lait"), "caf-au-lait");
        assert_eq!(slugify("日本語 text"), "text");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        let samples = [
            "Hello World!",
            "--already-a-slug--",
            "Mixed_Case and 123 numbers",
            "  trailing spaces   ",
            "a/b\\c?d=e&f",
            "Café au lait",
        ];
        for sample in samples {
            let once = slugify(sample);
            assert_eq!(slugify(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_camel_to_snake() {
        assert_eq!(camel_to_snake("CamelCase"), "camel_case");
        assert_eq!(camel_to_snake("camelCase"), "camel_case");
        assert_eq!(camel_to_snake("already_snake"), "already_snake");
        assert_eq!(camel_to_snake("version2Update"), "version2_update");
        assert_eq!(camel_to_snake("getHTTPResponse"), "get_httpresponse");
        assert_eq!(camel_to_snake("A"), "a");
        assert_eq!(camel_to_snake(""), "");
    }
}
