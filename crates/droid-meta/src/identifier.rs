//! Validation of package-style identifiers (`namespace`, `applicationId`)

use regex::Regex;
use std::sync::LazyLock;

/// One dot-separated segment: a letter followed by letters, digits or `_`.
static SEGMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").unwrap());

const JAVA_RESERVED: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while",
];

/// Why an identifier was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierIssue {
    #[error("identifier is empty")]
    Empty,

    #[error("identifier needs at least two dot-separated segments")]
    TooFewSegments,

    #[error("segment {index} is empty")]
    EmptySegment { index: usize },

    #[error("segment `{segment}` must start with a letter and contain only letters, digits or `_`")]
    InvalidSegment { segment: String },

    #[error("segment `{segment}` is a reserved Java keyword")]
    ReservedWord { segment: String },
}

/// Validate a dotted package identifier such as `com.example.wf3_app`.
///
/// Follows the Android application id rules: two or more segments, each
/// starting with an ASCII letter, no Java keywords.
pub fn validate_package_name(value: &str) -> Result<(), IdentifierIssue> {
    if value.is_empty() {
        return Err(IdentifierIssue::Empty);
    }

    let segments: Vec<&str> = value.split('.').collect();

    for (index, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            return Err(IdentifierIssue::EmptySegment { index });
        }
        if !SEGMENT_PATTERN.is_match(segment) {
            return Err(IdentifierIssue::InvalidSegment {
                segment: segment.to_string(),
            });
        }
        if JAVA_RESERVED.contains(segment) {
            return Err(IdentifierIssue::ReservedWord {
                segment: segment.to_string(),
            });
        }
    }

    if segments.len() < 2 {
        return Err(IdentifierIssue::TooFewSegments);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("com.example.wf3_app")]
    #[case("com.example.app")]
    #[case("io.flutter.Plugins")]
    #[case("a.b")]
    #[case("org.example.app2_debug")]
    fn test_valid(#[case] value: &str) {
        assert_eq!(validate_package_name(value), Ok(()));
    }

    #[rstest]
    #[case("", IdentifierIssue::Empty)]
    #[case("app", IdentifierIssue::TooFewSegments)]
    #[case("com..app", IdentifierIssue::EmptySegment { index: 1 })]
    #[case("com.example.", IdentifierIssue::EmptySegment { index: 2 })]
    #[case("com.1example", IdentifierIssue::InvalidSegment { segment: "1example".into() })]
    #[case("com.example.my-app", IdentifierIssue::InvalidSegment { segment: "my-app".into() })]
    #[case("com.example.class", IdentifierIssue::ReservedWord { segment: "class".into() })]
    #[case("com._hidden", IdentifierIssue::InvalidSegment { segment: "_hidden".into() })]
    fn test_invalid(#[case] value: &str, #[case] expected: IdentifierIssue) {
        assert_eq!(validate_package_name(value), Err(expected));
    }

    #[test]
    fn test_not_valid_bangs() {
        let issue = validate_package_name("not valid!!").unwrap_err();
        assert_eq!(
            issue,
            IdentifierIssue::InvalidSegment {
                segment: "not valid!!".into()
            }
        );
    }
}
