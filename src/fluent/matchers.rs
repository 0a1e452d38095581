//! Pattern matching utilities for property assertions.
//!
//! Patterns are tried as glob, then regex, then exact literal comparison, so
//! callers can write `*.jar`, `^1\.\d+$`, or a plain value interchangeably.

use glob::Pattern;
use regex::Regex;
use std::collections::HashMap;

/// Match a single pattern against an actual value.
///
/// Matching modes, tried in order:
/// 1. **Glob**: e.g. `*.jar`, `org.example.*`
/// 2. **Regex**: e.g. `^1\.\d+(\.\d+)?$`
/// 3. **Exact**: literal string comparison
///
/// # Example
///
/// ```rust
/// use buildcheck::value_matches;
///
/// assert!(value_matches("*.jar", "widget-1.0.jar"));
/// assert!(value_matches(r"^\d+\.\d+$", "1.2"));
/// assert!(value_matches("release", "release"));
/// assert!(!value_matches("*.jar", "widget.pom"));
/// ```
/// Compile a pattern that must match an entire string, not a substring.
///
/// The `*_matches` predicates on paths and output compare against the whole
/// value, so `:compile` does not match `:compileJava`.
pub(crate) fn whole_string_regex(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"\A(?:{pattern})\z"))
}

pub fn value_matches(pattern: &str, actual: &str) -> bool {
    if let Ok(glob) = Pattern::new(pattern) {
        if glob.matches(actual) {
            return true;
        }
    }

    if let Ok(re) = Regex::new(pattern) {
        if re.is_match(actual) {
            return true;
        }
    }

    actual == pattern
}

/// Match a map of expected property patterns against a JSON property map.
///
/// Every expected key must be present and its value must satisfy
/// [`value_matches`]. Non-string property values are compared through their
/// JSON rendering.
///
/// # Example
///
/// ```rust
/// use buildcheck::{props, props_match};
///
/// let properties = serde_json::json!({"version": "1.2.3", "release": true});
/// let properties = properties.as_object().unwrap();
///
/// assert!(props_match(&props! {"version" => r"1\.\d+\.\d+"}, properties));
/// assert!(!props_match(&props! {"missing" => ".*"}, properties));
/// ```
pub fn props_match(
    expected: &HashMap<String, String>,
    actual: &serde_json::Map<String, serde_json::Value>,
) -> bool {
    for (key, pattern) in expected {
        let actual_str = match actual.get(key) {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(v) => v.to_string(),
            None => return false,
        };

        if !value_matches(pattern, &actual_str) {
            return false;
        }
    }

    true
}

/// Create a property expectation map from key-value pairs.
///
/// # Example
///
/// ```rust
/// use buildcheck::props;
///
/// let expected = props! {
///     "version" => "1.*",
///     "group" => "org.example"
/// };
/// assert_eq!(expected.len(), 2);
/// ```
#[macro_export]
macro_rules! props {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut map = std::collections::HashMap::new();
        $(
            map.insert($key.to_string(), $value.to_string());
        )*
        map
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_glob_matching() {
        assert!(value_matches("*.jar", "widget.jar"));
        assert!(value_matches("org.example.*", "org.example.widget"));
        assert!(!value_matches("*.jar", "widget.pom"));
    }

    #[test]
    fn test_regex_matching() {
        assert!(value_matches(r"^1\.(2|3)\.\d+$", "1.2.9"));
        assert!(value_matches(r"^1\.(2|3)\.\d+$", "1.3.0"));
        assert!(!value_matches(r"^1\.(2|3)\.\d+$", "2.0.0"));
    }

    #[test]
    fn test_exact_matching() {
        assert!(value_matches("unspecified", "unspecified"));
        assert!(!value_matches("unspecified", "1.0.0"));
    }

    #[test]
    fn test_props_match_missing_key() {
        let actual = as_map(json!({"group": "org.example"}));
        assert!(!props_match(&props! {"version" => ".*"}, &actual));
    }

    #[test]
    fn test_props_match_multiple() {
        let actual = as_map(json!({"group": "org.example", "version": "1.4.2"}));

        assert!(props_match(
            &props! {"group" => "org.example.*", "version" => "1.*"},
            &actual
        ));
        assert!(!props_match(
            &props! {"group" => "org.example.*", "version" => "2.*"},
            &actual
        ));
    }

    #[test]
    fn test_props_match_non_string_values() {
        let actual = as_map(json!({"release": true, "build_number": 42}));

        assert!(props_match(&props! {"release" => "true"}, &actual));
        assert!(props_match(&props! {"build_number" => "42"}, &actual));
    }

    #[test]
    fn test_props_macro() {
        let expected = props! {
            "version" => "1.*",
            "group" => "org.example",
        };

        assert_eq!(expected.get("version"), Some(&"1.*".to_string()));
        assert_eq!(expected.get("group"), Some(&"org.example".to_string()));
    }
}
