//! # Dotted-Path Resolution
//!
//! Resolves dot-delimited path strings (`"user.address.city"`) against a
//! nested JSON document by sequential key lookup, plus an ordered
//! multi-path lookup that returns the first usable value.
//!
//! ## Sentinels
//!
//! Two distinct "nothing there" outcomes exist and must not be conflated:
//!
//! - **Absent** (`None` from [`resolve_path`]) — the path failed to fully
//!   resolve: a segment was missing, or traversal hit a value it cannot
//!   index into.
//! - **Null** (`Value::Null` from [`first_value_at_paths`]) — none of the
//!   candidate paths produced a truthy value.
//!
//! ## Sharp Edge: Truthiness-Gated Traversal
//!
//! Traversal checks the *accumulator* for truthiness before every lookup,
//! using JS-style coercion over JSON values ([`is_truthy`]). A stored `0`,
//! `""`, `false`, or `null` at a non-terminal position therefore aborts
//! resolution and yields Absent, even though the value is legitimately
//! present. This is legacy behavior that downstream consumers depend on
//! and is preserved on purpose; a falsy value at the *final* position is
//! still returned, because the gate applies before indexing, never to
//! the result.

use serde_json::Value;

/// JS-style truthiness over JSON values.
///
/// `null`, `false`, numeric zero, and the empty string are falsy.
/// Everything else — including empty arrays and empty objects — is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Resolve a dot-delimited path against a nested JSON value.
///
/// Returns the value reached by sequential key lookup, or `None` (Absent)
/// if any step fails. Only objects are traversable; array indexing and
/// computed segments are unsupported. Never errors or panics.
///
/// See the module docs for the truthiness-gated traversal sharp edge.
pub fn resolve_path(data: &Value, path: &str) -> Option<Value> {
    let mut current = data;
    for segment in path.split('.') {
        if !is_truthy(current) {
            return None;
        }
        current = match current {
            Value::Object(map) => map.get(segment)?,
            _ => return None,
        };
    }
    Some(current.clone())
}

/// Return the first truthy value resolved from an ordered list of paths.
///
/// Paths are tried strictly in order through [`resolve_path`]; a resolved
/// value that is falsy (a stored `0`, `""`, `false`, or `null`) is skipped
/// exactly like a miss. Yields `Value::Null` when no path produces a
/// truthy value — the Null sentinel, distinct from [`resolve_path`]'s
/// Absent.
pub fn first_value_at_paths<S: AsRef<str>>(data: &Value, paths: &[S]) -> Value {
    for path in paths {
        if let Some(value) = resolve_path(data, path.as_ref()) {
            if is_truthy(&value) {
                return value;
            }
        }
    }
    Value::Null
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_nested_path() {
        let data = json!({"a": {"b": {"c": "d"}}});
        assert_eq!(resolve_path(&data, "a.b.c"), Some(json!("d")));
    }

    #[test]
    fn test_resolve_missing_leaf_is_absent() {
        let data = json!({"a": {"b": {"c": "d"}}});
        assert_eq!(resolve_path(&data, "a.b.e"), None);
    }

    #[test]
    fn test_resolve_missing_intermediate_is_absent() {
        let data = json!({"a": {"b": {"c": "d"}}});
        assert_eq!(resolve_path(&data, "a.x.c"), None);
    }

    #[test]
    fn test_resolve_through_non_object_is_absent() {
        let data = json!({"a": {"b": "scalar"}});
        assert_eq!(resolve_path(&data, "a.b.c"), None);
    }

    // Documented sharp edge: a falsy stored value at a non-terminal
    // position aborts traversal even though the key is present.
    #[test]
    fn test_falsy_intermediate_aborts_traversal() {
        for falsy in [json!(0), json!(""), json!(false), json!(null)] {
            let data = json!({"a": {"b": falsy}});
            assert_eq!(resolve_path(&data, "a.b.c"), None);
        }
    }

    #[test]
    fn test_falsy_terminal_value_is_returned() {
        let data = json!({"a": {"b": 0}});
        assert_eq!(resolve_path(&data, "a.b"), Some(json!(0)));

        let data = json!({"flags": {"enabled": false}});
        assert_eq!(resolve_path(&data, "flags.enabled"), Some(json!(false)));
    }

    #[test]
    fn test_single_segment_path() {
        let data = json!({"name": "ada"});
        assert_eq!(resolve_path(&data, "name"), Some(json!("ada")));
    }

    #[test]
    fn test_truthiness_coercion() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_first_value_returns_first_truthy_match() {
        let data = json!({"a": {"b": {"c": "d"}}});
        assert_eq!(first_value_at_paths(&data, &["a.b.c", "a.b.e"]), json!("d"));
        // Order matters, not specificity.
        assert_eq!(first_value_at_paths(&data, &["a.b.e", "a.b.c"]), json!("d"));
    }

    #[test]
    fn test_first_value_skips_falsy_resolutions() {
        let data = json!({"primary": 0, "fallback": 7});
        assert_eq!(
            first_value_at_paths(&data, &["primary", "fallback"]),
            json!(7)
        );
    }

    #[test]
    fn test_first_value_null_when_nothing_resolves() {
        let data = json!({"a": {"b": {"c": "d"}}});
        assert_eq!(
            first_value_at_paths(&data, &["a.b.e", "a.b.f"]),
            Value::Null
        );
    }
}
