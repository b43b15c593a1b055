//! Field matching for find/replace

use serde_json::Value;

use crate::error::{EditorError, EditorResult};

/// Fields offered by the search dialog: (field, display name)
pub const SEARCHABLE_FIELDS: &[(&str, &str)] = &[
    ("x", "X Coordinate"),
    ("y", "Y Coordinate"),
    ("key", "Keyboard Key"),
    ("label", "Label"),
    ("comment", "Comment"),
    ("timestamp", "Delay/Timestamp"),
];

const INTEGER_FIELDS: &[&str] = &["x", "y", "dx", "dy", "count"];
const FLOAT_FIELDS: &[&str] = &["timestamp", "delay"];
const BOOL_FIELDS: &[&str] = &["pressed", "enabled", "disabled"];

/// Does a stored field value match the searched value?
///
/// Two strings match by substring containment (case-folded unless
/// `case_sensitive`). Two numbers match by numeric equality, so `5` finds
/// `5.0`. Anything else must be equal.
pub fn field_matches(stored: &Value, needle: &Value, case_sensitive: bool) -> bool {
    match (stored, needle) {
        (Value::String(hay), Value::String(pat)) => {
            if case_sensitive {
                hay.contains(pat.as_str())
            } else {
                hay.to_lowercase().contains(&pat.to_lowercase())
            }
        }
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => a == b,
        },
        _ => stored == needle,
    }
}

/// Turn raw search-box text into a value of the field's type
pub fn parse_field_value(field: &str, raw: &str) -> EditorResult<Value> {
    let text = raw.trim();
    if INTEGER_FIELDS.contains(&field) {
        let number: f64 = text
            .parse()
            .map_err(|_| EditorError::invalid_field(field, format!("'{}' is not a number", text)))?;
        if !number.is_finite() {
            return Err(EditorError::invalid_field(field, "number out of range"));
        }
        Ok(Value::from(number.trunc() as i64))
    } else if FLOAT_FIELDS.contains(&field) {
        let number: f64 = text
            .parse()
            .map_err(|_| EditorError::invalid_field(field, format!("'{}' is not a number", text)))?;
        if !number.is_finite() {
            return Err(EditorError::invalid_field(field, "number out of range"));
        }
        Ok(Value::from(number))
    } else if BOOL_FIELDS.contains(&field) {
        match text.to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(Value::Bool(true)),
            "false" | "no" | "0" => Ok(Value::Bool(false)),
            _ => Err(EditorError::invalid_field(field, "expected true or false")),
        }
    } else {
        Ok(Value::String(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_containment() {
        assert!(field_matches(&json!("Key.enter"), &json!("ENTER"), false));
        assert!(!field_matches(&json!("Key.enter"), &json!("ENTER"), true));
        assert!(field_matches(&json!("Key.enter"), &json!("enter"), true));
    }

    #[test]
    fn test_numbers_compare_by_value() {
        assert!(field_matches(&json!(5), &json!(5.0), false));
        assert!(!field_matches(&json!(5), &json!(6), false));
        // no containment for numbers
        assert!(!field_matches(&json!(150), &json!(15), false));
    }

    #[test]
    fn test_mixed_types_never_match() {
        assert!(!field_matches(&json!("5"), &json!(5), false));
        assert!(field_matches(&json!(true), &json!(true), false));
    }

    #[test]
    fn test_parse_field_value() {
        assert_eq!(parse_field_value("x", " 12 ").unwrap(), json!(12));
        assert_eq!(parse_field_value("y", "7.9").unwrap(), json!(7));
        assert_eq!(parse_field_value("timestamp", "0.5").unwrap(), json!(0.5));
        assert_eq!(parse_field_value("pressed", "True").unwrap(), json!(true));
        assert_eq!(parse_field_value("key", " a ").unwrap(), json!(" a "));
        assert!(parse_field_value("x", "left").is_err());
        assert!(parse_field_value("timestamp", "inf").is_err());
    }
}
