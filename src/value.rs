//! Typed values crossing the host boundary.
//!
//! The host engine decodes caller-supplied expression values into [`Value`]s
//! before invoking a function, and serializes the returned [`Value`] back to
//! the caller. Three kinds exist: strings, 64-bit integers, and ordered
//! lists of strings. [`Value::from_json`] is the per-call decoder the host
//! consumes; decode failures are reported against the argument position so
//! the caller sees which expression argument was malformed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::functions::{FunctionError, FunctionResult};

/// The kind of a function parameter or return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// A UTF-8 string.
    String,
    /// A signed 64-bit integer.
    Integer,
    /// An ordered list of strings.
    List,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::String => write!(f, "string"),
            Kind::Integer => write!(f, "integer"),
            Kind::List => write!(f, "list of strings"),
        }
    }
}

/// A single typed argument or result value.
///
/// Values are owned by one invocation and discarded when it returns; nothing
/// in this crate retains a `Value` across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Integer(i64),
    List(Vec<String>),
}

impl Value {
    /// The kind this value carries.
    pub fn kind(&self) -> Kind {
        match self {
            Value::String(_) => Kind::String,
            Value::Integer(_) => Kind::Integer,
            Value::List(_) => Kind::List,
        }
    }

    /// Decode a host-side JSON value into the declared kind.
    ///
    /// `index` is the 0-based position of the argument being decoded; it is
    /// carried on the error so a failing call names the offending argument.
    pub fn from_json(index: usize, kind: Kind, json: &serde_json::Value) -> FunctionResult<Value> {
        match kind {
            Kind::String => match json.as_str() {
                Some(s) => Ok(Value::String(s.to_string())),
                None => Err(FunctionError::decode(
                    index,
                    format!("expected a string, got {}", json_type_name(json)),
                )),
            },
            Kind::Integer => match json.as_i64() {
                Some(n) => Ok(Value::Integer(n)),
                None => Err(FunctionError::decode(
                    index,
                    format!("expected an integer, got {}", json_type_name(json)),
                )),
            },
            Kind::List => match json.as_array() {
                Some(items) => {
                    let mut list = Vec::with_capacity(items.len());
                    for (position, item) in items.iter().enumerate() {
                        match item.as_str() {
                            Some(s) => list.push(s.to_string()),
                            None => {
                                return Err(FunctionError::decode(
                                    index,
                                    format!(
                                        "list element {} must be a string, got {}",
                                        position,
                                        json_type_name(item)
                                    ),
                                ))
                            }
                        }
                    }
                    Ok(Value::List(list))
                }
                None => Err(FunctionError::decode(
                    index,
                    format!("expected a list of strings, got {}", json_type_name(json)),
                )),
            },
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<Vec<String>> for Value {
    fn from(list: Vec<String>) -> Self {
        Value::List(list)
    }
}

fn json_type_name(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_of_each_variant() {
        assert_eq!(Value::from("x").kind(), Kind::String);
        assert_eq!(Value::from(7).kind(), Kind::Integer);
        assert_eq!(Value::from(vec!["a".to_string()]).kind(), Kind::List);
    }

    #[test]
    fn test_from_json_string() {
        let value = Value::from_json(0, Kind::String, &json!("hello")).unwrap();
        assert_eq!(value, Value::from("hello"));
    }

    #[test]
    fn test_from_json_integer() {
        let value = Value::from_json(1, Kind::Integer, &json!(42)).unwrap();
        assert_eq!(value, Value::from(42));
    }

    #[test]
    fn test_from_json_list() {
        let value = Value::from_json(0, Kind::List, &json!(["a", "b"])).unwrap();
        assert_eq!(
            value,
            Value::List(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_from_json_wrong_shape_is_decode_error() {
        let err = Value::from_json(2, Kind::Integer, &json!("nope")).unwrap_err();
        assert_eq!(err.argument_index(), Some(2));
        assert!(matches!(err, FunctionError::Decode { index: 2, .. }));
    }

    #[test]
    fn test_from_json_list_with_non_string_element() {
        let err = Value::from_json(0, Kind::List, &json!(["a", 3])).unwrap_err();
        assert!(err.to_string().contains("element 1"));
    }

    #[test]
    fn test_value_serializes_untagged() {
        assert_eq!(serde_json::to_value(Value::from("x")).unwrap(), json!("x"));
        assert_eq!(serde_json::to_value(Value::from(5)).unwrap(), json!(5));
        assert_eq!(
            serde_json::to_value(Value::List(vec!["a".to_string()])).unwrap(),
            json!(["a"])
        );
    }
}
