//! List functions.
//!
//! # Available Functions
//!
//! - `join`: Concatenate a list of strings with a separator
//! - `split`: Split a string on every literal occurrence of a separator
//!
//! `split` preserves empty fields, so `join(split(s, sep), sep)` restores
//! the original string for any non-empty separator. An empty separator
//! splits into individual code points.

use crate::functions::{ArgExt, Function, FunctionResult, FunctionSpec};
use crate::value::{Kind, Value};

/// Joins a list of strings with a separator.
pub struct Join;

impl Function for Join {
    fn name(&self) -> &'static str {
        "join"
    }

    fn spec(&self) -> FunctionSpec {
        FunctionSpec::new(
            "join",
            "Joins a list of strings",
            "Takes a list of strings and a separator, returning them joined together.",
            Kind::String,
        )
        .param("list", Kind::List, "The list of strings to join")
        .param(
            "separator",
            Kind::String,
            "The separator to use between elements",
        )
    }

    fn execute(&self, args: &[Value]) -> FunctionResult<Value> {
        let list = args.get_list(0)?;
        let separator = args.get_str(1)?;
        Ok(Value::String(list.join(separator)))
    }
}

/// Splits a string into a list on a literal separator.
pub struct Split;

impl Function for Split {
    fn name(&self) -> &'static str {
        "split"
    }

    fn spec(&self) -> FunctionSpec {
        FunctionSpec::new(
            "split",
            "Splits a string into a list",
            "Takes a string and a separator, returning a list of substrings. An empty separator splits the string into individual characters.",
            Kind::List,
        )
        .param("input", Kind::String, "The string to split")
        .param("separator", Kind::String, "The separator to split on")
    }

    fn execute(&self, args: &[Value]) -> FunctionResult<Value> {
        let input = args.get_str(0)?;
        let separator = args.get_str(1)?;

        // A zero-length separator matches between every code point; without
        // this branch str::split would also emit empty edge fields.
        let parts: Vec<String> = if separator.is_empty() {
            input.chars().map(String::from).collect()
        } else {
            input.split(separator).map(str::to_string).collect()
        };
        Ok(Value::List(parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Value {
        Value::List(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_join() {
        let result = Join
            .execute(&[list(&["a", "b", "c"]), Value::from(", ")])
            .unwrap();
        assert_eq!(result, Value::from("a, b, c"));
    }

    #[test]
    fn test_join_empty_list() {
        let result = Join.execute(&[list(&[]), Value::from(",")]).unwrap();
        assert_eq!(result, Value::from(""));
    }

    #[test]
    fn test_join_single_element_has_no_separator() {
        let result = Join.execute(&[list(&["only"]), Value::from("-")]).unwrap();
        assert_eq!(result, Value::from("only"));
    }

    #[test]
    fn test_split() {
        let result = Split
            .execute(&[Value::from("a,b,c"), Value::from(",")])
            .unwrap();
        assert_eq!(result, list(&["a", "b", "c"]));
    }

    #[test]
    fn test_split_preserves_empty_fields() {
        let result = Split
            .execute(&[Value::from(",a,,b,"), Value::from(",")])
            .unwrap();
        assert_eq!(result, list(&["", "a", "", "b", ""]));
    }

    #[test]
    fn test_split_separator_not_found() {
        let result = Split
            .execute(&[Value::from("abc"), Value::from("|")])
            .unwrap();
        assert_eq!(result, list(&["abc"]));
    }

    #[test]
    fn test_split_empty_separator_yields_code_points() {
        let result = Split
            .execute(&[Value::from("héy"), Value::from("")])
            .unwrap();
        assert_eq!(result, list(&["h", "é", "y"]));
    }

    #[test]
    fn test_split_empty_input_empty_separator() {
        let result = Split.execute(&[Value::from(""), Value::from("")]).unwrap();
        assert_eq!(result, list(&[]));
    }

    #[test]
    fn test_join_split_roundtrip() {
        let original = "one/two/three";
        let parts = Split
            .execute(&[Value::from(original), Value::from("/")])
            .unwrap();
        let joined = Join.execute(&[parts, Value::from("/")]).unwrap();
        assert_eq!(joined, Value::from(original));
    }
}
