//! String manipulation functions.
//!
//! # Available Functions
//!
//! - `slugify`: URL-friendly slug (lowercase, hyphens, `[a-z0-9-]` only)
//! - `truncate`: Length-aware truncation with an optional suffix
//! - `reverse`: Reverse a string
//! - `to_upper` / `to_lower`: Case mapping
//! - `trim`: Strip leading and trailing whitespace
//!
//! Length, reversal, and truncation all operate on code points rather than
//! bytes so multi-byte characters are never cut in half.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::functions::{ArgExt, Function, FunctionError, FunctionResult, FunctionSpec};
use crate::value::{Kind, Value};

/// Characters not allowed in a slug, after lowercasing and space replacement.
static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new("[^a-z0-9-]+").expect("Invalid slug character regex"));

/// Runs of consecutive hyphens.
static HYPHEN_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new("-+").expect("Invalid hyphen run regex"));

/// Converts a string to a URL-friendly slug.
pub struct Slugify;

impl Function for Slugify {
    fn name(&self) -> &'static str {
        "slugify"
    }

    fn spec(&self) -> FunctionSpec {
        FunctionSpec::new(
            "slugify",
            "Converts a string to a URL-friendly slug",
            "Takes a string and converts it to lowercase, replacing spaces with hyphens and removing special characters.",
            Kind::String,
        )
        .param("input", Kind::String, "The string to slugify")
    }

    fn execute(&self, args: &[Value]) -> FunctionResult<Value> {
        let input = args.get_str(0)?;

        // Lowercasing and space replacement must happen before stripping,
        // otherwise uppercase letters and spaces would simply be deleted.
        let lowered = input.to_lowercase();
        let hyphenated = lowered.replace(' ', "-");
        let stripped = NON_SLUG_CHARS.replace_all(&hyphenated, "");
        let collapsed = HYPHEN_RUNS.replace_all(&stripped, "-");
        let result = collapsed.trim_matches('-').to_string();
        Ok(Value::String(result))
    }
}

/// Truncates a string to a maximum length in code points.
pub struct Truncate;

impl Function for Truncate {
    fn name(&self) -> &'static str {
        "truncate"
    }

    fn spec(&self) -> FunctionSpec {
        FunctionSpec::new(
            "truncate",
            "Truncates a string to a maximum length",
            "Takes a string and a maximum length, returning the truncated string with an optional suffix.",
            Kind::String,
        )
        .param("input", Kind::String, "The string to truncate")
        .param("max_length", Kind::Integer, "The maximum length of the result")
        .param(
            "suffix",
            Kind::String,
            "Optional suffix to add when truncated (e.g., '...')",
        )
    }

    fn execute(&self, args: &[Value]) -> FunctionResult<Value> {
        let input = args.get_str(0)?;
        let max_length = args.get_i64(1)?;
        let suffix = args.get_str(2)?;

        if max_length < 0 {
            return Err(FunctionError::invalid_argument(
                1,
                "max_length must be non-negative",
            ));
        }

        let chars: Vec<char> = input.chars().collect();
        if chars.len() as i64 <= max_length {
            return Ok(Value::String(input.to_string()));
        }

        // The full suffix is always kept, so the result can exceed
        // max_length when the suffix alone is longer than the limit.
        let suffix_len = suffix.chars().count() as i64;
        let keep = (max_length - suffix_len).max(0) as usize;

        let mut result: String = chars[..keep].iter().collect();
        result.push_str(suffix);
        Ok(Value::String(result))
    }
}

/// Reverses a string by code point.
pub struct Reverse;

impl Function for Reverse {
    fn name(&self) -> &'static str {
        "reverse"
    }

    fn spec(&self) -> FunctionSpec {
        FunctionSpec::new(
            "reverse",
            "Reverses a string",
            "Takes a string and returns it reversed.",
            Kind::String,
        )
        .param("input", Kind::String, "The string to reverse")
    }

    fn execute(&self, args: &[Value]) -> FunctionResult<Value> {
        let input = args.get_str(0)?;
        Ok(Value::String(input.chars().rev().collect()))
    }
}

/// Converts a string to uppercase.
pub struct ToUpper;

impl Function for ToUpper {
    fn name(&self) -> &'static str {
        "to_upper"
    }

    fn spec(&self) -> FunctionSpec {
        FunctionSpec::new(
            "to_upper",
            "Converts string to uppercase",
            "Takes a string and returns it in uppercase.",
            Kind::String,
        )
        .param("input", Kind::String, "The string to convert")
    }

    fn execute(&self, args: &[Value]) -> FunctionResult<Value> {
        let input = args.get_str(0)?;
        Ok(Value::String(input.to_uppercase()))
    }
}

/// Converts a string to lowercase.
pub struct ToLower;

impl Function for ToLower {
    fn name(&self) -> &'static str {
        "to_lower"
    }

    fn spec(&self) -> FunctionSpec {
        FunctionSpec::new(
            "to_lower",
            "Converts string to lowercase",
            "Takes a string and returns it in lowercase.",
            Kind::String,
        )
        .param("input", Kind::String, "The string to convert")
    }

    fn execute(&self, args: &[Value]) -> FunctionResult<Value> {
        let input = args.get_str(0)?;
        Ok(Value::String(input.to_lowercase()))
    }
}

/// Trims whitespace from both ends of a string.
pub struct Trim;

impl Function for Trim {
    fn name(&self) -> &'static str {
        "trim"
    }

    fn spec(&self) -> FunctionSpec {
        FunctionSpec::new(
            "trim",
            "Trims whitespace from string",
            "Takes a string and returns it with leading and trailing whitespace removed.",
            Kind::String,
        )
        .param("input", Kind::String, "The string to trim")
    }

    fn execute(&self, args: &[Value]) -> FunctionResult<Value> {
        let input = args.get_str(0)?;
        Ok(Value::String(input.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_str(function: &dyn Function, input: &str) -> String {
        match function.execute(&[Value::from(input)]).unwrap() {
            Value::String(s) => s,
            other => panic!("expected string, got {:?}", other),
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(run_str(&Slugify, "My Awesome Project!"), "my-awesome-project");
    }

    #[test]
    fn test_slugify_collapses_hyphen_runs() {
        assert_eq!(run_str(&Slugify, "a -- b"), "a-b");
        assert_eq!(run_str(&Slugify, "hello   world"), "hello-world");
    }

    #[test]
    fn test_slugify_trims_edge_hyphens() {
        assert_eq!(run_str(&Slugify, "  hello!  "), "hello");
        assert_eq!(run_str(&Slugify, "---x---"), "x");
    }

    #[test]
    fn test_slugify_strips_non_ascii() {
        assert_eq!(run_str(&Slugify, "Caffè Crème 2024"), "caff-crme-2024");
    }

    #[test]
    fn test_slugify_idempotent() {
        let once = run_str(&Slugify, "Some -- Messy! Input");
        assert_eq!(run_str(&Slugify, &once), once);
    }

    #[test]
    fn test_truncate_under_limit_returns_input() {
        let result = Truncate
            .execute(&[Value::from("hello"), Value::from(10), Value::from("...")])
            .unwrap();
        assert_eq!(result, Value::from("hello"));
    }

    #[test]
    fn test_truncate_without_suffix() {
        let result = Truncate
            .execute(&[Value::from("hello world"), Value::from(5), Value::from("")])
            .unwrap();
        assert_eq!(result, Value::from("hello"));
    }

    #[test]
    fn test_truncate_with_suffix_counts_toward_limit() {
        let result = Truncate
            .execute(&[Value::from("hello world"), Value::from(8), Value::from("...")])
            .unwrap();
        assert_eq!(result, Value::from("hello..."));
    }

    #[test]
    fn test_truncate_suffix_longer_than_limit() {
        let result = Truncate
            .execute(&[Value::from("hello world"), Value::from(2), Value::from("...")])
            .unwrap();
        // keep clamps to 0; the full suffix survives even past the limit.
        assert_eq!(result, Value::from("..."));
    }

    #[test]
    fn test_truncate_multibyte() {
        let result = Truncate
            .execute(&[Value::from("héllo wörld"), Value::from(5), Value::from("")])
            .unwrap();
        assert_eq!(result, Value::from("héllo"));
    }

    #[test]
    fn test_truncate_negative_max_length() {
        let err = Truncate
            .execute(&[Value::from("x"), Value::from(-1), Value::from("")])
            .unwrap_err();
        assert!(matches!(
            err,
            FunctionError::InvalidArgument { index: 1, .. }
        ));
    }

    #[test]
    fn test_reverse_multibyte() {
        assert_eq!(run_str(&Reverse, "héllo"), "olléh");
    }

    #[test]
    fn test_reverse_involution() {
        let once = run_str(&Reverse, "abc déf");
        assert_eq!(run_str(&Reverse, &once), "abc déf");
    }

    #[test]
    fn test_case_mapping() {
        assert_eq!(run_str(&ToUpper, "héllo"), "HÉLLO");
        assert_eq!(run_str(&ToLower, "HÉLLO"), "héllo");
    }

    #[test]
    fn test_trim() {
        assert_eq!(run_str(&Trim, "  hello\t\n"), "hello");
        assert_eq!(run_str(&Trim, "\u{00A0}spaced\u{00A0}"), "spaced");
    }
}
