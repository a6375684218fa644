//! Base64 encoding functions.
//!
//! # Available Functions
//!
//! - `base64_encode`: Encode a string to standard base64 with padding
//! - `base64_decode`: Decode a base64 string back to text
//!
//! Decoding reports malformed input as a structured decode error naming
//! argument 0, including payloads that decode to bytes which are not valid
//! UTF-8.

use base64::Engine;

use crate::functions::{ArgExt, Function, FunctionError, FunctionResult, FunctionSpec};
use crate::value::{Kind, Value};

/// Encodes a string to base64.
pub struct Base64Encode;

impl Function for Base64Encode {
    fn name(&self) -> &'static str {
        "base64_encode"
    }

    fn spec(&self) -> FunctionSpec {
        FunctionSpec::new(
            "base64_encode",
            "Encodes a string to base64",
            "Takes a string and returns its base64 encoded representation.",
            Kind::String,
        )
        .param("input", Kind::String, "The string to encode")
    }

    fn execute(&self, args: &[Value]) -> FunctionResult<Value> {
        let input = args.get_str(0)?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(input.as_bytes());
        Ok(Value::String(encoded))
    }
}

/// Decodes a base64 string.
pub struct Base64Decode;

impl Function for Base64Decode {
    fn name(&self) -> &'static str {
        "base64_decode"
    }

    fn spec(&self) -> FunctionSpec {
        FunctionSpec::new(
            "base64_decode",
            "Decodes a base64 string",
            "Takes a base64 encoded string and returns its decoded representation.",
            Kind::String,
        )
        .param("input", Kind::String, "The base64 string to decode")
    }

    fn execute(&self, args: &[Value]) -> FunctionResult<Value> {
        let input = args.get_str(0)?;
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(input)
            .map_err(|e| FunctionError::decode(0, format!("invalid base64 string: {}", e)))?;
        let decoded = String::from_utf8(bytes).map_err(|e| {
            FunctionError::decode(0, format!("decoded payload is not valid UTF-8: {}", e))
        })?;
        Ok(Value::String(decoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(function: &dyn Function, args: &[Value]) -> FunctionResult<Value> {
        function.execute(args)
    }

    #[test]
    fn test_encode() {
        let result = run(&Base64Encode, &[Value::from("hello")]).unwrap();
        assert_eq!(result, Value::from("aGVsbG8="));
    }

    #[test]
    fn test_encode_empty() {
        let result = run(&Base64Encode, &[Value::from("")]).unwrap();
        assert_eq!(result, Value::from(""));
    }

    #[test]
    fn test_decode() {
        let result = run(&Base64Decode, &[Value::from("aGVsbG8gd29ybGQ=")]).unwrap();
        assert_eq!(result, Value::from("hello world"));
    }

    #[test]
    fn test_decode_invalid_is_error_at_arg_zero() {
        let err = run(&Base64Decode, &[Value::from("not-valid-base64!!")]).unwrap_err();
        assert!(matches!(err, FunctionError::Decode { index: 0, .. }));
        assert!(err.to_string().contains("invalid base64"));
    }

    #[test]
    fn test_decode_non_utf8_payload_is_error() {
        // 0xFF 0xFE is valid base64 content but not valid UTF-8.
        let err = run(&Base64Decode, &[Value::from("//4=")]).unwrap_err();
        assert!(matches!(err, FunctionError::Decode { index: 0, .. }));
    }

    #[test]
    fn test_roundtrip() {
        let original = "The quick brown fox jumps over the lazy dog!";
        let encoded = run(&Base64Encode, &[Value::from(original)]).unwrap();
        let decoded = run(&Base64Decode, &[encoded]).unwrap();
        assert_eq!(decoded, Value::from(original));
    }
}
