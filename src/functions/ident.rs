//! Deterministic identifier generation.
//!
//! # Available Functions
//!
//! - `uuidv4`: UUID-shaped identifier derived from the MD5 digest of the
//!   input
//!
//! The same input always yields the same identifier. The version nibble is
//! forced to 4 and the variant bits to the RFC 4122 pattern so the output
//! parses as a v4 UUID everywhere, but it carries no randomness.

use crate::functions::hash::md5_digest;
use crate::functions::{ArgExt, Function, FunctionResult, FunctionSpec};
use crate::value::{Kind, Value};

/// Derives a deterministic UUID v4 from a seed string.
pub struct UuidV4;

impl Function for UuidV4 {
    fn name(&self) -> &'static str {
        "uuidv4"
    }

    fn spec(&self) -> FunctionSpec {
        FunctionSpec::new(
            "uuidv4",
            "Generates a deterministic UUID v4",
            "Takes a string and generates a deterministic UUID v4 based on that string using MD5 hashing.",
            Kind::String,
        )
        .param("input", Kind::String, "The string to use as seed for UUID generation")
    }

    fn execute(&self, args: &[Value]) -> FunctionResult<Value> {
        let input = args.get_str(0)?;

        let mut digest = md5_digest(input);
        // Version and variant bits per RFC 4122.
        digest[6] = (digest[6] & 0x0f) | 0x40;
        digest[8] = (digest[8] & 0x3f) | 0x80;

        let result = format!(
            "{}-{}-{}-{}-{}",
            hex::encode(&digest[0..4]),
            hex::encode(&digest[4..6]),
            hex::encode(&digest[6..8]),
            hex::encode(&digest[8..10]),
            hex::encode(&digest[10..16]),
        );
        Ok(Value::String(result))
    }
}
