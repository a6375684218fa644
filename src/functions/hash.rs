//! Hash digest functions.
//!
//! # Available Functions
//!
//! - `sha256`: SHA-256 digest as 64 lowercase hex characters
//! - `md5`: MD5 digest as 32 lowercase hex characters
//!
//! MD5 is kept for checksum-style identifiers, not for security.

use crate::functions::{ArgExt, Function, FunctionResult, FunctionSpec};
use crate::value::{Kind, Value};

/// Computes a SHA-256 hash.
pub struct Sha256;

impl Function for Sha256 {
    fn name(&self) -> &'static str {
        "sha256"
    }

    fn spec(&self) -> FunctionSpec {
        FunctionSpec::new(
            "sha256",
            "Computes SHA256 hash",
            "Takes a string and returns its SHA256 hash as a hexadecimal string.",
            Kind::String,
        )
        .param("input", Kind::String, "The string to hash")
    }

    fn execute(&self, args: &[Value]) -> FunctionResult<Value> {
        let input = args.get_str(0)?;
        Ok(Value::String(compute_sha256(input)))
    }
}

/// Computes an MD5 hash.
pub struct Md5;

impl Function for Md5 {
    fn name(&self) -> &'static str {
        "md5"
    }

    fn spec(&self) -> FunctionSpec {
        FunctionSpec::new(
            "md5",
            "Computes MD5 hash",
            "Takes a string and returns its MD5 hash as a hexadecimal string.",
            Kind::String,
        )
        .param("input", Kind::String, "The string to hash")
    }

    fn execute(&self, args: &[Value]) -> FunctionResult<Value> {
        let input = args.get_str(0)?;
        Ok(Value::String(hex::encode(md5_digest(input))))
    }
}

fn compute_sha256(data: &str) -> String {
    use sha2::Digest;
    let mut hasher = sha2::Sha256::new();
    hasher.update(data.as_bytes());
    hex::encode(hasher.finalize())
}

/// Raw 16-byte MD5 digest, shared with the deterministic UUID derivation.
pub(crate) fn md5_digest(data: &str) -> [u8; 16] {
    use md5::Digest;
    let mut hasher = md5::Md5::new();
    hasher.update(data.as_bytes());
    hasher.finalize().into()
}
