//! Function system for the utils plugin.
//!
//! This module provides the core trait, descriptor types, and registry for
//! the utility function catalog. Functions are grouped into categories:
//!
//! - **encoding**: Base64 encoding and decoding
//! - **hash**: SHA-256 and MD5 digests
//! - **ident**: Deterministic UUID derivation
//! - **strings**: Slugify, truncate, reverse, case mapping, trim
//! - **collections**: List join and split
//!
//! Every function is pure: a deterministic mapping from its arguments to a
//! single result, with no side effects and no state shared between calls.
//! The registry is immutable once built, so concurrent invocations need no
//! synchronization.

pub mod collections;
pub mod encoding;
pub mod hash;
pub mod ident;
pub mod strings;

use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, trace};

use crate::value::{Kind, Value};

/// Errors produced by function lookup, validation, or execution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FunctionError {
    /// No function with the given name exists in the catalog.
    #[error("Function not found: {0}")]
    NotFound(String),

    /// A supplied value violates a documented constraint, or the argument
    /// list does not match the declared parameters.
    #[error("Invalid value for argument {index}: {message}")]
    InvalidArgument { index: usize, message: String },

    /// A supplied value is syntactically invalid for the content format the
    /// function requires (e.g. malformed base64).
    #[error("Could not decode argument {index}: {message}")]
    Decode { index: usize, message: String },
}

impl FunctionError {
    pub fn invalid_argument(index: usize, message: impl Into<String>) -> Self {
        FunctionError::InvalidArgument {
            index,
            message: message.into(),
        }
    }

    pub fn decode(index: usize, message: impl Into<String>) -> Self {
        FunctionError::Decode {
            index,
            message: message.into(),
        }
    }

    /// The 0-based position of the offending argument, when the error is
    /// tied to one.
    pub fn argument_index(&self) -> Option<usize> {
        match self {
            FunctionError::NotFound(_) => None,
            FunctionError::InvalidArgument { index, .. } => Some(*index),
            FunctionError::Decode { index, .. } => Some(*index),
        }
    }
}

/// Result type for function operations.
pub type FunctionResult<T> = Result<T, FunctionError>;

/// Static description of one function parameter.
#[derive(Debug, Clone, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: Kind,
    pub description: &'static str,
}

/// Static metadata describing a function: name, ordered parameter list, and
/// return kind.
///
/// Specs are built once per function, are stable across calls, and are the
/// only thing the host needs for discovery and argument decoding.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionSpec {
    pub name: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub parameters: Vec<ParamSpec>,
    pub returns: Kind,
}

impl FunctionSpec {
    pub fn new(
        name: &'static str,
        summary: &'static str,
        description: &'static str,
        returns: Kind,
    ) -> Self {
        Self {
            name,
            summary,
            description,
            parameters: Vec::new(),
            returns,
        }
    }

    /// Append a parameter; call order defines argument positions.
    pub fn param(mut self, name: &'static str, kind: Kind, description: &'static str) -> Self {
        self.parameters.push(ParamSpec {
            name,
            kind,
            description,
        });
        self
    }
}

/// Trait that all catalog functions implement.
///
/// Implementations must be stateless and side-effect free: `execute` may not
/// retain or observe anything across calls, read the clock or environment,
/// or use randomness. Malformed *content* in a well-typed argument is
/// reported as a [`FunctionError`], never a panic.
pub trait Function: Send + Sync {
    /// Returns the stable function name (lowercase, underscore-separated).
    fn name(&self) -> &'static str;

    /// Returns the descriptor used by the host for discovery and decoding.
    fn spec(&self) -> FunctionSpec;

    /// Execute the function against positional arguments.
    ///
    /// [`FunctionRegistry::invoke`] has already checked the arguments
    /// against the declared parameter kinds; implementations still enforce
    /// any documented value constraint themselves.
    fn execute(&self, args: &[Value]) -> FunctionResult<Value>;
}

/// Helper trait for extracting positional arguments.
pub trait ArgExt {
    fn get_str(&self, index: usize) -> FunctionResult<&str>;
    fn get_i64(&self, index: usize) -> FunctionResult<i64>;
    fn get_list(&self, index: usize) -> FunctionResult<&[String]>;
}

impl ArgExt for [Value] {
    fn get_str(&self, index: usize) -> FunctionResult<&str> {
        match self.get(index) {
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(FunctionError::invalid_argument(
                index,
                format!("expected {}, got {}", Kind::String, other.kind()),
            )),
            None => Err(FunctionError::invalid_argument(index, "missing argument")),
        }
    }

    fn get_i64(&self, index: usize) -> FunctionResult<i64> {
        match self.get(index) {
            Some(Value::Integer(n)) => Ok(*n),
            Some(other) => Err(FunctionError::invalid_argument(
                index,
                format!("expected {}, got {}", Kind::Integer, other.kind()),
            )),
            None => Err(FunctionError::invalid_argument(index, "missing argument")),
        }
    }

    fn get_list(&self, index: usize) -> FunctionResult<&[String]> {
        match self.get(index) {
            Some(Value::List(list)) => Ok(list),
            Some(other) => Err(FunctionError::invalid_argument(
                index,
                format!("expected {}, got {}", Kind::List, other.kind()),
            )),
            None => Err(FunctionError::invalid_argument(index, "missing argument")),
        }
    }
}

/// Registry for looking up functions by name.
///
/// Iteration order is insertion order; no function depends on its position.
/// The registry is built once and only read afterwards, so a shared
/// reference can be used from any number of threads.
pub struct FunctionRegistry {
    functions: IndexMap<&'static str, Arc<dyn Function>>,
}

impl FunctionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            functions: IndexMap::new(),
        }
    }

    /// Create a registry with the full built-in catalog.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        // Encoding
        registry.register(Arc::new(encoding::Base64Encode));
        registry.register(Arc::new(encoding::Base64Decode));

        // Hashing
        registry.register(Arc::new(hash::Sha256));
        registry.register(Arc::new(hash::Md5));

        // Identifier generation
        registry.register(Arc::new(ident::UuidV4));

        // String manipulation
        registry.register(Arc::new(strings::Slugify));
        registry.register(Arc::new(strings::Truncate));
        registry.register(Arc::new(strings::Reverse));
        registry.register(Arc::new(strings::ToUpper));
        registry.register(Arc::new(strings::ToLower));
        registry.register(Arc::new(strings::Trim));

        // List operations
        registry.register(Arc::new(collections::Join));
        registry.register(Arc::new(collections::Split));
        registry
    }

    /// Register a function.
    pub fn register(&mut self, function: Arc<dyn Function>) {
        self.functions.insert(function.name(), function);
    }

    /// Get a function by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Function>> {
        self.functions.get(name).cloned()
    }

    /// Check if a function exists.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// All function names, in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.functions.keys().copied().collect()
    }

    /// Descriptors for the whole catalog, in registration order. This is
    /// what answers the host's discovery call at startup.
    pub fn specs(&self) -> Vec<FunctionSpec> {
        self.functions.values().map(|f| f.spec()).collect()
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Invoke a function by name.
    ///
    /// Arity and argument kinds are checked against the function's declared
    /// parameter list before execution; a mismatch names the first offending
    /// position. The function is never partially executed on a validation
    /// failure.
    pub fn invoke(&self, name: &str, args: &[Value]) -> FunctionResult<Value> {
        let function = self
            .get(name)
            .ok_or_else(|| FunctionError::NotFound(name.to_string()))?;

        let spec = function.spec();
        validate_args(&spec, args)?;

        debug!(function = name, args = args.len(), "invoking function");
        let result = function.execute(args);
        match &result {
            Ok(value) => trace!(function = name, kind = %value.kind(), "function returned"),
            Err(err) => debug!(function = name, error = %err, "function failed"),
        }
        result
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

fn validate_args(spec: &FunctionSpec, args: &[Value]) -> FunctionResult<()> {
    let expected = spec.parameters.len();
    if args.len() != expected {
        // Name the first missing or first extra position.
        let index = args.len().min(expected);
        return Err(FunctionError::invalid_argument(
            index,
            format!("expected {} arguments, got {}", expected, args.len()),
        ));
    }

    for (index, (param, arg)) in spec.parameters.iter().zip(args).enumerate() {
        if arg.kind() != param.kind {
            return Err(FunctionError::invalid_argument(
                index,
                format!("expected {}, got {}", param.kind, arg.kind()),
            ));
        }
    }
    Ok(())
}
