//! # Rustible Utils - Pure Utility Functions for Configuration Engines
//!
//! This crate is a plugin that extends a declarative configuration engine
//! with a fixed catalog of pure, deterministic utility functions: base64
//! encoding, hash digests, deterministic UUID derivation, string transforms
//! (slugify, truncate, reverse, case mapping, trim), and list join/split.
//!
//! ## Core Concepts
//!
//! - **Functions**: Named, independently invocable operations implementing
//!   the [`Function`](functions::Function) trait
//! - **Catalog**: A [`FunctionRegistry`](functions::FunctionRegistry)
//!   enumerating the functions for host discovery, in registration order
//! - **Values**: The three typed argument/result shapes crossing the host
//!   boundary ([`Value`](value::Value): string, 64-bit integer, list of
//!   strings)
//! - **Plugin**: The [`UtilsPlugin`](plugin::UtilsPlugin) entry point
//!   holding the version string and the built catalog
//!
//! Every function is a total deterministic mapping from its arguments to a
//! single result. No function performs I/O, reads the clock or environment,
//! uses randomness, or shares state with another invocation, so the host
//! may evaluate any number of calls concurrently without synchronization.
//!
//! ## Quick Example
//!
//! ```rust
//! use rustible_utils::{UtilsPlugin, Value};
//!
//! let plugin = UtilsPlugin::new(rustible_utils::version());
//!
//! let slug = plugin
//!     .functions()
//!     .invoke("slugify", &[Value::from("My Awesome Project!")])
//!     .unwrap();
//! assert_eq!(slug, Value::from("my-awesome-project"));
//! ```
//!
//! ## Error Handling
//!
//! A failing call returns a [`FunctionError`](functions::FunctionError)
//! tagged with the 0-based position of the offending argument; it is never
//! panicked across the function boundary and never accompanied by a partial
//! result. Two per-call kinds exist: invalid argument values (documented
//! constraint violations, arity or kind mismatches) and decode failures
//! (syntactically malformed content such as invalid base64).

#![warn(clippy::all)]

/// Typed values and the host-side JSON decoding boundary.
pub mod value;

/// The function trait, descriptors, errors, registry, and the built-in
/// catalog grouped by category.
pub mod functions;

/// Plugin entry point: version, metadata, and the built catalog.
pub mod plugin;

pub use functions::{
    ArgExt, Function, FunctionError, FunctionRegistry, FunctionResult, FunctionSpec, ParamSpec,
};
pub use plugin::{PluginMetadata, UtilsPlugin};
pub use value::{Kind, Value};

/// Returns the current version of the plugin crate.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
