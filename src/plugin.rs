//! Plugin entry point consumed by the host engine.
//!
//! The host constructs one [`UtilsPlugin`] at startup with the version it
//! wants advertised, answers its discovery call from
//! [`UtilsPlugin::functions`], and routes every expression call through
//! [`FunctionRegistry::invoke`](crate::functions::FunctionRegistry::invoke).
//! The plugin has no configuration surface and holds no mutable state, so a
//! shared reference is safe to use from concurrently evaluated expressions.

use serde::Serialize;
use tracing::debug;

use crate::functions::FunctionRegistry;

/// Identity the plugin reports to the host.
#[derive(Debug, Clone, Serialize)]
pub struct PluginMetadata {
    /// Namespace the host exposes the functions under.
    pub type_name: &'static str,
    /// Version string injected at construction.
    pub version: String,
}

/// The utils plugin: an advertised version plus the built function catalog.
pub struct UtilsPlugin {
    version: String,
    functions: FunctionRegistry,
}

impl UtilsPlugin {
    /// Build the plugin with the full built-in catalog.
    pub fn new(version: impl Into<String>) -> Self {
        let functions = FunctionRegistry::with_builtins();
        let version = version.into();
        debug!(
            version = %version,
            functions = functions.len(),
            "utils plugin catalog built"
        );
        Self { version, functions }
    }

    /// Plugin type name and version, as reported to the host.
    pub fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            type_name: "utils",
            version: self.version.clone(),
        }
    }

    /// The function catalog, in registration order.
    pub fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_metadata() {
        let plugin = UtilsPlugin::new("1.2.3");
        let metadata = plugin.metadata();
        assert_eq!(metadata.type_name, "utils");
        assert_eq!(metadata.version, "1.2.3");
    }

    #[test]
    fn test_catalog_is_complete() {
        let plugin = UtilsPlugin::new("dev");
        assert_eq!(plugin.functions().len(), 13);
    }

    #[test]
    fn test_invoke_through_plugin() {
        let plugin = UtilsPlugin::new("dev");
        let result = plugin
            .functions()
            .invoke("to_upper", &[Value::from("abc")])
            .unwrap();
        assert_eq!(result, Value::from("ABC"));
    }

    #[test]
    fn test_plugin_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UtilsPlugin>();
    }
}
