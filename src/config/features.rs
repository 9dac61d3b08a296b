//! Toggles for HTTP behaviour

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Return storage and catalog failure messages to clients instead of a
    /// generic message. Keep off in production.
    pub verbose_errors: bool,

    /// Wrap the router in a request `TraceLayer`.
    pub enable_tracing: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            verbose_errors: false,
            enable_tracing: true,
        }
    }
}
