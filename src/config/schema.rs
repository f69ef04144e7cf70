//! Configuration schema definitions.
//!
//! This module defines the routes file structure.
//! All types derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration of a routes file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RoutingConfig {
    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Route definitions, in registration order.
    pub routes: Vec<RouteConfig>,
}

/// One route mapped to a controller.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// URL pattern, e.g. "/users/{id}".
    pub pattern: String,

    /// Method requirement ("GET", or "GET|POST"). Any method when absent.
    #[serde(default)]
    pub method: Option<String>,

    /// Controller reference.
    pub controller: String,

    /// Explicit route name. Derived from method and pattern when absent.
    #[serde(default)]
    pub name: Option<String>,

    /// Path variable requirements.
    #[serde(default)]
    pub requirements: BTreeMap<String, String>,

    /// Path variable defaults.
    #[serde(default)]
    pub defaults: BTreeMap<String, String>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
