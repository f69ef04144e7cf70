//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check controller references are present
//! - Check method requirements are valid HTTP method tokens
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RoutingConfig → Result<(), Vec<ValidationError>>
//! - Route names are not checked; empty or repeated names are accepted

use axum::http::Method;
use thiserror::Error;

use crate::config::schema::{RouteConfig, RoutingConfig};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a routes file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route {index} ({pattern}): controller is empty")]
    EmptyController { index: usize, pattern: String },

    #[error("route {index} ({pattern}): method requirement '{method}' has an empty segment")]
    EmptyMethod {
        index: usize,
        pattern: String,
        method: String,
    },

    #[error("route {index} ({pattern}): '{method}' is not a valid HTTP method")]
    InvalidMethod {
        index: usize,
        pattern: String,
        method: String,
    },

    #[error("route {index} ({pattern}): empty key in {section}")]
    EmptyKey {
        index: usize,
        pattern: String,
        section: &'static str,
    },

    #[error("unknown log level '{0}'")]
    InvalidLogLevel(String),
}

/// Check a parsed config, collecting every problem.
pub fn validate_config(config: &RoutingConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = validate_log_level(&config.observability.log_level) {
        errors.push(e);
    }

    for (index, route) in config.routes.iter().enumerate() {
        validate_route(index, route, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check a log level name (case-insensitive).
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidLogLevel(level.to_string()))
    }
}

fn validate_route(index: usize, route: &RouteConfig, errors: &mut Vec<ValidationError>) {
    let pattern = || route.pattern.clone();

    if route.controller.trim().is_empty() {
        errors.push(ValidationError::EmptyController {
            index,
            pattern: pattern(),
        });
    }

    if let Some(requirement) = &route.method {
        for method in requirement.split('|') {
            if method.is_empty() {
                errors.push(ValidationError::EmptyMethod {
                    index,
                    pattern: pattern(),
                    method: requirement.clone(),
                });
            } else if Method::from_bytes(method.as_bytes()).is_err() {
                errors.push(ValidationError::InvalidMethod {
                    index,
                    pattern: pattern(),
                    method: method.to_string(),
                });
            }
        }
    }

    for (section, map) in [("requirements", &route.requirements), ("defaults", &route.defaults)] {
        if map.keys().any(|k| k.trim().is_empty()) {
            errors.push(ValidationError::EmptyKey {
                index,
                pattern: pattern(),
                section,
            });
        }
    }
}
