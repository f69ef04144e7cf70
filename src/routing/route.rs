//! Route definitions.
//!
//! # Responsibilities
//! - Hold the URL pattern of a route
//! - Hold matching constraints (method requirement, variable requirements)
//! - Hold defaults, including the controller reference
//!
//! # Design Decisions
//! - Reserved keys live in the same maps as user keys (`_method`, `_controller`)
//! - Requirements are stored as written; nothing is compiled here
//! - Routes are shared as `Arc<Route>` once registered

use std::collections::BTreeMap;

/// Requirement key holding the pipe-separated HTTP method constraint.
pub const METHOD_KEY: &str = "_method";

/// Default key holding the controller reference.
pub const CONTROLLER_KEY: &str = "_controller";

/// A URL pattern plus its matching constraints and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pattern: String,
    requirements: BTreeMap<String, String>,
    defaults: BTreeMap<String, String>,
}

impl Route {
    /// Create a route for `pattern`.
    ///
    /// An empty or whitespace-only pattern is stored as `/`.
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let pattern = if pattern.trim().is_empty() {
            "/".to_string()
        } else {
            pattern
        };

        Self {
            pattern,
            requirements: BTreeMap::new(),
            defaults: BTreeMap::new(),
        }
    }

    /// The raw pattern, e.g. `/users/{id}`.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Restrict the route to `method` (`GET`, or `GET|POST` for several).
    pub fn method(self, method: impl Into<String>) -> Self {
        self.assert(METHOD_KEY, method)
    }

    /// Add a requirement for a path variable.
    pub fn assert(mut self, variable: impl Into<String>, regex: impl Into<String>) -> Self {
        self.requirements.insert(variable.into(), regex.into());
        self
    }

    /// Set a default value for a path variable.
    pub fn value(mut self, variable: impl Into<String>, default: impl Into<String>) -> Self {
        self.defaults.insert(variable.into(), default.into());
        self
    }

    /// Set the controller reference.
    pub fn controller(self, controller: impl Into<String>) -> Self {
        self.value(CONTROLLER_KEY, controller)
    }

    /// The method requirement, if one was declared.
    pub fn method_requirement(&self) -> Option<&str> {
        self.requirement(METHOD_KEY)
    }

    /// Individual methods of the method requirement.
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.method_requirement()
            .into_iter()
            .flat_map(|m| m.split('|'))
    }

    pub fn requirement(&self, key: &str) -> Option<&str> {
        self.requirements.get(key).map(String::as_str)
    }

    pub fn requirements(&self) -> &BTreeMap<String, String> {
        &self.requirements
    }

    pub fn default_value(&self, key: &str) -> Option<&str> {
        self.defaults.get(key).map(String::as_str)
    }

    pub fn defaults(&self) -> &BTreeMap<String, String> {
        &self.defaults
    }

    /// The `_controller` default, if set.
    pub fn controller_ref(&self) -> Option<&str> {
        self.default_value(CONTROLLER_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pattern_becomes_root() {
        assert_eq!(Route::new("").pattern(), "/");
        assert_eq!(Route::new("   ").pattern(), "/");
    }

    #[test]
    fn test_pattern_is_kept_raw() {
        let route = Route::new("a:b|c/{x}");
        assert_eq!(route.pattern(), "a:b|c/{x}");
    }

    #[test]
    fn test_method_requirement() {
        let route = Route::new("/users").method("GET|POST");

        assert_eq!(route.method_requirement(), Some("GET|POST"));
        assert_eq!(route.methods().collect::<Vec<_>>(), vec!["GET", "POST"]);

        let any = Route::new("/users");
        assert_eq!(any.method_requirement(), None);
        assert_eq!(any.methods().count(), 0);
    }

    #[test]
    fn test_requirements_and_defaults() {
        let route = Route::new("/posts/{page}")
            .assert("page", "\\d+")
            .value("page", "1")
            .controller("posts.index");

        assert_eq!(route.requirement("page"), Some("\\d+"));
        assert_eq!(route.default_value("page"), Some("1"));
        assert_eq!(route.controller_ref(), Some("posts.index"));
        assert_eq!(route.defaults().len(), 2);
    }
}
