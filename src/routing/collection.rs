//! Controller registration.
//!
//! # Responsibilities
//! - Create routes and their bindings at registration time
//! - Hand bindings back to the caller for renaming
//! - Seal everything into a `RouteTable`
//!
//! # Design Decisions
//! - Registration order is preserved through to the table
//! - `flush` drains the collection; the same binding is never sealed twice

use std::sync::Arc;

use crate::config::schema::{RouteConfig, RoutingConfig};
use crate::routing::binding::ControllerBinding;
use crate::routing::route::Route;
use crate::routing::table::RouteTable;

/// Bindings registered but not yet sealed.
#[derive(Debug, Default)]
pub struct ControllerCollection {
    bindings: Vec<ControllerBinding>,
}

impl ControllerCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from configured routes, applying explicit names.
    pub fn from_config(config: &RoutingConfig) -> Self {
        let bindings = config
            .routes
            .iter()
            .map(|route_config| {
                let route = Arc::new(route_from_config(route_config));
                match &route_config.name {
                    Some(name) => ControllerBinding::named(route, name.as_str()),
                    None => ControllerBinding::new(route),
                }
            })
            .collect();

        Self { bindings }
    }

    /// Register an existing route.
    pub fn add(&mut self, route: Arc<Route>) -> &mut ControllerBinding {
        let index = self.bindings.len();
        self.bindings.push(ControllerBinding::new(route));
        &mut self.bindings[index]
    }

    /// Map `pattern` to `controller` for any method.
    pub fn match_route(
        &mut self,
        pattern: impl Into<String>,
        controller: impl Into<String>,
    ) -> &mut ControllerBinding {
        self.add(Arc::new(Route::new(pattern).controller(controller)))
    }

    fn with_method(
        &mut self,
        method: &str,
        pattern: impl Into<String>,
        controller: impl Into<String>,
    ) -> &mut ControllerBinding {
        self.add(Arc::new(Route::new(pattern).method(method).controller(controller)))
    }

    pub fn get(
        &mut self,
        pattern: impl Into<String>,
        controller: impl Into<String>,
    ) -> &mut ControllerBinding {
        self.with_method("GET", pattern, controller)
    }

    pub fn post(
        &mut self,
        pattern: impl Into<String>,
        controller: impl Into<String>,
    ) -> &mut ControllerBinding {
        self.with_method("POST", pattern, controller)
    }

    pub fn put(
        &mut self,
        pattern: impl Into<String>,
        controller: impl Into<String>,
    ) -> &mut ControllerBinding {
        self.with_method("PUT", pattern, controller)
    }

    pub fn patch(
        &mut self,
        pattern: impl Into<String>,
        controller: impl Into<String>,
    ) -> &mut ControllerBinding {
        self.with_method("PATCH", pattern, controller)
    }

    pub fn delete(
        &mut self,
        pattern: impl Into<String>,
        controller: impl Into<String>,
    ) -> &mut ControllerBinding {
        self.with_method("DELETE", pattern, controller)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Freeze every registered binding and move it into a new table.
    pub fn flush(&mut self) -> RouteTable {
        let mut table = RouteTable::default();
        for binding in self.bindings.drain(..) {
            table.insert(binding);
        }

        tracing::info!(routes = table.len(), "Route table sealed");
        table
    }
}

fn route_from_config(config: &RouteConfig) -> Route {
    let mut route = Route::new(config.pattern.as_str()).controller(config.controller.as_str());

    if let Some(method) = &config.method {
        route = route.method(method.as_str());
    }
    for (variable, regex) in &config.requirements {
        route = route.assert(variable.as_str(), regex.as_str());
    }
    for (variable, default) in &config.defaults {
        route = route.value(variable.as_str(), default.as_str());
    }

    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::error::BindingError;

    #[test]
    fn test_verb_helpers_set_method() {
        let mut routes = ControllerCollection::new();
        assert_eq!(routes.get("/a", "c").name(), "GET_a");
        assert_eq!(routes.post("/a", "c").name(), "POST_a");
        assert_eq!(routes.put("/a", "c").name(), "PUT_a");
        assert_eq!(routes.patch("/a", "c").name(), "PATCH_a");
        assert_eq!(routes.delete("/a", "c").name(), "DELETE_a");
        assert_eq!(routes.match_route("/a", "c").name(), "_a");
        assert_eq!(routes.len(), 6);
    }

    #[test]
    fn test_rename_then_flush() {
        let mut routes = ControllerCollection::new();
        routes.get("/users/{id}", "users.show").set_name("user").unwrap();
        routes.post("/users", "users.create");

        let table = routes.flush();

        assert!(routes.is_empty());
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["user", "POST_users"]);
        assert!(table.iter().all(ControllerBinding::is_frozen));
        assert_eq!(table.route("user").unwrap().controller_ref(), Some("users.show"));
    }

    #[test]
    fn test_braces_only_pattern_is_not_sealed_under_empty_name() {
        let mut routes = ControllerCollection::new();
        routes.match_route("{}", "a");

        let table = routes.flush();

        assert!(!table.contains(""));
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["_"]);
    }

    #[test]
    fn test_sealed_bindings_reject_rename() {
        let mut routes = ControllerCollection::new();
        routes.get("/a", "c");
        let table = routes.flush();

        let mut copy = table.get("GET_a").unwrap().clone();
        assert!(matches!(copy.set_name("b"), Err(BindingError::Frozen { .. })));
    }

    #[test]
    fn test_from_config() {
        let config: RoutingConfig = toml::from_str(
            r#"
            [[routes]]
            pattern = "/users/{id}"
            method = "GET"
            controller = "users.show"
            name = "user_show"
            [routes.requirements]
            id = "\\d+"

            [[routes]]
            pattern = "/users"
            controller = "users.index"
            "#,
        )
        .unwrap();

        let mut routes = ControllerCollection::from_config(&config);
        let table = routes.flush();

        let show = table.route("user_show").unwrap();
        assert_eq!(show.method_requirement(), Some("GET"));
        assert_eq!(show.requirement("id"), Some("\\d+"));
        assert!(table.contains("_users"));
    }
}
