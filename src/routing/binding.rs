//! Controller bindings.
//!
//! # Responsibilities
//! - Associate a shared route with a lookup name
//! - Derive a default name from the route
//! - Reject renames once the binding is frozen
//!
//! # Design Decisions
//! - Two explicit states (`Mutable` → `Frozen`), one-way
//! - The route is held as `Arc<Route>` so callers can compare by identity
//! - No validation of names beyond the freeze check

use std::sync::Arc;

use crate::routing::error::{BindingError, BindingResult};
use crate::routing::route::Route;

/// Whether a binding can still be renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    Mutable,
    Frozen,
}

/// A controller mapped to a route, with the name used to look it up.
#[derive(Debug, Clone)]
pub struct ControllerBinding {
    route: Arc<Route>,
    name: String,
    state: BindingState,
}

impl ControllerBinding {
    /// Bind `route`, naming it after its method requirement and pattern.
    pub fn new(route: Arc<Route>) -> Self {
        let name = default_name(&route);
        tracing::debug!(name = %name, pattern = %route.pattern(), "Derived route name");

        Self {
            route,
            name,
            state: BindingState::Mutable,
        }
    }

    /// Bind `route` under an explicit name instead of the derived one.
    pub fn named(route: Arc<Route>, name: impl Into<String>) -> Self {
        Self {
            route,
            name: name.into(),
            state: BindingState::Mutable,
        }
    }

    pub fn route(&self) -> &Arc<Route> {
        &self.route
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> BindingState {
        self.state
    }

    pub fn is_frozen(&self) -> bool {
        self.state == BindingState::Frozen
    }

    /// Replace the name.
    ///
    /// Fails without touching the current name once the binding is frozen.
    pub fn set_name(&mut self, name: impl Into<String>) -> BindingResult<()> {
        if self.is_frozen() {
            tracing::warn!(name = %self.name, "Rename attempted on frozen binding");
            return Err(BindingError::Frozen {
                name: self.name.clone(),
            });
        }

        self.name = name.into();
        Ok(())
    }

    /// Prevent any further rename. Calling it again has no effect.
    pub fn freeze(&mut self) {
        self.state = BindingState::Frozen;
    }
}

/// Default name for `route`: method requirement followed by the pattern,
/// braces removed and `/`, `:`, `|` replaced with `_`.
///
/// Falls back to `_` when nothing is left after sanitizing (e.g. `{}`).
pub fn default_name(route: &Route) -> String {
    let method = route.method_requirement().unwrap_or("");

    let name: String = method
        .chars()
        .chain(route.pattern().chars())
        .filter(|c| !matches!(c, '{' | '}'))
        .map(|c| match c {
            '/' | ':' | '|' => '_',
            other => other,
        })
        .collect();

    if name.is_empty() {
        "_".to_string()
    } else {
        name
    }
}
