//! Sealed route table.
//!
//! # Responsibilities
//! - Store frozen bindings in registration order
//! - Look up a binding by name
//! - Look up the binding of a shared route by identity
//!
//! # Design Decisions
//! - Immutable after construction (share via `Arc` without locks)
//! - O(n) scans (acceptable for typical route counts)
//! - A later binding with the same name replaces the earlier one

use std::sync::Arc;

use serde::Serialize;

use crate::routing::binding::ControllerBinding;
use crate::routing::route::Route;

/// Frozen bindings produced by `ControllerCollection::flush`.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    bindings: Vec<ControllerBinding>,
}

impl RouteTable {
    /// Insert a binding, freezing it first.
    pub(crate) fn insert(&mut self, mut binding: ControllerBinding) {
        binding.freeze();

        if let Some(pos) = self.position(binding.name()) {
            let shadowed = self.bindings.remove(pos);
            tracing::warn!(
                name = %binding.name(),
                replaced_pattern = %shadowed.route().pattern(),
                pattern = %binding.route().pattern(),
                "Route name collision, later registration wins"
            );
        }

        self.bindings.push(binding);
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.bindings.iter().position(|b| b.name() == name)
    }

    pub fn get(&self, name: &str) -> Option<&ControllerBinding> {
        self.bindings.iter().find(|b| b.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn route(&self, name: &str) -> Option<&Arc<Route>> {
        self.get(name).map(ControllerBinding::route)
    }

    /// Find the binding holding this exact route instance.
    pub fn binding_for(&self, route: &Arc<Route>) -> Option<&ControllerBinding> {
        self.bindings.iter().find(|b| Arc::ptr_eq(b.route(), route))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(ControllerBinding::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ControllerBinding> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Flat view of every binding, in order.
    pub fn summaries(&self) -> Vec<RouteSummary> {
        self.bindings.iter().map(RouteSummary::from).collect()
    }
}

/// Printable description of one table entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub name: String,
    pub method: Option<String>,
    pub pattern: String,
    pub controller: Option<String>,
}

impl From<&ControllerBinding> for RouteSummary {
    fn from(binding: &ControllerBinding) -> Self {
        let route = binding.route();
        Self {
            name: binding.name().to_string(),
            method: route.method_requirement().map(str::to_string),
            pattern: route.pattern().to_string(),
            controller: route.controller_ref().map(str::to_string),
        }
    }
}

/// Render summaries as aligned columns: name, method, pattern, controller.
pub fn render_text(summaries: &[RouteSummary]) -> String {
    let rows: Vec<[&str; 4]> = summaries
        .iter()
        .map(|s| {
            [
                s.name.as_str(),
                s.method.as_deref().unwrap_or("ANY"),
                s.pattern.as_str(),
                s.controller.as_deref().unwrap_or("-"),
            ]
        })
        .collect();

    let mut widths = [0usize; 3];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    rows.iter()
        .map(|[name, method, pattern, controller]| {
            format!(
                "{name:<w0$}  {method:<w1$}  {pattern:<w2$}  {controller}\n",
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2],
            )
        })
        .collect()
}
