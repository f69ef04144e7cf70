//! Controller bindings and sealed route tables for a web routing layer.

pub mod config;
pub mod observability;
pub mod routing;

pub use config::schema::RoutingConfig;
pub use routing::{BindingError, ControllerBinding, ControllerCollection, Route, RouteTable};
