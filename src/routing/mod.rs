//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration:
//!     ControllerCollection::get/post/match_route
//!     → route.rs (pattern, requirements, defaults)
//!     → binding.rs (derive name, allow renames)
//!
//! Sealing (once, at startup):
//!     ControllerCollection::flush
//!     → freeze every binding
//!     → table.rs (immutable RouteTable)
//! ```
//!
//! # Design Decisions
//! - Names are fixed once the table is sealed
//! - Routes are shared, never copied, so identity survives sealing
//! - Deterministic: same registrations always produce the same table

pub mod binding;
pub mod collection;
pub mod error;
pub mod route;
pub mod table;

pub use binding::{default_name, BindingState, ControllerBinding};
pub use collection::ControllerCollection;
pub use error::{BindingError, BindingResult};
pub use route::Route;
pub use table::{render_text, RouteSummary, RouteTable};
