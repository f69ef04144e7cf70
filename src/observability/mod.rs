//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing and config produce:
//!     → structured log events (tracing)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr, pretty or JSON)
//! ```

pub mod logging;

pub use logging::init_logging;
