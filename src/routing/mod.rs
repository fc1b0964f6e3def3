//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming call (method, path, query)
//!     → router.rs (scan routes in declaration order)
//!     → pattern.rs (match literal / placeholder segments)
//!     → pattern.rs (parse placeholders into their declared type)
//!     → Return: handler Response, 422 Validation, or 404 NotFound
//!
//! Route Declaration (at startup):
//!     handlers::build_router(profile, runtime info)
//!     → Compile patterns
//!     → Freeze as immutable Router, shared via Arc
//! ```
//!
//! # Design Decisions
//! - Routes declared once at startup, immutable at runtime
//! - No regex in hot path (segment comparison only)
//! - Deterministic: same input always yields the same response
//! - First match wins (declaration order)

pub mod error;
pub mod pattern;
pub mod router;

pub use error::{DispatchError, RouteError};
pub use pattern::{ParamKind, ParamValue, RoutePattern};
pub use router::{Handler, Matched, PathParams, Route, Router};
