//! # Agenda Hub API
//!
//! Application surface: context wiring, the HTTP command layer, and error
//! mapping. All business rules live in `agendahub-core`; handlers here only
//! translate between HTTP and the core entry points.

pub mod context;
pub mod error;
pub mod handlers;
pub mod router;

pub use context::AppContext;
pub use error::{ApiError, ApiResult};
pub use router::build_router;
