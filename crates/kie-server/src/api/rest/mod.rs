//! REST API implementation
//!
//! - types: application state and plain JSON payloads
//! - extractors: body format negotiation
//! - handlers: endpoint handlers
//! - router: router creation and configuration

mod extractors;
mod handlers;
mod router;
pub mod types;

pub use extractors::NegotiatedFormat;
pub use router::create_router;
pub use types::{AppState, HealthResponse};
