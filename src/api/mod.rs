//! Browser-facing HTTP surface.
//!
//! Exposes the symptom-analysis flow as HTTP endpoints under `/api/`.
//! The router is composable — `analysis_router()` returns a `Router`
//! that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::analysis_router;
pub use server::{start_api_server, ApiServer, ApiSession};
pub use types::ApiContext;
