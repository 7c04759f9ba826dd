//! Normalizer Server - HTTP webhook endpoint for social messaging payloads
//!
//! Accepts raw platform webhook bodies, runs them through the platform
//! registry and answers with a PII-masked normalized message.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - Service status
//! - `GET /health` - Liveness probe
//! - `GET /metadata` - Version, uptime and registered platforms
//! - `GET /metrics` - Prometheus metrics
//! - `POST /normalize/{platform}` - Normalize a webhook payload
//!   (`facebook`, `instagram`)
//!
//! A normalizer rejection is returned as `200 {"error": "..."}`; HTTP status
//! alone does not signal it.

pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ErrorResponse, ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
