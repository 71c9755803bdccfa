//! Comprova Server - HTTP API for payment-receipt validation
//!
//! Exposes the comprova validation pipeline over REST. One endpoint does
//! the work: a multipart upload of a receipt screenshot plus optional
//! expected values, answered with the full validation verdict and the
//! recognized text.
//!
//! # Features
//!
//! - **Authentication**: API key-based authentication with rate limiting
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging
//! - **Configuration**: Environment variable and file-based configuration
//! - **Resource discipline**: per-request temporary files removed on every
//!   exit path; cleanup failures are logged, never surfaced
//! - **Graceful Shutdown**: SIGTERM / Ctrl+C handling
//!
//! # API Endpoints
//!
//! ## Public Endpoints (No Authentication)
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//!
//! ## Protected Endpoints (API Key Required)
//!
//! - `POST /api/v1/validate` - Validate one uploaded receipt
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

pub mod cleanup;
pub mod config;
pub mod error;
pub mod middleware;
pub mod ocr;
pub mod preprocess;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use ocr::{OcrEngine, OcrError, TesseractCli};
pub use server::start_server;
pub use state::ServerState;
