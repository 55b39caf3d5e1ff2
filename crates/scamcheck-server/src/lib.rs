//! Scamcheck Server
//!
//! Minimal HTTP API around the decision pipeline.
//!
//! Endpoints:
//! - `GET /` — service information
//! - `GET /health` — liveness check
//! - `GET /stats` — verdict and latency counters
//! - `GET /metrics` — Prometheus exposition
//! - `POST /predict` — classify one message

pub mod cli;
pub mod config;
pub mod routes;
pub mod state;

pub use cli::Cli;
pub use config::ServerConfig;
pub use routes::create_router;
pub use state::AppState;
