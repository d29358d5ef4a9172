//! HTTP server module for the place catalog.
//!
//! This module exposes the catalog and the schedule validator as a REST API
//! using axum. It reuses the service layer and repository pattern from the
//! core library; nothing framework-specific leaks below the handler layer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and DTO mapping                        │
//! │  - CORS, compression, error responses                     │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services::query)                          │
//! │  - Schedule validation, search composition                │
//! └───────────────────┬──────────────────────────────────────┘
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Repository Layer (catalog)                               │
//! │  - MemoryRepository (copy-on-write snapshots)             │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
