//! High-level business logic composing the validator and the catalog.

pub mod query;

pub use query::{QueryCoordinator, QueryError, SearchFilter};
