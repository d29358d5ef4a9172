//! # Place Catalog
//!
//! Query engine for place discovery: weekly operating-hour validation and
//! geospatial proximity filtering over a catalog of places.
//!
//! The crate answers two questions for its callers: "is this candidate
//! opening-hours row consistent with the rest of the schedule?" and "which
//! places match this text/category/distance filter?". Everything else a
//! full application needs (identity, images, messaging, persistence) lives
//! outside and talks to this crate through plain value types.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Core value types (weekdays, intervals, places, coordinates)
//! - [`schedule`]: Pure weekly-interval validation and legal-option derivation
//! - [`catalog`]: Repository trait and the in-memory copy-on-write backend
//! - [`services`]: Caller-facing query coordination (search + schedule edits)
//! - [`http`]: Axum-based REST server (feature `http-server`)
//!
//! ## Concurrency
//!
//! The in-memory repository keeps its place list behind a copy-on-write
//! snapshot: reads clone an `Arc` of the current list, mutations build a new
//! list and swap it atomically. Catalog consistency never depends on caller
//! discipline beyond that single mutation lock.

pub mod models;

pub mod catalog;
pub mod schedule;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
