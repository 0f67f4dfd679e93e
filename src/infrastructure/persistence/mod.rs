//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-bound parameters, so the crate builds without a live database.
//!
//! - [`PgLinkRepository`] - Link storage, atomic counters, and lifecycle
//! - [`PgClickRepository`] - Append-only click log and range queries

pub mod pg_click_repository;
pub mod pg_link_repository;

pub use pg_click_repository::PgClickRepository;
pub use pg_link_repository::PgLinkRepository;
