//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits over a shared
//! `SqlitePool`. Statements use the runtime query API with bound parameters.
//!
//! # Repositories
//!
//! - [`SqliteMappingRepository`] - Mapping storage and retrieval
//! - [`SqliteVisitRepository`] - Visit counter upserts and reads

pub mod sqlite_mapping_repository;
pub mod sqlite_visit_repository;

pub use sqlite_mapping_repository::SqliteMappingRepository;
pub use sqlite_visit_repository::SqliteVisitRepository;
