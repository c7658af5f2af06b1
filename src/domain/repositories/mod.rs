//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`MappingRepository`] - Mapping CRUD operations
//! - [`VisitRepository`] - Visit counters

pub mod mapping_repository;
pub mod visit_repository;

pub use mapping_repository::MappingRepository;
pub use visit_repository::VisitRepository;

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
#[cfg(test)]
pub use visit_repository::MockVisitRepository;
