//! Business logic services for the application layer.

pub mod allocator;
pub mod auth_service;
pub mod mapping_service;
pub mod redirect_service;

pub use allocator::IdAllocator;
pub use auth_service::AuthService;
pub use mapping_service::{CreatedMapping, MappingService};
pub use redirect_service::RedirectService;
