//! Core domain entities.
//!
//! Plain data structures without business logic:
//!
//! - [`UrlMapping`] - A short identifier bound to a target URL and its secret
//! - [`VisitRecord`] - A per-client redirect counter for one identifier

pub mod mapping;
pub mod visit;

pub use mapping::{NewMapping, UrlMapping};
pub use visit::VisitRecord;
