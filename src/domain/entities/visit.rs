//! Visit record entity: a per-client redirect counter.

/// Number of successful redirects one client performed for one identifier.
///
/// A record exists if and only if at least one redirect happened for the
/// (identifier, client) pair, and `count` equals the number of redirects
/// observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRecord {
    pub client_ip: String,
    pub count: i64,
}
