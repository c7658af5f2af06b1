//! DTO for the stats endpoint.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::VisitRecord;

/// Per-client visit counts for one identifier.
///
/// Serializes as a plain JSON object mapping client address to count.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct StatsResponse(pub BTreeMap<String, i64>);

impl From<Vec<VisitRecord>> for StatsResponse {
    fn from(records: Vec<VisitRecord>) -> Self {
        Self(
            records
                .into_iter()
                .map(|r| (r.client_ip, r.count))
                .collect(),
        )
    }
}
