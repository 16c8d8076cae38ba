use tracing::debug;

use crate::db::{Visit, VisitStore};
use crate::error::VisitError;

/// How many visits `GET /` shows.
pub const RECENT_VISITS: u32 = 10;

pub const HEADER: &str = "Last 10 visits:";

/// Append `visit`, then read back the newest `limit` visits.
///
/// A failed insert ends the request; the read is never attempted.
pub async fn record_and_list(
    store: &dyn VisitStore,
    visit: Visit,
    limit: u32,
) -> Result<Vec<Visit>, VisitError> {
    store.insert(&visit).await.map_err(VisitError::Insert)?;
    debug!(timestamp = %visit.timestamp, addr_hash = %visit.address_hash, "visit recorded");
    store.select_recent(limit).await.map_err(VisitError::Read)
}

/// Plain-text listing: header, then one line per visit, no trailing newline.
pub fn render(visits: &[Visit]) -> String {
    std::iter::once(HEADER.to_string())
        .chain(
            visits
                .iter()
                .map(|v| format!("Time: {}, AddrHash: {}", v.timestamp, v.address_hash)),
        )
        .collect::<Vec<_>>()
        .join("\n")
}
