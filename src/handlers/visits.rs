use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::db::Visit;
use crate::error::VisitError;
use crate::middleware::ClientAddr;
use crate::router::AppState;
use crate::service::visits::{RECENT_VISITS, record_and_list, render};

/// `GET /`: record this visit, then list the latest ones.
pub async fn visits_handler(
    State(state): State<AppState>,
    ClientAddr(addr): ClientAddr,
) -> Result<Response, VisitError> {
    let visit = Visit::now(&addr);
    let recent = record_and_list(state.store.as_ref(), visit, RECENT_VISITS)
        .await
        .inspect_err(|e| warn!(stage = e.stage(), error = %e, "visit request failed"))?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render(&recent),
    )
        .into_response())
}
