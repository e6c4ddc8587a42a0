use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::SiteError;
use crate::router::SiteState;

/// Count every request outside the admin namespace, before the handler runs.
/// A counter write failure fails the request with a 500 rather than serving
/// a page whose view went unrecorded.
pub async fn count_visitors(
    State(state): State<SiteState>,
    req: Request,
    next: Next,
) -> Result<Response, SiteError> {
    if !req.uri().path().starts_with("/admin") {
        state.visitors.increment()?;
    }
    Ok(next.run(req).await)
}
