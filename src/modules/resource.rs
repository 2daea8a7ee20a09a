//! The generic Entity Access Module.
//!
//! Every entity service delegates here, parameterized by its resource
//! path and record type. The error asymmetry is deliberate and uniform:
//! list reads degrade to an empty page (a failed listing shows "no
//! records", it never crashes the screen), while single-entity reads
//! and all writes propagate so dialogs can stay open on failure.

use crate::http::ApiClient;
use crate::http::envelope::ListBody;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, warn};
use uuid::Uuid;
use vestry_core::errors::ApiError;
use vestry_core::pagination::{Page, PageQuery};

/// Fetch one page, propagating errors. Wrapped by [`list`] for the
/// degrading list-screen contract.
pub(crate) async fn try_list<T: DeserializeOwned>(
    api: &ApiClient,
    path: &str,
    query: &PageQuery,
) -> Result<Page<T>, ApiError> {
    let body: ListBody<T> = api.get_json(path, &query.to_query_pairs()).await?;
    let mut page = body.into_page();

    // The server must never return more rows than the requested size;
    // truncate and log if it does, so the invariant holds upstream.
    let size = query.size() as usize;
    if page.rows.len() > size {
        warn!(
            path,
            returned = page.rows.len(),
            size,
            "server returned more rows than the requested page size"
        );
        page.rows.truncate(size);
    }

    Ok(page)
}

/// Fetch one page for a list screen. On any failure the result is an
/// empty page and the error is logged, not thrown.
pub(crate) async fn list<T: DeserializeOwned>(
    api: &ApiClient,
    path: &str,
    query: &PageQuery,
) -> Page<T> {
    match try_list(api, path, query).await {
        Ok(page) => page,
        Err(err) => {
            error!(path, error = %err, "list request failed, degrading to empty page");
            Page::empty()
        }
    }
}

/// Fetch a single entity for an edit dialog. Fails loudly.
pub(crate) async fn fetch_one<T: DeserializeOwned>(
    api: &ApiClient,
    path: &str,
    id: Uuid,
) -> Result<T, ApiError> {
    api.get_json(&format!("{path}/{id}"), &[]).await
}

/// Create an entity. `Ok(())` only after the server confirmed it.
pub(crate) async fn create<B: Serialize>(
    api: &ApiClient,
    path: &str,
    dto: &B,
) -> Result<(), ApiError> {
    api.post_unit(path, &[], Some(dto)).await
}

/// Replace an entity's display fields (PUT). Returns the server's
/// post-update record.
pub(crate) async fn update<T: DeserializeOwned, B: Serialize>(
    api: &ApiClient,
    path: &str,
    id: Uuid,
    dto: &B,
) -> Result<T, ApiError> {
    api.put_json(&format!("{path}/{id}"), dto).await
}

/// Merge only the provided keys into an entity (PATCH).
pub(crate) async fn patch<T: DeserializeOwned, B: Serialize>(
    api: &ApiClient,
    path: &str,
    id: Uuid,
    dto: &B,
) -> Result<T, ApiError> {
    api.patch_json(&format!("{path}/{id}"), dto).await
}

/// Issue a status transition: `POST {path}/status?id=..&status=..`.
/// Status travels as query parameters, not body, across the whole
/// system. Returns the server's authoritative post-transition record;
/// callers re-render from it rather than assuming the computed target
/// took effect, because the row they acted on may have been stale.
pub(crate) async fn change_status<T: DeserializeOwned>(
    api: &ApiClient,
    path: &str,
    id: Uuid,
    status: &str,
) -> Result<T, ApiError> {
    let query = [("id", id.to_string()), ("status", status.to_string())];
    api.post_json(&format!("{path}/status"), &query, None::<&()>)
        .await
}
