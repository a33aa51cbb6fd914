use std::collections::HashMap;
use std::sync::Arc;

use avatar_core::{AppError, AvatarUpload, UploadResponse};
use avatar_storage::{PutBlobResult, PutOptions, Storage};
use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{Query, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::constants::UID_QUERY_PARAM;
use crate::error::HttpAppError;
use crate::state::AppState;

/// Upload avatar handler
///
/// `POST /api/upload-avatar?uid=<uid>` with the raw image as the body. The
/// object is written to `avatars/{uid}/profile.{png|jpg}`, replacing any
/// previous avatar of the same user, and its public URL is returned.
///
/// Method dispatch happens here rather than in the router so that rejected
/// methods still get the JSON error body:
/// - `OPTIONS` answers the CORS preflight with an empty 200.
/// - anything but `POST` is a 405.
///
/// Every failure after the method check (body read, storage) is a 500 whose
/// `error` field carries the underlying message.
#[tracing::instrument(
    name = "upload_avatar",
    skip_all,
    fields(method = %method, uid = tracing::field::Empty, key = tracing::field::Empty)
)]
pub async fn upload_avatar(
    State(state): State<Arc<AppState>>,
    method: Method,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Body,
) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    if method != Method::POST {
        return HttpAppError::from(AppError::MethodNotAllowed).into_response();
    }

    let content_type = content_type_header(&headers);
    let upload = AvatarUpload::from_request_parts(
        params.get(UID_QUERY_PARAM).map(String::as_str),
        content_type.as_deref(),
    );

    let span = tracing::Span::current();
    span.record("uid", upload.uid.as_str());
    span.record("key", upload.storage_key().as_str());

    // Rendered inside the span so the failure log carries uid and key
    match store_avatar(state.storage.as_ref(), &upload, body).await {
        Ok(blob) => (StatusCode::OK, Json(UploadResponse { url: blob.url })).into_response(),
        Err(err) => err.into_response(),
    }
}

/// Buffer the whole body, then write it to the user's avatar key.
pub async fn store_avatar(
    storage: &dyn Storage,
    upload: &AvatarUpload,
    body: Body,
) -> Result<PutBlobResult, HttpAppError> {
    let data = read_body(body).await?;
    let key = upload.storage_key();
    let options = PutOptions::public(upload.content_type.clone());

    tracing::debug!(
        key = %key,
        content_type = %options.content_type,
        size_bytes = data.len(),
        "Storing avatar"
    );

    let blob = storage.put(&key, data, &options).await?;
    Ok(blob)
}

/// Consume the body stream to completion. No size bound is applied here; a
/// configured limit is enforced by the router layer wrapping the body.
async fn read_body(body: Body) -> Result<Bytes, AppError> {
    to_bytes(body, usize::MAX)
        .await
        .map_err(|e| AppError::BodyRead(e.to_string()))
}

/// The raw `Content-Type` header; `None` when the request carries none.
fn content_type_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::CONTENT_TYPE)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}
