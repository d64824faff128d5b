/// JSON extractor that answers malformed bodies with the error envelope
use crate::error::ServerError;
use axum::extract::FromRequest;

/// Like `axum::Json`, but a decode failure becomes a 400 `{ ok: false, error }`
/// instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ServerError))]
pub struct ApiJson<T>(pub T);
