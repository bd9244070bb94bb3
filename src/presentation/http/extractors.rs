// src/presentation/http/extractors.rs
use axum::{
    extract::{FromRequest, Request},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use thiserror::Error;

const JSON_CONTENT_TYPE: &str = "application/json";

/// JSON body accepted only when `Content-Type` starts with
/// `application/json`. Missing fields are left to the target's serde
/// defaults.
#[derive(Debug, Clone)]
pub struct JsonPayload<T>(pub T);

#[derive(Debug, Error)]
pub enum RequestParseError {
    #[error("no supported type: {0:?}")]
    UnsupportedContentType(String),
    #[error("failed to read request body: {0}")]
    Body(String),
    #[error("malformed json body: {0}")]
    Json(#[from] serde_json::Error),
}

// Parse failures are only logged; the caller sees an empty 200.
impl IntoResponse for RequestParseError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "rejected request body");
        StatusCode::OK.into_response()
    }
}

impl<T, S> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = RequestParseError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !content_type.starts_with(JSON_CONTENT_TYPE) {
            return Err(RequestParseError::UnsupportedContentType(content_type));
        }

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| RequestParseError::Body(rejection.body_text()))?;

        let value = serde_json::from_slice(&body)?;
        Ok(Self(value))
    }
}
