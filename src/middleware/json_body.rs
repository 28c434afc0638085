use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::TriviaError;

/// Request body buffered into memory; a failed read (e.g. over the body limit)
/// renders as the API's error body.
pub struct RawBody(pub Bytes);

impl<S> FromRequest<S> for RawBody
where
    S: Send + Sync,
{
    type Rejection = TriviaError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Bytes::from_request(req, state)
            .await
            .map(RawBody)
            .map_err(|rejection| {
                debug!(error = %rejection, "failed to buffer request body");
                TriviaError::BadRequest(None)
            })
    }
}

/// JSON body extractor whose rejections render as the API's error body.
///
/// The `Content-Type` header is not checked; any body that parses as `T` is accepted.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = TriviaError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let RawBody(bytes) = RawBody::from_request(req, state).await?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| {
                debug!(error = %e, "rejecting malformed JSON body");
                TriviaError::BadRequest(None)
            })
    }
}
