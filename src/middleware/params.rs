use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::TriviaError;
use crate::service::pagination::PageQuery;

/// Path extractor; an undecodable or mistyped segment is treated as an unknown resource.
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = TriviaError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| ApiPath(value))
            .map_err(|rejection| {
                debug!(error = %rejection, "rejecting path parameters");
                TriviaError::NotFound(None)
            })
    }
}

/// `?page=` is read leniently: repeated keys keep the first value and unrelated
/// keys are ignored.
impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = TriviaError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) =
            Query::<Vec<(String, String)>>::try_from_uri(&parts.uri).map_err(|rejection| {
                debug!(error = %rejection, "rejecting query string");
                TriviaError::BadRequest(None)
            })?;
        let page = pairs
            .into_iter()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value);
        Ok(PageQuery { page })
    }
}
