use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::AccountError;

/// JSON body extractor whose rejections render through `AccountError`.
///
/// A request without a JSON content type is read as an empty object, so its
/// missing fields reach the service like any other omitted field.
pub struct AccountJson<T>(pub T);

impl<S, T> FromRequest<S> for AccountJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AccountError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(body)) => Ok(AccountJson(body)),
            Err(JsonRejection::MissingJsonContentType(_)) => {
                debug!("request without JSON content type; treating body as empty");
                Ok(AccountJson(T::default()))
            }
            Err(rejection) => Err(AccountError::MalformedBody(rejection.body_text())),
        }
    }
}
