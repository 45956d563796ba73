//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::EmployeeId;

/// Extract and validate an employee id from the path.
///
/// Runs before the body is read, so a malformed id never reaches the
/// database. The path segment is kept as received for echoing back.
pub struct ValidEmployeeId(pub EmployeeId, pub String);

impl<S> FromRequestParts<S> for ValidEmployeeId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        let parsed = EmployeeId::parse(&id)?;
        Ok(Self(parsed, id))
    }
}

/// JSON body whose every rejection (syntax, type mismatch, missing
/// content type) becomes a 400 carrying the parser's message
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        Ok(Self(value))
    }
}
