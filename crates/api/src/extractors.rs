//! Request extractors.
//!
//! Every extractor here rejects with [`ApiError`], so malformed bodies, query
//! strings and path ids get the same JSON error body as domain failures.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use chrono::NaiveDate;
use serde::{Deserialize, de::DeserializeOwned};
use stockbook_shared::{AppError, DateRange};
use validator::{Validate, ValidationErrors};

use crate::ApiError;

/// JSON body that has passed its `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError(AppError::Validation(rejection.body_text())))?;

        value
            .validate()
            .map_err(|errors| ApiError(AppError::Validation(describe(&errors))))?;

        Ok(Self(value))
    }
}

/// Flattens field errors into `"<field> <message>"` lines, sorted by field.
fn describe(errors: &ValidationErrors) -> String {
    let mut lines: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => format!("{field} {message}"),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    lines.sort();
    lines.join("; ")
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RangeParams {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

/// Optional `startDate` / `endDate` query parameters as an inclusive range.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRangeQuery(pub DateRange);

impl<S> FromRequestParts<S> for DateRangeQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<RangeParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError(AppError::Validation(rejection.body_text())))?;

        let range = DateRange::new(params.start_date, params.end_date)?;
        Ok(Self(range))
    }
}

/// Numeric record id from a `/{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub i32);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError(AppError::Validation(rejection.body_text())))?;

        Ok(Self(id))
    }
}
