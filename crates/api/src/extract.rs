//! Request-body extraction with typed validation errors.
//!
//! Axum's stock `Json` extractor rejects malformed bodies with its own
//! 422 responses. Every route here validates its body against an
//! explicit schema instead, so rejections (missing fields, bad types,
//! invalid JSON) are converted into a [`CoreError::Validation`] and
//! surface as a 400 with the standard error envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use filmoteca_core::error::CoreError;

use crate::error::AppError;

/// Drop-in replacement for `axum::Json` that reports body problems as
/// a 400 validation error.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| CoreError::Validation(rejection.body_text()))?;
        Ok(AppJson(value))
    }
}
