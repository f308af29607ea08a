//! Caller identity extraction.
//!
//! The identity provider lives outside this service: an upstream gateway
//! verifies the caller and forwards an opaque identifier as a bearer
//! token. The extractors here read that value once at the request
//! boundary and trust it as given.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_auth::AuthBearer;
use serde_json::json;
use std::convert::Infallible;

use crate::error::AppError;

/// Optional caller identity from the `Authorization: Bearer` header.
///
/// Yields `None` for anonymous requests; never rejects.
#[derive(Debug, Clone)]
pub struct Caller(pub Option<String>);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let owner_id = AuthBearer::from_request_parts(parts, &())
            .await
            .ok()
            .map(|AuthBearer(token)| token)
            .filter(|token| !token.is_empty());

        Ok(Caller(owner_id))
    }
}

/// Required caller identity; rejects anonymous requests with 401.
#[derive(Debug, Clone)]
pub struct RequireCaller(pub String);

impl<S> FromRequestParts<S> for RequireCaller
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Caller(owner_id) = Caller::from_request_parts(parts, state)
            .await
            .unwrap_or(Caller(None));

        owner_id.map(RequireCaller).ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Authorization header is missing or invalid" }),
            )
        })
    }
}
