//! Caller identity, resolved once per request from headers.
//!
//! Session issuance lives outside this service; by the time a request arrives
//! the gateway has put the authenticated user reference in `X-User-Id`
//! (or `Authorization: Bearer <user-ref>`).

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use crate::errors::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller. Handlers take this as an extractor argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    pub user_ref: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        resolve_caller(&parts.headers).ok_or(AppError::Unauthenticated)
    }
}

fn resolve_caller(headers: &HeaderMap) -> Option<CallerIdentity> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .or_else(|| {
            headers
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.strip_prefix("Bearer "))
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
        })
        .map(|s| CallerIdentity {
            user_ref: s.to_string(),
        })
}
