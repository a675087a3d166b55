use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::common::error::AppError;
use crate::config::AppState;
use crate::models::auth::User;

/// Requires a valid bearer token and stores the user in request extensions.
pub async fn auth_guard(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let TypedHeader(auth) = bearer.ok_or(AppError::InvalidToken)?;
    let user = state.auth_service.validate_token(auth.token()).await?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Like [`auth_guard`], but rejects non-admin users.
pub async fn admin_guard(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let TypedHeader(auth) = bearer.ok_or(AppError::InvalidToken)?;
    let user = state.auth_service.validate_token(auth.token()).await?;
    if !user.is_admin {
        return Err(AppError::AdminOnly);
    }
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Extracts the user inserted by one of the guards above.
pub struct AuthenticatedUser(pub User);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<User>()
            .cloned()
            .map(AuthenticatedUser)
            .ok_or(AppError::InvalidToken)
    }
}

/// Optional authentication for public routes. A missing or invalid token
/// yields `None`, so guests can still check out.
pub struct MaybeUser(pub Option<User>);

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        let user = match token {
            Some(token) => state.auth_service.validate_token(token).await.ok(),
            None => None,
        };

        Ok(MaybeUser(user))
    }
}
