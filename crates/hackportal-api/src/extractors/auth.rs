//! Authentication extractors
//!
//! Verify the bearer JWT issued by the portal's auth module.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use hackportal_common::Role;
use hackportal_core::{DomainError, ParticipantId};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from the JWT
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub participant_id: ParticipantId,
    pub role: Role,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let claims = app_state
            .jwt_service()
            .decode_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected bearer token");
                ApiError::App(e)
            })?;

        let participant_id = claims.participant_id()?;

        Ok(Self {
            participant_id,
            role: claims.role,
        })
    }
}

/// Authenticated caller holding the organizer role
#[derive(Debug, Clone)]
pub struct OrganizerUser(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for OrganizerUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.role.is_organizer() {
            tracing::warn!(participant_id = %user.participant_id, "Organizer route denied");
            return Err(DomainError::OrganizerOnly.into());
        }
        Ok(Self(user))
    }
}
