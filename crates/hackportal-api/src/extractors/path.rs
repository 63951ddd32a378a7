//! Path parameter extractors
//!
//! Every identifier is opaque text; parsing only rejects blank segments.

use std::str::FromStr;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use hackportal_core::{CalendarEventId, CustomBannerId, HackathonId};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::response::ApiError;

/// `Path` whose rejection is an [`ApiError`]
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        Ok(ApiPath(inner))
    }
}

fn parse_id<T: FromStr>(raw: &str, name: &str) -> Result<T, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path(format!("Invalid {name}")))
}

/// Path parameters with hackathon_id
#[derive(Debug, Deserialize)]
pub struct HackathonPath {
    pub hackathon_id: String,
}

impl HackathonPath {
    pub fn hackathon_id(&self) -> Result<HackathonId, ApiError> {
        parse_id(&self.hackathon_id, "hackathon_id")
    }
}

/// Path parameters for a system banner dismissal
#[derive(Debug, Deserialize)]
pub struct BannerTypePath {
    pub hackathon_id: String,
    pub banner_type: String,
}

impl BannerTypePath {
    pub fn hackathon_id(&self) -> Result<HackathonId, ApiError> {
        parse_id(&self.hackathon_id, "hackathon_id")
    }

    /// Raw banner type; the service decides what is acceptable
    pub fn banner_type(&self) -> &str {
        &self.banner_type
    }
}

/// Path parameters with banner_id
#[derive(Debug, Deserialize)]
pub struct CustomBannerPath {
    pub banner_id: String,
}

impl CustomBannerPath {
    pub fn banner_id(&self) -> Result<CustomBannerId, ApiError> {
        parse_id(&self.banner_id, "banner_id")
    }
}

/// Path parameters with hackathon_id and banner_id
#[derive(Debug, Deserialize)]
pub struct HackathonCustomBannerPath {
    pub hackathon_id: String,
    pub banner_id: String,
}

impl HackathonCustomBannerPath {
    pub fn hackathon_id(&self) -> Result<HackathonId, ApiError> {
        parse_id(&self.hackathon_id, "hackathon_id")
    }

    pub fn banner_id(&self) -> Result<CustomBannerId, ApiError> {
        parse_id(&self.banner_id, "banner_id")
    }
}

/// Path parameters with event_id
#[derive(Debug, Deserialize)]
pub struct EventIdPath {
    pub event_id: String,
}

impl EventIdPath {
    pub fn event_id(&self) -> Result<CalendarEventId, ApiError> {
        parse_id(&self.event_id, "event_id")
    }
}

/// Path parameters with hackathon_id and event_id
#[derive(Debug, Deserialize)]
pub struct CalendarEventPath {
    pub hackathon_id: String,
    pub event_id: String,
}

impl CalendarEventPath {
    pub fn hackathon_id(&self) -> Result<HackathonId, ApiError> {
        parse_id(&self.hackathon_id, "hackathon_id")
    }

    pub fn event_id(&self) -> Result<CalendarEventId, ApiError> {
        parse_id(&self.event_id, "event_id")
    }
}
