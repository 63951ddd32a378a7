//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers from domain values to response DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CalendarEventListQuery, CreateCalendarEventRequest, CreateCustomBannerRequest,
    CustomBannerListQuery, UpdateCalendarEventRequest, UpdateCustomBannerRequest,
};
pub use responses::{
    BannerResponse, CalendarEventDetailResponse, CalendarEventResponse, CustomBannerResponse,
    HealthChecks, HealthResponse, NotificationFeedResponse, ReadinessResponse,
};
