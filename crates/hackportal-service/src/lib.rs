//! # hackportal-service
//!
//! Application layer: banner, custom banner, calendar and notification
//! use cases plus the DTOs exchanged with the API.

pub mod dto;
pub mod services;

pub use services::{
    BannerService, CalendarEntry, CalendarService, CustomBannerService, NotificationFeed,
    NotificationService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
