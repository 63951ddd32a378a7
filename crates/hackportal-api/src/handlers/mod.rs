//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod banners;
pub mod calendar;
pub mod custom_banners;
pub mod health;
pub mod notifications;
