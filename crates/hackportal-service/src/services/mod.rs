//! Business logic services
//!
//! Services borrow a shared [`ServiceContext`] per call and orchestrate the
//! rule evaluator and the repositories.

pub mod banner;
pub mod calendar;
pub mod context;
pub mod custom_banner;
pub mod error;
pub mod notification;

#[cfg(test)]
pub(crate) mod testing;

pub use banner::BannerService;
pub use calendar::{CalendarEntry, CalendarService};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use custom_banner::CustomBannerService;
pub use error::{ServiceError, ServiceResult};
pub use notification::{NotificationFeed, NotificationService};
