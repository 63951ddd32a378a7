//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{CalendarEventId, CustomBannerId, ParticipantId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Participant not found: {0}")]
    ParticipantNotFound(ParticipantId),

    #[error("Custom banner not found: {0}")]
    CustomBannerNotFound(CustomBannerId),

    #[error("Calendar event not found: {0}")]
    CalendarEventNotFound(CalendarEventId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Display window ends before it starts")]
    InvalidDisplayWindow,

    #[error("Event ends before it starts")]
    InvalidEventRange,

    #[error("Banner cannot be dismissed")]
    BannerNotDismissible,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Organizer role required")]
    OrganizerOnly,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ParticipantNotFound(_) => "UNKNOWN_PARTICIPANT",
            Self::CustomBannerNotFound(_) => "UNKNOWN_CUSTOM_BANNER",
            Self::CalendarEventNotFound(_) => "UNKNOWN_CALENDAR_EVENT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidDisplayWindow => "INVALID_DISPLAY_WINDOW",
            Self::InvalidEventRange => "INVALID_EVENT_RANGE",
            Self::BannerNotDismissible => "BANNER_NOT_DISMISSIBLE",

            // Authorization
            Self::OrganizerOnly => "ORGANIZER_ONLY",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ParticipantNotFound(_)
                | Self::CustomBannerNotFound(_)
                | Self::CalendarEventNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidDisplayWindow
                | Self::InvalidEventRange
                | Self::BannerNotDismissible
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::OrganizerOnly)
    }

    /// Check if this is a storage failure
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::DatabaseError(_))
    }
}
