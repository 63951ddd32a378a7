//! Opaque string identifiers
//!
//! The portal stores every primary key as TEXT. Each entity gets its own
//! newtype so a participant ID can never be passed where a hackathon ID is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error when parsing an identifier from a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("identifier must not be empty")]
    Empty,
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh random identifier
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().simple().to_string())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(IdParseError::Empty);
                }
                Ok(Self(trimmed.to_string()))
            }
        }
    };
}

define_id!(
    /// Participant identifier
    ParticipantId
);
define_id!(
    /// Hackathon identifier
    HackathonId
);
define_id!(
    /// Team identifier
    TeamId
);
define_id!(
    /// Operator-authored banner identifier
    CustomBannerId
);
define_id!(
    /// Calendar event identifier
    CalendarEventId
);
