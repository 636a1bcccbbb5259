use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// Store identifier of an announcement.
///
/// Wraps the native UUID key so the wire representation (a plain string)
/// never leaks into the store layer and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct AnnouncementId(Uuid);

impl AnnouncementId {
    pub fn new() -> Self {
        AnnouncementId(Uuid::new_v4())
    }

    /// Whether `value` is a well-formed identifier.
    pub fn is_valid(value: &str) -> bool {
        value.parse::<AnnouncementId>().is_ok()
    }
}

impl Default for AnnouncementId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for AnnouncementId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(AnnouncementId)
            .map_err(|_| AppError::InvalidIdentifierFormat)
    }
}

impl From<Uuid> for AnnouncementId {
    fn from(id: Uuid) -> Self {
        AnnouncementId(id)
    }
}

impl fmt::Display for AnnouncementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
