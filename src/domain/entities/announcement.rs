use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{entities::announcement_id::AnnouncementId, utils::iso8601::is_iso8601};

// ───── Database Models ───────────────────────────────────────────────

/// A persisted announcement. Caller supplied dates are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Announcement {
    pub id: AnnouncementId,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    pub expiration_date: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Announcement {
    /// Active-window check against `now`, an ISO 8601 string of the same
    /// shape as the stored dates. Comparison is byte-wise.
    pub fn is_active_at(&self, now: &str) -> bool {
        let started = self
            .start_date
            .as_deref()
            .is_none_or(|start| start <= now);

        started && self.expiration_date.as_str() >= now
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnnouncementInsert {
    pub message: String,
    pub start_date: Option<String>,
    pub expiration_date: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// Full replacement of the mutable fields. `start_date: None` clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnouncementUpdate {
    pub message: String,
    pub start_date: Option<String>,
    pub expiration_date: String,
    pub updated_by: String,
    pub updated_at: DateTime<Utc>,
}

// ───── API Models ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnnouncementForm {
    pub message: String,

    #[validate(custom(function = "validate_iso8601"))]
    pub expiration_date: String,

    #[serde(default)]
    #[validate(custom(function = "validate_iso8601"))]
    pub start_date: Option<String>,
}

impl AnnouncementForm {
    /// Treats an empty `start_date` as not supplied.
    pub fn normalized(mut self) -> Self {
        if self.start_date.as_deref().is_some_and(|s| s.trim().is_empty()) {
            self.start_date = None;
        }
        self
    }

    pub fn into_insert(self, created_by: &str) -> AnnouncementInsert {
        AnnouncementInsert {
            message: self.message,
            start_date: self.start_date,
            expiration_date: self.expiration_date,
            created_by: created_by.to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn into_update(self, updated_by: &str) -> AnnouncementUpdate {
        AnnouncementUpdate {
            message: self.message,
            start_date: self.start_date,
            expiration_date: self.expiration_date,
            updated_by: updated_by.to_string(),
            updated_at: Utc::now(),
        }
    }
}

fn validate_iso8601(value: &str) -> Result<(), ValidationError> {
    if is_iso8601(value) {
        Ok(())
    } else {
        Err(ValidationError::new("iso8601")
            .with_message("Invalid date format. Use ISO 8601 format".into()))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnnouncementDeletedResponse {
    pub message: String,
}

impl Default for AnnouncementDeletedResponse {
    fn default() -> Self {
        AnnouncementDeletedResponse {
            message: "Announcement deleted successfully".to_string(),
        }
    }
}
