use chrono::{DateTime, Utc};
use serde::Serialize;

/// Staff account from the teacher directory. Only its existence matters to
/// the announcement endpoints.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Teacher {
    pub username: String,
    pub display_name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}
