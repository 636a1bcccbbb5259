use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

/// Process start, forced in `main` so uptime is measured from boot
pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

pub const DB_CONNECT_MAX_RETRIES: u32 = 5;
pub const DB_CONNECT_INITIAL_BACKOFF_SECS: u64 = 2;
