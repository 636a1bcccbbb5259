pub mod announcements;
pub mod extractors;
