pub mod announcements;
pub mod home;
pub mod system;
