pub mod announcement;
pub mod announcement_id;
pub mod teacher;
