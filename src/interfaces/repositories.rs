pub mod announcement;
pub mod sqlx_repo;
pub mod teacher;
