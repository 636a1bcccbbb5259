use async_trait::async_trait;

use crate::{entities::teacher::Teacher, errors::AppError, repositories::sqlx_repo::SqlxTeacherRepo};

#[async_trait]
pub trait TeacherRepository: Send + Sync {
    async fn get_teacher_by_username(&self, username: &str) -> Result<Option<Teacher>, AppError>;
}

impl SqlxTeacherRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxTeacherRepo { pool }
    }
}

#[async_trait]
impl TeacherRepository for SqlxTeacherRepo {
    async fn get_teacher_by_username(&self, username: &str) -> Result<Option<Teacher>, AppError> {
        sqlx::query_as::<_, Teacher>(
            "SELECT username, display_name, role, created_at FROM teachers WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }
}
