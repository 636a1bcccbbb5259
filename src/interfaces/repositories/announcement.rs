use async_trait::async_trait;

use crate::{
    entities::{
        announcement::{Announcement, AnnouncementInsert, AnnouncementUpdate},
        announcement_id::AnnouncementId,
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxAnnouncementRepo,
};

const ANNOUNCEMENT_COLUMNS: &str =
    "id, message, start_date, expiration_date, created_by, created_at, updated_by, updated_at";

#[async_trait]
pub trait AnnouncementRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;
    /// `now` must be an ISO 8601 string comparable byte-wise with the stored dates
    async fn list_active_announcements(&self, now: &str) -> Result<Vec<Announcement>, AppError>;
    async fn list_all_announcements(&self) -> Result<Vec<Announcement>, AppError>;
    async fn get_announcement_by_id(&self, id: &AnnouncementId) -> Result<Option<Announcement>, AppError>;
    async fn create_announcement(&self, announcement: &AnnouncementInsert) -> Result<Announcement, AppError>;
    /// Returns `None` when no announcement has the given id
    async fn update_announcement(
        &self,
        id: &AnnouncementId,
        update: &AnnouncementUpdate,
    ) -> Result<Option<Announcement>, AppError>;
    async fn delete_announcement(&self, id: &AnnouncementId) -> Result<(), AppError>;
}

impl SqlxAnnouncementRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxAnnouncementRepo { pool }
    }
}

#[async_trait]
impl AnnouncementRepository for SqlxAnnouncementRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn list_active_announcements(&self, now: &str) -> Result<Vec<Announcement>, AppError> {
        // COLLATE "C" keeps the comparison byte-wise regardless of database locale
        let query = format!(
            r#"
            SELECT {ANNOUNCEMENT_COLUMNS} FROM announcements
            WHERE (start_date IS NULL OR start_date COLLATE "C" <= $1 COLLATE "C")
              AND expiration_date COLLATE "C" >= $1 COLLATE "C"
            ORDER BY created_at DESC
            "#
        );

        let announcements = sqlx::query_as::<_, Announcement>(&query)
            .bind(now)
            .fetch_all(&self.pool)
            .await?;

        Ok(announcements)
    }

    async fn list_all_announcements(&self) -> Result<Vec<Announcement>, AppError> {
        let query = format!("SELECT {ANNOUNCEMENT_COLUMNS} FROM announcements ORDER BY created_at DESC");

        let announcements = sqlx::query_as::<_, Announcement>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(announcements)
    }

    async fn get_announcement_by_id(&self, id: &AnnouncementId) -> Result<Option<Announcement>, AppError> {
        let query = format!("SELECT {ANNOUNCEMENT_COLUMNS} FROM announcements WHERE id = $1");

        sqlx::query_as::<_, Announcement>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn create_announcement(&self, announcement: &AnnouncementInsert) -> Result<Announcement, AppError> {
        let query = format!(
            r#"
            INSERT INTO announcements (message, start_date, expiration_date, created_by, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {ANNOUNCEMENT_COLUMNS}
            "#
        );

        let created = sqlx::query_as::<_, Announcement>(&query)
            .bind(&announcement.message)
            .bind(&announcement.start_date)
            .bind(&announcement.expiration_date)
            .bind(&announcement.created_by)
            .bind(announcement.created_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn update_announcement(
        &self,
        id: &AnnouncementId,
        update: &AnnouncementUpdate,
    ) -> Result<Option<Announcement>, AppError> {
        // Single statement: start_date is set or cleared together with the other fields
        let query = format!(
            r#"
            UPDATE announcements SET
                message = $2,
                start_date = $3,
                expiration_date = $4,
                updated_by = $5,
                updated_at = $6
            WHERE id = $1
            RETURNING {ANNOUNCEMENT_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Announcement>(&query)
            .bind(id)
            .bind(&update.message)
            .bind(&update.start_date)
            .bind(&update.expiration_date)
            .bind(&update.updated_by)
            .bind(update.updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn delete_announcement(&self, id: &AnnouncementId) -> Result<(), AppError> {
        sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|result| {
                if result.rows_affected() == 0 {
                    Err(AppError::announcement_not_found())
                } else {
                    Ok(())
                }
            })?
    }
}
