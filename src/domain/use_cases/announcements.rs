use tracing::instrument;
use validator::Validate;

use crate::{
    entities::{
        announcement::{Announcement, AnnouncementDeletedResponse, AnnouncementForm},
        announcement_id::AnnouncementId,
        teacher::Teacher,
    },
    errors::AppError,
    repositories::{announcement::AnnouncementRepository, teacher::TeacherRepository},
    utils::iso8601::current_timestamp,
};

pub struct AnnouncementHandler<A, T>
where
    A: AnnouncementRepository,
    T: TeacherRepository,
{
    pub announcement_repo: A,
    pub teacher_repo: T,
}

impl<A, T> AnnouncementHandler<A, T>
where
    A: AnnouncementRepository,
    T: TeacherRepository,
{
    pub fn new(announcement_repo: A, teacher_repo: T) -> Self {
        AnnouncementHandler { announcement_repo, teacher_repo }
    }

    /// Resolves the supplied username against the teacher directory
    pub async fn authenticate(&self, teacher_username: Option<&str>) -> Result<Teacher, AppError> {
        let username = teacher_username.ok_or(AppError::AuthenticationRequired)?;

        self.teacher_repo
            .get_teacher_by_username(username)
            .await?
            .ok_or(AppError::InvalidCredentials)
    }

    /// Announcements whose date window covers the current time, newest first
    #[instrument(skip(self))]
    pub async fn list_active_announcements(&self) -> Result<Vec<Announcement>, AppError> {
        let now = current_timestamp();
        self.announcement_repo.list_active_announcements(&now).await
    }

    /// Every announcement regardless of its window, newest first
    #[instrument(skip(self))]
    pub async fn list_all_announcements(
        &self,
        teacher_username: Option<&str>,
    ) -> Result<Vec<Announcement>, AppError> {
        self.authenticate(teacher_username).await?;
        self.announcement_repo.list_all_announcements().await
    }

    #[instrument(skip(self, form))]
    pub async fn create_announcement(
        &self,
        teacher_username: Option<&str>,
        form: AnnouncementForm,
    ) -> Result<Announcement, AppError> {
        let teacher = self.authenticate(teacher_username).await?;

        let form = form.normalized();
        form.validate().map_err(|_| AppError::InvalidDateFormat)?;

        let announcement = self
            .announcement_repo
            .create_announcement(&form.into_insert(&teacher.username))
            .await?;

        tracing::info!(id = %announcement.id, teacher = %teacher.username, "Announcement created");
        Ok(announcement)
    }

    /// Replaces message and dates. A missing `start_date` clears the stored one.
    #[instrument(skip(self, form))]
    pub async fn update_announcement(
        &self,
        id: &str,
        teacher_username: Option<&str>,
        form: AnnouncementForm,
    ) -> Result<Announcement, AppError> {
        let teacher = self.authenticate(teacher_username).await?;

        let form = form.normalized();
        form.validate().map_err(|_| AppError::InvalidDateFormat)?;

        let valid_id: AnnouncementId = id.parse()?;

        let announcement = self
            .announcement_repo
            .update_announcement(&valid_id, &form.into_update(&teacher.username))
            .await?
            .ok_or_else(AppError::announcement_not_found)?;

        tracing::info!(id = %valid_id, teacher = %teacher.username, "Announcement updated");
        Ok(announcement)
    }

    #[instrument(skip(self))]
    pub async fn delete_announcement(
        &self,
        id: &str,
        teacher_username: Option<&str>,
    ) -> Result<AnnouncementDeletedResponse, AppError> {
        let teacher = self.authenticate(teacher_username).await?;

        let valid_id: AnnouncementId = id.parse()?;

        self.announcement_repo
            .delete_announcement(&valid_id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => AppError::announcement_not_found(),
                _ => e,
            })?;

        tracing::info!(id = %valid_id, teacher = %teacher.username, "Announcement deleted");
        Ok(AnnouncementDeletedResponse::default())
    }
}
