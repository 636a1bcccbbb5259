mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, utils, web};

use repositories::{
    announcement::AnnouncementRepository,
    sqlx_repo::{SqlxAnnouncementRepo, SqlxTeacherRepo},
    teacher::TeacherRepository,
};
use use_cases::announcements::AnnouncementHandler;

pub struct AppState<A = SqlxAnnouncementRepo, T = SqlxTeacherRepo>
where
    A: AnnouncementRepository,
    T: TeacherRepository,
{
    pub announcement_handler: AnnouncementHandler<A, T>,
}

impl AppState {
    pub fn new(pool: sqlx::PgPool) -> Self {
        AppState::with_repositories(
            SqlxAnnouncementRepo::new(pool.clone()),
            SqlxTeacherRepo::new(pool),
        )
    }
}

impl<A, T> AppState<A, T>
where
    A: AnnouncementRepository,
    T: TeacherRepository,
{
    pub fn with_repositories(announcement_repo: A, teacher_repo: T) -> Self {
        AppState {
            announcement_handler: AnnouncementHandler::new(announcement_repo, teacher_repo),
        }
    }
}
