use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxAnnouncementRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxTeacherRepo {
    pub pool: PgPool,
}
