use actix_web::web;

use crate::{
    handlers::{home::home, system::health_check},
    repositories::{announcement::AnnouncementRepository, teacher::TeacherRepository},
};

mod announcements;
mod json_error;

pub fn configure_routes<A, T>(cfg: &mut web::ServiceConfig)
where
    A: AnnouncementRepository + 'static,
    T: TeacherRepository + 'static,
{
    cfg.service(home);
    cfg.route("/health", web::get().to(health_check::<A, T>));

    cfg.configure(announcements::config_routes::<A, T>);
    cfg.configure(json_error::config_routes);
}
