use actix_web::web;

use crate::{
    handlers::announcements,
    repositories::{announcement::AnnouncementRepository, teacher::TeacherRepository},
};

pub fn config_routes<A, T>(cfg: &mut web::ServiceConfig)
where
    A: AnnouncementRepository + 'static,
    T: TeacherRepository + 'static,
{
    cfg.service(
        web::scope("/announcements")
            .service(
                web::resource("")
                    .route(web::get().to(announcements::get_active_announcements::<A, T>))
                    .route(web::post().to(announcements::create_announcement::<A, T>))
            )
            .service(
                web::resource("/all")
                    .route(web::get().to(announcements::get_all_announcements::<A, T>))
            )
            .service(
                web::resource("/{announcement_id}")
                    .route(web::put().to(announcements::update_announcement::<A, T>))
                    .route(web::delete().to(announcements::delete_announcement::<A, T>))
            )
    );
}
