use actix_web::{web, Either, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::announcement::AnnouncementForm,
    errors::AppError,
    repositories::{announcement::AnnouncementRepository, teacher::TeacherRepository},
    use_cases::{announcements::AnnouncementHandler, extractors::TeacherCredential},
    AppState,
};

/// Announcement fields arrive either as a JSON body or as query parameters
pub type AnnouncementInput = Either<web::Json<AnnouncementForm>, web::Query<AnnouncementForm>>;

/// Unwraps the payload. When it could not be read, a credential failure
/// still takes precedence over the payload error.
async fn read_form<A, T>(
    handler: &AnnouncementHandler<A, T>,
    credential: &TeacherCredential,
    input: Result<AnnouncementInput, actix_web::Error>,
) -> Result<AnnouncementForm, AppError>
where
    A: AnnouncementRepository,
    T: TeacherRepository,
{
    match input {
        Ok(Either::Left(json)) => Ok(json.into_inner()),
        Ok(Either::Right(query)) => Ok(query.into_inner()),
        Err(e) => {
            handler.authenticate(credential.as_deref()).await?;
            Err(AppError::BadRequest(format!("Invalid announcement payload: {}", e)))
        }
    }
}

#[instrument(skip(state))]
pub async fn get_active_announcements<A, T>(
    state: web::Data<AppState<A, T>>,
) -> Result<impl Responder, AppError>
where
    A: AnnouncementRepository + 'static,
    T: TeacherRepository + 'static,
{
    let announcements = state.announcement_handler
        .list_active_announcements()
        .await?;

    Ok(HttpResponse::Ok().json(announcements))
}

#[instrument(skip(state))]
pub async fn get_all_announcements<A, T>(
    credential: TeacherCredential,
    state: web::Data<AppState<A, T>>,
) -> Result<impl Responder, AppError>
where
    A: AnnouncementRepository + 'static,
    T: TeacherRepository + 'static,
{
    let announcements = state.announcement_handler
        .list_all_announcements(credential.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(announcements))
}

#[instrument(skip(state, input))]
pub async fn create_announcement<A, T>(
    credential: TeacherCredential,
    state: web::Data<AppState<A, T>>,
    input: Result<AnnouncementInput, actix_web::Error>,
) -> Result<impl Responder, AppError>
where
    A: AnnouncementRepository + 'static,
    T: TeacherRepository + 'static,
{
    let handler = &state.announcement_handler;
    let form = read_form(handler, &credential, input).await?;

    let announcement = handler
        .create_announcement(credential.as_deref(), form)
        .await?;

    Ok(HttpResponse::Ok().json(announcement))
}

#[instrument(skip(state, input))]
pub async fn update_announcement<A, T>(
    credential: TeacherCredential,
    announcement_id: web::Path<String>,
    state: web::Data<AppState<A, T>>,
    input: Result<AnnouncementInput, actix_web::Error>,
) -> Result<impl Responder, AppError>
where
    A: AnnouncementRepository + 'static,
    T: TeacherRepository + 'static,
{
    let handler = &state.announcement_handler;
    let form = read_form(handler, &credential, input).await?;

    let announcement = handler
        .update_announcement(&announcement_id, credential.as_deref(), form)
        .await?;

    Ok(HttpResponse::Ok().json(announcement))
}

#[instrument(skip(state))]
pub async fn delete_announcement<A, T>(
    credential: TeacherCredential,
    announcement_id: web::Path<String>,
    state: web::Data<AppState<A, T>>,
) -> Result<impl Responder, AppError>
where
    A: AnnouncementRepository + 'static,
    T: TeacherRepository + 'static,
{
    let response = state.announcement_handler
        .delete_announcement(&announcement_id, credential.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
