
use actix_web::{http::StatusCode, middleware::NormalizePath, test, web, App};
use announcement_service::{entities::announcement_id::AnnouncementId, routes::configure_routes};
use serde_json::{json, Value};
use test_utils::*;

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .wrap(NormalizePath::trim())
                .configure(configure_routes::<InMemoryAnnouncementRepo, InMemoryTeacherRepo>),
        )
        .await
    };
}

fn messages(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|a| a["message"].as_str().unwrap_or_default().to_string())
        .collect()
}

// ───── GET /announcements ────────────────────────────────────────────

#[actix_rt::test]
async fn active_listing_filters_by_date_window() {
    let (state, store) = test_state();
    store.seed(announcement("open-ended", None, FUTURE, 1));
    store.seed(announcement("expired", None, PAST, 2));
    store.seed(announcement("not-yet-started", Some(FUTURE), FUTURE, 3));
    store.seed(announcement("running", Some(PAST), FUTURE, 4));
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/announcements").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(messages(&body), vec!["open-ended", "running"]);
}

#[actix_rt::test]
async fn active_listing_is_newest_first() {
    let (state, store) = test_state();
    store.seed(announcement("oldest", None, FUTURE, 30));
    store.seed(announcement("newest", None, FUTURE, 1));
    store.seed(announcement("middle", None, FUTURE, 15));
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/announcements/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(messages(&body), vec!["newest", "middle", "oldest"]);
}

#[actix_rt::test]
async fn records_omit_unset_optional_fields() {
    let (state, store) = test_state();
    let stored = announcement("plain", None, FUTURE, 1);
    let id = stored.id;
    store.seed(stored);
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/announcements").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let record = &body[0];
    assert_eq!(record["id"], json!(id.to_string()));
    assert_eq!(record["expiration_date"], json!(FUTURE));
    assert_eq!(record["created_by"], json!(TEACHER));
    assert!(record.get("start_date").is_none());
    assert!(record.get("updated_by").is_none());
    assert!(record.get("updated_at").is_none());
}

// ───── GET /announcements/all ────────────────────────────────────────

#[actix_rt::test]
async fn full_listing_requires_a_username() {
    let (state, _store) = test_state();
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/announcements/all").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Authentication required for this action");
}

#[actix_rt::test]
async fn full_listing_rejects_unknown_teacher() {
    let (state, _store) = test_state();
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri("/announcements/all?teacher_username=intruder")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid teacher credentials");
}

#[actix_rt::test]
async fn full_listing_includes_inactive_announcements_newest_first() {
    let (state, store) = test_state();
    store.seed(announcement("expired", None, PAST, 20));
    store.seed(announcement("scheduled", Some(FUTURE), FUTURE, 10));
    store.seed(announcement("current", None, FUTURE, 5));
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri(&format!("/announcements/all?teacher_username={}", TEACHER))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(messages(&body), vec!["current", "scheduled", "expired"]);
}

// ───── POST /announcements ───────────────────────────────────────────

#[actix_rt::test]
async fn create_from_query_parameters_round_trips() {
    let (state, store) = test_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri(&format!(
            "/announcements?teacher_username={}&message=M&expiration_date=2030-01-01T00:00:00Z",
            TEACHER
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("start_date").is_none());
    assert!(body["created_at"].is_string());

    let id: AnnouncementId = body["id"].as_str().unwrap().parse().unwrap();
    let stored = store.get(&id).expect("announcement should be persisted");
    assert_eq!(stored.message, "M");
    assert_eq!(stored.expiration_date, "2030-01-01T00:00:00Z");
    assert_eq!(stored.created_by, TEACHER);
    assert!(stored.start_date.is_none());
}

#[actix_rt::test]
async fn create_from_json_body_keeps_dates_verbatim() {
    let (state, store) = test_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri(&format!("/announcements?teacher_username={}", TEACHER))
        .set_json(json!({
            "message": "Science fair",
            "start_date": "2030-03-01T09:00",
            "expiration_date": "2030-03-02T17:00:00+01:00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["start_date"], "2030-03-01T09:00");
    assert_eq!(body["expiration_date"], "2030-03-02T17:00:00+01:00");
    assert_eq!(store.len(), 1);
}

#[actix_rt::test]
async fn create_with_bad_date_is_rejected_and_persists_nothing() {
    let (state, store) = test_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri(&format!(
            "/announcements?teacher_username={}&message=M&expiration_date=not-a-date",
            TEACHER
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid date format. Use ISO 8601 format");
    assert_eq!(store.len(), 0);
}

#[actix_rt::test]
async fn create_with_padded_start_date_is_rejected_and_never_listed() {
    let (state, store) = test_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri(&format!("/announcements?teacher_username={}", TEACHER))
        .set_json(json!({
            "message": "future",
            "start_date": " 2999-01-01T00:00:00Z",
            "expiration_date": FUTURE
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid date format. Use ISO 8601 format");
    assert_eq!(store.len(), 0);

    let req = test::TestRequest::get().uri("/announcements").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(messages(&body).is_empty());
}

#[actix_rt::test]
async fn padded_username_is_not_a_known_teacher() {
    let (state, store) = test_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri(&format!(
            "/announcements?teacher_username=%20{}&message=M&expiration_date=2030-01-01",
            TEACHER
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid teacher credentials");
    assert_eq!(store.len(), 0);

    let req = test::TestRequest::get()
        .uri("/announcements/all?teacher_username=%20%20")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Authentication required for this action");
}

#[actix_rt::test]
async fn create_by_unknown_teacher_is_rejected_and_persists_nothing() {
    let (state, store) = test_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/announcements?teacher_username=intruder&message=M&expiration_date=2030-01-01")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(store.len(), 0);
}

#[actix_rt::test]
async fn create_without_required_fields_is_a_bad_request() {
    let (state, store) = test_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri(&format!("/announcements?teacher_username={}&message=M", TEACHER))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
    assert_eq!(store.len(), 0);
}

#[actix_rt::test]
async fn create_with_missing_fields_and_no_username_reports_authentication_first() {
    let (state, _store) = test_state();
    let app = init_app!(state);

    let req = test::TestRequest::post().uri("/announcements").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// ───── PUT /announcements/{id} ───────────────────────────────────────

#[actix_rt::test]
async fn update_without_start_date_removes_it() {
    let (state, store) = test_state();
    let existing = announcement("Old text", Some(PAST), FUTURE, 5);
    let id = existing.id;
    store.seed(existing);
    let app = init_app!(state);

    let req = test::TestRequest::put()
        .uri(&format!(
            "/announcements/{}?teacher_username=principal&message=New%20text&expiration_date=2031-01-01",
            id
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "New text");
    assert!(body.get("start_date").is_none());
    assert_eq!(body["updated_by"], "principal");
    assert_eq!(body["created_by"], TEACHER);

    let stored = store.get(&id).unwrap();
    assert!(stored.start_date.is_none());
    assert_eq!(stored.expiration_date, "2031-01-01");
    assert!(stored.updated_at.is_some());
}

#[actix_rt::test]
async fn update_with_start_date_sets_it() {
    let (state, store) = test_state();
    let existing = announcement("Old text", None, FUTURE, 5);
    let id = existing.id;
    store.seed(existing);
    let app = init_app!(state);

    let req = test::TestRequest::put()
        .uri(&format!("/announcements/{}?teacher_username={}", id, TEACHER))
        .set_json(json!({
            "message": "Rescheduled",
            "start_date": "2030-09-01",
            "expiration_date": "2030-09-30"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(store.get(&id).unwrap().start_date.as_deref(), Some("2030-09-01"));
}

#[actix_rt::test]
async fn update_of_unknown_announcement_is_not_found() {
    let (state, _store) = test_state();
    let app = init_app!(state);

    let req = test::TestRequest::put()
        .uri(&format!(
            "/announcements/{}?teacher_username={}&message=M&expiration_date=2030-01-01",
            AnnouncementId::new(),
            TEACHER
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Announcement not found");
}

// ───── DELETE /announcements/{id} ────────────────────────────────────

#[actix_rt::test]
async fn delete_with_malformed_id_is_a_bad_request() {
    let (state, _store) = test_state();
    let app = init_app!(state);

    let req = test::TestRequest::delete()
        .uri(&format!("/announcements/not-an-id?teacher_username={}", TEACHER))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid announcement_id format");
}

#[actix_rt::test]
async fn delete_removes_record_and_second_delete_is_not_found() {
    let (state, store) = test_state();
    let existing = announcement("Bye", None, FUTURE, 1);
    let id = existing.id;
    store.seed(existing);
    let app = init_app!(state);

    let uri = format!("/announcements/{}?teacher_username={}", id, TEACHER);

    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Announcement deleted successfully");
    assert!(store.get(&id).is_none());

    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn delete_without_username_is_unauthorized() {
    let (state, store) = test_state();
    let existing = announcement("Stay", None, FUTURE, 1);
    let id = existing.id;
    store.seed(existing);
    let app = init_app!(state);

    let req = test::TestRequest::delete()
        .uri(&format!("/announcements/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(store.get(&id).is_some());
}

// ───── system ────────────────────────────────────────────────────────

#[actix_rt::test]
async fn health_reports_database_status() {
    let (state, _store) = test_state();
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "OK");
}
