use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "School announcements API",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "active": "GET /announcements",
            "all": "GET /announcements/all?teacher_username=",
            "health": "GET /health"
        }
    }))
}
