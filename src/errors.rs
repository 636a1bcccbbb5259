use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;

#[derive(Debug, Display)]
pub enum AppError {
    #[display("Authentication required for this action")]
    AuthenticationRequired,

    #[display("Invalid teacher credentials")]
    InvalidCredentials,

    #[display("Invalid date format. Use ISO 8601 format")]
    InvalidDateFormat,

    #[display("Invalid announcement_id format")]
    InvalidIdentifierFormat,

    #[display("{_0}")]
    NotFound(String),

    #[display("{_0}")]
    BadRequest(String),

    #[display("Internal server error: {_0}")]
    InternalError(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let message = match self {
            // Store details stay in the logs
            AppError::InternalError(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(serde_json::json!({"error": message}))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::InvalidDateFormat => StatusCode::BAD_REQUEST,
            AppError::InvalidIdentifierFormat => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl AppError {
    pub fn announcement_not_found() -> Self {
        AppError::NotFound("Announcement not found".to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::announcement_not_found(),
            _ => {
                tracing::error!("Database error: {}", err);
                AppError::InternalError(format!("Database error: {}", err))
            }
        }
    }
}
