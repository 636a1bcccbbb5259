use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError},
    web,
};

use crate::errors::AppError;

/// Extractor failures are reported with the same JSON error body as every other 400
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::from(err).into()
    }));
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::from(err).into()
    }));
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::from(err).into()
    }));
}

impl From<JsonPayloadError> for AppError {
    fn from(err: JsonPayloadError) -> Self {
        AppError::BadRequest(format!("JSON payload error: {}", err))
    }
}

impl From<QueryPayloadError> for AppError {
    fn from(err: QueryPayloadError) -> Self {
        AppError::BadRequest(format!("Query error: {}", err))
    }
}

impl From<PathError> for AppError {
    fn from(err: PathError) -> Self {
        AppError::BadRequest(format!("Path error: {}", err))
    }
}
