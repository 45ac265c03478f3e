use actix_web::{error, web, HttpRequest};

use crate::core::AppError;

/// Body extractor errors render like every other validation failure
pub fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log_rejection(req, &err);
    AppError::validation(format!("Invalid JSON body: {}", err)).into()
}

/// Query string errors render like every other validation failure
pub fn query_error_handler(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    log_rejection(req, &err);
    AppError::validation(format!("Invalid query string: {}", err)).into()
}

fn log_rejection(req: &HttpRequest, err: &dyn std::fmt::Display) {
    tracing::warn!(
        method = %req.method(),
        path = req.path(),
        "Rejected request payload: {}",
        err
    );
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error_handler)
}
