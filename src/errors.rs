use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;

/// Kesalahan yang bisa muncul di handler. Detail error driver hanya
/// masuk ke log, tidak pernah dikirim ke client.
#[derive(Debug)]
pub enum ApiError {
    Validation(&'static str),
    Database {
        message: &'static str,
        source: sqlx::Error,
    },
}

impl ApiError {
    pub fn database(message: &'static str, source: sqlx::Error) -> Self {
        ApiError::Database { message, source }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(message) => write!(f, "{}", message),
            ApiError::Database { message, .. } => write!(f, "{}", message),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Database { message, source } = self {
            log::error!("{}: {:?}", message, source);
        }

        HttpResponse::build(self.status_code())
            .content_type("application/json; charset=UTF-8")
            .json(json!({
                "status": "error",
                "message": self.to_string()
            }))
    }
}
