//! Error responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::application::AppError;

/// JSON body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub timestamp: NaiveDateTime,
    pub status: u16,
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(err: &AppError, timestamp: NaiveDateTime) -> Self {
        let kind = err.kind();
        Self {
            timestamp,
            status: kind.status_code(),
            error: kind.label().to_string(),
            message: err.message().to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorBody::new(&self, Local::now().naive_local());
        (status, Json(body)).into_response()
    }
}
