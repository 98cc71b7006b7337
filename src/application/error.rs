use serde::Serialize;
use thiserror::Error;

use crate::domain::ValidationError;
use crate::upstream::UpstreamFailure;

/// Classified failure of a holiday query. Each variant carries the message
/// shown to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    UnknownError(String),
}

/// The three error classes, without their messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    NotFound,
    BadRequest,
    UnknownError,
}

impl ErrorKind {
    /// HTTP-equivalent status code.
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::BadRequest => 400,
            ErrorKind::UnknownError => 500,
        }
    }

    /// Reason phrase matching [`ErrorKind::status_code`].
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "Not Found",
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::UnknownError => "Internal Server Error",
        }
    }

    pub fn default_message(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "No holidays found for the given country and year.",
            ErrorKind::BadRequest => "Invalid request. Please insert valid data input.",
            ErrorKind::UnknownError => "An unexpected error occurred while retrieving holidays.",
        }
    }
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::BadRequest(_) => ErrorKind::BadRequest,
            AppError::UnknownError(_) => ErrorKind::UnknownError,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound(msg) | AppError::BadRequest(msg) | AppError::UnknownError(msg) => {
                msg
            }
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// Map an upstream failure onto the error taxonomy.
///
/// 404 is "not found", 400 is "bad request", everything else (including
/// payloads that cannot be decoded) is unknown.
pub fn classify(failure: &UpstreamFailure) -> AppError {
    match failure {
        UpstreamFailure::Status(404) => {
            AppError::NotFound(ErrorKind::NotFound.default_message().to_string())
        }
        UpstreamFailure::Status(400) => {
            AppError::BadRequest(ErrorKind::BadRequest.default_message().to_string())
        }
        UpstreamFailure::Status(_)
        | UpstreamFailure::Transport(_)
        | UpstreamFailure::Malformed(_) => {
            AppError::UnknownError(ErrorKind::UnknownError.default_message().to_string())
        }
    }
}
