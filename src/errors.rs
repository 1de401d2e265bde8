use axum::http::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Failures at the plan and persistence boundaries.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {what}: {source}")]
    MalformedData {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate day id '{0}' in training plan")]
    DuplicateDayId(String),
}

impl DataError {
    pub fn malformed(what: &'static str, source: serde_json::Error) -> Self {
        Self::MalformedData { what, source }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_data_names_what_failed() {
        let source = serde_json::from_str::<u8>("nope").unwrap_err();
        let err = DataError::malformed("training plan", source);
        assert!(err.to_string().starts_with("malformed training plan:"));
    }

    #[test]
    fn bad_request_carries_status() {
        let err = AppError::bad_request("index out of range");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "index out of range");
    }
}
