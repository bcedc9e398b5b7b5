use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::logging::get_log_file_path;

#[derive(Serialize)]
pub struct ErrorMessage {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    pub code: String,
}

/// JSON error body returned for every rejected request.
#[derive(Serialize)]
pub struct StructuredError {
    pub success: bool,
    pub logs: String,
    pub messages: Vec<ErrorMessage>,
}

impl StructuredError {
    #[must_use]
    pub fn new(code: &str, message: String) -> Self {
        Self {
            success: false,
            logs: get_log_file_path().to_string(),
            messages: vec![ErrorMessage {
                message,
                tip: None,
                code: code.to_string(),
            }],
        }
    }

    #[must_use]
    pub fn with_tip(mut self, tip: &str) -> Self {
        if let Some(msg) = self.messages.first_mut() {
            msg.tip = Some(tip.to_string());
        }
        self
    }
}

/// Errors the HTTP layer can report. The item operations themselves never fail.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    #[must_use]
    pub fn error_code_and_tip(&self) -> (&'static str, Option<&'static str>) {
        match self {
            Self::InvalidBody(_) => (
                "INVALID_BODY",
                Some("Send a JSON object whose id field is an array of integers"),
            ),
            Self::PayloadTooLarge(_) => ("PAYLOAD_TOO_LARGE", None),
        }
    }

    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        let (code, tip) = self.error_code_and_tip();
        let se = StructuredError::new(code, self.to_string());
        match tip {
            Some(tip) => se.with_tip(tip),
            None => se,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(rejection.body_text())
        } else {
            Self::InvalidBody(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(code = self.error_code_and_tip().0, "Rejected request: {self}");
        (self.status(), Json(self.to_structured())).into_response()
    }
}

#[cfg(test)]
#[path = "structured_error_tests.rs"]
mod structured_error_tests;
