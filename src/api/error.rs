use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use snafu::Snafu;

use crate::export::ExportError;
use crate::youtube::{ParseChannelErr, YouTubeError};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ApiError {
    #[snafu(display("Channel not found! Please check the ID."))]
    NotFound { channel_id: String },

    #[snafu(display("{source}"))]
    InvalidChannel { source: ParseChannelErr },

    #[snafu(display("An error occurred: {source}"))]
    Upstream { source: YouTubeError },

    #[snafu(display("An error occurred: {source}"))]
    Export { source: ExportError },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidChannel { .. } => StatusCode::BAD_REQUEST,
            ApiError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Export { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "not_found",
            ApiError::InvalidChannel { .. } => "invalid_channel",
            ApiError::Upstream { .. } => "upstream",
            ApiError::Export { .. } => "export",
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: String,
    error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let content = ErrorResponse {
            message: self.to_string(),
            error: self.kind(),
        };

        (self.status(), Json(content)).into_response()
    }
}
