use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RelayError>;

/// Relay errors, all terminal for the current request
///
/// Everything funnels into the `{ "error": string }` envelope. Only the
/// method and credential failures keep their own status/message shape;
/// the rest collapse to 500 with a "Generation failed" prefix,
/// upstream status codes embedded in the message rather than forwarded.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Inbound request used a method other than POST
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Provider bearer token is absent from configuration
    #[error("API key not configured")]
    MissingCredential,

    /// Multimodal request arrived without an image part
    #[error("Image is required for multimodal analysis")]
    MissingImage,

    /// Unrecognized `mode` discriminator
    #[error("Invalid mode specified")]
    InvalidMode(String),

    /// Inbound multipart body could not be read
    #[error("Malformed request body: {0}")]
    InvalidBody(String),

    /// Provider returned a non-success status
    #[error("{label} failed: {status}")]
    Upstream { label: &'static str, status: u16 },

    /// Outbound request never produced a response
    #[error("{label} failed: {message}")]
    Connection { label: &'static str, message: String },
}

impl RelayError {
    /// HTTP status code for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingCredential
            | Self::MissingImage
            | Self::InvalidMode(_)
            | Self::InvalidBody(_)
            | Self::Upstream { .. }
            | Self::Connection { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the error envelope
    ///
    /// Method and credential failures surface bare; everything caught
    /// during generation carries the "Generation failed" prefix.
    pub fn client_message(&self) -> String {
        match self {
            Self::MethodNotAllowed | Self::MissingCredential => self.to_string(),
            _ => format!("Generation failed: {self}"),
        }
    }
}

/// Uniform error envelope returned on every failure path
#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    error: String,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let envelope = ErrorEnvelope {
            error: self.client_message(),
        };

        (status, Json(envelope)).into_response()
    }
}
