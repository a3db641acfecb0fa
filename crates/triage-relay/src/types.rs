use std::str::FromStr;

use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use http::{HeaderValue, header};

use crate::error::RelayError;

/// The three mutually exclusive request kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Text,
    Image,
    Multimodal,
}

impl Mode {
    /// Label used in upstream failure messages
    pub const fn failure_label(self) -> &'static str {
        match self {
            Self::Text => "Text analysis",
            Self::Image => "Image generation",
            Self::Multimodal => "Multimodal analysis",
        }
    }
}

impl FromStr for Mode {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "multimodal" => Ok(Self::Multimodal),
            other => Err(RelayError::InvalidMode(other.to_string())),
        }
    }
}

/// One inbound generation request, as extracted from the multipart form
///
/// `mode` stays a raw string until dispatch so unknown values surface
/// as `InvalidMode` rather than a parse rejection.
#[derive(Debug, Default)]
pub struct GenerationRequest {
    pub mode: String,
    pub prompt: String,
    pub image: Option<Bytes>,
}

/// A provider response repackaged for the caller
///
/// The body is relayed untouched; only content-type and cache headers
/// are set per mode.
#[derive(Debug)]
pub struct Relayed {
    body: Bytes,
    content_type: &'static str,
    cache_control: &'static str,
}

impl Relayed {
    /// JSON passthrough (text and multimodal results), never cached
    pub const fn json(body: Bytes) -> Self {
        Self {
            body,
            content_type: "application/json",
            cache_control: "no-cache",
        }
    }

    /// Binary image passthrough, cached long-term
    pub const fn png(body: Bytes) -> Self {
        Self {
            body,
            content_type: "image/png",
            cache_control: "public, max-age=31536000",
        }
    }
}

impl IntoResponse for Relayed {
    fn into_response(self) -> Response {
        (
            [
                (header::CONTENT_TYPE, HeaderValue::from_static(self.content_type)),
                (header::CACHE_CONTROL, HeaderValue::from_static(self.cache_control)),
            ],
            self.body,
        )
            .into_response()
    }
}
