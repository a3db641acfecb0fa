use axum::body::Body;
use axum::extract::{FromRequest, Multipart};

use crate::error::RelayError;
use crate::types::GenerationRequest;

/// Extractor for the `mode`/`prompt`/`image` multipart form
///
/// Absent fields stay at their defaults; presence checks happen at
/// dispatch so the error messages come from one place.
pub struct ExtractGeneration(pub GenerationRequest);

impl<S> FromRequest<S> for ExtractGeneration
where
    S: Send + Sync,
{
    type Rejection = RelayError;

    async fn from_request(request: http::Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(request, state)
            .await
            .map_err(|e| RelayError::InvalidBody(e.to_string()))?;

        let mut generation = GenerationRequest::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| RelayError::InvalidBody(e.to_string()))?
        {
            let name = field.name().unwrap_or("").to_string();

            match name.as_str() {
                "mode" => {
                    generation.mode = field
                        .text()
                        .await
                        .map_err(|e| RelayError::InvalidBody(format!("failed to read mode field: {e}")))?;
                }
                "prompt" => {
                    generation.prompt = field
                        .text()
                        .await
                        .map_err(|e| RelayError::InvalidBody(format!("failed to read prompt field: {e}")))?;
                }
                "image" => {
                    generation.image = Some(
                        field
                            .bytes()
                            .await
                            .map_err(|e| RelayError::InvalidBody(format!("failed to read image data: {e}")))?,
                    );
                }
                _ => {
                    // Skip unknown fields
                }
            }
        }

        Ok(Self(generation))
    }
}
