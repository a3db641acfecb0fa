use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use secrecy::SecretString;
use triage_config::RelayConfig;

use crate::error::{RelayError, Result};
use crate::provider::{InferenceProvider, huggingface::HuggingFaceProvider};
use crate::types::{GenerationRequest, Mode, Relayed};

/// The relay: credential gate, mode dispatch, response repackaging
///
/// Shared read-only across requests; the only state is the provider
/// client and the configured credential.
pub struct Relay {
    credential: Option<SecretString>,
    provider: Box<dyn InferenceProvider>,
}

impl Relay {
    /// Build the relay from configuration
    pub fn from_config(config: &RelayConfig) -> Self {
        Self {
            credential: config.credential().cloned(),
            provider: Box::new(HuggingFaceProvider::from_config(config)),
        }
    }

    /// Handle one generation request with at most one outbound call
    ///
    /// The credential gate runs before mode dispatch, so a missing key
    /// wins over any validation failure regardless of mode.
    pub async fn handle(&self, request: GenerationRequest) -> Result<Relayed> {
        if self.credential.is_none() {
            return Err(RelayError::MissingCredential);
        }

        let mode: Mode = request.mode.parse()?;

        match mode {
            Mode::Text => self.provider.generate_text(&request.prompt).await.map(Relayed::json),
            Mode::Image => self.provider.generate_image(&request.prompt).await.map(Relayed::png),
            Mode::Multimodal => {
                let image = request.image.ok_or(RelayError::MissingImage)?;
                let encoded = BASE64.encode(&image);
                let prompt = (!request.prompt.is_empty()).then_some(request.prompt.as_str());

                self.provider.describe_image(&encoded, prompt).await.map(Relayed::json)
            }
        }
    }
}
