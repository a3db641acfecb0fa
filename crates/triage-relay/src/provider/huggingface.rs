use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use triage_config::relay::PROMPT_SLOT;
use triage_config::{ImageEndpointConfig, MultimodalEndpointConfig, RelayConfig, TextEndpointConfig};

use super::InferenceProvider;
use crate::error::{RelayError, Result};

/// Provider speaking the Hugging Face serverless inference API
///
/// Bodies come back as raw bytes so successful responses survive the
/// relay byte-for-byte.
pub(crate) struct HuggingFaceProvider {
    client: Client,
    api_key: Option<SecretString>,
    text: TextEndpointConfig,
    image: ImageEndpointConfig,
    multimodal: MultimodalEndpointConfig,
}

impl HuggingFaceProvider {
    pub fn from_config(config: &RelayConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.credential().cloned(),
            text: config.text.clone(),
            image: config.image.clone(),
            multimodal: config.multimodal.clone(),
        }
    }

    fn bearer(&self) -> Result<String> {
        let key = self.api_key.as_ref().ok_or(RelayError::MissingCredential)?;
        Ok(format!("Bearer {}", key.expose_secret()))
    }

    /// One outbound POST; non-success statuses become `Upstream`
    /// errors without inspecting the provider error body
    async fn post(&self, url: &str, label: &'static str, body: &impl Serialize) -> Result<Bytes> {
        let response = self
            .client
            .post(url)
            .header("Authorization", self.bearer()?)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(%url, error = %e, "outbound inference request failed");
                RelayError::Connection {
                    label,
                    message: e.to_string(),
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            tracing::error!(%url, %status, "inference provider returned an error");
            return Err(RelayError::Upstream {
                label,
                status: status.as_u16(),
            });
        }

        response.bytes().await.map_err(|e| {
            tracing::error!(%url, error = %e, "failed to read provider response body");
            RelayError::Connection {
                label,
                message: e.to_string(),
            }
        })
    }
}

/// Substitute the caller's prompt into an instruction template verbatim
fn fold_prompt(template: &str, prompt: &str) -> String {
    template.replace(PROMPT_SLOT, prompt)
}

// -- Wire formats for the inference API --

#[derive(Serialize)]
struct TextGenerationRequest<'a> {
    inputs: &'a str,
    parameters: TextParameters,
}

#[derive(Serialize)]
struct TextParameters {
    max_new_tokens: u32,
    temperature: f64,
    top_p: f64,
    do_sample: bool,
    return_full_text: bool,
}

#[derive(Serialize)]
struct ImageGenerationRequest<'a> {
    inputs: &'a str,
    parameters: ImageParameters,
}

#[derive(Serialize)]
struct ImageParameters {
    guidance_scale: f64,
    num_inference_steps: u32,
}

#[derive(Serialize)]
struct MultimodalRequest<'a> {
    inputs: MultimodalInputs<'a>,
    parameters: MultimodalParameters,
}

#[derive(Serialize)]
struct MultimodalInputs<'a> {
    image: &'a str,
    prompt: &'a str,
}

#[derive(Serialize)]
struct MultimodalParameters {
    max_new_tokens: u32,
    temperature: f64,
    top_p: f64,
}

#[async_trait]
impl InferenceProvider for HuggingFaceProvider {
    async fn generate_text(&self, prompt: &str) -> Result<Bytes> {
        let instruction = fold_prompt(&self.text.prompt_template, prompt);

        let body = TextGenerationRequest {
            inputs: &instruction,
            parameters: TextParameters {
                max_new_tokens: self.text.max_new_tokens,
                temperature: self.text.temperature,
                top_p: self.text.top_p,
                do_sample: true,
                return_full_text: false,
            },
        };

        tracing::debug!(url = %self.text.url, "sending text generation request");

        self.post(&self.text.url, "Text analysis", &body).await
    }

    async fn generate_image(&self, prompt: &str) -> Result<Bytes> {
        let body = ImageGenerationRequest {
            inputs: prompt,
            parameters: ImageParameters {
                guidance_scale: self.image.guidance_scale,
                num_inference_steps: self.image.num_inference_steps,
            },
        };

        tracing::debug!(url = %self.image.url, "sending image generation request");

        self.post(&self.image.url, "Image generation", &body).await
    }

    async fn describe_image(&self, image_base64: &str, prompt: Option<&str>) -> Result<Bytes> {
        let instruction = prompt
            .filter(|p| !p.is_empty())
            .unwrap_or(&self.multimodal.fallback_prompt);

        let body = MultimodalRequest {
            inputs: MultimodalInputs {
                image: image_base64,
                prompt: instruction,
            },
            parameters: MultimodalParameters {
                max_new_tokens: self.multimodal.max_new_tokens,
                temperature: self.multimodal.temperature,
                top_p: self.multimodal.top_p,
            },
        };

        tracing::debug!(url = %self.multimodal.url, "sending multimodal request");

        self.post(&self.multimodal.url, "Multimodal analysis", &body).await
    }
}
