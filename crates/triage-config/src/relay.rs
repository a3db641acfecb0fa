use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Placeholder in prompt templates replaced with the caller's prompt
pub const PROMPT_SLOT: &str = "{prompt}";

/// Relay configuration: the provider credential plus one endpoint
/// section per mode
///
/// Endpoint URLs, prompt templates, and sampling parameters are data,
/// not logic, so a provider swap never touches the dispatch code.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelayConfig {
    /// Bearer token for the hosted-inference provider
    ///
    /// Optional at load time; absence fails the first request rather
    /// than startup.
    #[serde(default)]
    pub api_key: Option<SecretString>,
    #[serde(default)]
    pub text: TextEndpointConfig,
    #[serde(default)]
    pub image: ImageEndpointConfig,
    #[serde(default)]
    pub multimodal: MultimodalEndpointConfig,
}

impl RelayConfig {
    /// The provider credential, treating an empty string as absent
    ///
    /// Env-var expansion with an empty default leaves an empty key in
    /// place of an unset variable.
    pub fn credential(&self) -> Option<&SecretString> {
        self.api_key.as_ref().filter(|key| !key.expose_secret().is_empty())
    }
}

/// Text generation endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextEndpointConfig {
    #[serde(default = "default_text_url")]
    pub url: String,
    /// Instruction template; `{prompt}` is replaced with the caller's
    /// prompt verbatim
    #[serde(default = "default_text_template")]
    pub prompt_template: String,
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_top_p")]
    pub top_p: f64,
}

impl Default for TextEndpointConfig {
    fn default() -> Self {
        Self {
            url: default_text_url(),
            prompt_template: default_text_template(),
            max_new_tokens: default_max_new_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
        }
    }
}

/// Image generation endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageEndpointConfig {
    #[serde(default = "default_image_url")]
    pub url: String,
    #[serde(default = "default_guidance_scale")]
    pub guidance_scale: f64,
    #[serde(default = "default_inference_steps")]
    pub num_inference_steps: u32,
}

impl Default for ImageEndpointConfig {
    fn default() -> Self {
        Self {
            url: default_image_url(),
            guidance_scale: default_guidance_scale(),
            num_inference_steps: default_inference_steps(),
        }
    }
}

/// Vision-language endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MultimodalEndpointConfig {
    #[serde(default = "default_multimodal_url")]
    pub url: String,
    /// Instruction used when the caller supplies an image without a
    /// prompt
    #[serde(default = "default_multimodal_fallback")]
    pub fallback_prompt: String,
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_top_p")]
    pub top_p: f64,
}

impl Default for MultimodalEndpointConfig {
    fn default() -> Self {
        Self {
            url: default_multimodal_url(),
            fallback_prompt: default_multimodal_fallback(),
            max_new_tokens: default_max_new_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
        }
    }
}

fn default_text_url() -> String {
    "https://api-inference.huggingface.co/models/google/gemma-7b".to_string()
}

fn default_text_template() -> String {
    "You are a doctor help diagnose patient based on symptom: {prompt}. \
     Advice what speciality of doctor to visit. Don't show the underlying \
     thought process. Tell possible underlying problems."
        .to_string()
}

fn default_image_url() -> String {
    "https://api-inference.huggingface.co/models/stabilityai/stable-diffusion-xl-base-1.0".to_string()
}

fn default_multimodal_url() -> String {
    "https://api-inference.huggingface.co/models/llava-hf/llava-1.5-13b-hf".to_string()
}

fn default_multimodal_fallback() -> String {
    "Analyze this medical image and describe what you see. Identify any \
     potential abnormalities or areas of concern."
        .to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_new_tokens() -> u32 {
    500
}

#[allow(clippy::missing_const_for_fn)]
fn default_temperature() -> f64 {
    0.7
}

#[allow(clippy::missing_const_for_fn)]
fn default_top_p() -> f64 {
    0.95
}

#[allow(clippy::missing_const_for_fn)]
fn default_guidance_scale() -> f64 {
    7.5
}

#[allow(clippy::missing_const_for_fn)]
fn default_inference_steps() -> u32 {
    50
}
