pub(crate) mod huggingface;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Result;

/// Trait for hosted-inference provider implementations
///
/// One method per mode; each issues exactly one outbound call and
/// returns the provider body untouched. Instruction templates and
/// sampling parameters are the provider's concern, so callers pass
/// raw user input.
#[async_trait]
pub(crate) trait InferenceProvider: Send + Sync {
    /// Text generation for a user prompt
    async fn generate_text(&self, prompt: &str) -> Result<Bytes>;

    /// Image generation from a prompt, returning raw image bytes
    async fn generate_image(&self, prompt: &str) -> Result<Bytes>;

    /// Vision-language description of a base64-encoded image
    ///
    /// Falls back to a fixed instruction when the caller supplied no
    /// prompt.
    async fn describe_image(&self, image_base64: &str, prompt: Option<&str>) -> Result<Bytes>;
}
