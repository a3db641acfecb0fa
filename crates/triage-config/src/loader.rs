use std::path::Path;

use crate::Config;
use crate::relay::PROMPT_SLOT;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment
    /// variable expansion fails, TOML parsing fails, or validation
    /// fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint URL is malformed or the text
    /// prompt template has no prompt slot
    pub fn validate(&self) -> anyhow::Result<()> {
        for (label, url) in [
            ("relay.text.url", &self.relay.text.url),
            ("relay.image.url", &self.relay.image.url),
            ("relay.multimodal.url", &self.relay.multimodal.url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{label} must be an http(s) URL, got `{url}`");
            }
        }

        if !self.relay.text.prompt_template.contains(PROMPT_SLOT) {
            anyhow::bail!("relay.text.prompt_template must contain the `{PROMPT_SLOT}` slot");
        }

        if self.relay.multimodal.fallback_prompt.trim().is_empty() {
            anyhow::bail!("relay.multimodal.fallback_prompt must not be empty");
        }

        Ok(())
    }
}
