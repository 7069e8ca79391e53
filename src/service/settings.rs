use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    core::ScaleFactor,
    error::{SigpasteError, SigpasteResult},
};

/// Per-image ceiling on decoded payload size.
pub const DEFAULT_MAX_PAYLOAD_BYTES: u64 = 32 * 1024 * 1024;

/// Startup configuration handed to the request boundary.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StampSettings {
    /// Upscale ratio for the base image and for placement coordinates.
    pub scale: ScaleFactor,
    /// Largest decoded size accepted for either image payload.
    pub max_payload_bytes: u64,
}

impl Default for StampSettings {
    fn default() -> Self {
        Self {
            scale: ScaleFactor::DEFAULT,
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
        }
    }
}

impl StampSettings {
    /// Parse and validate settings from a JSON document. Missing fields take defaults.
    pub fn from_json_str(s: &str) -> SigpasteResult<Self> {
        let settings: Self = serde_json::from_str(s)
            .map_err(|e| SigpasteError::invalid_input(format!("parse settings JSON: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file.
    pub fn load(path: &Path) -> SigpasteResult<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read settings '{}'", path.display()))?;
        Self::from_json_str(&raw)
    }

    /// Check ranges that deserialization alone cannot enforce.
    pub fn validate(&self) -> SigpasteResult<()> {
        if self.max_payload_bytes == 0 {
            return Err(SigpasteError::invalid_input("max_payload_bytes must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/service/settings.rs"]
mod tests;
