//! Processor configuration
#![allow(clippy::must_use_candidate)] // Small constructor/accessor API without pervasive #[must_use].

use crate::Result;
use serde::{Deserialize, Serialize};

/// Configuration for the message processor.
///
/// Mirrors the options of the conversion service's configuration file.
/// Missing keys fall back to their defaults and unknown keys (transport
/// scheduling knobs and the like) are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Whether the processor runs at all.
    pub enabled: bool,

    /// Emit extra debug logging while processing.
    pub debug: bool,

    /// Indent the generated XML.
    pub indent: bool,

    /// Keep the XML declaration in the generated output.
    pub include_headers: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            debug: false,
            indent: true,
            include_headers: true,
        }
    }
}

impl ProcessorConfig {
    /// Load configuration from a YAML document.
    pub fn from_yaml(data: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(data)?)
    }
}
