//! Configuration loading and management

use anyhow::{bail, Context, Result};

const HOOK_BUFFER_VAR: &str = "KEYSCRIBE_HOOK_BUFFER";
const OUTPUT_BUFFER_VAR: &str = "KEYSCRIBE_OUTPUT_BUFFER";

/// Capture pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Capacity of the hook-event channel feeding the engine
    pub hook_buffer: usize,

    /// Capacity of the broadcast channel carrying output events
    pub output_buffer: usize,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            hook_buffer: 32,
            output_buffer: 64,
        }
    }
}

impl CaptureConfig {
    /// Load configuration from environment overrides and defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = read_capacity(HOOK_BUFFER_VAR)? {
            config.hook_buffer = value;
        }
        if let Some(value) = read_capacity(OUTPUT_BUFFER_VAR)? {
            config.output_buffer = value;
        }

        Ok(config)
    }
}

/// Read an optional channel capacity from the environment, rejecting
/// unparseable or zero values.
fn read_capacity(var: &str) -> Result<Option<usize>> {
    let raw = match std::env::var(var) {
        Ok(raw) => raw,
        Err(std::env::VarError::NotPresent) => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("{var} is not valid unicode")),
    };

    let value: usize = raw
        .parse()
        .with_context(|| format!("{var} must be a positive integer, got {raw:?}"))?;
    if value == 0 {
        bail!("{var} must be greater than zero");
    }

    Ok(Some(value))
}
