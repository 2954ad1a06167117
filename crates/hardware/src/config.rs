//! Configuration system for the signal processor simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! processor instance. It provides:
//! 1. **Defaults:** Power-on values for the fetch counter and halt state.
//! 2. **Structures:** General settings and the optional microcode/data images.
//!
//! Configuration is supplied as JSON, or use `Config::default()`.

use std::path::PathBuf;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Initial IMEM fetch offset.
    pub const START_PC: u32 = 0x000;

    /// The processor powers up halted and waits for the host to clear HALT.
    pub const START_HALTED: bool = true;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use rspsim_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.general.trace_instructions);
/// assert!(config.general.start_halted);
/// assert_eq!(config.general.start_pc, 0);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use rspsim_core::config::Config;
///
/// let json = r#"{
///     "general": {
///         "trace_instructions": true,
///         "start_pc": 256,
///         "start_halted": false
///     },
///     "memory": {
///         "imem_image": "ucode.bin"
///     }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.start_pc, 0x100);
/// assert!(config.memory.dmem_image.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Images placed into local memory at construction
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration document.
    ///
    /// Missing sections and fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `json` is not a valid document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Emit a trace event for every executed and committed instruction
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial IMEM fetch offset; masked to a word-aligned offset below 4 KiB
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,

    /// Whether SP_STATUS.HALT is set when the processor is created
    #[serde(default = "GeneralConfig::default_start_halted")]
    pub start_halted: bool,
}

impl GeneralConfig {
    fn default_start_pc() -> u32 {
        defaults::START_PC
    }

    fn default_start_halted() -> bool {
        defaults::START_HALTED
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
            start_halted: defaults::START_HALTED,
        }
    }
}

/// Local memory images.
///
/// Each image is loaded at offset 0 of its region and must fit in 4 KiB.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Microcode image copied into IMEM
    #[serde(default)]
    pub imem_image: Option<PathBuf>,

    /// Data image copied into DMEM
    #[serde(default)]
    pub dmem_image: Option<PathBuf>,
}
