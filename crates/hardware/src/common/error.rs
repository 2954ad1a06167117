//! Host-side error definitions.
//!
//! The pipeline itself is total: every instruction word decodes and every
//! address is masked into range, so nothing inside a clock can fail. The
//! errors here cover what the embedding host does around the core:
//! 1. **Image Loading:** Placing microcode and data images into local memory.
//! 2. **Configuration:** Parsing the JSON configuration document.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Local memory region targeted by an image load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Data memory (`0x0000..0x1000`).
    Dmem,
    /// Instruction memory (`0x1000..0x2000`).
    Imem,
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dmem => write!(f, "DMEM"),
            Self::Imem => write!(f, "IMEM"),
        }
    }
}

/// Errors raised while loading images into local memory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image plus its offset does not fit inside the target region.
    #[error("{len:#x}-byte image at offset {offset:#x} does not fit in {region} ({limit:#x} bytes)")]
    ImageTooLarge {
        /// Region being loaded.
        region: Region,
        /// Offset inside the region.
        offset: usize,
        /// Length of the rejected image.
        len: usize,
        /// Size of the region.
        limit: usize,
    },

    /// The image file could not be read.
    #[error("could not read image '{path}': {source}")]
    Io {
        /// Path of the image file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Errors raised while building a processor from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for [`crate::config::Config`].
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// An image referenced by the configuration could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
}
