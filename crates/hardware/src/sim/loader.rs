//! Image Loader.
//!
//! This module places microcode and data images into local memory. It performs:
//! 1. **File loading:** Reads an image from disk into a byte buffer.
//! 2. **Placement:** Copies the bytes into IMEM or DMEM, rejecting images that do not fit.
//! 3. **Configuration:** Loads every image named by a [`MemoryConfig`].

use std::fs;
use std::path::Path;

use crate::common::error::{LoadError, Region};
use crate::config::MemoryConfig;
use crate::soc::memory::SpMemory;

/// Loads a binary file from disk into a byte vector.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read.
pub fn load_binary(path: &Path) -> Result<Vec<u8>, LoadError> {
    fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Copies an in-memory image to offset 0 of `region`.
///
/// # Errors
///
/// Returns [`LoadError::ImageTooLarge`] if `image` exceeds 4 KiB.
pub fn load_bytes(mem: &mut SpMemory, region: Region, image: &[u8]) -> Result<(), LoadError> {
    mem.load(region, 0, image)?;
    tracing::debug!(%region, len = image.len(), "image loaded");
    Ok(())
}

/// Reads `path` and copies it to offset 0 of `region`.
///
/// # Errors
///
/// Returns [`LoadError::Io`] on read failure and
/// [`LoadError::ImageTooLarge`] if the file exceeds 4 KiB.
pub fn load_image(mem: &mut SpMemory, region: Region, path: &Path) -> Result<(), LoadError> {
    let image = load_binary(path)?;
    load_bytes(mem, region, &image)
}

/// Loads the IMEM and DMEM images named by `config`, if any.
///
/// # Errors
///
/// Propagates the first [`LoadError`] encountered.
pub fn load_configured(mem: &mut SpMemory, config: &MemoryConfig) -> Result<(), LoadError> {
    if let Some(path) = &config.imem_image {
        load_image(mem, Region::Imem, path)?;
    }
    if let Some(path) = &config.dmem_image {
        load_image(mem, Region::Dmem, path)?;
    }
    Ok(())
}
