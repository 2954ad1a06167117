//! # Image Loading Tests
//!
//! Loads microcode and data images from byte slices and from files, and
//! builds a processor whose configuration names image files.

use rspsim_core::Rsp;
use rspsim_core::common::{ConfigError, LoadError, Region};
use rspsim_core::config::{Config, MemoryConfig};
use rspsim_core::sim::loader;
use rspsim_core::soc::memory::SpMemory;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Helper function to create a temporary binary file for testing.
fn create_temp_binary(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_binary_success() {
    let test_data = vec![0x00, 0x22, 0x18, 0x21];
    let temp_file = create_temp_binary(&test_data);
    assert_eq!(loader::load_binary(temp_file.path()).unwrap(), test_data);
}

#[test]
fn test_load_binary_missing_file() {
    let err = loader::load_binary(Path::new("/nonexistent/ucode.bin")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/ucode.bin"));
}

#[test]
fn test_load_bytes_into_imem() {
    let mut mem = SpMemory::new();
    loader::load_bytes(&mut mem, Region::Imem, &[0x00, 0x22, 0x18, 0x21]).unwrap();
    assert_eq!(mem.fetch(0), 0x0022_1821);
}

#[test]
fn test_full_size_image_fits() {
    let mut mem = SpMemory::new();
    let image = vec![0x5A; 0x1000];
    loader::load_bytes(&mut mem, Region::Dmem, &image).unwrap();
    assert!(mem.dmem().iter().all(|&b| b == 0x5A));
    assert!(mem.imem().iter().all(|&b| b == 0));
}

#[test]
fn test_oversized_image_is_rejected() {
    let mut mem = SpMemory::new();
    let temp_file = create_temp_binary(&vec![0u8; 0x1001]);
    let err = loader::load_image(&mut mem, Region::Imem, temp_file.path()).unwrap_err();
    assert!(matches!(
        err,
        LoadError::ImageTooLarge {
            region: Region::Imem,
            len: 0x1001,
            ..
        }
    ));
}

#[test]
fn test_processor_from_config_loads_images() {
    let ucode = create_temp_binary(&[0x24, 0x01, 0x00, 0x2A]); // addiu $1, $0, 42
    let data = create_temp_binary(&[0xDE, 0xAD]);

    let config = Config {
        memory: MemoryConfig {
            imem_image: Some(ucode.path().to_path_buf()),
            dmem_image: Some(data.path().to_path_buf()),
        },
        ..Config::default()
    };

    let mut rsp = Rsp::from_config(&config).unwrap();
    assert_eq!(&rsp.mem.dmem()[..2], &[0xDE, 0xAD]);

    rsp.write_status(rspsim_core::core::arch::cp0::CLR_HALT);
    let _ = rsp.run(5);
    assert_eq!(rsp.regs.read(1), 42);
}

#[test]
fn test_processor_from_config_reports_missing_image() {
    let config = Config {
        memory: MemoryConfig {
            imem_image: Some("/nonexistent/ucode.bin".into()),
            dmem_image: None,
        },
        ..Config::default()
    };
    let err = Rsp::from_config(&config).unwrap_err();
    assert!(matches!(err, ConfigError::Load(LoadError::Io { .. })));
}
