//! Device-side I/O
//!
//! Reading and truncating the clippings export on a mounted e-reader.
//! The parsing and digest modules never touch the device themselves;
//! they receive the raw text and produce documents for the caller.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Device I/O errors
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("no clippings export at {}", .0.display())]
    ExportNotFound(PathBuf),

    #[error("clippings export I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Absolute path of the export under the device mount root
pub fn export_path(device_root: &Path, relative: &Path) -> PathBuf {
    device_root.join(relative)
}

/// Read the whole export into memory
pub fn read_export(device_root: &Path, relative: &Path) -> Result<String, DeviceError> {
    let path = export_path(device_root, relative);
    if !path.exists() {
        return Err(DeviceError::ExportNotFound(path));
    }
    Ok(fs::read_to_string(path)?)
}

/// Empty the export so the next run only sees new highlights
pub fn truncate_export(device_root: &Path, relative: &Path) -> Result<(), DeviceError> {
    let path = export_path(device_root, relative);
    fs::write(path, "")?;
    Ok(())
}
