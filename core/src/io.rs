use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;

/// Extension given to every converted file.
pub const OUTPUT_EXTENSION: &str = "jpeg";

/// Sibling path the JPEG for `input` is written to: same directory and
/// stem, extension replaced with `.jpeg`.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

/// Read file contents.
pub fn read_file(path: &Path) -> Result<Vec<u8>, ConvertError> {
    fs::read(path).map_err(|e| ConvertError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write file contents, creating or truncating `path`.
///
/// When this call created the file and writing fails part-way, the partial
/// file is removed. A file that already existed is never removed.
pub fn write_file(path: &Path, data: &[u8]) -> Result<(), ConvertError> {
    let write_error = |source| ConvertError::WriteFile {
        path: path.to_path_buf(),
        source,
    };
    let existed = path.symlink_metadata().is_ok();

    let mut file = File::create(path).map_err(write_error)?;
    if let Err(e) = file.write_all(data) {
        drop(file);
        if !existed {
            match fs::remove_file(path) {
                Ok(()) => log::debug!("Removed partial output {}", path.display()),
                Err(rm) => log::warn!("Could not remove partial output {}: {}", path.display(), rm),
            }
        }
        return Err(write_error(e));
    }

    Ok(())
}
