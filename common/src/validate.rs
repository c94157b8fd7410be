//! Local validation of a file selection

use crate::error::SelectError;
use crate::types::SelectedFile;

/// Maximum accepted upload size: 10 MiB.
pub const MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Checks a candidate selection before any state is replaced.
///
/// Order matters for the surfaced message: type first, then size.
pub fn validate_selection(file: &SelectedFile) -> Result<(), SelectError> {
    if !file.mime_type.starts_with("image/") {
        return Err(SelectError::NotAnImage);
    }
    if file.size > MAX_FILE_BYTES {
        return Err(SelectError::TooLarge);
    }
    Ok(())
}
