//! Sono AI Common Library
//!
//! Types and state logic shared between the web front-end and tests:
//! - types: wire types of the analysis service plus file metadata
//! - validate: local checks a selection must pass before replacing state
//! - session: the upload-and-render state machine
//! - display: pure mappings from a result to what the panel shows

pub mod display;
pub mod error;
pub mod session;
pub mod types;
pub mod validate;

pub use error::{SelectError, UploadError};
pub use session::{AnalysisSession, BeginError, Phase, SelectionToken, NO_FILE_MESSAGE};
pub use types::{AnalysisResult, Prediction, SelectedFile};
pub use validate::{validate_selection, MAX_FILE_BYTES};
