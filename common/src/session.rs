//! Upload-and-render session state
//!
//! Single owner of all transient state of the analysis panel. Every
//! transition of the workflow is a method here, so the orderings that
//! matter (validation before replacement, token-guarded previews, one
//! request in flight) are enforced in one place and testable without a
//! browser.

use crate::error::{SelectError, UploadError};
use crate::types::{AnalysisResult, SelectedFile};
use crate::validate::validate_selection;

/// Message shown when Analyze is triggered with no file selected.
pub const NO_FILE_MESSAGE: &str = "Please select an image first.";

/// Identifies one file selection. Preview decodes carry the token they were
/// started under; completions with a stale token are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionToken(u64);

/// Observable state of the panel. Exactly one phase at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FileSelected,
    Loading,
    Success,
    Error,
}

/// Why an Analyze trigger did not start a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeginError {
    /// A request is already in flight; the trigger is ignored outright.
    InFlight,
    /// Nothing selected; the precondition message has been set.
    NoFile,
}

#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    selected: Option<SelectedFile>,
    preview: Option<String>,
    result: Option<AnalysisResult>,
    loading: bool,
    error: Option<String>,
    token: u64,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores a new selection.
    ///
    /// On rejection the previous selection and its preview stay intact; only
    /// the error message changes. On success any prior result and error are
    /// cleared, the stale preview is dropped, and the returned token marks
    /// the decode that is allowed to fill it.
    pub fn select_file(&mut self, file: SelectedFile) -> Result<SelectionToken, SelectError> {
        if let Err(err) = validate_selection(&file) {
            self.error = Some(err.to_string());
            return Err(err);
        }
        self.selected = Some(file);
        self.preview = None;
        self.result = None;
        self.error = None;
        self.token += 1;
        Ok(SelectionToken(self.token))
    }

    /// Lands a finished preview decode.
    ///
    /// Returns false when the decode belongs to a superseded selection and
    /// was discarded (last writer wins on the preview).
    pub fn apply_preview(&mut self, token: SelectionToken, data_url: String) -> bool {
        if token.0 != self.token || self.selected.is_none() {
            return false;
        }
        self.preview = Some(data_url);
        true
    }

    /// Gate for the Analyze action. The caller may issue the request only on
    /// `Ok`; both error paths perform no network call.
    pub fn begin_analysis(&mut self) -> Result<(), BeginError> {
        if self.loading {
            return Err(BeginError::InFlight);
        }
        if self.selected.is_none() {
            self.error = Some(NO_FILE_MESSAGE.to_string());
            return Err(BeginError::NoFile);
        }
        self.loading = true;
        self.error = None;
        Ok(())
    }

    /// Lands the outcome of the request. Always clears the loading flag; a
    /// failure clears any previously rendered result.
    pub fn finish_analysis(&mut self, outcome: Result<AnalysisResult, UploadError>) {
        self.loading = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(err) => {
                self.result = None;
                self.error = Some(format!("Analysis failed: {}", err));
            }
        }
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.result.is_some() {
            Phase::Success
        } else if self.selected.is_some() {
            Phase::FileSelected
        } else {
            Phase::Idle
        }
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
