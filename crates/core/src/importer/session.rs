//! State of one operator's import, from file upload to commit.
//!
//! ```text
//! upload --accept_file--> preview --begin_upload--> uploading --complete_upload--> closed
//!                            ^                          |
//!                            +-------fail_upload--------+
//! ```
//!
//! `close` abandons the flow from any step. A flow that is closed while a
//! batch is in flight does not cancel the storage call.

use serde::Serialize;

use super::parser::{parse_pet_csv_bytes, ImportParse};
use super::{is_csv_upload, INVALID_FILE_TYPE_MESSAGE};
use crate::error::CoreError;
use crate::pet::NewPet;
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportStep {
    Upload,
    Preview,
    Uploading,
    Closed,
}

impl ImportStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Preview => "preview",
            Self::Uploading => "uploading",
            Self::Closed => "closed",
        }
    }
}

impl std::fmt::Display for ImportStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One import dialog's worth of state. Records and errors are owned by
/// the flow and never shared with other flows.
#[derive(Debug, Clone)]
pub struct ImportFlow {
    shelter_id: DbId,
    default_location: String,
    step: ImportStep,
    file_name: Option<String>,
    parsed: ImportParse,
    submit_error: Option<String>,
    created: Option<usize>,
    updated_at: Timestamp,
}

/// Serialisable view of a flow for the review screen.
#[derive(Debug, Clone, Serialize)]
pub struct ImportSnapshot {
    pub shelter_id: DbId,
    pub step: ImportStep,
    pub file_name: Option<String>,
    pub default_location: String,
    pub records: Vec<NewPet>,
    pub errors: Vec<String>,
    pub error_count: usize,
    pub submit_error: Option<String>,
    pub can_confirm: bool,
    pub created: Option<usize>,
}

impl ImportFlow {
    pub fn new(shelter_id: DbId, default_location: impl Into<String>) -> Self {
        Self {
            shelter_id,
            default_location: default_location.into(),
            step: ImportStep::Upload,
            file_name: None,
            parsed: ImportParse::default(),
            submit_error: None,
            created: None,
            updated_at: chrono::Utc::now(),
        }
    }

    pub fn shelter_id(&self) -> DbId {
        self.shelter_id
    }

    pub fn default_location(&self) -> &str {
        &self.default_location
    }

    pub fn step(&self) -> ImportStep {
        self.step
    }

    pub fn records(&self) -> &[NewPet] {
        &self.parsed.data
    }

    pub fn errors(&self) -> &[String] {
        &self.parsed.errors
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Take an uploaded file. Non-CSV files are refused without parsing
    /// and leave the flow untouched; CSV files always move the flow to
    /// `preview`, even when they yield no records.
    pub fn accept_file(
        &mut self,
        file_name: &str,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<(), CoreError> {
        if !matches!(self.step, ImportStep::Upload | ImportStep::Preview) {
            return Err(self.wrong_step("accept a file"));
        }
        if !is_csv_upload(file_name, content_type) {
            return Err(CoreError::Validation(INVALID_FILE_TYPE_MESSAGE.to_string()));
        }

        self.parsed = parse_pet_csv_bytes(bytes);
        self.file_name = Some(file_name.to_string());
        self.submit_error = None;
        self.transition(ImportStep::Preview);
        Ok(())
    }

    /// Whether the confirm action is enabled.
    pub fn can_confirm(&self) -> bool {
        self.step == ImportStep::Preview && !self.parsed.data.is_empty()
    }

    /// Move to `uploading` and hand out a copy of the batch to submit.
    pub fn begin_upload(&mut self) -> Result<Vec<NewPet>, CoreError> {
        if self.step != ImportStep::Preview {
            return Err(self.wrong_step("start the upload"));
        }
        if self.parsed.data.is_empty() {
            return Err(CoreError::Conflict(
                "Import has no records to upload".to_string(),
            ));
        }

        self.submit_error = None;
        self.transition(ImportStep::Uploading);
        Ok(self.parsed.data.clone())
    }

    /// Return to `preview` with the failure message shown as a banner.
    /// The parsed records are kept as they were, ready for a retry.
    pub fn fail_upload(&mut self, message: impl Into<String>) {
        if self.step == ImportStep::Uploading {
            self.submit_error = Some(message.into());
            self.transition(ImportStep::Preview);
        }
    }

    /// Finish the flow after the whole batch was stored.
    pub fn complete_upload(&mut self, created: usize) {
        if self.step == ImportStep::Uploading {
            self.created = Some(created);
            self.parsed = ImportParse::default();
            self.transition(ImportStep::Closed);
        }
    }

    /// Abandon the flow.
    pub fn close(&mut self) {
        self.parsed = ImportParse::default();
        self.transition(ImportStep::Closed);
    }

    pub fn snapshot(&self) -> ImportSnapshot {
        ImportSnapshot {
            shelter_id: self.shelter_id,
            step: self.step,
            file_name: self.file_name.clone(),
            default_location: self.default_location.clone(),
            records: self.parsed.data.clone(),
            errors: self.parsed.errors.clone(),
            error_count: self.parsed.errors.len(),
            submit_error: self.submit_error.clone(),
            can_confirm: self.can_confirm(),
            created: self.created,
        }
    }

    fn transition(&mut self, next: ImportStep) {
        self.step = next;
        self.updated_at = chrono::Utc::now();
    }

    fn wrong_step(&self, action: &str) -> CoreError {
        CoreError::Conflict(format!(
            "Cannot {action} while the import is in '{}' step",
            self.step
        ))
    }
}
