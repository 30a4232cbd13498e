use serde::{Deserialize, Serialize};

use super::submission::SubmitError;

/// MIME type sent when the browser reports none
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Advisory `accept` list for the file picker. Not enforced.
pub const ACCEPTED_EXTENSIONS: &str = ".csv,.xlsx,.xls,.json,.txt,.tsv";

/// A user-chosen file as seen by the form
pub trait FileHandle: Clone {
    fn name(&self) -> String;
    /// MIME type as reported by the platform, possibly empty
    fn mime_type(&self) -> String;
    fn size(&self) -> u64;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

impl FileInfo {
    pub fn of<F: FileHandle>(file: &F) -> Self {
        Self {
            name: file.name(),
            mime_type: file.mime_type(),
            size: file.size(),
        }
    }

    pub fn effective_mime_type(&self) -> &str {
        if self.mime_type.trim().is_empty() {
            DEFAULT_MIME_TYPE
        } else {
            &self.mime_type
        }
    }
}

/// Snapshot of the form fields at submit time
#[derive(Debug, Clone)]
pub struct AnalysisForm<F> {
    pub file: Option<F>,
    pub question: String,
    pub email: String,
}

impl<F> Default for AnalysisForm<F> {
    fn default() -> Self {
        Self {
            file: None,
            question: String::new(),
            email: String::new(),
        }
    }
}

/// Form that passed validation
#[derive(Debug, Clone)]
pub struct AnalysisRequest<F> {
    pub file: F,
    pub question: String,
    /// Present only when the email field is collected
    pub email: Option<String>,
}

impl<F: FileHandle> AnalysisForm<F> {
    pub fn new(file: Option<F>, question: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            file,
            question: question.into(),
            email: email.into(),
        }
    }

    pub fn is_complete(&self, collect_email: bool) -> bool {
        self.file.is_some()
            && !self.question.trim().is_empty()
            && (!collect_email || !self.email.trim().is_empty())
    }

    pub fn validate(&self, collect_email: bool) -> Result<AnalysisRequest<F>, SubmitError> {
        if !self.is_complete(collect_email) {
            return Err(SubmitError::MissingInformation);
        }
        let file = self.file.clone().ok_or(SubmitError::MissingInformation)?;
        Ok(AnalysisRequest {
            file,
            question: self.question.clone(),
            email: collect_email.then(|| self.email.clone()),
        })
    }
}
