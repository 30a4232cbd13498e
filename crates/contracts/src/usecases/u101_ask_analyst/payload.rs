//! Multipart body sent to the analysis webhook.

use super::request::{AnalysisRequest, FileHandle, FileInfo};

/// Multipart field names expected by the automation workflow
pub mod field {
    pub const QUESTION: &str = "question";
    pub const EMAIL: &str = "email";
    pub const FILE: &str = "file";
    pub const FILENAME: &str = "filename";
    pub const MIMETYPE: &str = "mimetype";
    pub const SIZE: &str = "size";
}

#[derive(Debug, Clone)]
pub struct WebhookPayload<F> {
    pub question: String,
    pub email: Option<String>,
    pub file: F,
    pub file_info: FileInfo,
}

/// One multipart field, in sending order
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadPart<'a, F> {
    Text {
        name: &'static str,
        value: String,
    },
    File {
        name: &'static str,
        file: &'a F,
        filename: &'a str,
    },
}

impl<F: FileHandle> WebhookPayload<F> {
    pub fn from_request(request: AnalysisRequest<F>) -> Self {
        let file_info = FileInfo::of(&request.file);
        Self {
            question: request.question,
            email: request.email,
            file: request.file,
            file_info,
        }
    }

    pub fn parts(&self) -> Vec<PayloadPart<'_, F>> {
        let mut parts = vec![PayloadPart::Text {
            name: field::QUESTION,
            value: self.question.clone(),
        }];
        if let Some(email) = &self.email {
            parts.push(PayloadPart::Text {
                name: field::EMAIL,
                value: email.clone(),
            });
        }
        parts.push(PayloadPart::File {
            name: field::FILE,
            file: &self.file,
            filename: &self.file_info.name,
        });
        parts.push(PayloadPart::Text {
            name: field::FILENAME,
            value: self.file_info.name.clone(),
        });
        parts.push(PayloadPart::Text {
            name: field::MIMETYPE,
            value: self.file_info.effective_mime_type().to_string(),
        });
        parts.push(PayloadPart::Text {
            name: field::SIZE,
            value: self.file_info.size.to_string(),
        });
        parts
    }

    /// Value of a text field, if present
    pub fn text_field(&self, name: &str) -> Option<String> {
        self.parts().into_iter().find_map(|part| match part {
            PayloadPart::Text { name: n, value } if n == name => Some(value),
            _ => None,
        })
    }
}
