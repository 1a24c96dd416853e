use std::path::Path;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    #[display("user")]
    User,
    #[display("model")]
    Model,
}

/// A file sent along with a message, base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAttachment {
    pub name: String,
    pub mime_type: String,
    /// Base64 (standard alphabet, padded) payload.
    pub data: String,
}

impl FileAttachment {
    /// Encodes raw file contents, deriving the MIME type from the file name.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statmate_consult::message::FileAttachment;
    /// let attachment = FileAttachment::from_bytes("scores.csv", b"1,2,3");
    /// assert_eq!(attachment.mime_type, "text/csv");
    /// assert_eq!(attachment.data, "MSwyLDM=");
    /// ```
    #[must_use]
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Self {
        let name = name.into();
        let mime_type = mime_type_for(&name).to_owned();
        Self {
            data: STANDARD.encode(bytes),
            name,
            mime_type,
        }
    }

    /// Decodes the payload back to raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.data)
    }

    /// Whether the payload is plain text that can also be shown as a preview.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self.mime_type.as_str(), "text/csv" | "text/plain")
    }
}

/// MIME type guessed from a file extension.
#[must_use]
pub fn mime_type_for(name: &str) -> &'static str {
    let extension = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("csv") => "text/csv",
        Some("txt") => "text/plain",
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// One turn of a consultation conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<FileAttachment>,
}

impl ChatMessage {
    #[must_use]
    pub fn user(text: impl Into<String>, attachments: Vec<FileAttachment>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            timestamp: Utc::now(),
            attachments,
        }
    }

    #[must_use]
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
            timestamp: Utc::now(),
            attachments: vec![],
        }
    }

    /// A message with neither text nor attachments carries nothing to send.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty() && self.attachments.is_empty()
    }
}
