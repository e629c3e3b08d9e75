//! File attachments and the checks run on them before upload

use std::path::Path;

use tracing::debug;

use crate::utils::errors::{AttachmentError, Result};

/// Upload limit shared by every form that carries a file
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// MIME types accepted for partnership documents
pub const DOCUMENT_TYPES: &[&str] = &[
    "application/pdf",
    "image/jpeg",
    "image/png",
    "image/jpg",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// MIME types accepted for gallery images
pub const IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/jpg", "image/webp"];

/// A file picked by the user, held in memory until it is sent
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, guessing its MIME type from the extension.
    ///
    /// The size limit is enforced from file metadata before the content is
    /// read, so oversized files never get loaded.
    pub async fn from_path(path: impl AsRef<Path>, max_bytes: u64) -> Result<Self> {
        let path = path.as_ref();
        let size = tokio::fs::metadata(path).await?.len();
        if size > max_bytes {
            return Err(too_large(size, max_bytes).into());
        }

        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let content_type = guess_content_type(&file_name).to_string();
        debug!(file_name = %file_name, content_type = %content_type, size = size, "Attachment loaded");

        Ok(Self { file_name, content_type, bytes })
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Size and type restrictions for one kind of upload
#[derive(Debug, Clone, Copy)]
pub struct AttachmentPolicy {
    pub max_bytes: u64,
    pub allowed_types: &'static [&'static str],
    pub type_hint: &'static str,
}

impl AttachmentPolicy {
    pub const fn documents(max_bytes: u64) -> Self {
        Self {
            max_bytes,
            allowed_types: DOCUMENT_TYPES,
            type_hint: "Please upload PDF, Word document, or image files only",
        }
    }

    pub const fn images(max_bytes: u64) -> Self {
        Self {
            max_bytes,
            allowed_types: IMAGE_TYPES,
            type_hint: "Please upload only image files (JPEG, PNG, WebP)",
        }
    }

    /// Size first, then type
    pub fn check(&self, attachment: &Attachment) -> std::result::Result<(), AttachmentError> {
        if attachment.size() > self.max_bytes {
            return Err(too_large(attachment.size(), self.max_bytes));
        }

        let content_type = attachment.content_type.to_ascii_lowercase();
        if !self.allowed_types.contains(&content_type.as_str()) {
            return Err(AttachmentError::UnsupportedType {
                content_type,
                hint: self.type_hint,
            });
        }

        Ok(())
    }
}

fn too_large(size: u64, limit: u64) -> AttachmentError {
    AttachmentError::TooLarge {
        size,
        limit,
        limit_mb: limit / (1024 * 1024),
    }
}

/// MIME type for the extensions the portal deals with
pub fn guess_content_type(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => "application/pdf",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
