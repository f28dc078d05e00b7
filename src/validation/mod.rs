//! Local validation: form drafts and attachment constraints.
//!
//! Everything here runs synchronously, before any collaborator call. A
//! rejection never reaches the remote service.

use crate::error::ValidationError;
use crate::models::{CourrierCreateRequest, SuiviCreateRequest};

/// The only media type the upload endpoint accepts.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// A binary attachment selected for upload, with the metadata needed for
/// local pre-validation.
#[derive(Debug, Clone)]
pub struct Attachment {
    /// Original file name, forwarded in the multipart part
    pub file_name: String,

    /// Declared media type (e.g. "application/pdf")
    pub media_type: String,

    /// File content
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }
}

/// Validate an attachment against the media-type and size constraints.
///
/// A file of exactly `max_bytes` is accepted; one byte more is rejected.
/// The type check runs first, so a non-PDF file of any size fails with
/// `UnsupportedFileType`.
pub fn validate_attachment(
    attachment: &Attachment,
    max_bytes: u64,
) -> Result<(), ValidationError> {
    if attachment.media_type != PDF_MEDIA_TYPE {
        return Err(ValidationError::UnsupportedFileType);
    }
    if attachment.bytes.len() as u64 > max_bytes {
        return Err(ValidationError::FileTooLarge { max_bytes });
    }
    Ok(())
}

fn require_min(
    value: &str,
    field: &'static str,
    min: usize,
) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }
    if trimmed.chars().count() < min {
        return Err(ValidationError::TooShort { field, min });
    }
    Ok(())
}

/// Validate a courrier form draft. Minimum lengths follow the entry form:
/// reference number 3, subject 5, sender and recipient 2.
pub fn validate_courrier_draft(draft: &CourrierCreateRequest) -> Result<(), ValidationError> {
    require_min(&draft.num_courrier, "numCourrier", 3)?;
    require_min(&draft.objet, "objet", 5)?;
    require_min(&draft.expediteur, "expediteur", 2)?;
    require_min(&draft.destinataire, "destinataire", 2)?;
    if draft.date.trim().is_empty() {
        return Err(ValidationError::Required { field: "date" });
    }
    Ok(())
}

/// Validate a suivi form draft: instruction required, minimum 5 characters.
pub fn validate_suivi_draft(draft: &SuiviCreateRequest) -> Result<(), ValidationError> {
    require_min(&draft.instruction, "instruction", 5)?;
    if draft.date.trim().is_empty() {
        return Err(ValidationError::Required { field: "date" });
    }
    Ok(())
}
