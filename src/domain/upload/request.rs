//! Upload request value object and the pre-submission validation gate

use crate::domain::error::ValidationError;

use super::audio_file::{AudioFile, MAX_UPLOAD_BYTES};
use super::content_type::ContentType;

/// Validate a candidate upload before any network call.
///
/// Checks run in order and short-circuit on the first failure:
/// file present, size limit, extension allowlist, non-empty selection.
pub fn validate(
    file: Option<&AudioFile>,
    selected: &[ContentType],
) -> Result<(), ValidationError> {
    let file = file.ok_or(ValidationError::NoFileSelected)?;

    if file.size_bytes() > MAX_UPLOAD_BYTES {
        return Err(ValidationError::FileTooLarge);
    }

    if !file.has_supported_extension() {
        return Err(ValidationError::UnsupportedType);
    }

    if selected.is_empty() {
        return Err(ValidationError::NoContentTypeSelected);
    }

    Ok(())
}

/// A validated upload: the audio file plus the selected content types.
/// Constructed at submit time and consumed by the submission call.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    file: AudioFile,
    content_types: Vec<ContentType>,
}

impl UploadRequest {
    /// Build an upload request, running the validation gate
    pub fn new(file: AudioFile, content_types: Vec<ContentType>) -> Result<Self, ValidationError> {
        validate(Some(&file), &content_types)?;
        Ok(Self {
            file,
            content_types,
        })
    }

    /// Get the audio file
    pub fn file(&self) -> &AudioFile {
        &self.file
    }

    /// Get the selected content types
    pub fn content_types(&self) -> &[ContentType] {
        &self.content_types
    }

    /// Split into the file and the selected content types
    pub fn into_parts(self) -> (AudioFile, Vec<ContentType>) {
        (self.file, self.content_types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mp3(size: usize) -> AudioFile {
        AudioFile::new("episode1.mp3", vec![0u8; size])
    }

    #[test]
    fn valid_upload_passes() {
        // 5 MB mp3 with blog and seo selected
        let file = AudioFile::new("episode1.mp3", vec![0u8; 5 * 1024 * 1024]);
        let selected = [ContentType::Blog, ContentType::Seo];
        assert!(validate(Some(&file), &selected).is_ok());
    }

    #[test]
    fn missing_file_fails_first() {
        let err = validate(None, &[ContentType::Blog]).unwrap_err();
        assert_eq!(err, ValidationError::NoFileSelected);
    }

    #[test]
    fn oversize_fails_regardless_of_extension() {
        let size = (MAX_UPLOAD_BYTES + 1) as usize;
        for name in ["big.mp3", "big.wav", "big.txt", "big"] {
            let file = AudioFile::new(name, vec![0u8; size]);
            let err = validate(Some(&file), &[ContentType::Blog]).unwrap_err();
            assert_eq!(err, ValidationError::FileTooLarge, "file {}", name);
        }
    }

    #[test]
    fn size_at_limit_passes() {
        let file = AudioFile::new("edge.mp3", vec![0u8; MAX_UPLOAD_BYTES as usize]);
        assert!(validate(Some(&file), &[ContentType::Blog]).is_ok());
    }

    #[test]
    fn text_file_is_unsupported() {
        let file = AudioFile::new("episode1.txt", vec![0u8; 1024 * 1024]);
        let err = validate(Some(&file), &[ContentType::Blog]).unwrap_err();
        assert_eq!(err, ValidationError::UnsupportedType);
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        let file = AudioFile::new("EPISODE.OGG", vec![0u8; 10]);
        assert!(validate(Some(&file), &[ContentType::Blog]).is_ok());
    }

    #[test]
    fn empty_selection_fails_even_with_valid_file() {
        let err = validate(Some(&mp3(10)), &[]).unwrap_err();
        assert_eq!(err, ValidationError::NoContentTypeSelected);
    }

    #[test]
    fn size_is_checked_before_extension() {
        let file = AudioFile::new("big.txt", vec![0u8; (MAX_UPLOAD_BYTES + 1) as usize]);
        let err = validate(Some(&file), &[]).unwrap_err();
        assert_eq!(err, ValidationError::FileTooLarge);
    }

    #[test]
    fn request_construction_enforces_gate() {
        let err = UploadRequest::new(mp3(10), vec![]).unwrap_err();
        assert_eq!(err, ValidationError::NoContentTypeSelected);

        let request = UploadRequest::new(mp3(10), vec![ContentType::Faq]).unwrap();
        assert_eq!(request.file().name(), "episode1.mp3");
        assert_eq!(request.content_types(), &[ContentType::Faq]);
    }
}
