//! Upload input: file and content-type selection, with the validation gate

pub mod audio_file;
pub mod content_type;
pub mod request;

pub use audio_file::{AudioFile, MAX_UPLOAD_BYTES, SUPPORTED_EXTENSIONS};
pub use content_type::ContentType;
pub use request::{validate, UploadRequest};
