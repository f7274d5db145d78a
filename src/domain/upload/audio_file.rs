//! Audio file value object

/// Maximum accepted upload size (20 MiB), matching the service-side limit.
pub const MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

/// File extensions the service accepts.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a", "ogg"];

/// Value object representing an audio file selected for upload.
/// Contains the original filename and the raw bytes.
#[derive(Debug, Clone)]
pub struct AudioFile {
    name: String,
    data: Vec<u8>,
}

impl AudioFile {
    /// Create an AudioFile from a filename and raw bytes
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Get the original filename
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the raw file data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the raw file data
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }

    /// Get the lowercased filename extension (text after the last `.`), if any
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// Whether the extension is one the service accepts
    pub fn has_supported_extension(&self) -> bool {
        self.extension()
            .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased() {
        let file = AudioFile::new("Episode1.MP3", vec![1, 2, 3]);
        assert_eq!(file.extension(), Some("mp3".to_string()));
    }

    #[test]
    fn extension_uses_last_dot() {
        let file = AudioFile::new("show.episode.1.wav", vec![0]);
        assert_eq!(file.extension(), Some("wav".to_string()));
    }

    #[test]
    fn no_extension() {
        let file = AudioFile::new("episode", vec![0]);
        assert_eq!(file.extension(), None);
        assert!(!file.has_supported_extension());
    }

    #[test]
    fn hidden_file_has_no_extension() {
        let file = AudioFile::new(".mp3", vec![0]);
        assert_eq!(file.extension(), None);
    }

    #[test]
    fn supported_extensions() {
        for ext in SUPPORTED_EXTENSIONS {
            let file = AudioFile::new(format!("episode.{}", ext), vec![0]);
            assert!(file.has_supported_extension(), "{} should be supported", ext);
        }
    }

    #[test]
    fn unsupported_extension() {
        let file = AudioFile::new("episode.txt", vec![0]);
        assert!(!file.has_supported_extension());
    }

    #[test]
    fn size_bytes() {
        let file = AudioFile::new("a.mp3", vec![0u8; 1024]);
        assert_eq!(file.size_bytes(), 1024);
    }

    #[test]
    fn human_readable_size_bytes() {
        let file = AudioFile::new("a.mp3", vec![0u8; 500]);
        assert_eq!(file.human_readable_size(), "500 B");
    }

    #[test]
    fn human_readable_size_kb() {
        let file = AudioFile::new("a.mp3", vec![0u8; 2048]);
        assert_eq!(file.human_readable_size(), "2.0 KB");
    }

    #[test]
    fn human_readable_size_mb() {
        let file = AudioFile::new("a.mp3", vec![0u8; 2 * 1024 * 1024]);
        assert_eq!(file.human_readable_size(), "2.0 MB");
    }
}
