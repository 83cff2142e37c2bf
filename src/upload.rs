use anyhow::{Context, Result};
use std::borrow::Cow;
use std::path::Path;

// @module: Uploaded configuration files

/// A configuration file selected for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    // @field: Display name, not used for validation
    pub name: String,
    // @field: Raw file content
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    // @creates: Upload from a name and raw content
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    // @reads: File from disk, named after its file name
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read upload: {:?}", path))?;

        Ok(Self::new(display_name(path), bytes))
    }

    // @returns: Size in bytes
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    // @returns: Content decoded as UTF-8, invalid sequences replaced
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    // @returns: Size in kilobytes, for display
    pub fn size_kb(&self) -> f64 {
        self.size() as f64 / 1024.0
    }
}

// @returns: File name of a path, or the whole path when it has none
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
