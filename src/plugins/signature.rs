//! File signatures and the built-in signature provider

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::Config;

use super::capability::{Capability, FileSignatureProvider};
use super::Plugin;

/// Byte pattern identifying a file format
///
/// A signature matches when the file's leading bytes equal the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSignature {
    bytes: Vec<u8>,
    extension: String,
    mime_type: String,
}

impl FileSignature {
    /// Create a signature from a byte pattern, file extension, and MIME type
    #[must_use]
    pub fn new(
        bytes: impl Into<Vec<u8>>,
        extension: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            bytes: bytes.into(),
            extension: extension.into(),
            mime_type: mime_type.into(),
        }
    }

    /// The leading byte pattern
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Primary file extension, without a leading dot
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// MIME type of the format
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Whether the given bytes start with this signature
    ///
    /// An empty pattern matches nothing.
    #[must_use]
    pub fn matches(&self, bytes: &[u8]) -> bool {
        !self.bytes.is_empty() && bytes.starts_with(&self.bytes)
    }
}

// Magic numbers of the raster formats the pipeline accepts.
const SIGNATURES: &[(&[u8], &str, &str)] = &[
    (&[0xFF, 0xD8, 0xFF], "jpg", "image/jpeg"),
    (
        &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A],
        "png",
        "image/png",
    ),
    (b"GIF87a", "gif", "image/gif"),
    (b"GIF89a", "gif", "image/gif"),
    (b"BM", "bmp", "image/bmp"),
    (&[0x49, 0x49, 0x2A, 0x00], "tif", "image/tiff"),
    (&[0x4D, 0x4D, 0x00, 0x2A], "tif", "image/tiff"),
    (&[0x00, 0x00, 0x01, 0x00], "ico", "image/x-icon"),
];

/// Built-in signatures for common raster formats
///
/// Installs with no config reads; the signature table is static.
pub struct ImageSignatureProvider;

impl ImageSignatureProvider {
    /// Create the provider
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Identify the format of the given bytes, first match wins
    #[must_use]
    pub fn detect(&self, bytes: &[u8]) -> Option<FileSignature> {
        self.signatures().find(|signature| signature.matches(bytes))
    }
}

impl Default for ImageSignatureProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for ImageSignatureProvider {
    fn id(&self) -> &str {
        "image-signatures"
    }

    fn capabilities(&self) -> &[Capability] {
        &[Capability::Signatures]
    }

    fn install(self: Arc<Self>, config: &Config) -> Arc<dyn Plugin> {
        let _ = config.plugins().add(self.clone());
        self
    }

    fn uninstall(&self, config: &Config) -> bool {
        config.plugins().remove(self.id())
    }

    fn as_signature_provider(self: Arc<Self>) -> Option<Arc<dyn FileSignatureProvider>> {
        Some(self)
    }
}

impl FileSignatureProvider for ImageSignatureProvider {
    fn signatures(&self) -> Box<dyn Iterator<Item = FileSignature> + '_> {
        Box::new(
            SIGNATURES
                .iter()
                .map(|&(bytes, extension, mime_type)| {
                    FileSignature::new(bytes, extension, mime_type)
                }),
        )
    }
}
