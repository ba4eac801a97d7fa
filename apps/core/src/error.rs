use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Application-wide error type, consolidating all document ingestion failures
/// into a single enum. Classification itself has no failure modes; every
/// variant here originates from reading or decoding a document.
#[derive(Debug, Error)]
pub enum ArchonError {
    /// The given path does not exist.
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// The given path exists but is not a regular file.
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },

    /// The file is zero bytes long.
    #[error("file is empty (0 bytes): {path}")]
    EmptyFile { path: PathBuf },

    /// The file exceeds the ingestion size cap.
    #[error("file is too large ({actual_mb:.1} MB, limit is {limit_mb} MB): {path}")]
    Oversized {
        path: PathBuf,
        actual_mb: f64,
        limit_mb: u64,
    },

    /// The file extension is not one of the supported document formats.
    #[error("unsupported file format `.{extension}` (supported: {supported})")]
    UnsupportedFormat {
        extension: String,
        supported: &'static str,
    },

    /// The file bytes could not be decoded with any of the known encodings.
    #[error("unable to decode file; it may be binary or use an unsupported encoding")]
    UndecodableEncoding,

    /// The file decoded but contains no usable text.
    #[error("file contains no usable text: {reason}")]
    InvalidContent { reason: String },

    /// The PDF is password-protected and cannot be read.
    #[error("PDF is password-protected and cannot be read without the password")]
    EncryptedDocument,

    /// The document yielded no extractable text at all.
    #[error("document contains no extractable text; it appears to be image-only")]
    ImageOnlyDocument,

    /// The document is structurally broken.
    #[error("document is corrupted or malformed: {detail}")]
    CorruptedDocument { detail: String },

    /// A document format whose parser was not compiled into this build.
    #[error("{capability} support is not enabled in this build; {hint}")]
    MissingCapability {
        capability: &'static str,
        hint: &'static str,
    },

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ArchonError {
    /// Stable machine-readable label for the error kind. Automation-oriented
    /// callers branch on this rather than parsing the display message.
    pub fn kind(&self) -> &'static str {
        match self {
            ArchonError::NotFound { .. } => "not-found",
            ArchonError::NotAFile { .. } => "not-a-file",
            ArchonError::EmptyFile { .. } => "empty",
            ArchonError::Oversized { .. } => "oversized",
            ArchonError::UnsupportedFormat { .. } => "unsupported-format",
            ArchonError::UndecodableEncoding => "undecodable-encoding",
            ArchonError::InvalidContent { .. } => "invalid-content",
            ArchonError::EncryptedDocument => "encrypted",
            ArchonError::ImageOnlyDocument => "image-only",
            ArchonError::CorruptedDocument { .. } => "corrupted",
            ArchonError::MissingCapability { .. } => "missing-capability",
            ArchonError::Io(_) => "io",
        }
    }

    /// One-line remediation hint for CLI front-ends to print under the
    /// diagnostic message.
    pub fn remediation(&self) -> &'static str {
        match self {
            ArchonError::NotFound { .. } => "Check the file path and ensure the file exists.",
            ArchonError::NotAFile { .. } => "Point at a document file, not a directory.",
            ArchonError::EmptyFile { .. } => "Add content to the file before analyzing it.",
            ArchonError::Oversized { .. } => {
                "Extract the key sections into a smaller document and retry."
            }
            ArchonError::UnsupportedFormat { .. } => {
                "Convert the document to .txt or .md format first."
            }
            ArchonError::UndecodableEncoding => "Convert the file to UTF-8 first.",
            ArchonError::InvalidContent { .. } => {
                "Ensure the document contains the project brief as plain text."
            }
            ArchonError::EncryptedDocument => "Provide an unencrypted copy of the PDF.",
            ArchonError::ImageOnlyDocument => {
                "Run the document through an OCR tool or convert it to text first."
            }
            ArchonError::CorruptedDocument { .. } => {
                "Re-export the document from its source application and retry."
            }
            ArchonError::MissingCapability { .. } => {
                "Rebuild with the named cargo feature enabled."
            }
            ArchonError::Io(_) => "Check file permissions and disk state, then retry.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels_are_distinct() {
        let errors = vec![
            ArchonError::NotFound {
                path: PathBuf::from("a"),
            },
            ArchonError::EmptyFile {
                path: PathBuf::from("a"),
            },
            ArchonError::EncryptedDocument,
            ArchonError::ImageOnlyDocument,
            ArchonError::UndecodableEncoding,
            ArchonError::MissingCapability {
                capability: "PDF",
                hint: "enable the `pdf` feature",
            },
        ];

        let mut kinds: Vec<&str> = errors.iter().map(|e| e.kind()).collect();
        kinds.sort();
        kinds.dedup();
        assert_eq!(kinds.len(), errors.len(), "kinds must be distinct");
    }

    #[test]
    fn test_every_error_has_a_remediation() {
        let err = ArchonError::Oversized {
            path: PathBuf::from("big.pdf"),
            actual_mb: 42.0,
            limit_mb: 10,
        };
        assert!(!err.remediation().is_empty());
        assert!(err.to_string().contains("42.0 MB"));
    }
}
