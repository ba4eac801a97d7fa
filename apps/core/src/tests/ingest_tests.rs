//! Ingestion Tests
//!
//! Validation and text extraction over real temporary files: every
//! rejection kind, the encoding fallback chain, and the file-to-analysis
//! path.

use std::fs;
use std::io::Write;

use tempfile::TempDir;

use crate::advisor::{ArchitectureAdvisor, ComplexityTier};
use crate::error::ArchonError;
use crate::ingest::{self, Capability, DocumentFormat, MAX_DOCUMENT_BYTES};

fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).expect("create fixture");
    file.write_all(bytes).expect("write fixture");
    path
}

mod validation_tests {
    use super::*;

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("nope.txt");

        let err = ingest::validate(&path).expect_err("must fail");
        assert_eq!(err.kind(), "not-found");
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = TempDir::new().expect("tempdir");

        let err = ingest::validate(dir.path()).expect_err("must fail");
        assert_eq!(err.kind(), "not-a-file");
    }

    #[test]
    fn test_zero_byte_file_is_empty_kind() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_file(&dir, "empty.txt", b"");

        let err = ingest::validate(&path).expect_err("must fail");
        assert_eq!(err.kind(), "empty");

        // parse() hits the same validation, never a parse attempt.
        let err = ingest::parse(&path).expect_err("must fail");
        assert_eq!(err.kind(), "empty");
    }

    #[test]
    fn test_oversized_file_is_rejected_softly() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("huge.txt");
        let file = fs::File::create(&path).expect("create");
        // Sparse file: size without the disk cost.
        file.set_len(MAX_DOCUMENT_BYTES + 1).expect("set_len");

        let err = ingest::validate(&path).expect_err("must fail");
        assert_eq!(err.kind(), "oversized");
        assert!(err.remediation().contains("smaller"));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_file(&dir, "brief.xyz", b"some text");

        let err = ingest::validate(&path).expect_err("must fail");
        assert_eq!(err.kind(), "unsupported-format");
        assert!(err.to_string().contains(".xyz"));
    }

    #[test]
    fn test_valid_text_file_passes_validation() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_file(&dir, "brief.txt", b"Build a simple FAQ bot");

        assert!(ingest::validate(&path).is_ok());
    }
}

mod parse_tests {
    use super::*;

    #[test]
    fn test_parse_plain_text() {
        let dir = TempDir::new().expect("tempdir");
        let content = "Build a simple FAQ bot\nwith no memory.";
        let path = write_file(&dir, "brief.txt", content.as_bytes());

        let document = ingest::parse(&path).expect("parse");
        assert_eq!(document.format, DocumentFormat::PlainText);
        assert_eq!(document.text, content);
    }

    #[test]
    fn test_parse_markdown_preserves_content() {
        let dir = TempDir::new().expect("tempdir");
        let content = "# Requirements\n\nThe bot **must** respond to FAQs.";
        let path = write_file(&dir, "brief.md", content.as_bytes());

        let document = ingest::parse(&path).expect("parse");
        assert_eq!(document.format, DocumentFormat::Markdown);
        assert!(document.text.contains("**must**"));
    }

    #[test]
    fn test_parse_legacy_encoded_text() {
        let dir = TempDir::new().expect("tempdir");
        // windows-1252 "résumé": 0xE9 is not valid UTF-8
        let bytes = [b'r', 0xE9, b's', b'u', b'm', 0xE9];
        let path = write_file(&dir, "legacy.txt", &bytes);

        let document = ingest::parse(&path).expect("parse");
        assert_eq!(document.text, "résumé");
    }

    #[test]
    fn test_parse_whitespace_only_is_invalid_content() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_file(&dir, "blank.txt", b"  \n\t \n ");

        let err = ingest::parse(&path).expect_err("must fail");
        assert_eq!(err.kind(), "invalid-content");
    }

    #[test]
    fn test_parse_binary_under_text_extension_is_rejected() {
        let dir = TempDir::new().expect("tempdir");
        // PNG magic bytes under a .txt name
        let path = write_file(
            &dir,
            "sneaky.txt",
            &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0],
        );

        let err = ingest::parse(&path).expect_err("must fail");
        assert_eq!(err.kind(), "invalid-content");
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn test_parse_garbage_pdf_is_corrupted() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_file(&dir, "broken.pdf", b"this is not a pdf at all");

        let err = ingest::parse(&path).expect_err("must fail");
        assert!(
            matches!(
                err,
                ArchonError::CorruptedDocument { .. } | ArchonError::ImageOnlyDocument
            ),
            "unexpected error: {err:?}"
        );
    }

    #[cfg(feature = "docx")]
    #[test]
    fn test_parse_garbage_docx_is_corrupted() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_file(&dir, "broken.docx", b"this is not a docx at all");

        let err = ingest::parse(&path).expect_err("must fail");
        assert_eq!(err.kind(), "corrupted");
    }
}

mod capability_tests {
    use super::*;

    #[test]
    fn test_text_formats_always_available() {
        for format in [
            DocumentFormat::PlainText,
            DocumentFormat::Markdown,
            DocumentFormat::ReStructuredText,
        ] {
            assert_eq!(format.capability(), Capability::Available);
        }
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn test_pdf_capability_present_with_feature() {
        assert_eq!(DocumentFormat::Pdf.capability(), Capability::Available);
    }

    #[cfg(not(feature = "pdf"))]
    #[test]
    fn test_pdf_capability_missing_without_feature() {
        match DocumentFormat::Pdf.capability() {
            Capability::Missing { capability, hint } => {
                assert_eq!(capability, "PDF");
                assert!(hint.contains("--features pdf"));
            }
            Capability::Available => panic!("pdf must be unavailable in this build"),
        }
    }
}

mod file_analysis_tests {
    use super::*;

    #[test]
    fn test_analyze_file_end_to_end() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_file(
            &dir,
            "brief.md",
            b"Chatbot that remembers user preferences and conversation history across sessions",
        );

        let advisor = ArchitectureAdvisor::new();
        let rec = advisor.analyze_file(&path).expect("analyze");

        assert!(rec.tier >= ComplexityTier::Contextual);
    }

    #[test]
    fn test_analyze_file_propagates_ingestion_errors() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_file(&dir, "empty.txt", b"");

        let advisor = ArchitectureAdvisor::new();
        let err = advisor.analyze_file(&path).expect_err("must fail");
        assert_eq!(err.kind(), "empty");
    }
}
