//! Document ingestion for brief files.
//! Supports: TXT, MD, RST (direct text), PDF, DOCX.
//!
//! Ingestion is a pure read: validate the path, pull the bytes, extract
//! text. Every failure is a distinct [`ArchonError`] variant so front-ends
//! can print a specific remediation hint.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::ArchonError;

/// Soft cap on ingested document size. Larger briefs should be trimmed by
/// the caller; the cap keeps regex matching latency bounded.
pub const MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Shown in the unsupported-format diagnostic.
const SUPPORTED_EXTENSIONS: &str = ".txt, .md, .markdown, .rst, .pdf, .docx, .doc";

/// Legacy single-byte encodings tried after UTF-8 fails.
static FALLBACK_ENCODINGS: &[&encoding_rs::Encoding] =
    &[encoding_rs::WINDOWS_1252, encoding_rs::ISO_8859_15];

/// Detected document format, derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    PlainText,
    Markdown,
    ReStructuredText,
    Pdf,
    Word,
}

/// Availability of the parser for a given format in this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Available,
    Missing {
        capability: &'static str,
        hint: &'static str,
    },
}

impl DocumentFormat {
    /// Map a lowercased file extension to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "txt" => Some(DocumentFormat::PlainText),
            "md" | "markdown" => Some(DocumentFormat::Markdown),
            "rst" => Some(DocumentFormat::ReStructuredText),
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" | "doc" => Some(DocumentFormat::Word),
            _ => None,
        }
    }

    /// Whether this build carries a parser for the format. Checked before
    /// any parse attempt so a missing optional parser surfaces as a typed
    /// capability error instead of a link failure.
    pub fn capability(self) -> Capability {
        match self {
            DocumentFormat::PlainText
            | DocumentFormat::Markdown
            | DocumentFormat::ReStructuredText => Capability::Available,
            DocumentFormat::Pdf => {
                if cfg!(feature = "pdf") {
                    Capability::Available
                } else {
                    Capability::Missing {
                        capability: "PDF",
                        hint: "rebuild with `--features pdf` to enable PDF parsing",
                    }
                }
            }
            DocumentFormat::Word => {
                if cfg!(feature = "docx") {
                    Capability::Available
                } else {
                    Capability::Missing {
                        capability: "Word document",
                        hint: "rebuild with `--features docx` to enable Word parsing",
                    }
                }
            }
        }
    }
}

/// One ingested document: validated path, detected format, extracted text.
/// Lives only for the duration of one ingestion; never cached.
#[derive(Debug, Clone)]
pub struct DocumentSource {
    pub path: PathBuf,
    pub format: DocumentFormat,
    pub text: String,
}

/// Validate a path before parsing: existence, file-ness, size bounds and
/// extension. Does not read the file content.
pub fn validate(path: &Path) -> Result<(), ArchonError> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(ArchonError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(err) => return Err(ArchonError::Io(err)),
    };

    if !metadata.is_file() {
        return Err(ArchonError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    if metadata.len() == 0 {
        return Err(ArchonError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    if metadata.len() > MAX_DOCUMENT_BYTES {
        return Err(ArchonError::Oversized {
            path: path.to_path_buf(),
            actual_mb: metadata.len() as f64 / (1024.0 * 1024.0),
            limit_mb: MAX_DOCUMENT_BYTES / (1024 * 1024),
        });
    }

    let extension = extension_of(path);
    if DocumentFormat::from_extension(&extension).is_none() {
        return Err(ArchonError::UnsupportedFormat {
            extension,
            supported: SUPPORTED_EXTENSIONS,
        });
    }

    Ok(())
}

/// Validate and parse a document, extracting its text content.
pub fn parse(path: &Path) -> Result<DocumentSource, ArchonError> {
    validate(path)?;

    let extension = extension_of(path);
    // Safe to look up again: validate() rejected unknown extensions.
    let format = match DocumentFormat::from_extension(&extension) {
        Some(format) => format,
        None => {
            return Err(ArchonError::UnsupportedFormat {
                extension,
                supported: SUPPORTED_EXTENSIONS,
            });
        }
    };

    if let Capability::Missing { capability, hint } = format.capability() {
        return Err(ArchonError::MissingCapability { capability, hint });
    }

    info!("Ingesting document: {} (format: {:?})", path.display(), format);
    let bytes = fs::read(path)?;

    let text = match format {
        DocumentFormat::PlainText
        | DocumentFormat::Markdown
        | DocumentFormat::ReStructuredText => decode_text(&bytes)?,
        #[cfg(feature = "pdf")]
        DocumentFormat::Pdf => extract_pdf_text(&bytes)?,
        #[cfg(not(feature = "pdf"))]
        DocumentFormat::Pdf => {
            return Err(ArchonError::MissingCapability {
                capability: "PDF",
                hint: "rebuild with `--features pdf` to enable PDF parsing",
            });
        }
        #[cfg(feature = "docx")]
        DocumentFormat::Word => extract_word_text(&bytes)?,
        #[cfg(not(feature = "docx"))]
        DocumentFormat::Word => {
            return Err(ArchonError::MissingCapability {
                capability: "Word document",
                hint: "rebuild with `--features docx` to enable Word parsing",
            });
        }
    };

    info!("Extraction successful: {} characters", text.len());
    Ok(DocumentSource {
        path: path.to_path_buf(),
        format,
        text,
    })
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default()
}

/// Decode raw bytes as text: UTF-8 first, then the fixed legacy-encoding
/// list. Binary payloads smuggled under a text extension are rejected up
/// front via content sniffing.
fn decode_text(bytes: &[u8]) -> Result<String, ArchonError> {
    if let Some(kind) = infer::get(bytes) {
        warn!("Binary content under a text extension: {}", kind.mime_type());
        return Err(ArchonError::InvalidContent {
            reason: format!("binary content detected ({})", kind.mime_type()),
        });
    }

    let content = match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let mut decoded = None;
            for encoding in FALLBACK_ENCODINGS {
                let (text, _, had_errors) = encoding.decode(bytes);
                if !had_errors {
                    info!("Decoded with fallback encoding: {}", encoding.name());
                    decoded = Some(text.into_owned());
                    break;
                }
            }
            decoded.ok_or(ArchonError::UndecodableEncoding)?
        }
    };

    if content.trim().is_empty() {
        return Err(ArchonError::InvalidContent {
            reason: "file contains only whitespace".to_string(),
        });
    }

    Ok(content)
}

/// Extract text from a PDF. Password-protected and image-only documents are
/// rejected with specific diagnostics rather than returning empty text.
#[cfg(feature = "pdf")]
fn extract_pdf_text(bytes: &[u8]) -> Result<String, ArchonError> {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => {
            let cleaned = clean_extracted_text(&text);
            if cleaned.trim().is_empty() {
                warn!("PDF produced no text; likely image-only pages");
                return Err(ArchonError::ImageOnlyDocument);
            }
            Ok(cleaned)
        }
        Err(err) => {
            let detail = err.to_string();
            warn!("PDF extraction failed: {}", detail);
            if detail.to_lowercase().contains("encrypt") {
                Err(ArchonError::EncryptedDocument)
            } else {
                Err(ArchonError::CorruptedDocument { detail })
            }
        }
    }
}

/// Extract text from a Word document: paragraphs plus table cells, rows
/// joined with a cell delimiter.
#[cfg(feature = "docx")]
fn extract_word_text(bytes: &[u8]) -> Result<String, ArchonError> {
    let docx = docx_rs::read_docx(bytes).map_err(|err| {
        warn!("DOCX extraction failed: {}", err);
        ArchonError::CorruptedDocument {
            detail: err.to_string(),
        }
    })?;

    let mut text_parts: Vec<String> = Vec::new();

    for child in docx.document.children {
        match child {
            docx_rs::DocumentChild::Paragraph(para) => {
                let para_text = paragraph_text(&para);
                if !para_text.trim().is_empty() {
                    text_parts.push(para_text);
                }
            }
            docx_rs::DocumentChild::Table(table) => {
                for table_child in &table.rows {
                    let docx_rs::TableChild::TableRow(row) = table_child;
                    let row_text: Vec<String> = row
                        .cells
                        .iter()
                        .map(|cell_child| {
                            let docx_rs::TableRowChild::TableCell(cell) = cell_child;
                            cell.children
                                .iter()
                                .filter_map(|content| {
                                    if let docx_rs::TableCellContent::Paragraph(p) = content {
                                        Some(paragraph_text(p))
                                    } else {
                                        None
                                    }
                                })
                                .collect::<Vec<_>>()
                                .join(" ")
                        })
                        .filter(|cell_text| !cell_text.trim().is_empty())
                        .collect();
                    if !row_text.is_empty() {
                        text_parts.push(row_text.join(" | "));
                    }
                }
            }
            _ => {}
        }
    }

    let text = clean_extracted_text(&text_parts.join("\n"));
    if text.trim().is_empty() {
        return Err(ArchonError::InvalidContent {
            reason: "Word document contains no extractable text".to_string(),
        });
    }

    Ok(text)
}

#[cfg(feature = "docx")]
fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    para.children
        .iter()
        .filter_map(|pc| {
            if let docx_rs::ParagraphChild::Run(run) = pc {
                Some(
                    run.children
                        .iter()
                        .filter_map(|rc| {
                            if let docx_rs::RunChild::Text(t) = rc {
                                Some(t.text.clone())
                            } else {
                                None
                            }
                        })
                        .collect::<Vec<_>>()
                        .join(""),
                )
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("")
}

/// Clean up extracted text
#[cfg(any(feature = "pdf", feature = "docx"))]
fn clean_extracted_text(text: &str) -> String {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
