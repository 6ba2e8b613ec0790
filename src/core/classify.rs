//! File type classification.
//!
//! The single source of truth for mapping a MIME string or filename to a
//! canonical [`TypeTag`]. Every filter goes through these functions so the
//! same document classifies identically everywhere.

use crate::models::{Document, TypeTag};

/// Image extensions recognized by the string classifier.
const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".webp"];

/// Classify a MIME type string by substring inspection.
///
/// Priority order matters: Office MIME types all contain "officedocument",
/// so presentation and sheet must be checked before word/document.
/// Unrecognized input is returned verbatim.
pub fn classify_mime(mime: &str) -> TypeTag {
    let lower = mime.to_lowercase();
    if lower.contains("pdf") {
        TypeTag::Pdf
    } else if lower.contains("presentation") {
        TypeTag::Pptx
    } else if lower.contains("sheet") {
        TypeTag::Xlsx
    } else if lower.contains("word") || lower.contains("document") {
        TypeTag::Docx
    } else {
        TypeTag::Other(mime.to_string())
    }
}

/// Classify a string that may be a filename or a MIME type.
///
/// Extension suffixes are checked first (case-insensitively); when no
/// suffix matches, the input is treated as a MIME string with the same
/// priority order as [`classify_mime`]. Anything still unrecognized is
/// returned upper-cased.
pub fn classify(input: &str) -> TypeTag {
    let lower = input.to_lowercase();

    if lower.ends_with(".pdf") {
        return TypeTag::Pdf;
    }
    if lower.ends_with(".docx") || lower.ends_with(".doc") {
        return TypeTag::Docx;
    }
    if lower.ends_with(".pptx") || lower.ends_with(".ppt") {
        return TypeTag::Pptx;
    }
    if lower.ends_with(".xlsx") || lower.ends_with(".xls") {
        return TypeTag::Xlsx;
    }
    if lower.ends_with(".txt") {
        return TypeTag::Txt;
    }
    if IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        return TypeTag::Image;
    }

    if lower.contains("pdf") {
        TypeTag::Pdf
    } else if lower.contains("presentation") {
        TypeTag::Pptx
    } else if lower.contains("sheet") {
        TypeTag::Xlsx
    } else if lower.contains("word") || lower.contains("document") {
        TypeTag::Docx
    } else {
        TypeTag::Other(input.to_uppercase())
    }
}

/// Classify a document, checking `file_type` first and falling back to
/// `original_name` when the server recorded no type.
pub fn document_tag(doc: &Document) -> TypeTag {
    if doc.file_type.trim().is_empty() {
        classify(&doc.original_name)
    } else {
        classify(&doc.file_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_classification() {
        assert_eq!(classify_mime("application/pdf"), TypeTag::Pdf);
        assert_eq!(classify_mime("application/msword"), TypeTag::Docx);
        assert_eq!(
            classify_mime("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
            TypeTag::Docx
        );
    }

    #[test]
    fn test_office_mime_priority() {
        // The presentation MIME type contains "officedocument"; it must
        // classify as PPTX, not DOCX.
        assert_eq!(
            classify_mime(
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            ),
            TypeTag::Pptx
        );
        assert_eq!(
            classify_mime("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
            TypeTag::Xlsx
        );
    }

    #[test]
    fn test_extension_classification() {
        assert_eq!(classify("notes.txt"), TypeTag::Txt);
        assert_eq!(classify("Slides.PPTX"), TypeTag::Pptx);
        assert_eq!(classify("thesis.docx"), TypeTag::Docx);
        assert_eq!(classify("budget.xls"), TypeTag::Xlsx);
        assert_eq!(classify("photo.JPEG"), TypeTag::Image);
    }

    #[test]
    fn test_string_falls_back_to_mime_matching() {
        assert_eq!(classify("application/pdf"), TypeTag::Pdf);
        assert_eq!(
            classify("application/vnd.openxmlformats-officedocument.presentationml.presentation"),
            TypeTag::Pptx
        );
    }

    #[test]
    fn test_unrecognized_input_is_upper_cased() {
        assert_eq!(
            classify("archive.zip"),
            TypeTag::Other("ARCHIVE.ZIP".to_string())
        );
    }

    #[test]
    fn test_determinism() {
        let input = "application/vnd.openxmlformats-officedocument.presentationml.presentation";
        assert_eq!(classify(input), classify(input));
        assert_eq!(classify_mime(input), classify_mime(input));
    }
}
