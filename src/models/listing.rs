//! View-state types for document listings: type tags, filters, sort keys,
//! and the combined folder+file row.

use std::fmt;

use chrono::{DateTime, Utc};

use super::{Document, Folder};

// =============================================================================
// Type Tags
// =============================================================================

/// Canonical short code derived from a file's MIME type or name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeTag {
    Pdf,
    Docx,
    Pptx,
    Xlsx,
    Txt,
    Image,
    /// Anything the classifier does not recognize, carried verbatim.
    Other(String),
}

impl TypeTag {
    /// Parse a tag label as used by filter chips ("PDF", "DOCX", ...).
    pub fn from_label(label: &str) -> Self {
        match label {
            "PDF" => Self::Pdf,
            "DOCX" => Self::Docx,
            "PPTX" => Self::Pptx,
            "XLSX" => Self::Xlsx,
            "TXT" => Self::Txt,
            "IMAGE" => Self::Image,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdf => write!(f, "PDF"),
            Self::Docx => write!(f, "DOCX"),
            Self::Pptx => write!(f, "PPTX"),
            Self::Xlsx => write!(f, "XLSX"),
            Self::Txt => write!(f, "TXT"),
            Self::Image => write!(f, "IMAGE"),
            Self::Other(s) => write!(f, "{}", s),
        }
    }
}

// =============================================================================
// Filters and Sort Keys
// =============================================================================

/// Active type filter for a listing view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TypeFilter {
    /// No filtering.
    #[default]
    All,
    /// Show folders only (the synthetic "Folder" chip).
    Folders,
    /// Show documents classified to the given tag.
    Tag(TypeTag),
}

impl TypeFilter {
    /// Parse a filter chip value ("all", "Folder", or a tag label).
    pub fn parse(value: &str) -> Self {
        match value {
            "all" => Self::All,
            "Folder" => Self::Folders,
            other => Self::Tag(TypeTag::from_label(other)),
        }
    }
}

/// Sort order for listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Newest first (default).
    #[default]
    Latest,
    /// Oldest first.
    Oldest,
    SizeAsc,
    SizeDesc,
    NameAz,
}

impl SortKey {
    /// Parse a sort selector value. Unknown values fall back to `Latest`
    /// rather than leaving the list unsorted.
    pub fn parse(value: &str) -> Self {
        match value {
            "oldest" => Self::Oldest,
            "size_asc" => Self::SizeAsc,
            "size_desc" => Self::SizeDesc,
            "name_az" => Self::NameAz,
            _ => Self::Latest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Oldest => "oldest",
            Self::SizeAsc => "size_asc",
            Self::SizeDesc => "size_desc",
            Self::NameAz => "name_az",
        }
    }

    /// Reduce to the date-based keys offered inside a folder.
    ///
    /// Size and name sorts only exist in the all-items view; a stale
    /// size/name selection falls back to `Latest` when entering a folder.
    pub fn date_only(self) -> Self {
        match self {
            Self::Oldest => Self::Oldest,
            _ => Self::Latest,
        }
    }
}

// =============================================================================
// Combined Listing Rows
// =============================================================================

/// One row of the unified folder+file listing.
#[derive(Clone, Debug, PartialEq)]
pub enum ListingRow {
    Folder(Folder),
    File(Document),
}

impl ListingRow {
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }

    pub fn id(&self) -> i64 {
        match self {
            Self::Folder(f) => f.id,
            Self::File(d) => d.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Folder(f) => &f.name,
            Self::File(d) => &d.original_name,
        }
    }

    /// Size in bytes; folders have none and render a placeholder.
    pub fn size(&self) -> Option<u64> {
        match self {
            Self::Folder(_) => None,
            Self::File(d) => Some(d.file_size),
        }
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Folder(f) => f.created_at,
            Self::File(d) => Some(d.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_parse_fallback() {
        assert_eq!(SortKey::parse("latest"), SortKey::Latest);
        assert_eq!(SortKey::parse("size_desc"), SortKey::SizeDesc);
        assert_eq!(SortKey::parse("by_color"), SortKey::Latest);
        assert_eq!(SortKey::parse(""), SortKey::Latest);
    }

    #[test]
    fn test_sort_key_date_only() {
        assert_eq!(SortKey::Oldest.date_only(), SortKey::Oldest);
        assert_eq!(SortKey::SizeAsc.date_only(), SortKey::Latest);
        assert_eq!(SortKey::NameAz.date_only(), SortKey::Latest);
    }

    #[test]
    fn test_type_filter_parse() {
        assert_eq!(TypeFilter::parse("all"), TypeFilter::All);
        assert_eq!(TypeFilter::parse("Folder"), TypeFilter::Folders);
        assert_eq!(TypeFilter::parse("PDF"), TypeFilter::Tag(TypeTag::Pdf));
        assert_eq!(
            TypeFilter::parse("ZIP"),
            TypeFilter::Tag(TypeTag::Other("ZIP".to_string()))
        );
    }

    #[test]
    fn test_tag_label_round_trip() {
        for label in ["PDF", "DOCX", "PPTX", "XLSX", "TXT", "IMAGE"] {
            assert_eq!(TypeTag::from_label(label).to_string(), label);
        }
    }
}
