//! Trash entries: the union of soft-deleted documents and folders.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Document, Folder};

/// Discriminator used to dispatch restore and purge calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrashKind {
    Document,
    Folder,
}

/// One row in the trash view.
///
/// Carries just enough to render and to dispatch to the right endpoint;
/// the full record lives on the server until restore or purge.
#[derive(Clone, Debug, PartialEq)]
pub struct TrashEntry {
    pub id: i64,
    pub kind: TrashKind,
    /// Display name (folder name or document original name).
    pub name: String,
    /// Size in bytes; folders render a placeholder.
    pub size: Option<u64>,
    /// When the entry was soft-deleted.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl TrashEntry {
    pub fn from_document(doc: Document) -> Self {
        Self {
            id: doc.id,
            kind: TrashKind::Document,
            name: doc.original_name,
            size: Some(doc.file_size),
            deleted_at: doc.deleted_at,
        }
    }

    pub fn from_folder(folder: Folder) -> Self {
        Self {
            id: folder.id,
            kind: TrashKind::Folder,
            name: folder.name,
            size: None,
            deleted_at: folder.deleted_at,
        }
    }

    /// Case-insensitive substring match against the display name.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Identifier sent to the batch permanent-delete endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct PurgeItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TrashKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> TrashEntry {
        TrashEntry {
            id: 1,
            kind: TrashKind::Document,
            name: name.to_string(),
            size: Some(10),
            deleted_at: None,
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let e = entry("Quarterly Report.pdf");
        assert!(e.matches("quarterly"));
        assert!(e.matches("REPORT"));
        assert!(e.matches(""));
        assert!(!e.matches("budget"));
    }

    #[test]
    fn test_purge_item_wire_format() {
        let json = serde_json::to_string(&PurgeItem {
            id: 42,
            kind: TrashKind::Folder,
        })
        .expect("serializes");
        assert_eq!(json, r#"{"id":42,"type":"folder"}"#);
    }
}
