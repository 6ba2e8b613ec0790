//! Document domain type and its lifecycle state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Canonical document lifecycle state.
///
/// The wire format carries several drifted spellings of the same state
/// (`"completed"`/`"processed"` for ready, `"removed"` plus a redundant
/// `is_deleted` flag for trashed). They are consolidated here at the
/// deserialization boundary; nothing downstream inspects raw flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DocumentStatus {
    /// Stored on the server, not yet processed.
    #[default]
    Uploaded,
    /// Processed and ready for use.
    Ready,
    /// Soft-deleted (visible only in trash views).
    Deleted,
}

impl DocumentStatus {
    /// Consolidate the wire status string and legacy `is_deleted` flag.
    ///
    /// `is_deleted` wins over any status string: a record flagged as
    /// deleted is trashed no matter what its status claims.
    fn from_wire(status: &str, is_deleted: bool) -> Self {
        if is_deleted {
            return Self::Deleted;
        }
        match status {
            "ready" | "completed" | "processed" => Self::Ready,
            "deleted" | "removed" => Self::Deleted,
            _ => Self::Uploaded,
        }
    }
}

/// A document as known to the remote document service.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    /// Server-assigned identifier.
    pub id: i64,
    /// Storage name on the server.
    pub filename: String,
    /// Display name as uploaded by the user.
    pub original_name: String,
    /// MIME type or extension string reported by the server.
    pub file_type: String,
    /// Size in bytes.
    pub file_size: u64,
    /// Consolidated lifecycle state.
    pub status: DocumentStatus,
    /// Containing folder, if any. Dangling references are tolerated by
    /// treating the document as unfoldered.
    pub folder_id: Option<i64>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Soft-deletion timestamp, if trashed.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Document {
    /// Whether this document belongs in non-trash views.
    ///
    /// The single trash-exclusion predicate used by every projection.
    pub fn is_active(&self) -> bool {
        self.status != DocumentStatus::Deleted
    }

    /// Name used for client-side save actions.
    ///
    /// Falls back to the storage name when the display name is absent.
    pub fn download_name(&self) -> &str {
        if self.original_name.is_empty() {
            &self.filename
        } else {
            &self.original_name
        }
    }

    /// Force the lifecycle state to trashed.
    ///
    /// Used when merging trash listings whose records predate the
    /// consolidated status field.
    pub fn mark_deleted(mut self) -> Self {
        self.status = DocumentStatus::Deleted;
        self
    }
}

/// Wire representation, kept private to the deserializer.
#[derive(Deserialize)]
struct DocumentWire {
    id: i64,
    #[serde(default)]
    filename: String,
    original_name: String,
    #[serde(default)]
    file_type: String,
    #[serde(default)]
    file_size: u64,
    #[serde(default)]
    status: String,
    #[serde(default)]
    is_deleted: bool,
    #[serde(default)]
    folder_id: Option<i64>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    deleted_at: Option<DateTime<Utc>>,
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = DocumentWire::deserialize(deserializer)?;
        Ok(Document {
            id: wire.id,
            filename: wire.filename,
            original_name: wire.original_name,
            file_type: wire.file_type,
            file_size: wire.file_size,
            status: DocumentStatus::from_wire(&wire.status, wire.is_deleted),
            folder_id: wire.folder_id,
            created_at: wire.created_at,
            deleted_at: wire.deleted_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Document {
        serde_json::from_str(json).expect("document should deserialize")
    }

    #[test]
    fn test_status_consolidation() {
        assert_eq!(DocumentStatus::from_wire("uploaded", false), DocumentStatus::Uploaded);
        assert_eq!(DocumentStatus::from_wire("ready", false), DocumentStatus::Ready);
        assert_eq!(DocumentStatus::from_wire("completed", false), DocumentStatus::Ready);
        assert_eq!(DocumentStatus::from_wire("processed", false), DocumentStatus::Ready);
        assert_eq!(DocumentStatus::from_wire("deleted", false), DocumentStatus::Deleted);
        assert_eq!(DocumentStatus::from_wire("removed", false), DocumentStatus::Deleted);
    }

    #[test]
    fn test_is_deleted_flag_wins() {
        // Legacy records carry is_deleted without a deleted status string.
        assert_eq!(DocumentStatus::from_wire("ready", true), DocumentStatus::Deleted);
        assert_eq!(DocumentStatus::from_wire("uploaded", true), DocumentStatus::Deleted);
    }

    #[test]
    fn test_deserialize_active_document() {
        let doc = parse(
            r#"{
                "id": 7,
                "filename": "abc123.pdf",
                "original_name": "report.pdf",
                "file_type": "application/pdf",
                "file_size": 512,
                "status": "uploaded",
                "is_deleted": false,
                "folder_id": null,
                "created_at": "2026-01-05T10:30:00Z"
            }"#,
        );
        assert!(doc.is_active());
        assert_eq!(doc.download_name(), "report.pdf");
        assert_eq!(doc.folder_id, None);
    }

    #[test]
    fn test_deserialize_legacy_trashed_document() {
        let doc = parse(
            r#"{
                "id": 8,
                "original_name": "old.docx",
                "status": "ready",
                "is_deleted": true,
                "created_at": "2026-01-05T10:30:00Z",
                "deleted_at": "2026-02-01T00:00:00Z"
            }"#,
        );
        assert!(!doc.is_active());
        assert_eq!(doc.status, DocumentStatus::Deleted);
    }

    #[test]
    fn test_download_name_falls_back_to_filename() {
        let doc = parse(
            r#"{
                "id": 9,
                "filename": "stored-9.bin",
                "original_name": "",
                "created_at": "2026-01-05T10:30:00Z"
            }"#,
        );
        assert_eq!(doc.download_name(), "stored-9.bin");
    }
}
