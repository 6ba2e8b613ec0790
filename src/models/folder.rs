//! Folder domain type.
//!
//! Folders form a flat namespace: a folder's children are exactly the
//! documents whose `folder_id` equals the folder's id.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A folder as known to the remote document service.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Folder {
    /// Server-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Optional description text.
    #[serde(default)]
    pub description: Option<String>,
    /// Creation timestamp (absent on some legacy records).
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Soft-deletion timestamp, if trashed.
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Folder {
    /// Whether this folder has been soft-deleted.
    pub fn is_trashed(&self) -> bool {
        self.deleted_at.is_some()
    }
}
