//! REST client for the remote document, calendar, and user services.
//!
//! Paths are fixed by the backend contract and must be preserved for
//! compatibility. Each module mirrors one service surface:
//! - [`documents`] - Document CRUD, upload/download, trash listing
//! - [`folders`] - Folder CRUD and trash listing
//! - [`trash`] - Batch permanent purge
//! - [`events`] - Calendar event CRUD
//! - [`users`] - Profile of the signed-in user

use serde::Deserialize;

pub mod documents;
pub mod events;
pub mod folders;
mod http;
pub mod trash;
pub mod users;

/// Standard `{ total, items }` list envelope used by the backend.
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    /// Total count for pagination; the views consume `items` whole.
    #[allow(dead_code)]
    #[serde(default)]
    pub total: u64,
    pub items: Vec<T>,
}
