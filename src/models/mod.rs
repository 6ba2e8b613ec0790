//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Document`], [`DocumentStatus`], [`Folder`] - Remote document service records
//! - [`TrashEntry`], [`TrashKind`], [`PurgeItem`] - Soft-delete lifecycle
//! - [`CalendarEvent`], [`EventDraft`] - Calendar service records
//! - [`TypeTag`], [`TypeFilter`], [`SortKey`], [`ListingRow`] - Listing view state
//! - [`SessionState`] - Signed-in user state
//! - [`AppRoute`] - Hash-based navigation

mod document;
mod event;
mod folder;
mod listing;
mod route;
mod session;
mod trash;

pub use document::{Document, DocumentStatus};
pub use event::{CalendarEvent, EventDraft};
pub use folder::Folder;
pub use listing::{ListingRow, SortKey, TypeFilter, TypeTag};
pub use route::AppRoute;
pub use session::SessionState;
pub use trash::{PurgeItem, TrashEntry, TrashKind};
