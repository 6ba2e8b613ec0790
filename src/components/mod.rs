//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`shell`] - Sidebar shell and header
//! - [`documents`] - Documents and folders view
//! - [`trash`] - Trash view
//! - [`calendar`] - Calendar view
//! - [`dashboard`] - Dashboard view
//! - [`charts`] - Statistics view
//! - [`icons`] - Centralized icon definitions

pub mod calendar;
pub mod charts;
pub mod dashboard;
pub mod documents;
pub mod icons;
pub mod router;
pub mod shell;
pub mod trash;

pub use router::AppRouter;
