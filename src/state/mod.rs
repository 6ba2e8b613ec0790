//! Reactive view-models.
//!
//! Each view-model owns one UI-facing slice of state (a signal-backed
//! list plus its ephemeral view settings) and the operations that mutate
//! it. Lists are exclusively owned: only the owning view-model's methods
//! touch them, from user-triggered or broadcast-triggered callbacks.
//! Cross-view coordination goes through the [`EventBus`](crate::core::EventBus).

mod calendar;
mod charts;
mod dashboard;
mod documents;
mod folders;
mod trash;

pub use calendar::CalendarState;
pub use charts::ChartsState;
pub use dashboard::DashboardState;
pub use documents::DocumentState;
pub use folders::{CreateFolderOutcome, FolderState, MoveOutcome};
pub use trash::TrashState;
