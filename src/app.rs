//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::api;
use crate::components::AppRouter;
use crate::core::EventBus;
use crate::models::{AppRoute, SessionState};
use crate::state::{
    CalendarState, ChartsState, DashboardState, DocumentState, FolderState, TrashState,
};
use crate::utils::dom;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// Each view-model owns its own slice of state; the shared [`EventBus`]
/// is the only coupling between them. Cloning the context is cheap:
/// every field is a signal struct or a shared handle.
#[derive(Clone)]
pub struct AppContext {
    /// Cross-view synchronization channel.
    pub bus: EventBus,
    /// Documents view-model.
    pub documents: DocumentState,
    /// Folders view-model.
    pub folders: FolderState,
    /// Trash view-model.
    pub trash: TrashState,
    /// Calendar view-model.
    pub calendar: CalendarState,
    /// Statistics data view-model.
    pub charts: ChartsState,
    /// Dashboard view-model.
    pub dashboard: DashboardState,
    /// Signed-in user state.
    pub session: RwSignal<SessionState>,
}

impl AppContext {
    /// Creates a new application context with default state.
    ///
    /// The bus is created first and handed to every view-model that
    /// publishes or subscribes; nothing relies on ambient dispatch.
    pub fn new() -> Self {
        let bus = EventBus::new();
        Self {
            documents: DocumentState::new(bus.clone()),
            folders: FolderState::new(),
            trash: TrashState::new(bus.clone()),
            calendar: CalendarState::new(bus.clone()),
            charts: ChartsState::new(bus.clone()),
            dashboard: DashboardState::new(),
            session: RwSignal::new(SessionState::default()),
            bus,
        }
    }

    /// Load the signed-in user's profile for the shell header.
    ///
    /// Token handling lives in the HTTP layer; a failure here simply
    /// degrades the session display to signed-out.
    pub async fn load_profile(&self) {
        self.session.set(SessionState::Loading);
        match api::users::me().await {
            Ok(profile) => self.session.set(SessionState::SignedIn {
                username: profile.name,
            }),
            Err(err) => {
                dom::console_warn(&format!("Failed to load user profile: {err}"));
                self.session.set(SessionState::SignedOut);
            }
        }
    }

    /// Clear the session and return to the dashboard.
    pub fn sign_out(&self) {
        self.session.set(SessionState::SignedOut);
        AppRoute::Dashboard.push();
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the main router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class="app-error">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
