//! Application router component.
//!
//! Hash-based routing: the URL hash is the source of truth, and browser
//! back/forward buttons work through native `hashchange` events.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::shell::Shell;
use crate::models::AppRoute;

/// Context for accessing the current route from any component.
#[derive(Clone, Copy)]
pub struct RouteContext(pub RwSignal<AppRoute>);

/// Main application router.
///
/// Routes:
/// - `#/` → Dashboard
/// - `#/documents` → Documents and folders
/// - `#/trash` → Trash
/// - `#/calendar` → Calendar
/// - `#/charts` → Statistics
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    provide_context(RouteContext(route));

    view! { <Shell /> }
}
