//! Main shell component.
//!
//! Sidebar navigation plus the routed main view. The shell itself never
//! re-renders on navigation; only the content area switches.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::calendar::CalendarView;
use super::charts::ChartsView;
use super::dashboard::DashboardView;
use super::documents::DocumentsView;
use super::icons as ic;
use super::router::RouteContext;
use super::trash::TrashView;
use crate::app::AppContext;
use crate::config;
use crate::models::AppRoute;

/// One sidebar navigation entry.
struct NavItem {
    label: &'static str,
    icon: icondata::Icon,
    route: AppRoute,
}

const NAV_TOP: [NavItem; 4] = [
    NavItem { label: "Home", icon: ic::HOME, route: AppRoute::Dashboard },
    NavItem { label: "Document", icon: ic::DOCUMENT, route: AppRoute::Documents },
    NavItem { label: "Calendar", icon: ic::CALENDAR, route: AppRoute::Calendar },
    NavItem { label: "Statistical", icon: ic::CHART, route: AppRoute::Charts },
];

const NAV_BOTTOM: [NavItem; 1] = [NavItem {
    label: "Trash",
    icon: ic::TRASH,
    route: AppRoute::Trash,
}];

#[component]
fn NavLink(label: &'static str, icon: icondata::Icon, route: AppRoute) -> impl IntoView {
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");
    let is_active = move || route_ctx.0.get() == route;

    view! {
        <button
            class="nav-item"
            class:active=is_active
            on:click=move |_| route.push()
        >
            <Icon icon=icon />
            <span>{label}</span>
        </button>
    }
}

/// Main shell: sidebar, header, and the routed content area.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    // Load the user profile once for the header.
    {
        let ctx = ctx.clone();
        spawn_local(async move {
            ctx.load_profile().await;
        });
    }

    let session = ctx.session;
    let username = move || session.get().display_name();
    let notifications = ctx.dashboard.notification_count;
    let sign_out_ctx = ctx.clone();

    view! {
        <div class="shell">
            <aside class="sidebar">
                <div class="brand">{config::APP_NAME}</div>
                <nav class="nav-top">
                    {NAV_TOP
                        .iter()
                        .map(|item| view! {
                            <NavLink label=item.label icon=item.icon route=item.route />
                        })
                        .collect_view()}
                </nav>
                <nav class="nav-bottom">
                    {NAV_BOTTOM
                        .iter()
                        .map(|item| view! {
                            <NavLink label=item.label icon=item.icon route=item.route />
                        })
                        .collect_view()}
                    <button class="nav-item" on:click=move |_| sign_out_ctx.sign_out()>
                        <Icon icon=ic::LOGOUT />
                        <span>"Logout"</span>
                    </button>
                </nav>
                <div class="version">{format!("v{}", config::APP_VERSION)}</div>
            </aside>

            <div class="main">
                <header class="topbar">
                    <span class="notifications">
                        <Icon icon=ic::BELL />
                        <span class="badge">{move || notifications.get()}</span>
                    </span>
                    <span class="user" class=("signed-in", move || session.get().is_signed_in())>
                        <Icon icon=ic::USER />
                        {username}
                    </span>
                </header>
                <main class="content">
                    {move || match route_ctx.0.get() {
                        AppRoute::Dashboard => view! { <DashboardView /> }.into_any(),
                        AppRoute::Documents => view! { <DocumentsView /> }.into_any(),
                        AppRoute::Trash => view! { <TrashView /> }.into_any(),
                        AppRoute::Calendar => view! { <CalendarView /> }.into_any(),
                        AppRoute::Charts => view! { <ChartsView /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
