//! Dashboard view: welcome line, stat tiles, today's events, and the
//! recent-activity feed.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::icons as ic;
use crate::app::AppContext;
use crate::core::stats::Activity;
use crate::utils::format::format_time;

#[component]
pub fn DashboardView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let dashboard = ctx.dashboard.clone();
    let calendar = ctx.calendar.clone();

    // Events load first so the scheduled-today tile sees them.
    {
        let dashboard = dashboard.clone();
        let calendar = calendar.clone();
        spawn_local(async move {
            calendar.fetch_events().await;
            let events = calendar.events.get_untracked();
            dashboard.fetch_stats(&events).await;
        });
    }

    let session = ctx.session;
    let documents = dashboard.document_count;
    let scheduled = dashboard.scheduled_today;
    let notifications = dashboard.notification_count;
    let activities = dashboard.activities;
    let error = dashboard.error;
    let todays = {
        let calendar = calendar.clone();
        move || calendar.todays_events()
    };

    let activity_item = move |activity: Activity| {
        view! {
            <div class="activity">
                <span class="activity-type">{activity.type_label.clone()}</span>
                <span class="activity-title">{activity.title.clone()}</span>
                <span class="activity-status">{activity.status_label}</span>
                <span class="activity-age">{activity.time_ago.clone()}</span>
            </div>
        }
    };

    view! {
        <div class="dashboard">
            <h2 class="welcome">
                {move || format!("Welcome back, {}", session.get().display_name())}
            </h2>

            {move || error.get().map(|message| view! { <div class="error">{message}</div> })}

            <div class="tiles">
                <div class="tile">
                    <Icon icon=ic::DOCUMENT />
                    <span class="tile-value">{move || documents.get()}</span>
                    <span class="tile-label">"Documents"</span>
                </div>
                <div class="tile">
                    <Icon icon=ic::CALENDAR />
                    <span class="tile-value">{move || scheduled.get()}</span>
                    <span class="tile-label">"Scheduled today"</span>
                </div>
                <div class="tile">
                    <Icon icon=ic::BELL />
                    <span class="tile-value">{move || notifications.get()}</span>
                    <span class="tile-label">"New this week"</span>
                </div>
            </div>

            <section class="today-events">
                <h3>"Today's events"</h3>
                <For
                    each=todays
                    key=|event| event.id
                    children=move |event| {
                        view! {
                            <div class="event">
                                <span class="event-time">{format_time(event.start)}</span>
                                <span class="event-title">{event.title.clone()}</span>
                                <span class="event-type">{event.kind_label().to_string()}</span>
                            </div>
                        }
                    }
                />
            </section>

            <section class="activities">
                <h3>"Recent activity"</h3>
                <For each=move || activities.get() key=|a| a.id children=activity_item />
            </section>
        </div>
    }
}
