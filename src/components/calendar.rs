//! Calendar view: month grid, today's events, and the event form.

use chrono::{NaiveDate, NaiveTime};
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::icons as ic;
use crate::app::AppContext;
use crate::core::calendar::WEEKDAYS;
use crate::models::{CalendarEvent, EventDraft};
use crate::utils::format::format_time;

/// Parse the form's date and time fields into a UTC timestamp.
fn parse_stamp(date: &str, time: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time, "%H:%M").ok()?;
    Some(date.and_time(time).and_utc())
}

#[component]
pub fn CalendarView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let calendar = ctx.calendar.clone();

    {
        let calendar = calendar.clone();
        spawn_local(async move {
            calendar.fetch_events().await;
        });
    }

    let error = calendar.error;
    let month_title = {
        let calendar = calendar.clone();
        move || calendar.month_title()
    };
    let days = {
        let calendar = calendar.clone();
        move || calendar.month_days()
    };
    let todays = {
        let calendar = calendar.clone();
        move || calendar.todays_events()
    };

    // Event form state; `editing` holds the id when updating.
    let editing: RwSignal<Option<i64>> = RwSignal::new(None);
    let title = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let start_time = RwSignal::new(String::new());
    let end_time = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let event_type = RwSignal::new(String::new());

    let clear_form = move || {
        editing.set(None);
        title.set(String::new());
        date.set(String::new());
        start_time.set(String::new());
        end_time.set(String::new());
        location.set(String::new());
        event_type.set(String::new());
    };

    let load_into_form = move |event: &CalendarEvent| {
        editing.set(Some(event.id));
        title.set(event.title.clone());
        date.set(event.start.format("%Y-%m-%d").to_string());
        start_time.set(event.start.format("%H:%M").to_string());
        end_time.set(event.end.format("%H:%M").to_string());
        location.set(event.location.clone().unwrap_or_default());
        event_type.set(event.event_type.clone().unwrap_or_default());
    };

    let on_submit = {
        let calendar = calendar.clone();
        move |_| {
            let event_title = title.get_untracked();
            if event_title.trim().is_empty() {
                calendar.error.set(Some("Please enter an event title".to_string()));
                return;
            }
            let day = date.get_untracked();
            let (Some(start), Some(end)) = (
                parse_stamp(&day, &start_time.get_untracked()),
                parse_stamp(&day, &end_time.get_untracked()),
            ) else {
                calendar.error.set(Some("Please pick a date and valid times".to_string()));
                return;
            };
            if end <= start {
                calendar.error.set(Some("The event must end after it starts".to_string()));
                return;
            }

            let some_unless_empty = |value: String| {
                let trimmed = value.trim().to_string();
                (!trimmed.is_empty()).then_some(trimmed)
            };
            let draft = EventDraft {
                title: event_title,
                start_time: start,
                end_time: end,
                location: some_unless_empty(location.get_untracked()),
                description: None,
                event_type: some_unless_empty(event_type.get_untracked()),
            };

            let target = editing.get_untracked();
            clear_form();
            let calendar = calendar.clone();
            spawn_local(async move {
                match target {
                    Some(id) => calendar.update_event(id, &draft).await,
                    None => calendar.create_event(&draft).await,
                }
            });
        }
    };

    let event_item = {
        let calendar = calendar.clone();
        move |event: CalendarEvent| {
            let delete = {
                let calendar = calendar.clone();
                let id = event.id;
                move |_| {
                    let calendar = calendar.clone();
                    spawn_local(async move {
                        calendar.delete_event(id).await;
                    });
                }
            };
            let edit = {
                let event = event.clone();
                move |_| load_into_form(&event)
            };
            let description = event.description.clone().unwrap_or_default();
            view! {
                <div class="event" title=description>
                    <span class="event-time">{format_time(event.start)}</span>
                    <span class="event-title">{event.title.clone()}</span>
                    <span class="event-type">{event.kind_label().to_string()}</span>
                    <button title="Edit" on:click=edit><Icon icon=ic::DOCUMENT /></button>
                    <button title="Delete" on:click=delete><Icon icon=ic::CLOSE /></button>
                </div>
            }
        }
    };

    let prev = {
        let calendar = calendar.clone();
        move |_| calendar.previous_month()
    };
    let next = {
        let calendar = calendar.clone();
        move |_| calendar.next_month()
    };
    let select = {
        let calendar = calendar.clone();
        move |day: NaiveDate| calendar.select_date(day)
    };

    view! {
        <div class="calendar">
            <div class="toolbar">
                <button on:click=prev><Icon icon=ic::CHEVRON_LEFT /></button>
                <h2>{month_title}</h2>
                <button on:click=next><Icon icon=ic::CHEVRON_RIGHT /></button>
            </div>

            {move || error.get().map(|message| view! { <div class="error">{message}</div> })}

            <div class="grid">
                {WEEKDAYS
                    .iter()
                    .map(|day| view! { <span class="weekday">{*day}</span> })
                    .collect_view()}
                <For
                    each=days
                    key=|day| day.date
                    children=move |day| {
                        let date = day.date;
                        let select = select.clone();
                        view! {
                            <button
                                class="day"
                                class=("other-month", !day.in_month)
                                class:today=day.is_today
                                on:click=move |_| select(date)
                            >
                                <span class="day-number">{day.day}</span>
                                {(!day.events.is_empty())
                                    .then(|| view! {
                                        <span class="day-events">{day.events.len()}</span>
                                    })}
                            </button>
                        }
                    }
                />
            </div>

            <section class="today-events">
                <h3>"Today"</h3>
                <For each=todays key=|event| event.id children=event_item />
            </section>

            <section class="event-form">
                <h3>{move || if editing.get().is_some() { "Edit event" } else { "New event" }}</h3>
                <input
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || date.get()
                    on:input=move |ev| date.set(event_target_value(&ev))
                />
                <input
                    type="time"
                    prop:value=move || start_time.get()
                    on:input=move |ev| start_time.set(event_target_value(&ev))
                />
                <input
                    type="time"
                    prop:value=move || end_time.get()
                    on:input=move |ev| end_time.set(event_target_value(&ev))
                />
                <input
                    placeholder="Location (optional)"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
                <input
                    placeholder="Type (meeting, deadline, ...)"
                    prop:value=move || event_type.get()
                    on:input=move |ev| event_type.set(event_target_value(&ev))
                />
                <div class="form-actions">
                    <button on:click=on_submit.clone()>
                        <Icon icon=ic::PLUS />
                        {move || if editing.get().is_some() { "Save" } else { "Add event" }}
                    </button>
                    <Show when=move || editing.get().is_some()>
                        <button on:click=move |_| clear_form()>"Cancel"</button>
                    </Show>
                </div>
            </section>
        </div>
    }
}
