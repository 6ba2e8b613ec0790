//! Trash view: search, restore, permanent delete, and retention labels.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::icons as ic;
use crate::app::AppContext;
use crate::core::retention::RetentionMode;
use crate::models::{TrashEntry, TrashKind};
use crate::utils::format::{format_date, format_size};

#[component]
pub fn TrashView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let trash = ctx.trash.clone();

    {
        let trash = trash.clone();
        spawn_local(async move {
            trash.fetch_trash().await;
        });
    }

    let search = trash.search;
    let entries = {
        let trash = trash.clone();
        move || trash.filtered()
    };
    let error = trash.error;

    let entry_row = {
        let trash = trash.clone();
        move |entry: TrashEntry| {
            let restore = {
                let trash = trash.clone();
                let target = entry.clone();
                move |_| {
                    let trash = trash.clone();
                    let target = target.clone();
                    spawn_local(async move {
                        trash.restore(&target).await;
                    });
                }
            };
            let purge = {
                let trash = trash.clone();
                let target = entry.clone();
                move |_| {
                    let trash = trash.clone();
                    let target = target.clone();
                    spawn_local(async move {
                        trash.hard_delete(&target).await;
                    });
                }
            };

            let icon = match entry.kind {
                TrashKind::Folder => ic::FOLDER,
                TrashKind::Document => ic::FILE,
            };
            let size = entry.size.map(format_size).unwrap_or_else(|| "-".to_string());
            let deleted = entry.deleted_at.map(format_date).unwrap_or_default();
            let remaining = trash.retention_info(&entry, RetentionMode::Remaining);
            let purge_date = trash.retention_info(&entry, RetentionMode::Date);

            view! {
                <div class="row">
                    <span class="row-icon"><Icon icon=icon /></span>
                    <span class="row-name">{entry.name.clone()}</span>
                    <span class="row-size">{size}</span>
                    <span class="row-date">{deleted}</span>
                    <span class="row-retention" title=purge_date>{remaining}</span>
                    <span class="row-actions">
                        <button title="Restore" on:click=restore>
                            <Icon icon=ic::RESTORE />
                        </button>
                        <button title="Delete forever" on:click=purge>
                            <Icon icon=ic::CLOSE />
                        </button>
                    </span>
                </div>
            }
        }
    };

    view! {
        <div class="trash">
            <div class="toolbar">
                <h2>"Trash"</h2>
                <span class="search">
                    <Icon icon=ic::SEARCH />
                    <input
                        placeholder="Search trash"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                </span>
            </div>

            {move || error.get().map(|message| view! { <div class="error">{message}</div> })}

            <section class="listing">
                <div class="listing-header">
                    <span class="row-icon"></span>
                    <span class="row-name">"Name"</span>
                    <span class="row-size">"Size"</span>
                    <span class="row-date">"Deleted"</span>
                    <span class="row-retention">"Auto-delete"</span>
                    <span class="row-actions"></span>
                </div>
                <For
                    each=entries
                    key=|entry| (entry.kind == TrashKind::Folder, entry.id)
                    children=entry_row
                />
            </section>
        </div>
    }
}
