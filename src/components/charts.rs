//! Statistics view: status counts and per-period tables.
//!
//! Chart rendering proper is out of scope; this view presents the
//! prepared numbers and keeps them fresh through the charts view-model.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::core::stats::{Period, PeriodKind};

#[component]
fn PeriodTable(title: &'static str, rows: Signal<Vec<(Period, usize)>>) -> impl IntoView {
    view! {
        <section class="period-table">
            <h3>{title}</h3>
            <For
                each=move || rows.get()
                key=|(period, count)| (period.key.clone(), *count)
                children=|(period, count)| {
                    view! {
                        <div class="period-row">
                            <span class="period-label">{period.label.clone()}</span>
                            <span class="period-count">{count}</span>
                        </div>
                    }
                }
            />
        </section>
    }
}

#[component]
pub fn ChartsView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let charts = ctx.charts.clone();

    {
        let charts = charts.clone();
        spawn_local(async move {
            charts.refresh_data().await;
        });
    }

    let error = charts.error;
    let period_kind = charts.period_kind;
    let counts = {
        let charts = charts.clone();
        Signal::derive(move || charts.status_counts())
    };
    let document_rows = {
        let charts = charts.clone();
        Signal::derive(move || charts.document_buckets())
    };
    let event_rows = {
        let charts = charts.clone();
        Signal::derive(move || charts.event_buckets())
    };

    view! {
        <div class="charts">
            <div class="toolbar">
                <h2>"Statistics"</h2>
                <select on:change=move |ev| {
                    period_kind.set(match event_target_value(&ev).as_str() {
                        "month" => PeriodKind::Month,
                        _ => PeriodKind::Week,
                    })
                }>
                    <option value="week">"Weekly"</option>
                    <option value="month">"Monthly"</option>
                </select>
            </div>

            {move || error.get().map(|message| view! { <div class="error">{message}</div> })}

            <div class="tiles">
                <div class="tile">
                    <span class="tile-value">{move || counts.get().uploaded}</span>
                    <span class="tile-label">"Uploaded"</span>
                </div>
                <div class="tile">
                    <span class="tile-value">{move || counts.get().ready}</span>
                    <span class="tile-label">"Ready"</span>
                </div>
                <div class="tile">
                    <span class="tile-value">{move || counts.get().deleted}</span>
                    <span class="tile-label">"In trash"</span>
                </div>
            </div>

            <PeriodTable title="Documents created" rows=document_rows />
            <PeriodTable title="Events scheduled" rows=event_rows />
        </div>
    }
}
