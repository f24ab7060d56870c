//! History View
//!
//! Activity log grouped by day with filters, and the usage insight charts.

use chrono::{Local, NaiveDate};
use leptos::prelude::*;

use crate::charts::{relative_widths, ChartType};
use crate::components::{tab, BarChart, CategorySelector, LineChart, PieChart, TabBar};
use crate::filter::HistoryFilter;
use crate::fixtures;
use crate::history::{format_day, format_time, group_by_day};
use crate::models::{HistoryAction, HistoryEntry, UsageStat};

fn print_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.print() {
        tracing::warn!(?e, "print failed");
    }
}

#[component]
fn RankingCard(
    title: &'static str,
    description: &'static str,
    items: Vec<UsageStat>,
    /// Class for the rank bubble and bar
    tone: &'static str,
) -> impl IntoView {
    let frequencies: Vec<u32> = items.iter().map(|i| i.frequency).collect();
    let widths = relative_widths(&frequencies);

    view! {
        <div class="card">
            <div class="card-header">
                <h3 class="card-title">{title}</h3>
                <p class="card-description">{description}</p>
            </div>
            <div class="card-content stack">
                {items.into_iter().zip(widths).enumerate().map(|(rank, (item, width))| view! {
                    <div class="row between">
                        <div class="row">
                            <span class=format!("rank {}", tone)>{rank + 1}</span>
                            <div>
                                <p class="strong">{item.name}</p>
                                <p class="muted small">{item.category}</p>
                            </div>
                        </div>
                        <div class="row">
                            <div class="mini-bar">
                                <div class=format!("mini-bar-fill {}", tone) style=format!("width: {:.0}%;", width)></div>
                            </div>
                            <span class="small strong">{format!("{}x", item.frequency)}</span>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn EntryRow(entry: HistoryEntry) -> impl IntoView {
    view! {
        <div class="list-row">
            <span class=entry.action.badge_class()>{entry.action.label()}</span>
            <div class="list-row-body">
                <div class="list-row-title">{entry.item.clone()}</div>
                <div class="muted small row">
                    <span>{format!("{} {}", entry.quantity, entry.unit)}</span>
                    <span class="badge badge-outline">{entry.category.clone()}</span>
                    <span class="tiny">{format!("{} • {}", format_time(&entry.date, &Local), entry.user)}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    let data = fixtures::load_or_default(fixtures::history());
    let entries = StoredValue::new(data.entries);

    let (active_tab, set_active_tab) = signal("history");
    let (chart_type, set_chart_type) = signal(ChartType::Bar);

    let (filter, set_filter) = signal(HistoryFilter::default());
    let groups = Memo::new(move |_| {
        let filtered = entries.with_value(|all| filter.with(|f| f.apply(all, &Local)));
        group_by_day(&filtered, &Local)
    });
    let clear_filters = move || set_filter.update(|f| f.clear());

    let date_value = move || filter.with(|f| f.date.map(|d| d.to_string()).unwrap_or_default());
    let category_value = Signal::derive(move || filter.with(|f| f.category.clone().unwrap_or_default()));
    let action_value = move || filter.with(|f| f.action.map(|a| a.as_str()).unwrap_or_default());

    let tabs = vec![tab("history", "Activity History"), tab("insights", "Usage Insights")];
    let monthly = data.monthly;
    let consumption = data.consumption;
    let most_used = data.most_used;
    let most_wasted = data.most_wasted;

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h2 class="page-title">"History & Insights"</h2>
                    <p class="muted">"Track your inventory activities and discover usage patterns"</p>
                </div>
                <div class="row">
                    <button
                        class="btn outline small"
                        disabled=move || !filter.with(|f| f.is_active())
                        on:click=move |_| clear_filters()
                    >
                        "⨯ Clear Filters"
                    </button>
                    <button class="btn outline small" on:click=move |_| print_page()>"🖨 Print"</button>
                </div>
            </div>

            <TabBar tabs=tabs active=active_tab set_active=set_active_tab />

            <Show when=move || active_tab.get() == "history">
                <div class="card">
                    <div class="card-header row between">
                        <h3 class="card-title">"Activity History"</h3>
                        <div class="toolbar">
                            <input
                                class="input"
                                type="date"
                                aria-label="Filter by date"
                                prop:value=date_value
                                on:input=move |ev| {
                                    let picked = NaiveDate::parse_from_str(&event_target_value(&ev), "%Y-%m-%d").ok();
                                    set_filter.update(|f| f.date = picked);
                                }
                            />
                            <CategorySelector
                                id="history-category"
                                current=category_value
                                on_change=move |c: String| {
                                    set_filter.update(|f| f.category = Some(c).filter(|c| !c.is_empty()));
                                }
                                any_label="All Categories"
                            />
                            <select
                                class="select"
                                aria-label="Filter by action"
                                on:change=move |ev| {
                                    let picked = HistoryAction::parse(&event_target_value(&ev));
                                    set_filter.update(|f| f.action = picked);
                                }
                            >
                                <option value="" selected=move || action_value().is_empty()>"All Actions"</option>
                                {HistoryAction::ALL.into_iter().map(|a| view! {
                                    <option value=a.as_str() selected=move || action_value() == a.as_str()>{a.label()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                    </div>
                    <div class="card-content">
                        <Show
                            when=move || groups.with(|g| !g.is_empty())
                            fallback=move || view! {
                                <div class="empty">
                                    <div class="empty-icon">"📦"</div>
                                    <p>"No history items match your filters"</p>
                                    <button class="btn outline" on:click=move |_| clear_filters()>"Clear Filters"</button>
                                </div>
                            }
                        >
                            <div class="stack">
                                <For
                                    each=move || groups.get()
                                    key=|(day, entries)| (*day, entries.iter().map(|e| e.id).collect::<Vec<_>>())
                                    children=|(day, entries)| view! {
                                        <div class="day-group">
                                            <div class="day-heading muted small">{format_day(day)}</div>
                                            {entries.into_iter().map(|entry| view! { <EntryRow entry=entry /> }).collect_view()}
                                        </div>
                                    }
                                />
                            </div>
                        </Show>
                    </div>
                </div>
            </Show>

            <Show when=move || active_tab.get() == "insights">
                <div class="row">
                    {ChartType::ALL.into_iter().map(|kind| view! {
                        <button
                            class=move || if chart_type.get() == kind { "btn primary small" } else { "btn outline small" }
                            on:click=move |_| set_chart_type.set(kind)
                        >
                            {kind.label()}
                        </button>
                    }).collect_view()}
                </div>

                <div class="grid two">
                    <div class="card">
                        <div class="card-header">
                            <h3 class="card-title">"Monthly Activity"</h3>
                            <p class="card-description">"Inventory changes over the last 12 months"</p>
                        </div>
                        <div class="card-content chart-box">
                            {
                                let monthly = monthly.clone();
                                let consumption = consumption.clone();
                                move || match chart_type.get() {
                                    ChartType::Bar => view! { <BarChart data=monthly.clone() /> }.into_any(),
                                    ChartType::Line => view! { <LineChart data=monthly.clone() /> }.into_any(),
                                    ChartType::Pie => view! { <PieChart data=consumption.clone() /> }.into_any(),
                                }
                            }
                        </div>
                    </div>
                    <div class="card">
                        <div class="card-header">
                            <h3 class="card-title">"Consumption by Category"</h3>
                            <p class="card-description">"Breakdown of inventory usage across categories"</p>
                        </div>
                        <div class="card-content chart-box">
                            <PieChart data=consumption.clone() />
                        </div>
                    </div>
                </div>

                <div class="grid two">
                    <RankingCard
                        title="Most Used Items"
                        description="Items with highest consumption frequency"
                        items=most_used.clone()
                        tone="primary"
                    />
                    <RankingCard
                        title="Most Wasted Items"
                        description="Items that expired before use"
                        items=most_wasted.clone()
                        tone="destructive"
                    />
                </div>
            </Show>
        </div>
    }
}
