use leptos::prelude::*;
use leptos_router::components::A;

use crate::charts::progress_value;
use crate::components::ProgressBar;
use crate::fixtures::{self, DashboardData};

/// Progress bar scale for the per-category item counts
const SUMMARY_SCALE: u32 = 3;

#[component]
fn StatCard(
    icon: &'static str,
    title: &'static str,
    value: u32,
    #[prop(into)] caption: String,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="card-header">
                <h3 class="card-title">
                    <span class="stat-icon">{icon}</span>
                    {title}
                </h3>
            </div>
            <div class="card-content">
                <div class="stat-value">{value}</div>
                <p class="muted small">{caption}</p>
            </div>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let DashboardData { stats, summary, activity } = fixtures::load_or_default(fixtures::dashboard());

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h2 class="page-title">"Dashboard"</h2>
                    <p class="muted">"Overview of your inventory and activity"</p>
                </div>
            </div>

            <div class="grid stats">
                <StatCard
                    icon="📦"
                    title="Total Items"
                    value=stats.total_items
                    caption=format!("Across {} categories", stats.categories)
                />
                <StatCard
                    icon="⚠"
                    title="Low Stock"
                    value=stats.low_stock_items
                    caption="Items below reorder threshold"
                />
                <StatCard
                    icon="⏰"
                    title="Expiring Soon"
                    value=stats.expiring_items
                    caption="Items expiring within 7 days"
                />
                <StatCard
                    icon="🛒"
                    title="Shopping List"
                    value=stats.shopping_list_items
                    caption="Items to purchase"
                />
            </div>

            <div class="grid two">
                <div class="card">
                    <div class="card-header">
                        <h3 class="card-title">"Inventory Summary"</h3>
                        <p class="card-description">"Items by category"</p>
                    </div>
                    <div class="card-content stack">
                        {summary.into_iter().map(|row| {
                            let low = row.low_stock;
                            view! {
                                <div class="summary-row">
                                    <div class="row between">
                                        <span>"🏷 " {row.category}</span>
                                        <span class="muted small">
                                            {format!("{} items", row.item_count)}
                                            {(low > 0).then(|| view! {
                                                <span class="warning">{format!(" ({} low)", low)}</span>
                                            })}
                                        </span>
                                    </div>
                                    <ProgressBar value=f64::from(progress_value(row.item_count, SUMMARY_SCALE)) />
                                </div>
                            }
                        }).collect_view()}
                        <A href="/inventory">
                            <span class="btn outline full">"View All Inventory"</span>
                        </A>
                    </div>
                </div>

                <div class="card">
                    <div class="card-header">
                        <h3 class="card-title">"Activity"</h3>
                        <p class="card-description">"Recent inventory changes"</p>
                    </div>
                    <div class="card-content stack">
                        {activity.into_iter().map(|entry| view! {
                            <div class="activity-row">
                                <span class="activity-icon">{entry.kind.icon()}</span>
                                <div>
                                    <div class="activity-title">{entry.title}</div>
                                    <div class="muted small">{entry.detail}</div>
                                    <div class="muted tiny">{entry.when}</div>
                                </div>
                            </div>
                        }).collect_view()}
                        <A href="/history">
                            <span class="btn outline full">"View Full History"</span>
                        </A>
                    </div>
                </div>
            </div>
        </div>
    }
}
