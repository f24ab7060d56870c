//! Chart Components
//!
//! Inline SVG renderings of the insight series. Geometry comes from
//! `crate::charts`.

use leptos::prelude::*;

use crate::charts::{pie_slices, Plot, Series};
use crate::models::{CategoryConsumption, MonthlyActivity};

#[component]
fn Legend() -> impl IntoView {
    view! {
        <div class="chart-legend">
            {Series::ALL.into_iter().map(|s| view! {
                <span class="legend-item">
                    <span class="legend-swatch" style=format!("background: {};", s.color())></span>
                    {s.label()}
                </span>
            }).collect_view()}
        </div>
    }
}

#[component]
fn MonthAxis(plot: Plot, months: Vec<String>) -> impl IntoView {
    let count = months.len();
    let baseline = plot.height - plot.padding;
    view! {
        <line class="axis" x1=plot.padding y1=baseline x2=plot.width - plot.padding y2=baseline />
        {months.into_iter().enumerate().map(|(i, name)| view! {
            <text class="axis-label" x=plot.x_center(i, count) y=baseline + 16.0 text-anchor="middle">{name}</text>
        }).collect_view()}
    }
}

/// Grouped monthly bars
#[component]
pub fn BarChart(data: Vec<MonthlyActivity>) -> impl IntoView {
    let plot = Plot::default();
    let bars = plot.bars(&data);
    let months: Vec<String> = data.iter().map(|m| m.name.clone()).collect();
    view! {
        <svg class="chart" viewBox=format!("0 0 {} {}", plot.width, plot.height)>
            {bars.into_iter().map(|bar| view! {
                <rect
                    x=bar.x
                    y=bar.y
                    width=bar.width
                    height=bar.height
                    fill=bar.series.color()
                    data-value=bar.value
                />
            }).collect_view()}
            <MonthAxis plot=plot months=months />
        </svg>
        <Legend />
    }
}

/// One polyline per series
#[component]
pub fn LineChart(data: Vec<MonthlyActivity>) -> impl IntoView {
    let plot = Plot::default();
    let months: Vec<String> = data.iter().map(|m| m.name.clone()).collect();
    view! {
        <svg class="chart" viewBox=format!("0 0 {} {}", plot.width, plot.height)>
            {Series::ALL.into_iter().map(|series| view! {
                <polyline
                    fill="none"
                    stroke=series.color()
                    stroke-width="2"
                    points=plot.line_points(&data, series)
                />
            }).collect_view()}
            <MonthAxis plot=plot months=months />
        </svg>
        <Legend />
    }
}

/// Consumption pie with percentage legend
#[component]
pub fn PieChart(data: Vec<CategoryConsumption>) -> impl IntoView {
    let slices = pie_slices(&data, 100.0, 100.0, 80.0);
    view! {
        <div class="pie">
            <svg class="chart pie-chart" viewBox="0 0 200 200">
                {slices.iter().map(|slice| view! {
                    <path d=slice.path.clone() fill=slice.color />
                }).collect_view()}
            </svg>
            <ul class="chart-legend vertical">
                {slices.into_iter().map(|slice| view! {
                    <li class="legend-item">
                        <span class="legend-swatch" style=format!("background: {};", slice.color)></span>
                        {slice.label}
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}
