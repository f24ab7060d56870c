//! Chart Math
//!
//! Percentages and SVG geometry for the insight charts. Rendering lives in
//! `components::charts`.

use std::f64::consts::PI;

use crate::models::{CategoryConsumption, MonthlyActivity};

/// Pie slice colours, cycled by index
pub const PALETTE: [&str; 5] = ["#4caf50", "#8d6e63", "#a5d6a7", "#3e2723", "#c8e6c9"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChartType {
    #[default]
    Bar,
    Pie,
    Line,
}

impl ChartType {
    pub const ALL: [ChartType; 3] = [ChartType::Bar, ChartType::Pie, ChartType::Line];

    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Bar => "Bar Chart",
            ChartType::Pie => "Pie Chart",
            ChartType::Line => "Line Chart",
        }
    }
}

/// Each value as a percentage of the series sum. A zero-sum series yields
/// zeros rather than NaN.
pub fn percentages(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if total == 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| v / total * 100.0).collect()
}

/// "Refrigerator 42%" labels for the pie
pub fn percent_labels(series: &[CategoryConsumption]) -> Vec<String> {
    let values: Vec<f64> = series.iter().map(|s| s.value).collect();
    series
        .iter()
        .zip(percentages(&values))
        .map(|(s, pct)| format!("{} {:.0}%", s.name, pct))
        .collect()
}

/// Width of each ranking bar relative to the largest value
pub fn relative_widths(values: &[u32]) -> Vec<f64> {
    let max = values.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|&v| f64::from(v) / f64::from(max) * 100.0).collect()
}

/// Progress bar fill: `count * scale`, clamped to 0..=100
pub fn progress_value(count: u32, scale: u32) -> u32 {
    count.saturating_mul(scale).min(100)
}

/// One coloured slice of a pie, as an SVG path
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub path: String,
    pub color: &'static str,
    pub label: String,
}

/// Slices for a pie centred at (`cx`, `cy`) with radius `r`
pub fn pie_slices(series: &[CategoryConsumption], cx: f64, cy: f64, r: f64) -> Vec<PieSlice> {
    let values: Vec<f64> = series.iter().map(|s| s.value).collect();
    let labels = percent_labels(series);
    let mut start = -PI / 2.0;
    let mut slices = Vec::with_capacity(series.len());
    for (i, pct) in percentages(&values).into_iter().enumerate() {
        let sweep = pct / 100.0 * 2.0 * PI;
        let end = start + sweep;
        let path = if pct >= 100.0 {
            // A single full slice cannot be drawn as one arc
            format!(
                "M {cx} {top} A {r} {r} 0 1 1 {cx} {bottom} A {r} {r} 0 1 1 {cx} {top} Z",
                top = cy - r,
                bottom = cy + r,
            )
        } else {
            let (x1, y1) = (cx + r * start.cos(), cy + r * start.sin());
            let (x2, y2) = (cx + r * end.cos(), cy + r * end.sin());
            let large_arc = if sweep > PI { 1 } else { 0 };
            format!("M {cx} {cy} L {x1:.2} {y1:.2} A {r} {r} 0 {large_arc} 1 {x2:.2} {y2:.2} Z")
        };
        slices.push(PieSlice {
            path,
            color: PALETTE[i % PALETTE.len()],
            label: labels[i].clone(),
        });
        start = end;
    }
    slices
}

/// Activity series plotted by the bar and line charts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Added,
    Removed,
    Expired,
}

impl Series {
    pub const ALL: [Series; 3] = [Series::Added, Series::Removed, Series::Expired];

    pub fn value(&self, month: &MonthlyActivity) -> u32 {
        match self {
            Series::Added => month.added,
            Series::Removed => month.removed,
            Series::Expired => month.expired,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Series::Added => "Added",
            Series::Removed => "Removed",
            Series::Expired => "Expired",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Series::Added => "var(--primary)",
            Series::Removed => "var(--accent)",
            Series::Expired => "var(--destructive)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub series: Series,
    pub value: u32,
}

/// Plot area for the monthly charts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for Plot {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 260.0,
            padding: 30.0,
        }
    }
}

impl Plot {
    fn max_value(data: &[MonthlyActivity]) -> u32 {
        data.iter()
            .flat_map(|m| Series::ALL.map(|s| s.value(m)))
            .max()
            .unwrap_or(0)
            .max(1)
    }

    fn inner_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    fn slot_width(&self, count: usize) -> f64 {
        (self.width - 2.0 * self.padding) / count.max(1) as f64
    }

    /// Centre x of the `index`th month
    pub fn x_center(&self, index: usize, count: usize) -> f64 {
        self.padding + self.slot_width(count) * (index as f64 + 0.5)
    }

    fn y_for(&self, value: u32, max: u32) -> f64 {
        self.height - self.padding - f64::from(value) / f64::from(max) * self.inner_height()
    }

    /// Grouped bars, three per month
    pub fn bars(&self, data: &[MonthlyActivity]) -> Vec<Bar> {
        let max = Self::max_value(data);
        let slot = self.slot_width(data.len());
        let bar_width = slot * 0.8 / Series::ALL.len() as f64;
        let mut bars = Vec::with_capacity(data.len() * Series::ALL.len());
        for (i, month) in data.iter().enumerate() {
            let left = self.padding + slot * i as f64 + slot * 0.1;
            for (j, series) in Series::ALL.into_iter().enumerate() {
                let value = series.value(month);
                let y = self.y_for(value, max);
                bars.push(Bar {
                    x: left + bar_width * j as f64,
                    y,
                    width: bar_width,
                    height: self.height - self.padding - y,
                    series,
                    value,
                });
            }
        }
        bars
    }

    /// Polyline `points` attribute for one series
    pub fn line_points(&self, data: &[MonthlyActivity], series: Series) -> String {
        let max = Self::max_value(data);
        data.iter()
            .enumerate()
            .map(|(i, m)| format!("{:.1},{:.1}", self.x_center(i, data.len()), self.y_for(series.value(m), max)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn percentages_sum_to_one_hundred() {
        for series in [vec![42.0, 28.0, 15.0, 10.0, 5.0], vec![1.0, 1.0, 1.0], vec![0.3, 7.0, 0.0, 19.5]] {
            let total: f64 = percentages(&series).iter().sum();
            assert!((total - 100.0).abs() < 1e-9, "{series:?} summed to {total}");
        }
    }

    #[test]
    fn zero_sum_series_is_all_zero() {
        assert_eq!(percentages(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert!(percentages(&[]).is_empty());
    }

    #[test]
    fn consumption_labels_round_to_whole_percent() {
        let consumption = fixtures::history().unwrap().consumption;
        let labels = percent_labels(&consumption);
        assert_eq!(labels[0], "Refrigerator 42%");
        assert_eq!(labels[4], "Office Supplies 5%");
    }

    #[test]
    fn relative_widths_scale_to_the_leader() {
        assert_eq!(relative_widths(&[24, 12, 6]), vec![100.0, 50.0, 25.0]);
        assert_eq!(relative_widths(&[0, 0]), vec![0.0, 0.0]);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress_value(18, 3), 54);
        assert_eq!(progress_value(40, 3), 100);
    }

    #[test]
    fn pie_has_one_slice_per_category() {
        let consumption = fixtures::history().unwrap().consumption;
        let slices = pie_slices(&consumption, 100.0, 100.0, 80.0);
        assert_eq!(slices.len(), consumption.len());
        assert_eq!(slices[0].color, PALETTE[0]);
        assert!(slices.iter().all(|s| s.path.ends_with('Z')));
    }

    #[test]
    fn bars_fit_inside_plot() {
        let monthly = fixtures::history().unwrap().monthly;
        let plot = Plot::default();
        let bars = plot.bars(&monthly);
        assert_eq!(bars.len(), 36);
        for bar in &bars {
            assert!(bar.x >= plot.padding && bar.x + bar.width <= plot.width - plot.padding + 1e-9);
            assert!(bar.y >= plot.padding - 1e-9 && bar.height >= 0.0);
        }
        let tallest = bars.iter().max_by_key(|b| b.value).unwrap();
        assert_eq!(tallest.value, 28);
        assert!((tallest.y - plot.padding).abs() < 1e-9);
    }

    #[test]
    fn line_has_a_point_per_month() {
        let monthly = fixtures::history().unwrap().monthly;
        let points = Plot::default().line_points(&monthly, Series::Added);
        assert_eq!(points.split(' ').count(), 12);
    }
}
