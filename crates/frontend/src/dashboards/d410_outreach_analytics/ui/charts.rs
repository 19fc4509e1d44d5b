//! SVG chart components of the outreach dashboard.

use crate::dashboards::d410_outreach_analytics::chart_layout::{
    axis_ticks, grouped_bars, line_points, nice_ceiling, pie_slices, points_attr, tick_label,
    PlotFrame,
};
use crate::dashboards::d410_outreach_analytics::view_model::{format_rate, EngagementSlice};
use crate::shared::number_format::format_thousands;
use leptos::prelude::*;

pub const VISITS_COLOR: &str = "#3B82F6";
pub const CLIENTS_COLOR: &str = "#10B981";
pub const ENGAGED_COLOR: &str = "#8B5CF6";
pub const RATE_LINE_COLOR: &str = "#EF4444";

const GRID_COLOR: &str = "#f0f0f0";
const AXIS_COLOR: &str = "#6b7280";
const Y_TICKS: usize = 4;

const PIE_WIDTH: f64 = 400.0;
const PIE_HEIGHT: f64 = 300.0;
const PIE_RADIUS: f64 = 100.0;

/// One named, coloured series of values, one value per category.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Content of the hover tooltip
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub label: Option<String>,
    pub lines: Vec<TooltipLine>,
    /// Horizontal anchor in percent of the chart width
    pub anchor_pct: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipLine {
    pub name: &'static str,
    pub color: &'static str,
    pub value: String,
}

/// Counts are shown with thousands separators, fractional values with one decimal.
fn value_label(value: f64) -> String {
    if value.fract() == 0.0 && value >= 0.0 && value <= u32::MAX as f64 {
        format_thousands(value as u32)
    } else {
        format_rate(value)
    }
}

/// One tooltip per category: bar series first, then the line series.
pub fn category_tooltips(
    frame: &PlotFrame,
    labels: &[String],
    bars: &[ChartSeries],
    line: Option<&ChartSeries>,
) -> Vec<TooltipContent> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| TooltipContent {
            label: Some(label.clone()),
            lines: bars
                .iter()
                .chain(line)
                .filter_map(|series| {
                    series.values.get(i).map(|value| TooltipLine {
                        name: series.name,
                        color: series.color,
                        value: value_label(*value),
                    })
                })
                .collect(),
            anchor_pct: frame.band_center(i, labels.len()) / frame.width * 100.0,
        })
        .collect()
}

fn n(value: f64) -> String {
    format!("{:.1}", value)
}

#[component]
fn ChartTooltip(content: TooltipContent) -> impl IntoView {
    let style = format!("left: {:.1}%;", content.anchor_pct);
    view! {
        <div class="chart-tooltip" style=style>
            {content.label.map(|label| view! { <p class="chart-tooltip__label">{label}</p> })}
            {content
                .lines
                .into_iter()
                .map(|line| {
                    view! {
                        <p class="chart-tooltip__line" style=format!("color: {};", line.color)>
                            {format!("{}: {}", line.name, line.value)}
                        </p>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ChartLegend(items: Vec<(&'static str, &'static str)>) -> impl IntoView {
    view! {
        <div class="chart-legend">
            {items
                .into_iter()
                .map(|(name, color)| {
                    view! {
                        <span class="chart-legend__item">
                            <span class="chart-legend__swatch" style=format!("background: {};", color)></span>
                            {name}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Grouped bar chart with an optional line on a secondary (right) axis.
#[component]
pub fn ComposedChart(
    frame: PlotFrame,
    /// Category labels along the x axis
    labels: Vec<String>,
    /// Bar series, drawn side by side within each category
    bars: Vec<ChartSeries>,
    /// Series drawn as a line against the right axis
    #[prop(optional)]
    line: Option<ChartSeries>,
    /// Rotate x labels by -45° for long category names
    #[prop(optional)]
    rotate_labels: bool,
) -> impl IntoView {
    let hovered = RwSignal::new(None::<usize>);
    let count = labels.len();

    let bar_max = nice_ceiling(
        bars.iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max),
    );
    let bar_values: Vec<Vec<f64>> = bars.iter().map(|s| s.values.clone()).collect();

    let grid = axis_ticks(bar_max, Y_TICKS)
        .into_iter()
        .map(|tick| {
            let y = frame.y_for(tick, bar_max);
            view! {
                <line x1=n(frame.left()) y1=n(y) x2=n(frame.right()) y2=n(y) stroke=GRID_COLOR stroke-dasharray="3 3"></line>
                <text x=n(frame.left() - 8.0) y=n(y + 4.0) text-anchor="end" fill=AXIS_COLOR class="chart__tick">
                    {tick_label(tick)}
                </text>
            }
        })
        .collect_view();

    let bar_views = grouped_bars(&frame, &bar_values, bar_max)
        .into_iter()
        .map(|rect| {
            let color = bars[rect.series].color;
            view! {
                <rect x=n(rect.x) y=n(rect.y) width=n(rect.width) height=n(rect.height) rx="2" fill=color></rect>
            }
        })
        .collect_view();

    let line_view = line.as_ref().map(|series| {
        let max = nice_ceiling(series.values.iter().copied().fold(0.0, f64::max));
        let points = line_points(&frame, &series.values, max);
        let color = series.color;
        let ticks = axis_ticks(max, Y_TICKS)
            .into_iter()
            .map(|tick| {
                view! {
                    <text x=n(frame.right() + 8.0) y=n(frame.y_for(tick, max) + 4.0) text-anchor="start" fill=AXIS_COLOR class="chart__tick">
                        {tick_label(tick)}
                    </text>
                }
            })
            .collect_view();
        let dots = points
            .iter()
            .map(|(x, y)| view! { <circle cx=n(*x) cy=n(*y) r="4" fill=color></circle> })
            .collect_view();

        view! {
            <g class="chart__line">
                {ticks}
                <polyline points=points_attr(&points) fill="none" stroke=color stroke-width="3"></polyline>
                {dots}
            </g>
        }
    });

    let x_labels = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let x = frame.band_center(i, count);
            let y = frame.bottom() + 16.0;
            if rotate_labels {
                view! {
                    <text x=n(x) y=n(y) text-anchor="end" fill=AXIS_COLOR class="chart__tick"
                        transform=format!("rotate(-45 {:.1} {:.1})", x, y)>
                        {label.clone()}
                    </text>
                }
                .into_any()
            } else {
                view! {
                    <text x=n(x) y=n(y) text-anchor="middle" fill=AXIS_COLOR class="chart__tick">
                        {label.clone()}
                    </text>
                }
                .into_any()
            }
        })
        .collect_view();

    let band = frame.band_width(count);
    let hover_bands = (0..count)
        .map(|i| {
            let x = frame.left() + i as f64 * band;
            view! {
                <rect
                    class="chart__hover-band"
                    x=n(x)
                    y=n(frame.top())
                    width=n(band)
                    height=n(frame.plot_height())
                    fill="transparent"
                    on:mouseenter=move |_| hovered.set(Some(i))
                    on:mouseleave=move |_| hovered.set(None)
                ></rect>
            }
        })
        .collect_view();

    let tooltips = category_tooltips(&frame, &labels, &bars, line.as_ref());
    let tooltip = move || {
        hovered
            .get()
            .and_then(|i| tooltips.get(i).cloned())
            .map(|content| view! { <ChartTooltip content=content /> })
    };

    let legend_items: Vec<(&'static str, &'static str)> = bars
        .iter()
        .chain(line.as_ref())
        .map(|s| (s.name, s.color))
        .collect();

    view! {
        <div class="chart">
            <svg class="chart__svg" viewBox=frame.view_box() preserveAspectRatio="xMidYMid meet">
                {grid}
                {bar_views}
                {line_view}
                <line x1=n(frame.left()) y1=n(frame.bottom()) x2=n(frame.right()) y2=n(frame.bottom()) stroke=AXIS_COLOR></line>
                {x_labels}
                {hover_bands}
            </svg>
            {tooltip}
            <ChartLegend items=legend_items />
        </div>
    }
}

/// Pie of locations per engagement bucket, labelled "{n} locations".
#[component]
pub fn EngagementPie(slices: Vec<EngagementSlice>) -> impl IntoView {
    let hovered = RwSignal::new(None::<usize>);
    let (cx, cy) = (PIE_WIDTH / 2.0, PIE_HEIGHT / 2.0);
    let values: Vec<f64> = slices.iter().map(|s| s.value as f64).collect();
    let layout = pie_slices(cx, cy, PIE_RADIUS, &values);

    if layout.is_empty() {
        return view! { <div class="chart chart--empty">"No locations to classify"</div> }.into_any();
    }

    let slice_views = layout
        .iter()
        .map(|slice| {
            let source = &slices[slice.index];
            let index = slice.index;
            let anchor = if slice.label_x >= cx { "start" } else { "end" };
            view! {
                <path
                    d=slice.path.clone()
                    fill=source.color
                    stroke="#ffffff"
                    stroke-width="2"
                    on:mouseenter=move |_| hovered.set(Some(index))
                    on:mouseleave=move |_| hovered.set(None)
                ></path>
                <text x=n(slice.label_x) y=n(slice.label_y) text-anchor=anchor fill=source.color class="chart__slice-label">
                    {format!("{} locations", source.value)}
                </text>
            }
        })
        .collect_view();

    let tooltips: Vec<TooltipContent> = slices
        .iter()
        .map(|s| TooltipContent {
            label: None,
            lines: vec![TooltipLine {
                name: s.name,
                color: s.color,
                value: s.value.to_string(),
            }],
            anchor_pct: 50.0,
        })
        .collect();
    let tooltip = move || {
        hovered
            .get()
            .and_then(|i| tooltips.get(i).cloned())
            .map(|content| view! { <ChartTooltip content=content /> })
    };

    let legend_items: Vec<(&'static str, &'static str)> =
        slices.iter().map(|s| (s.name, s.color)).collect();

    view! {
        <div class="chart">
            <svg class="chart__svg chart__svg--pie" viewBox=format!("0 0 {} {}", PIE_WIDTH, PIE_HEIGHT)>
                {slice_views}
            </svg>
            {tooltip}
            <ChartLegend items=legend_items />
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> PlotFrame {
        PlotFrame {
            width: 400.0,
            height: 300.0,
            margin_top: 20.0,
            margin_right: 0.0,
            margin_bottom: 40.0,
            margin_left: 0.0,
        }
    }

    #[test]
    fn test_value_label() {
        assert_eq!(value_label(3051.0), "3,051");
        assert_eq!(value_label(73.1), "73.1");
        assert_eq!(value_label(73.0), "73");
    }

    #[test]
    fn test_category_tooltips() {
        let labels = vec!["2024-08".to_string(), "2024-09".to_string()];
        let bars = vec![
            ChartSeries {
                name: "Visits",
                color: VISITS_COLOR,
                values: vec![65.0, 78.0],
            },
            ChartSeries {
                name: "Clients",
                color: CLIENTS_COLOR,
                values: vec![445.0, 532.0],
            },
        ];
        let line = ChartSeries {
            name: "Engagement %",
            color: RATE_LINE_COLOR,
            values: vec![73.0, 73.1],
        };

        let tips = category_tooltips(&frame(), &labels, &bars, Some(&line));
        assert_eq!(tips.len(), 2);
        assert_eq!(tips[1].label.as_deref(), Some("2024-09"));
        let lines: Vec<String> = tips[1]
            .lines
            .iter()
            .map(|l| format!("{}: {}", l.name, l.value))
            .collect();
        assert_eq!(lines, vec!["Visits: 78", "Clients: 532", "Engagement %: 73.1"]);
        assert_eq!(tips[0].anchor_pct, 25.0);
        assert_eq!(tips[1].anchor_pct, 75.0);
    }

    #[test]
    fn test_category_tooltips_without_line() {
        let labels = vec!["A".to_string()];
        let bars = vec![ChartSeries {
            name: "Total Visits",
            color: VISITS_COLOR,
            values: vec![45.0],
        }];
        let tips = category_tooltips(&frame(), &labels, &bars, None);
        assert_eq!(tips[0].lines.len(), 1);
        assert_eq!(tips[0].lines[0].color, VISITS_COLOR);
    }
}
