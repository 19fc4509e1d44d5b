//! SVG geometry for the dashboard charts.
//!
//! Charts are drawn in a fixed viewBox and scaled by the browser, so all
//! coordinates here are in viewBox units.

use std::f64::consts::PI;

/// Outer size and margins of a chart's viewBox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotFrame {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl PlotFrame {
    pub fn left(&self) -> f64 {
        self.margin_left
    }

    pub fn right(&self) -> f64 {
        self.width - self.margin_right
    }

    pub fn top(&self) -> f64 {
        self.margin_top
    }

    /// Baseline of the plot area (value 0)
    pub fn bottom(&self) -> f64 {
        self.height - self.margin_bottom
    }

    pub fn plot_width(&self) -> f64 {
        (self.right() - self.left()).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.bottom() - self.top()).max(0.0)
    }

    /// Width of one category band when the plot is split into `count` bands
    pub fn band_width(&self, count: usize) -> f64 {
        if count == 0 {
            0.0
        } else {
            self.plot_width() / count as f64
        }
    }

    /// Horizontal centre of category `index` out of `count`
    pub fn band_center(&self, index: usize, count: usize) -> f64 {
        self.left() + (index as f64 + 0.5) * self.band_width(count)
    }

    /// Vertical coordinate of `value` on an axis running from 0 to `max`.
    /// Values outside the axis are pinned to its ends.
    pub fn y_for(&self, value: f64, max: f64) -> f64 {
        self.bottom() - scaled(value, max) * self.plot_height()
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Round an axis maximum up to 1, 2, 2.5 or 5 times a power of ten.
/// Non-positive input yields 1.
pub fn nice_ceiling(max: f64) -> f64 {
    if !(max > 0.0) || !max.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate >= max)
        .unwrap_or(10.0 * magnitude)
}

/// `count + 1` evenly spaced values from 0 to `max`.
pub fn axis_ticks(max: f64, count: usize) -> Vec<f64> {
    let count = count.max(1);
    (0..=count)
        .map(|i| max * i as f64 / count as f64)
        .collect()
}

/// Axis tick label: integers without decimals, otherwise one decimal.
pub fn tick_label(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub category: usize,
    pub series: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Share of each band left empty between groups
const GROUP_GAP: f64 = 0.2;

/// Lay out grouped bars. `series[s][c]` is the value of series `s` in
/// category `c`; the category count is the longest series.
pub fn grouped_bars(frame: &PlotFrame, series: &[Vec<f64>], max: f64) -> Vec<BarRect> {
    let categories = series.iter().map(Vec::len).max().unwrap_or(0);
    if categories == 0 {
        return Vec::new();
    }
    let band = frame.band_width(categories);
    let bar_width = band * (1.0 - GROUP_GAP) / series.len() as f64;

    let mut bars = Vec::with_capacity(categories * series.len());
    for category in 0..categories {
        let group_left = frame.left() + category as f64 * band + band * GROUP_GAP / 2.0;
        for (s, values) in series.iter().enumerate() {
            let Some(&value) = values.get(category) else {
                continue;
            };
            let height = scaled(value, max) * frame.plot_height();
            bars.push(BarRect {
                category,
                series: s,
                x: group_left + s as f64 * bar_width,
                y: frame.bottom() - height,
                width: bar_width,
                height,
            });
        }
    }
    bars
}

/// Polyline vertices for `values`, one per category band centre.
pub fn line_points(frame: &PlotFrame, values: &[f64], max: f64) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| (frame.band_center(i, values.len()), frame.y_for(*value, max)))
        .collect()
}

/// `points` attribute of an SVG polyline
pub fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    /// Index into the input values
    pub index: usize,
    pub fraction: f64,
    /// SVG path data
    pub path: String,
    /// Anchor for the slice label, just outside the rim
    pub label_x: f64,
    pub label_y: f64,
}

/// Lay out pie slices clockwise from twelve o'clock.
///
/// Non-positive values get no slice. A slice covering the whole pie is drawn
/// as a full circle since a single arc cannot start and end on the same point.
pub fn pie_slices(cx: f64, cy: f64, radius: f64, values: &[f64]) -> Vec<PieSlice> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let point = |angle: f64, r: f64| (cx + r * angle.sin(), cy - r * angle.cos());
    let mut start = 0.0;
    let mut slices = Vec::new();

    for (index, value) in values.iter().enumerate() {
        if *value <= 0.0 {
            continue;
        }
        let fraction = value / total;
        let sweep = fraction * 2.0 * PI;
        let end = start + sweep;

        let path = if fraction >= 1.0 - 1e-9 {
            format!(
                "M {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} Z",
                cx,
                cy - radius,
                cx,
                cy + radius,
                cx,
                cy - radius,
                r = radius
            )
        } else {
            let (x0, y0) = point(start, radius);
            let (x1, y1) = point(end, radius);
            let large_arc = if sweep > PI { 1 } else { 0 };
            format!(
                "M {:.2} {:.2} L {:.2} {:.2} A {r:.2} {r:.2} 0 {} 1 {:.2} {:.2} Z",
                cx,
                cy,
                x0,
                y0,
                large_arc,
                x1,
                y1,
                r = radius
            )
        };

        let (label_x, label_y) = point(start + sweep / 2.0, radius * 1.15);
        slices.push(PieSlice {
            index,
            fraction,
            path,
            label_x,
            label_y,
        });
        start = end;
    }
    slices
}

fn scaled(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> PlotFrame {
        PlotFrame {
            width: 500.0,
            height: 300.0,
            margin_top: 20.0,
            margin_right: 30.0,
            margin_bottom: 40.0,
            margin_left: 50.0,
        }
    }

    #[test]
    fn test_frame_geometry() {
        let f = frame();
        assert_eq!(f.plot_width(), 420.0);
        assert_eq!(f.plot_height(), 240.0);
        assert_eq!(f.bottom(), 260.0);
        assert_eq!(f.band_width(4), 105.0);
        assert_eq!(f.band_center(0, 4), 102.5);
        assert_eq!(f.view_box(), "0 0 500 300");
    }

    #[test]
    fn test_y_for_pins_to_axis() {
        let f = frame();
        assert_eq!(f.y_for(0.0, 100.0), 260.0);
        assert_eq!(f.y_for(100.0, 100.0), 20.0);
        assert_eq!(f.y_for(50.0, 100.0), 140.0);
        assert_eq!(f.y_for(150.0, 100.0), 20.0);
        assert_eq!(f.y_for(-10.0, 100.0), 260.0);
        assert_eq!(f.y_for(10.0, 0.0), 260.0);
    }

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(837.0), 1000.0);
        assert_eq!(nice_ceiling(123.0), 200.0);
        assert_eq!(nice_ceiling(312.0), 500.0);
        assert_eq!(nice_ceiling(84.4), 100.0);
        assert_eq!(nice_ceiling(21.0), 25.0);
        assert_eq!(nice_ceiling(4.2), 5.0);
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert_eq!(nice_ceiling(-3.0), 1.0);
        assert_eq!(nice_ceiling(f64::NAN), 1.0);
    }

    #[test]
    fn test_axis_ticks() {
        assert_eq!(axis_ticks(100.0, 4), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(axis_ticks(10.0, 0), vec![0.0, 10.0]);
    }

    #[test]
    fn test_tick_label() {
        assert_eq!(tick_label(250.0), "250");
        assert_eq!(tick_label(0.0), "0");
        assert_eq!(tick_label(0.5), "0.5");
    }

    #[test]
    fn test_grouped_bars_stay_inside_plot() {
        let f = frame();
        let series = vec![vec![45.0, 38.0, 11.0], vec![287.0, 312.0, 52.0], vec![215.0, 245.0, 41.0]];
        let max = nice_ceiling(312.0);
        let bars = grouped_bars(&f, &series, max);

        assert_eq!(bars.len(), 9);
        for bar in &bars {
            assert!(bar.x >= f.left() && bar.x + bar.width <= f.right() + 1e-9);
            assert!(bar.y >= f.top() && bar.y + bar.height <= f.bottom() + 1e-9);
            assert!(bar.height >= 0.0);
        }
        // tallest bar is clients at "Chicago & Albany"
        let tallest = bars
            .iter()
            .max_by(|a, b| a.height.partial_cmp(&b.height).unwrap())
            .unwrap();
        assert_eq!((tallest.category, tallest.series), (1, 1));
    }

    #[test]
    fn test_grouped_bars_order_within_group() {
        let f = frame();
        let bars = grouped_bars(&f, &[vec![1.0], vec![2.0]], 2.0);
        assert_eq!(bars.len(), 2);
        assert!(bars[0].x < bars[1].x);
        assert_eq!(bars[1].height, f.plot_height());
    }

    #[test]
    fn test_grouped_bars_ragged_and_empty() {
        let f = frame();
        let bars = grouped_bars(&f, &[vec![1.0, 2.0], vec![3.0]], 4.0);
        assert_eq!(bars.len(), 3);
        assert!(grouped_bars(&f, &[], 1.0).is_empty());
        assert!(grouped_bars(&f, &[vec![]], 1.0).is_empty());
    }

    #[test]
    fn test_line_points_on_band_centres() {
        let f = frame();
        let points = line_points(&f, &[0.0, 100.0], 100.0);
        assert_eq!(points, vec![(155.0, 260.0), (365.0, 20.0)]);
        assert_eq!(points_attr(&points), "155.0,260.0 365.0,20.0");
    }

    #[test]
    fn test_pie_slices_cover_full_turn() {
        let slices = pie_slices(200.0, 150.0, 100.0, &[2.0, 8.0, 0.0]);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].index, 0);
        assert_eq!(slices[1].index, 1);
        let total: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-12);
        // large slice uses the large-arc flag
        assert!(slices[1].path.contains(" 0 1 1 "));
        assert!(slices[0].path.contains(" 0 0 1 "));
    }

    #[test]
    fn test_single_slice_is_full_circle() {
        let slices = pie_slices(200.0, 150.0, 100.0, &[0.0, 5.0, 0.0]);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].index, 1);
        assert_eq!(slices[0].fraction, 1.0);
        assert_eq!(slices[0].path.matches(" A ").count(), 2);
    }

    #[test]
    fn test_empty_pie() {
        assert!(pie_slices(0.0, 0.0, 10.0, &[]).is_empty());
        assert!(pie_slices(0.0, 0.0, 10.0, &[0.0, 0.0, 0.0]).is_empty());
    }
}
