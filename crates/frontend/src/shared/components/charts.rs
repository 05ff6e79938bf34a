//! Lightweight SVG chart marks for the statistics page.
//!
//! The geometry is computed here and rendered as plain SVG views; series
//! values map into a fixed plot box with a padded axis maximum.

use leptos::prelude::*;

const PLOT_WIDTH: f64 = 640.0;
const PLOT_HEIGHT: f64 = 220.0;
const MARGIN_LEFT: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 28.0;
const MARGIN_TOP: f64 = 12.0;

/// Axis maximum: the series maximum rounded up to a readable step.
/// A flat-zero series keeps a non-zero axis so bars stay at the baseline.
pub fn axis_max(values: &[f64]) -> f64 {
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return 1.0;
    }
    let step = 10f64.powf(max.log10().floor());
    (max / step).ceil() * step
}

/// Height in pixels of a bar for `value` against `max` in a `plot_h` box.
pub fn bar_height(value: f64, max: f64, plot_h: f64) -> f64 {
    if max <= 0.0 || value <= 0.0 {
        return 0.0;
    }
    (value / max).min(1.0) * plot_h
}

/// SVG `points` attribute for a line series spanning the plot box.
pub fn polyline_points(values: &[f64], max: f64, plot_w: f64, plot_h: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let step = if values.len() > 1 {
        plot_w / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = i as f64 * step;
            let y = plot_h - bar_height(*v, max, plot_h);
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Vertical bar chart for one labelled series.
#[component]
pub fn BarChart(
    /// Chart caption
    title: String,
    /// (label, value) per bar
    data: Vec<(String, f64)>,
) -> impl IntoView {
    let values: Vec<f64> = data.iter().map(|(_, v)| *v).collect();
    let max = axis_max(&values);
    let count = data.len().max(1);
    let slot = PLOT_WIDTH / count as f64;
    let bar_w = (slot * 0.6).min(48.0);

    let svg_w = MARGIN_LEFT + PLOT_WIDTH;
    let svg_h = MARGIN_TOP + PLOT_HEIGHT + MARGIN_BOTTOM;

    view! {
        <div class="chart-card">
            <div class="chart-card__title">{title}</div>
            <svg
                class="chart"
                viewBox=format!("0 0 {} {}", svg_w, svg_h)
                preserveAspectRatio="xMidYMid meet"
            >
                // horizontal gridlines at 0%, 25%, 50%, 75%, 100% of the axis
                {(0..=4)
                    .map(|i| {
                        let frac = i as f64 / 4.0;
                        let y = MARGIN_TOP + PLOT_HEIGHT * (1.0 - frac);
                        let label = format!("{:.0}", max * frac);
                        view! {
                            <g>
                                <line
                                    class="chart__gridline"
                                    x1={MARGIN_LEFT}
                                    y1=y
                                    x2=svg_w
                                    y2=y
                                />
                                <text class="chart__axis-label" x={MARGIN_LEFT - 6.0} y={y + 4.0} text-anchor="end">
                                    {label}
                                </text>
                            </g>
                        }
                    })
                    .collect_view()}
                {data
                    .iter()
                    .enumerate()
                    .map(|(i, (label, value))| {
                        let h = bar_height(*value, max, PLOT_HEIGHT);
                        let x = MARGIN_LEFT + i as f64 * slot + (slot - bar_w) / 2.0;
                        let y = MARGIN_TOP + PLOT_HEIGHT - h;
                        let label_x = MARGIN_LEFT + i as f64 * slot + slot / 2.0;
                        view! {
                            <g>
                                <rect class="chart__bar" x=x y=y width=bar_w height=h rx="2" />
                                <text
                                    class="chart__axis-label"
                                    x=label_x
                                    y={MARGIN_TOP + PLOT_HEIGHT + 18.0}
                                    text-anchor="middle"
                                >
                                    {label.clone()}
                                </text>
                            </g>
                        }
                    })
                    .collect_view()}
            </svg>
        </div>
    }
}

/// Line chart for one labelled series.
#[component]
pub fn LineChart(
    /// Chart caption
    title: String,
    /// (label, value) per point
    data: Vec<(String, f64)>,
) -> impl IntoView {
    let values: Vec<f64> = data.iter().map(|(_, v)| *v).collect();
    let max = axis_max(&values);
    let points = polyline_points(&values, max, PLOT_WIDTH, PLOT_HEIGHT);
    let count = data.len().max(1);
    let step = if count > 1 {
        PLOT_WIDTH / (count - 1) as f64
    } else {
        0.0
    };

    let svg_w = MARGIN_LEFT + PLOT_WIDTH;
    let svg_h = MARGIN_TOP + PLOT_HEIGHT + MARGIN_BOTTOM;

    view! {
        <div class="chart-card">
            <div class="chart-card__title">{title}</div>
            <svg
                class="chart"
                viewBox=format!("0 0 {} {}", svg_w, svg_h)
                preserveAspectRatio="xMidYMid meet"
            >
                {(0..=4)
                    .map(|i| {
                        let frac = i as f64 / 4.0;
                        let y = MARGIN_TOP + PLOT_HEIGHT * (1.0 - frac);
                        let label = format!("{:.0}", max * frac);
                        view! {
                            <g>
                                <line
                                    class="chart__gridline"
                                    x1={MARGIN_LEFT}
                                    y1=y
                                    x2=svg_w
                                    y2=y
                                />
                                <text class="chart__axis-label" x={MARGIN_LEFT - 6.0} y={y + 4.0} text-anchor="end">
                                    {label}
                                </text>
                            </g>
                        }
                    })
                    .collect_view()}
                <g transform=format!("translate({}, {})", MARGIN_LEFT, MARGIN_TOP)>
                    <polyline class="chart__line" fill="none" points=points />
                    {values
                        .iter()
                        .enumerate()
                        .map(|(i, v)| {
                            let x = i as f64 * step;
                            let y = PLOT_HEIGHT - bar_height(*v, max, PLOT_HEIGHT);
                            view! {
                                <circle class="chart__dot" cx=x cy=y r="3" />
                            }
                        })
                        .collect_view()}
                </g>
                {data
                    .iter()
                    .enumerate()
                    .map(|(i, (label, _))| {
                        let x = MARGIN_LEFT + i as f64 * step;
                        view! {
                            <text
                                class="chart__axis-label"
                                x=x
                                y={MARGIN_TOP + PLOT_HEIGHT + 18.0}
                                text-anchor="middle"
                            >
                                {label.clone()}
                            </text>
                        }
                    })
                    .collect_view()}
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_max_rounds_to_step() {
        assert_eq!(axis_max(&[3.0, 7.0]), 7.0);
        assert_eq!(axis_max(&[12.0]), 20.0);
        assert_eq!(axis_max(&[99.0]), 100.0);
        assert_eq!(axis_max(&[]), 1.0);
        assert_eq!(axis_max(&[0.0, 0.0]), 1.0);
    }

    #[test]
    fn bar_height_scales_and_clamps() {
        assert_eq!(bar_height(5.0, 10.0, 200.0), 100.0);
        assert_eq!(bar_height(0.0, 10.0, 200.0), 0.0);
        assert_eq!(bar_height(20.0, 10.0, 200.0), 200.0);
        assert_eq!(bar_height(5.0, 0.0, 200.0), 0.0);
    }

    #[test]
    fn polyline_spans_plot_box() {
        let pts = polyline_points(&[0.0, 10.0], 10.0, 100.0, 50.0);
        assert_eq!(pts, "0.0,50.0 100.0,0.0");
        assert_eq!(polyline_points(&[], 10.0, 100.0, 50.0), "");
    }
}
