//! Chart Components
//!
//! Draws server-provided chart descriptors on HTML5 Canvas. The descriptor
//! carries a serialized payload which is parsed as JSON immediately before
//! drawing; each supported chart kind has its own renderer behind the
//! `ChartRenderer` trait.

use leptos::*;
use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{Visualization, VizKind};

/// Chart colors for different series
const SERIES_COLORS: [&str; 6] = [
    "#FF9800", // Orange (primary)
    "#4CAF50", // Green
    "#2196F3", // Blue
    "#9C27B0", // Purple
    "#F44336", // Red
    "#00BCD4", // Cyan
];

// Canvas margins
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// Parsed chart payload: category labels plus one or more data series.
///
/// Lenient on purpose; the server owns this shape and missing fields
/// simply fall back to empty.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct ChartPayload {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub data: Vec<f64>,
}

/// Parse the serialized payload from a visualization descriptor
pub fn parse_payload(raw: &str) -> Result<ChartPayload, String> {
    serde_json::from_str(raw).map_err(|e| format!("Invalid chart data: {}", e))
}

/// One chart panel: title plus the drawn canvas, or a placeholder when the
/// payload is malformed or the chart kind is unsupported.
#[component]
pub fn ChartPanel(viz: Visualization) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // The descriptor is immutable, so parse once up front
    let parsed = parse_payload(&viz.data);
    if let Err(e) = &parsed {
        web_sys::console::error_1(&format!("Failed to parse chart payload: {}", e).into());
    }
    let kind = viz.kind;
    let payload_for_draw = parsed.clone().ok();
    let legend = parsed
        .as_ref()
        .map(|p| legend_entries(kind, p))
        .unwrap_or_default();

    // Draw once the canvas is mounted
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            if let (Some(payload), Some(renderer)) = (&payload_for_draw, renderer_for(kind)) {
                draw(&canvas, renderer, payload);
            }
        }
    });

    let body = match (&parsed, renderer_for(kind)) {
        (Ok(_), Some(_)) => view! {
            <canvas
                node_ref=canvas_ref
                width="400"
                height="260"
                class="w-full rounded-lg"
            />
        }
        .into_view(),
        (Ok(_), None) => view! {
            <div class="h-40 flex items-center justify-center text-gray-400 text-sm">
                "Unsupported chart type"
            </div>
        }
        .into_view(),
        (Err(e), _) => view! {
            <div class="h-40 flex items-center justify-center text-red-400 text-sm">
                {e.clone()}
            </div>
        }
        .into_view(),
    };

    view! {
        <div class="rounded-lg border border-gray-700 bg-gray-800 p-4 shadow-sm">
            <h3 class="font-medium mb-2">{viz.title}</h3>
            {body}

            // Legend
            <div class="flex justify-center flex-wrap gap-4 mt-3">
                {legend
                    .into_iter()
                    .map(|(color, label)| view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", color)
                            />
                            <span class="text-sm text-gray-400">{label}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

// ============ Renderers ============

/// One drawing strategy per supported chart kind
trait ChartRenderer {
    fn draw(&self, ctx: &CanvasRenderingContext2d, width: f64, height: f64, payload: &ChartPayload);
}

struct LineRenderer;
struct BarRenderer;
struct PieRenderer;

/// Select the renderer for a chart kind; unknown kinds draw nothing
fn renderer_for(kind: VizKind) -> Option<&'static dyn ChartRenderer> {
    match kind {
        VizKind::Line => Some(&LineRenderer),
        VizKind::Bar => Some(&BarRenderer),
        VizKind::Pie => Some(&PieRenderer),
        VizKind::Other => None,
    }
}

/// Legend entries (color, label) for a payload
pub fn legend_entries(kind: VizKind, payload: &ChartPayload) -> Vec<(String, String)> {
    match kind {
        // Pie slices are keyed by category label
        VizKind::Pie => payload
            .labels
            .iter()
            .enumerate()
            .map(|(idx, label)| {
                (
                    SERIES_COLORS[idx % SERIES_COLORS.len()].to_string(),
                    label.clone(),
                )
            })
            .collect(),
        VizKind::Line | VizKind::Bar => payload
            .datasets
            .iter()
            .enumerate()
            .filter(|(_, ds)| !ds.label.is_empty())
            .map(|(idx, ds)| {
                (
                    SERIES_COLORS[idx % SERIES_COLORS.len()].to_string(),
                    ds.label.clone(),
                )
            })
            .collect(),
        VizKind::Other => Vec::new(),
    }
}

fn draw(canvas: &HtmlCanvasElement, renderer: &dyn ChartRenderer, payload: &ChartPayload) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if payload.datasets.iter().all(|ds| ds.data.is_empty()) {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 25.0, height / 2.0);
        return;
    }

    renderer.draw(&ctx, width, height, payload);
}

/// Y-axis bounds across all series, padded so lines do not hug the frame
pub fn value_bounds(payload: &ChartPayload) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for dataset in &payload.datasets {
        for &value in &dataset.data {
            min = min.min(value);
            max = max.max(value);
        }
    }

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    // Add padding to y range
    let range = max - min;
    let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
    (min - padding, max + padding)
}

/// Normalized pie slice angles in radians, starting at 12 o'clock.
/// Non-positive values are skipped.
pub fn pie_slices(data: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = data.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut slices = Vec::new();
    let mut angle = -PI / 2.0;
    for &value in data {
        if value <= 0.0 {
            continue;
        }
        let sweep = value / total * 2.0 * PI;
        slices.push((angle, angle + sweep));
        angle += sweep;
    }
    slices
}

/// Draw the horizontal grid plus y-axis labels; returns the plot area
fn draw_grid(
    ctx: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
    min: f64,
    max: f64,
) -> (f64, f64) {
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);

    // Horizontal grid lines (5 lines)
    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        // Y-axis labels
        let value = max - (i as f64 / 5.0) * (max - min);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("11px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    (chart_width, chart_height)
}

/// Draw up to six evenly sampled category labels along the x axis
fn draw_category_labels(
    ctx: &CanvasRenderingContext2d,
    labels: &[String],
    height: f64,
    chart_width: f64,
) {
    if labels.is_empty() {
        return;
    }

    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("11px sans-serif");

    let step = (labels.len() / 6).max(1);
    for (i, label) in labels.iter().enumerate().step_by(step) {
        let x = if labels.len() > 1 {
            MARGIN_LEFT + (i as f64 / (labels.len() - 1) as f64) * chart_width
        } else {
            MARGIN_LEFT + chart_width / 2.0
        };
        let short: String = label.chars().take(8).collect();
        let _ = ctx.fill_text(&short, x - 12.0, height - 10.0);
    }
}

impl ChartRenderer for LineRenderer {
    fn draw(
        &self,
        ctx: &CanvasRenderingContext2d,
        width: f64,
        height: f64,
        payload: &ChartPayload,
    ) {
        let (min, max) = value_bounds(payload);
        let (chart_width, chart_height) = draw_grid(ctx, width, height, min, max);

        for (idx, dataset) in payload.datasets.iter().enumerate() {
            if dataset.data.is_empty() {
                continue;
            }

            let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
            ctx.set_stroke_style(&color.into());
            ctx.set_line_width(2.0);
            ctx.begin_path();

            let n = dataset.data.len();
            for (i, &value) in dataset.data.iter().enumerate() {
                let x = if n > 1 {
                    MARGIN_LEFT + (i as f64 / (n - 1) as f64) * chart_width
                } else {
                    MARGIN_LEFT + chart_width / 2.0
                };
                // Canvas y grows downward
                let y = MARGIN_TOP + ((max - value) / (max - min)) * chart_height;

                if i == 0 {
                    ctx.move_to(x, y);
                } else {
                    ctx.line_to(x, y);
                }
            }
            ctx.stroke();

            // Draw points
            ctx.set_fill_style(&color.into());
            for (i, &value) in dataset.data.iter().enumerate() {
                let x = if n > 1 {
                    MARGIN_LEFT + (i as f64 / (n - 1) as f64) * chart_width
                } else {
                    MARGIN_LEFT + chart_width / 2.0
                };
                let y = MARGIN_TOP + ((max - value) / (max - min)) * chart_height;

                ctx.begin_path();
                let _ = ctx.arc(x, y, 3.0, 0.0, PI * 2.0);
                ctx.fill();
            }
        }

        draw_category_labels(ctx, &payload.labels, height, chart_width);
    }
}

impl ChartRenderer for BarRenderer {
    fn draw(
        &self,
        ctx: &CanvasRenderingContext2d,
        width: f64,
        height: f64,
        payload: &ChartPayload,
    ) {
        // Bars grow from zero
        let (_, raw_max) = value_bounds(payload);
        let max = raw_max.max(0.0);
        let min = 0.0;
        let (chart_width, chart_height) = draw_grid(ctx, width, height, min, max);

        let groups = payload
            .datasets
            .iter()
            .map(|ds| ds.data.len())
            .max()
            .unwrap_or(0);
        if groups == 0 {
            return;
        }

        let group_width = chart_width / groups as f64;
        let bar_width = group_width * 0.8 / payload.datasets.len().max(1) as f64;

        for (idx, dataset) in payload.datasets.iter().enumerate() {
            let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
            ctx.set_fill_style(&color.into());

            for (i, &value) in dataset.data.iter().enumerate() {
                let clamped = value.max(0.0);
                let bar_height = (clamped - min) / (max - min) * chart_height;
                let x = MARGIN_LEFT
                    + i as f64 * group_width
                    + group_width * 0.1
                    + idx as f64 * bar_width;
                let y = MARGIN_TOP + chart_height - bar_height;

                ctx.fill_rect(x, y, bar_width, bar_height);
            }
        }

        draw_category_labels(ctx, &payload.labels, height, chart_width);
    }
}

impl ChartRenderer for PieRenderer {
    fn draw(
        &self,
        ctx: &CanvasRenderingContext2d,
        width: f64,
        height: f64,
        payload: &ChartPayload,
    ) {
        // Pie takes the first series only
        let data = match payload.datasets.first() {
            Some(ds) => &ds.data,
            None => return,
        };

        let cx = width / 2.0;
        let cy = height / 2.0;
        let radius = (width.min(height) / 2.0 - 20.0).max(10.0);

        for (idx, (start, end)) in pie_slices(data).into_iter().enumerate() {
            let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
            ctx.set_fill_style(&color.into());
            ctx.begin_path();
            ctx.move_to(cx, cy);
            let _ = ctx.arc(cx, cy, radius, start, end);
            ctx.close_path();
            ctx.fill();

            // Slice separator
            ctx.set_stroke_style(&"#1f2937".into());
            ctx.set_line_width(2.0);
            ctx.stroke();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload_full_shape() {
        let raw = r#"{
            "labels": ["Jan", "Feb"],
            "datasets": [{"label": "sales", "data": [1.0, 2.5]}]
        }"#;
        let payload = parse_payload(raw).unwrap();
        assert_eq!(payload.labels, vec!["Jan", "Feb"]);
        assert_eq!(payload.datasets.len(), 1);
        assert_eq!(payload.datasets[0].data, vec![1.0, 2.5]);
    }

    #[test]
    fn test_parse_payload_defaults_missing_fields() {
        let payload = parse_payload("{}").unwrap();
        assert!(payload.labels.is_empty());
        assert!(payload.datasets.is_empty());
    }

    #[test]
    fn test_parse_payload_rejects_malformed_json() {
        let err = parse_payload("not json").unwrap_err();
        assert!(err.starts_with("Invalid chart data"));
    }

    #[test]
    fn test_value_bounds_pads_range() {
        let payload = ChartPayload {
            labels: vec![],
            datasets: vec![Dataset {
                label: String::new(),
                data: vec![10.0, 20.0],
            }],
        };
        let (min, max) = value_bounds(&payload);
        assert!(min < 10.0);
        assert!(max > 20.0);
    }

    #[test]
    fn test_value_bounds_handles_flat_and_empty_series() {
        let flat = ChartPayload {
            labels: vec![],
            datasets: vec![Dataset {
                label: String::new(),
                data: vec![5.0, 5.0],
            }],
        };
        let (min, max) = value_bounds(&flat);
        assert!(min < max);

        let empty = ChartPayload::default();
        assert_eq!(value_bounds(&empty), (0.0, 1.0));
    }

    #[test]
    fn test_pie_slices_cover_full_circle() {
        let slices = pie_slices(&[1.0, 1.0, 2.0]);
        assert_eq!(slices.len(), 3);
        let total: f64 = slices.iter().map(|(s, e)| e - s).sum();
        assert!((total - 2.0 * PI).abs() < 1e-9);
        // Contiguous
        assert!((slices[0].1 - slices[1].0).abs() < 1e-9);
    }

    #[test]
    fn test_pie_slices_skip_non_positive_values() {
        assert_eq!(pie_slices(&[0.0, -1.0]).len(), 0);
        assert_eq!(pie_slices(&[0.0, 3.0]).len(), 1);
    }

    #[test]
    fn test_legend_entries_by_kind() {
        let payload = ChartPayload {
            labels: vec!["a".into(), "b".into()],
            datasets: vec![Dataset {
                label: "series".into(),
                data: vec![1.0, 2.0],
            }],
        };

        let pie = legend_entries(VizKind::Pie, &payload);
        assert_eq!(pie.len(), 2);
        assert_eq!(pie[0].1, "a");

        let line = legend_entries(VizKind::Line, &payload);
        assert_eq!(line.len(), 1);
        assert_eq!(line[0].1, "series");

        assert!(legend_entries(VizKind::Other, &payload).is_empty());
    }
}
