//! Chart Component
//!
//! Daily time-series line chart using HTML5 Canvas.

use chrono::{Duration, NaiveDate};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use ledgerview::view::{ChartData, ChartOptions};

use crate::state::use_table_state;

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 60.0;

/// Upper bound on x-axis labels so dates don't overlap
const MAX_X_TICKS: usize = 8;

/// Line chart of the selected customer's daily totals
#[component]
pub fn TransactionChart() -> impl IntoView {
    let state = use_table_state();
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the aggregate changes
    create_effect(move |_| {
        let data = state.chart_data.get();

        if let Some(canvas) = canvas_ref.get() {
            state
                .chart_options
                .with_value(|options| draw_chart(&canvas, &data, options));
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
            />
            <ChartLegend />
        </div>
    }
}

/// Legend showing the series colour and label
#[component]
fn ChartLegend() -> impl IntoView {
    let state = use_table_state();

    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {move || {
                state.chart_data.with(|data| {
                    data.datasets
                        .iter()
                        .map(|series| {
                            view! {
                                <div class="flex items-center space-x-2">
                                    <div
                                        class="w-3 h-3 rounded-full"
                                        style=format!("background-color: {}", series.border_color)
                                    />
                                    <span class="text-sm text-gray-300">{series.label.clone()}</span>
                                </div>
                            }
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}

/// Y-axis bounds over the finite values, padded by 10%
pub(crate) fn value_bounds(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for v in values.iter().filter(|v| v.is_finite()) {
        min = min.min(*v);
        max = max.max(*v);
    }

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let range = max - min;
    let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
    (min - padding, max + padding)
}

/// Horizontal position of `date` as a fraction of the [start, end] span.
///
/// A single-day span puts everything in the middle.
pub(crate) fn day_fraction(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> f64 {
    let span = (end - start).num_days();
    if span <= 0 {
        return 0.5;
    }
    (date - start).num_days() as f64 / span as f64
}

/// Day-granular tick dates from `start` to `end`, at most `max_ticks` of them
pub(crate) fn day_ticks(start: NaiveDate, end: NaiveDate, max_ticks: usize) -> Vec<NaiveDate> {
    let span = (end - start).num_days().max(0) as usize;
    let max_ticks = max_ticks.max(1);
    let step = ((span + max_ticks) / max_ticks).max(1);

    let mut ticks = Vec::new();
    let mut day = start;
    while day <= end && ticks.len() < max_ticks + 1 {
        ticks.push(day);
        day += Duration::days(step as i64);
    }
    ticks
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, data: &ChartData, options: &ChartOptions) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let points: Vec<(NaiveDate, f64)> = data
        .points()
        .into_iter()
        .filter(|(_, v)| v.is_finite())
        .collect();

    // Axis titles
    ctx.set_fill_style(&"#9ca3af".into()); // gray-400
    ctx.set_font("13px sans-serif");
    let x_title = &options.scales.x.title;
    if x_title.display {
        let _ = ctx.fill_text(&x_title.text, MARGIN_LEFT + chart_width / 2.0 - 15.0, height - 8.0);
    }
    let y_title = &options.scales.y.title;
    if y_title.display {
        ctx.save();
        let _ = ctx.translate(14.0, MARGIN_TOP + chart_height / 2.0 + 50.0);
        let _ = ctx.rotate(-std::f64::consts::FRAC_PI_2);
        let _ = ctx.fill_text(&y_title.text, 0.0, 0.0);
        ctx.restore();
    }

    let (Some(&(start, _)), Some(&(end, _))) = (points.first(), points.last()) else {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No transactions to chart", width / 2.0 - 90.0, height / 2.0);
        return;
    };

    let values: Vec<f64> = points.iter().map(|(_, v)| *v).collect();
    let (y_min, y_max) = value_bounds(&values);

    let x_of = |date: NaiveDate| MARGIN_LEFT + day_fraction(date, start, end) * chart_width;
    let y_of = |value: f64| MARGIN_TOP + ((y_max - value) / (y_max - y_min)) * chart_height;

    // Horizontal grid lines (5 lines)
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");

    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * (y_max - y_min);
        ctx.set_fill_style(&"#9ca3af".into());
        let _ = ctx.fill_text(&format!("{:.1}", value), 26.0, y + 4.0);
    }

    // Day ticks
    for day in day_ticks(start, end, MAX_X_TICKS) {
        let x = x_of(day);
        ctx.set_fill_style(&"#9ca3af".into());
        let _ = ctx.fill_text(&day.format("%b %-d").to_string(), x - 18.0, height - MARGIN_BOTTOM + 18.0);
    }

    let Some(series) = data.datasets.first() else {
        return;
    };

    // Line
    ctx.set_stroke_style(&series.border_color.as_str().into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, (date, value)) in points.iter().enumerate() {
        let (x, y) = (x_of(*date), y_of(*value));
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Points
    for (date, value) in &points {
        let (x, y) = (x_of(*date), y_of(*value));
        ctx.begin_path();
        let _ = ctx.arc(x, y, 4.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.set_fill_style(&series.background_color.as_str().into());
        ctx.fill();
        ctx.set_stroke_style(&series.border_color.as_str().into());
        ctx.stroke();
    }
}
