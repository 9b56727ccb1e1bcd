//! Chart Component
//!
//! Rows-per-column bar chart using HTML5 Canvas.

use csvdash::ColumnCount;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const BAR_COLOR: &str = "#3b82f6"; // blue-500
const GRID_COLOR: &str = "#e5e7eb"; // gray-200
const LABEL_COLOR: &str = "#6b7280"; // gray-500

/// Bar chart of column counts, in backend order
#[component]
pub fn ColumnChart(counts: Vec<ColumnCount>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Draw once the canvas is mounted
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &counts);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="300"
            class="w-full h-72"
        />
    }
}

/// Draw the chart on canvas
fn draw_bars(canvas: &HtmlCanvasElement, counts: &[ColumnCount]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.clear_rect(0.0, 0.0, width, height);

    if counts.is_empty() {
        ctx.set_fill_style(&LABEL_COLOR.into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No columns", width / 2.0 - 40.0, height / 2.0);
        return;
    }

    let max = counts.iter().map(|c| c.total_rows).max().unwrap_or(0).max(1) as f64;

    // Horizontal grid lines with y-axis labels
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.set_stroke_style(&GRID_COLOR.into());
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max - (i as f64 / 5.0) * max;
        ctx.set_fill_style(&LABEL_COLOR.into());
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    let slot = chart_width / counts.len() as f64;
    let bar_width = slot * 0.7;

    for (i, count) in counts.iter().enumerate() {
        let x = margin_left + i as f64 * slot + (slot - bar_width) / 2.0;
        let bar_height = (count.total_rows.max(0) as f64 / max) * chart_height;

        ctx.set_fill_style(&BAR_COLOR.into());
        ctx.fill_rect(x, margin_top + chart_height - bar_height, bar_width, bar_height);

        ctx.set_fill_style(&LABEL_COLOR.into());
        let _ = ctx.fill_text(&count.column_name, x, height - 10.0);
    }
}
