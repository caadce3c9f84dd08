//! Chart Components
//!
//! Canvas-rendered charts: monthly revenue trend, weekly traffic breakdown,
//! and the acquisition channel donut. Each redraws through an effect when
//! its data or the theme changes.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{ChannelSlice, GlobalState, RevenuePoint, TrafficDay};
use crate::state::theme::Theme;

const REVENUE_COLOR: &str = "#3B82F6";
const REVENUE_FILL: &str = "rgba(59, 130, 246, 0.25)";

const TRAFFIC_SERIES: [(&str, &str); 3] = [
    ("Organic", "#3B82F6"),
    ("Paid", "#10B981"),
    ("Social", "#F59E0B"),
];

/// Monthly revenue trend (area chart)
#[component]
pub fn RevenueChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let series = state_for_effect.revenue_series.get();
        let theme = state_for_effect.theme.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_revenue(&canvas, &series, theme);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="400"
            class="w-full h-64 rounded-lg"
        />
    }
}

/// Weekly traffic breakdown (grouped bars)
#[component]
pub fn TrafficChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let series = state_for_effect.traffic_series.get();
        let theme = state_for_effect.theme.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_traffic(&canvas, &series, theme);
        }
    });

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                width="1200"
                height="400"
                class="w-full h-72 rounded-lg"
            />

            // Legend
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {TRAFFIC_SERIES.into_iter().map(|(name, color)| {
                    view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", color)
                            />
                            <span class=move || format!("text-sm {}", state.theme.get().text_muted())>
                                {name}
                            </span>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Acquisition channel mix (donut with side legend)
#[component]
pub fn ChannelDonut() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let mix = state_for_effect.channel_mix.get();
        let theme = state_for_effect.theme.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_donut(&canvas, &mix, theme);
        }
    });

    let state_for_legend = state.clone();

    view! {
        <div class="flex flex-col lg:flex-row items-center gap-6">
            <canvas
                node_ref=canvas_ref
                width="400"
                height="300"
                class="w-full lg:w-1/2 h-56 rounded-lg"
            />

            <div class="w-full lg:w-1/2 space-y-3">
                {move || {
                    state_for_legend.channel_mix.get().into_iter().map(|channel| {
                        view! {
                            <div class="flex items-center justify-between">
                                <div class="flex items-center space-x-3">
                                    <div
                                        class="w-4 h-4 rounded-full"
                                        style=format!("background-color: {}", channel.color)
                                    />
                                    <span class="font-medium">{channel.name}</span>
                                </div>
                                <span class="font-bold">{format!("{}%", channel.share)}</span>
                            </div>
                        }
                    }).collect_view()
                }}
            </div>
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Abbreviate axis values: 45000 -> "45k".
fn format_axis(value: f64) -> String {
    if value >= 1_000.0 {
        format!("{:.0}k", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}

/// Clear the canvas and draw the horizontal grid with y-axis labels.
/// Returns the chart area as (left, top, width, height).
fn draw_grid(
    ctx: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    theme: Theme,
    y_min: f64,
    y_max: f64,
) -> (f64, f64, f64, f64) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&theme.canvas_bg().into());
    ctx.fill_rect(0.0, 0.0, width, height);

    // Horizontal grid lines (5 bands)
    ctx.set_stroke_style(&theme.grid_line().into());
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * (y_max - y_min);
        ctx.set_fill_style(&theme.axis_label().into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format_axis(value), 5.0, y + 4.0);
    }

    (margin_left, margin_top, chart_width, chart_height)
}

fn draw_empty_notice(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement, theme: Theme) {
    ctx.set_fill_style(&theme.canvas_bg().into());
    ctx.fill_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    ctx.set_fill_style(&theme.axis_label().into());
    ctx.set_font("16px sans-serif");
    let _ = ctx.fill_text(
        "No data",
        canvas.width() as f64 / 2.0 - 30.0,
        canvas.height() as f64 / 2.0,
    );
}

fn draw_revenue(canvas: &HtmlCanvasElement, series: &[RevenuePoint], theme: Theme) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };
    if series.is_empty() {
        draw_empty_notice(&ctx, canvas, theme);
        return;
    }

    let y_max = series.iter().map(|p| p.revenue).max().unwrap_or(0) as f64 * 1.1;
    let y_min = 0.0;

    let (left, top, cw, ch) = draw_grid(&ctx, canvas, theme, y_min, y_max);

    let x_of = |i: usize| left + (i as f64 / (series.len() - 1).max(1) as f64) * cw;
    let y_of = |v: f64| top + ((y_max - v) / (y_max - y_min)) * ch;

    // Filled area under the line
    ctx.set_fill_style(&REVENUE_FILL.into());
    ctx.begin_path();
    ctx.move_to(x_of(0), y_of(series[0].revenue as f64));
    for (i, point) in series.iter().enumerate().skip(1) {
        ctx.line_to(x_of(i), y_of(point.revenue as f64));
    }
    ctx.line_to(x_of(series.len() - 1), top + ch);
    ctx.line_to(x_of(0), top + ch);
    ctx.close_path();
    ctx.fill();

    // Line
    ctx.set_stroke_style(&REVENUE_COLOR.into());
    ctx.set_line_width(3.0);
    ctx.begin_path();
    for (i, point) in series.iter().enumerate() {
        let x = x_of(i);
        let y = y_of(point.revenue as f64);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Point markers
    ctx.set_fill_style(&REVENUE_COLOR.into());
    for (i, point) in series.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(
            x_of(i),
            y_of(point.revenue as f64),
            3.0,
            0.0,
            std::f64::consts::PI * 2.0,
        );
        ctx.fill();
    }

    // Month labels
    ctx.set_fill_style(&theme.axis_label().into());
    ctx.set_font("12px sans-serif");
    for (i, point) in series.iter().enumerate() {
        let _ = ctx.fill_text(point.month, x_of(i) - 10.0, top + ch + 20.0);
    }
}

fn draw_traffic(canvas: &HtmlCanvasElement, series: &[TrafficDay], theme: Theme) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };
    if series.is_empty() {
        draw_empty_notice(&ctx, canvas, theme);
        return;
    }

    let day_max = series
        .iter()
        .map(|d| d.organic.max(d.paid).max(d.social))
        .max()
        .unwrap_or(0) as f64;
    let y_max = day_max * 1.1;

    let (left, top, cw, ch) = draw_grid(&ctx, canvas, theme, 0.0, y_max);

    let group_width = cw / series.len() as f64;
    let bar_width = group_width / 4.0;

    for (i, day) in series.iter().enumerate() {
        let group_left = left + i as f64 * group_width + group_width / 8.0;
        let values = [day.organic, day.paid, day.social];

        for (j, (value, (_, color))) in values.iter().zip(TRAFFIC_SERIES).enumerate() {
            let bar_height = (*value as f64 / y_max) * ch;
            ctx.set_fill_style(&color.into());
            ctx.fill_rect(
                group_left + j as f64 * bar_width,
                top + ch - bar_height,
                bar_width * 0.85,
                bar_height,
            );
        }

        // Day labels under each group
        ctx.set_fill_style(&theme.axis_label().into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(
            day.day,
            group_left + group_width / 4.0,
            top + ch + 20.0,
        );
    }
}

fn draw_donut(canvas: &HtmlCanvasElement, mix: &[ChannelSlice], theme: Theme) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };
    if mix.is_empty() {
        draw_empty_notice(&ctx, canvas, theme);
        return;
    }

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style(&theme.canvas_bg().into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let cx = width / 2.0;
    let cy = height / 2.0;
    let outer = (width.min(height) / 2.0) - 10.0;
    let inner = outer * 0.6;

    let total: u32 = mix.iter().map(|c| c.share).sum();
    let mut angle = -std::f64::consts::FRAC_PI_2;

    for slice in mix {
        let sweep = slice.share as f64 / total.max(1) as f64 * std::f64::consts::PI * 2.0;
        let end = angle + sweep;

        ctx.set_fill_style(&slice.color.into());
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, outer, angle, end);
        let _ = ctx.arc_with_anticlockwise(cx, cy, inner, end, angle, true);
        ctx.close_path();
        ctx.fill();

        angle = end;
    }
}
