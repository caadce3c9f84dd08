//! Metric Card Component
//!
//! Headline metric with value and period-over-period change badge.

use leptos::*;

use crate::state::global::GlobalState;

/// Metric card component
#[component]
pub fn MetricCard(
    /// Metric title shown under the value
    title: &'static str,
    /// Pre-formatted display value
    value: &'static str,
    /// Signed percent change vs the previous period
    change: f64,
    /// Decorative icon glyph
    icon: &'static str,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let positive = change > 0.0;

    let (arrow, badge_class) = if positive {
        ("↑", "bg-green-100 text-green-800")
    } else {
        ("↓", "bg-red-100 text-red-800")
    };

    view! {
        <div class=move || format!(
            "p-6 rounded-2xl transition-all duration-300 hover:shadow-xl {}",
            state.theme.get().card()
        )>
            <div class="flex items-center justify-between mb-4">
                <div class=move || {
                    if state.theme.get().is_dark() {
                        "p-3 rounded-xl bg-blue-900/50 text-xl"
                    } else {
                        "p-3 rounded-xl bg-blue-50 text-xl"
                    }
                }>
                    {icon}
                </div>
                <div class=format!(
                    "flex items-center space-x-1 px-3 py-1 rounded-full text-sm font-medium {}",
                    badge_class
                )>
                    <span>{arrow}</span>
                    <span>{format!("{:.1}%", change.abs())}</span>
                </div>
            </div>

            <div class="text-2xl font-bold mb-1">{value}</div>
            <div class=move || format!("text-sm {}", state.theme.get().text_muted())>{title}</div>
        </div>
    }
}
