//! Navigation Component
//!
//! Header bar with brand, reporting-window selector, and theme toggle.

use leptos::*;

use crate::feed;
use crate::state::global::{DateRange, GlobalState};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;
    let state_for_toggle = state.clone();

    view! {
        <nav class=move || format!(
            "sticky top-0 z-40 border-b backdrop-blur-md {}",
            theme.get().chrome()
        )>
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <div class="flex items-center space-x-3">
                        <div class="w-10 h-10 bg-gradient-to-r from-blue-600 to-purple-600 rounded-xl flex items-center justify-center text-white text-xl">
                            "📊"
                        </div>
                        <div>
                            <span class="text-xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                                "Beacon Insights"
                            </span>
                            <p class=move || format!("text-xs {}", theme.get().text_muted())>
                                "Marketing Analytics"
                            </p>
                        </div>
                    </div>

                    <div class="flex items-center space-x-4">
                        // Reporting window
                        <div class="flex items-center space-x-1 rounded-xl p-1">
                            {DateRange::ALL.into_iter().map(|range| {
                                view! { <RangeButton range=range /> }
                            }).collect_view()}
                        </div>

                        // Theme toggle
                        <button
                            on:click=move |_| state_for_toggle.toggle_theme()
                            class=move || format!(
                                "p-3 rounded-xl transition-all duration-200 {}",
                                theme.get().button_idle()
                            )
                        >
                            {move || if theme.get().is_dark() { "☀️" } else { "🌙" }}
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Reporting-window selection button
#[component]
fn RangeButton(range: DateRange) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;
    let date_range = state.date_range;

    let is_active = create_memo(move |_| date_range.get() == range);

    let state_for_click = state.clone();
    let on_click = move |_| {
        state_for_click.set_date_range(range);
        // New window, new chart series. The campaign rows stay put.
        feed::refresh_chart_series(&state_for_click);
    };

    view! {
        <button
            on:click=on_click
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-all duration-200";
                if is_active.get() {
                    format!("{} bg-blue-600 text-white shadow-lg", base)
                } else {
                    format!("{} {}", base, theme.get().button_idle())
                }
            }
        >
            {range.label()}
        </button>
    }
}
