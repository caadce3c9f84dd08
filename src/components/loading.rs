//! Loading Component
//!
//! Skeleton states shown while the feed's simulated load is pending.

use leptos::*;

use crate::state::global::GlobalState;

/// Skeleton loader for metric cards
#[component]
pub fn CardSkeleton() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class=move || format!("rounded-2xl p-6 animate-pulse {}", state.theme.get().card())>
            <div class=move || format!("h-4 rounded w-1/3 mb-4 {}", state.theme.get().skeleton()) />
            <div class=move || format!("h-8 rounded w-1/2 mb-2 {}", state.theme.get().skeleton()) />
            <div class=move || format!("h-4 rounded w-2/3 {}", state.theme.get().skeleton()) />
        </div>
    }
}

/// Skeleton loader for chart panels
#[component]
pub fn ChartSkeleton() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class=move || format!("rounded-2xl p-6 animate-pulse {}", state.theme.get().card())>
            <div class=move || format!("h-6 rounded w-1/4 mb-4 {}", state.theme.get().skeleton()) />
            <div class=move || format!("h-64 rounded {}", state.theme.get().skeleton()) />
        </div>
    }
}

/// Skeleton loader for the campaign table
#[component]
pub fn TableSkeleton(
    #[prop(default = 6)]
    rows: usize,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class=move || format!("rounded-2xl p-6 animate-pulse space-y-3 {}", state.theme.get().card())>
            <div class=move || format!("h-6 rounded w-1/4 mb-2 {}", state.theme.get().skeleton()) />
            {(0..rows).map(|_| view! {
                <div class=move || format!("h-10 rounded {}", state.theme.get().skeleton()) />
            }).collect_view()}
        </div>
    }
}
