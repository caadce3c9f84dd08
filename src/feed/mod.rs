//! Metrics Feed
//!
//! Data boundary of the dashboard. The mock feed fills the global state
//! behind a short one-shot timer that simulates a network fetch; a real
//! client would slot in behind the same two functions.

pub mod mock;

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::state::global::GlobalState;

/// Simulated fetch latency.
const LOAD_DELAY_MS: u32 = 1_500;

/// Populate the dashboard after the simulated load delay.
///
/// Must be called during component setup: the pending timeout is dropped
/// (and thereby cancelled) through `on_cleanup` if the view unmounts before
/// it fires, so a torn-down dashboard is never written to.
pub fn load_dashboard_data(state: GlobalState) {
    state.loading.set(true);

    let timeout = Timeout::new(LOAD_DELAY_MS, move || {
        let mut rng = js_random();
        state.revenue_series.set(mock::generate_revenue_series(&mut rng));
        state.traffic_series.set(mock::generate_traffic_series(&mut rng));
        state.channel_mix.set(mock::channel_mix());
        state.campaign_rows.set(mock::generate_table_rows(&mut rng));
        state.loading.set(false);
    });

    on_cleanup(move || drop(timeout));
}

/// Regenerate the chart series for a new reporting window. The campaign row
/// set is produced once per mount and stays untouched.
pub fn refresh_chart_series(state: &GlobalState) {
    let mut rng = js_random();
    state.revenue_series.set(mock::generate_revenue_series(&mut rng));
    state.traffic_series.set(mock::generate_traffic_series(&mut rng));
}

fn js_random() -> impl FnMut() -> f64 {
    js_sys::Math::random
}
