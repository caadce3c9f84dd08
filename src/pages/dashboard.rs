//! Dashboard Page
//!
//! The single dashboard view: overview cards, charts, and the campaign
//! performance table.

use leptos::*;

use crate::components::{
    CampaignTable, CardSkeleton, ChannelDonut, ChartSkeleton, MetricCard, RevenueChart,
    TableSkeleton, TrafficChart,
};
use crate::export::{self, ExportFormat};
use crate::feed;
use crate::state::global::GlobalState;
use crate::state::table_view::{filter_rows, sort_rows};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;
    let loading = state.loading;

    // Kick off the simulated feed; the pending load is cancelled if the
    // page unmounts first.
    feed::load_dashboard_data(state.clone());

    view! {
        <div class="space-y-8">
            // Page header with export actions
            <div class="flex items-center justify-between">
                <div>
                    <h2 class="text-3xl font-bold">"Overview"</h2>
                    <p class=move || format!("mt-1 {}", theme.get().text_muted())>
                        "Campaign metrics at a glance"
                    </p>
                </div>

                <div class="flex items-center space-x-3">
                    <ExportButton format=ExportFormat::Csv color="bg-blue-600 hover:bg-blue-700" />
                    <ExportButton format=ExportFormat::Pdf color="bg-purple-600 hover:bg-purple-700" />
                </div>
            </div>

            // Key metrics
            <section class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {move || {
                    if loading.get() {
                        (0..4).map(|_| view! { <CardSkeleton /> }).collect_view()
                    } else {
                        view! {
                            <MetricCard title="Total Revenue" value="$428,567" change=12.3 icon="💰" />
                            <MetricCard title="Active Users" value="24,891" change=8.7 icon="👥" />
                            <MetricCard title="Conversions" value="3,247" change={-2.1} icon="🖱️" />
                            <MetricCard title="Growth Rate" value="15.8%" change=5.2 icon="📈" />
                        }.into_view()
                    }
                }}
            </section>

            // Charts
            <section class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                {move || {
                    if loading.get() {
                        view! {
                            <ChartSkeleton />
                            <ChartSkeleton />
                            <div class="lg:col-span-2">
                                <ChartSkeleton />
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <ChartPanel title="Revenue Trend">
                                <RevenueChart />
                            </ChartPanel>
                            <ChartPanel title="Traffic Sources">
                                <ChannelDonut />
                            </ChartPanel>
                            <div class="lg:col-span-2">
                                <ChartPanel title="Weekly Traffic Breakdown">
                                    <TrafficChart />
                                </ChartPanel>
                            </div>
                        }.into_view()
                    }
                }}
            </section>

            // Campaign table
            {move || {
                if loading.get() {
                    view! { <TableSkeleton /> }.into_view()
                } else {
                    view! { <CampaignTable /> }.into_view()
                }
            }}
        </div>
    }
}

/// Titled card wrapping a chart
#[component]
fn ChartPanel(title: &'static str, children: Children) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;

    view! {
        <div class=move || format!("p-6 rounded-2xl {}", theme.get().card())>
            <h3 class="text-xl font-semibold mb-6">{title}</h3>
            {children()}
        </div>
    }
}

/// Export trigger. Serializes the filtered+sorted row set and reports the
/// result; no download is wired up.
#[component]
fn ExportButton(format: ExportFormat, color: &'static str) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_click = move |_| {
        let rows = state.campaign_rows.get_untracked();
        let t = state.table.get_untracked();

        // Export always operates on what the user is looking at: the
        // filtered and sorted set across all pages.
        let filtered = sort_rows(
            filter_rows(&rows, &t.search_term),
            t.sort_field,
            t.sort_direction,
        );
        let payload = export::render(&filtered, format);
        let name = export::filename(format);

        web_sys::console::log_1(
            &format!("export {} ({} bytes)", name, payload.len()).into(),
        );
        state.show_success(&format!(
            "{} export ready ({} campaigns)",
            format.label(),
            filtered.len()
        ));
    };

    view! {
        <button
            on:click=on_click
            class=format!(
                "flex items-center space-x-2 px-4 py-2 {} text-white rounded-xl \
                 transition-colors duration-200",
                color
            )
        >
            <span>"⬇"</span>
            <span>{format!("Export {}", format.label())}</span>
        </button>
    }
}
