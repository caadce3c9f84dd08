//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::state::prefs::{self, Preferences};
use crate::state::table_view::{CampaignRow, TableState};
use crate::state::theme::Theme;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Dark/light display mode
    pub theme: RwSignal<Theme>,
    /// Selected reporting window for the charts
    pub date_range: RwSignal<DateRange>,
    /// True while the feed's simulated load is pending
    pub loading: RwSignal<bool>,
    /// Monthly revenue series for the trend chart
    pub revenue_series: RwSignal<Vec<RevenuePoint>>,
    /// Weekday traffic series for the bar chart
    pub traffic_series: RwSignal<Vec<TrafficDay>>,
    /// Channel mix for the donut chart
    pub channel_mix: RwSignal<Vec<ChannelSlice>>,
    /// Full campaign row set, produced once per mount
    pub campaign_rows: RwSignal<Vec<CampaignRow>>,
    /// Filter/sort/pagination state of the campaign table
    pub table: RwSignal<TableState>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// One month of the revenue trend.
#[derive(Clone, Debug, PartialEq)]
pub struct RevenuePoint {
    pub month: &'static str,
    pub revenue: u32,
    pub users: u32,
    pub conversions: u32,
}

/// One weekday of the traffic breakdown.
#[derive(Clone, Debug, PartialEq)]
pub struct TrafficDay {
    pub day: &'static str,
    pub organic: u32,
    pub paid: u32,
    pub social: u32,
}

/// One slice of the acquisition channel mix.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelSlice {
    pub name: &'static str,
    /// Percentage share; the mix sums to 100.
    pub share: u32,
    pub color: &'static str,
}

/// Reporting window selectable in the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    #[default]
    Last7Days,
    Last30Days,
    Last90Days,
}

impl DateRange {
    pub const ALL: [DateRange; 3] = [
        DateRange::Last7Days,
        DateRange::Last30Days,
        DateRange::Last90Days,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DateRange::Last7Days => "7d",
            DateRange::Last30Days => "30d",
            DateRange::Last90Days => "90d",
        }
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let Preferences { theme, date_range } = prefs::load();

    let state = GlobalState {
        theme: create_rw_signal(theme),
        date_range: create_rw_signal(date_range),
        loading: create_rw_signal(true),
        revenue_series: create_rw_signal(Vec::new()),
        traffic_series: create_rw_signal(Vec::new()),
        channel_mix: create_rw_signal(Vec::new()),
        campaign_rows: create_rw_signal(Vec::new()),
        table: create_rw_signal(TableState::default()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Flip the theme and persist the choice.
    pub fn toggle_theme(&self) {
        self.theme.update(|theme| *theme = theme.toggled());
        self.persist_prefs();
    }

    /// Select a reporting window and persist the choice.
    pub fn set_date_range(&self, range: DateRange) {
        self.date_range.set(range);
        self.persist_prefs();
    }

    fn persist_prefs(&self) {
        prefs::save(&Preferences {
            theme: self.theme.get_untracked(),
            date_range: self.date_range.get_untracked(),
        });
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
