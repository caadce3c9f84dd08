//! Mock Data Generators
//!
//! In-memory stand-in for a real metrics feed. Every generator draws from an
//! injected uniform-[0,1) source so the browser can pass `Math.random` while
//! tests pass a deterministic sequence.

use crate::state::global::{ChannelSlice, RevenuePoint, TrafficDay};
use crate::state::table_view::{CampaignRow, CampaignStatus};

pub const TABLE_ROW_COUNT: usize = 50;

const CAMPAIGN_NAMES: [&str; 8] = [
    "Summer Sale",
    "Black Friday",
    "Holiday Special",
    "New Year Promo",
    "Spring Launch",
    "Back to School",
    "Winter Collection",
    "Flash Sale",
];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// `lo + floor(u * span)` for a uniform draw `u`.
fn in_range(rng: &mut impl FnMut() -> f64, lo: u32, span: u32) -> u32 {
    lo + (rng() * span as f64) as u32
}

/// The full campaign row set. Ids are assigned from the row index, so they
/// are unique by construction.
pub fn generate_table_rows(rng: &mut impl FnMut() -> f64) -> Vec<CampaignRow> {
    (0..TABLE_ROW_COUNT)
        .map(|i| {
            // A draw of exactly 1.0 would index past the end.
            let name_idx =
                ((rng() * CAMPAIGN_NAMES.len() as f64) as usize).min(CAMPAIGN_NAMES.len() - 1);
            let campaign = CAMPAIGN_NAMES[name_idx];
            CampaignRow {
                id: i as u32 + 1,
                campaign: campaign.to_string(),
                impressions: in_range(rng, 10_000, 100_000),
                clicks: in_range(rng, 500, 5_000),
                conversions: in_range(rng, 20, 200),
                revenue: in_range(rng, 1_000, 10_000),
                ctr: format!("{:.2}", rng() * 5.0 + 1.0),
                status: if rng() > 0.3 {
                    CampaignStatus::Active
                } else {
                    CampaignStatus::Paused
                },
            }
        })
        .collect()
}

/// Twelve months of revenue trend data.
pub fn generate_revenue_series(rng: &mut impl FnMut() -> f64) -> Vec<RevenuePoint> {
    MONTHS
        .iter()
        .map(|month| RevenuePoint {
            month,
            revenue: in_range(rng, 30_000, 50_000),
            users: in_range(rng, 2_000, 5_000),
            conversions: in_range(rng, 200, 500),
        })
        .collect()
}

/// Seven weekdays of traffic split by source.
pub fn generate_traffic_series(rng: &mut impl FnMut() -> f64) -> Vec<TrafficDay> {
    DAYS.iter()
        .map(|day| TrafficDay {
            day,
            organic: in_range(rng, 1_000, 3_000),
            paid: in_range(rng, 500, 2_000),
            social: in_range(rng, 300, 1_500),
        })
        .collect()
}

/// The acquisition channel mix. Fixed shares summing to 100.
pub fn channel_mix() -> Vec<ChannelSlice> {
    vec![
        ChannelSlice { name: "Organic Search", share: 45, color: "#3B82F6" },
        ChannelSlice { name: "Paid Ads", share: 25, color: "#10B981" },
        ChannelSlice { name: "Social Media", share: 15, color: "#F59E0B" },
        ChannelSlice { name: "Direct", share: 10, color: "#EF4444" },
        ChannelSlice { name: "Email", share: 5, color: "#8B5CF6" },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Deterministic uniform source: cycles a fixed fraction list.
    fn stub_rng(values: &[f64]) -> impl FnMut() -> f64 + '_ {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn test_table_rows_have_unique_ids_and_valid_ranges() {
        let mut rng = stub_rng(&[0.0, 0.17, 0.42, 0.58, 0.73, 0.91, 0.999]);
        let rows = generate_table_rows(&mut rng);

        assert_eq!(rows.len(), TABLE_ROW_COUNT);
        let ids: HashSet<u32> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), rows.len());

        for row in &rows {
            assert!(CAMPAIGN_NAMES.contains(&row.campaign.as_str()));
            assert!((10_000..110_000).contains(&row.impressions));
            assert!((500..5_500).contains(&row.clicks));
            assert!((20..220).contains(&row.conversions));
            assert!((1_000..11_000).contains(&row.revenue));
        }
    }

    #[test]
    fn test_ctr_has_two_fraction_digits() {
        let mut rng = stub_rng(&[0.05, 0.5, 0.95]);
        for row in generate_table_rows(&mut rng) {
            let (whole, frac) = row.ctr.split_once('.').expect("decimal point");
            assert!(!whole.is_empty());
            assert_eq!(frac.len(), 2);
            let value: f64 = row.ctr.parse().unwrap();
            assert!((1.0..6.0).contains(&value));
        }
    }

    #[test]
    fn test_status_split_follows_the_source() {
        // Draws at the extremes pin the 0.7/0.3 split direction: a draw
        // above 0.3 is Active.
        let mut always_high = stub_rng(&[0.99]);
        assert!(generate_table_rows(&mut always_high)
            .iter()
            .all(|r| r.status == CampaignStatus::Active));

        let mut always_low = stub_rng(&[0.01]);
        assert!(generate_table_rows(&mut always_low)
            .iter()
            .all(|r| r.status == CampaignStatus::Paused));
    }

    #[test]
    fn test_revenue_series_covers_the_year() {
        let mut rng = stub_rng(&[0.3, 0.6]);
        let series = generate_revenue_series(&mut rng);
        assert_eq!(series.len(), 12);
        assert_eq!(series.first().unwrap().month, "Jan");
        assert_eq!(series.last().unwrap().month, "Dec");
        for point in &series {
            assert!((30_000..80_000).contains(&point.revenue));
            assert!((2_000..7_000).contains(&point.users));
            assert!((200..700).contains(&point.conversions));
        }
    }

    #[test]
    fn test_traffic_series_covers_the_week() {
        let mut rng = stub_rng(&[0.0, 0.999]);
        let series = generate_traffic_series(&mut rng);
        assert_eq!(series.len(), 7);
        for day in &series {
            assert!((1_000..4_000).contains(&day.organic));
            assert!((500..2_500).contains(&day.paid));
            assert!((300..1_800).contains(&day.social));
        }
    }

    #[test]
    fn test_channel_shares_sum_to_100() {
        let mix = channel_mix();
        assert_eq!(mix.len(), 5);
        assert_eq!(mix.iter().map(|c| c.share).sum::<u32>(), 100);
    }
}
