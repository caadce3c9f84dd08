//! Campaign Table View
//!
//! Pure filter/sort/paginate logic for the campaign performance table.
//! Every derived view is recomputed from the full row set and the current
//! `TableState`; rows themselves are never mutated.

use std::cmp::Ordering;

/// Rows shown per table page.
pub const PAGE_SIZE: usize = 10;

/// Lifecycle status of a campaign.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CampaignStatus {
    Active,
    Paused,
}

impl CampaignStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "Active",
            CampaignStatus::Paused => "Paused",
        }
    }
}

/// One campaign performance record.
///
/// `ctr` is carried as a pre-formatted two-fraction-digit string supplied by
/// the feed; it is not derived from `clicks / impressions`, so the two can
/// disagree. A non-mock feed should compute it instead.
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignRow {
    pub id: u32,
    pub campaign: String,
    pub impressions: u32,
    pub clicks: u32,
    pub conversions: u32,
    pub revenue: u32,
    pub ctr: String,
    pub status: CampaignStatus,
}

/// Sortable table column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Campaign,
    Impressions,
    Clicks,
    Conversions,
    Revenue,
    Ctr,
    Status,
}

impl SortField {
    /// Column order as rendered in the table header.
    pub const COLUMNS: [SortField; 7] = [
        SortField::Campaign,
        SortField::Impressions,
        SortField::Clicks,
        SortField::Conversions,
        SortField::Revenue,
        SortField::Ctr,
        SortField::Status,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortField::Campaign => "Campaign",
            SortField::Impressions => "Impressions",
            SortField::Clicks => "Clicks",
            SortField::Conversions => "Conversions",
            SortField::Revenue => "Revenue",
            SortField::Ctr => "CTR",
            SortField::Status => "Status",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Transient view state driving the table.
#[derive(Clone, Debug, PartialEq)]
pub struct TableState {
    pub search_term: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    /// 1-based page index.
    pub current_page: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort_field: SortField::Campaign,
            sort_direction: SortDirection::Asc,
            current_page: 1,
        }
    }
}

impl TableState {
    /// Header click: the active column flips direction, a new column sorts
    /// ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Asc;
        }
    }

    /// Replace the filter. Shrinking the filtered set can strand the current
    /// page past the end, so every edit returns to page 1.
    pub fn set_search(&mut self, term: String) {
        self.search_term = term;
        self.current_page = 1;
    }

    /// Navigate to `page`, clamped into `[1, max(total_pages, 1)]`.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        self.current_page = page.clamp(1, total_pages.max(1));
    }
}

/// Rows whose campaign name contains `term` as a case-insensitive substring.
/// An empty term retains everything.
pub fn filter_rows(rows: &[CampaignRow], term: &str) -> Vec<CampaignRow> {
    if term.is_empty() {
        return rows.to_vec();
    }
    let needle = term.to_lowercase();
    rows.iter()
        .filter(|row| row.campaign.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Case-insensitive ordering with a code-point tiebreak, so distinct
/// spellings order deterministically while equal strings stay equal.
fn compare_text(a: &str, b: &str) -> Ordering {
    match a.to_lowercase().cmp(&b.to_lowercase()) {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}

fn compare_by(a: &CampaignRow, b: &CampaignRow, field: SortField) -> Ordering {
    match field {
        SortField::Campaign => compare_text(&a.campaign, &b.campaign),
        SortField::Impressions => a.impressions.cmp(&b.impressions),
        SortField::Clicks => a.clicks.cmp(&b.clicks),
        SortField::Conversions => a.conversions.cmp(&b.conversions),
        SortField::Revenue => a.revenue.cmp(&b.revenue),
        SortField::Ctr => compare_text(&a.ctr, &b.ctr),
        SortField::Status => compare_text(a.status.label(), b.status.label()),
    }
}

/// Stable sort by `field`. Descending reverses the comparison result, not
/// the sequence, so equal-key rows keep their filtered-order positions.
pub fn sort_rows(
    mut rows: Vec<CampaignRow>,
    field: SortField,
    direction: SortDirection,
) -> Vec<CampaignRow> {
    rows.sort_by(|a, b| {
        let ord = compare_by(a, b, field);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    rows
}

/// Pagination metadata for the "Showing X to Y of Z" readout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageInfo {
    pub total_pages: usize,
    /// 1-based index of the first displayed row.
    pub first: usize,
    /// 1-based index of the last displayed row.
    pub last: usize,
    pub filtered_count: usize,
}

pub fn page_info(filtered_count: usize, current_page: usize) -> PageInfo {
    PageInfo {
        total_pages: filtered_count.div_ceil(PAGE_SIZE),
        first: (current_page - 1) * PAGE_SIZE + 1,
        last: (current_page * PAGE_SIZE).min(filtered_count),
        filtered_count,
    }
}

/// Slice out the rows for `current_page`. Saturates at the sequence end, so
/// out-of-range pages yield an empty slice instead of panicking.
pub fn page_rows(rows: &[CampaignRow], current_page: usize) -> Vec<CampaignRow> {
    let start = ((current_page - 1) * PAGE_SIZE).min(rows.len());
    let end = (current_page * PAGE_SIZE).min(rows.len());
    rows[start..end].to_vec()
}

/// Fully derived table view: one page of rows plus its metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct TableView {
    pub rows: Vec<CampaignRow>,
    pub info: PageInfo,
}

impl TableView {
    pub fn derive(rows: &[CampaignRow], state: &TableState) -> Self {
        let filtered = filter_rows(rows, &state.search_term);
        let sorted = sort_rows(filtered, state.sort_field, state.sort_direction);
        let info = page_info(sorted.len(), state.current_page);
        let rows = page_rows(&sorted, state.current_page);
        Self { rows, info }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: u32, campaign: &str, revenue: u32) -> CampaignRow {
        CampaignRow {
            id,
            campaign: campaign.to_string(),
            impressions: id * 100,
            clicks: id * 10,
            conversions: id,
            revenue,
            ctr: format!("{:.2}", id as f64 / 2.0),
            status: if id % 2 == 0 {
                CampaignStatus::Paused
            } else {
                CampaignStatus::Active
            },
        }
    }

    fn sample() -> Vec<CampaignRow> {
        vec![
            row(1, "Summer Sale", 5000),
            row(2, "Winter Collection", 3000),
            row(3, "summer clearance", 7000),
        ]
    }

    #[test]
    fn test_filter_is_precise_case_insensitive_substring() {
        let rows = sample();
        let filtered = filter_rows(&rows, "summer");
        let ids: Vec<u32> = filtered.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);

        // Every retained row satisfies the predicate, every satisfying row
        // is retained.
        for r in &rows {
            let matches = r.campaign.to_lowercase().contains("summer");
            assert_eq!(matches, filtered.iter().any(|f| f.id == r.id));
        }
    }

    #[test]
    fn test_empty_filter_retains_all_rows() {
        let rows = sample();
        assert_eq!(filter_rows(&rows, ""), rows);
    }

    #[test]
    fn test_filter_then_sort_revenue_desc_matches_reference() {
        let filtered = filter_rows(&sample(), "summer");
        let sorted = sort_rows(filtered, SortField::Revenue, SortDirection::Desc);
        let ids: Vec<u32> = sorted.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_sorted_output_is_monotone_both_directions() {
        let rows: Vec<CampaignRow> = (0..20).map(|i| row(i + 1, "c", (i * 37) % 11)).collect();

        let asc = sort_rows(rows.clone(), SortField::Revenue, SortDirection::Asc);
        for pair in asc.windows(2) {
            assert!(pair[0].revenue <= pair[1].revenue);
        }

        let desc = sort_rows(rows, SortField::Revenue, SortDirection::Desc);
        for pair in desc.windows(2) {
            assert!(pair[0].revenue >= pair[1].revenue);
        }
    }

    #[test]
    fn test_equal_keys_preserve_filtered_order() {
        // All revenues equal: both directions must preserve input order.
        let rows: Vec<CampaignRow> = (1..=8).map(|i| row(i, "c", 100)).collect();
        let ids: Vec<u32> = rows.iter().map(|r| r.id).collect();

        let asc = sort_rows(rows.clone(), SortField::Revenue, SortDirection::Asc);
        assert_eq!(asc.iter().map(|r| r.id).collect::<Vec<_>>(), ids);

        let desc = sort_rows(rows, SortField::Revenue, SortDirection::Desc);
        assert_eq!(desc.iter().map(|r| r.id).collect::<Vec<_>>(), ids);
    }

    #[test]
    fn test_sort_ascending_is_idempotent() {
        let once = sort_rows(sample(), SortField::Campaign, SortDirection::Asc);
        let twice = sort_rows(once.clone(), SortField::Campaign, SortDirection::Asc);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_text_sort_folds_case() {
        let rows = vec![
            row(1, "Summer Sale", 0),
            row(2, "summer clearance", 0),
            row(3, "Black Friday", 0),
        ];
        let sorted = sort_rows(rows, SortField::Campaign, SortDirection::Asc);
        let ids: Vec<u32> = sorted.iter().map(|r| r.id).collect();
        // "summer clearance" sorts before "Summer Sale" despite its case.
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_pages_partition_filtered_sequence() {
        let rows: Vec<CampaignRow> = (1..=23).map(|i| row(i, "c", i)).collect();
        let sorted = sort_rows(rows, SortField::Revenue, SortDirection::Asc);
        let total = page_info(sorted.len(), 1).total_pages;

        let mut reassembled = Vec::new();
        for page in 1..=total {
            reassembled.extend(page_rows(&sorted, page));
        }
        assert_eq!(reassembled, sorted);
    }

    #[test]
    fn test_page_metadata_for_23_rows() {
        let info = page_info(23, 3);
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.first, 21);
        assert_eq!(info.last, 23);
        assert_eq!(info.filtered_count, 23);

        let rows: Vec<CampaignRow> = (1..=23).map(|i| row(i, "c", i)).collect();
        assert_eq!(page_rows(&rows, 3).len(), 3);
    }

    #[test]
    fn test_out_of_range_page_yields_empty_slice() {
        let rows: Vec<CampaignRow> = (1..=5).map(|i| row(i, "c", i)).collect();
        assert!(page_rows(&rows, 99).is_empty());
    }

    #[test]
    fn test_toggle_sort_flips_and_resets() {
        let mut state = TableState::default();
        state.toggle_sort(SortField::Revenue);
        assert_eq!(state.sort_field, SortField::Revenue);
        assert_eq!(state.sort_direction, SortDirection::Asc);

        state.toggle_sort(SortField::Revenue);
        assert_eq!(state.sort_direction, SortDirection::Desc);
        state.toggle_sort(SortField::Revenue);
        assert_eq!(state.sort_direction, SortDirection::Asc);

        // A different column always lands ascending, whatever came before.
        state.toggle_sort(SortField::Revenue);
        state.toggle_sort(SortField::Clicks);
        assert_eq!(state.sort_field, SortField::Clicks);
        assert_eq!(state.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn test_search_edit_resets_page() {
        let mut state = TableState {
            current_page: 4,
            ..TableState::default()
        };
        state.set_search("summer".to_string());
        assert_eq!(state.current_page, 1);
        assert_eq!(state.search_term, "summer");
    }

    #[test]
    fn test_navigation_clamps_at_boundaries() {
        let mut state = TableState::default();
        state.go_to_page(99, 3);
        assert_eq!(state.current_page, 3);
        state.go_to_page(0, 3);
        assert_eq!(state.current_page, 1);
        // Empty result set still pins the page to 1.
        state.go_to_page(7, 0);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_derive_composes_filter_sort_paginate() {
        let rows: Vec<CampaignRow> = (1..=30)
            .map(|i| {
                let name = if i % 2 == 0 { "Flash Sale" } else { "Holiday Special" };
                row(i, name, 1000 - i)
            })
            .collect();
        let state = TableState {
            search_term: "flash".to_string(),
            sort_field: SortField::Revenue,
            sort_direction: SortDirection::Desc,
            current_page: 2,
        };

        let view = TableView::derive(&rows, &state);
        // 15 even ids match, so page 2 holds the remaining 5.
        assert_eq!(view.info.filtered_count, 15);
        assert_eq!(view.info.total_pages, 2);
        assert_eq!(view.rows.len(), 5);
        assert!(view.rows.iter().all(|r| r.campaign == "Flash Sale"));
        for pair in view.rows.windows(2) {
            assert!(pair[0].revenue >= pair[1].revenue);
        }
    }
}
