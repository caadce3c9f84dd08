//! Campaign Table Component
//!
//! Search box, sortable column headers, status badges, and pagination over
//! the derived table view. All derivation lives in `state::table_view`; this
//! module only renders it and feeds events back into `TableState`.

use leptos::*;

use crate::state::global::GlobalState;
use crate::state::table_view::{CampaignStatus, SortDirection, SortField, TableView};

/// Numbered page buttons shown at once.
const MAX_PAGE_BUTTONS: usize = 5;

/// Campaign performance table with search and pagination
#[component]
pub fn CampaignTable() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;
    let campaign_rows = state.campaign_rows;
    let table = state.table;

    // The whole displayed page is a pure function of (rows, table state).
    let table_view = create_memo(move |_| TableView::derive(&campaign_rows.get(), &table.get()));

    view! {
        <section class=move || format!("p-6 rounded-2xl {}", theme.get().card())>
            <div class="flex flex-col sm:flex-row items-start sm:items-center justify-between mb-6 gap-4">
                <h3 class="text-xl font-semibold">"Campaign Performance"</h3>

                // Search input
                <div class="relative">
                    <span class="absolute left-3 top-1/2 -translate-y-1/2 text-sm">"🔍"</span>
                    <input
                        type="text"
                        placeholder="Search campaigns..."
                        prop:value=move || table.get().search_term
                        on:input=move |ev| {
                            table.update(|t| t.set_search(event_target_value(&ev)));
                        }
                        class=move || format!(
                            "pl-10 pr-4 py-2 rounded-xl border transition-colors duration-200 {}",
                            theme.get().input()
                        )
                    />
                </div>
            </div>

            <div class="overflow-x-auto">
                <table class="w-full">
                    <thead>
                        <tr class=move || format!("border-b {}", theme.get().divider())>
                            {SortField::COLUMNS.into_iter().map(|field| {
                                view! { <HeaderCell field=field /> }
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let data = table_view.get();
                            if data.info.filtered_count == 0 {
                                view! {
                                    <tr>
                                        <td colspan="7" class=move || format!(
                                            "py-8 text-center {}",
                                            theme.get().text_muted()
                                        )>
                                            "No campaigns match your search"
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                data.rows.into_iter().map(|row| {
                                    let badge = status_badge(row.status);
                                    view! {
                                        <tr class=move || format!(
                                            "border-b transition-colors duration-200 {} {}",
                                            theme.get().divider(),
                                            theme.get().row_hover()
                                        )>
                                            <td class="py-4 px-2 font-medium">{row.campaign}</td>
                                            <td class="py-4 px-2">{format_count(row.impressions)}</td>
                                            <td class="py-4 px-2">{format_count(row.clicks)}</td>
                                            <td class="py-4 px-2">{row.conversions}</td>
                                            <td class="py-4 px-2">{format!("${}", format_count(row.revenue))}</td>
                                            <td class="py-4 px-2">{format!("{}%", row.ctr)}</td>
                                            <td class="py-4 px-2">
                                                <span class=format!(
                                                    "px-3 py-1 rounded-full text-sm font-medium {}",
                                                    badge
                                                )>
                                                    {row.status.label()}
                                                </span>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <Pagination table_view=table_view />
        </section>
    }
}

/// Clickable column header with the active sort indicator
#[component]
fn HeaderCell(field: SortField) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;
    let table = state.table;

    view! {
        <th
            on:click=move |_| table.update(|t| t.toggle_sort(field))
            class=move || format!(
                "text-left py-4 px-2 cursor-pointer transition-colors duration-200 {}",
                theme.get().row_hover()
            )
        >
            <div class="flex items-center space-x-1">
                <span class="font-semibold">{field.label()}</span>
                <span class="text-sm">
                    {move || {
                        let t = table.get();
                        (t.sort_field == field).then(|| match t.sort_direction {
                            SortDirection::Asc => "↑",
                            SortDirection::Desc => "↓",
                        })
                    }}
                </span>
            </div>
        </th>
    }
}

/// "Showing X to Y of Z" plus previous/numbered/next controls
#[component]
fn Pagination(table_view: Memo<TableView>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;
    let table = state.table;

    let at_first = move || table.get().current_page <= 1;
    let at_last = move || {
        let info = table_view.get().info;
        table.get().current_page >= info.total_pages
    };

    view! {
        <div class="flex flex-col sm:flex-row items-center justify-between mt-6 gap-4">
            <p class=move || format!("text-sm {}", theme.get().text_muted())>
                {move || {
                    let info = table_view.get().info;
                    if info.filtered_count == 0 {
                        "No results".to_string()
                    } else {
                        format!(
                            "Showing {} to {} of {} results",
                            info.first, info.last, info.filtered_count
                        )
                    }
                }}
            </p>

            <div class="flex items-center space-x-2">
                <button
                    on:click=move |_| {
                        let total = table_view.get_untracked().info.total_pages;
                        table.update(|t| t.go_to_page(t.current_page.saturating_sub(1), total));
                    }
                    disabled=at_first
                    class=move || format!(
                        "p-2 rounded-lg transition-colors duration-200 {}",
                        if at_first() {
                            "opacity-50 cursor-not-allowed".to_string()
                        } else {
                            theme.get().row_hover().to_string()
                        }
                    )
                >
                    "‹"
                </button>

                {move || {
                    let total = table_view.get().info.total_pages;
                    (1..=total.min(MAX_PAGE_BUTTONS)).map(|page| {
                        view! {
                            <button
                                on:click=move |_| {
                                    let total = table_view.get_untracked().info.total_pages;
                                    table.update(|t| t.go_to_page(page, total));
                                }
                                class=move || {
                                    let base = "px-3 py-2 rounded-lg transition-colors duration-200";
                                    if table.get().current_page == page {
                                        format!("{} bg-blue-600 text-white", base)
                                    } else {
                                        format!("{} {}", base, theme.get().row_hover())
                                    }
                                }
                            >
                                {page}
                            </button>
                        }
                    }).collect_view()
                }}

                <button
                    on:click=move |_| {
                        let total = table_view.get_untracked().info.total_pages;
                        table.update(|t| t.go_to_page(t.current_page + 1, total));
                    }
                    disabled=at_last
                    class=move || format!(
                        "p-2 rounded-lg transition-colors duration-200 {}",
                        if at_last() {
                            "opacity-50 cursor-not-allowed".to_string()
                        } else {
                            theme.get().row_hover().to_string()
                        }
                    )
                >
                    "›"
                </button>
            </div>
        </div>
    }
}

fn status_badge(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Active => "bg-green-100 text-green-800",
        CampaignStatus::Paused => "bg-red-100 text-red-800",
    }
}

/// Group digits with commas: 123456 -> "123,456".
fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_groups_digits() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(87_654_321), "87,654,321");
    }
}
