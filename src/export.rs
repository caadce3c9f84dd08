//! Export
//!
//! Serializes the currently filtered and sorted campaign rows. Export always
//! operates on the filtered set, never the raw row set. Producing the payload
//! is fully implemented; handing it to the browser as a download is stubbed
//! out, so the UI only reports what would have been written.

use chrono::Utc;

use crate::state::table_view::CampaignRow;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Pdf => "PDF",
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            // Placeholder text report until a PDF pipeline exists.
            ExportFormat::Pdf => "txt",
        }
    }
}

/// Render the export payload for `format`.
pub fn render(rows: &[CampaignRow], format: ExportFormat) -> String {
    match format {
        ExportFormat::Csv => render_csv(rows),
        ExportFormat::Pdf => render_pdf_summary(rows),
    }
}

/// Timestamped download name in the `beacon_export_YYYYMMDD_HHMMSS.ext`
/// shape.
pub fn filename(format: ExportFormat) -> String {
    format!(
        "beacon_export_{}.{}",
        Utc::now().format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Format rows as CSV
fn render_csv(rows: &[CampaignRow]) -> String {
    let mut csv = String::new();

    // Header
    csv.push_str("id,campaign,impressions,clicks,conversions,revenue,ctr,status\n");

    // Rows
    for row in rows {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            row.id,
            escape_field(&row.campaign),
            row.impressions,
            row.clicks,
            row.conversions,
            row.revenue,
            row.ctr,
            row.status.label(),
        ));
    }

    csv
}

/// Quote a field when it carries a delimiter, doubling embedded quotes.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Plain-text stand-in for the PDF report.
fn render_pdf_summary(rows: &[CampaignRow]) -> String {
    let total_revenue: u64 = rows.iter().map(|r| r.revenue as u64).sum();
    let active = rows
        .iter()
        .filter(|r| r.status == crate::state::table_view::CampaignStatus::Active)
        .count();

    format!(
        "Beacon Insights - Campaign Performance\n\
         Campaigns: {}\n\
         Active: {}\n\
         Total revenue: ${}\n",
        rows.len(),
        active,
        total_revenue
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::table_view::CampaignStatus;

    fn row(id: u32, campaign: &str) -> CampaignRow {
        CampaignRow {
            id,
            campaign: campaign.to_string(),
            impressions: 12_000,
            clicks: 640,
            conversions: 32,
            revenue: 2_500,
            ctr: "3.41".to_string(),
            status: CampaignStatus::Active,
        }
    }

    #[test]
    fn test_csv_has_header_and_one_line_per_row() {
        let rows = vec![row(1, "Summer Sale"), row(2, "Flash Sale")];
        let csv = render(&rows, ExportFormat::Csv);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "id,campaign,impressions,clicks,conversions,revenue,ctr,status"
        );
        assert_eq!(lines[1], "1,Summer Sale,12000,640,32,2500,3.41,Active");
    }

    #[test]
    fn test_csv_quotes_embedded_delimiters() {
        let rows = vec![row(7, "Sale, \"Big\" Edition")];
        let csv = render(&rows, ExportFormat::Csv);
        assert!(csv.contains("\"Sale, \"\"Big\"\" Edition\""));
    }

    #[test]
    fn test_pdf_summary_names_the_row_count() {
        let rows = vec![row(1, "a"), row(2, "b"), row(3, "c")];
        let report = render(&rows, ExportFormat::Pdf);
        assert!(report.contains("Campaigns: 3"));
        assert!(report.contains("Total revenue: $7500"));
    }

    #[test]
    fn test_empty_export_is_just_the_header() {
        let csv = render(&[], ExportFormat::Csv);
        assert_eq!(csv.lines().count(), 1);
    }
}
