//! Format bookings, listings and statistics as text.

use crate::booking::{BookingPage, BookingRecord, BookingStatus};
use crate::store::Stats;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn format_status(status: BookingStatus) -> String {
    match status {
        BookingStatus::Pending => format!("{}", status.yellow()),
        BookingStatus::Confirmed => format!("{}", status.green()),
        BookingStatus::Cancelled => format!("{}", status.red()),
    }
}

fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Format one page of bookings as a table with a paging footer.
pub fn format_booking_page_text(page: &BookingPage) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Bookings")));
    if page.records.is_empty() {
        if page.total == 0 {
            out.push_str("No bookings found.\n");
        } else {
            out.push_str(&format!(
                "Page {} is empty ({} bookings across {} pages).\n",
                page.page, page.total, page.pages
            ));
        }
        return out;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec![
        "Code", "Name", "Email", "Guests", "Amount", "Status", "Created", "ID",
    ]);
    for record in &page.records {
        table.add_row(vec![
            record.sequence_code.clone(),
            record.fields.name.clone(),
            record.fields.email.clone(),
            record.fields.guests.to_string(),
            format_amount(record.fields.amount),
            format_status(record.status),
            record.created_at.format("%Y-%m-%d %H:%M").to_string(),
            record.id.clone(),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!(
        "Page {} of {} ({} matching)\n",
        page.page, page.pages, page.total
    ));
    out
}

/// Format a single booking as a two-column detail table.
pub fn format_booking_text(record: &BookingRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(&format!("Booking {}", record.sequence_code))
    ));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    let f = &record.fields;
    let none = || "-".to_string();
    let rows = vec![
        ("ID", record.id.clone()),
        ("Status", format_status(record.status)),
        ("Name", f.name.clone()),
        ("Email", f.email.clone()),
        ("Phone", f.phone.clone()),
        ("Country", f.country.clone().unwrap_or_else(none)),
        ("Guests", f.guests.to_string()),
        ("Amount", format_amount(f.amount)),
        (
            "Visit date",
            f.visit_date.map(|d| d.to_string()).unwrap_or_else(none),
        ),
        ("Note", f.note.clone().unwrap_or_else(none)),
        ("Created", record.created_at.to_rfc3339()),
        ("Updated", record.updated_at.to_rfc3339()),
    ];
    for (label, value) in rows {
        table.add_row(vec![label.to_string(), value]);
    }
    out.push_str(&format!("{}\n", table));
    out
}

/// Format aggregate statistics.
pub fn format_stats_text(stats: &Stats) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Booking statistics")));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Total bookings".to_string(), stats.total.to_string()]);
    table.add_row(vec!["Confirmed".to_string(), stats.confirmed.to_string()]);
    table.add_row(vec!["Pending".to_string(), stats.pending.to_string()]);
    table.add_row(vec!["Cancelled".to_string(), stats.cancelled.to_string()]);
    table.add_row(vec![
        "Total revenue".to_string(),
        format_amount(stats.total_revenue),
    ]);
    table.add_row(vec![
        "Average booking value".to_string(),
        stats.average_value.to_string(),
    ]);
    out.push_str(&format!("{}\n", table));
    out
}
