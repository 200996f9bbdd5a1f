//! Display formatting for terminal output
//!
//! Every function returns a `String`; the CLI decides where it goes. Amounts
//! are printed with the configured currency symbol and tables are drawn with
//! `tabled`.

pub mod budget;
pub mod category;
pub mod report;
pub mod transaction;

pub use budget::{format_budget, format_goal_list};
pub use category::format_category_list;
pub use report::{format_audit_entries, format_monthly_note, format_monthly_summary};
pub use transaction::{format_register, format_transaction_details, format_transaction_list};

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

/// Render rows as a rounded table, right-aligning columns from `numeric_from` on
pub(crate) fn render_table<T: Tabled>(rows: Vec<T>, numeric_from: usize) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(numeric_from..), Alignment::right());
    table.to_string()
}

/// Format a percentage with one decimal place
pub(crate) fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

/// Shorten text to `max_len` characters, marking the cut with `...`
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

/// A text progress bar, e.g. `[#####-----]`
pub(crate) fn progress_bar(percent: f64, width: usize) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
