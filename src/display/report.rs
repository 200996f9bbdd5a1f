//! Report display formatting
//!
//! Monthly summary, monthly notes and the audit trail.

use tabled::Tabled;

use crate::audit::AuditEntry;
use crate::models::{MonthPeriod, MonthlyNote};
use crate::reports::MonthlySummary;

use super::budget::format_limit_table;
use super::{format_percent, progress_bar, render_table};

#[derive(Tabled)]
struct BreakdownLine {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// Format the full summary of one month
pub fn format_monthly_summary(summary: &MonthlySummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Monthly Summary: {}\n", summary.period.label()));
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!("Transactions:  {}\n", summary.transaction_count));
    output.push_str(&format!(
        "Income:        {}\n",
        summary.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Expenses:      {}\n",
        summary.total_expense.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Net savings:   {}\n",
        summary.net_savings.format_with_symbol(symbol)
    ));
    match &summary.top_category {
        Some(top) => output.push_str(&format!(
            "Top category:  {} ({})\n",
            top.category,
            top.amount.format_with_symbol(symbol)
        )),
        None => output.push_str("Top category:  none\n"),
    }

    if !summary.breakdown.is_empty() {
        let rows = summary
            .breakdown
            .iter()
            .map(|entry| BreakdownLine {
                category: entry.category.clone(),
                amount: entry.amount.format_with_symbol(symbol),
                share: format_percent(entry.percent),
            })
            .collect();
        output.push_str("\nSpending by category\n");
        output.push_str(&render_table(rows, 1));
        output.push('\n');
    }

    output.push('\n');
    if summary.has_budget() {
        output.push_str(&format!(
            "Income variance:  {} (expected {})\n",
            summary.income_variance.format_with_symbol(symbol),
            summary.budget.expected_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Savings variance: {} (target {})\n",
            summary.savings_variance.format_with_symbol(symbol),
            summary.budget.savings_target.format_with_symbol(symbol)
        ));

        if !summary.category_status.is_empty() {
            output.push('\n');
            output.push_str(&format_limit_table(&summary.category_status, symbol));
            output.push('\n');
        }

        let over: Vec<&str> = summary.over_budget().map(|s| s.category.as_str()).collect();
        if !over.is_empty() {
            output.push_str(&format!("Over budget: {}\n", over.join(", ")));
        }
    } else {
        output.push_str("No budget set for this month.\n");
    }

    output.push_str(&format!(
        "\nSavings goals: {} of {} {} {}\n",
        summary.savings.total_current.format_with_symbol(symbol),
        summary.savings.total_target.format_with_symbol(symbol),
        progress_bar(summary.savings.display_percent(), 20),
        format_percent(summary.savings.percent)
    ));

    output
}

/// Format the note for a month, or a placeholder when there is none
pub fn format_monthly_note(month: MonthPeriod, note: Option<&MonthlyNote>) -> String {
    match note {
        Some(note) if !note.is_empty() => {
            let mut output = format!("Notes for {}\n", month.label());
            if !note.notes.trim().is_empty() {
                output.push_str(&format!("\nNotes:\n{}\n", note.notes.trim_end()));
            }
            if !note.reflection.trim().is_empty() {
                output.push_str(&format!("\nReflection:\n{}\n", note.reflection.trim_end()));
            }
            output
        }
        _ => format!("No notes for {}.\n", month.label()),
    }
}

/// Format audit entries, one block per entry
pub fn format_audit_entries(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "Audit log is empty.\n".to_string();
    }

    entries
        .iter()
        .map(|e| format!("{}\n", e.format_human_readable()))
        .collect()
}
