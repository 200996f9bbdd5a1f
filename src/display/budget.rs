//! Budget and savings goal display formatting

use tabled::Tabled;

use crate::models::{Budget, MonthPeriod};
use crate::reports::{CategoryStatus, GoalProgress, SavingsProgress};

use super::{format_percent, progress_bar, render_table};

#[derive(Tabled)]
struct LimitLine {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

#[derive(Tabled)]
struct GoalLine {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Goal")]
    name: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Progress")]
    progress: String,
}

pub(crate) fn format_limit_table(status: &[CategoryStatus], symbol: &str) -> String {
    let rows = status
        .iter()
        .map(|s| LimitLine {
            category: s.category.clone(),
            spent: s.spent.format_with_symbol(symbol),
            limit: s.limit.format_with_symbol(symbol),
            remaining: s.remaining().format_with_symbol(symbol),
            used: format_percent(s.percent),
            status: if s.over_budget { "OVER" } else { "ok" },
        })
        .collect();

    render_table(rows, 1)
}

/// Format a month's budget with per-category spending against its limits
///
/// `budget` is `None` when nothing was saved for `period`.
pub fn format_budget(
    period: MonthPeriod,
    budget: Option<&Budget>,
    status: &[CategoryStatus],
    symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget for {}\n", period.label()));
    let Some(budget) = budget else {
        output.push_str("No budget set for this month.\n");
        return output;
    };

    output.push_str(&format!(
        "Expected income: {}\n",
        budget.expected_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Savings target:  {}\n",
        budget.savings_target.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total limits:    {}\n",
        budget.total_limits().format_with_symbol(symbol)
    ));

    if status.is_empty() {
        output.push_str("\nNo category limits set.\n");
    } else {
        output.push('\n');
        output.push_str(&format_limit_table(status, symbol));
        output.push('\n');
    }

    output
}

/// Format savings goals with their progress and the combined total
pub fn format_goal_list(goals: &[GoalProgress], total: &SavingsProgress, symbol: &str) -> String {
    if goals.is_empty() {
        return "No savings goals yet.\n".to_string();
    }

    let rows = goals
        .iter()
        .map(|g| GoalLine {
            id: g.id.to_string(),
            name: g.name.clone(),
            saved: g.current.format_with_symbol(symbol),
            target: g.target.format_with_symbol(symbol),
            progress: format!(
                "{} {}",
                progress_bar(g.display_percent(), 10),
                format_percent(g.percent)
            ),
        })
        .collect();

    format!(
        "{}\nTotal saved: {} of {} ({})\n",
        render_table(rows, 2),
        total.total_current.format_with_symbol(symbol),
        total.total_target.format_with_symbol(symbol),
        format_percent(total.percent)
    )
}
