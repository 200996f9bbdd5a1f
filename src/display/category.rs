//! Category display formatting

use tabled::Tabled;

use crate::models::Category;

use super::render_table;

#[derive(Tabled)]
struct CategoryLine {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Entries")]
    entries: usize,
}

/// Format categories with the number of transactions filed under each
pub fn format_category_list(categories: &[(Category, usize)]) -> String {
    if categories.is_empty() {
        return "No categories found. Run 'ledger init' to create the defaults.\n".to_string();
    }

    let rows = categories
        .iter()
        .map(|(category, entries)| CategoryLine {
            id: category.id.to_string(),
            name: category.name.clone(),
            color: category.color.clone().unwrap_or_default(),
            entries: *entries,
        })
        .collect();

    format!("{}\n", render_table(rows, 3))
}
