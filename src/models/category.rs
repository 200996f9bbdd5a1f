//! Category model
//!
//! Categories are flat, named labels. Transactions and budget limits refer to
//! them by name, so the name is the identity that matters to the reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// A spending or income category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,

    /// Display name, unique ignoring case
    pub name: String,

    /// Display color as `#RRGGBB`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            color: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_color(name: impl Into<String>, color: impl Into<String>) -> Self {
        let mut category = Self::new(name);
        category.color = Some(color.into());
        category
    }

    /// Case-insensitive name comparison used for uniqueness checks
    pub fn same_name(&self, other: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(other.trim())
    }

    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        if let Some(color) = &self.color {
            let hex = color.strip_prefix('#').unwrap_or("");
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(CategoryValidationError::InvalidColor(color.clone()));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Categories seeded into an empty category store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    Food,
    Transport,
    Utilities,
    Entertainment,
    Healthcare,
    Savings,
    Miscellaneous,
}

impl DefaultCategory {
    /// All defaults in seeding order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transport,
            Self::Utilities,
            Self::Entertainment,
            Self::Healthcare,
            Self::Savings,
            Self::Miscellaneous,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Savings => "Savings",
            Self::Miscellaneous => "Miscellaneous",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Food => "#FF6B6B",
            Self::Transport => "#4ECDC4",
            Self::Utilities => "#45B7D1",
            Self::Entertainment => "#FFA07A",
            Self::Healthcare => "#98D8C8",
            Self::Savings => "#6BCB77",
            Self::Miscellaneous => "#B0B0B0",
        }
    }

    pub fn to_category(&self) -> Category {
        Category::with_color(self.name(), self.color())
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    InvalidColor(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
            Self::InvalidColor(c) => write!(f, "Invalid color '{}', expected #RRGGBB", c),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_ignores_case() {
        let category = Category::new("Food");
        assert!(category.same_name("food"));
        assert!(category.same_name(" FOOD "));
        assert!(!category.same_name("Foods"));
    }

    #[test]
    fn test_validation() {
        let mut category = Category::new("Valid");
        assert!(category.validate().is_ok());

        category.name = "  ".into();
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));

        category.name = "a".repeat(51);
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::NameTooLong(51))
        ));

        let bad_color = Category::with_color("Rent", "red");
        assert!(matches!(
            bad_color.validate(),
            Err(CategoryValidationError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_defaults() {
        let names: Vec<_> = DefaultCategory::all().iter().map(|d| d.name()).collect();
        assert_eq!(
            names,
            [
                "Food",
                "Transport",
                "Utilities",
                "Entertainment",
                "Healthcare",
                "Savings",
                "Miscellaneous"
            ]
        );
        for default in DefaultCategory::all() {
            assert!(default.to_category().validate().is_ok());
        }
    }
}
