//! Category service
//!
//! Category names are unique ignoring case. Transactions refer to categories
//! by name, so deleting a category leaves existing entries untouched.

use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, DefaultCategory};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a category, optionally with a `#RRGGBB` display color
    pub fn create(&self, name: &str, color: Option<&str>) -> LedgerResult<Category> {
        let name = name.trim();

        if self.storage.categories.get_by_name(name)?.is_some() {
            return Err(LedgerError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        let category = match color {
            Some(color) => Category::with_color(name, color.trim()),
            None => Category::new(name),
        };
        category
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        self.storage.log_create(
            EntityType::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            &category,
        )?;

        Ok(category)
    }

    /// Find a category by name (ignoring case) or by ID
    pub fn find(&self, identifier: &str) -> LedgerResult<Option<Category>> {
        if let Some(category) = self.storage.categories.get_by_name(identifier)? {
            return Ok(Some(category));
        }

        Ok(self
            .storage
            .categories
            .get_all()?
            .into_iter()
            .find(|c| c.id.matches(identifier)))
    }

    pub fn list(&self) -> LedgerResult<Vec<Category>> {
        self.storage.categories.get_all()
    }

    /// Delete a category by name or ID
    pub fn delete(&self, identifier: &str) -> LedgerResult<Category> {
        let category = self
            .find(identifier)?
            .ok_or_else(|| LedgerError::category_not_found(identifier))?;

        self.storage.categories.delete(category.id)?;
        self.storage.categories.save()?;

        self.storage.log_delete(
            EntityType::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            &category,
        )?;

        Ok(category)
    }

    /// Create the default categories when none exist
    ///
    /// Returns how many were created.
    pub fn seed_defaults(&self) -> LedgerResult<usize> {
        if self.storage.categories.count()? > 0 {
            return Ok(0);
        }

        for default in DefaultCategory::all() {
            self.create(default.name(), Some(default.color()))?;
        }

        Ok(DefaultCategory::all().len())
    }

    /// Number of transactions filed under this category's name
    pub fn usage_count(&self, category: &Category) -> LedgerResult<usize> {
        self.storage.transactions.count_by_category(&category.name)
    }
}
