//! Category repository backed by `categories.json`

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::{Category, CategoryId};

use super::file_io::{read_json, write_json_atomic};

/// On-disk layout of `categories.json`
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CategoryData {
    pub categories: Vec<Category>,
}

/// Repository for category persistence, in creation order
pub struct CategoryRepository {
    path: PathBuf,
    categories: RwLock<Vec<Category>>,
}

impl CategoryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: RwLock::new(Vec::new()),
        }
    }

    pub fn load(&self) -> Result<(), LedgerError> {
        let file_data: CategoryData = read_json(&self.path)?;

        let mut categories = self
            .categories
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *categories = file_data.categories;

        Ok(())
    }

    pub fn save(&self) -> Result<(), LedgerError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = CategoryData {
            categories: categories.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, LedgerError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.iter().find(|c| c.id == id).cloned())
    }

    pub fn get_all(&self) -> Result<Vec<Category>, LedgerError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.clone())
    }

    /// Look up a category by name, ignoring case
    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>, LedgerError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.iter().find(|c| c.same_name(name)).cloned())
    }

    pub fn upsert(&self, category: Category) -> Result<(), LedgerError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => *existing = category,
            None => categories.push(category),
        }
        Ok(())
    }

    pub fn delete(&self, id: CategoryId) -> Result<bool, LedgerError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = categories.len();
        categories.retain(|c| c.id != id);
        Ok(categories.len() != before)
    }

    pub fn count(&self) -> Result<usize, LedgerError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, CategoryRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = CategoryRepository::new(temp_dir.path().join("categories.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_get_by_name_ignores_case() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(Category::new("Groceries")).unwrap();

        assert!(repo.get_by_name("groceries").unwrap().is_some());
        assert!(repo.get_by_name("Rent").unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload_keeps_order() {
        let (temp_dir, repo) = create_test_repo();
        repo.upsert(Category::new("Zoo")).unwrap();
        repo.upsert(Category::with_color("Art", "#112233")).unwrap();
        repo.save().unwrap();

        let reloaded = CategoryRepository::new(temp_dir.path().join("categories.json"));
        reloaded.load().unwrap();
        let all = reloaded.get_all().unwrap();
        assert_eq!(all[0].name, "Zoo");
        assert_eq!(all[1].color.as_deref(), Some("#112233"));
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        let category = Category::new("Travel");
        let id = category.id;
        repo.upsert(category).unwrap();

        assert!(repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.get(id).unwrap().is_none());
    }
}
