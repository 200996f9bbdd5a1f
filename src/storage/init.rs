//! First-run setup
//!
//! Creates the directory layout and seeds the default categories.

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::DefaultCategory;

use super::categories::CategoryData;
use super::file_io::write_json_atomic;

/// Prepare a fresh data directory
///
/// Default categories are written only when `seed_categories` is set and no
/// categories file exists yet, so rerunning never clobbers user data.
pub fn initialize_storage(paths: &LedgerPaths, seed_categories: bool) -> Result<(), LedgerError> {
    paths.ensure_directories()?;

    if seed_categories && needs_category_seed(paths) {
        let data = CategoryData {
            categories: DefaultCategory::all()
                .iter()
                .map(DefaultCategory::to_category)
                .collect(),
        };
        write_json_atomic(&paths.categories_file(), &data)?;
    }

    Ok(())
}

/// True when no categories file has been written yet
pub fn needs_category_seed(paths: &LedgerPaths) -> bool {
    !paths.categories_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn read_categories(paths: &LedgerPaths) -> CategoryData {
        let content = std::fs::read_to_string(paths.categories_file()).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    #[test]
    fn test_seeds_default_categories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_category_seed(&paths));
        initialize_storage(&paths, true).unwrap();
        assert!(!needs_category_seed(&paths));

        let data = read_categories(&paths);
        let names: Vec<_> = data.categories.iter().map(|c| c.name.as_str()).collect();
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
        assert_eq!(data.categories[0].color.as_deref(), Some("#FF6B6B"));
    }

    #[test]
    fn test_skips_seed_when_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths, false).unwrap();

        assert!(paths.data_dir().exists());
        assert!(needs_category_seed(&paths));
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        initialize_storage(&paths, true).unwrap();

        let custom = CategoryData {
            categories: vec![crate::models::Category::new("Custom")],
        };
        write_json_atomic(&paths.categories_file(), &custom).unwrap();

        initialize_storage(&paths, true).unwrap();

        let data = read_categories(&paths);
        assert_eq!(data.categories.len(), 1);
        assert_eq!(data.categories[0].name, "Custom");
    }
}
