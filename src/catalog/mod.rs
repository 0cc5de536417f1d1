//! # Catalog Module
//!
//! The fixed collection of script snippets, grouped by category.
//!
//! ## Overview
//!
//! The catalog is compiled into the binary (see [`data`]) and never mutated
//! or persisted. It exposes read-only lookups:
//!
//! - [`Catalog::categories`] - the ordered category cards shown on the home view
//! - [`Catalog::scripts_in`] - the ordered scripts for one category key
//! - [`Catalog::script`] - resolve a [`ScriptId`] to its script
//!
//! Unknown category keys and stale [`ScriptId`]s are treated as absence, not
//! errors: lookups return an empty slice or `None` and the caller renders an
//! empty view.
//!
//! ## Invariant
//!
//! Every script's `category` field equals the key of the category it is
//! stored under.

pub mod data;

use serde::Serialize;

/// How demanding a script is to use, shown as a colored badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// The label rendered in badges and in `--catalog` output.
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// One catalog entry. The `content` is opaque text: it is displayed and
/// copied, never parsed or executed.
#[derive(Debug, Clone, Serialize)]
pub struct Script {
    pub name: String,
    pub description: String,
    pub content: String,
    /// Key of the category this script is stored under.
    pub category: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
}

/// Presentation metadata for a category card on the home view.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub key: String,
    pub title: String,
    pub blurb: String,
    /// Badge labels shown on the home card.
    pub highlights: Vec<String>,
}

/// A category and its ordered scripts.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub info: CategoryInfo,
    pub scripts: Vec<Script>,
}

/// Stable handle to one script: category key plus position in that
/// category's list. Resolving a stale id yields `None` rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptId {
    pub category: String,
    pub index: usize,
}

/// The immutable script collection. Defined once at startup, read-only for
/// the process lifetime.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// The compiled-in catalog.
    pub fn builtin() -> Self {
        data::builtin()
    }

    /// Build a catalog from explicit categories. Used by the builtin data
    /// and by test fixtures.
    pub fn from_categories(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Ordered categories as defined at initialization.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Ordered scripts for a category. Returns an empty slice for unknown
    /// keys - absence is a valid, representable state.
    pub fn scripts_in(&self, key: &str) -> &[Script] {
        self.categories
            .iter()
            .find(|c| c.info.key == key)
            .map(|c| c.scripts.as_slice())
            .unwrap_or(&[])
    }

    /// Resolve a [`ScriptId`]. Returns `None` if the category is unknown or
    /// the index is out of range.
    pub fn script(&self, id: &ScriptId) -> Option<&Script> {
        self.scripts_in(&id.category).get(id.index)
    }

    /// Total number of scripts across all categories.
    pub fn script_count(&self) -> usize {
        self.categories.iter().map(|c| c.scripts.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_category_order() {
        let catalog = Catalog::builtin();
        let keys: Vec<&str> = catalog
            .categories()
            .iter()
            .map(|c| c.info.key.as_str())
            .collect();
        assert_eq!(keys, vec!["gtps", "rgt"]);
    }

    #[test]
    fn test_category_field_matches_storage_key() {
        let catalog = Catalog::builtin();
        for category in catalog.categories() {
            for script in &category.scripts {
                assert_eq!(
                    script.category, category.info.key,
                    "script '{}' is stored under the wrong key",
                    script.name
                );
            }
        }
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let catalog = Catalog::builtin();
        assert!(catalog.scripts_in("does-not-exist").is_empty());
        assert!(catalog.scripts_in("").is_empty());
    }

    #[test]
    fn test_script_resolution() {
        let catalog = Catalog::builtin();
        let id = ScriptId {
            category: "gtps".to_string(),
            index: 0,
        };
        let script = catalog.script(&id).expect("first gtps script exists");
        assert_eq!(script.name, "Auto Farm GTPS");
    }

    #[test]
    fn test_stale_id_resolves_to_none() {
        let catalog = Catalog::builtin();
        let out_of_range = ScriptId {
            category: "gtps".to_string(),
            index: 99,
        };
        assert!(catalog.script(&out_of_range).is_none());

        let unknown_category = ScriptId {
            category: "nope".to_string(),
            index: 0,
        };
        assert!(catalog.script(&unknown_category).is_none());
    }

    #[test]
    fn test_script_names_unique_within_category() {
        let catalog = Catalog::builtin();
        for category in catalog.categories() {
            let mut names: Vec<&str> = category.scripts.iter().map(|s| s.name.as_str()).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), category.scripts.len());
        }
    }

    #[test]
    fn test_script_count() {
        assert_eq!(Catalog::builtin().script_count(), 4);
    }
}
