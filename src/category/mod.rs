use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::sync::Arc;

use crate::error::domain_error::DomainError;
use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub icon: String,
    pub words: Vec<String>,
}

impl Category {
    pub fn new(id: &str, display_name: &str, icon: &str, words: &[&str]) -> Self {
        Category {
            id: id.to_string(),
            display_name: display_name.to_string(),
            icon: icon.to_string(),
            words: words.iter().map(|word| word.to_string()).collect(),
        }
    }

    pub fn summary(&self) -> CategorySummary {
        CategorySummary {
            id: self.id.clone(),
            display_name: self.display_name.clone(),
            icon: self.icon.clone(),
            word_count: self.words.len(),
        }
    }

    // Keeps the first occurrence of every word, blank words are dropped
    fn deduplicate_words(&mut self) {
        let mut seen: HashSet<String> = HashSet::new();
        let original_count = self.words.len();
        self.words = self
            .words
            .iter()
            .map(|word| word.trim().to_string())
            .filter(|word| !word.is_empty() && seen.insert(word.clone()))
            .collect();
        if self.words.len() != original_count {
            log::warn!(
                "Dropped repeated or blank words from category. CategoryId: '{}', OriginalWords: '{}', DistinctWords: '{}'.",
                self.id,
                original_count,
                self.words.len()
            );
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: String,
    pub display_name: String,
    pub icon: String,
    pub word_count: usize,
}

/// Immutable, ordered collection of validated categories.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Arc<Category>>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Result<Self, Error> {
        let mut ids: HashSet<String> = HashSet::new();
        let mut validated = Vec::with_capacity(categories.len());
        for mut category in categories {
            if !ids.insert(category.id.clone()) {
                return Err(Error::Domain(DomainError::DuplicateCategory(category.id)));
            }
            category.deduplicate_words();
            if category.words.is_empty() {
                return Err(Error::Domain(DomainError::EmptyCategory(category.id)));
            }
            validated.push(Arc::new(category));
        }
        Ok(Catalog {
            categories: validated,
        })
    }

    pub fn from_file(file_path: &str) -> Result<Self, Error> {
        let content = fs::read_to_string(file_path).map_err(|error| {
            Error::log_and_create_internal(&format!(
                "Could not read the categories file. File: '{file_path}', Error: '{error}'."
            ))
        })?;
        let categories: Vec<Category> = serde_json::from_str(&content).map_err(|error| {
            Error::log_and_create_internal(&format!(
                "Could not parse the categories file. File: '{file_path}', Error: '{error}'."
            ))
        })?;
        let catalog = Catalog::new(categories)?;
        log::info!(
            "Categories loaded. File: '{}', Categories: '{}'.",
            file_path,
            catalog
                .categories
                .iter()
                .map(|category| category.id.as_str())
                .collect::<Vec<&str>>()
                .join(",")
        );
        Ok(catalog)
    }

    pub fn builtin() -> Self {
        Catalog {
            categories: Catalog::builtin_categories()
                .into_iter()
                .map(Arc::new)
                .collect(),
        }
    }

    fn builtin_categories() -> Vec<Category> {
        vec![
            Category::new(
                "animals",
                "Animals",
                "🦁",
                &[
                    "elephant", "giraffe", "penguin", "kangaroo", "octopus", "dolphin", "zebra",
                    "hedgehog", "flamingo", "crocodile", "butterfly", "squirrel",
                ],
            ),
            Category::new(
                "food",
                "Food",
                "🍕",
                &[
                    "pizza", "spaghetti", "pancake", "burrito", "sushi", "popcorn", "avocado",
                    "cheesecake", "pretzel", "lasagna", "omelette", "dumpling",
                ],
            ),
            Category::new(
                "movies",
                "Movies",
                "🎬",
                &[
                    "Titanic", "Jaws", "Frozen", "Inception", "Rocky", "Shrek", "Gladiator",
                    "Avatar", "Grease", "Aladdin", "Psycho", "Casablanca",
                ],
            ),
            Category::new(
                "sports",
                "Sports",
                "⚽",
                &[
                    "basketball", "surfing", "archery", "fencing", "bowling", "skiing",
                    "volleyball", "marathon", "wrestling", "badminton", "karate", "golf",
                ],
            ),
            Category::new(
                "places",
                "Places",
                "🗺️",
                &[
                    "library", "airport", "volcano", "museum", "lighthouse", "desert", "castle",
                    "hospital", "waterfall", "supermarket", "stadium", "island",
                ],
            ),
        ]
    }

    pub fn get(&self, id: &str) -> Option<Arc<Category>> {
        self.categories
            .iter()
            .find(|category| category.id == id)
            .cloned()
    }

    pub fn summaries(&self) -> Vec<CategorySummary> {
        self.categories
            .iter()
            .map(|category| category.summary())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
