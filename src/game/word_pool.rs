use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::category::Category;
use crate::error::domain_error::DomainError;

/// Deals words of a category without repeating them until the category runs out.
#[derive(Debug, Clone, Default)]
pub struct WordPool {
    used_words: HashSet<String>,
}

impl WordPool {
    pub fn used_words(&self) -> &HashSet<String> {
        &self.used_words
    }

    pub fn clear(&mut self) {
        self.used_words.clear();
    }

    pub fn draw<R: Rng + ?Sized>(
        &mut self,
        category: &Category,
        rng: &mut R,
    ) -> Result<String, DomainError> {
        if category.words.is_empty() {
            return Err(DomainError::EmptyCategory(category.id.clone()));
        }

        let available: Vec<&String> = category
            .words
            .iter()
            .filter(|word| !self.used_words.contains(*word))
            .collect();

        match available.choose(rng) {
            Some(word) => {
                self.used_words.insert(word.to_string());
                Ok(word.to_string())
            }
            None => {
                log::info!(
                    "Ran out of unused words, recycling the category. CategoryId: '{}', AmountOfWords: '{}'.",
                    category.id,
                    category.words.len()
                );
                // The recycled word stays out of the used set, it can come up again on the next draw
                self.used_words.clear();
                category
                    .words
                    .choose(rng)
                    .cloned()
                    .ok_or_else(|| DomainError::EmptyCategory(category.id.clone()))
            }
        }
    }
}
