//! # Query Engine
//!
//! A [`FilterSpec`] is a set of independent, optional predicates combined
//! with logical AND. Applying one is a pure function of (collection, spec):
//! nothing is mutated, no state is retained between calls, and the result
//! preserves collection order (stable filter, not a sort).

use crate::model::{Difficulty, Recipe};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Case-insensitive substring match over title and description
    pub search: Option<String>,
    pub difficulty: Option<Difficulty>,
    /// Upper bound on total time in minutes; zero means no restriction
    pub max_total_time: Option<u32>,
}

impl FilterSpec {
    pub fn search_only(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }

    pub fn difficulty_only(difficulty: Difficulty) -> Self {
        Self {
            difficulty: Some(difficulty),
            ..Self::default()
        }
    }

    pub fn max_time_only(minutes: u32) -> Self {
        Self {
            max_total_time: Some(minutes),
            ..Self::default()
        }
    }

    pub fn apply<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        let term = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase);

        recipes
            .iter()
            .filter(|recipe| {
                if let Some(term) = &term {
                    let hit = recipe.title.to_lowercase().contains(term)
                        || recipe.description.to_lowercase().contains(term);
                    if !hit {
                        return false;
                    }
                }
                if let Some(difficulty) = self.difficulty {
                    if recipe.difficulty != difficulty {
                        return false;
                    }
                }
                if let Some(max) = self.max_total_time {
                    if max > 0 && recipe.total_time > max {
                        return false;
                    }
                }
                true
            })
            .collect()
    }
}
