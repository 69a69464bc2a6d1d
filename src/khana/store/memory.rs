use super::StorageBackend;
use crate::error::{KhanaError, Result};
use crate::model::{Recipe, Theme};
use crate::seed;

/// In-memory storage for testing and development. Does NOT persist data
/// across processes.
///
/// Slots hold serialized JSON rather than live values, so corruption
/// scenarios and round-trip behaviour match the file backend.
#[derive(Default)]
pub struct InMemoryStore {
    recipes_slot: Option<String>,
    theme_slot: Option<String>,
    fail_next_save: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw bytes already in the recipe slot (corrupted or otherwise).
    pub fn with_raw_recipes(raw: &str) -> Self {
        Self {
            recipes_slot: Some(raw.to_string()),
            ..Self::default()
        }
    }

    /// Make the next `save_recipes` call fail, as a full/unavailable slot would.
    pub fn fail_next_save(&mut self) {
        self.fail_next_save = true;
    }

    pub fn raw_recipes(&self) -> Option<&str> {
        self.recipes_slot.as_deref()
    }
}

impl StorageBackend for InMemoryStore {
    fn load_recipes(&mut self) -> Result<Vec<Recipe>> {
        let raw = match &self.recipes_slot {
            Some(raw) => raw,
            None => {
                let seeded = seed::default_recipes();
                self.save_recipes(&seeded)?;
                return Ok(seeded);
            }
        };

        match serde_json::from_str::<Vec<Recipe>>(raw) {
            Ok(recipes) => Ok(recipes),
            Err(_) => {
                let seeded = seed::default_recipes();
                self.save_recipes(&seeded)?;
                Ok(seeded)
            }
        }
    }

    fn save_recipes(&mut self, recipes: &[Recipe]) -> Result<()> {
        if self.fail_next_save {
            self.fail_next_save = false;
            return Err(KhanaError::Store("recipe slot is unavailable".to_string()));
        }
        let content =
            serde_json::to_string_pretty(recipes).map_err(KhanaError::Serialization)?;
        self.recipes_slot = Some(content);
        Ok(())
    }

    fn load_theme(&self) -> Theme {
        self.theme_slot
            .as_deref()
            .and_then(|raw| serde_json::from_str::<Theme>(raw).ok())
            .unwrap_or_default()
    }

    fn save_theme(&mut self, theme: Theme) -> Result<()> {
        let content = serde_json::to_string(&theme).map_err(KhanaError::Serialization)?;
        self.theme_slot = Some(content);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::form::{validate, RecipeForm};

    /// A filled-in form that passes validation; tweak fields per test.
    pub fn valid_form(title: &str) -> RecipeForm {
        RecipeForm {
            title: title.to_string(),
            description: "A perfectly serviceable test dish.".to_string(),
            ingredients: "1 cup rice\n2 cups water".to_string(),
            steps: "Boil water\nAdd rice".to_string(),
            prep_time: "5".to_string(),
            cook_time: "15".to_string(),
            difficulty: "easy".to_string(),
            image_url: String::new(),
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Replace the seed with `count` generated recipes.
        pub fn with_recipes(mut self, count: usize) -> Self {
            let mut recipes = Vec::new();
            for i in 0..count {
                let form = valid_form(&format!("Test Recipe {}", i + 1));
                let payload = validate(&form).unwrap();
                recipes.push(payload.into_recipe());
            }
            self.store.save_recipes(&recipes).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_seeds_on_first_load() {
        let mut store = InMemoryStore::new();
        let recipes = store.load_recipes().unwrap();
        assert_eq!(recipes.len(), 3);
        assert!(store.raw_recipes().is_some());
    }

    #[test]
    fn corrupted_slot_reseeds_once() {
        let mut store = InMemoryStore::with_raw_recipes("not json");
        let first = store.load_recipes().unwrap();
        assert_eq!(first.len(), 3);

        let second = store.load_recipes().unwrap();
        assert_eq!(second, first);
    }

    #[test]
    fn injected_failure_hits_exactly_one_save() {
        let mut store = InMemoryStore::new();
        let seeded = store.load_recipes().unwrap();

        store.fail_next_save();
        assert!(store.save_recipes(&seeded).is_err());
        assert!(store.save_recipes(&seeded).is_ok());
    }
}
