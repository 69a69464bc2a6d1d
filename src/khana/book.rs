//! # Record Store
//!
//! [`RecipeBook`] owns the canonical in-memory collection, loaded exactly once
//! through the storage backend and re-persisted on every mutation. All reads
//! hand out references or clones, never the live backing vector; every edit
//! goes through `create`/`update`/`delete`.
//!
//! Mutations are rolled back if the persist fails, so memory and the durable
//! slot never disagree about the last successful state.

use crate::error::Result;
use crate::form::ValidatedRecipe;
use crate::model::{Recipe, Theme};
use crate::store::StorageBackend;
use uuid::Uuid;

pub struct RecipeBook<S: StorageBackend> {
    store: S,
    recipes: Vec<Recipe>,
}

impl<S: StorageBackend> RecipeBook<S> {
    /// Pull the collection through the backend once and keep it in memory.
    pub fn load(mut store: S) -> Result<Self> {
        let recipes = store.load_recipes()?;
        Ok(Self { store, recipes })
    }

    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn create(&mut self, payload: ValidatedRecipe) -> Result<Recipe> {
        let recipe = payload.into_recipe();
        self.recipes.push(recipe.clone());
        if let Err(e) = self.store.save_recipes(&self.recipes) {
            self.recipes.pop();
            return Err(e);
        }
        Ok(recipe)
    }

    /// `Ok(None)` when no record has that id; nothing is persisted in that
    /// case.
    pub fn update(&mut self, id: Uuid, payload: &ValidatedRecipe) -> Result<Option<Recipe>> {
        let Some(pos) = self.recipes.iter().position(|r| r.id == id) else {
            return Ok(None);
        };

        let previous = self.recipes[pos].clone();
        payload.apply_to(&mut self.recipes[pos]);
        if let Err(e) = self.store.save_recipes(&self.recipes) {
            self.recipes[pos] = previous;
            return Err(e);
        }
        Ok(Some(self.recipes[pos].clone()))
    }

    /// Removes the record if present; persists only when a removal happened.
    pub fn delete(&mut self, id: Uuid) -> Result<bool> {
        let Some(pos) = self.recipes.iter().position(|r| r.id == id) else {
            return Ok(false);
        };

        let removed = self.recipes.remove(pos);
        if let Err(e) = self.store.save_recipes(&self.recipes) {
            self.recipes.insert(pos, removed);
            return Err(e);
        }
        Ok(true)
    }

    pub fn theme(&self) -> Theme {
        self.store.load_theme()
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.store.save_theme(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::validate;
    use crate::store::memory::fixtures::{valid_form, StoreFixture};
    use crate::store::memory::InMemoryStore;

    fn book() -> RecipeBook<InMemoryStore> {
        RecipeBook::load(InMemoryStore::new()).unwrap()
    }

    #[test]
    fn load_pulls_the_seeded_collection() {
        let book = book();
        assert_eq!(book.all().len(), 3);
    }

    #[test]
    fn load_reads_an_existing_slot_instead_of_seeding() {
        let fixture = StoreFixture::new().with_recipes(5);
        let book = RecipeBook::load(fixture.store).unwrap();

        assert_eq!(book.all().len(), 5);
        assert_eq!(book.all()[0].title, "Test Recipe 1");
    }

    #[test]
    fn create_stamps_id_times_and_total() {
        let mut book = book();
        let existing: Vec<_> = book.all().iter().map(|r| r.id).collect();

        let payload = validate(&valid_form("Dal Tadka")).unwrap();
        let recipe = book.create(payload).unwrap();

        assert_eq!(recipe.total_time, recipe.prep_time + recipe.cook_time);
        assert_eq!(recipe.created_at, recipe.updated_at);
        assert!(!existing.contains(&recipe.id));
        assert_eq!(book.all().len(), 4);
        assert_eq!(book.find_by_id(recipe.id).unwrap().title, "Dal Tadka");
    }

    #[test]
    fn rapid_creates_never_collide() {
        let mut book = book();
        let a = book.create(validate(&valid_form("One")).unwrap()).unwrap();
        let b = book.create(validate(&valid_form("Two")).unwrap()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn update_preserves_id_and_created_at() {
        let mut book = book();
        let created = book.create(validate(&valid_form("Before")).unwrap()).unwrap();

        let mut form = valid_form("After");
        form.cook_time = "30".to_string();
        let payload = validate(&form).unwrap();
        let updated = book.update(created.id, &payload).unwrap().unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.title, "After");
        assert_eq!(updated.total_time, 35);
    }

    #[test]
    fn updated_at_is_non_decreasing_across_updates() {
        let mut book = book();
        let created = book.create(validate(&valid_form("Dish")).unwrap()).unwrap();

        let payload = validate(&valid_form("Dish v2")).unwrap();
        let first = book.update(created.id, &payload).unwrap().unwrap();
        let second = book.update(created.id, &payload).unwrap().unwrap();

        assert!(first.updated_at >= created.updated_at);
        assert!(second.updated_at >= first.updated_at);
        assert_eq!(second.created_at, created.created_at);
    }

    #[test]
    fn update_unknown_id_is_a_reported_noop() {
        let mut book = book();
        let before: Vec<_> = book.all().to_vec();

        let payload = validate(&valid_form("Ghost")).unwrap();
        assert!(book.update(Uuid::new_v4(), &payload).unwrap().is_none());
        assert_eq!(book.all(), before.as_slice());
    }

    #[test]
    fn delete_removes_and_reports() {
        let mut book = book();
        let id = book.all()[0].id;

        assert!(book.delete(id).unwrap());
        assert_eq!(book.all().len(), 2);
        assert!(book.find_by_id(id).is_none());
    }

    #[test]
    fn delete_unknown_id_leaves_the_slot_untouched() {
        let mut store = InMemoryStore::new();
        store.load_recipes().unwrap();
        let before = store.raw_recipes().unwrap().to_string();

        let mut book = RecipeBook::load(store).unwrap();
        assert!(!book.delete(Uuid::new_v4()).unwrap());
        assert_eq!(book.store.raw_recipes().unwrap(), before);
    }

    #[test]
    fn failed_save_rolls_back_create() {
        let mut book = book();
        book.store.fail_next_save();

        let payload = validate(&valid_form("Doomed")).unwrap();
        assert!(book.create(payload).is_err());
        assert_eq!(book.all().len(), 3);
        assert!(book.all().iter().all(|r| r.title != "Doomed"));
    }

    #[test]
    fn failed_save_rolls_back_update() {
        let mut book = book();
        let id = book.all()[0].id;
        let original_title = book.all()[0].title.clone();
        book.store.fail_next_save();

        let payload = validate(&valid_form("Doomed Edit")).unwrap();
        assert!(book.update(id, &payload).is_err());
        assert_eq!(book.find_by_id(id).unwrap().title, original_title);
    }

    #[test]
    fn failed_save_rolls_back_delete() {
        let mut book = book();
        let id = book.all()[1].id;
        book.store.fail_next_save();

        assert!(book.delete(id).is_err());
        assert_eq!(book.all().len(), 3);
        assert_eq!(book.all()[1].id, id);
    }

    #[test]
    fn theme_round_trips_through_the_backend() {
        let mut book = book();
        assert_eq!(book.theme(), Theme::Light);

        book.set_theme(Theme::Dark).unwrap();
        assert_eq!(book.theme(), Theme::Dark);
    }
}
