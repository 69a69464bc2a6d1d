//! # API Facade
//!
//! The single entry point UI collaborators use. A thin layer over the recipe
//! book, the query engine and the validation engine: it dispatches, it
//! normalizes (raw form input in, typed results out), and it never touches
//! stdout, stderr or the terminal. The same facade could back a CLI, a web
//! view or anything else.
//!
//! Generic over [`StorageBackend`]:
//! - Production: `KhanaApi<FileStore>`
//! - Testing: `KhanaApi<InMemoryStore>`

use crate::book::RecipeBook;
use crate::error::Result;
use crate::model::{Recipe, Theme};
use crate::store::StorageBackend;
use uuid::Uuid;

/// Outcome of submitting a raw form. Validation failure and unknown ids are
/// expected, user-correctable conditions, so they are values here, not errors.
#[derive(Debug)]
pub enum SubmitOutcome {
    Saved(Recipe),
    Invalid(FieldErrors),
    NotFound,
}

pub struct KhanaApi<S: StorageBackend> {
    book: RecipeBook<S>,
}

impl<S: StorageBackend> KhanaApi<S> {
    /// Load the collection through the given backend and wrap it.
    pub fn init(store: S) -> Result<Self> {
        Ok(Self {
            book: RecipeBook::load(store)?,
        })
    }

    pub fn all(&self) -> &[Recipe] {
        self.book.all()
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<&Recipe> {
        self.book.find_by_id(id)
    }

    pub fn query(&self, spec: &FilterSpec) -> Vec<&Recipe> {
        spec.apply(self.book.all())
    }

    /// Create from an already-validated payload.
    pub fn create(&mut self, payload: ValidatedRecipe) -> Result<Recipe> {
        self.book.create(payload)
    }

    /// Update from an already-validated payload; `Ok(None)` for unknown ids.
    pub fn update(&mut self, id: Uuid, payload: &ValidatedRecipe) -> Result<Option<Recipe>> {
        self.book.update(id, payload)
    }

    /// Validate a raw creation form and, when it passes, create the record.
    pub fn submit(&mut self, form: &RecipeForm) -> Result<SubmitOutcome> {
        match validate(form) {
            Ok(payload) => Ok(SubmitOutcome::Saved(self.book.create(payload)?)),
            Err(errors) => Ok(SubmitOutcome::Invalid(errors)),
        }
    }

    /// Validate a raw edit form and, when it passes, update the record.
    /// Validation runs first, so a bad form never reports `NotFound`.
    pub fn submit_update(&mut self, id: Uuid, form: &RecipeForm) -> Result<SubmitOutcome> {
        match validate(form) {
            Ok(payload) => match self.book.update(id, &payload)? {
                Some(recipe) => Ok(SubmitOutcome::Saved(recipe)),
                None => Ok(SubmitOutcome::NotFound),
            },
            Err(errors) => Ok(SubmitOutcome::Invalid(errors)),
        }
    }

    pub fn delete(&mut self, id: Uuid) -> Result<bool> {
        self.book.delete(id)
    }

    /// Turn a stored record back into raw form values, for edit-form
    /// population. The UI overlays the user's changes and submits the whole
    /// form again.
    pub fn prefill(&self, id: Uuid) -> Option<RecipeForm> {
        self.book.find_by_id(id).map(|recipe| RecipeForm {
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            ingredients: recipe.ingredients.join("\n"),
            steps: recipe.steps.join("\n"),
            prep_time: recipe.prep_time.to_string(),
            cook_time: recipe.cook_time.to_string(),
            difficulty: recipe.difficulty.to_string(),
            image_url: recipe.image_url.clone(),
        })
    }

    pub fn theme(&self) -> Theme {
        self.book.theme()
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.book.set_theme(theme)
    }
}

pub use crate::form::{validate, Field, FieldErrors, RecipeForm, ValidatedRecipe};
pub use crate::query::FilterSpec;
