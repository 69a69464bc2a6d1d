//! # Validation Engine
//!
//! Turns raw form input (everything arrives as strings, exactly as a UI
//! collaborator submits it) into a normalized [`ValidatedRecipe`], or a
//! [`FieldErrors`] map naming every violated field. Pure transform: never
//! touches the recipe book or durable storage.

use crate::model::{Difficulty, Recipe};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use url::Url;
use uuid::Uuid;

const TITLE_MIN: usize = 3;
const TITLE_MAX: usize = 100;
const DESCRIPTION_MIN: usize = 10;
const DESCRIPTION_MAX: usize = 500;
// 24 hours; anything longer is a data-entry mistake
const MINUTES_MAX: u32 = 1440;

/// The eight recipe form fields.
///
/// `Ord` so error maps iterate in a fixed order, and each field carries its
/// display identifier in one static table instead of being derived from the
/// field name at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Description,
    Ingredients,
    Steps,
    PrepTime,
    CookTime,
    Difficulty,
    ImageUrl,
}

impl Field {
    /// Identifier of the error slot a UI should render this field's message
    /// into.
    pub fn display_id(self) -> &'static str {
        match self {
            Self::Title => "error-title",
            Self::Description => "error-description",
            Self::Ingredients => "error-ingredients",
            Self::Steps => "error-steps",
            Self::PrepTime => "error-prep-time",
            Self::CookTime => "error-cook-time",
            Self::Difficulty => "error-difficulty",
            Self::ImageUrl => "error-image-url",
        }
    }

    /// Human-readable label, used by terminal UIs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Ingredients => "ingredients",
            Self::Steps => "steps",
            Self::PrepTime => "prep time",
            Self::CookTime => "cook time",
            Self::Difficulty => "difficulty",
            Self::ImageUrl => "image URL",
        }
    }
}

/// Raw candidate values for one recipe, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    pub title: String,
    pub description: String,
    /// Multi-line text, one ingredient per line
    pub ingredients: String,
    /// Multi-line text, one step per line
    pub steps: String,
    pub prep_time: String,
    pub cook_time: String,
    pub difficulty: String,
    pub image_url: String,
}

/// Every violated field with its message. All fields are checked
/// independently; nothing short-circuits on the first failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// A validated, normalized recipe payload. `total_time` is precomputed and
/// the line fields are already split and trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedRecipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub total_time: u32,
    pub difficulty: Difficulty,
    pub image_url: String,
}

impl ValidatedRecipe {
    /// Build a brand-new record: fresh id, `created_at == updated_at`.
    pub fn into_recipe(self) -> Recipe {
        let now = Utc::now();
        Recipe {
            id: Uuid::new_v4(),
            title: self.title,
            description: self.description,
            ingredients: self.ingredients,
            steps: self.steps,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            total_time: self.total_time,
            difficulty: self.difficulty,
            image_url: self.image_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply this payload over an existing record, field by field. `id` and
    /// `created_at` are never touched; `updated_at` is refreshed.
    pub fn apply_to(&self, recipe: &mut Recipe) {
        recipe.title = self.title.clone();
        recipe.description = self.description.clone();
        recipe.ingredients = self.ingredients.clone();
        recipe.steps = self.steps.clone();
        recipe.prep_time = self.prep_time;
        recipe.cook_time = self.cook_time;
        recipe.total_time = self.total_time;
        recipe.difficulty = self.difficulty;
        recipe.image_url = self.image_url.clone();
        recipe.updated_at = Utc::now();
    }
}

/// Split multi-line text into trimmed, non-empty lines, order preserved.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn validate(raw: &RecipeForm) -> Result<ValidatedRecipe, FieldErrors> {
    let mut errors = FieldErrors::default();

    let title = raw.title.trim();
    let title_len = title.chars().count();
    if title_len < TITLE_MIN || title_len > TITLE_MAX {
        errors.insert(
            Field::Title,
            format!(
                "Title must be between {} and {} characters",
                TITLE_MIN, TITLE_MAX
            ),
        );
    }

    let description = raw.description.trim();
    let description_len = description.chars().count();
    if description_len < DESCRIPTION_MIN || description_len > DESCRIPTION_MAX {
        errors.insert(
            Field::Description,
            format!(
                "Description must be between {} and {} characters",
                DESCRIPTION_MIN, DESCRIPTION_MAX
            ),
        );
    }

    let ingredients = split_lines(&raw.ingredients);
    if ingredients.is_empty() {
        errors.insert(Field::Ingredients, "Add at least one ingredient");
    }

    let steps = split_lines(&raw.steps);
    if steps.is_empty() {
        errors.insert(Field::Steps, "Add at least one step");
    }

    let prep_time = parse_minutes(&raw.prep_time, Field::PrepTime, &mut errors);
    let cook_time = parse_minutes(&raw.cook_time, Field::CookTime, &mut errors);

    let difficulty = match Difficulty::from_str(&raw.difficulty) {
        Ok(difficulty) => Some(difficulty),
        Err(_) => {
            errors.insert(Field::Difficulty, "Select a valid difficulty");
            None
        }
    };

    let image_url = raw.image_url.trim();
    if !image_url.is_empty() && !is_http_url(image_url) {
        errors.insert(
            Field::ImageUrl,
            "Image URL must be an absolute http:// or https:// URL",
        );
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // Every Option below is Some once the error map is empty
    let prep_time = prep_time.unwrap_or_default();
    let cook_time = cook_time.unwrap_or_default();
    Ok(ValidatedRecipe {
        title: title.to_string(),
        description: description.to_string(),
        ingredients,
        steps,
        prep_time,
        cook_time,
        total_time: prep_time + cook_time,
        difficulty: difficulty.unwrap_or(Difficulty::Easy),
        image_url: image_url.to_string(),
    })
}

/// Zero minutes is valid; negative and non-numeric input is not.
fn parse_minutes(raw: &str, field: Field, errors: &mut FieldErrors) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.insert(field, format!("{} is required", capitalize(field.label())));
        return None;
    }
    match trimmed.parse::<u32>() {
        Ok(minutes) if minutes <= MINUTES_MAX => Some(minutes),
        Ok(_) => {
            errors.insert(
                field,
                format!(
                    "{} cannot exceed {} minutes",
                    capitalize(field.label()),
                    MINUTES_MAX
                ),
            );
            None
        }
        Err(_) => {
            errors.insert(
                field,
                format!(
                    "{} must be a non-negative whole number of minutes",
                    capitalize(field.label())
                ),
            );
            None
        }
    }
}

fn is_http_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
