//! Built-in starter recipes, used whenever the durable slot is absent or
//! corrupted. Reseeding replaces the collection wholesale, so fresh ids and
//! timestamps are stamped on every call.

use crate::model::{Difficulty, Recipe};
use chrono::Utc;
use uuid::Uuid;

pub fn default_recipes() -> Vec<Recipe> {
    let now = Utc::now();

    vec![
        Recipe {
            id: Uuid::new_v4(),
            title: "Paneer Butter Masala".to_string(),
            description: "Rich and creamy paneer curry cooked in buttery tomato gravy."
                .to_string(),
            ingredients: vec![
                "200 g paneer cubes".to_string(),
                "2 tbsp butter".to_string(),
                "2 tbsp oil".to_string(),
                "2 medium onions (finely chopped)".to_string(),
                "3 medium tomatoes (pureed)".to_string(),
                "1 tsp ginger-garlic paste".to_string(),
                "1/2 cup cream".to_string(),
                "1 tsp red chilli powder".to_string(),
                "1 tsp garam masala".to_string(),
                "Salt to taste".to_string(),
            ],
            steps: vec![
                "Heat oil and butter in a pan, add onions and sauté till golden.".to_string(),
                "Add ginger-garlic paste and cook for a minute.".to_string(),
                "Add tomato puree and spices, cook till oil separates.".to_string(),
                "Add paneer cubes, mix gently and cook for 3–4 minutes.".to_string(),
                "Stir in cream, adjust salt and serve hot with roti or naan.".to_string(),
            ],
            prep_time: 15,
            cook_time: 25,
            total_time: 40,
            difficulty: Difficulty::Medium,
            image_url: String::new(),
            created_at: now,
            updated_at: now,
        },
        Recipe {
            id: Uuid::new_v4(),
            title: "Masala Chai".to_string(),
            description: "Spiced Indian milk tea with cardamom, ginger and cloves.".to_string(),
            ingredients: vec![
                "1 cup water".to_string(),
                "1 cup milk".to_string(),
                "2 tsp tea leaves".to_string(),
                "2–3 cardamom pods (crushed)".to_string(),
                "1 small piece ginger (crushed)".to_string(),
                "1–2 cloves".to_string(),
                "Sugar to taste".to_string(),
            ],
            steps: vec![
                "Add water, ginger, cardamom and cloves to a pan and bring to a boil."
                    .to_string(),
                "Simmer for 2 minutes so the spices release flavour.".to_string(),
                "Add tea leaves and boil for another minute.".to_string(),
                "Add milk and sugar, bring to a gentle boil.".to_string(),
                "Strain into cups and serve hot.".to_string(),
            ],
            prep_time: 5,
            cook_time: 8,
            total_time: 13,
            difficulty: Difficulty::Easy,
            image_url: String::new(),
            created_at: now,
            updated_at: now,
        },
        Recipe {
            id: Uuid::new_v4(),
            title: "Poha".to_string(),
            description: "Light, savoury flattened rice breakfast with onions and peanuts."
                .to_string(),
            ingredients: vec![
                "2 cups thick poha (flattened rice)".to_string(),
                "1 medium onion (chopped)".to_string(),
                "1 green chilli (chopped)".to_string(),
                "1/4 cup peanuts".to_string(),
                "1/2 tsp mustard seeds".to_string(),
                "1/2 tsp turmeric".to_string(),
                "Salt, lemon juice, coriander leaves".to_string(),
            ],
            steps: vec![
                "Rinse poha in water, drain and keep aside.".to_string(),
                "Heat oil, fry peanuts, then keep them aside.".to_string(),
                "In the same pan, add mustard seeds, onion and green chilli, sauté till soft."
                    .to_string(),
                "Add turmeric, salt and soaked poha, mix gently.".to_string(),
                "Top with peanuts, lemon juice and coriander, then serve warm.".to_string(),
            ],
            prep_time: 10,
            cook_time: 10,
            total_time: 20,
            difficulty: Difficulty::Easy,
            image_url: String::new(),
            created_at: now,
            updated_at: now,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_set_is_consistent() {
        let seeded = default_recipes();
        assert_eq!(seeded.len(), 3);
        for recipe in &seeded {
            assert_eq!(recipe.total_time, recipe.prep_time + recipe.cook_time);
            assert!(!recipe.ingredients.is_empty());
            assert!(!recipe.steps.is_empty());
            assert_eq!(recipe.created_at, recipe.updated_at);
        }
    }

    #[test]
    fn seed_ids_are_unique() {
        let seeded = default_recipes();
        assert_ne!(seeded[0].id, seeded[1].id);
        assert_ne!(seeded[1].id, seeded[2].id);
    }
}
