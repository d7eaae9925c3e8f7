use std::collections::HashMap;

use crate::models::DayPart;

// Meal pools, one set of 7 per day-part. Names double as recipe-template keys.

const VEGAN_BREAKFAST: &[&str] = &[
    "Oats + Soy Milk + Banana",
    "Peanut Butter Toast + Banana",
    "Tofu Scramble + Spinach",
    "Granola + Soy Yogurt + Fruit",
    "Smoothie (Banana + Oats + Soy Milk)",
    "Avocado Toast (no egg)",
    "Fruit Bowl + Granola",
];

const VEGAN_LUNCH: &[&str] = &[
    "Tempe Stir Fry + Rice",
    "Lentil Soup + Bread",
    "Vegan Fried Rice (Tempe + Veggies)",
    "Tofu Curry + Rice",
    "Chickpea Stir Fry + Rice",
    "Stir Fried Noodles + Veggies (no egg)",
    "Tofu Teriyaki + Rice",
];

const VEGAN_DINNER: &[&str] = &[
    "Chickpea Veggie Bowl",
    "Tofu + Broccoli + Rice",
    "Vegan Noodle Soup",
    "Veggie Stir Fry + Rice",
    "Tempe + Mixed Vegetables + Rice",
    "Tofu Sambal + Rice",
    "Vegetable Curry + Rice",
];

const NON_VEGAN_BREAKFAST: &[&str] = &[
    "Oatmeal + 2 Eggs",
    "Egg Sandwich",
    "Yogurt + Banana + Granola",
    "Peanut Butter Toast",
    "Fried Rice + Egg",
    "Chicken Porridge",
    "Banana + Yogurt + Granola",
];

const NON_VEGAN_LUNCH: &[&str] = &[
    "Chicken Breast + Rice + Veggies",
    "Egg Fried Rice + Veggies",
    "Tuna + Rice + Veggies",
    "Tempe + Rice + Sayur",
    "Ayam Kecap + Rice",
    "Chicken Stir Fry + Rice",
    "Noodle Soup + Egg + Veggies",
];

const NON_VEGAN_DINNER: &[&str] = &[
    "Chicken Soup + Rice",
    "Tahu + Sayur + Rice",
    "Fried Rice + Egg + Veggies",
    "Nasi Goreng Ayam (light oil)",
    "Instant Noodles + Egg + Veggies",
    "Tuna + Stir Fry Veggies",
    "Chicken Teriyaki + Rice",
];

/// Resolve an ingredient label to its canonical snake_case key.
///
/// Shared by the portion estimator, recipe resolver and grocery aggregator so
/// that equivalent spellings ("vegetables", "vegetable mix") accumulate under
/// one key instead of silently double-counting.
pub fn canonical_ingredient(name: &str) -> String {
    let key = name.trim().to_lowercase().replace(' ', "_");
    match key.as_str() {
        "vegetables" | "vegetable" => "vegetable_mix".to_string(),
        "milk" => "soy_milk".to_string(),
        _ => key,
    }
}

/// Recipe template: base ingredient grams for one serving plus preparation.
#[derive(Debug, Clone)]
pub struct RecipeTemplate {
    pub ingredients: Vec<(&'static str, i64)>,
    pub steps: Vec<&'static str>,
    pub notes: &'static str,
}

/// Read-only lookup tables shared across the pipeline. Built once at startup
/// and held behind an `Arc` by the services that consult it.
#[derive(Debug)]
pub struct Catalog {
    recipes: HashMap<&'static str, RecipeTemplate>,
    base_portions: HashMap<&'static str, f64>,
    costs: HashMap<&'static str, i64>,
    cooking_methods: HashMap<&'static str, &'static str>,
}

const DEFAULT_COST_PER_100G: i64 = 3000;
const DEFAULT_BASE_GRAMS: f64 = 100.0;
const DEFAULT_COOKING_METHOD: &str = "Cook to preference (stir-fry, boil, or grill).";
const DEFAULT_RECIPE_STEP: &str = "Prepare each ingredient to your own preference.";
const DEFAULT_RECIPE_NOTES: &str = "This meal is not in the recipe database yet.";

impl Catalog {
    pub fn new() -> Self {
        Self {
            recipes: recipe_templates(),
            base_portions: base_portions(),
            costs: costs_per_100g(),
            cooking_methods: cooking_methods(),
        }
    }

    pub fn meal_pool(&self, vegan: bool, part: DayPart) -> &'static [&'static str] {
        match (vegan, part) {
            (true, DayPart::Breakfast) => VEGAN_BREAKFAST,
            (true, DayPart::Lunch) => VEGAN_LUNCH,
            (true, DayPart::Dinner) => VEGAN_DINNER,
            (false, DayPart::Breakfast) => NON_VEGAN_BREAKFAST,
            (false, DayPart::Lunch) => NON_VEGAN_LUNCH,
            (false, DayPart::Dinner) => NON_VEGAN_DINNER,
        }
    }

    pub fn recipe(&self, meal: &str) -> Option<&RecipeTemplate> {
        self.recipes.get(meal)
    }

    /// Fallback template for meals missing from the database. Structurally
    /// complete so downstream stages never see missing fields.
    pub fn fallback_recipe(&self) -> RecipeTemplate {
        RecipeTemplate {
            ingredients: Vec::new(),
            steps: vec![DEFAULT_RECIPE_STEP],
            notes: DEFAULT_RECIPE_NOTES,
        }
    }

    /// Ingredient keys for a meal, empty for unknown meals.
    pub fn meal_ingredients(&self, meal: &str) -> Vec<String> {
        self.recipes
            .get(meal)
            .map(|r| r.ingredients.iter().map(|(k, _)| (*k).to_string()).collect())
            .unwrap_or_default()
    }

    pub fn cost_per_100g(&self, ingredient: &str) -> i64 {
        let key = canonical_ingredient(ingredient);
        self.costs
            .get(key.as_str())
            .copied()
            .unwrap_or(DEFAULT_COST_PER_100G)
    }

    pub fn base_grams(&self, ingredient: &str) -> f64 {
        let key = canonical_ingredient(ingredient);
        self.base_portions
            .get(key.as_str())
            .copied()
            .unwrap_or(DEFAULT_BASE_GRAMS)
    }

    pub fn cooking_method(&self, ingredient: &str) -> &'static str {
        let key = canonical_ingredient(ingredient);
        self.cooking_methods
            .get(key.as_str())
            .copied()
            .unwrap_or(DEFAULT_COOKING_METHOD)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Typical single-serving grams per ingredient, before goal scaling.
fn base_portions() -> HashMap<&'static str, f64> {
    HashMap::from([
        // Proteins
        ("chicken_breast", 150.0),
        ("egg", 100.0),
        ("tofu", 150.0),
        ("tempeh", 150.0),
        ("tuna", 150.0),
        ("chickpea", 120.0),
        ("lentil", 120.0),
        // Carbs
        ("rice", 150.0),
        ("oats", 50.0),
        ("pasta", 100.0),
        ("bread", 50.0),
        // Vegetables
        ("vegetable_mix", 100.0),
        ("spinach", 50.0),
        ("broccoli", 80.0),
        // Dairy and alternatives
        ("soy_milk", 200.0),
        ("yogurt", 100.0),
        // Seasonings
        ("sugar", 5.0),
        ("salt", 2.0),
        ("pepper", 1.0),
        ("cooking_oil", 10.0),
        ("olive_oil", 10.0),
        ("soy_sauce", 10.0),
        ("sweet_soy_sauce", 10.0),
        ("chili_sauce", 10.0),
        ("curry_powder", 5.0),
        ("coconut_milk", 100.0),
        ("butter", 5.0),
        ("margarine", 5.0),
        ("peanut_butter", 20.0),
        // Aromatics
        ("onion", 20.0),
        ("garlic", 10.0),
    ])
}

/// Price per 100 g in currency minor units.
fn costs_per_100g() -> HashMap<&'static str, i64> {
    HashMap::from([
        // Proteins
        ("chicken_breast", 6000),
        ("egg", 2500),
        ("tofu", 2500),
        ("tempeh", 3000),
        ("tuna", 8500),
        ("chickpea", 7000),
        ("lentil", 6000),
        // Carbs
        ("rice", 1500),
        ("oats", 3000),
        ("pasta", 3000),
        ("bread", 2000),
        // Fruit and vegetables
        ("banana", 2000),
        ("vegetable_mix", 2000),
        ("spinach", 4000),
        ("broccoli", 8000),
        // Dairy and alternatives
        ("soy_milk", 2000),
        ("yogurt", 8000),
        // Seasonings
        ("sugar", 1200),
        ("salt", 500),
        ("pepper", 8000),
        ("cooking_oil", 12000),
        ("olive_oil", 26000),
        ("soy_sauce", 8000),
        ("sweet_soy_sauce", 7000),
        ("chili_sauce", 6000),
        ("curry_powder", 10000),
        ("coconut_milk", 5000),
        ("butter", 18000),
        ("margarine", 10000),
        ("peanut_butter", 15000),
        // Aromatics
        ("onion", 3000),
        ("garlic", 4000),
    ])
}

/// One-line preparation instruction per ingredient.
fn cooking_methods() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("rice", "Rinse and cook in a rice cooker or pot until done."),
        ("chicken_breast", "Season and pan-fry or grill 7-10 minutes per side."),
        ("tuna", "Season and pan-fry or grill 5-7 minutes per side."),
        ("egg", "Boil or scramble to preference."),
        ("tofu", "Cube and fry or stir-fry with simple seasoning."),
        ("tempeh", "Slice and fry or stir-fry with soy sauce."),
        ("oats", "Simmer in water or milk for 3-5 minutes."),
        ("vegetable_mix", "Wash and stir-fry or boil until tender."),
        ("pasta", "Boil 7-10 minutes until al dente."),
        ("soy_milk", "Drink as is or mix into oats or a smoothie."),
        ("coconut_milk", "Use as a curry or soup base, simmer briefly."),
        ("peanut_butter", "Spread on bread or blend into a smoothie."),
        ("yogurt", "Eat as is or mix with fruit and granola."),
        ("bread", "Toast or eat as is."),
        ("banana", "Peel and eat, or slice as a topping."),
        ("sugar", "Use sparingly as a sweetener."),
        ("salt", "Season to taste."),
        ("pepper", "Sprinkle to taste."),
        ("cooking_oil", "Use for sauteing or frying."),
        ("soy_sauce", "Use as a savory seasoning."),
        ("sweet_soy_sauce", "Use for sweetness and color."),
        ("chili_sauce", "Use for heat."),
        ("curry_powder", "Saute with aromatics as a curry base."),
    ])
}

fn recipe_templates() -> HashMap<&'static str, RecipeTemplate> {
    let mut db = HashMap::new();

    // Vegan breakfast
    db.insert(
        "Oats + Soy Milk + Banana",
        RecipeTemplate {
            ingredients: vec![("oats", 50), ("soy_milk", 150), ("banana", 100), ("sugar", 5)],
            steps: vec![
                "Simmer the oats in soy milk until slightly thickened.",
                "Slice the banana on top.",
                "Add sugar if you like it sweet.",
            ],
            notes: "Single serving, quick and nutritious breakfast.",
        },
    );
    db.insert(
        "Peanut Butter Toast + Banana",
        RecipeTemplate {
            ingredients: vec![("bread", 50), ("peanut_butter", 20), ("banana", 100)],
            steps: vec![
                "Spread peanut butter on toasted bread.",
                "Top with banana slices.",
            ],
            notes: "Single serving, protein rich.",
        },
    );
    db.insert(
        "Tofu Scramble + Spinach",
        RecipeTemplate {
            ingredients: vec![
                ("tofu", 150),
                ("spinach", 50),
                ("onion", 20),
                ("garlic", 10),
                ("cooking_oil", 10),
                ("salt", 2),
                ("pepper", 1),
            ],
            steps: vec![
                "Saute the onion and garlic until fragrant.",
                "Crumble in the tofu and add the spinach.",
                "Season with salt and pepper, cook briefly.",
            ],
            notes: "High-protein breakfast.",
        },
    );
    db.insert(
        "Granola + Soy Yogurt + Fruit",
        RecipeTemplate {
            ingredients: vec![("soy_milk", 100), ("banana", 50), ("oats", 20), ("bread", 50)],
            steps: vec![
                "Mix the soy milk with the oats and add chopped fruit.",
                "Serve with toasted bread.",
            ],
            notes: "Light and healthy.",
        },
    );
    db.insert(
        "Smoothie (Banana + Oats + Soy Milk)",
        RecipeTemplate {
            ingredients: vec![("banana", 100), ("oats", 30), ("soy_milk", 150)],
            steps: vec![
                "Put everything in a blender.",
                "Blend until smooth and serve cold.",
            ],
            notes: "Fast, nutritious breakfast.",
        },
    );
    db.insert(
        "Avocado Toast (no egg)",
        RecipeTemplate {
            ingredients: vec![
                ("bread", 50),
                ("vegetable_mix", 30),
                ("olive_oil", 5),
                ("salt", 2),
                ("pepper", 1),
            ],
            steps: vec![
                "Toast the bread until crisp.",
                "Mash the avocado mix and spread it on the toast.",
                "Finish with salt and pepper to taste.",
            ],
            notes: "Healthy and filling.",
        },
    );
    db.insert(
        "Fruit Bowl + Granola",
        RecipeTemplate {
            ingredients: vec![("banana", 50), ("oats", 30), ("vegetable_mix", 50)],
            steps: vec![
                "Mix the oats with the chopped fruit.",
                "Serve as a quick breakfast bowl.",
            ],
            notes: "Fiber rich, single serving.",
        },
    );

    // Vegan lunch
    db.insert(
        "Tempe Stir Fry + Rice",
        RecipeTemplate {
            ingredients: vec![
                ("tempeh", 150),
                ("rice", 150),
                ("vegetable_mix", 80),
                ("garlic", 10),
                ("onion", 20),
                ("sweet_soy_sauce", 10),
                ("cooking_oil", 10),
                ("pepper", 1),
                ("salt", 2),
            ],
            steps: vec![
                "Saute the onion and garlic in oil.",
                "Add the tempeh and stir-fry until cooked through.",
                "Add the vegetables and rice, season with sweet soy sauce, salt and pepper.",
            ],
            notes: "Single serving, complete lunch.",
        },
    );
    db.insert(
        "Lentil Soup + Bread",
        RecipeTemplate {
            ingredients: vec![
                ("lentil", 100),
                ("vegetable_mix", 80),
                ("onion", 20),
                ("garlic", 10),
                ("cooking_oil", 10),
                ("salt", 2),
                ("pepper", 1),
                ("bread", 50),
            ],
            steps: vec![
                "Saute the onion and garlic, add the lentils and vegetables.",
                "Add water and simmer until the lentils are soft.",
                "Serve with toasted bread.",
            ],
            notes: "Healthy lunch.",
        },
    );
    db.insert(
        "Vegan Fried Rice (Tempe + Veggies)",
        RecipeTemplate {
            ingredients: vec![
                ("rice", 150),
                ("tempeh", 100),
                ("vegetable_mix", 80),
                ("garlic", 10),
                ("onion", 20),
                ("sweet_soy_sauce", 10),
                ("cooking_oil", 10),
                ("salt", 2),
                ("pepper", 1),
            ],
            steps: vec![
                "Saute the onion and garlic, add the tempeh and vegetables.",
                "Add the rice and sweet soy sauce, season with salt and pepper.",
            ],
            notes: "Complete lunch.",
        },
    );
    db.insert(
        "Tofu Curry + Rice",
        RecipeTemplate {
            ingredients: vec![
                ("tofu", 150),
                ("rice", 150),
                ("coconut_milk", 100),
                ("onion", 40),
                ("garlic", 10),
                ("curry_powder", 8),
                ("vegetable_mix", 80),
                ("cooking_oil", 10),
                ("salt", 2),
                ("pepper", 1),
            ],
            steps: vec![
                "Cube the tofu and fry briefly until golden.",
                "Saute the onion and garlic, add the curry powder.",
                "Add the coconut milk and vegetables, simmer until half done.",
                "Add the tofu and cook until the sauce thickens slightly.",
                "Serve with warm rice.",
            ],
            notes: "Add chili if you like it spicy.",
        },
    );
    db.insert(
        "Chickpea Stir Fry + Rice",
        RecipeTemplate {
            ingredients: vec![
                ("chickpea", 100),
                ("rice", 150),
                ("vegetable_mix", 80),
                ("garlic", 10),
                ("onion", 20),
                ("cooking_oil", 10),
                ("salt", 2),
                ("pepper", 1),
                ("soy_sauce", 5),
            ],
            steps: vec![
                "Saute the onion and garlic.",
                "Add the chickpeas and vegetables, cook briefly.",
                "Add the rice and season with salt, pepper and soy sauce.",
            ],
            notes: "Plant-protein lunch.",
        },
    );
    db.insert(
        "Stir Fried Noodles + Veggies (no egg)",
        RecipeTemplate {
            ingredients: vec![
                ("pasta", 100),
                ("vegetable_mix", 80),
                ("garlic", 10),
                ("onion", 20),
                ("cooking_oil", 10),
                ("soy_sauce", 10),
                ("salt", 2),
                ("pepper", 1),
            ],
            steps: vec![
                "Boil the noodles until done and drain.",
                "Saute the onion and garlic, add the vegetables.",
                "Add the noodles and season with soy sauce, salt and pepper.",
            ],
            notes: "Quick, healthy lunch.",
        },
    );
    db.insert(
        "Tofu Teriyaki + Rice",
        RecipeTemplate {
            ingredients: vec![
                ("tofu", 150),
                ("rice", 150),
                ("vegetable_mix", 80),
                ("soy_sauce", 15),
                ("cooking_oil", 10),
                ("sugar", 5),
                ("garlic", 10),
                ("salt", 2),
            ],
            steps: vec![
                "Fry the tofu until lightly browned.",
                "Stir-fry the vegetables briefly and add the tofu.",
                "Add the teriyaki sauce (soy sauce, sugar, garlic) and serve with rice.",
            ],
            notes: "Sweet-savory single serving lunch.",
        },
    );

    // Vegan dinner
    db.insert(
        "Chickpea Veggie Bowl",
        RecipeTemplate {
            ingredients: vec![
                ("chickpea", 120),
                ("vegetable_mix", 100),
                ("garlic", 10),
                ("onion", 20),
                ("cooking_oil", 10),
                ("salt", 2),
                ("pepper", 1),
            ],
            steps: vec![
                "Saute the onion and garlic, add the chickpeas and vegetables.",
                "Cook through and season with salt and pepper.",
            ],
            notes: "Plant-protein dinner.",
        },
    );
    db.insert(
        "Tofu + Broccoli + Rice",
        RecipeTemplate {
            ingredients: vec![
                ("tofu", 150),
                ("rice", 150),
                ("broccoli", 80),
                ("garlic", 10),
                ("onion", 20),
                ("cooking_oil", 10),
                ("salt", 2),
                ("pepper", 1),
                ("soy_sauce", 5),
            ],
            steps: vec![
                "Fry the tofu briefly, then saute the onion and broccoli.",
                "Add the tofu and rice, season with salt, pepper and soy sauce.",
            ],
            notes: "Healthy, complete dinner.",
        },
    );
    db.insert(
        "Vegan Noodle Soup",
        RecipeTemplate {
            ingredients: vec![
                ("pasta", 100),
                ("vegetable_mix", 80),
                ("garlic", 10),
                ("onion", 20),
                ("cooking_oil", 10),
                ("salt", 2),
                ("pepper", 1),
                ("soy_sauce", 5),
            ],
            steps: vec![
                "Boil the noodles; saute the onion and vegetables, then add water.",
                "Combine the noodles with the broth and season with salt, pepper and soy sauce.",
            ],
            notes: "Light, warming dinner.",
        },
    );
    db.insert(
        "Veggie Stir Fry + Rice",
        RecipeTemplate {
            ingredients: vec![
                ("vegetable_mix", 120),
                ("rice", 150),
                ("garlic", 10),
                ("onion", 20),
                ("cooking_oil", 10),
                ("soy_sauce", 5),
                ("salt", 2),
                ("pepper", 1),
            ],
            steps: vec![
                "Stir-fry the vegetables until wilted, then add the rice.",
                "Season with soy sauce, salt and pepper.",
            ],
            notes: "Easy and quick.",
        },
    );
    db.insert(
        "Tempe + Mixed Vegetables + Rice",
        RecipeTemplate {
            ingredients: vec![
                ("tempeh", 150),
                ("rice", 150),
                ("vegetable_mix", 100),
                ("garlic", 10),
                ("onion", 20),
                ("cooking_oil", 10),
                ("soy_sauce", 5),
                ("salt", 2),
                ("pepper", 1),
            ],
            steps: vec![
                "Stir-fry the tempeh with the onion, then add the vegetables.",
                "Add the rice, soy sauce, salt and pepper.",
            ],
            notes: "Plant-protein dinner.",
        },
    );
    db.insert(
        "Tofu Sambal + Rice",
        RecipeTemplate {
            ingredients: vec![
                ("tofu", 150),
                ("rice", 150),
                ("chili_sauce", 15),
                ("garlic", 10),
                ("onion", 20),
                ("cooking_oil", 10),
                ("salt", 2),
            ],
            steps: vec![
                "Fry the tofu; saute the onion and garlic.",
                "Add the chili sauce, then the rice, and toss to coat.",
            ],
            notes: "Spicy, single serving.",
        },
    );
    db.insert(
        "Vegetable Curry + Rice",
        RecipeTemplate {
            ingredients: vec![
                ("vegetable_mix", 120),
                ("rice", 150),
                ("coconut_milk", 100),
                ("onion", 20),
                ("garlic", 10),
                ("curry_powder", 8),
                ("cooking_oil", 10),
                ("salt", 2),
                ("pepper", 1),
            ],
            steps: vec![
                "Saute the onion and garlic, then add the curry powder.",
                "Add the vegetables and coconut milk, cook until done.",
                "Serve with warm rice.",
            ],
            notes: "Healthy dinner.",
        },
    );

    // Non-vegan breakfast
    db.insert(
        "Oatmeal + 2 Eggs",
        RecipeTemplate {
            ingredients: vec![("oats", 50), ("egg", 100), ("milk", 100), ("salt", 2)],
            steps: vec![
                "Simmer the oats in milk until thickened.",
                "Boil or scramble the eggs and serve alongside.",
            ],
            notes: "Protein-rich breakfast.",
        },
    );
    db.insert(
        "Egg Sandwich",
        RecipeTemplate {
            ingredients: vec![
                ("egg", 100),
                ("bread", 50),
                ("butter", 5),
                ("salt", 2),
                ("pepper", 1),
            ],
            steps: vec![
                "Fry the egg and season with salt and pepper.",
                "Serve between buttered bread slices.",
            ],
            notes: "Single serving.",
        },
    );
    db.insert(
        "Yogurt + Banana + Granola",
        RecipeTemplate {
            ingredients: vec![("banana", 50), ("oats", 20), ("yogurt", 100)],
            steps: vec![
                "Mix the yogurt with the sliced banana and granola.",
                "Serve cold.",
            ],
            notes: "Light and healthy.",
        },
    );
    db.insert(
        "Peanut Butter Toast",
        RecipeTemplate {
            ingredients: vec![("bread", 50), ("peanut_butter", 20)],
            steps: vec!["Spread peanut butter on toasted bread."],
            notes: "Quick and practical.",
        },
    );
    db.insert(
        "Fried Rice + Egg",
        RecipeTemplate {
            ingredients: vec![
                ("rice", 150),
                ("egg", 100),
                ("vegetable_mix", 80),
                ("garlic", 10),
                ("onion", 20),
                ("cooking_oil", 10),
                ("salt", 2),
                ("pepper", 1),
            ],
            steps: vec![
                "Saute the onion and garlic, then add the vegetables.",
                "Add the rice, stir in the scrambled egg and mix well.",
            ],
            notes: "Complete breakfast.",
        },
    );
    db.insert(
        "Chicken Porridge",
        RecipeTemplate {
            ingredients: vec![("rice", 150), ("chicken_breast", 100), ("salt", 2), ("pepper", 1)],
            steps: vec![
                "Simmer the rice in water with shredded chicken, salt and pepper until done.",
            ],
            notes: "Warm and nourishing.",
        },
    );
    db.insert(
        "Banana + Yogurt + Granola",
        RecipeTemplate {
            ingredients: vec![("banana", 50), ("yogurt", 100), ("oats", 20)],
            steps: vec!["Mix everything together and serve cold."],
            notes: "Light, quick to serve.",
        },
    );

    // Non-vegan lunch
    db.insert(
        "Chicken Breast + Rice + Veggies",
        RecipeTemplate {
            ingredients: vec![
                ("chicken_breast", 150),
                ("rice", 150),
                ("vegetable_mix", 80),
                ("garlic", 10),
                ("onion", 20),
                ("cooking_oil", 10),
                ("salt", 2),
                ("pepper", 1),
                ("soy_sauce", 5),
            ],
            steps: vec![
                "Fry the chicken until cooked through, season with salt and pepper.",
                "Saute the onion and vegetables, add the rice and chicken.",
                "Add the soy sauce and mix well.",
            ],
            notes: "Single serving, complete lunch.",
        },
    );
    db.insert(
        "Egg Fried Rice + Veggies",
        RecipeTemplate {
            ingredients: vec![
                ("rice", 150),
                ("egg", 100),
                ("vegetable_mix", 80),
                ("garlic", 10),
                ("onion", 20),
                ("cooking_oil", 10),
                ("salt", 2),
                ("pepper", 1),
                ("soy_sauce", 5),
            ],
            steps: vec![
                "Saute the onion and vegetables, then add the rice.",
                "Stir in the scrambled egg and season.",
            ],
            notes: "Quick and nutritious.",
        },
    );
    db.insert(
        "Tuna + Rice + Veggies",
        RecipeTemplate {
            ingredients: vec![
                ("tuna", 150),
                ("rice", 150),
                ("vegetable_mix", 80),
                ("garlic", 10),
                ("onion", 20),
                ("cooking_oil", 10),
                ("salt", 2),
                ("pepper", 1),
                ("soy_sauce", 5),
            ],
            steps: vec![
                "Saute the onion and vegetables, then add the tuna.",
                "Add the rice and seasoning, mix well.",
            ],
            notes: "Protein-rich lunch.",
        },
    );
    db.insert(
        "Tempe + Rice + Sayur",
        RecipeTemplate {
            ingredients: vec![
                ("tempeh", 150),
                ("rice", 150),
                ("vegetable_mix", 80),
                ("garlic", 10),
                ("onion", 20),
                ("cooking_oil", 10),
                ("sweet_soy_sauce", 10),
                ("salt", 2),
                ("pepper", 1),
            ],
            steps: vec![
                "Stir-fry the tempeh with the onion, then add the vegetables.",
                "Add the rice and season with sweet soy sauce, salt and pepper.",
            ],
            notes: "Plant protein, complete lunch.",
        },
    );
    db.insert(
        "Ayam Kecap + Rice",
        RecipeTemplate {
            ingredients: vec![
                ("chicken_breast", 150),
                ("rice", 150),
                ("onion", 20),
                ("garlic", 10),
                ("sweet_soy_sauce", 15),
                ("cooking_oil", 10),
                ("salt", 2),
                ("pepper", 1),
            ],
            steps: vec![
                "Fry the chicken until half done.",
                "Saute the onion and garlic, add the chicken, sweet soy sauce, salt and pepper.",
                "Serve with warm rice.",
            ],
            notes: "Sweet and savory, single serving.",
        },
    );
    db.insert(
        "Chicken Stir Fry + Rice",
        RecipeTemplate {
            ingredients: vec![
                ("chicken_breast", 150),
                ("rice", 150),
                ("vegetable_mix", 80),
                ("garlic", 10),
                ("onion", 20),
                ("soy_sauce", 10),
                ("cooking_oil", 10),
                ("salt", 2),
                ("pepper", 1),
            ],
            steps: vec![
                "Saute the onion and vegetables, then add the chicken.",
                "Add the rice and soy sauce, mix well.",
            ],
            notes: "Quick and tasty.",
        },
    );
    db.insert(
        "Noodle Soup + Egg + Veggies",
        RecipeTemplate {
            ingredients: vec![
                ("pasta", 100),
                ("egg", 100),
                ("vegetable_mix", 80),
                ("onion", 20),
                ("garlic", 10),
                ("salt", 2),
                ("pepper", 1),
                ("cooking_oil", 5),
                ("soy_sauce", 5),
            ],
            steps: vec![
                "Boil the noodles; saute the onion and vegetables, then add broth.",
                "Stir in the scrambled egg and season with salt, pepper and soy sauce.",
            ],
            notes: "Warm, protein rich.",
        },
    );

    // Non-vegan dinner
    db.insert(
        "Chicken Soup + Rice",
        RecipeTemplate {
            ingredients: vec![
                ("chicken_breast", 150),
                ("rice", 150),
                ("vegetable_mix", 80),
                ("onion", 20),
                ("garlic", 10),
                ("salt", 2),
                ("pepper", 1),
                ("cooking_oil", 5),
            ],
            steps: vec![
                "Simmer the chicken in water with the onion and vegetables.",
                "Cook until the chicken is done and the broth is savory.",
                "Serve with rice.",
            ],
            notes: "Warm, nourishing dinner.",
        },
    );
    db.insert(
        "Tahu + Sayur + Rice",
        RecipeTemplate {
            ingredients: vec![
                ("tofu", 150),
                ("rice", 150),
                ("vegetable_mix", 80),
                ("garlic", 10),
                ("onion", 20),
                ("soy_sauce", 10),
                ("cooking_oil", 10),
                ("salt", 2),
                ("pepper", 1),
            ],
            steps: vec![
                "Fry the tofu briefly, then saute the onion and vegetables.",
                "Add the rice and season with soy sauce, salt and pepper.",
            ],
            notes: "Plant protein and vegetables.",
        },
    );
    db.insert(
        "Fried Rice + Egg + Veggies",
        RecipeTemplate {
            ingredients: vec![
                ("rice", 150),
                ("egg", 100),
                ("vegetable_mix", 80),
                ("garlic", 10),
                ("onion", 20),
                ("cooking_oil", 10),
                ("soy_sauce", 5),
                ("salt", 2),
                ("pepper", 1),
            ],
            steps: vec![
                "Saute the onion and vegetables, then add the rice.",
                "Stir in the scrambled egg and season.",
            ],
            notes: "Quick and nutritious.",
        },
    );
    db.insert(
        "Nasi Goreng Ayam (light oil)",
        RecipeTemplate {
            ingredients: vec![
                ("rice", 150),
                ("chicken_breast", 150),
                ("vegetable_mix", 80),
                ("garlic", 10),
                ("onion", 20),
                ("cooking_oil", 5),
                ("soy_sauce", 10),
                ("salt", 2),
                ("pepper", 1),
            ],
            steps: vec![
                "Saute the onion and chicken, then add the vegetables.",
                "Add the rice, soy sauce, salt and pepper.",
                "Cook briefly until done.",
            ],
            notes: "Light and tasty.",
        },
    );
    db.insert(
        "Instant Noodles + Egg + Veggies",
        RecipeTemplate {
            ingredients: vec![
                ("pasta", 100),
                ("egg", 100),
                ("vegetable_mix", 80),
                ("garlic", 10),
                ("onion", 20),
                ("salt", 2),
                ("pepper", 1),
                ("cooking_oil", 5),
                ("soy_sauce", 5),
            ],
            steps: vec![
                "Boil the noodles; saute the onion and vegetables, then add the egg.",
                "Season with salt, pepper and soy sauce.",
            ],
            notes: "Fast dinner.",
        },
    );
    db.insert(
        "Tuna + Stir Fry Veggies",
        RecipeTemplate {
            ingredients: vec![
                ("tuna", 150),
                ("vegetable_mix", 100),
                ("garlic", 10),
                ("onion", 20),
                ("cooking_oil", 10),
                ("soy_sauce", 5),
                ("salt", 2),
                ("pepper", 1),
            ],
            steps: vec![
                "Saute the onion and vegetables, then add the tuna.",
                "Add the soy sauce, salt and pepper, mix well.",
            ],
            notes: "Single serving, protein rich.",
        },
    );
    db.insert(
        "Chicken Teriyaki + Rice",
        RecipeTemplate {
            ingredients: vec![
                ("chicken_breast", 150),
                ("rice", 150),
                ("vegetable_mix", 80),
                ("soy_sauce", 15),
                ("sugar", 5),
                ("garlic", 10),
                ("cooking_oil", 10),
                ("salt", 2),
                ("pepper", 1),
            ],
            steps: vec![
                "Fry the chicken until cooked through.",
                "Stir-fry the vegetables briefly, add the chicken and teriyaki sauce.",
                "Serve with warm rice.",
            ],
            notes: "Sweet-savory, single serving.",
        },
    );

    db
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_resolution_is_canonical() {
        assert_eq!(canonical_ingredient("vegetables"), "vegetable_mix");
        assert_eq!(canonical_ingredient("vegetable mix"), "vegetable_mix");
        assert_eq!(canonical_ingredient("milk"), "soy_milk");
        assert_eq!(canonical_ingredient("Chicken Breast"), "chicken_breast");
        assert_eq!(canonical_ingredient("rice"), "rice");
    }

    #[test]
    fn every_pool_meal_has_a_recipe_template() {
        let catalog = Catalog::new();
        for vegan in [true, false] {
            for part in DayPart::ALL {
                for meal in catalog.meal_pool(vegan, part) {
                    assert!(
                        catalog.recipe(meal).is_some(),
                        "missing recipe template for {meal}"
                    );
                    assert!(!catalog.meal_ingredients(meal).is_empty());
                }
            }
        }
    }

    #[test]
    fn every_pool_has_seven_meals() {
        let catalog = Catalog::new();
        for vegan in [true, false] {
            for part in DayPart::ALL {
                assert_eq!(catalog.meal_pool(vegan, part).len(), 7);
            }
        }
    }

    #[test]
    fn lookup_misses_fall_back() {
        let catalog = Catalog::new();
        assert_eq!(catalog.cost_per_100g("dragonfruit"), 3000);
        assert_eq!(catalog.base_grams("dragonfruit"), 100.0);
        assert_eq!(
            catalog.cooking_method("dragonfruit"),
            "Cook to preference (stir-fry, boil, or grill)."
        );
        assert!(catalog.recipe("Mystery Meal").is_none());
        assert!(catalog.meal_ingredients("Mystery Meal").is_empty());
    }

    #[test]
    fn vegan_pools_contain_no_animal_products() {
        let catalog = Catalog::new();
        let animal = ["chicken_breast", "egg", "tuna", "yogurt", "butter"];
        for part in DayPart::ALL {
            for meal in catalog.meal_pool(true, part) {
                for ingredient in catalog.meal_ingredients(meal) {
                    let key = canonical_ingredient(&ingredient);
                    assert!(
                        !animal.contains(&key.as_str()),
                        "{meal} contains animal product {key}"
                    );
                }
            }
        }
    }
}
