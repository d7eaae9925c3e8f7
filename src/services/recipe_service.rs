use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::models::{IngredientCost, IngredientRecipe, MealCost, MealRecipe, Portion};
use crate::services::catalog::{canonical_ingredient, Catalog};
use crate::services::errors::PlanError;

/// Resolves meal names to preparation steps with portion-scaled ingredient
/// amounts and cost estimates. Unknown meals and ingredients always resolve
/// to a generic fallback; the only error is a structurally broken portion.
#[derive(Debug, Clone)]
pub struct RecipeResolver {
    catalog: Arc<Catalog>,
}

impl RecipeResolver {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn resolve_meal(&self, meal: &str, portions: &[Portion]) -> Result<MealRecipe, PlanError> {
        validate_portions(portions)?;

        let template = self
            .catalog
            .recipe(meal)
            .cloned()
            .unwrap_or_else(|| self.catalog.fallback_recipe());

        // Canonical key -> grams from the computed portions.
        let portion_map: HashMap<String, f64> = portions
            .iter()
            .map(|p| (canonical_ingredient(&p.food), p.grams))
            .collect();
        let portion_avg = if portion_map.is_empty() {
            None
        } else {
            Some(portion_map.values().sum::<f64>() / portion_map.len() as f64)
        };

        let mut ingredients = BTreeMap::new();
        let mut cost_breakdown = Vec::with_capacity(template.ingredients.len());
        let mut total_cost = 0.0;

        for (ingredient, base_grams) in &template.ingredients {
            let key = canonical_ingredient(ingredient);
            // Portioned ingredients use their computed amount; template-only
            // ingredients (typically seasonings) scale with the meal's
            // overall portion size.
            let grams = match portion_map.get(&key) {
                Some(target) => *target,
                None => match portion_avg {
                    Some(avg) => (*base_grams as f64 * (avg / 100.0)).round(),
                    None => *base_grams as f64,
                },
            };

            let cost_per_100g = self.catalog.cost_per_100g(ingredient);
            let ingredient_cost = (grams / 100.0) * cost_per_100g as f64;
            total_cost += ingredient_cost;

            ingredients.insert((*ingredient).to_string(), grams as i64);
            cost_breakdown.push(IngredientCost {
                ingredient: (*ingredient).to_string(),
                grams: grams as i64,
                cost_per_100g,
                ingredient_cost: ingredient_cost.round() as i64,
            });
        }

        Ok(MealRecipe {
            meal: meal.to_string(),
            ingredients,
            steps: template.steps.iter().map(|s| (*s).to_string()).collect(),
            notes: template.notes.to_string(),
            estimated_cost: total_cost.round() as i64,
            cost_breakdown,
            portion_count: portions.len(),
        })
    }

    pub fn resolve_ingredient(&self, food: &str, grams: f64) -> IngredientRecipe {
        let cost_per_100g = self.catalog.cost_per_100g(food);
        IngredientRecipe {
            food: food.to_string(),
            grams: grams as i64,
            cooking_method: self.catalog.cooking_method(food).to_string(),
            estimated_cost: ((grams / 100.0) * cost_per_100g as f64).round() as i64,
            cost_per_100g,
        }
    }

    /// Cost summary for a single meal, used by the meal-cost helper surface.
    pub fn meal_cost(&self, meal: &str, portions: &[Portion]) -> Result<MealCost, PlanError> {
        let recipe = self.resolve_meal(meal, portions)?;
        Ok(MealCost {
            meal: recipe.meal,
            estimated_cost: recipe.estimated_cost,
            cost_breakdown: recipe.cost_breakdown,
        })
    }
}

/// A portion must name a food and carry a usable gram amount. Anything else
/// is a pipeline bug upstream and fails this meal loudly.
fn validate_portions(portions: &[Portion]) -> Result<(), PlanError> {
    for portion in portions {
        if portion.food.trim().is_empty() {
            return Err(PlanError::MalformedPortion(
                "portion is missing its food name".to_string(),
            ));
        }
        if !portion.grams.is_finite() || portion.grams < 0.0 {
            return Err(PlanError::MalformedPortion(format!(
                "portion '{}' has invalid grams {}",
                portion.food, portion.grams
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    fn resolver() -> RecipeResolver {
        RecipeResolver::new(Arc::new(Catalog::new()))
    }

    fn portion(food: &str, grams: f64) -> Portion {
        Portion { food: food.to_string(), grams }
    }

    #[test]
    fn portioned_ingredients_override_template_amounts() {
        let recipe = resolver()
            .resolve_meal("Chicken Porridge", &[portion("rice", 180.0), portion("chicken_breast", 120.0)])
            .unwrap();

        assert_eq!(recipe.ingredients["rice"], 180);
        assert_eq!(recipe.ingredients["chicken_breast"], 120);
        // Seasonings scale with the average portion (150g -> factor 1.5).
        assert_eq!(recipe.ingredients["salt"], 3);
        assert_eq!(recipe.portion_count, 2);
    }

    #[test]
    fn cost_is_summed_from_the_breakdown() {
        let recipe = resolver()
            .resolve_meal("Peanut Butter Toast", &[portion("bread", 50.0), portion("peanut_butter", 20.0)])
            .unwrap();

        // bread 50g @2000/100g = 1000, peanut butter 20g @15000/100g = 3000
        assert_eq!(recipe.estimated_cost, 4000);
        let breakdown_sum: i64 = recipe.cost_breakdown.iter().map(|c| c.ingredient_cost).sum();
        assert_eq!(breakdown_sum, recipe.estimated_cost);
    }

    #[test]
    fn unknown_meal_resolves_to_the_fallback_template() {
        let recipe = resolver().resolve_meal("Deep Fried Mystery", &[]).unwrap();

        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.steps.len(), 1);
        assert_eq!(recipe.estimated_cost, 0);
        assert!(recipe.notes.contains("not in the recipe database"));
    }

    #[test]
    fn empty_portions_keep_template_base_amounts() {
        let recipe = resolver().resolve_meal("Peanut Butter Toast", &[]).unwrap();
        assert_eq!(recipe.ingredients["bread"], 50);
        assert_eq!(recipe.ingredients["peanut_butter"], 20);
        assert_eq!(recipe.portion_count, 0);
    }

    #[test]
    fn malformed_portion_fails_the_meal() {
        let err = resolver().resolve_meal("Chicken Porridge", &[portion("", 100.0)]);
        assert_matches!(err, Err(PlanError::MalformedPortion(_)));

        let err = resolver().resolve_meal("Chicken Porridge", &[portion("rice", f64::NAN)]);
        assert_matches!(err, Err(PlanError::MalformedPortion(_)));
    }

    #[test]
    fn ingredient_recipe_has_method_and_cost() {
        let recipe = resolver().resolve_ingredient("rice", 150.0);
        assert_eq!(recipe.grams, 150);
        assert_eq!(recipe.cost_per_100g, 1500);
        assert_eq!(recipe.estimated_cost, 2250);
        assert!(recipe.cooking_method.contains("rice cooker"));

        let unknown = resolver().resolve_ingredient("starfruit", 100.0);
        assert_eq!(unknown.cost_per_100g, 3000);
        assert_eq!(unknown.cooking_method, "Cook to preference (stir-fry, boil, or grill).");
    }

    #[test]
    fn aliased_portion_names_match_template_ingredients() {
        // "vegetables" in portions must line up with "vegetable_mix" in the
        // template instead of being scaled separately.
        let recipe = resolver()
            .resolve_meal("Veggie Stir Fry + Rice", &[portion("vegetables", 90.0), portion("rice", 150.0)])
            .unwrap();
        assert_eq!(recipe.ingredients["vegetable_mix"], 90);
    }
}
