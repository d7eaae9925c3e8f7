use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{DayPart, DietDay, GroceryItem, GROCERY_TOTAL_ROW};
use crate::services::catalog::{canonical_ingredient, Catalog};

/// Sums ingredient grams across the week's diet plan and prices the totals.
#[derive(Debug, Clone)]
pub struct GroceryAggregator {
    catalog: Arc<Catalog>,
}

impl GroceryAggregator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn aggregate(&self, week_plan: &[DietDay]) -> Vec<GroceryItem> {
        let mut totals: HashMap<String, f64> = HashMap::new();

        for day in week_plan {
            for part in DayPart::ALL {
                let portions = day.portions.get(part);
                if !portions.is_empty() {
                    for portion in portions {
                        if portion.grams > 0.0 {
                            *totals.entry(canonical_ingredient(&portion.food)).or_default() +=
                                portion.grams;
                        }
                    }
                } else {
                    // No computed portions for this meal; estimate from the
                    // ingredient list with the day-part default.
                    for ingredient in day.ingredients.get(part) {
                        *totals.entry(canonical_ingredient(ingredient)).or_default() +=
                            part.default_grams();
                    }
                }
            }
        }

        let mut items: Vec<GroceryItem> = totals
            .into_iter()
            .filter(|(_, grams)| *grams > 0.0)
            .map(|(item, grams)| {
                let total_cost = (grams / 100.0) * self.catalog.cost_per_100g(&item) as f64;
                GroceryItem {
                    item,
                    total_grams: (grams * 10.0).round() / 10.0,
                    total_cost: total_cost.round() as i64,
                }
            })
            .collect();

        items.sort_by(|a, b| a.item.cmp(&b.item));

        let total_grams: f64 = items.iter().map(|i| i.total_grams).sum();
        let total_cost: i64 = items.iter().map(|i| i.total_cost).sum();
        items.push(GroceryItem {
            item: GROCERY_TOTAL_ROW.to_string(),
            total_grams: (total_grams * 10.0).round() / 10.0,
            total_cost,
        });

        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealSlots, Portion};
    use pretty_assertions::assert_eq;

    fn aggregator() -> GroceryAggregator {
        GroceryAggregator::new(Arc::new(Catalog::new()))
    }

    fn day_with_portions(day: u8, breakfast: Vec<Portion>) -> DietDay {
        let mut diet_day = DietDay::new(
            day,
            MealSlots {
                breakfast: "Test Meal".to_string(),
                lunch: "Test Meal".to_string(),
                dinner: "Test Meal".to_string(),
            },
            MealSlots::default(),
        );
        diet_day.portions.breakfast = breakfast;
        diet_day
    }

    fn portion(food: &str, grams: f64) -> Portion {
        Portion { food: food.to_string(), grams }
    }

    #[test]
    fn totals_accumulate_across_days_under_canonical_keys() {
        let week = vec![
            day_with_portions(1, vec![portion("rice", 150.0), portion("vegetables", 80.0)]),
            day_with_portions(2, vec![portion("rice", 150.0), portion("vegetable mix", 100.0)]),
        ];
        let list = aggregator().aggregate(&week);

        let rice = list.iter().find(|i| i.item == "rice").unwrap();
        assert_eq!(rice.total_grams, 300.0);
        assert_eq!(rice.total_cost, 4500); // 300g @ 1500/100g

        // Both spellings land on one canonical row.
        let veg = list.iter().find(|i| i.item == "vegetable_mix").unwrap();
        assert_eq!(veg.total_grams, 180.0);
        assert!(list.iter().filter(|i| i.item.contains("vegetable")).count() == 1);
    }

    #[test]
    fn missing_portions_fall_back_to_day_part_defaults() {
        let mut day = DietDay::new(
            1,
            MealSlots {
                breakfast: "A".to_string(),
                lunch: "B".to_string(),
                dinner: "C".to_string(),
            },
            MealSlots {
                breakfast: vec!["oats".to_string()],
                lunch: vec!["rice".to_string()],
                dinner: vec!["pasta".to_string()],
            },
        );
        day.portions = MealSlots::default();

        let list = aggregator().aggregate(&[day]);
        assert_eq!(list.iter().find(|i| i.item == "oats").unwrap().total_grams, 80.0);
        assert_eq!(list.iter().find(|i| i.item == "rice").unwrap().total_grams, 120.0);
        assert_eq!(list.iter().find(|i| i.item == "pasta").unwrap().total_grams, 100.0);
    }

    #[test]
    fn total_row_terminates_and_sums_the_list() {
        let week = vec![day_with_portions(
            1,
            vec![portion("rice", 200.0), portion("tofu", 150.0)],
        )];
        let list = aggregator().aggregate(&week);

        let total = list.last().unwrap();
        assert_eq!(total.item, GROCERY_TOTAL_ROW);

        let real_rows = &list[..list.len() - 1];
        let cost_sum: i64 = real_rows.iter().map(|i| i.total_cost).sum();
        let gram_sum: f64 = real_rows.iter().map(|i| i.total_grams).sum();
        assert_eq!(total.total_cost, cost_sum);
        assert_eq!(total.total_grams, gram_sum);
    }

    #[test]
    fn rows_are_sorted_alphabetically() {
        let week = vec![day_with_portions(
            1,
            vec![portion("tofu", 100.0), portion("banana", 100.0), portion("rice", 100.0)],
        )];
        let list = aggregator().aggregate(&week);

        let names: Vec<&str> = list[..list.len() - 1].iter().map(|i| i.item.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn non_positive_portions_are_skipped() {
        let week = vec![day_with_portions(
            1,
            vec![portion("rice", 0.0), portion("tofu", 100.0)],
        )];
        let list = aggregator().aggregate(&week);
        assert!(list.iter().all(|i| i.item != "rice"));
    }
}
