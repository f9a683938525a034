use crate::models::{CatalogItem, PricingFormula};

/// Degressive multi-day rental price: the first day is billed at the full
/// unit contribution, every following day at `contrib_following` of it.
/// Degrades to 0.0 while the formula fetch has not resolved, or on missing
/// item / zero quantity / zero duration.
pub fn rental_price(
    item: Option<&CatalogItem>,
    formula: Option<&PricingFormula>,
    quantity: u32,
    duration: u32,
) -> f64 {
    let (Some(item), Some(formula)) = (item, formula) else {
        return 0.0;
    };
    if quantity == 0 || duration == 0 {
        return 0.0;
    }

    let following_days = f64::from(duration - 1);
    f64::from(quantity) * (item.contrib + following_days * item.contrib * formula.contrib_following)
}
