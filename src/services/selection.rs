use crate::models::{CatalogItem, PricingFormula, SelectedItem};
use crate::services::pricing::rental_price;

/// Three-state update for a selection field: leave it untouched, clear the
/// whole selection line, or set a concrete value. `Set(0)` clears too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    Keep,
    Clear,
    Set(u32),
}

impl Update {
    fn clears(self) -> bool {
        matches!(self, Update::Clear | Update::Set(0))
    }

    fn value(self) -> Option<u32> {
        match self {
            Update::Set(value) if value > 0 => Some(value),
            _ => None,
        }
    }
}

/// Mutates the selection list for one catalog item. Clearing either field
/// removes the line entirely (never kept at zero); otherwise the entry is
/// updated or created and its price recomputed under the loaded formula.
pub fn set_item(
    items: &mut Vec<SelectedItem>,
    formula: Option<&PricingFormula>,
    default_duration: u32,
    item: &CatalogItem,
    quantity: Update,
    duration: Update,
) {
    if quantity.clears() || duration.clears() {
        items.retain(|entry| entry.item.id != item.id);
        return;
    }

    if let Some(existing) = items.iter_mut().find(|entry| entry.item.id == item.id) {
        if let Some(quantity) = quantity.value() {
            existing.quantity = quantity;
        }
        if let Some(duration) = duration.value() {
            existing.duration = duration;
        }
        existing.total_price =
            rental_price(Some(item), formula, existing.quantity, existing.duration);
    } else {
        let quantity = quantity.value().unwrap_or(1);
        let duration = duration.value().unwrap_or(default_duration);
        items.push(SelectedItem {
            item: item.clone(),
            quantity,
            duration,
            total_price: rental_price(Some(item), formula, quantity, duration),
            state: String::new(),
        });
    }
}
