use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use menu_store::{parse_price_lenient, round_to_cents, Category, Dish};

/// Number of dishes in the snapshot
pub fn count(dishes: &[Dish]) -> usize {
    dishes.len()
}

/// Average price of one category's dishes, rounded to cents.
///
/// Price text is read numerically; malformed or out-of-range text
/// (possible only in hand-built snapshots, never in store-admitted
/// records) contributes zero, so the sum stays bounded. Returns `None`,
/// the no-data sentinel, when the category has no dishes, rather than
/// dividing by zero.
pub fn average_price(dishes: &[Dish], category: Category) -> Option<Decimal> {
    let mut total = Decimal::ZERO;
    let mut matching = 0usize;
    for dish in dishes.iter().filter(|dish| dish.category == category) {
        total += parse_price_lenient(&dish.price);
        matching += 1;
    }
    if matching == 0 {
        return None;
    }
    Some(round_to_cents(total / Decimal::from(matching)))
}

/// Average price for each of the three fixed categories.
///
/// Every category is present in the result, `None` marking the empty ones,
/// so a display layer can render the whole "average price per course" box
/// without special cases. Keys iterate in menu order.
pub fn averages_by_category(dishes: &[Dish]) -> BTreeMap<Category, Option<Decimal>> {
    Category::ALL
        .into_iter()
        .map(|category| (category, average_price(dishes, category)))
        .collect()
}

/// The home screen's figures, derived from one snapshot: how many dishes
/// the menu carries and the average price per course
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuSummary {
    pub total_dishes: usize,
    pub average_prices: BTreeMap<Category, Option<Decimal>>,
}

/// Derive the summary figures for display
pub fn summary(dishes: &[Dish]) -> MenuSummary {
    let figures = MenuSummary {
        total_dishes: count(dishes),
        average_prices: averages_by_category(dishes),
    };
    log::debug!("summarized {} dishes", figures.total_dishes);
    figures
}
