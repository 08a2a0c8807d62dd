use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{MenuError, Result};

/// Implicit currency prefix for display. The app prices everything in rand;
/// multi-currency is out of scope.
pub const CURRENCY_SYMBOL: &str = "R";

/// Upper bound for a single dish price (`999999.99`).
///
/// Amounts above it are rejected at admission and read as zero during
/// aggregation, which keeps price sums over any snapshot that fits in
/// memory inside `Decimal`'s range.
pub const MAX_PRICE: Decimal = Decimal::from_parts(99_999_999, 0, 0, false, 2);

/// Strictly parse price text from the add-dish form.
///
/// Accepts a plain non-negative decimal (`52.50`, `60`) no greater than
/// [`MAX_PRICE`]. Anything else is rejected here, at admission time, so
/// malformed or out-of-range amounts never reach aggregation.
pub fn parse_price(text: &str) -> Result<Decimal> {
    let raw = text.trim();
    let amount: Decimal = raw
        .parse()
        .map_err(|_| MenuError::InvalidPrice(raw.to_string()))?;
    if amount.is_sign_negative() || amount > MAX_PRICE {
        return Err(MenuError::InvalidPrice(raw.to_string()));
    }
    Ok(amount)
}

/// Aggregation-side reading of stored price text: anything outside the
/// valid price range, malformed text included, degrades to zero so
/// derivations stay total over any snapshot, including ones built by
/// hand. Records admitted through the store never hit the fallback.
#[must_use]
pub fn parse_price_lenient(text: &str) -> Decimal {
    parse_price(text).unwrap_or(Decimal::ZERO)
}

/// Round to cents: two decimal places, away from zero at the midpoint.
/// The result is rescaled to exactly two decimals so figures display
/// uniformly (`57.00`, not `57`).
#[must_use]
pub fn round_to_cents(amount: Decimal) -> Decimal {
    let mut cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    cents.rescale(2);
    cents
}

/// Format an amount for display: currency prefix, two decimals (`R57.00`)
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    format!("{CURRENCY_SYMBOL}{amount:.2}")
}

/// Render an average figure; `None` is the no-data sentinel shown when a
/// category has no dishes
#[must_use]
pub fn format_average(average: Option<Decimal>) -> String {
    match average {
        Some(amount) => format_price(amount),
        None => "No data".to_string(),
    }
}
