use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MenuError;
use crate::price::CURRENCY_SYMBOL;

/// Opaque identifier for a dish, unique for the lifetime of a store
///
/// The store hands these out from a monotonic counter; an id is never
/// reissued within a session, even after its dish is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(u64);

impl DishId {
    /// Build an id directly. Fixture/test escape hatch: live stores assign
    /// their own ids and never ingest records built this way.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for DishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Course classification for a dish
///
/// Closed set, declared in menu order so ordered collections iterate
/// starter, main, dessert for display.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Opening course; the add-form picker's initial value
    #[default]
    Starter,
    /// Main course
    Main,
    /// Sweet closing course
    Dessert,
}

impl Category {
    /// The three fixed categories in menu order
    pub const ALL: [Category; 3] = [Category::Starter, Category::Main, Category::Dessert];

    /// Canonical lowercase form (the raw picker value)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Main => "main",
            Self::Dessert => "dessert",
        }
    }

    /// Human-readable label for pickers and headlines
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Main => "Main",
            Self::Dessert => "Dessert",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = MenuError;

    /// Parses the raw picker values `starter`, `main` and `dessert`,
    /// trimmed and case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        match raw.to_ascii_lowercase().as_str() {
            "starter" => Ok(Self::Starter),
            "main" => Ok(Self::Main),
            "dessert" => Ok(Self::Dessert),
            _ => Err(MenuError::UnknownCategory(raw.to_string())),
        }
    }
}

/// One menu entry as captured from the add-dish form
///
/// `price` keeps the text the user entered (trimmed); it is interpreted
/// numerically wherever prices are aggregated. The type itself permits an
/// empty `description` so snapshots can be built by hand; admission through
/// the store does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    /// Store-assigned identifier, unique for the session
    pub id: DishId,
    /// Dish name shown on the card
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Course classification
    pub category: Category,
    /// Price text in canonical trimmed form
    pub price: String,
}

impl Dish {
    /// Price with the currency prefix, the way the dish cards render it
    /// (e.g. `R52.50`)
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("{CURRENCY_SYMBOL}{}", self.price)
    }
}
