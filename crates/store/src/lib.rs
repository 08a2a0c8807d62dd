//! # Menu Store
//!
//! The owning data model for a restaurant menu: dish records and the
//! in-memory [`MenuStore`] that admits, removes and lists them.
//!
//! A store is created empty at session start, grows and shrinks through
//! its mutators, and is dropped with the session: no durable storage, no
//! global instance. Callers construct one and pass it to whichever
//! component needs it. Derived figures (counts, per-course averages,
//! filtered views) live in the companion `menu-analytics` crate and are
//! computed from snapshots, never by the store itself.
//!
//! Validation happens at admission: required fields must be present and
//! price text must be a plain non-negative decimal no greater than
//! [`MAX_PRICE`], so every record the store hands out aggregates cleanly.
//!
//! ## Example
//!
//! ```rust
//! use menu_store::{Category, MenuStore};
//!
//! let mut menu = MenuStore::new();
//! let dish = menu
//!     .add("Butternut Soup", "Roasted butternut, cream swirl", "starter", "52.50")
//!     .unwrap();
//!
//! assert_eq!(dish.category, Category::Starter);
//! assert_eq!(dish.display_price(), "R52.50");
//!
//! assert!(menu.remove(dish.id));
//! assert!(menu.is_empty());
//! ```

mod error;
mod price;
mod store;
mod types;

pub use error::{MenuError, Result};
pub use price::{
    format_average, format_price, parse_price, parse_price_lenient, round_to_cents,
    CURRENCY_SYMBOL, MAX_PRICE,
};
pub use store::MenuStore;
pub use types::{Category, Dish, DishId};
