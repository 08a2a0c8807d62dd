//! # Menu Analytics
//!
//! Pure derivations over a menu snapshot: counts, per-course average
//! prices and category filtering for display.
//!
//! Nothing here owns or mutates menu state. Every function takes the
//! dishes as an immutable slice (`MenuStore::list()` for a borrowed view,
//! `MenuStore::snapshot()` for an owned copy) and hands back owned
//! results, so the figures are always consistent with the single state the
//! caller observed. Compute on demand, whenever fresh figures are needed;
//! there is nothing to invalidate and no lifecycle to hook.
//!
//! ## Example
//!
//! ```rust
//! use menu_analytics::{summary, CategoryFilter, filter_by_category};
//! use menu_store::MenuStore;
//!
//! let mut menu = MenuStore::new();
//! menu.add("Butternut Soup", "Roasted butternut, cream swirl", "starter", "50.00").unwrap();
//! menu.add("Snoek Pâté", "Smoked snoek with melba toast", "starter", "64.00").unwrap();
//! menu.add("Bobotie", "Spiced mince bake with egg topping", "main", "120.00").unwrap();
//!
//! let snapshot = menu.snapshot();
//! let figures = summary(&snapshot);
//! assert_eq!(figures.total_dishes, 3);
//!
//! let starters = filter_by_category(&snapshot, "starter".parse::<CategoryFilter>().unwrap());
//! assert_eq!(starters.len(), 2);
//! ```

mod filter;
mod stats;

pub use filter::{filter_by_category, CategoryFilter};
pub use stats::{average_price, averages_by_category, count, summary, MenuSummary};
