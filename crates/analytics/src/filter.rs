use std::fmt;
use std::str::FromStr;

use menu_store::{Category, Dish, MenuError};

/// Category selector for the filter screen: the whole menu, or one course
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// Every dish, regardless of course; the screen's initial selection
    #[default]
    All,
    /// Dishes of a single course
    Only(Category),
}

impl CategoryFilter {
    /// The filter screen's fixed selector row: all, then each course in
    /// menu order
    #[must_use]
    pub const fn options() -> [CategoryFilter; 4] {
        [
            Self::All,
            Self::Only(Category::Starter),
            Self::Only(Category::Main),
            Self::Only(Category::Dessert),
        ]
    }

    /// Whether a dish of `category` passes this filter
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    /// Raw selector value, as the button row submits it
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }

    /// Headline label: "All Courses" or the course label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Courses",
            Self::Only(category) => category.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = MenuError;

    /// Parses the selector row's raw values `all`, `starter`, `main` and
    /// `dessert`, trimmed and case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// Dishes passing the selector, in their original relative order.
///
/// `All` hands back the whole snapshot; a course selector keeps only
/// matching dishes. The snapshot itself is never touched.
pub fn filter_by_category(dishes: &[Dish], filter: CategoryFilter) -> Vec<Dish> {
    let kept: Vec<Dish> = dishes
        .iter()
        .filter(|dish| filter.matches(dish.category))
        .cloned()
        .collect();
    log::debug!("filter '{}' kept {} of {} dishes", filter, kept.len(), dishes.len());
    kept
}
