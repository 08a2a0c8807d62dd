use crate::error::{MenuError, Result};
use crate::price;
use crate::types::{Category, Dish, DishId};

/// Owning, ordered collection of dish records
///
/// Single source of truth for one session's menu: the presentation layer
/// mutates it through [`add`](MenuStore::add), [`remove`](MenuStore::remove)
/// and [`clear`](MenuStore::clear), and reads it through
/// [`list`](MenuStore::list) or [`snapshot`](MenuStore::snapshot).
/// Construct one per session and pass it by reference to whichever
/// component needs it; nothing here is global. Statistics are derived
/// elsewhere, from snapshots.
#[derive(Debug)]
pub struct MenuStore {
    dishes: Vec<Dish>,
    next_id: u64,
}

impl MenuStore {
    /// Create an empty menu for a new session
    #[must_use]
    pub fn new() -> Self {
        Self {
            dishes: Vec::new(),
            next_id: 1,
        }
    }

    /// Admit a new dish from raw form fields.
    ///
    /// `name`, `description` and `price` must be non-empty after trimming,
    /// and `price` must parse as a plain non-negative decimal no greater
    /// than [`MAX_PRICE`](crate::MAX_PRICE). A blank
    /// `category` counts as unspecified and defaults to starter; any other
    /// unrecognized value is rejected. On success the dish is appended
    /// behind existing entries (insertion order is the display order) and a
    /// copy of the created record is returned. On failure the store is left
    /// untouched.
    pub fn add(
        &mut self,
        name: &str,
        description: &str,
        category: &str,
        price: &str,
    ) -> Result<Dish> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MenuError::EmptyField("dish name"));
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(MenuError::EmptyField("description"));
        }
        let price_text = price.trim();
        if price_text.is_empty() {
            return Err(MenuError::EmptyField("price"));
        }

        let category = if category.trim().is_empty() {
            Category::default()
        } else {
            category.parse()?
        };
        price::parse_price(price_text)?;

        let dish = Dish {
            id: self.issue_id(),
            name: name.to_string(),
            description: description.to_string(),
            category,
            price: price_text.to_string(),
        };
        log::debug!("added dish {} '{}' ({})", dish.id, dish.name, dish.category);
        self.dishes.push(dish.clone());
        Ok(dish)
    }

    /// Remove the dish with the matching id, keeping the order of the rest.
    ///
    /// Returns whether a removal occurred; an absent id is a quiet no-op.
    pub fn remove(&mut self, id: DishId) -> bool {
        match self.dishes.iter().position(|dish| dish.id == id) {
            Some(index) => {
                let dish = self.dishes.remove(index);
                log::debug!("removed dish {} '{}'", dish.id, dish.name);
                true
            }
            None => false,
        }
    }

    /// Empty the menu, returning how many dishes were removed.
    ///
    /// Clearing an already-empty menu is a valid no-op reporting 0; callers
    /// may surface that as a notice, never as an error.
    pub fn clear(&mut self) -> usize {
        let removed = self.dishes.len();
        if removed == 0 {
            log::debug!("clear requested on an already-empty menu");
            return 0;
        }
        self.dishes.clear();
        log::info!("cleared {removed} dishes");
        removed
    }

    /// Current contents in insertion order, as a read-only view
    pub fn list(&self) -> &[Dish] {
        &self.dishes
    }

    /// Owned point-in-time copy for handing to analytics or across
    /// screens; stays consistent if the store mutates afterward
    pub fn snapshot(&self) -> Vec<Dish> {
        self.dishes.clone()
    }

    /// Look up a dish by id
    pub fn get(&self, id: DishId) -> Option<&Dish> {
        self.dishes.iter().find(|dish| dish.id == id)
    }

    /// Number of dishes on the menu
    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    /// Whether the menu has no dishes
    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    fn issue_id(&mut self) -> DishId {
        let id = DishId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new()
    }
}
