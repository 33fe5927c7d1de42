//! The player's inventory: an ordered bag of collected items.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a collected item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

/// A single collected item. Icons repeat; ids never do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub icon: String,
}

impl Item {
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            icon: icon.into(),
        }
    }
}

/// Items in the order they were picked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item icons in pickup order.
    pub fn icons(&self) -> Vec<String> {
        self.items.iter().map(|item| item.icon.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a new item with the given icon.
    pub fn add(&mut self, icon: impl Into<String>) {
        self.items.push(Item::new(icon));
    }

    pub fn contains(&self, icon: &str) -> bool {
        self.items.iter().any(|item| item.icon == icon)
    }

    /// Number of items carrying this icon.
    pub fn count(&self, icon: &str) -> usize {
        self.items.iter().filter(|item| item.icon == icon).count()
    }

    /// Check that every requested icon can be matched to a distinct item.
    ///
    /// Repeated icons in `icons` need that many copies in the inventory.
    pub fn contains_all<S: AsRef<str>>(&self, icons: &[S]) -> bool {
        let mut remaining: Vec<&Item> = self.items.iter().collect();

        for icon in icons {
            match remaining.iter().position(|item| item.icon == icon.as_ref()) {
                Some(index) => {
                    remaining.remove(index);
                }
                None => return false,
            }
        }

        true
    }

    /// Remove one item per requested icon, oldest first.
    ///
    /// Icons with no remaining match are skipped.
    pub fn remove_all_by_icon<S: AsRef<str>>(&mut self, icons: &[S]) {
        for icon in icons {
            if let Some(index) = self.items.iter().position(|item| item.icon == icon.as_ref()) {
                self.items.remove(index);
            }
        }
    }
}
