//! The detective's inventory.

use serde::{Deserialize, Serialize};

use crate::item::Item;
use crate::score::ScoreSink;

/// Result of trying to use an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemUse {
    /// The item was used and removed.
    Used {
        /// The consumed item.
        item: Item,
    },
    /// No item with that name is held.
    NotFound(String),
}

impl std::fmt::Display for ItemUse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Used { item } => write!(
                f,
                "{}\n{} has been removed from your inventory.",
                item.impact, item.name
            ),
            Self::NotFound(name) => write!(f, "You don't have {name} in your inventory."),
        }
    }
}

/// Items carried by the detective, in pickup order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item and report it.
    pub fn add_item(&mut self, item: Item) -> String {
        let message = format!("You added {} to your inventory.", item.name);
        self.items.push(item);
        message
    }

    /// Use an item by name (case-insensitive).
    ///
    /// A found item applies its score delta to `sink` once and is removed.
    /// A missing item leaves both the inventory and the sink untouched.
    pub fn use_item(&mut self, name: &str, sink: &mut impl ScoreSink) -> ItemUse {
        let wanted = name.trim().to_lowercase();
        match self
            .items
            .iter()
            .position(|i| i.name.to_lowercase() == wanted)
        {
            Some(pos) => {
                let item = self.items.remove(pos);
                item.apply(sink);
                ItemUse::Used { item }
            }
            None => ItemUse::NotFound(name.trim().to_string()),
        }
    }

    /// All held items.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of held items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the inventory is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render the inventory listing.
    pub fn describe(&self) -> String {
        if self.items.is_empty() {
            return "Your inventory is empty.".to_string();
        }
        let mut out = String::from("Items in your inventory:");
        for item in &self.items {
            out.push_str(&format!("\n- {}: {}", item.name, item.description));
        }
        out
    }
}
