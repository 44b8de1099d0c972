//! Collectible items.

use serde::{Deserialize, Serialize};

use crate::score::ScoreSink;

/// An item the detective can pick up and use once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item name, matched case-insensitively on use.
    pub name: String,
    /// Short description shown in the inventory.
    pub description: String,
    /// What the detective learns when using the item.
    pub impact: String,
    /// Score change applied on use.
    pub score_delta: i32,
}

impl Item {
    /// Create a new item.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        impact: impl Into<String>,
        score_delta: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            impact: impact.into(),
            score_delta,
        }
    }

    /// Apply the item's effect and return its impact text.
    pub fn apply(&self, sink: &mut impl ScoreSink) -> &str {
        sink.apply_delta(self.score_delta);
        &self.impact
    }
}
