//! Locations of the mansion and the clues recorded in them.

use serde::{Deserialize, Serialize};

use crate::character::Character;

/// Identifies one of the mansion's locations.
///
/// The serialized names are the keys of the persisted progress record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LocationId {
    /// The drawing room where the necklace went missing.
    CrimeScene,
    /// The attic.
    Attic,
    /// The kitchen.
    Kitchen,
    /// The library.
    Library,
    /// The passages behind the three hidden doors.
    #[serde(rename = "Secret Passages")]
    SecretPassages,
}

impl LocationId {
    /// Every location, in display order.
    pub const ALL: [LocationId; 5] = [
        Self::CrimeScene,
        Self::Kitchen,
        Self::Library,
        Self::Attic,
        Self::SecretPassages,
    ];
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CrimeScene => write!(f, "Crime Scene"),
            Self::Attic => write!(f, "Attic"),
            Self::Kitchen => write!(f, "Kitchen"),
            Self::Library => write!(f, "Library"),
            Self::SecretPassages => write!(f, "Secret Passages"),
        }
    }
}

/// Persisted progress of a single location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationProgress {
    /// Whether every clue of the location has been found.
    #[serde(rename = "All clues found", default)]
    pub all_clues_found: bool,
    /// Clues in the order they were found.
    #[serde(rename = "Clues", default)]
    pub clues: Vec<String>,
    /// Whether the player has been here.
    #[serde(rename = "Visited", default)]
    pub visited: bool,
}

/// A named area of the mansion.
#[derive(Debug, Clone)]
pub struct Location {
    id: LocationId,
    name: String,
    clues: Vec<String>,
    max_clues: usize,
    visited: bool,
    all_clues_found: bool,
    character: Option<Character>,
}

impl Location {
    /// Create an unvisited location without clues.
    pub fn new(id: LocationId, name: impl Into<String>, max_clues: usize) -> Self {
        Self {
            id,
            name: name.into(),
            clues: Vec::new(),
            max_clues,
            visited: false,
            all_clues_found: false,
            character: None,
        }
    }

    /// Place a character in this location.
    pub fn with_character(mut self, character: Character) -> Self {
        self.character = Some(character);
        self
    }

    /// The location's identifier.
    pub fn id(&self) -> LocationId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of clues needed to mark the location as fully searched.
    pub fn max_clues(&self) -> usize {
        self.max_clues
    }

    /// Whether the player has been here.
    pub fn visited(&self) -> bool {
        self.visited
    }

    /// Mark the location as visited. Returns true on the first visit.
    pub fn visit(&mut self) -> bool {
        let first = !self.visited;
        self.visited = true;
        first
    }

    /// Whether every clue of the location has been found.
    pub fn all_clues_found(&self) -> bool {
        self.all_clues_found
    }

    /// Record a clue. Duplicates are kept.
    pub fn add_clue(&mut self, clue: impl Into<String>) {
        self.clues.push(clue.into());
        if self.clues.len() >= self.max_clues {
            self.all_clues_found = true;
        }
    }

    /// All clues in insertion order.
    pub fn review_clues(&self) -> &[String] {
        &self.clues
    }

    /// The character who lives here, if any.
    pub fn character(&self) -> Option<&Character> {
        self.character.as_ref()
    }

    /// Mutable access to the resident character.
    pub fn character_mut(&mut self) -> Option<&mut Character> {
        self.character.as_mut()
    }

    /// Snapshot of the persisted part of this location.
    pub fn progress(&self) -> LocationProgress {
        LocationProgress {
            all_clues_found: self.all_clues_found,
            clues: self.clues.clone(),
            visited: self.visited,
        }
    }

    /// Merge saved progress into this location.
    pub fn import_progress(&mut self, progress: &LocationProgress) {
        self.clues.extend(progress.clues.iter().cloned());
        self.visited |= progress.visited;
        self.all_clues_found |= progress.all_clues_found || self.clues.len() >= self.max_clues;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_location_is_empty() {
        let loc = Location::new(LocationId::Attic, "Attic", 3);
        assert!(!loc.visited());
        assert!(!loc.all_clues_found());
        assert!(loc.review_clues().is_empty());
        assert!(loc.character().is_none());
    }

    #[test]
    fn visit_flips_once() {
        let mut loc = Location::new(LocationId::Kitchen, "Kitchen", 3);
        assert!(loc.visit());
        assert!(!loc.visit());
        assert!(loc.visited());
    }

    #[test]
    fn duplicates_are_kept() {
        let mut loc = Location::new(LocationId::SecretPassages, "Secret Passages", 3);
        loc.add_clue("The letter on the ground");
        loc.add_clue("The letter on the ground");
        assert_eq!(loc.review_clues().len(), 2);
    }

    #[test]
    fn all_clues_found_at_max() {
        let mut loc = Location::new(LocationId::Library, "Library", 2);
        loc.add_clue("a");
        assert!(!loc.all_clues_found());
        loc.add_clue("b");
        assert!(loc.all_clues_found());
    }

    #[test]
    fn import_restores_flags() {
        let mut loc = Location::new(LocationId::Attic, "Attic", 3);
        loc.import_progress(&LocationProgress {
            all_clues_found: false,
            clues: vec!["window open in attic".to_string()],
            visited: true,
        });
        assert!(loc.visited());
        assert_eq!(loc.review_clues(), ["window open in attic"]);
        assert_eq!(loc.progress().clues.len(), 1);
    }

    #[test]
    fn progress_uses_record_keys() {
        let json = serde_json::to_value(LocationProgress::default()).unwrap();
        assert!(json.get("All clues found").is_some());
        assert!(json.get("Clues").is_some());
        assert!(json.get("Visited").is_some());
        assert_eq!(
            serde_json::to_string(&LocationId::SecretPassages).unwrap(),
            "\"Secret Passages\""
        );
    }

    proptest! {
        #[test]
        fn review_returns_clues_in_order(clues in prop::collection::vec("[a-z ]{0,12}", 0..20)) {
            let mut loc = Location::new(LocationId::CrimeScene, "Drawing Room", 28);
            for clue in &clues {
                loc.add_clue(clue.clone());
            }
            prop_assert_eq!(loc.review_clues(), clues.as_slice());
        }
    }
}
