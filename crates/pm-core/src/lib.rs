//! Mansion model for The Poirot Mystery.
//!
//! Holds the state of the investigation: locations and the clues found in
//! them, the characters with their one-shot interactions, and the items the
//! detective carries.

pub mod character;
pub mod inventory;
pub mod item;
pub mod location;
pub mod mansion;
pub mod score;

pub use character::{Character, CharacterRole, InteractionState};
pub use inventory::{Inventory, ItemUse};
pub use item::Item;
pub use location::{Location, LocationId, LocationProgress};
pub use mansion::Mansion;
pub use score::{Score, ScoreSink};
