//! The Starling mansion: every location and everyone in it.

use std::collections::BTreeMap;

use crate::character::Character;
use crate::location::{Location, LocationId, LocationProgress};

/// Name of the drawing room where the necklace was stolen.
pub const CRIME_SCENE_NAME: &str = "Mansion's Drawing Room";

/// The location registry plus the cast gathered at the crime scene.
#[derive(Debug, Clone)]
pub struct Mansion {
    locations: BTreeMap<LocationId, Location>,
    interviewees: Vec<Character>,
    bystanders: Vec<Character>,
}

impl Default for Mansion {
    fn default() -> Self {
        Self::new()
    }
}

impl Mansion {
    /// Build the mansion as it stands on the morning after the theft.
    pub fn new() -> Self {
        let locations = [
            Location::new(LocationId::CrimeScene, CRIME_SCENE_NAME, 28),
            Location::new(LocationId::Kitchen, "Kitchen", 3).with_character(Character::suspect(
                "The Chef",
                "Get out my kitchen, I dont need to talk to you",
                "Left at 9 with the butler (You notice the times dont match up)",
                "looks at you with disgust and then goes back to cooking",
                78,
            )),
            Location::new(LocationId::Library, "Library", 3).with_character(Character::npc(
                "Librarian",
                "I heard footsteps in the attic late last night",
                "goes back to reading",
                50,
            )),
            Location::new(LocationId::Attic, "Attic", 3).with_character(Character::npc(
                "Laura",
                "Hello. Have you solved the mystery yet?",
                "goes back to writing her journal",
                15,
            )),
            Location::new(LocationId::SecretPassages, "Secret Passages", 3),
        ]
        .into_iter()
        .map(|loc| (loc.id(), loc))
        .collect();

        let interviewees = vec![
            Character::suspect(
                "Mr. Reginald, the butler",
                "I was working last night but left at 8",
                "Claims to have left at 8",
                "walks away in a rush",
                61,
            ),
            Character::suspect(
                "Lady Victoria Starling",
                "I cant believe my Diamond necklace was Stolen!\n\
                 I heard someone in my room last night, it was worth so much as well!!",
                "Was on a walk with Ms. Parker",
                "walks away",
                78,
            ),
            Character::witness(
                "Mr. Drew the Gardener",
                "I am not so sure this is as simple a case, people have been very \
                 suspicious recently, the chef and the butler are acting strange, I \
                 suggest you talk to them, if you haven't already",
                "Chef and butler acting strange",
                "leaves the room to go back to gardening",
                48,
            ),
            Character::witness(
                "Ms. Parker",
                "I saw someone near the window at the time of the incident, just \
                 after my walk with Lady Victoria",
                "Suspicious figure in dark clothing.",
                "calmly walks away",
                45,
            ),
        ];

        let bystanders = vec![
            Character::npc(
                "Beatrice",
                "How do you do.",
                "decides to hang around and see what will happen",
                68,
            ),
            Character::npc("Seamus", "Welcome to the mansion", "decides to walk away", 29),
            Character::npc("The Child", "Go away this is my house!", "angrily storms away", 8),
        ];

        Self {
            locations,
            interviewees,
            bystanders,
        }
    }

    /// Look up a location.
    pub fn location(&self, id: LocationId) -> &Location {
        // Every id is inserted in `new`.
        &self.locations[&id]
    }

    /// Look up a location mutably.
    pub fn location_mut(&mut self, id: LocationId) -> &mut Location {
        self.locations
            .get_mut(&id)
            .unwrap_or_else(|| unreachable!("location {id} is always present"))
    }

    /// Suspects and witnesses waiting in the drawing room.
    pub fn interviewees(&self) -> &[Character] {
        &self.interviewees
    }

    /// Mutable access to the suspects and witnesses.
    pub fn interviewees_mut(&mut self) -> &mut [Character] {
        &mut self.interviewees
    }

    /// People hanging around the crime scene with nothing to do with it.
    pub fn bystanders(&self) -> &[Character] {
        &self.bystanders
    }

    /// Mutable access to the bystanders.
    pub fn bystanders_mut(&mut self) -> &mut [Character] {
        &mut self.bystanders
    }

    /// Every character in the mansion.
    pub fn characters(&self) -> impl Iterator<Item = &Character> {
        self.interviewees
            .iter()
            .chain(self.bystanders.iter())
            .chain(self.locations.values().filter_map(Location::character))
    }

    /// Clues of every location, in display order.
    pub fn all_clues(&self) -> Vec<(LocationId, &str)> {
        LocationId::ALL
            .iter()
            .flat_map(|&id| {
                self.location(id)
                    .review_clues()
                    .iter()
                    .map(move |c| (id, c.as_str()))
            })
            .collect()
    }

    /// Persisted progress of every location.
    pub fn progress(&self) -> BTreeMap<LocationId, LocationProgress> {
        self.locations
            .iter()
            .map(|(id, loc)| (*id, loc.progress()))
            .collect()
    }

    /// Merge saved progress into the mansion. Unknown locations are ignored.
    pub fn import_progress(&mut self, progress: &BTreeMap<LocationId, LocationProgress>) {
        for (id, saved) in progress {
            if let Some(loc) = self.locations.get_mut(id) {
                loc.import_progress(saved);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_location_exists() {
        let m = Mansion::new();
        for id in LocationId::ALL {
            assert_eq!(m.location(id).id(), id);
        }
        assert_eq!(m.location(LocationId::CrimeScene).max_clues(), 28);
        assert_eq!(m.location(LocationId::Kitchen).max_clues(), 3);
    }

    #[test]
    fn rooms_have_residents() {
        let m = Mansion::new();
        assert!(m.location(LocationId::Kitchen).character().is_some());
        assert!(m.location(LocationId::Library).character().is_some());
        assert!(m.location(LocationId::Attic).character().is_some());
        assert!(m.location(LocationId::SecretPassages).character().is_none());
    }

    #[test]
    fn cast_size() {
        let m = Mansion::new();
        assert_eq!(m.interviewees().len(), 4);
        assert_eq!(m.bystanders().len(), 3);
        assert_eq!(m.characters().count(), 10);
        assert!(m.characters().all(|c| !c.interacted()));
    }

    #[test]
    fn all_clues_in_location_order() {
        let mut m = Mansion::new();
        m.location_mut(LocationId::SecretPassages).add_clue("passage");
        m.location_mut(LocationId::CrimeScene).add_clue("glass");
        let clues = m.all_clues();
        assert_eq!(
            clues,
            vec![
                (LocationId::CrimeScene, "glass"),
                (LocationId::SecretPassages, "passage")
            ]
        );
    }

    #[test]
    fn progress_round_trips_into_fresh_mansion() {
        let mut m = Mansion::new();
        m.location_mut(LocationId::Attic).visit();
        m.location_mut(LocationId::Attic).add_clue("window open in attic");
        let saved = m.progress();

        let mut fresh = Mansion::new();
        fresh.import_progress(&saved);
        assert_eq!(fresh.progress(), saved);
    }
}
