//! Scripts for the three upstairs rooms.
//!
//! A visit is a short run of yes/no prompts. Saying yes plays the step:
//! talking to the resident and/or recording clues. Saying no either moves
//! on to the next prompt or sends the player back to the hallway.

use pm_core::LocationId;

/// What declining a prompt does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnDecline {
    /// Ask the next prompt.
    NextStep,
    /// Go back to the hallway.
    Leave,
}

/// One yes/no prompt of a room visit.
#[derive(Debug)]
pub struct RoomStep {
    /// The question.
    pub question: &'static str,
    /// Whether saying yes talks to the room's resident.
    pub talk: bool,
    /// Text shown after saying yes.
    pub narration: &'static str,
    /// Clues recorded after saying yes.
    pub clues: &'static [&'static str],
    /// Text shown after saying no.
    pub decline: &'static str,
    /// What saying no does.
    pub on_decline: OnDecline,
}

/// A room's full visit.
#[derive(Debug)]
pub struct RoomScript {
    /// Which room.
    pub room: LocationId,
    /// Text shown on the first visit.
    pub arrival: &'static str,
    /// Text shown when trying to visit again.
    pub revisit: &'static str,
    /// The prompts, in order.
    pub steps: &'static [RoomStep],
}

/// The kitchen, where the Chef is cutting carrots.
pub static KITCHEN: RoomScript = RoomScript {
    room: LocationId::Kitchen,
    arrival: "You walk through the seemingly never ending upstairs hallway of the mansion on \
              your way to the kitchen. You open the door and see an old man cutting carrots.",
    revisit: "You have already explored this room\nSelect a door to explore",
    steps: &[
        RoomStep {
            question: "Do you want to talk to the chef? (Y/N) : ",
            talk: true,
            narration: "",
            clues: &["chef is hostile and doesnt seem to want to help you solve the crime"],
            decline: "Scared off interaction...How embarrassing, you might've missed an important clue...",
            on_decline: OnDecline::NextStep,
        },
        RoomStep {
            question: "Do you want to explore the kitchen further? (Y/N) : ",
            talk: false,
            narration: "You walk around the kitchen searching for clues...\n\
                        you see signs of a forced entry on the knife press\n\
                        and you also heard the chef complain about missing\n\
                        utensils earlier",
            clues: &["looks like someone stole a knife from the kitchen"],
            decline: "You return to the hallway",
            on_decline: OnDecline::Leave,
        },
        RoomStep {
            question: "Do you want to explore the kitchen further? (Y/N) : ",
            talk: false,
            narration: "As you are leaving you see a camera in the corner of\n\
                        the kitchen that looks to be off. The Chef says\n\
                        'it wasn't on when i arrived this morning'.\n\
                        This person must know a lot about this mansion, you think to yourself.\n\
                        As you walk out of the kitchen you get a strong distinct smell of a cigar...interesting",
            clues: &["camera system has been shut off"],
            decline: "You return to the hallway",
            on_decline: OnDecline::Leave,
        },
    ],
};

/// The attic, where Laura is writing at a desk.
pub static ATTIC: RoomScript = RoomScript {
    room: LocationId::Attic,
    arrival: "You walk through the never ending halls of the mansion on your way to the attic. \
              You reach a dimly lit room. As you walk in there's a young girl writing at a desk.",
    revisit: "You have already explored the attic\nChoose another door to explore more",
    steps: &[
        RoomStep {
            question: "Do you want to talk to the girl? (Y/N) : ",
            talk: true,
            narration: "",
            clues: &[],
            decline: "You back out of the room",
            on_decline: OnDecline::NextStep,
        },
        RoomStep {
            question: "Do you want to explore the attic further? (Y/N) : ",
            talk: false,
            narration: "As you walk around the attic you feel a cold breeze coming from\n\
                        the window at the back of the room.\n\
                        You see it has been opened and see a muddy footprint on the windowsill.\n\n\
                        As you examine it closer it looks to be forced open",
            clues: &[
                "window open in attic",
                "muddy footprint on attic windowsill",
                "window appears to be forced open",
            ],
            decline: "Scared of a bit of investigating...How embarrassing, you might've missed an important clue...",
            on_decline: OnDecline::Leave,
        },
    ],
};

/// The library, with its librarian.
pub static LIBRARY: RoomScript = RoomScript {
    room: LocationId::Library,
    arrival: "You walk through the never ending halls of the mansion on your way to the library.",
    revisit: "You have already explored the library\n\
              Continue to explore, you never know what you might find",
    steps: &[
        RoomStep {
            question: "Do you want to talk to the librarian? (Y/N) : ",
            talk: true,
            narration: "",
            clues: &["someone was walking in the attic late last night"],
            decline: "You walk back out of the room",
            on_decline: OnDecline::NextStep,
        },
        RoomStep {
            question: "Do you want to explore the library further? (Y/N) : ",
            talk: false,
            narration: "As you walk through the aisles of bookshelves you see a trail of footprints\n\
                        leading from what seems to be a hidden passage.",
            clues: &["hidden passage that leads to library", "muddy footprints in library"],
            decline: "You return to the hallway",
            on_decline: OnDecline::Leave,
        },
    ],
};

/// The script for a room, if it has one.
pub fn script(room: LocationId) -> Option<&'static RoomScript> {
    match room {
        LocationId::Kitchen => Some(&KITCHEN),
        LocationId::Attic => Some(&ATTIC),
        LocationId::Library => Some(&LIBRARY),
        LocationId::CrimeScene | LocationId::SecretPassages => None,
    }
}

/// The room selected by a hallway key.
pub fn by_key(key: &str) -> Option<&'static RoomScript> {
    match key {
        "k" => Some(&KITCHEN),
        "l" => Some(&LIBRARY),
        "a" => Some(&ATTIC),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pm_core::Mansion;

    #[test]
    fn every_scripted_room_has_a_resident() {
        let mansion = Mansion::new();
        for script in [&KITCHEN, &ATTIC, &LIBRARY] {
            assert!(mansion.location(script.room).character().is_some());
            assert!(script.steps.iter().any(|s| s.talk));
        }
    }

    #[test]
    fn scripts_fit_location_capacity() {
        let mansion = Mansion::new();
        for script in [&KITCHEN, &ATTIC, &LIBRARY] {
            let clues: usize = script.steps.iter().map(|s| s.clues.len()).sum();
            assert_eq!(clues, mansion.location(script.room).max_clues());
        }
    }

    #[test]
    fn keys_and_ids_agree() {
        assert_eq!(by_key("k").map(|s| s.room), Some(LocationId::Kitchen));
        assert_eq!(by_key("l").map(|s| s.room), Some(LocationId::Library));
        assert_eq!(by_key("a").map(|s| s.room), Some(LocationId::Attic));
        assert!(by_key("d").is_none());
        assert!(script(LocationId::CrimeScene).is_none());
    }
}
