//! Fixed story text.

use pm_core::Item;

/// Opening banner.
pub const WELCOME: &str = "Welcome to 'The Poirot Mystery'\n\
You are about to embark on a thrilling adventure as a detective\n\
Your expertise is needed to solve a complex case and unveil the truth";

/// The case briefing for a new detective.
pub fn briefing(detective: &str) -> String {
    format!(
        "As the renowned detective, {detective},\n\
         you were called in to solve the baffling case of the missing Diamond Necklace Starlight Serenade\n\n\
         You have been tasked with finding the missing piece of the mansion's owner, Lady Victoria Starling!\n\
         You can find her in the mansions drawing room..."
    )
}

/// Shown on the way into the drawing room.
pub const CRIME_SCENE_FOUND: &str = "It appears you found the Crime Scene,\n\
what you find here is of the upmost\n\
importance so be very careful";

/// The climb to the drawing room.
pub const CRIME_SCENE_APPROACH: &str = "As you make your way through the winding stairs that lead\n\
to the crime scene you feel all eyes are on you, you must\n\
solve this crime. You reach the top of the stairs and go\n\
to the bedroom were the precious jewels were stored. You\n\
slowly push the door open.";

/// First look around the drawing room.
pub const EXAMINE_SCENE: &str = "You step into the dimly lit crime scene.\n\
Broken glass lies near the window, and a table is overturned.\n\
You find a torn piece of fabric near the window.\n\
There's a distinct smell of Cigars lingering in the air.\n\
The mystery deepens.";

/// Examining the drawing room a second time.
pub const ALREADY_EXAMINED: &str =
    "You have already investigated the Crime Scene (Use 'r' to review the clues gathered)";

/// Clues recorded when examining the drawing room.
pub const EXAMINE_CLUES: [&str; 4] = [
    "Torn fabric",
    "Broken glass near window",
    "An overturned table at crime scene",
    "Smell of perfume",
];

/// Clue recorded after talking to the bystanders.
pub const BYSTANDER_CLUE: &str =
    "Three people hanging around the Crime Scene who have nothing to do with the crime";

/// Clue recorded when the secret letter turns up.
pub const LETTER_CLUE: &str = "The letter on the ground";

/// Main menu prompt.
pub const MAIN_MENU: &str = "Press one of the following keys: \n\
'q' to quit\n\
'r' to review your clues\n\
'e' to explore the mansion further\n\
's' to see your current score\n\
'u' to use an item from your inventory\n\
'c' to conclude investigation\n\
Please Enter your selection: ";

/// Crime scene prompt.
pub const CRIME_SCENE_MENU: &str = "Press one of the following keys: \n\
'b' to go back to the hallway\n\
'i' to interact with characters at the crime scene\n\
'r' to review your clues\n\
'x' to examine the scene\n\
Please Enter your selection: ";

/// Hallway prompt.
pub fn hallway(crime_scene: &str) -> String {
    format!(
        "As you venture forward 4 rooms are revealed to you:\n\
         A Kitchen(K)\n\
         A huge Library(L)\n\
         A dusty Attic(A)\n\
         The {crime_scene}(D)\n\
         --To go back(B)--\n\
         Which do you want to choose: "
    )
}

/// Items found when examining the drawing room.
pub fn scene_items() -> [Item; 3] {
    [
        Item::new(
            "Torn Fabric",
            "A torn piece of fabric near the window",
            "You notice this piece of fabric is part of the butlers suit",
            2,
        ),
        Item::new(
            "Overturned Table",
            "Table overturned at the crime scene",
            "Leads you to believe someone left in a hurry",
            3,
        ),
        Item::new(
            "Cigar",
            "Cigar at crime scene",
            "You think that whoever did the crime smokes cigars",
            1,
        ),
    ]
}
