//! The three hidden doors downstairs and the mini-games guarding them.
//!
//! Each door owns one engine for the whole session. Doors 1 and 2 stay
//! sealed once their game is lost; door 3 draws a fresh riddle on every
//! approach until it is answered.

use pm_core::Item;
use pm_minigames::{GameContent, MiniGameCounter, MiniGameStatus, RiddleGame, RockPaperScissors, WordGame};
use rand::rngs::StdRng;

use crate::config::GameConfig;

/// Number of doors.
pub const DOOR_COUNT: usize = 3;

/// Door names as shown to the player.
pub const DOOR_NAMES: [&str; DOOR_COUNT] = [
    "Hidden Passage(1)",
    "Hidden Passage(2)",
    "Hidden Passage(3)",
];

/// Warnings spoken by each door before its game starts.
pub const CHALLENGES: [&str; DOOR_COUNT] = [
    "Those who dare to enter ahead..guess this word...or ill take your head",
    "Those who dare to enter ahead..Prove to me you are worthy, Beat me in this game of wit..before you end up dead",
    "Those who dare to proceed ahead...let me riddle you a question before you end up dead",
];

/// What the detective finds behind each door.
pub const REVEALS: [&str; DOOR_COUNT] = [
    "inside is a small kitchen with a butler making food\n\
     you ask him who he is and he tells you hes the mansion's butler, Mr. Reginald\n\
     you are surprised he is the butler at first as his trousers seem to be stained with mud and his shoes\n\
     look tarnished. after talking, you realise he has a suspiciously extensive knowledge of the mansion's layout",
    "You slowly open the door to reveal a...\n...a dark corridor which leads you to stairs",
    "Very good Detective, you may proceed\n\
     You open the library door to reveal a hidden\npassage...\nWhat secrets does it hold?",
];

/// Clue recorded in the secret passages when each door opens.
pub const DOOR_CLUES: [&str; DOOR_COUNT] = [
    "Mr. Reginald's rugged look and extensive knowledge of the mansion's layout",
    "The letter on the ground",
    "The hidden passage behind the library door",
];

/// The item awarded once every door is open.
pub fn letter() -> Item {
    Item::new(
        "Letter",
        "Letter found in the butlers pantry",
        "You read the letter to find the butler has been talking to a jeweller about selling jewellery",
        15,
    )
}

/// State of the three doors.
#[derive(Debug, Clone)]
pub struct Doors {
    word: WordGame,
    rps: RockPaperScissors,
    riddle: RiddleGame,
    opened: [bool; DOOR_COUNT],
    counter: MiniGameCounter,
    letter_found: bool,
}

impl Doors {
    /// Set up the doors, drawing the secret word now.
    pub fn new(content: &GameContent, config: &GameConfig, rng: &mut StdRng) -> Self {
        Self {
            word: WordGame::from_content(content, config.word_attempts, rng),
            rps: RockPaperScissors::new(config.rps_budget),
            riddle: RiddleGame::from_content(content),
            opened: [false; DOOR_COUNT],
            counter: MiniGameCounter::new(),
            letter_found: false,
        }
    }

    /// Parse a door number typed by the player into an index.
    pub fn parse(input: &str) -> Option<usize> {
        match input.trim().parse::<usize>() {
            Ok(n) if (1..=DOOR_COUNT).contains(&n) => Some(n - 1),
            _ => None,
        }
    }

    /// Whether the door at `index` is open.
    pub fn is_open(&self, index: usize) -> bool {
        self.opened.get(index).copied().unwrap_or(false)
    }

    /// Whether the door at `index` can no longer be opened this session.
    pub fn is_sealed(&self, index: usize) -> bool {
        match index {
            0 => self.word.status() == MiniGameStatus::Exhausted,
            1 => self.rps.status() == MiniGameStatus::Exhausted,
            _ => false,
        }
    }

    /// Mark a door as opened and count its game. Returns the counter.
    pub fn open(&mut self, index: usize) -> MiniGameCounter {
        if index < DOOR_COUNT && !self.opened[index] {
            self.opened[index] = true;
            self.counter.record();
        }
        self.counter
    }

    /// Games cleared so far.
    pub fn counter(&self) -> MiniGameCounter {
        self.counter
    }

    /// Returns true exactly once, after the last door opens.
    pub fn take_letter(&mut self) -> bool {
        if self.counter.is_complete() && !self.letter_found {
            self.letter_found = true;
            return true;
        }
        false
    }

    /// The word game behind door 1.
    pub fn word(&self) -> &WordGame {
        &self.word
    }

    /// Mutable access to the word game.
    pub fn word_mut(&mut self) -> &mut WordGame {
        &mut self.word
    }

    /// The rock-paper-scissors game behind door 2.
    pub fn rps(&self) -> &RockPaperScissors {
        &self.rps
    }

    /// Mutable access to rock-paper-scissors.
    pub fn rps_mut(&mut self) -> &mut RockPaperScissors {
        &mut self.rps
    }

    /// Mutable access to the riddle behind door 3.
    pub fn riddle_mut(&mut self) -> &mut RiddleGame {
        &mut self.riddle
    }

    /// The door listing with the back option.
    pub fn listing(&self) -> String {
        let mut out = String::from(
            "You venture forward within this decrepit mansion, Three dark passages appear before you:\n",
        );
        for (i, name) in DOOR_NAMES.iter().enumerate() {
            out.push_str(&format!("{}. {name}", i + 1));
            if self.is_open(i) {
                out.push_str(" (open)");
            } else if self.is_sealed(i) {
                out.push_str(" (sealed)");
            }
            out.push('\n');
        }
        out.push_str("\n--To go back(B)--\nWhich passage will you venture through...Brave detective: ");
        out
    }
}
