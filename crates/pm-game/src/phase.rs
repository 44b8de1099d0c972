//! Where the player is in the game.

use pm_core::LocationId;

use crate::accusation::AccusationStep;

/// The session's state. Each phase accepts its own set of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Before the game starts.
    Title,
    /// Asking for the detective's name.
    NamingDetective,
    /// The main menu.
    MainMenu,
    /// Upstairs or downstairs.
    ChoosingPath,
    /// The upstairs hallway with its four rooms.
    Hallway,
    /// Working through a room's yes/no prompts.
    Room {
        /// The room being visited.
        room: LocationId,
        /// Index of the current prompt.
        step: usize,
    },
    /// Inside the drawing room.
    CrimeScene,
    /// Choosing who to talk to at the crime scene.
    ChoosingCompany,
    /// Standing before the three hidden doors.
    Doors,
    /// Playing the word game at door 1.
    WordGuess,
    /// Playing rock-paper-scissors at door 2.
    Rps,
    /// Answering the riddle at door 3.
    Riddle,
    /// Choosing an item to use.
    UsingItem,
    /// Concluding the investigation.
    Accusation(AccusationStep),
    /// The game is over.
    Ended,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Title => write!(f, "Title"),
            Self::NamingDetective => write!(f, "Naming detective"),
            Self::MainMenu => write!(f, "Main menu"),
            Self::ChoosingPath => write!(f, "Choosing path"),
            Self::Hallway => write!(f, "Hallway"),
            Self::Room { room, step } => write!(f, "{room} (prompt {})", step + 1),
            Self::CrimeScene => write!(f, "Crime Scene"),
            Self::ChoosingCompany => write!(f, "Crime Scene company"),
            Self::Doors => write!(f, "Hidden doors"),
            Self::WordGuess => write!(f, "Word game"),
            Self::Rps => write!(f, "Rock Paper Scissors"),
            Self::Riddle => write!(f, "Riddle"),
            Self::UsingItem => write!(f, "Using item"),
            Self::Accusation(step) => write!(f, "Accusation ({step})"),
            Self::Ended => write!(f, "Ended"),
        }
    }
}
