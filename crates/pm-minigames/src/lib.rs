//! Door mini-games for The Poirot Mystery.
//!
//! Each of the three hidden doors is guarded by one small game: a
//! hangman-style word guess, rock-paper-scissors against the house, and a
//! riddle. The engines are independent state machines that end in exactly
//! one of two terminal states.

pub mod content;
pub mod counter;
pub mod error;
pub mod riddle;
pub mod rps;
pub mod status;
pub mod word;

pub use content::GameContent;
pub use counter::MiniGameCounter;
pub use error::{MiniGameError, MiniGameResult};
pub use riddle::RiddleGame;
pub use rps::{Hand, RockPaperScissors, Round, RoundResult};
pub use status::MiniGameStatus;
pub use word::{GuessOutcome, WordGame};
