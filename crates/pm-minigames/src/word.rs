//! The word-guess game guarding the first door.
//!
//! The player guesses letters or whole words. Every new letter costs an
//! attempt, hit or miss. A wrong whole word is free when it shares letters
//! with the secret (those letters get revealed), otherwise it costs one
//! attempt.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::content::GameContent;
use crate::error::{MiniGameError, MiniGameResult};
use crate::status::MiniGameStatus;

/// Default number of attempts.
pub const DEFAULT_ATTEMPTS: u32 = 6;

/// What a single guess did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The letter was guessed before; nothing changed.
    AlreadyGuessed(char),
    /// The letter is in the word.
    Hit(char),
    /// The letter is not in the word.
    Miss(char),
    /// The whole word was guessed.
    Solved,
    /// A wrong word revealed the letters it shares with the secret.
    Revealed(Vec<char>),
    /// A wrong word sharing no letters with the secret.
    WrongWord,
}

impl std::fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyGuessed(_) => write!(f, "You already guessed that letter."),
            Self::Hit(c) => write!(f, "'{c}' is in the word."),
            Self::Miss(c) => write!(f, "'{c}' is not in the word."),
            Self::Solved => write!(f, "Congratulations! You guessed the entire word."),
            Self::Revealed(letters) => {
                let letters: Vec<String> = letters.iter().map(|c| c.to_string()).collect();
                write!(f, "Correct letters: {}", letters.join(", "))
            }
            Self::WrongWord => write!(f, "Incorrect word guess. Choose carefully."),
        }
    }
}

/// A single round of the word-guess game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordGame {
    secret: String,
    guessed: BTreeSet<char>,
    max_attempts: u32,
    remaining: u32,
    status: MiniGameStatus,
}

impl WordGame {
    /// Start a game with a known secret (lower-cased).
    pub fn new(secret: impl Into<String>, max_attempts: u32) -> Self {
        let secret = secret.into().trim().to_lowercase();
        let mut game = Self {
            secret,
            guessed: BTreeSet::new(),
            max_attempts,
            remaining: max_attempts,
            status: MiniGameStatus::InProgress,
        };
        game.refresh_status();
        game
    }

    /// Start a game with a secret drawn from the content word list.
    ///
    /// Falls back to the built-in words if the list has no playable word.
    pub fn from_content(content: &GameContent, max_attempts: u32, rng: &mut StdRng) -> Self {
        let secret = content
            .random_word(rng)
            .or_else(|| GameContent::placeholder().random_word(rng))
            .unwrap_or_else(|| "ghost".to_string());
        Self::new(secret, max_attempts)
    }

    /// The secret word.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Length of the secret in characters.
    pub fn word_len(&self) -> usize {
        self.secret.chars().count()
    }

    /// Attempts left.
    pub fn remaining_attempts(&self) -> u32 {
        self.remaining
    }

    /// Attempts at the start.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Current status.
    pub fn status(&self) -> MiniGameStatus {
        self.status
    }

    /// Letters guessed so far.
    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// The word with unguessed letters hidden, e.g. `g _ o _ _`.
    pub fn display(&self) -> String {
        self.secret
            .chars()
            .map(|c| {
                if !c.is_alphabetic() || self.guessed.contains(&c) {
                    c.to_string()
                } else {
                    "_".to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether every distinct letter of the secret has been guessed.
    pub fn is_winner(&self) -> bool {
        self.secret
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(|c| self.guessed.contains(&c))
    }

    /// Make a guess: a single letter or a whole word.
    pub fn guess(&mut self, input: &str) -> MiniGameResult<GuessOutcome> {
        if self.status.is_terminal() {
            return Err(MiniGameError::Finished);
        }

        let guess = input.trim().to_lowercase();
        let len = guess.chars().count();
        let alphabetic = len > 0 && guess.chars().all(char::is_alphabetic);

        let outcome = match guess.chars().next() {
            Some(letter) if alphabetic && len == 1 => self.guess_letter(letter),
            _ if alphabetic && len == self.word_len() => self.guess_word(&guess),
            _ => return Err(MiniGameError::InvalidGuess(self.word_len())),
        };

        self.refresh_status();
        Ok(outcome)
    }

    fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        if !self.guessed.insert(letter) {
            return GuessOutcome::AlreadyGuessed(letter);
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.secret.contains(letter) {
            GuessOutcome::Hit(letter)
        } else {
            GuessOutcome::Miss(letter)
        }
    }

    fn guess_word(&mut self, word: &str) -> GuessOutcome {
        if word == self.secret {
            self.guessed.extend(self.secret.chars());
            return GuessOutcome::Solved;
        }

        let shared: BTreeSet<char> = word.chars().filter(|c| self.secret.contains(*c)).collect();
        if shared.is_empty() {
            self.remaining = self.remaining.saturating_sub(1);
            GuessOutcome::WrongWord
        } else {
            self.guessed.extend(shared.iter().copied());
            GuessOutcome::Revealed(shared.into_iter().collect())
        }
    }

    fn refresh_status(&mut self) {
        self.status = if self.is_winner() {
            MiniGameStatus::Won
        } else if self.remaining == 0 {
            MiniGameStatus::Exhausted
        } else {
            MiniGameStatus::InProgress
        };
    }
}
