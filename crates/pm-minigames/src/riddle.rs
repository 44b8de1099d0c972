//! The riddle guarding the third door.
//!
//! One riddle is posed at a time and answered once. A wrong answer ends
//! that riddle; posing again draws a new one.

use rand::Rng;
use rand::rngs::StdRng;

use crate::content::GameContent;
use crate::error::{MiniGameError, MiniGameResult};
use crate::status::MiniGameStatus;

/// The riddle engine.
#[derive(Debug, Clone)]
pub struct RiddleGame {
    riddles: Vec<(String, String)>,
    current: Option<usize>,
    status: MiniGameStatus,
}

impl RiddleGame {
    /// Build from (question, answer) pairs. Answers are compared lower-cased.
    pub fn new(riddles: Vec<(String, String)>) -> Self {
        let riddles = riddles
            .into_iter()
            .map(|(q, a)| (q, a.trim().to_lowercase()))
            .collect();
        Self {
            riddles,
            current: None,
            status: MiniGameStatus::InProgress,
        }
    }

    /// Build from loaded content.
    pub fn from_content(content: &GameContent) -> Self {
        Self::new(content.riddle_list())
    }

    /// Number of known riddles.
    pub fn len(&self) -> usize {
        self.riddles.len()
    }

    /// Whether there are no riddles at all.
    pub fn is_empty(&self) -> bool {
        self.riddles.is_empty()
    }

    /// Status of the currently posed riddle.
    pub fn status(&self) -> MiniGameStatus {
        self.status
    }

    /// Draw a riddle uniformly at random and return its text.
    pub fn pose(&mut self, rng: &mut StdRng) -> Option<&str> {
        if self.riddles.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.riddles.len());
        self.current = Some(index);
        self.status = MiniGameStatus::InProgress;
        Some(self.riddles[index].0.as_str())
    }

    /// Text of the posed riddle.
    pub fn question(&self) -> Option<&str> {
        self.current.map(|i| self.riddles[i].0.as_str())
    }

    /// Answer the posed riddle. Returns whether the answer was right.
    pub fn answer(&mut self, input: &str) -> MiniGameResult<bool> {
        let index = self.current.ok_or(MiniGameError::NoRiddle)?;
        if self.status.is_terminal() {
            return Err(MiniGameError::Finished);
        }
        let correct = input.trim().to_lowercase() == self.riddles[index].1;
        self.status = if correct {
            MiniGameStatus::Won
        } else {
            MiniGameStatus::Exhausted
        };
        Ok(correct)
    }
}
