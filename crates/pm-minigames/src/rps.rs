//! Rock-paper-scissors against the house, guarding the second door.

use std::str::FromStr;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::error::{MiniGameError, MiniGameResult};
use crate::status::MiniGameStatus;

/// Default number of losses allowed.
pub const DEFAULT_BUDGET: u32 = 3;

/// A hand shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    /// Beats scissors.
    Rock,
    /// Beats rock.
    Paper,
    /// Beats paper.
    Scissors,
}

impl Hand {
    /// All hands.
    pub const ALL: [Hand; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    /// The hand this one defeats.
    pub fn beats(self) -> Hand {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
}

impl FromStr for Hand {
    type Err = MiniGameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" => Ok(Self::Scissors),
            _ => Err(MiniGameError::InvalidHand(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "rock"),
            Self::Paper => write!(f, "paper"),
            Self::Scissors => write!(f, "scissors"),
        }
    }
}

/// Result of one round from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    /// The player won.
    Win,
    /// Same hands.
    Draw,
    /// The house won.
    Loss,
}

/// Decide a round.
pub fn resolve(player: Hand, opponent: Hand) -> RoundResult {
    if player == opponent {
        RoundResult::Draw
    } else if player.beats() == opponent {
        RoundResult::Win
    } else {
        RoundResult::Loss
    }
}

/// A played round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// The player's hand.
    pub player: Hand,
    /// The house's hand.
    pub opponent: Hand,
    /// Outcome for the player.
    pub result: RoundResult,
    /// Losses still allowed after this round.
    pub remaining: u32,
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "You chose {}. I chose {}. ", self.player, self.opponent)?;
        match self.result {
            RoundResult::Win => write!(f, "You win!"),
            RoundResult::Draw => write!(f, "Draw!!"),
            RoundResult::Loss if self.remaining > 0 => write!(
                f,
                "Another win for me. You have {} chances left.",
                self.remaining
            ),
            RoundResult::Loss => write!(f, "You are out of attempts. Game over!"),
        }
    }
}

/// A rock-paper-scissors session with a budget of losses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RockPaperScissors {
    remaining: u32,
    status: MiniGameStatus,
}

impl Default for RockPaperScissors {
    fn default() -> Self {
        Self::new(DEFAULT_BUDGET)
    }
}

impl RockPaperScissors {
    /// Start a session allowing `budget` losses.
    pub fn new(budget: u32) -> Self {
        let status = if budget == 0 {
            MiniGameStatus::Exhausted
        } else {
            MiniGameStatus::InProgress
        };
        Self {
            remaining: budget,
            status,
        }
    }

    /// Losses still allowed.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Current status.
    pub fn status(&self) -> MiniGameStatus {
        self.status
    }

    /// Parse the player's hand and play against a random house hand.
    pub fn play(&mut self, input: &str, rng: &mut StdRng) -> MiniGameResult<Round> {
        if self.status.is_terminal() {
            return Err(MiniGameError::Finished);
        }
        let player: Hand = input.parse()?;
        let opponent = *Hand::ALL.choose(rng).unwrap_or(&Hand::Rock);
        self.play_hands(player, opponent)
    }

    /// Play a round with both hands given.
    pub fn play_hands(&mut self, player: Hand, opponent: Hand) -> MiniGameResult<Round> {
        if self.status.is_terminal() {
            return Err(MiniGameError::Finished);
        }
        let result = resolve(player, opponent);
        match result {
            RoundResult::Win => self.status = MiniGameStatus::Won,
            RoundResult::Draw => {}
            RoundResult::Loss => {
                self.remaining = self.remaining.saturating_sub(1);
                if self.remaining == 0 {
                    self.status = MiniGameStatus::Exhausted;
                }
            }
        }
        Ok(Round {
            player,
            opponent,
            result,
            remaining: self.remaining,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn beat_matrix() {
        assert_eq!(resolve(Hand::Rock, Hand::Scissors), RoundResult::Win);
        assert_eq!(resolve(Hand::Scissors, Hand::Paper), RoundResult::Win);
        assert_eq!(resolve(Hand::Paper, Hand::Rock), RoundResult::Win);
        assert_eq!(resolve(Hand::Scissors, Hand::Rock), RoundResult::Loss);
        assert_eq!(resolve(Hand::Paper, Hand::Scissors), RoundResult::Loss);
        assert_eq!(resolve(Hand::Rock, Hand::Paper), RoundResult::Loss);
        for h in Hand::ALL {
            assert_eq!(resolve(h, h), RoundResult::Draw);
        }
    }

    #[test]
    fn parse_hands() {
        assert_eq!("ROCK".parse::<Hand>().unwrap(), Hand::Rock);
        assert_eq!(" paper ".parse::<Hand>().unwrap(), Hand::Paper);
        assert!(matches!(
            "lizard".parse::<Hand>(),
            Err(MiniGameError::InvalidHand(_))
        ));
    }

    #[test]
    fn draw_costs_nothing() {
        let mut g = RockPaperScissors::default();
        let round = g.play_hands(Hand::Rock, Hand::Rock).unwrap();
        assert_eq!(round.result, RoundResult::Draw);
        assert_eq!(g.remaining(), 3);
        assert_eq!(g.status(), MiniGameStatus::InProgress);
    }

    #[test]
    fn win_ends_immediately() {
        let mut g = RockPaperScissors::default();
        g.play_hands(Hand::Rock, Hand::Paper).unwrap();
        g.play_hands(Hand::Paper, Hand::Rock).unwrap();
        assert_eq!(g.status(), MiniGameStatus::Won);
        assert_eq!(g.remaining(), 2);
        assert!(matches!(
            g.play_hands(Hand::Rock, Hand::Rock),
            Err(MiniGameError::Finished)
        ));
    }

    #[test]
    fn three_losses_exhaust() {
        let mut g = RockPaperScissors::default();
        for _ in 0..3 {
            g.play_hands(Hand::Scissors, Hand::Rock).unwrap();
        }
        assert_eq!(g.status(), MiniGameStatus::Exhausted);
        assert_eq!(g.remaining(), 0);
    }

    #[test]
    fn invalid_input_has_no_side_effect() {
        let mut g = RockPaperScissors::default();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(g.play("spock", &mut rng).is_err());
        assert_eq!(g.remaining(), 3);
    }

    #[test]
    fn random_play_always_terminates() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut g = RockPaperScissors::default();
        for _ in 0..1000 {
            if g.status().is_terminal() {
                break;
            }
            g.play("rock", &mut rng).unwrap();
        }
        assert!(g.status().is_terminal());
    }

    #[test]
    fn round_display() {
        let round = Round {
            player: Hand::Rock,
            opponent: Hand::Paper,
            result: RoundResult::Loss,
            remaining: 2,
        };
        assert_eq!(
            round.to_string(),
            "You chose rock. I chose paper. Another win for me. You have 2 chances left."
        );
    }
}
