//! Concluding the investigation: interrogations and naming the culprit.
//!
//! The culprit is always Mr. Reginald, the butler. Which path the player
//! takes only changes the story text and whether the case counts as solved.

use crate::error::{GameError, GameResult};

/// How the culprit is presented when the player gets it wrong.
pub const CULPRIT: &str = "Mr. Reginald (the butler)";

const SUSPECT_LIST: &str = "1. Mr. Reginald (the butler)\n2. Lady Victoria Starling\n3. The Chef";

/// A prompt of the accusation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccusationStep {
    /// Interrogate the suspects, or name the culprit directly?
    Interrogate,
    /// Which suspect to interrogate.
    ChooseSuspect,
    /// After the Chef talks: press the butler?
    PressButler,
    /// Name the culprit.
    NameCulprit,
}

impl AccusationStep {
    /// The question asked at this step.
    pub fn prompt(self) -> String {
        match self {
            Self::Interrogate => format!(
                "After reviewing your clues you have 3 possible suspects\n{SUSPECT_LIST}\n\
                 Would you like to interrogate the suspects? (Y/N) : "
            ),
            Self::ChooseSuspect => {
                format!("who would you like to interrogate ? \n{SUSPECT_LIST}\nchoose now : ")
            }
            Self::PressButler => {
                "With this new information would you like to interrogate Mr. Reginald ? (Y/N) : "
                    .to_string()
            }
            Self::NameCulprit => "Who do you believe commited the crime? : ".to_string(),
        }
    }
}

impl std::fmt::Display for AccusationStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Interrogate => write!(f, "interrogate?"),
            Self::ChooseSuspect => write!(f, "choose suspect"),
            Self::PressButler => write!(f, "press the butler?"),
            Self::NameCulprit => write!(f, "name the culprit"),
        }
    }
}

/// Where one answer leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccusationOutcome {
    /// Ask the next question.
    Continue {
        /// The next step.
        next: AccusationStep,
        /// Story text to show first.
        text: String,
    },
    /// The investigation is over.
    Closed {
        /// Whether the culprit was found.
        solved: bool,
        /// Story text.
        text: String,
    },
    /// The player backed out; the investigation goes on.
    Abandoned,
}

/// Ways of naming the butler, compared after trimming, lowercasing and
/// dropping punctuation.
const CULPRIT_NAMES: [&str; 8] = [
    "1",
    "reginald",
    "mr reginald",
    "butler",
    "the butler",
    "mr reginald the butler",
    "reginald the butler",
    "the butler mr reginald",
];

/// Whether a guess names the butler, by number or by name.
///
/// The whole answer has to be one of the butler's names, so a guess that
/// mentions him alongside someone else does not count.
pub fn names_culprit(guess: &str) -> bool {
    let words = guess
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    CULPRIT_NAMES.contains(&words.as_str())
}

/// Answer the question at `step`.
pub fn advance(step: AccusationStep, input: &str) -> GameResult<AccusationOutcome> {
    let choice = input.trim().to_lowercase();
    match step {
        AccusationStep::Interrogate => match choice.as_str() {
            "y" => Ok(AccusationOutcome::Continue {
                next: AccusationStep::ChooseSuspect,
                text: String::new(),
            }),
            "n" => Ok(AccusationOutcome::Continue {
                next: AccusationStep::NameCulprit,
                text: String::new(),
            }),
            _ => Err(GameError::invalid(format!("Invalid choice Detective: {}", input.trim()))),
        },
        AccusationStep::ChooseSuspect => match choice.as_str() {
            "1" => Ok(AccusationOutcome::Closed {
                solved: true,
                text: "At first Mr. Reginald seems to be avoiding the questions.\n\
                       as you continue to push he breaks and admits it was him.\n\n\
                       congratulations Detective you have found the suspect"
                    .to_string(),
            }),
            "2" => Ok(AccusationOutcome::Closed {
                solved: false,
                text: "Lady Victoria Starling was irate that you could even think she did this \
                       and kicks you out of the mansion.\n\
                       Your investigation has come to an end........"
                    .to_string(),
            }),
            "3" => Ok(AccusationOutcome::Continue {
                next: AccusationStep::PressButler,
                text: "As you ask the chef questions you feel he is hiding something.\n\
                       After an hour of probing he slips and tells you he caught Mr. Reginald \
                       doing it last night\n\
                       and agreed to be silent for a cut after the necklace is sold"
                    .to_string(),
            }),
            _ => Err(GameError::invalid(format!("Invalid choice Detective: {}", input.trim()))),
        },
        AccusationStep::PressButler => {
            if choice == "y" {
                Ok(AccusationOutcome::Closed {
                    solved: true,
                    text: "When you present your finding to Mr. Reginald he immediately admits \
                           defeat and confesses."
                        .to_string(),
                })
            } else {
                Ok(AccusationOutcome::Abandoned)
            }
        }
        AccusationStep::NameCulprit => {
            if names_culprit(&choice) {
                Ok(AccusationOutcome::Closed {
                    solved: true,
                    text: "congratulations Detective you have found the suspect".to_string(),
                })
            } else {
                Ok(AccusationOutcome::Closed {
                    solved: false,
                    text: format!(
                        "unlucky detective you didnt find the suspect. the thief was '{CULPRIT}'"
                    ),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed(outcome: AccusationOutcome) -> bool {
        match outcome {
            AccusationOutcome::Closed { solved, .. } => solved,
            other => panic!("expected closed, got {other:?}"),
        }
    }

    #[test]
    fn interrogating_the_butler_solves() {
        let next = advance(AccusationStep::Interrogate, "Y").unwrap();
        assert!(matches!(
            next,
            AccusationOutcome::Continue { next: AccusationStep::ChooseSuspect, .. }
        ));
        assert!(closed(advance(AccusationStep::ChooseSuspect, "1").unwrap()));
    }

    #[test]
    fn interrogating_lady_victoria_ends_unsolved() {
        assert!(!closed(advance(AccusationStep::ChooseSuspect, "2").unwrap()));
    }

    #[test]
    fn chef_leads_to_the_butler() {
        let out = advance(AccusationStep::ChooseSuspect, "3").unwrap();
        assert!(matches!(
            out,
            AccusationOutcome::Continue { next: AccusationStep::PressButler, .. }
        ));
        assert!(closed(advance(AccusationStep::PressButler, "y").unwrap()));
        assert_eq!(
            advance(AccusationStep::PressButler, "n").unwrap(),
            AccusationOutcome::Abandoned
        );
    }

    #[test]
    fn naming_the_culprit() {
        assert!(closed(advance(AccusationStep::NameCulprit, "1").unwrap()));
        assert!(closed(advance(AccusationStep::NameCulprit, "The Butler").unwrap()));
        assert!(closed(advance(AccusationStep::NameCulprit, "mr. reginald").unwrap()));
        assert!(!closed(advance(AccusationStep::NameCulprit, "the chef").unwrap()));
    }

    #[test]
    fn full_culprit_name_and_punctuation() {
        assert!(names_culprit(CULPRIT));
        assert!(names_culprit("Mr. Reginald, the butler"));
        assert!(names_culprit("  BUTLER!  "));
    }

    #[test]
    fn mentioning_the_butler_is_not_naming_him() {
        assert!(!names_culprit("the chef, not the butler"));
        assert!(!names_culprit("not reginald"));
        assert!(!names_culprit("11"));
        assert!(!names_culprit(""));
        assert!(!closed(
            advance(AccusationStep::NameCulprit, "the chef, not the butler").unwrap()
        ));
    }

    #[test]
    fn invalid_choices_are_rejected() {
        assert!(matches!(
            advance(AccusationStep::Interrogate, "maybe"),
            Err(GameError::InvalidInput(_))
        ));
        assert!(advance(AccusationStep::ChooseSuspect, "4").is_err());
    }
}
