//! Characters of the mansion and their one-shot interactions.
//!
//! Every character speaks its full dialogue exactly once. After that first
//! interaction it only answers with a brush-off line that depends on its
//! role.

use serde::{Deserialize, Serialize};

/// Whether a character still has something to say.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionState {
    /// Not yet spoken to.
    #[default]
    Fresh,
    /// Already gave their dialogue.
    Exhausted,
}

/// The part a character plays in the investigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterRole {
    /// A bystander with nothing to hide.
    Npc,
    /// Someone under suspicion.
    Suspect {
        /// What they claim they were doing.
        alibi: String,
    },
    /// Someone who saw or heard something.
    Witness {
        /// What they noticed.
        observation: String,
    },
}

impl std::fmt::Display for CharacterRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Npc => write!(f, "NPC"),
            Self::Suspect { .. } => write!(f, "Suspect"),
            Self::Witness { .. } => write!(f, "Witness"),
        }
    }
}

/// A person in the mansion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    name: String,
    dialogue: String,
    action: String,
    age: u32,
    role: CharacterRole,
    state: InteractionState,
}

impl Character {
    fn new(
        name: impl Into<String>,
        dialogue: impl Into<String>,
        action: impl Into<String>,
        age: u32,
        role: CharacterRole,
    ) -> Self {
        Self {
            name: name.into(),
            dialogue: dialogue.into(),
            action: action.into(),
            age,
            role,
            state: InteractionState::Fresh,
        }
    }

    /// Create a bystander.
    pub fn npc(
        name: impl Into<String>,
        dialogue: impl Into<String>,
        action: impl Into<String>,
        age: u32,
    ) -> Self {
        Self::new(name, dialogue, action, age, CharacterRole::Npc)
    }

    /// Create a suspect with an alibi.
    pub fn suspect(
        name: impl Into<String>,
        dialogue: impl Into<String>,
        alibi: impl Into<String>,
        action: impl Into<String>,
        age: u32,
    ) -> Self {
        let role = CharacterRole::Suspect {
            alibi: alibi.into(),
        };
        Self::new(name, dialogue, action, age, role)
    }

    /// Create a witness with an observation.
    pub fn witness(
        name: impl Into<String>,
        dialogue: impl Into<String>,
        observation: impl Into<String>,
        action: impl Into<String>,
        age: u32,
    ) -> Self {
        let role = CharacterRole::Witness {
            observation: observation.into(),
        };
        Self::new(name, dialogue, action, age, role)
    }

    /// The character's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The line the character says on first interaction.
    pub fn dialogue(&self) -> &str {
        &self.dialogue
    }

    /// The character's age.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// The character's role.
    pub fn role(&self) -> &CharacterRole {
        &self.role
    }

    /// Current interaction state.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Whether the character has already been spoken to.
    pub fn interacted(&self) -> bool {
        self.state == InteractionState::Exhausted
    }

    /// Talk to the character.
    ///
    /// The first call returns the full dialogue with role flavor and marks
    /// the character as exhausted. Every later call returns the same
    /// brush-off.
    pub fn interact(&mut self) -> String {
        match self.state {
            InteractionState::Fresh => {
                self.state = InteractionState::Exhausted;
                self.first_words()
            }
            InteractionState::Exhausted => self.brush_off(),
        }
    }

    fn first_words(&self) -> String {
        let name = &self.name;
        let dialogue = &self.dialogue;
        match self.role {
            CharacterRole::Npc => format!("{name}: \"{dialogue}\""),
            CharacterRole::Suspect { .. } => format!(
                "{name} reacts nervously: {dialogue}\n\
                 You notice subtle body language cues indicating potential deception"
            ),
            CharacterRole::Witness { .. } => format!(
                "Witness {name} speaks hurriedly: {dialogue}\n\
                 You sense genuine anxiety and urgency in the witness's words."
            ),
        }
    }

    fn brush_off(&self) -> String {
        let name = &self.name;
        match self.role {
            CharacterRole::Npc => format!("{name} is no longer interested in talking."),
            CharacterRole::Suspect { .. } => {
                format!("Suspect {name} avoids eye contact and remains silent.")
            }
            CharacterRole::Witness { .. } => {
                format!("Witness {name} hesitates and murmurs softly.")
            }
        }
    }

    /// Describe what the character does next.
    pub fn perform_action(&self) -> String {
        format!("{} {}", self.name, self.action.trim())
    }

    /// The suspect's alibi statement, if this character is a suspect.
    pub fn alibi(&self) -> Option<String> {
        match &self.role {
            CharacterRole::Suspect { alibi } => Some(format!("{}'s Alibi: {alibi}", self.name)),
            _ => None,
        }
    }

    /// The witness's observation, if this character is a witness.
    pub fn observation(&self) -> Option<String> {
        match &self.role {
            CharacterRole::Witness { observation } => {
                Some(format!("{}'s Observation: {observation}", self.name))
            }
            _ => None,
        }
    }
}
