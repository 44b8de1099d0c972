//! Static content for the mini-games: secret words and riddles.
//!
//! Content lives in a JSON document shaped like
//!
//! ```json
//! {
//!   "Secret_words": ["ghost", "candle"],
//!   "Riddles": { "What has keys but can't open locks?": "piano" }
//! }
//! ```
//!
//! A missing or broken file is not fatal: the games fall back to a small
//! built-in set so the doors can still be played.

use std::collections::BTreeMap;
use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::error::{MiniGameError, MiniGameResult};

/// Whether a word can be guessed letter by letter: non-empty once trimmed
/// and made of letters only.
pub fn is_playable_word(word: &str) -> bool {
    let word = word.trim();
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

/// Words and riddles used by the door games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameContent {
    /// Candidate secret words for the word-guess game.
    #[serde(rename = "Secret_words", default)]
    pub secret_words: Vec<String>,
    /// Riddle text mapped to its answer.
    #[serde(rename = "Riddles", default)]
    pub riddles: BTreeMap<String, String>,
}

impl GameContent {
    /// Parse content from a JSON string.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load content from a file.
    pub fn load(path: &Path) -> MiniGameResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| MiniGameError::ContentIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| MiniGameError::ContentFormat {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load content, falling back to the built-in set on any problem.
    ///
    /// Empty word or riddle lists are filled from the built-in set
    /// individually.
    pub fn load_or_placeholder(path: &Path) -> Self {
        let mut content = match Self::load(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(error = %e, "using placeholder mini-game content");
                return Self::placeholder();
            }
        };

        let before = content.secret_words.len();
        content.secret_words.retain(|w| is_playable_word(w));
        if content.secret_words.len() < before {
            tracing::warn!(
                dropped = before - content.secret_words.len(),
                "skipping secret words without letters to guess"
            );
        }
        let fallback = Self::placeholder();
        if content.secret_words.is_empty() {
            tracing::warn!(path = %path.display(), "no secret words found, using placeholders");
            content.secret_words = fallback.secret_words;
        }
        if content.riddles.is_empty() {
            tracing::warn!(path = %path.display(), "no riddles found, using placeholders");
            content.riddles = fallback.riddles;
        }
        tracing::debug!(
            words = content.secret_words.len(),
            riddles = content.riddles.len(),
            "loaded mini-game content"
        );
        content
    }

    /// The built-in content.
    pub fn placeholder() -> Self {
        let secret_words = ["ghost", "candle", "manor", "shadow"]
            .into_iter()
            .map(String::from)
            .collect();
        let riddles = [(
            "The more of me you take, the more you leave behind. What am I?",
            "footsteps",
        )]
        .into_iter()
        .map(|(q, a)| (q.to_string(), a.to_string()))
        .collect();
        Self {
            secret_words,
            riddles,
        }
    }

    /// Pick a playable secret word uniformly at random, lower-cased.
    ///
    /// Words that [`is_playable_word`] rejects are never picked.
    pub fn random_word(&self, rng: &mut StdRng) -> Option<String> {
        let playable: Vec<&String> = self
            .secret_words
            .iter()
            .filter(|w| is_playable_word(w))
            .collect();
        playable.choose(rng).map(|w| w.trim().to_lowercase())
    }

    /// All riddles as (question, answer) pairs, in a stable order.
    pub fn riddle_list(&self) -> Vec<(String, String)> {
        self.riddles
            .iter()
            .map(|(q, a)| (q.clone(), a.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn parse_document() {
        let c = GameContent::from_json(
            r#"{"Secret_words": ["Ghost"], "Riddles": {"What runs but never walks?": "water"}}"#,
        )
        .unwrap();
        assert_eq!(c.secret_words, vec!["Ghost"]);
        assert_eq!(c.riddles["What runs but never walks?"], "water");
    }

    #[test]
    fn random_word_is_lowercase() {
        let c = GameContent {
            secret_words: vec!["GHOST".to_string()],
            riddles: BTreeMap::new(),
        };
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(c.random_word(&mut rng).as_deref(), Some("ghost"));
    }

    #[test]
    fn missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let c = GameContent::load_or_placeholder(&dir.path().join("nope.json"));
        assert_eq!(c, GameContent::placeholder());
    }

    #[test]
    fn missing_file_is_an_error_for_load() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameContent::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, MiniGameError::ContentIo { .. }));
    }

    #[test]
    fn empty_sections_are_filled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game_data.json");
        std::fs::write(&path, r#"{"Secret_words": ["  "], "Riddles": {"q?": "a"}}"#).unwrap();
        let c = GameContent::load_or_placeholder(&path);
        assert_eq!(c.secret_words, GameContent::placeholder().secret_words);
        assert_eq!(c.riddles.len(), 1);
    }

    #[test]
    fn words_without_letters_are_dropped() {
        assert!(is_playable_word(" Ghost "));
        assert!(!is_playable_word("1984"));
        assert!(!is_playable_word("ghost1"));
        assert!(!is_playable_word("old manor"));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game_data.json");
        std::fs::write(
            &path,
            r#"{"Secret_words": ["1984", "manor", "!!"], "Riddles": {"q?": "a"}}"#,
        )
        .unwrap();
        assert_eq!(GameContent::load_or_placeholder(&path).secret_words, vec!["manor"]);

        std::fs::write(&path, r#"{"Secret_words": ["1984"], "Riddles": {"q?": "a"}}"#).unwrap();
        assert_eq!(
            GameContent::load_or_placeholder(&path).secret_words,
            GameContent::placeholder().secret_words
        );
    }

    #[test]
    fn random_word_skips_unplayable_words() {
        let c = GameContent {
            secret_words: vec!["1984".to_string(), "Candle".to_string(), "".to_string()],
            riddles: BTreeMap::new(),
        };
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(c.random_word(&mut rng).as_deref(), Some("candle"));
        }

        let none = GameContent {
            secret_words: vec!["1984".to_string()],
            riddles: BTreeMap::new(),
        };
        assert_eq!(none.random_word(&mut rng), None);
    }

    #[test]
    fn broken_json_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game_data.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            GameContent::load(&path),
            Err(MiniGameError::ContentFormat { .. })
        ));
        assert_eq!(
            GameContent::load_or_placeholder(&path),
            GameContent::placeholder()
        );
    }
}
