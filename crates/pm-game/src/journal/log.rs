//! Journal storage and export.

use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;

/// A chronological log of session events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the journal.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Investigation Log\n\n");
        for entry in &self.entries {
            let line = match entry {
                JournalEntry::PlayerInput { phase, input, .. } => {
                    format!("`{phase}` > {input}")
                }
                JournalEntry::Moved { location, .. } => format!("## {location}"),
                JournalEntry::ClueFound { location, clue, .. } => {
                    format!("**Clue** ({location}): {clue}")
                }
                JournalEntry::Conversation { character, said, .. } => {
                    format!("**{character}**: {said}")
                }
                JournalEntry::ItemFound { item, .. } => format!("*Found* {item}"),
                JournalEntry::ItemUsed {
                    item, score_delta, ..
                } => format!("*Used* {item} ({score_delta:+})"),
                JournalEntry::MiniGame { door, won, .. } => {
                    let result = if *won { "opened" } else { "stayed shut" };
                    format!("**Door {door}** {result}")
                }
                JournalEntry::Error { message, .. } => format!("> Error: {message}"),
                JournalEntry::GameOver { solved, score, .. } => {
                    let result = if *solved { "solved" } else { "unsolved" };
                    format!("## Case {result}\n\nFinal score: **{score}**")
                }
            };
            out.push_str(&line);
            out.push_str("\n\n");
        }
        out
    }

    /// Export the journal as pretty JSON.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }

    /// Export the journal as plain text, one line per entry.
    pub fn export_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let stamp = entry.timestamp().format("%Y-%m-%d %H:%M:%S");
            let line = match entry {
                JournalEntry::PlayerInput { phase, input, .. } => {
                    format!("Player input is {input} ({phase})")
                }
                JournalEntry::Moved { location, .. } => format!("Player went to {location}"),
                JournalEntry::ClueFound { location, clue, .. } => {
                    format!("Clue found in {location}: {clue}")
                }
                JournalEntry::Conversation { character, said, .. } => {
                    format!("{character} said to the player: {}", said.replace('\n', " "))
                }
                JournalEntry::ItemFound { item, .. } => format!("Player picked up {item}"),
                JournalEntry::ItemUsed {
                    item, score_delta, ..
                } => format!("Player used {item} ({score_delta:+})"),
                JournalEntry::MiniGame { door, won, .. } => {
                    let result = if *won { "won" } else { "lost" };
                    format!("Player {result} the game at door {door}")
                }
                JournalEntry::Error { message, .. } => format!("Error found: {message}"),
                JournalEntry::GameOver { solved, score, .. } => {
                    let result = if *solved { "solved" } else { "did not solve" };
                    format!(
                        "Player {result} the case and ended the game with a final score of {score}"
                    )
                }
            };
            out.push_str(&format!("[{stamp}] {line}\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample() -> Journal {
        let mut j = Journal::new();
        j.append(JournalEntry::PlayerInput {
            phase: "Main menu".to_string(),
            input: "e".to_string(),
            timestamp: Utc::now(),
        });
        j.append(JournalEntry::ClueFound {
            location: "Attic".to_string(),
            clue: "window open in attic".to_string(),
            timestamp: Utc::now(),
        });
        j.append(JournalEntry::ItemUsed {
            item: "Cigar".to_string(),
            score_delta: 1,
            timestamp: Utc::now(),
        });
        j.append(JournalEntry::GameOver {
            solved: true,
            score: 42,
            timestamp: Utc::now(),
        });
        j
    }

    #[test]
    fn append_and_len() {
        let j = sample();
        assert_eq!(j.len(), 4);
        assert!(!j.is_empty());
        assert!(Journal::new().is_empty());
    }

    #[test]
    fn text_export_has_one_line_per_entry() {
        let text = sample().export_text();
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("Player input is e (Main menu)"));
        assert!(text.contains("Clue found in Attic: window open in attic"));
        assert!(text.contains("Player used Cigar (+1)"));
        assert!(text.contains("final score of 42"));
    }

    #[test]
    fn markdown_export() {
        let md = sample().export_markdown();
        assert!(md.starts_with("# Investigation Log"));
        assert!(md.contains("**Clue** (Attic): window open in attic"));
        assert!(md.contains("## Case solved"));
    }

    #[test]
    fn json_export_keeps_entries() {
        let json = sample().export_json().unwrap();
        let entries: Vec<JournalEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(entries.len(), 4);
        assert!(matches!(
            &entries[1],
            JournalEntry::ClueFound { clue, .. } if clue == "window open in attic"
        ));
    }
}
