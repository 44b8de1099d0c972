//! Count of cleared mini-games.

/// Number of doors in the mansion, and so of mini-games.
pub const MINI_GAME_COUNT: u8 = 3;

/// Tracks how many mini-games were cleared this session (0 to 3).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MiniGameCounter {
    cleared: u8,
}

impl MiniGameCounter {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more cleared game and return the new count (max 3).
    pub fn record(&mut self) -> u8 {
        self.cleared = (self.cleared + 1).min(MINI_GAME_COUNT);
        self.cleared
    }

    /// Games cleared so far.
    pub fn cleared(&self) -> u8 {
        self.cleared
    }

    /// Whether every mini-game has been cleared.
    pub fn is_complete(&self) -> bool {
        self.cleared == MINI_GAME_COUNT
    }
}

impl std::fmt::Display for MiniGameCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You have completed {} / {MINI_GAME_COUNT} mini-games",
            self.cleared
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_and_caps() {
        let mut c = MiniGameCounter::new();
        assert_eq!(c.record(), 1);
        assert_eq!(c.record(), 2);
        assert!(!c.is_complete());
        assert_eq!(c.record(), 3);
        assert!(c.is_complete());
        assert_eq!(c.record(), 3);
        assert_eq!(c.to_string(), "You have completed 3 / 3 mini-games");
    }
}
