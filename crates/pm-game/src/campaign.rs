//! Accounts, saved progress and the end-of-game bookkeeping around a
//! [`GameSession`].
//!
//! A campaign is one run of the program: a player registers or logs in,
//! plays one session (restored from their last save if there is one),
//! and on conclusion the journal is written to the log file, the final
//! score goes into the account store and the clues found go into the
//! progress store.

use std::path::{Path, PathBuf};

use pm_minigames::GameContent;
use pm_store::{CredentialStore, Leaderboard, ProgressStore, StoreError};

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::scoring::Verdict;
use crate::session::{Ending, GameSession};

/// Shown to a returning player with nothing saved.
pub const NO_PROGRESS_NOTICE: &str = "You found no clues last time, or didn't exit properly!";

/// A session ready to play.
pub struct SessionStart {
    /// The session, restored from saved progress when there was some.
    pub session: GameSession,
    /// Message to show before the first prompt.
    pub notice: Option<String>,
}

/// What was recorded when the game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conclusion {
    /// Final score, as stored on the account.
    pub score: u32,
    /// Closing remark.
    pub verdict: Verdict,
    /// How the session ended, if it reached an ending at all.
    pub ending: Option<Ending>,
    /// Where the journal was written.
    pub log_path: PathBuf,
}

/// One player's run through the game.
pub struct Campaign {
    config: GameConfig,
    credentials: CredentialStore,
    progress: ProgressStore,
    content: GameContent,
    user: Option<String>,
    returning: bool,
    concluded: bool,
}

impl Campaign {
    /// Open the stores under the configured data directory and load the
    /// mini-game content.
    pub fn new(config: GameConfig) -> Self {
        let content = GameContent::load_or_placeholder(&config.content_path);
        Self::with_content(config, content)
    }

    /// Like [`Campaign::new`] with content supplied directly.
    pub fn with_content(config: GameConfig, content: GameContent) -> Self {
        Self {
            credentials: CredentialStore::new(config.accounts_path()),
            progress: ProgressStore::new(config.progress_path()),
            config,
            content,
            user: None,
            returning: false,
            concluded: false,
        }
    }

    /// The configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Mini-game content in use.
    pub fn content(&self) -> &GameContent {
        &self.content
    }

    /// The logged-in username, if any.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Register a new account and log in as it.
    ///
    /// Returns `Ok(false)` if the username is taken.
    pub fn register(&mut self, username: &str, password: &str) -> GameResult<bool> {
        if !self.credentials.register(username, password)? {
            return Ok(false);
        }
        self.user = Some(pm_store::fold_username(username));
        self.returning = false;
        Ok(true)
    }

    /// Log in, asking `reprompt` for another password after each mismatch.
    ///
    /// See [`CredentialStore::authenticate`] for the retry rules.
    pub fn login<F>(&mut self, username: &str, password: &str, reprompt: F) -> GameResult<bool>
    where
        F: FnMut(u32) -> Option<String>,
    {
        if !self.credentials.authenticate(username, password, reprompt)? {
            return Ok(false);
        }
        self.user = Some(pm_store::fold_username(username));
        self.returning = true;
        Ok(true)
    }

    /// Build the session for the logged-in player.
    pub fn start_session(&mut self) -> GameResult<SessionStart> {
        let user = self.user.as_deref().ok_or(GameError::NotLoggedIn)?;
        let mut session = GameSession::new(&self.content, &self.config);

        let notice = match self.progress.restore(user) {
            Ok(snapshot) => {
                session.restore(&snapshot);
                None
            }
            Err(StoreError::NoProgress(_)) if self.returning => {
                Some(NO_PROGRESS_NOTICE.to_string())
            }
            Err(StoreError::NoProgress(_)) => None,
            Err(e) => return Err(e.into()),
        };

        self.concluded = false;
        Ok(SessionStart { session, notice })
    }

    /// Write the journal, the final score and the progress of `session`.
    ///
    /// Can only be done once per session.
    pub fn conclude(&mut self, session: &GameSession) -> GameResult<Conclusion> {
        if self.concluded {
            return Err(GameError::AlreadyConcluded);
        }
        let user = self.user.as_deref().ok_or(GameError::NotLoggedIn)?;

        let log_path = self.config.log_path.clone();
        write_journal(&log_path, session)?;

        let score = session.final_score();
        self.credentials
            .record_score(user, session.detective_name(), score)?;
        self.progress.persist(user, &session.snapshot())?;
        self.concluded = true;

        tracing::info!(user, score, ending = ?session.ending(), "game concluded");
        Ok(Conclusion {
            score,
            verdict: session.verdict(),
            ending: session.ending(),
            log_path,
        })
    }

    /// All players ranked by their last score.
    pub fn leaderboard(&self) -> GameResult<Leaderboard> {
        Ok(Leaderboard::load(&self.credentials)?)
    }
}

fn write_journal(path: &Path, session: &GameSession) -> GameResult<()> {
    let journal = session.journal();
    let text = match path.extension().and_then(|e| e.to_str()) {
        Some("md") => journal.export_markdown(),
        Some("json") => journal.export_json().map_err(|e| GameError::Log {
            path: path.to_path_buf(),
            source: e.into(),
        })?,
        _ => journal.export_text(),
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| GameError::Log {
            path: path.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, text).map_err(|source| GameError::Log {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::Phase;

    fn content() -> GameContent {
        GameContent {
            secret_words: vec!["ghost".to_string()],
            riddles: [("What has keys but can't open locks?", "piano")]
                .into_iter()
                .map(|(q, a)| (q.to_string(), a.to_string()))
                .collect(),
        }
    }

    fn campaign(dir: &Path) -> Campaign {
        let config = GameConfig::default()
            .with_data_dir(dir)
            .with_log_path(dir.join("log_file"))
            .with_seed(7);
        Campaign::with_content(config, content())
    }

    fn play(session: &mut GameSession, inputs: &[&str]) {
        for input in inputs {
            session
                .process(input)
                .unwrap_or_else(|e| panic!("input {input:?} failed: {e}"));
        }
    }

    #[test]
    fn register_then_login() {
        let dir = tempfile::tempdir().unwrap();
        let mut c = campaign(dir.path());
        assert!(c.register("holmes", "pw1").unwrap());
        assert_eq!(c.user(), Some("holmes"));

        let mut c = campaign(dir.path());
        assert!(!c.register("Holmes", "other").unwrap());
        assert!(c.user().is_none());
        assert!(c.login("HOLMES", "pw1", |_| None).unwrap());
        assert_eq!(c.user(), Some("holmes"));
    }

    #[test]
    fn five_wrong_passwords_lock_out() {
        let dir = tempfile::tempdir().unwrap();
        campaign(dir.path()).register("holmes", "pw1").unwrap();

        let mut c = campaign(dir.path());
        let mut asked = Vec::new();
        let ok = c
            .login("holmes", "bad", |left| {
                asked.push(left);
                Some("bad".to_string())
            })
            .unwrap();
        assert!(!ok);
        assert_eq!(asked, vec![4, 3, 2, 1]);
        assert!(c.user().is_none());
    }

    #[test]
    fn session_needs_a_player() {
        let dir = tempfile::tempdir().unwrap();
        let mut c = campaign(dir.path());
        assert!(matches!(c.start_session(), Err(GameError::NotLoggedIn)));
    }

    #[test]
    fn new_player_starts_fresh_without_notice() {
        let dir = tempfile::tempdir().unwrap();
        let mut c = campaign(dir.path());
        c.register("holmes", "pw1").unwrap();
        let start = c.start_session().unwrap();
        assert!(start.notice.is_none());
        assert_eq!(start.session.phase(), Phase::Title);
        assert_eq!(start.session.final_score(), 0);
    }

    #[test]
    fn returning_player_without_save_is_told() {
        let dir = tempfile::tempdir().unwrap();
        campaign(dir.path()).register("holmes", "pw1").unwrap();

        let mut c = campaign(dir.path());
        c.login("holmes", "pw1", |_| None).unwrap();
        let start = c.start_session().unwrap();
        assert_eq!(start.notice.as_deref(), Some(NO_PROGRESS_NOTICE));
    }

    #[test]
    fn conclude_writes_log_score_and_progress() {
        let dir = tempfile::tempdir().unwrap();
        let mut c = campaign(dir.path());
        c.register("holmes", "pw1").unwrap();
        let mut session = c.start_session().unwrap().session;
        play(
            &mut session,
            &["s", "Hercule", "e", "1", "k", "y", "y", "y", "b", "q"],
        );
        assert!(session.is_over());

        let done = c.conclude(&session).unwrap();
        // Three kitchen clues and a word with the chef.
        assert_eq!(done.score, 5);
        assert_eq!(done.ending, Some(Ending::Quit));
        assert_eq!(done.verdict, Verdict::Disappointing);

        let log = std::fs::read_to_string(&done.log_path).unwrap();
        assert!(log.contains("Player input is Hercule"));
        assert!(log.contains("final score of 5"));

        let board = c.leaderboard().unwrap();
        assert_eq!(board.top(1)[0].name, "Hercule");
        assert_eq!(board.top(1)[0].score, 5);

        assert!(matches!(
            c.conclude(&session),
            Err(GameError::AlreadyConcluded)
        ));
    }

    #[test]
    fn saved_clues_come_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut c = campaign(dir.path());
        c.register("holmes", "pw1").unwrap();
        let mut session = c.start_session().unwrap().session;
        play(&mut session, &["s", "Hercule", "e", "1", "k", "y", "y", "y", "b", "q"]);
        c.conclude(&session).unwrap();

        let mut c = campaign(dir.path());
        assert!(c.login("holmes", "pw1", |_| None).unwrap());
        let start = c.start_session().unwrap();
        assert!(start.notice.is_none());
        assert_eq!(start.session.detective_name(), Some("Hercule"));
        // Conversations are not saved, only clues.
        assert_eq!(start.session.final_score(), 3);
    }

    #[test]
    fn markdown_log_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::default()
            .with_data_dir(dir.path())
            .with_log_path(dir.path().join("logs").join("game.md"))
            .with_seed(7);
        let mut c = Campaign::with_content(config, content());
        c.register("holmes", "pw1").unwrap();
        let mut session = c.start_session().unwrap().session;
        play(&mut session, &["q"]);

        let done = c.conclude(&session).unwrap();
        let log = std::fs::read_to_string(done.log_path).unwrap();
        assert!(log.starts_with("# Investigation Log"));
    }

    #[test]
    fn json_log_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::default()
            .with_data_dir(dir.path())
            .with_log_path(dir.path().join("game.json"))
            .with_seed(7);
        let mut c = Campaign::with_content(config, content());
        c.register("holmes", "pw1").unwrap();
        let mut session = c.start_session().unwrap().session;
        play(&mut session, &["q"]);

        let done = c.conclude(&session).unwrap();
        let log = std::fs::read_to_string(done.log_path).unwrap();
        assert!(log.trim_start().starts_with('['));
        assert!(log.contains("GameOver"));
    }
}
