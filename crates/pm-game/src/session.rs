//! The game controller.
//!
//! `GameSession` owns the mansion, the inventory, the door games and the
//! journal, and moves between [`Phase`]s as the player types. Invalid
//! input never ends the session: it is returned as an error, journaled,
//! and the player is asked again (or sent back to the main menu, for the
//! prompts that do not loop).

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

use pm_core::{Inventory, Item, ItemUse, LocationId, Mansion};
use pm_minigames::{GameContent, GuessOutcome, MiniGameError, MiniGameStatus};
use pm_store::ProgressSnapshot;

use crate::accusation::{self, AccusationOutcome, AccusationStep};
use crate::config::GameConfig;
use crate::doors::{self, CHALLENGES, DOOR_CLUES, DOOR_NAMES, Doors, REVEALS};
use crate::error::{GameError, GameResult};
use crate::journal::{Journal, JournalEntry};
use crate::narrative;
use crate::phase::Phase;
use crate::reply::Reply;
use crate::rooms::{self, OnDecline};
use crate::scoring::{ItemBonus, ScoreCard, Verdict};

/// How the investigation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The player quit before accusing anyone.
    Quit,
    /// The culprit was found.
    Solved,
    /// The wrong person was accused.
    Unsolved,
}

/// An interactive game of The Poirot Mystery.
pub struct GameSession {
    mansion: Mansion,
    inventory: Inventory,
    items: ItemBonus,
    doors: Doors,
    phase: Phase,
    detective: Option<String>,
    examined: bool,
    ending: Option<Ending>,
    journal: Journal,
    rng: StdRng,
}

impl GameSession {
    /// Create a fresh game at the title prompt.
    pub fn new(content: &GameContent, config: &GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let doors = Doors::new(content, config, &mut rng);

        Self {
            mansion: Mansion::new(),
            inventory: Inventory::new(),
            items: ItemBonus::default(),
            doors,
            phase: Phase::Title,
            detective: None,
            examined: false,
            ending: None,
            journal: Journal::new(),
            rng,
        }
    }

    /// Continue from saved progress.
    pub fn restore(&mut self, snapshot: &ProgressSnapshot) {
        if let Some(name) = snapshot
            .detective_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
        {
            self.detective = Some(name.to_string());
        }
        self.mansion.import_progress(&snapshot.locations);
        tracing::debug!(clues = snapshot.clue_count(), "session restored");
    }

    /// The progress to save.
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            detective_name: self.detective.clone(),
            locations: self.mansion.progress(),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The mansion and everything found in it.
    pub fn mansion(&self) -> &Mansion {
        &self.mansion
    }

    /// Items carried.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// The three doors.
    pub fn doors(&self) -> &Doors {
        &self.doors
    }

    /// Get the journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// The detective's name, once given.
    pub fn detective_name(&self) -> Option<&str> {
        self.detective.as_deref()
    }

    /// Whether the game is over.
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// How the game ended, once it has.
    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    /// Current score breakdown.
    pub fn score_card(&self) -> ScoreCard {
        ScoreCard::tally(&self.mansion, self.items, self.ending == Some(Ending::Solved))
    }

    /// Current total score.
    pub fn final_score(&self) -> u32 {
        self.score_card().total()
    }

    /// Closing remark for the current score.
    pub fn verdict(&self) -> Verdict {
        self.score_card().verdict()
    }

    /// The question the game is waiting on.
    pub fn prompt(&self) -> String {
        match self.phase {
            Phase::Title => "Press 'q' to quit or 's' to start: ".to_string(),
            Phase::NamingDetective => "Please enter your detective name: ".to_string(),
            Phase::MainMenu => narrative::MAIN_MENU.to_string(),
            Phase::ChoosingPath => "Which path do you dare to take, The path that leads upstairs(1) \
                                    or The path that leads downstairs(2) : "
                .to_string(),
            Phase::Hallway => {
                narrative::hallway(self.mansion.location(LocationId::CrimeScene).name())
            }
            Phase::Room { room, step } => rooms::script(room)
                .and_then(|s| s.steps.get(step))
                .map(|s| s.question.to_string())
                .unwrap_or_default(),
            Phase::CrimeScene => narrative::CRIME_SCENE_MENU.to_string(),
            Phase::ChoosingCompany => "If you want to speak to the witnesses and suspects, choose 1. \
                                       If you'd like to speak to other people in the room, choose 2: "
                .to_string(),
            Phase::Doors => self.doors.listing(),
            Phase::WordGuess => "Enter your guess: ".to_string(),
            Phase::Rps => "What is your choice Rock, Paper, or Scissors: ".to_string(),
            Phase::Riddle => "What is your guess Detective: ".to_string(),
            Phase::UsingItem => "Enter the name of the item you want to use: ".to_string(),
            Phase::Accusation(step) => step.prompt(),
            Phase::Ended => String::new(),
        }
    }

    /// Process a line of player input and return the response.
    pub fn process(&mut self, input: &str) -> GameResult<Reply> {
        if self.phase == Phase::Ended {
            return Err(GameError::SessionEnded);
        }

        let input = input.trim();
        self.journal.append(JournalEntry::PlayerInput {
            phase: self.phase.to_string(),
            input: input.to_string(),
            timestamp: Utc::now(),
        });

        let result = self.dispatch(input);
        if let Err(e) = &result {
            tracing::debug!(phase = %self.phase, error = %e, "input rejected");
            self.journal.append(JournalEntry::Error {
                message: e.to_string(),
                timestamp: Utc::now(),
            });
        }
        result
    }

    fn dispatch(&mut self, input: &str) -> GameResult<Reply> {
        let key = input.to_lowercase();
        match self.phase {
            Phase::Title => self.do_title(&key),
            Phase::NamingDetective => self.do_name(input),
            Phase::MainMenu => self.do_main_menu(&key),
            Phase::ChoosingPath => self.do_path(&key),
            Phase::Hallway => self.do_hallway(&key),
            Phase::Room { room, step } => self.do_room(room, step, &key),
            Phase::CrimeScene => self.do_crime_scene(&key),
            Phase::ChoosingCompany => self.do_company(&key),
            Phase::Doors => self.do_doors(&key),
            Phase::WordGuess => self.do_word_guess(input),
            Phase::Rps => self.do_rps(input),
            Phase::Riddle => self.do_riddle(input),
            Phase::UsingItem => Ok(self.do_use_item(input)),
            Phase::Accusation(step) => self.do_accusation(step, input),
            Phase::Ended => Err(GameError::SessionEnded),
        }
    }

    fn do_title(&mut self, key: &str) -> GameResult<Reply> {
        match key {
            "q" => Ok(self.finish(Ending::Quit, "exiting...")),
            "s" => match self.detective.clone() {
                Some(name) => {
                    self.phase = Phase::MainMenu;
                    Ok(Reply::plain(format!("Welcome back {name}")))
                }
                None => {
                    self.phase = Phase::NamingDetective;
                    Ok(Reply::new())
                }
            },
            _ => Err(GameError::invalid("Incorrect user entry.")),
        }
    }

    fn do_name(&mut self, name: &str) -> GameResult<Reply> {
        if name.is_empty() {
            return Err(GameError::invalid("Your detective needs a name."));
        }
        self.detective = Some(name.to_string());
        self.phase = Phase::MainMenu;

        let mut reply = Reply::new();
        reply
            .announce(narrative::briefing(name))
            .say(format!("Welcome {name}"));
        Ok(reply)
    }

    fn do_main_menu(&mut self, key: &str) -> GameResult<Reply> {
        match key {
            "q" => Ok(self.finish(Ending::Quit, "exiting...")),
            "r" => {
                let clues: Vec<&str> = self
                    .mansion
                    .all_clues()
                    .into_iter()
                    .map(|(_, clue)| clue)
                    .collect();
                Ok(Reply::plain(clue_listing(&clues)))
            }
            "e" => {
                self.phase = Phase::ChoosingPath;
                Ok(Reply::new())
            }
            "s" => Ok(Reply::plain(format!(
                "Your current score is {}",
                self.final_score()
            ))),
            "u" => {
                if !self.inventory.is_empty() {
                    self.phase = Phase::UsingItem;
                }
                Ok(Reply::plain(self.inventory.describe()))
            }
            "c" => {
                self.phase = Phase::Accusation(AccusationStep::Interrogate);
                Ok(Reply::new())
            }
            _ => Err(GameError::invalid("Incorrect user entry.")),
        }
    }

    fn do_path(&mut self, key: &str) -> GameResult<Reply> {
        match key {
            "1" => {
                self.phase = Phase::Hallway;
                Ok(Reply::new())
            }
            "2" => {
                self.phase = Phase::Doors;
                Ok(Reply::new())
            }
            _ => {
                self.phase = Phase::MainMenu;
                Err(GameError::invalid(format!("Invalid path choice: {key}")))
            }
        }
    }

    fn do_hallway(&mut self, key: &str) -> GameResult<Reply> {
        match key {
            "b" => {
                self.phase = Phase::MainMenu;
                return Ok(Reply::new());
            }
            "d" => return Ok(self.enter_crime_scene()),
            _ => {}
        }

        let Some(script) = rooms::by_key(key) else {
            return Err(GameError::invalid("Please choose K, L, A, D or B."));
        };
        if !self.mansion.location_mut(script.room).visit() {
            return Ok(Reply::plain(script.revisit));
        }
        self.moved_to(script.room);
        self.phase = Phase::Room {
            room: script.room,
            step: 0,
        };
        Ok(Reply::plain(script.arrival))
    }

    fn do_room(&mut self, room: LocationId, step: usize, key: &str) -> GameResult<Reply> {
        let Some((script, current)) =
            rooms::script(room).and_then(|s| s.steps.get(step).map(|c| (s, c)))
        else {
            self.phase = Phase::Hallway;
            return Ok(Reply::new());
        };

        let mut reply = Reply::new();
        let leave = match key {
            "y" => {
                if current.talk {
                    reply.extend(self.talk_to_resident(room));
                }
                reply.say(current.narration);
                for clue in current.clues {
                    self.record_clue(room, clue);
                }
                false
            }
            "n" => {
                reply.say(current.decline);
                current.on_decline == OnDecline::Leave
            }
            _ => return Err(GameError::invalid("Please choose a valid option (Y/N):")),
        };

        if leave {
            self.phase = Phase::Hallway;
        } else if step + 1 >= script.steps.len() {
            reply.say("You return to the hallway");
            self.phase = Phase::Hallway;
        } else {
            self.phase = Phase::Room {
                room,
                step: step + 1,
            };
        }
        Ok(reply)
    }

    fn do_crime_scene(&mut self, key: &str) -> GameResult<Reply> {
        match key {
            "b" => {
                self.phase = Phase::Hallway;
                Ok(Reply::plain("Leaving..."))
            }
            "i" => {
                self.phase = Phase::ChoosingCompany;
                Ok(Reply::new())
            }
            "r" => {
                let clues: Vec<&str> = self
                    .mansion
                    .location(LocationId::CrimeScene)
                    .review_clues()
                    .iter()
                    .map(String::as_str)
                    .collect();
                let mut reply = Reply::plain(clue_listing(&clues));
                reply.say(format!("Your current score is {}", self.final_score()));
                Ok(reply)
            }
            "x" => Ok(self.examine_scene()),
            _ => Err(GameError::invalid("Please press b, i, r or x.")),
        }
    }

    fn do_company(&mut self, key: &str) -> GameResult<Reply> {
        self.phase = Phase::CrimeScene;
        match key {
            "1" => Ok(self.interview()),
            "2" => Ok(self.mingle()),
            _ => Err(GameError::invalid(format!(
                "Invalid choice: {key}. Choose 1 or 2."
            ))),
        }
    }

    fn do_doors(&mut self, key: &str) -> GameResult<Reply> {
        if key == "b" {
            self.phase = Phase::MainMenu;
            return Ok(Reply::new());
        }
        let Some(index) = Doors::parse(key) else {
            self.phase = Phase::MainMenu;
            return Err(GameError::invalid(format!(
                "Invalid door choice Detective: {key}"
            )));
        };

        if self.doors.is_open(index) {
            tracing::debug!(door = index + 1, "door already open");
            return Ok(Reply::plain(format!(
                "You've already been to {} Detective.",
                DOOR_NAMES[index]
            )));
        }
        if self.doors.is_sealed(index) {
            return Ok(Reply::plain(format!(
                "{} is sealed shut. You lost your chance at this door.",
                DOOR_NAMES[index]
            )));
        }

        if index == 0 && self.doors.word().status() == MiniGameStatus::Won {
            tracing::warn!(secret = self.doors.word().secret(), "secret word has nothing to guess");
            return Ok(self.open_door(0));
        }

        let mut reply = Reply::new();
        reply.announce(CHALLENGES[index]);
        match index {
            0 => {
                let word = self.doors.word();
                reply.say(format!(
                    "Welcome to the Haunted Mansion!\nCan you guess the secret word?\n\
                     You have {} attempts.\n{}",
                    word.remaining_attempts(),
                    word.display()
                ));
                self.phase = Phase::WordGuess;
            }
            1 => {
                reply.say(format!(
                    "This game is Rock, Paper, Scissors! You have {} tries, or you are not allowed in!",
                    self.doors.rps().remaining()
                ));
                self.phase = Phase::Rps;
            }
            _ => {
                let question = self
                    .doors
                    .riddle_mut()
                    .pose(&mut self.rng)
                    .map(str::to_string)
                    .ok_or(MiniGameError::NoRiddle)?;
                reply.say(question);
                self.phase = Phase::Riddle;
            }
        }
        Ok(reply)
    }

    fn do_word_guess(&mut self, input: &str) -> GameResult<Reply> {
        let outcome = self.doors.word_mut().guess(input)?;
        let word = self.doors.word();
        let (status, display, secret, remaining) = (
            word.status(),
            word.display(),
            word.secret().to_string(),
            word.remaining_attempts(),
        );

        let mut reply = Reply::plain(outcome.to_string());
        reply.say(display);
        match status {
            MiniGameStatus::Won => {
                if outcome != GuessOutcome::Solved {
                    reply.say("Congratulations! You guessed the entire word.");
                }
                reply.extend(self.open_door(0));
            }
            MiniGameStatus::Exhausted => {
                reply.say(format!("Game over! The secret word was '{secret}'."));
                self.door_lost(0);
            }
            MiniGameStatus::InProgress => {
                reply.say(format!("You have {remaining} attempts left."));
            }
        }
        Ok(reply)
    }

    fn do_rps(&mut self, input: &str) -> GameResult<Reply> {
        let round = self.doors.rps_mut().play(input, &mut self.rng)?;
        let status = self.doors.rps().status();
        let mut reply = Reply::plain(round.to_string());
        match status {
            MiniGameStatus::Won => {
                reply.extend(self.open_door(1));
            }
            MiniGameStatus::Exhausted => self.door_lost(1),
            MiniGameStatus::InProgress => {}
        }
        Ok(reply)
    }

    fn do_riddle(&mut self, input: &str) -> GameResult<Reply> {
        if self.doors.riddle_mut().answer(input)? {
            return Ok(self.open_door(2));
        }
        self.door_lost(2);
        Ok(Reply::plain(
            "That is not the answer Detective. The passage stays shut.",
        ))
    }

    fn do_use_item(&mut self, name: &str) -> Reply {
        self.phase = Phase::MainMenu;
        let result = self.inventory.use_item(name, &mut self.items);
        if let ItemUse::Used { item } = &result {
            self.journal.append(JournalEntry::ItemUsed {
                item: item.name.clone(),
                score_delta: item.score_delta,
                timestamp: Utc::now(),
            });
        }
        Reply::plain(result.to_string())
    }

    fn do_accusation(&mut self, step: AccusationStep, input: &str) -> GameResult<Reply> {
        match accusation::advance(step, input) {
            Ok(AccusationOutcome::Continue { next, text }) => {
                self.phase = Phase::Accusation(next);
                Ok(Reply::plain(text))
            }
            Ok(AccusationOutcome::Closed { solved, text }) => {
                let ending = if solved {
                    Ending::Solved
                } else {
                    Ending::Unsolved
                };
                Ok(self.finish(ending, &text))
            }
            Ok(AccusationOutcome::Abandoned) => {
                self.phase = Phase::MainMenu;
                Ok(Reply::plain("You decide to keep investigating."))
            }
            Err(e) => {
                self.phase = Phase::MainMenu;
                Err(e)
            }
        }
    }

    fn enter_crime_scene(&mut self) -> Reply {
        self.mansion.location_mut(LocationId::CrimeScene).visit();
        self.moved_to(LocationId::CrimeScene);
        self.phase = Phase::CrimeScene;

        let mut reply = Reply::new();
        reply
            .announce(narrative::CRIME_SCENE_FOUND)
            .announce(narrative::CRIME_SCENE_APPROACH);
        reply
    }

    fn talk_to_resident(&mut self, room: LocationId) -> Reply {
        let Some(character) = self.mansion.location_mut(room).character_mut() else {
            return Reply::new();
        };
        let said = character.interact();
        let action = character.perform_action();
        let name = character.name().to_string();

        self.journal.append(JournalEntry::Conversation {
            character: name,
            said: said.clone(),
            timestamp: Utc::now(),
        });
        let mut reply = Reply::plain(said);
        reply.say(action);
        reply
    }

    /// Talk to the suspects and witnesses. Their words become clues.
    fn interview(&mut self) -> Reply {
        if self.mansion.interviewees().iter().all(|c| c.interacted()) {
            return Reply::plain(
                "You have already interacted with the characters.\nThey no longer wish to speak to you.",
            );
        }

        let mut reply = Reply::plain("You decide to interact with the characters in the room.");
        let mut clues = Vec::new();
        let mut talks = Vec::new();
        for c in self.mansion.interviewees_mut() {
            if c.interacted() {
                continue;
            }
            let said = c.interact();
            reply.say(said.clone());
            talks.push((c.name().to_string(), said.clone()));
            clues.push(said);
            if let Some(statement) = c.alibi().or_else(|| c.observation()) {
                reply.say(statement.clone());
                clues.push(statement);
            }
            reply.say(c.perform_action());
        }

        for (character, said) in talks {
            self.journal.append(JournalEntry::Conversation {
                character,
                said,
                timestamp: Utc::now(),
            });
        }
        for clue in &clues {
            self.record_clue(LocationId::CrimeScene, clue);
        }
        reply
    }

    /// Talk to the bystanders. Only the first round yields a clue.
    fn mingle(&mut self) -> Reply {
        let first = self.mansion.bystanders().iter().any(|c| !c.interacted());
        let mut reply = Reply::new();
        if first {
            reply.say("You decide to interact with some others in the room.");
        }

        let mut talks = Vec::new();
        for c in self.mansion.bystanders_mut() {
            let fresh = !c.interacted();
            let said = c.interact();
            reply.say(said.clone());
            if fresh {
                reply.say(c.perform_action());
                talks.push((c.name().to_string(), said));
            }
        }

        for (character, said) in talks {
            self.journal.append(JournalEntry::Conversation {
                character,
                said,
                timestamp: Utc::now(),
            });
        }
        if first {
            self.record_clue(LocationId::CrimeScene, narrative::BYSTANDER_CLUE);
        }
        reply
    }

    fn examine_scene(&mut self) -> Reply {
        if self.examined {
            return Reply::plain(narrative::ALREADY_EXAMINED);
        }
        self.examined = true;

        let mut reply = Reply::new();
        reply.announce(narrative::EXAMINE_SCENE);
        for clue in narrative::EXAMINE_CLUES {
            self.record_clue(LocationId::CrimeScene, clue);
        }
        for item in narrative::scene_items() {
            reply.say(self.pick_up(item));
        }
        reply
    }

    fn open_door(&mut self, index: usize) -> Reply {
        let counter = self.doors.open(index);
        self.journal.append(JournalEntry::MiniGame {
            door: index as u8 + 1,
            won: true,
            timestamp: Utc::now(),
        });
        self.record_clue(LocationId::SecretPassages, DOOR_CLUES[index]);
        self.phase = Phase::Doors;

        let mut reply = Reply::new();
        reply.announce(REVEALS[index]).say(counter.to_string());
        if self.doors.take_letter() {
            self.record_clue(LocationId::CrimeScene, narrative::LETTER_CLUE);
            let picked = self.pick_up(doors::letter());
            reply.say("You have discovered a secret letter").say(picked);
        }
        reply
    }

    fn door_lost(&mut self, index: usize) {
        self.journal.append(JournalEntry::MiniGame {
            door: index as u8 + 1,
            won: false,
            timestamp: Utc::now(),
        });
        self.phase = Phase::Doors;
    }

    fn pick_up(&mut self, item: Item) -> String {
        self.journal.append(JournalEntry::ItemFound {
            item: item.name.clone(),
            timestamp: Utc::now(),
        });
        self.inventory.add_item(item)
    }

    /// A clue already noted in that location is not noted again, so clues
    /// restored from a save are not doubled by repeating a conversation.
    fn record_clue(&mut self, location: LocationId, clue: &str) {
        let place = self.mansion.location_mut(location);
        if place.review_clues().iter().any(|c| c == clue) {
            tracing::debug!(%location, clue, "clue already noted");
            return;
        }
        place.add_clue(clue);
        self.journal.append(JournalEntry::ClueFound {
            location: location.to_string(),
            clue: clue.to_string(),
            timestamp: Utc::now(),
        });
    }

    fn moved_to(&mut self, location: LocationId) {
        self.journal.append(JournalEntry::Moved {
            location: location.to_string(),
            timestamp: Utc::now(),
        });
    }

    fn finish(&mut self, ending: Ending, text: &str) -> Reply {
        self.ending = Some(ending);
        self.phase = Phase::Ended;

        let card = self.score_card();
        let score = card.total();
        self.journal.append(JournalEntry::GameOver {
            solved: ending == Ending::Solved,
            score,
            timestamp: Utc::now(),
        });
        tracing::info!(?ending, score, "investigation ended");

        let mut reply = Reply::plain(text);
        reply
            .say(format!("Game Over! Your final score was {score}"))
            .say(card.verdict().to_string());
        reply
    }
}

fn clue_listing(clues: &[&str]) -> String {
    if clues.is_empty() {
        return "No clues have been gathered yet.".to_string();
    }
    let mut out = String::from("You review your clues:");
    for clue in clues {
        out.push('\n');
        out.push_str(clue);
    }
    out
}
