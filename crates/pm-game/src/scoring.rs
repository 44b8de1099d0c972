//! Final score and verdict.

use pm_core::{CharacterRole, LocationId, Mansion, ScoreSink};

/// Points per witness spoken to.
pub const WITNESS_POINTS: u32 = 10;
/// Points for speaking to the prime suspect at the crime scene.
pub const SUSPECT_POINTS: u32 = 15;
/// Points per room resident spoken to, and once for the bystanders.
pub const BYSTANDER_POINTS: u32 = 2;
/// Points for naming the culprit.
pub const CULPRIT_POINTS: u32 = 20;
/// Scores above this are impressive.
pub const IMPRESSIVE_THRESHOLD: u32 = 35;

/// The only suspect whose interview is worth points.
pub const PRIME_SUSPECT: &str = "Mr. Reginald, the butler";

/// Locations whose clues earn a point each.
const SCORED_LOCATIONS: [LocationId; 4] = [
    LocationId::CrimeScene,
    LocationId::Kitchen,
    LocationId::Library,
    LocationId::Attic,
];

/// Running total of item score deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemBonus(i32);

impl ItemBonus {
    /// Current total.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl ScoreSink for ItemBonus {
    fn apply_delta(&mut self, delta: i32) {
        self.0 = self.0.saturating_add(delta);
    }
}

/// Breakdown of a score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreCard {
    /// Clues found in scored locations.
    pub clues: u32,
    /// Witnesses spoken to.
    pub witnesses: u32,
    /// 1 once the prime suspect has been spoken to.
    pub suspects: u32,
    /// Room residents spoken to, plus one for the bystanders as a group.
    pub others: u32,
    /// Sum of used items' score deltas.
    pub items: i32,
    /// Whether the culprit was named.
    pub culprit_named: bool,
}

impl ScoreCard {
    /// Count everything the detective has achieved.
    pub fn tally(mansion: &Mansion, items: ItemBonus, culprit_named: bool) -> Self {
        let clues = SCORED_LOCATIONS
            .iter()
            .map(|&id| mansion.location(id).review_clues().len() as u32)
            .sum();

        let mut card = Self {
            clues,
            items: items.value(),
            culprit_named,
            ..Self::default()
        };
        for c in mansion.interviewees().iter().filter(|c| c.interacted()) {
            match c.role() {
                CharacterRole::Witness { .. } => card.witnesses += 1,
                CharacterRole::Suspect { .. } if c.name() == PRIME_SUSPECT => card.suspects += 1,
                CharacterRole::Suspect { .. } | CharacterRole::Npc => {}
            }
        }
        if mansion.bystanders().iter().any(|c| c.interacted()) {
            card.others += 1;
        }
        card.others += LocationId::ALL
            .iter()
            .filter_map(|&id| mansion.location(id).character())
            .filter(|c| c.interacted())
            .count() as u32;
        card
    }

    /// The final score, never below zero.
    pub fn total(&self) -> u32 {
        let earned = self.clues
            + self.witnesses * WITNESS_POINTS
            + self.suspects * SUSPECT_POINTS
            + self.others * BYSTANDER_POINTS
            + if self.culprit_named { CULPRIT_POINTS } else { 0 };
        earned.saturating_add_signed(self.items)
    }

    /// How the detective did.
    pub fn verdict(&self) -> Verdict {
        if self.total() > IMPRESSIVE_THRESHOLD {
            Verdict::Impressive
        } else {
            Verdict::Disappointing
        }
    }
}

/// Closing remark on the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Above the threshold.
    Impressive,
    /// At or below the threshold.
    Disappointing,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Impressive => write!(f, "Well done, that's impressive!!"),
            Self::Disappointing => write!(f, "That's disappointing... expected better from you"),
        }
    }
}
