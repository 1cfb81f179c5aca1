//! Badge scoring
//!
//! Derives one badge from a finished answer set. Each badge has a fixed
//! qualifying predicate; badges are ranked by score descending with a
//! stable sort, so ties (including the all-zero case) resolve to the
//! earliest-declared badge. Every input yields a badge.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::answers::AnswerSet;

/// The four badge categories, in declaration (tie-break) order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Badge {
    Worshipper,
    Trailblazer,
    Witness,
    Builder,
}

fn worshipper(a: &AnswerSet) -> bool {
    a.fun.contains("singing") || a.skills.contains("music")
}

fn trailblazer(a: &AnswerSet) -> bool {
    a.mission.len() >= 2 || a.skills.contains("leadership")
}

fn witness(a: &AnswerSet) -> bool {
    a.spiritual.contains("share") || a.skills.contains("speaking")
}

fn builder(a: &AnswerSet) -> bool {
    a.skills.contains("media") || a.mission.contains("cleanup")
}

/// Qualifying predicates, one per badge, evaluated uniformly in order
const RULES: &[(Badge, fn(&AnswerSet) -> bool)] = &[
    (Badge::Worshipper, worshipper),
    (Badge::Trailblazer, trailblazer),
    (Badge::Witness, witness),
    (Badge::Builder, builder),
];

impl Badge {
    /// Wire label for the payload and the sheet's badge column
    pub fn label(self) -> &'static str {
        match self {
            Badge::Worshipper => "Worshipper",
            Badge::Trailblazer => "Trailblazer",
            Badge::Witness => "Witness",
            Badge::Builder => "Builder",
        }
    }

    /// Score every badge against the answers and pick the winner
    pub fn compute(answers: &AnswerSet) -> Badge {
        let mut scored: Vec<(Badge, u8)> = RULES
            .iter()
            .map(|(badge, qualifies)| (*badge, u8::from(qualifies(answers))))
            .collect();
        // Stable sort: equal scores keep declaration order
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        let winner = scored[0].0;
        debug!(?winner, "Badge::compute");
        winner
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::SetField;

    #[test]
    fn test_empty_answers_yield_first_declared_badge() {
        assert_eq!(Badge::compute(&AnswerSet::default()), Badge::Worshipper);
    }

    #[test]
    fn test_single_qualifying_badge_wins() {
        let mut answers = AnswerSet::default();
        answers.toggle(SetField::Spiritual, "share");
        assert_eq!(Badge::compute(&answers), Badge::Witness);

        let mut answers = AnswerSet::default();
        answers.toggle(SetField::Skills, "media");
        assert_eq!(Badge::compute(&answers), Badge::Builder);
    }

    #[test]
    fn test_trailblazer_needs_two_mission_picks() {
        let mut answers = AnswerSet::default();
        answers.toggle(SetField::Mission, "sick");
        assert_eq!(Badge::compute(&answers), Badge::Worshipper);
        answers.toggle(SetField::Mission, "feed");
        assert_eq!(Badge::compute(&answers), Badge::Trailblazer);
    }

    #[test]
    fn test_tie_resolves_to_earliest_declared() {
        // Worshipper (music), Trailblazer (two mission picks) and Builder
        // (cleanup) all qualify; Witness does not. First declared wins.
        let mut answers = AnswerSet::default();
        answers.toggle(SetField::Skills, "music");
        answers.toggle(SetField::Mission, "cleanup");
        answers.toggle(SetField::Mission, "feed");
        assert_eq!(Badge::compute(&answers), Badge::Worshipper);
    }

    #[test]
    fn test_later_badge_beats_earlier_non_qualifier() {
        let mut answers = AnswerSet::default();
        answers.toggle(SetField::Mission, "cleanup");
        assert_eq!(Badge::compute(&answers), Badge::Builder);
    }

    #[test]
    fn test_labels_are_wire_stable() {
        assert_eq!(Badge::Worshipper.label(), "Worshipper");
        assert_eq!(Badge::Trailblazer.to_string(), "Trailblazer");
    }
}
