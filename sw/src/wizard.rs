//! Wizard step state machine
//!
//! A fixed linear sequence of steps with clamped advance/retreat, a single
//! reset path for editing answers from the summary screen, and a forced
//! jump to the final step after a successful submission.

use tracing::debug;

use crate::answers::AnswerSet;
use crate::badge::Badge;

/// The ordered wizard steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Intro,
    Identity,
    Hobbies,
    Spiritual,
    Mission,
    Skills,
    Fun,
    Speakers,
    LifeSkills,
    Hope,
    Finish,
}

/// Declaration order of the steps; navigation walks this slice
pub const STEPS: &[Step] = &[
    Step::Intro,
    Step::Identity,
    Step::Hobbies,
    Step::Spiritual,
    Step::Mission,
    Step::Skills,
    Step::Fun,
    Step::Speakers,
    Step::LifeSkills,
    Step::Hope,
    Step::Finish,
];

impl Step {
    /// Ordinal position within [`STEPS`]
    pub fn index(self) -> usize {
        STEPS.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Card title shown in the TUI header
    pub fn title(self) -> &'static str {
        match self {
            Step::Intro => "Welcome, Ambassador!",
            Step::Identity => "Your Identity",
            Step::Hobbies => "Your Interests",
            Step::Spiritual => "Spiritual Training",
            Step::Mission => "Mission Field",
            Step::Skills => "Skills for the Kingdom",
            Step::Fun => "Fellowship & Fun",
            Step::Speakers => "Speakers & Program",
            Step::LifeSkills => "Life Skills",
            Step::Hope => "Your Hope",
            Step::Finish => "Mission Accepted!",
        }
    }

    pub fn is_first(self) -> bool {
        self == STEPS[0]
    }

    pub fn is_last(self) -> bool {
        self == STEPS[STEPS.len() - 1]
    }
}

/// Owns the in-progress answers, current step, and derived badge
#[derive(Debug)]
pub struct Wizard {
    step: Step,
    /// The in-progress answer set
    pub answers: AnswerSet,
    badge: Option<Badge>,
    submitting: bool,
}

impl Wizard {
    /// Start a session at the intro step, with answers either fresh or
    /// merged from a saved draft
    pub fn new(answers: AnswerSet) -> Self {
        debug!("Wizard::new");
        Self {
            step: Step::Intro,
            answers,
            badge: None,
            submitting: false,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn badge(&self) -> Option<Badge> {
        self.badge
    }

    /// Whether a submission is currently in flight
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Move forward one step; no-op on the last step
    pub fn advance(&mut self) {
        let next = (self.step.index() + 1).min(STEPS.len() - 1);
        debug!(from = ?self.step, to = ?STEPS[next], "Wizard::advance");
        self.step = STEPS[next];
    }

    /// Move back one step; no-op on the first step
    pub fn retreat(&mut self) {
        let prev = self.step.index().saturating_sub(1);
        debug!(from = ?self.step, to = ?STEPS[prev], "Wizard::retreat");
        self.step = STEPS[prev];
    }

    /// Completion percentage for the progress bar
    pub fn progress_percent(&self) -> u16 {
        let percent = self.step.index() as f64 / (STEPS.len() - 1) as f64 * 100.0;
        percent.round() as u16
    }

    /// From the summary screen, go back to the first answer step
    pub fn edit_answers(&mut self) {
        debug!("Wizard::edit_answers");
        self.step = Step::Identity;
        self.badge = None;
    }

    /// Mark a submission as in flight and fix the badge for it
    ///
    /// Returns `None` when a submission is already pending, so the caller
    /// cannot double-submit.
    pub fn begin_submission(&mut self) -> Option<Badge> {
        if self.submitting {
            debug!("Wizard::begin_submission: already in flight");
            return None;
        }
        let badge = Badge::compute(&self.answers);
        debug!(?badge, "Wizard::begin_submission");
        self.submitting = true;
        self.badge = Some(badge);
        Some(badge)
    }

    /// Clear the in-flight flag; on success, force the final step
    pub fn end_submission(&mut self, success: bool) {
        debug!(success, "Wizard::end_submission");
        self.submitting = false;
        if success {
            self.step = STEPS[STEPS.len() - 1];
        } else {
            self.badge = None;
        }
    }
}
