//! TUI application state
//!
//! Pure data structures for the TUI. No rendering logic here. The row
//! model describes what each step card contains, and drives both key
//! handling and rendering.

use crate::answers::{
    AGE_OPTIONS, Choice, FEDERATION_OPTIONS, GENDER_OPTIONS, SPORT_OPTIONS, ScalarField, SetField,
};
use crate::wizard::{Step, Wizard};

/// An interactive row on a step card
#[derive(Debug, Clone, Copy)]
pub enum Row {
    /// Single-choice field cycled through a fixed option list
    Select {
        field: ScalarField,
        label: &'static str,
        options: &'static [&'static str],
    },
    /// Free-text field edited inline
    Text { field: ScalarField, label: &'static str },
    /// One member of a multi-select set
    Check { field: SetField, choice: Choice },
}

/// Rows shown for a step, in display order
pub fn step_rows(step: Step) -> Vec<Row> {
    let checks = |field: SetField| -> Vec<Row> {
        field
            .choices()
            .iter()
            .map(|choice| Row::Check { field, choice: *choice })
            .collect()
    };

    match step {
        Step::Intro | Step::Finish => Vec::new(),
        Step::Identity => vec![
            Row::Select { field: ScalarField::Age, label: "Age", options: AGE_OPTIONS },
            Row::Select { field: ScalarField::Gender, label: "Gender", options: GENDER_OPTIONS },
            Row::Select {
                field: ScalarField::Federation,
                label: "Federation",
                options: FEDERATION_OPTIONS,
            },
        ],
        Step::Hobbies => vec![
            Row::Text { field: ScalarField::Hobbies, label: "Hobbies" },
            Row::Text { field: ScalarField::Interests, label: "Interests" },
            Row::Select {
                field: ScalarField::SportingActivity,
                label: "Sporting activity",
                options: SPORT_OPTIONS,
            },
        ],
        Step::Spiritual => checks(SetField::Spiritual),
        Step::Mission => checks(SetField::Mission),
        Step::Skills => checks(SetField::Skills),
        Step::Fun => checks(SetField::Fun),
        Step::Speakers => vec![
            Row::Text { field: ScalarField::Speakers, label: "Suggested speakers" },
            Row::Text { field: ScalarField::ProgramItems, label: "Suggested program items" },
        ],
        Step::LifeSkills => checks(SetField::LifeSkills),
        Step::Hope => vec![
            Row::Text { field: ScalarField::Hope, label: "Your hope" },
            Row::Text { field: ScalarField::OtherIssues, label: "Any other pertinent issues" },
        ],
    }
}

/// In-progress inline text edit
#[derive(Debug, Clone)]
pub struct TextInput {
    pub field: ScalarField,
    pub buffer: String,
}

/// How keys are currently interpreted
#[derive(Debug, Clone)]
pub enum InteractionMode {
    /// Moving around and toggling
    Navigate,
    /// Typing into a free-text field
    Text(TextInput),
    /// Blocking failure dialog; dismissed before anything else happens
    Alert(String),
}

/// All mutable TUI state
pub struct AppState {
    /// The wizard session (step, answers, badge, in-flight flag)
    pub wizard: Wizard,
    /// Highlighted row on the current step card
    pub cursor: usize,
    /// Current key interpretation
    pub mode: InteractionMode,
    /// Transient one-line notice shown in the footer
    pub toast: Option<String>,
    /// Set by key handling, consumed by the runner
    pub pending_submit: bool,
    /// Exit requested
    pub should_quit: bool,
}

impl AppState {
    pub fn new(wizard: Wizard) -> Self {
        Self {
            wizard,
            cursor: 0,
            mode: InteractionMode::Navigate,
            toast: None,
            pending_submit: false,
            should_quit: false,
        }
    }

    /// Number of rows on the current step card
    pub fn row_count(&self) -> usize {
        step_rows(self.wizard.step()).len()
    }

    /// Keep the cursor inside the current card after a step change
    pub fn clamp_cursor(&mut self) {
        let count = self.row_count();
        if count == 0 {
            self.cursor = 0;
        } else if self.cursor >= count {
            self.cursor = count - 1;
        }
    }

    /// The row under the cursor, if the card has any
    pub fn current_row(&self) -> Option<Row> {
        step_rows(self.wizard.step()).get(self.cursor).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::AnswerSet;
    use crate::wizard::STEPS;

    #[test]
    fn test_every_middle_step_has_rows() {
        for step in &STEPS[1..STEPS.len() - 1] {
            assert!(!step_rows(*step).is_empty(), "step {:?} has no rows", step);
        }
        assert!(step_rows(Step::Intro).is_empty());
        assert!(step_rows(Step::Finish).is_empty());
    }

    #[test]
    fn test_life_skills_card_lists_nine_choices() {
        assert_eq!(step_rows(Step::LifeSkills).len(), 9);
    }

    #[test]
    fn test_clamp_cursor_after_step_change() {
        let mut state = AppState::new(Wizard::new(AnswerSet::default()));
        state.cursor = 8;
        state.wizard.advance(); // Identity: 3 rows
        state.clamp_cursor();
        assert_eq!(state.cursor, 2);
    }
}
