//! TUI application - event handling and state management
//!
//! The App struct owns the AppState and handles all keyboard events.
//! It does not do any rendering - that's delegated to the views module.
//! Every answer mutation is followed by a best-effort draft save.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::answers::{ScalarField, Toggle};
use crate::draft::{DraftStore, save_best_effort};
use crate::wizard::Step;

use super::state::{AppState, InteractionMode, Row, TextInput};

/// TUI application
pub struct App {
    /// Application state
    state: AppState,
    /// Draft slot written after every mutation
    drafts: Box<dyn DraftStore>,
}

impl App {
    pub fn new(state: AppState, drafts: Box<dyn DraftStore>) -> Self {
        debug!("App::new");
        Self { state, drafts }
    }

    /// Get reference to state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get mutable reference to state
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Persist the current answers, ignoring failures per the draft contract
    pub fn save_draft(&self) {
        save_best_effort(self.drafts.as_ref(), &self.state.wizard.answers);
    }

    /// Remove the draft after a successful submission (best-effort)
    pub fn clear_draft(&self) {
        if let Err(e) = self.drafts.clear() {
            tracing::warn!(error = %e, "Draft clear failed");
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        debug!(?key, "App::handle_key");
        // Transient notices don't outlive the next key press
        self.state.toast = None;

        match self.state.mode.clone() {
            InteractionMode::Alert(_) => self.handle_alert_key(key),
            InteractionMode::Text(input) => self.handle_text_key(key, input),
            InteractionMode::Navigate => self.handle_navigate_key(key),
        }
    }

    /// Any of the usual dismiss keys closes the failure dialog
    fn handle_alert_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                debug!("App::handle_alert_key: dismissed");
                self.state.mode = InteractionMode::Navigate;
            }
            _ => {}
        }
    }

    /// Inline text editing: Enter commits, Esc cancels
    fn handle_text_key(&mut self, key: KeyEvent, mut input: TextInput) {
        match key.code {
            KeyCode::Enter => {
                self.state.wizard.answers.set(input.field, input.buffer);
                self.save_draft();
                self.state.mode = InteractionMode::Navigate;
            }
            KeyCode::Esc => {
                self.state.mode = InteractionMode::Navigate;
            }
            KeyCode::Backspace => {
                input.buffer.pop();
                self.state.mode = InteractionMode::Text(input);
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                input.buffer.push(c);
                self.state.mode = InteractionMode::Text(input);
            }
            _ => self.state.mode = InteractionMode::Text(input),
        }
    }

    fn handle_navigate_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            // === Quit ===
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _) => {
                debug!("App::handle_navigate_key: quit requested");
                self.state.should_quit = true;
            }

            // === Step navigation ===
            (KeyCode::Right, _) | (KeyCode::Char('n'), _) => self.advance_step(),
            (KeyCode::Left, _) | (KeyCode::Char('b'), _) => self.retreat_step(),

            // === Cursor movement within the card ===
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => {
                if self.state.row_count() > 0 && self.state.cursor + 1 < self.state.row_count() {
                    self.state.cursor += 1;
                }
            }
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => {
                self.state.cursor = self.state.cursor.saturating_sub(1);
            }

            // === Row interaction ===
            (KeyCode::Enter, _) => self.activate_row(),
            (KeyCode::Char(' '), _) => self.activate_row(),

            // === Submission (from the final answer step) ===
            (KeyCode::Char('s'), _) if self.state.wizard.step() == Step::Hope => {
                self.request_submission();
            }

            // === Summary screen actions ===
            (KeyCode::Char('e'), _) if self.state.wizard.step() == Step::Finish => {
                debug!("App::handle_navigate_key: edit answers");
                self.state.wizard.edit_answers();
                self.state.cursor = 0;
            }
            (KeyCode::Char('p'), _) if self.state.wizard.step() == Step::Finish => {
                self.toggle_prize_draw();
            }

            _ => {}
        }
    }

    fn advance_step(&mut self) {
        // The summary screen is only left through its own actions
        if self.state.wizard.step() == Step::Finish {
            return;
        }
        self.state.wizard.advance();
        self.state.cursor = 0;
    }

    fn retreat_step(&mut self) {
        self.state.wizard.retreat();
        self.state.cursor = 0;
    }

    /// Enter/Space on the highlighted row
    fn activate_row(&mut self) {
        match self.state.wizard.step() {
            Step::Intro => {
                self.advance_step();
                return;
            }
            Step::Finish => return,
            _ => {}
        }

        let Some(row) = self.state.current_row() else {
            return;
        };
        match row {
            Row::Select { field, options, .. } => self.cycle_select(field, options),
            Row::Text { field, .. } => {
                let buffer = self.state.wizard.answers.scalar(field).to_string();
                self.state.mode = InteractionMode::Text(TextInput { field, buffer });
            }
            Row::Check { field, choice } => {
                let outcome = self.state.wizard.answers.toggle(field, choice.key);
                if outcome == Toggle::Rejected {
                    self.state.toast = Some(format!(
                        "You can pick at most {} life skills",
                        crate::answers::LIFE_SKILLS_LIMIT
                    ));
                } else {
                    self.save_draft();
                }
            }
        }
    }

    /// Move a single-choice field to the next option in its list
    fn cycle_select(&mut self, field: ScalarField, options: &'static [&'static str]) {
        let current = self.state.wizard.answers.scalar(field);
        let next = match options.iter().position(|o| *o == current) {
            Some(i) => options[(i + 1) % options.len()],
            None => options[0],
        };
        self.state.wizard.answers.set(field, next);
        self.save_draft();
    }

    /// Flag a submission for the runner to launch
    fn request_submission(&mut self) {
        if self.state.wizard.is_submitting() {
            debug!("App::request_submission: already in flight, ignoring");
            return;
        }
        debug!("App::request_submission: flagged");
        self.state.pending_submit = true;
    }

    fn toggle_prize_draw(&mut self) {
        let entered = !self.state.wizard.answers.prize_draw_entry;
        self.state.wizard.answers.set_prize_draw(entered);
        self.save_draft();
        self.state.toast = Some(if entered {
            "You're entered in the prize draw! We will contact winners!".to_string()
        } else {
            "You have been removed from the prize draw.".to_string()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::AnswerSet;
    use crate::draft::MemoryDraftStore;
    use crate::wizard::Wizard;
    use crossterm::event::{KeyCode, KeyEvent};

    fn app() -> App {
        let state = AppState::new(Wizard::new(AnswerSet::default()));
        App::new(state, Box::new(MemoryDraftStore::new()))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn advance_to(app: &mut App, step: Step) {
        while app.state().wizard.step() != step {
            app.handle_key(key(KeyCode::Right));
        }
    }

    #[test]
    fn test_enter_on_intro_advances() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state().wizard.step(), Step::Identity);
    }

    #[test]
    fn test_left_on_intro_is_noop() {
        let mut app = app();
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.state().wizard.step(), Step::Intro);
    }

    #[test]
    fn test_space_toggles_checkbox_and_saves_draft() {
        let mut app = app();
        advance_to(&mut app, Step::Spiritual);
        app.handle_key(key(KeyCode::Char(' ')));
        assert!(app.state().wizard.answers.spiritual.contains("study"));

        // The draft slot saw the mutation
        let saved = app.drafts.load().unwrap().unwrap();
        assert!(saved.spiritual.contains("study"));
    }

    #[test]
    fn test_life_skills_cap_raises_toast() {
        let mut app = app();
        advance_to(&mut app, Step::LifeSkills);
        for _ in 0..3 {
            app.handle_key(key(KeyCode::Char(' ')));
            app.handle_key(key(KeyCode::Down));
        }
        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(app.state().wizard.answers.life_skills.len(), 3);
        assert!(app.state().toast.as_deref().unwrap_or("").contains("at most 3"));
    }

    #[test]
    fn test_select_row_cycles_options() {
        let mut app = app();
        advance_to(&mut app, Step::Identity);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state().wizard.answers.age, "16");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state().wizard.answers.age, "17");
    }

    #[test]
    fn test_text_edit_commit_and_cancel() {
        let mut app = app();
        advance_to(&mut app, Step::Hope);
        app.handle_key(key(KeyCode::Enter));
        for c in "grow".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state().wizard.answers.hope, "grow");

        // Esc discards the edit
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('x')));
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.state().wizard.answers.hope, "grow");
    }

    #[test]
    fn test_submit_key_only_on_hope_step() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('s')));
        assert!(!app.state().pending_submit);

        advance_to(&mut app, Step::Hope);
        app.handle_key(key(KeyCode::Char('s')));
        assert!(app.state().pending_submit);
    }

    #[test]
    fn test_alert_blocks_until_dismissed() {
        let mut app = app();
        app.state_mut().mode = InteractionMode::Alert("boom".to_string());
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.state().wizard.step(), Step::Intro);
        app.handle_key(key(KeyCode::Enter));
        assert!(matches!(app.state().mode, InteractionMode::Navigate));
    }

    #[test]
    fn test_prize_draw_toggle_on_summary() {
        let mut app = app();
        app.state_mut().wizard.begin_submission();
        app.state_mut().wizard.end_submission(true);
        assert_eq!(app.state().wizard.step(), Step::Finish);

        app.handle_key(key(KeyCode::Char('p')));
        assert!(app.state().wizard.answers.prize_draw_entry);
        app.handle_key(key(KeyCode::Char('p')));
        assert!(!app.state().wizard.answers.prize_draw_entry);
    }
}
