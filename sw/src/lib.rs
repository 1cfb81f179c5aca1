//! SurveyWizard - multi-step camp survey client
//!
//! A terminal wizard that collects structured survey responses, keeps a
//! best-effort local draft, derives a badge from the answers with a small
//! ordered rule table, and submits the finished payload to a sheet store
//! endpoint authenticated by a shared secret.
//!
//! # Modules
//!
//! - [`answers`] - the answer set, field identifiers, option catalogs
//! - [`badge`] - rule-based badge scoring
//! - [`wizard`] - linear step state machine
//! - [`draft`] - best-effort draft persistence behind a store trait
//! - [`submit`] - payload building and the outbound POST
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface
//! - [`tui`] - ratatui front end

pub mod answers;
pub mod badge;
pub mod cli;
pub mod config;
pub mod draft;
pub mod submit;
pub mod tui;
pub mod wizard;

// Re-export commonly used types
pub use answers::{AnswerSet, Choice, LIFE_SKILLS_LIMIT, ScalarField, SetField, Toggle};
pub use badge::Badge;
pub use config::Config;
pub use draft::{DraftError, DraftStore, FileDraftStore, MemoryDraftStore};
pub use submit::{SubmitClient, SubmitError};
pub use wizard::{STEPS, Step, Wizard};
