//! SheetStore - spreadsheet-style append-only row store
//!
//! Persists survey submissions as rows in named sheets. Each sheet is a
//! single file whose first line is the header row; every later line is one
//! row conforming to that header. The header row, once written, is
//! authoritative: appends are shaped to whatever header the sheet already
//! has, so an older sheet with fewer columns still receives structurally
//! valid rows.
//!
//! # Layout
//!
//! ```text
//! .sheetstore/
//! └── Responses.jsonl     # line 1: header row, then one row per line
//! ```
//!
//! The HTTP endpoint ([`server`]) accepts a JSON submission, checks the
//! shared secret, normalizes the payload against the sheet's header row
//! ([`record`]), and appends.

pub mod cli;
pub mod config;
pub mod record;
pub mod server;
mod sheet;

pub use record::{RESPONSE_HEADERS, TIMESTAMP_HEADER, normalize};
pub use server::{ApiResponse, AppState, router, serve};
pub use sheet::{SheetError, SheetStore};

/// Default sheet receiving survey responses
pub const DEFAULT_SHEET_NAME: &str = "Responses";
