//! TUI Runner - owns the terminal and the event loop
//!
//! The runner draws frames, feeds key events to the App, and launches the
//! submission as a background tokio task so the interface stays responsive
//! while the request is in flight. Re-submission is blocked by the
//! wizard's in-flight flag until the task reports back.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::KeyEventKind;
use eyre::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::badge::Badge;
use crate::draft::DraftStore;
use crate::submit::SubmitClient;
use crate::wizard::Wizard;

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::state::{AppState, InteractionMode};
use super::views;

/// Event poll interval; also bounds how often the submit channel is drained
const TICK_RATE: Duration = Duration::from_millis(100);

/// How long the success state is held before the summary screen appears
const SUCCESS_HOLD: Duration = Duration::from_millis(1500);

/// Result from the background submission task
#[derive(Debug)]
enum SubmitTaskResult {
    /// The store accepted the record
    Accepted(Badge),
    /// Transport or store failure
    Failed(String),
}

/// TUI Runner that manages the terminal and event loop
pub struct TuiRunner {
    app: App,
    terminal: Tui,
    event_handler: EventHandler,
    client: Arc<SubmitClient>,
    /// Receiver for the in-flight submission, if any
    submit_rx: Option<mpsc::UnboundedReceiver<SubmitTaskResult>>,
    /// Handle to the background submission task
    submit_task: Option<JoinHandle<()>>,
}

impl TuiRunner {
    pub fn new(terminal: Tui, wizard: Wizard, drafts: Box<dyn DraftStore>, client: SubmitClient) -> Self {
        debug!("TuiRunner::new");
        Self {
            app: App::new(AppState::new(wizard), drafts),
            terminal,
            event_handler: EventHandler::new(TICK_RATE),
            client: Arc::new(client),
            submit_rx: None,
            submit_task: None,
        }
    }

    /// Run the event loop until the user quits
    pub async fn run(mut self) -> Result<()> {
        info!("TuiRunner::run: starting");
        loop {
            self.terminal.draw(|frame| views::render(self.app.state(), frame))?;

            self.drain_submission_results();
            self.launch_pending_submission();

            match self.event_handler.next().await? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.app.handle_key(key),
                Event::Key(_) | Event::Resize(..) | Event::Tick => {}
            }

            if self.app.state().should_quit {
                info!("TuiRunner::run: quit");
                break;
            }
        }

        if let Some(task) = self.submit_task.take() {
            task.abort();
        }
        Ok(())
    }

    /// Apply any finished submission outcome to the wizard
    fn drain_submission_results(&mut self) {
        let Some(rx) = &mut self.submit_rx else { return };
        match rx.try_recv() {
            Ok(SubmitTaskResult::Accepted(badge)) => {
                info!(?badge, "Submission accepted");
                self.submit_rx = None;
                self.submit_task = None;
                // The draft has served its purpose; removal is best-effort
                self.app.clear_draft();
                self.app.state_mut().wizard.end_submission(true);
                self.app.state_mut().cursor = 0;
            }
            Ok(SubmitTaskResult::Failed(message)) => {
                warn!(%message, "Submission failed");
                self.submit_rx = None;
                self.submit_task = None;
                self.app.state_mut().wizard.end_submission(false);
                self.app.state_mut().mode = InteractionMode::Alert(message);
            }
            Err(mpsc::error::TryRecvError::Empty) => {}
            Err(mpsc::error::TryRecvError::Disconnected) => {
                self.submit_rx = None;
                self.submit_task = None;
                self.app.state_mut().wizard.end_submission(false);
            }
        }
    }

    /// Start the background submission if the App flagged one
    fn launch_pending_submission(&mut self) {
        if !self.app.state().pending_submit {
            return;
        }
        self.app.state_mut().pending_submit = false;

        // begin_submission refuses while one is already in flight
        let Some(badge) = self.app.state_mut().wizard.begin_submission() else {
            return;
        };
        let answers = self.app.state().wizard.answers.clone();
        let client = Arc::clone(&self.client);
        let (tx, rx) = mpsc::unbounded_channel();

        debug!(?badge, "TuiRunner::launch_pending_submission: spawning task");
        self.submit_rx = Some(rx);
        self.submit_task = Some(tokio::spawn(async move {
            match client.submit(&answers, badge).await {
                Ok(()) => {
                    // Brief hold so the submitting state is visible before
                    // the summary screen takes over
                    tokio::time::sleep(SUCCESS_HOLD).await;
                    let _ = tx.send(SubmitTaskResult::Accepted(badge));
                }
                Err(e) => {
                    let _ = tx.send(SubmitTaskResult::Failed(e.to_string()));
                }
            }
        }));
    }
}
