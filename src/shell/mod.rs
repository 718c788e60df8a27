//! Presentation shell
//!
//! Owns the form, the two output panes and the state machine, and runs one
//! worker per submission. All shell state lives on the UI task; workers
//! report back through the message queue in `events`.

pub mod animation;
pub mod events;
pub mod state;
pub mod view;

use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::errors::Result;
use crate::formatter::{self, OutputPane};
use crate::models::Recommender;
use crate::pipeline::{self, Recommendations};
use crate::profile::InputForm;

pub use animation::{HighlightFade, Rgb, Spinner, FRAME_INTERVAL};
pub use events::{ShellMessage, UiSender};
pub use state::{ShellEvent, ShellState};
pub use view::{Tab, View};

/// Shell coordinating form input, background requests and result display
pub struct Shell {
    state: ShellState,
    tab: Tab,
    form: InputForm,
    diet: OutputPane,
    posture: OutputPane,
    recommender: Recommender,
    spinner: Spinner,
    highlight: HighlightFade,
    sender: UiSender,
    receiver: mpsc::UnboundedReceiver<ShellMessage>,
}

impl Shell {
    /// Create a shell around an injected recommender
    pub fn new(recommender: Recommender) -> Self {
        let (sender, receiver) = events::channel();
        Self {
            state: ShellState::Idle,
            tab: Tab::Inputs,
            form: InputForm::new(),
            diet: OutputPane::new("Diet Recommendations"),
            posture: OutputPane::new("Posture Recommendations"),
            recommender,
            spinner: Spinner::default(),
            highlight: HighlightFade::default(),
            sender,
            receiver,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn form(&self) -> &InputForm {
        &self.form
    }

    pub fn diet_pane(&self) -> &OutputPane {
        &self.diet
    }

    pub fn posture_pane(&self) -> &OutputPane {
        &self.posture
    }

    pub fn recommender(&self) -> &Recommender {
        &self.recommender
    }

    /// Whether a worker is currently running
    pub fn is_busy(&self) -> bool {
        self.state == ShellState::Busy
    }

    /// Change one form field; refused while a request is in flight
    pub fn edit_field(&mut self, key: &str, value: &str) -> Result<()> {
        let next = self.state.transition(ShellEvent::InputEdited)?;
        self.form.set(key, value)?;
        self.state = next;
        Ok(())
    }

    /// Start a background request for both recommendations
    ///
    /// Fails with `AdvisorError::Busy`, without spawning anything, if a
    /// request is already in flight. Must be called inside a tokio runtime.
    pub fn submit(&mut self) -> Result<()> {
        let next = self.state.transition(ShellEvent::Submit)?;

        let (personal, posture) = self.form.collect();
        let recommender = self.recommender.clone();
        let sender = self.sender.clone();

        self.state = next;
        self.spinner.start();
        info!("submitting health data");

        tokio::spawn(async move {
            let work = tokio::spawn(async move {
                pipeline::run(&personal, &posture, &recommender).await
            });

            let recommendations = match work.await {
                Ok(recommendations) => recommendations,
                Err(e) => {
                    error!(error = %e, "recommendation worker failed");
                    Recommendations::failed(format!("Error processing data: {}", e))
                }
            };

            if !sender.post(ShellMessage::Completed(recommendations)) {
                debug!("shell closed before results arrived");
            }
        });

        Ok(())
    }

    /// Wait for the next message from a worker
    pub async fn next_message(&mut self) -> Option<ShellMessage> {
        self.receiver.recv().await
    }

    /// Take a pending message without waiting
    pub fn try_next_message(&mut self) -> Option<ShellMessage> {
        self.receiver.try_recv().ok()
    }

    /// Apply a worker message on the UI task
    pub fn apply(&mut self, message: ShellMessage) -> Result<()> {
        match message {
            ShellMessage::Completed(recommendations) => {
                self.state = self.state.transition(ShellEvent::Completed)?;
                self.spinner.stop();

                formatter::render(&mut self.diet, &recommendations.diet);
                formatter::render(&mut self.posture, &recommendations.posture);

                self.tab = Tab::Recommendations;
                self.highlight.start();
                debug!("results rendered");
            }
        }
        Ok(())
    }

    /// Wait for the in-flight request and apply its result
    pub async fn wait_for_results(&mut self) -> Result<()> {
        if let Some(message) = self.next_message().await {
            self.apply(message)?;
        }
        Ok(())
    }

    /// Advance animations by one frame; returns true while any is running
    pub fn tick(&mut self) -> bool {
        self.spinner.tick();
        let fading = self.highlight.tick();
        self.spinner.is_running() || fading
    }

    /// Current frame
    pub fn view(&self) -> View {
        view::render(
            self.state,
            self.tab,
            &self.spinner,
            &self.highlight,
            &self.diet,
            &self.posture,
        )
    }
}
