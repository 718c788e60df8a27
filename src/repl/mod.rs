//! Terminal frontend for the presentation shell
//!
//! Reads slash commands, forwards edits and submissions to the `Shell`,
//! and draws each `View` it produces. While a request is in flight the
//! loop keeps ticking the spinner until the worker's message arrives.

pub mod commands;
pub mod display;
pub mod input;

use anyhow::Result;
use tracing::debug;

use crate::repl::commands::{is_command, Command};
pub use crate::repl::display::DisplayManager;
use crate::repl::input::InputHandler;
use crate::shell::{Shell, Tab, FRAME_INTERVAL};

/// Interactive session driving one shell
pub struct ReplSession {
    shell: Shell,
    display: DisplayManager,
    input: InputHandler,
}

impl ReplSession {
    /// Create a session around a shell
    pub fn new(shell: Shell, display: DisplayManager) -> Result<Self> {
        Ok(ReplSession {
            shell,
            display,
            input: InputHandler::new()?,
        })
    }

    /// Run the loop until `/exit` or EOF
    pub async fn run(&mut self, version: &str, model: &str) -> Result<()> {
        self.display.show_banner(version, model);

        if let Some(reason) = self.shell.recommender().unavailable_reason() {
            self.display
                .show_warning(&format!("Recommendations disabled: {}", reason));
        }

        self.show_current();

        while let Some(line) = self.input.read_line()? {
            if line.is_empty() {
                continue;
            }
            if !self.handle_line(&line).await? {
                break;
            }
        }

        Ok(())
    }

    /// Handle one input line; returns false to exit
    pub async fn handle_line(&mut self, line: &str) -> Result<bool> {
        if !is_command(line) {
            self.display
                .show_info("Commands start with '/'. Type /help for the list.");
            return Ok(true);
        }

        match commands::parse(line) {
            Command::Help => commands::show_help(),
            Command::Exit => return Ok(false),
            Command::Set { field, value } => match self.shell.edit_field(&field, &value) {
                Ok(()) => {
                    let shown = self.shell.form().get(&field).unwrap_or_default();
                    self.display.show_success(&format!("{} = {}", field, shown));
                }
                Err(e) => self.display.show_error(&e.to_string()),
            },
            Command::Edit => self.edit_all()?,
            Command::Generate => self.generate().await?,
            Command::Inputs => {
                self.shell.select_tab(Tab::Inputs);
                self.show_current();
            }
            Command::Results => {
                self.shell.select_tab(Tab::Recommendations);
                self.show_current();
            }
            Command::Show => self.show_current(),
            Command::Unknown { input } => {
                self.display
                    .show_error(&format!("Unknown command: {}", input));
                self.display.show_info("Type /help for available commands");
            }
        }

        Ok(true)
    }

    fn show_current(&self) {
        let view = self.shell.view();
        match view.selected_tab {
            Tab::Inputs => self.display.show_inputs(self.shell.form(), &view),
            Tab::Recommendations => {
                self.display.show_tabs(&view);
                self.display.show_results(&view);
            }
        }
    }

    /// Walk through every field with its current value prefilled
    fn edit_all(&mut self) -> Result<()> {
        let fields: Vec<(&'static str, &'static str)> = self
            .shell
            .form()
            .fields()
            .iter()
            .map(|f| (f.key, f.label))
            .collect();

        for (key, label) in fields {
            loop {
                let current = self.shell.form().get(key).unwrap_or_default().to_string();
                let entered = match self.input.read_field(label, &current) {
                    Ok(entered) => entered,
                    Err(e) => {
                        debug!(error = %e, "edit cancelled");
                        self.display.show_info("Edit cancelled");
                        return Ok(());
                    }
                };

                let Some(value) = entered else { break };
                match self.shell.edit_field(key, &value) {
                    Ok(()) => break,
                    Err(e) => self.display.show_error(&e.to_string()),
                }
            }
        }

        self.show_current();
        Ok(())
    }

    /// Submit, keep the spinner turning until results arrive, then show them
    ///
    /// With animation off the loading message is shown once and the loop
    /// just waits for the worker.
    async fn generate(&mut self) -> Result<()> {
        if let Err(e) = self.shell.submit() {
            self.display.show_error(&e.to_string());
            return Ok(());
        }

        let Some(pb) = self.display.start_loading() else {
            self.shell.wait_for_results().await?;
            return self.show_results_with_highlight().await;
        };

        loop {
            match tokio::time::timeout(FRAME_INTERVAL, self.shell.next_message()).await {
                Ok(Some(message)) => {
                    self.shell.apply(message)?;
                    break;
                }
                Ok(None) => break,
                Err(_) => {
                    self.shell.tick();
                    if let Some(overlay) = self.shell.view().overlay {
                        self.display.update_loading(&pb, &overlay);
                    }
                }
            }
        }
        self.display.finish_loading(pb);

        self.show_results_with_highlight().await
    }

    async fn show_results_with_highlight(&mut self) -> Result<()> {
        self.display.show_tabs(&self.shell.view());

        if !self.display.animates() {
            while self.shell.tick() {}
            self.display.show_results(&self.shell.view());
            return Ok(());
        }

        let mut rows = self.display.show_results(&self.shell.view());
        let mut interval = tokio::time::interval(FRAME_INTERVAL);
        interval.tick().await;

        loop {
            interval.tick().await;
            let running = self.shell.tick();
            rows = self.display.redraw_results(&self.shell.view(), rows)?;
            if !running {
                break;
            }
        }

        Ok(())
    }
}
