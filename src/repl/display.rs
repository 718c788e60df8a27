//! Display manager for the terminal frontend
//!
//! Draws the tab bar, the input form, the loading spinner and the two
//! recommendation panes. Everything drawn comes from a `View`.

use colored::*;
use crossterm::{
    cursor, execute,
    terminal::{self, Clear, ClearType},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};

use crate::formatter::{LineStyle, StyledLine};
use crate::profile::{FieldKind, InputForm, Section};
use crate::shell::animation::{Rgb, SPINNER_EXTENT_DEGREES};
use crate::shell::view::{Overlay, PaneView, Tab, View, HEADER, LOADING_MESSAGE};

/// Arc glyphs, one per quadrant
const ARC_FRAMES: [&str; 4] = ["◜", "◝", "◞", "◟"];

/// Glyph for a spinner arc starting at `angle`
pub fn arc_glyph(angle: u16) -> &'static str {
    let middle = (angle + SPINNER_EXTENT_DEGREES / 2) % 360;
    ARC_FRAMES[(middle / 90) as usize]
}

/// Terminal rows a line occupies at the given width
fn rows_for(text: &str, width: usize) -> usize {
    let len = text.chars().count();
    if width == 0 || len == 0 {
        1
    } else {
        (len + width - 1) / width
    }
}

/// Display manager for the terminal UI
pub struct DisplayManager {
    animate: bool,
}

impl DisplayManager {
    /// Create new display manager
    pub fn new(color_output: bool, animate: bool) -> Self {
        if !color_output {
            colored::control::set_override(false);
        }
        DisplayManager { animate }
    }

    /// Whether animations are drawn
    pub fn animates(&self) -> bool {
        self.animate
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str, model: &str) {
        let width = 64;
        let rule = "=".repeat(width);
        println!("\n{}", rule.cyan());
        println!("  {}", format!("{} {}", HEADER, version).bold().cyan());
        println!("  {}", format!("Model: {}", model).dimmed());
        println!("{}\n", rule.cyan());
        println!(
            "Fill in the form with {}, then run {} ({} for all commands)\n",
            "/set".green(),
            "/generate".green(),
            "/help".green()
        );
    }

    /// Draw the tab strip with the selected tab highlighted
    pub fn show_tabs(&self, view: &View) {
        let tabs = [Tab::Inputs, Tab::Recommendations]
            .iter()
            .map(|tab| {
                let title = format!(" {} ", tab.title());
                if *tab == view.selected_tab {
                    title.bold().white().on_blue().to_string()
                } else {
                    title.dimmed().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        println!("{}", tabs);
        println!("{}", view.state.display_name().dimmed());
    }

    /// Draw the input form
    pub fn show_inputs(&self, form: &InputForm, view: &View) {
        self.show_tabs(view);

        let mut current_section: Option<Section> = None;
        for field in form.fields() {
            if current_section != Some(field.section) {
                println!("\n{}", field.section.title().bold().cyan());
                current_section = Some(field.section);
            }

            let value = if field.value().is_empty() {
                "(empty)".dimmed().to_string()
            } else {
                field.value().to_string()
            };
            println!("  {:>22} {}  {}", field.label, value, field.key.dimmed());

            if let FieldKind::Choice { options, .. } = &field.kind {
                let listed = options
                    .iter()
                    .enumerate()
                    .map(|(i, o)| format!("{}={}", i + 1, o))
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("  {:>22} {}", "", listed.dimmed());
            }
        }

        let button = " GENERATE RECOMMENDATIONS ";
        if view.submit_enabled {
            println!("\n  {}  {}\n", button.bold().black().on_cyan(), "/generate".green());
        } else {
            println!("\n  {}\n", button.dimmed());
        }
    }

    /// Start the loading indicator
    ///
    /// Without animation the message is printed once and no spinner is
    /// returned.
    pub fn start_loading(&self) -> Option<ProgressBar> {
        if !self.animate {
            println!("{}", LOADING_MESSAGE.dimmed());
            return None;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{prefix:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_prefix(arc_glyph(0));
        pb.set_message(LOADING_MESSAGE);
        Some(pb)
    }

    /// Redraw the loading indicator for the current frame
    pub fn update_loading(&self, pb: &ProgressBar, overlay: &Overlay) {
        pb.set_prefix(arc_glyph(overlay.spinner_angle));
        pb.set_message(overlay.message);
        pb.tick();
    }

    /// Remove the loading indicator
    pub fn finish_loading(&self, pb: ProgressBar) {
        pb.finish_and_clear();
    }

    fn styled_line(line: &StyledLine, background: Option<Rgb>) -> String {
        let text = match line.style {
            LineStyle::Bullet => format!("  {}", line.text),
            _ => line.text.clone(),
        };
        let styled = match line.style {
            LineStyle::Bold => text.bold(),
            LineStyle::Bullet | LineStyle::Normal => text.normal(),
        };
        match background {
            Some(c) => styled.black().on_truecolor(c.r, c.g, c.b).to_string(),
            None => styled.to_string(),
        }
    }

    fn pane_lines(pane: &PaneView) -> Vec<StyledLine> {
        if pane.lines.is_empty() {
            vec![StyledLine {
                style: LineStyle::Normal,
                text: "(no recommendations yet)".to_string(),
            }]
        } else {
            pane.lines.clone()
        }
    }

    /// Draw both recommendation panes; returns the number of rows used
    pub fn show_results(&self, view: &View) -> usize {
        let width = terminal::size().map(|(cols, _)| cols as usize).unwrap_or(80);
        let mut rows = 0;

        for pane in &view.panes {
            let title = format!("── {} ──", pane.title);
            println!("{}", title.bold().cyan());
            rows += rows_for(&title, width);

            for line in Self::pane_lines(pane) {
                println!("{}", Self::styled_line(&line, view.highlight));
                let indent = if line.style == LineStyle::Bullet { 2 } else { 0 };
                rows += rows_for(&line.text, width.saturating_sub(indent));
            }

            println!();
            rows += 1;
        }

        rows
    }

    /// Redraw the panes in place for the next highlight frame
    ///
    /// Skips drawing when the block is taller than the terminal, since the
    /// top would already have scrolled away.
    pub fn redraw_results(&self, view: &View, previous_rows: usize) -> io::Result<usize> {
        let height = terminal::size().map(|(_, rows)| rows as usize).unwrap_or(0);
        if previous_rows == 0 || previous_rows >= height {
            return Ok(previous_rows);
        }

        let mut stdout = io::stdout();
        execute!(
            stdout,
            cursor::MoveUp(previous_rows as u16),
            cursor::MoveToColumn(0),
            Clear(ClearType::FromCursorDown)
        )?;
        let rows = self.show_results(view);
        stdout.flush()?;
        Ok(rows)
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "ℹ".cyan(), info);
    }

    /// Display success message
    pub fn show_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new(true, true)
    }
}
