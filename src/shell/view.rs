//! Pure projection of shell state into what the frontend draws

use crate::formatter::{OutputPane, StyledLine};
use crate::shell::animation::{HighlightFade, Rgb, Spinner};
use crate::shell::state::ShellState;

/// Text shown on the loading overlay
pub const LOADING_MESSAGE: &str = "Analyzing your health data...";

/// Header shown above the tabs
pub const HEADER: &str = "AI Health Advisor";

/// Notebook tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Inputs,
    Recommendations,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Inputs => "Input Parameters",
            Tab::Recommendations => "Recommendations",
        }
    }
}

/// Loading overlay contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub message: &'static str,
    pub spinner_angle: u16,
}

/// One output pane as drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneView {
    pub title: &'static str,
    pub lines: Vec<StyledLine>,
    pub read_only: bool,
}

impl From<&OutputPane> for PaneView {
    fn from(pane: &OutputPane) -> Self {
        Self {
            title: pane.title(),
            lines: pane.lines().to_vec(),
            read_only: pane.is_read_only(),
        }
    }
}

/// Everything the frontend needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub state: ShellState,
    pub submit_enabled: bool,
    pub overlay: Option<Overlay>,
    pub selected_tab: Tab,
    pub panes: [PaneView; 2],
    /// Background for the panes while the highlight fades, `None` once settled
    pub highlight: Option<Rgb>,
}

/// Build the frame for the current state
pub fn render(
    state: ShellState,
    tab: Tab,
    spinner: &Spinner,
    highlight: &HighlightFade,
    diet: &OutputPane,
    posture: &OutputPane,
) -> View {
    let overlay = match state {
        ShellState::Busy => Some(Overlay {
            message: LOADING_MESSAGE,
            spinner_angle: spinner.angle(),
        }),
        _ => None,
    };

    View {
        state,
        submit_enabled: state.accepts_submit(),
        overlay,
        selected_tab: tab,
        panes: [PaneView::from(diet), PaneView::from(posture)],
        highlight: highlight.is_active().then(|| highlight.colour()),
    }
}
