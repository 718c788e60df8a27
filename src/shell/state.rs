//! Shell state machine
//!
//! Valid transitions:
//! 1. Idle   → Busy   (on: Submit)
//! 2. Result → Busy   (on: Submit)
//! 3. Busy   → Result (on: Completed)
//! 4. Result → Idle   (on: InputEdited)
//! 5. Idle   → Idle   (on: InputEdited)
//!
//! There is no cancel: Busy only leaves through Completed.

use crate::errors::{AdvisorError, Result};
use serde::{Deserialize, Serialize};

/// Shell states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShellState {
    /// Submit enabled, no overlay
    #[default]
    Idle,

    /// Request in flight; submit disabled, loading overlay shown
    Busy,

    /// Fresh results on screen, submit enabled
    Result,
}

/// Events that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// User pressed generate
    Submit,

    /// Worker delivered both recommendations (or their errors)
    Completed,

    /// User changed a form field
    InputEdited,
}

impl ShellState {
    /// Attempt state transition with validation
    pub fn transition(&self, event: ShellEvent) -> Result<ShellState> {
        use ShellEvent::*;
        use ShellState::*;

        let next = match (self, event) {
            (Idle, Submit) | (Result, Submit) => Busy,
            (Busy, Submit) => return Err(AdvisorError::Busy),

            (Busy, Completed) => Result,

            (Idle, InputEdited) | (Result, InputEdited) => Idle,

            (from, event) => {
                return Err(AdvisorError::InvalidTransition {
                    from: format!("{:?}", from),
                    event: format!("{:?}", event),
                    reason: match from {
                        Busy => "inputs are locked while a request is in flight".to_string(),
                        _ => "no request in flight".to_string(),
                    },
                });
            }
        };

        Ok(next)
    }

    /// Whether the submit control is enabled
    pub fn accepts_submit(&self) -> bool {
        !matches!(self, ShellState::Busy)
    }

    /// Human-readable state name
    pub fn display_name(&self) -> &'static str {
        match self {
            ShellState::Idle => "Ready",
            ShellState::Busy => "Analyzing",
            ShellState::Result => "Results ready",
        }
    }
}
