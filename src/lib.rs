//! Health Advisor - diet and posture recommendations in the terminal
//!
//! Collects personal and posture details, turns them into two prompts for a
//! generative model, and shows the formatted replies.
//!
//! # Architecture
//!
//! - **profile**: records and the input form that collects them
//! - **prompt**: fixed prompt templates
//! - **models**: text-generation client and recommender
//! - **formatter**: heading/bullet markup to styled lines
//! - **shell**: Idle/Busy/Result state machine, worker dispatch, view
//! - **repl**: terminal frontend

pub mod errors;
pub mod profile;
pub mod prompt;
pub mod models;
pub mod formatter;
pub mod pipeline;
pub mod shell;

// Re-export commonly used types
pub use errors::{AdvisorError, Result};

// Interface layer
pub mod cli;
pub mod doctor;
pub mod repl;
