//! Integration tests for the submit/complete flow
//!
//! Runs the shell against stub generators, no network needed.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

use health_advisor::{
    formatter::{self, LineStyle, OutputPane, StyledLine},
    models::{Recommender, TextGenerator},
    shell::{Shell, ShellState, Tab},
    AdvisorError, Result,
};

/// Captures prompts and always answers with the same text
struct Scripted {
    reply: &'static str,
    prompts: Mutex<Vec<String>>,
}

#[async_trait]
impl TextGenerator for Scripted {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.to_string())
    }
}

struct Unreachable;

#[async_trait]
impl TextGenerator for Unreachable {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Err(AdvisorError::Generic("connection refused".to_string()))
    }
}

/// Holds every call until the test releases permits
struct Gated {
    gate: Arc<Semaphore>,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl TextGenerator for Gated {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| AdvisorError::Generic(e.to_string()))?;
        permit.forget();
        Ok("**Done:**".to_string())
    }
}

fn fill_personal(shell: &mut Shell) {
    shell.edit_field("age", "30").unwrap();
    shell.edit_field("gender", "Male").unwrap();
    shell.edit_field("weight", "75").unwrap();
    shell.edit_field("height", "180").unwrap();
    shell.edit_field("activity_level", "Moderate").unwrap();
    shell.edit_field("dietary_restrictions", "None").unwrap();
    shell.edit_field("goals", "Weight loss").unwrap();
}

#[tokio::test]
async fn test_submission_renders_formatted_reply() {
    let generator = Arc::new(Scripted {
        reply: "**Daily Calorie Intake:**\n* 2200-2400 calories per day",
        prompts: Mutex::new(Vec::new()),
    });
    let mut shell = Shell::new(Recommender::new(generator.clone()));
    fill_personal(&mut shell);

    shell.submit().unwrap();
    assert_eq!(shell.state(), ShellState::Busy);
    assert!(!shell.view().submit_enabled);

    shell.wait_for_results().await.unwrap();
    assert_eq!(shell.state(), ShellState::Result);
    assert_eq!(shell.tab(), Tab::Recommendations);

    let prompts = generator.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[0].contains("Age: 30"));
    assert!(prompts[0].contains("Weight: 75 kg"));
    assert!(prompts[0].contains("Goals: Weight loss"));
    assert!(prompts[1].contains("Posture Issues:"));

    assert_eq!(
        shell.diet_pane().lines(),
        &[
            StyledLine {
                style: LineStyle::Bold,
                text: "Daily Calorie Intake:".to_string(),
            },
            StyledLine {
                style: LineStyle::Bullet,
                text: "• 2200-2400 calories per day".to_string(),
            },
        ]
    );
    assert!(shell.diet_pane().is_read_only());
    assert!(shell.posture_pane().is_read_only());
}

#[tokio::test]
async fn test_transport_failure_reaches_both_panes() {
    let mut shell = Shell::new(Recommender::new(Arc::new(Unreachable)));
    shell.submit().unwrap();
    shell.wait_for_results().await.unwrap();

    assert_eq!(shell.state(), ShellState::Result);
    assert!(shell
        .diet_pane()
        .plain_text()
        .starts_with("Error generating diet recommendation: "));
    assert!(shell
        .posture_pane()
        .plain_text()
        .starts_with("Error generating posture advice: "));
    assert!(shell.posture_pane().plain_text().contains("connection refused"));
}

#[tokio::test]
async fn test_missing_credential_reaches_both_panes() {
    let recommender = Recommender::unavailable(AdvisorError::MissingCredential(
        "set GEMINI_API_KEY".to_string(),
    ));
    assert!(!recommender.is_available());

    let mut shell = Shell::new(recommender);
    shell.submit().unwrap();
    shell.wait_for_results().await.unwrap();

    assert_eq!(shell.state(), ShellState::Result);
    assert!(shell.diet_pane().plain_text().contains("Missing API credential"));
    assert!(shell.posture_pane().plain_text().contains("Missing API credential"));
}

#[tokio::test]
async fn test_second_submit_rejected_while_busy() {
    let gate = Arc::new(Semaphore::new(0));
    let calls = Arc::new(AtomicUsize::new(0));
    let generator = Gated {
        gate: gate.clone(),
        calls: calls.clone(),
    };
    let mut shell = Shell::new(Recommender::new(Arc::new(generator)));

    shell.submit().unwrap();
    assert!(matches!(shell.submit(), Err(AdvisorError::Busy)));
    assert_eq!(shell.state(), ShellState::Busy);

    gate.add_permits(2);
    shell.wait_for_results().await.unwrap();

    // One submission, one diet call and one posture call
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(shell.try_next_message().is_none());
    assert_eq!(shell.state(), ShellState::Result);
}

#[tokio::test]
async fn test_resubmit_from_result_replaces_content() {
    let mut shell = Shell::new(Recommender::new(Arc::new(Scripted {
        reply: "* first",
        prompts: Mutex::new(Vec::new()),
    })));
    shell.submit().unwrap();
    shell.wait_for_results().await.unwrap();
    assert_eq!(shell.diet_pane().plain_text(), "• first");

    shell.submit().unwrap();
    assert!(shell.view().overlay.is_some());
    shell.wait_for_results().await.unwrap();
    assert_eq!(shell.diet_pane().lines().len(), 1);
}

#[test]
fn test_render_is_idempotent() {
    let text = "**Posture Assessment:**\n* Screen too low\n\nSee a physiotherapist.";
    let mut once = OutputPane::new("Posture Recommendations");
    formatter::render(&mut once, text);
    let first = once.lines().to_vec();

    formatter::render(&mut once, text);
    assert_eq!(once.lines(), first.as_slice());
    assert_eq!(first.len(), 4);
    assert_eq!(first[2].style, LineStyle::Normal);
    assert_eq!(first[2].text, "");
}

#[test]
fn test_rendered_pane_rejects_writes() {
    let mut pane = OutputPane::new("Diet Recommendations");
    formatter::render(&mut pane, "* Eat vegetables");
    let extra = StyledLine {
        style: LineStyle::Normal,
        text: "typed by user".to_string(),
    };
    assert!(matches!(pane.push(extra), Err(AdvisorError::ReadOnlyPane)));
    assert_eq!(pane.lines().len(), 1);
}
