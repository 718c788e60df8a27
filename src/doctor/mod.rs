//! Doctor command for configuration diagnostics
//!
//! Checks the configuration, the credential, and that the service accepts
//! the key for the configured model.

use colored::*;

use crate::cli::Config;
use crate::models::GeminiClient;

/// Health check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Pass,
    Warn(String),
    Fail(String),
}

/// Individual health check
#[derive(Debug)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
}

impl HealthCheck {
    fn new(name: &str, status: HealthStatus) -> Self {
        Self {
            name: name.to_string(),
            status,
        }
    }
}

/// Doctor diagnostics system
pub struct Doctor {
    config: Config,
}

impl Doctor {
    /// Create a new doctor instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run all health checks
    ///
    /// The remote check is skipped when the credential is unusable.
    pub async fn run_diagnostics(&self) -> Vec<HealthCheck> {
        let mut checks = vec![self.check_config(), self.check_credential()];

        let remote = match GeminiClient::from_config(&self.config) {
            Ok(client) => self.check_model(&client).await,
            Err(_) => HealthCheck::new(
                "Model Access",
                HealthStatus::Warn("Skipped: no usable credential".to_string()),
            ),
        };
        checks.push(remote);

        checks
    }

    /// Check 1: configuration values
    fn check_config(&self) -> HealthCheck {
        let status = match self.config.validate() {
            Ok(()) => HealthStatus::Pass,
            Err(e) => HealthStatus::Fail(e.to_string()),
        };
        HealthCheck::new("Configuration", status)
    }

    /// Check 2: credential present and well-formed
    fn check_credential(&self) -> HealthCheck {
        let status = match self.config.credential() {
            Ok(_) => HealthStatus::Pass,
            Err(e) => HealthStatus::Fail(e.to_string()),
        };
        HealthCheck::new("API Credential", status)
    }

    /// Check 3: model reachable with this key
    async fn check_model(&self, client: &GeminiClient) -> HealthCheck {
        let status = match client.check_model().await {
            Ok(_) => HealthStatus::Pass,
            Err(e) => HealthStatus::Fail(e.to_string()),
        };
        HealthCheck::new("Model Access", status)
    }

    /// Display diagnostics results
    pub fn display_results(checks: &[HealthCheck]) {
        println!("\n{}\n", "Health Advisor Diagnostics".bold().cyan());
        println!("{:<20} {}", "Check", "Status");
        println!("{}", "=".repeat(50));

        for check in checks {
            let status = match &check.status {
                HealthStatus::Pass => format!("{} PASS", "✓").green(),
                HealthStatus::Warn(msg) => format!("! WARN: {}", msg).yellow(),
                HealthStatus::Fail(msg) => format!("✗ FAIL: {}", msg).red(),
            };
            println!("{:<20} {}", check.name, status);
        }

        println!();
    }

    /// Get overall health status
    pub fn overall_status(checks: &[HealthCheck]) -> bool {
        !checks.iter().any(|c| matches!(c.status, HealthStatus::Fail(_)))
    }
}
