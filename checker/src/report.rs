//! Suite report
//!
//! Collects per-case outcomes and renders them as a tab separated table or JSON.

use calc_api_check_common::protocol::Target;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Result of a single case
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CaseOutcome {
    /// Case name
    pub name: String,
    /// Service the request was sent to
    pub target: Target,
    /// Requested URL
    pub url: String,
    /// Whether the expectation held
    pub passed: bool,
    /// Response body, or the error text when the call failed
    pub observed: String,
    /// Why the case failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
    /// Wall-clock time of the request
    pub elapsed_ms: u64,
}

/// Outcome of a whole suite run
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// Outcomes in execution order
    pub outcomes: Vec<CaseOutcome>,
}

impl Default for SuiteReport {
    fn default() -> Self {
        Self::new()
    }
}

impl SuiteReport {
    /// Create an empty report stamped with the current time
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            outcomes: Vec::new(),
        }
    }

    /// Append an outcome
    pub fn push(&mut self, outcome: CaseOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of passed cases
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    /// Number of failed cases
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// True when every case passed. An empty run counts as a failure.
    pub fn is_success(&self) -> bool {
        !self.outcomes.is_empty() && self.failed() == 0
    }

    /// Render as a tab separated table with a summary line
    pub fn render_table(&self) -> String {
        let mut out = String::from("CASE\tTARGET\tSTATUS\tTIME\tURL\tDETAIL\n");
        for outcome in &self.outcomes {
            let status = if outcome.passed { "PASS" } else { "FAIL" };
            let detail = outcome.failure.as_deref().unwrap_or(&outcome.observed);
            out.push_str(&format!(
                "{}\t{}\t{}\t{}ms\t{}\t{}\n",
                outcome.name, outcome.target, status, outcome.elapsed_ms, outcome.url, detail
            ));
        }
        out.push_str(&format!(
            "\n{} passed, {} failed\n",
            self.passed(),
            self.failed()
        ));
        out
    }

    /// Render as pretty JSON
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
