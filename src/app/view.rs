//! Presentation model of a tracking lookup.
//!
//! A view is rebuilt from scratch for every lookup, so nothing from a
//! previous lookup leaks into the next one.

use serde::Serialize;

use crate::domain::{Mark, ProgressMarks, ProgressStep, ResolutionResult};

/// Message shown before any lookup.
pub const IDLE_MESSAGE: &str = "Please enter an Order ID to begin tracking.";

/// Emphasis of the status panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// No lookup has been made yet.
    Idle,
    /// The order was found.
    Info,
    /// The lookup failed or the record is inconsistent.
    Danger,
}

/// One step of the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub step: ProgressStep,
    pub label: &'static str,
    pub mark: Mark,
}

/// Everything a display layer draws for one lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingView {
    pub steps: Vec<StepView>,
    /// `connectors[i]` sits between `steps[i]` and `steps[i + 1]`.
    pub connectors: Vec<Mark>,
    pub tone: Tone,
    pub message: String,
}

impl TrackingView {
    /// Initial view with every step pending.
    pub fn idle() -> Self {
        Self::with_marks(ProgressMarks::none(), Tone::Idle, IDLE_MESSAGE.to_string())
    }

    pub fn from_result(result: &ResolutionResult) -> Self {
        let marks = ProgressMarks::from_result(result);
        match result {
            ResolutionResult::Found { status, details, .. } => {
                Self::with_marks(marks, Tone::Info, format!("Status: {status}\n{details}"))
            }
            ResolutionResult::NotFound { queried_id } => Self::with_marks(
                marks,
                Tone::Danger,
                format!("Order ID '{queried_id}' not found. Please check the ID and try again."),
            ),
            ResolutionResult::UnknownStatus { status } => Self::with_marks(
                marks,
                Tone::Danger,
                format!("Error: Unknown status '{status}'."),
            ),
        }
    }

    fn with_marks(marks: ProgressMarks, tone: Tone, message: String) -> Self {
        let steps = marks
            .steps()
            .map(|(step, mark)| StepView { step, label: step.label(), mark })
            .collect();
        let connectors = marks.connectors().collect();
        Self { steps, connectors, tone, message }
    }

    /// Number of completed steps.
    pub fn completed_count(&self) -> usize {
        self.steps.iter().filter(|step| step.mark.is_completed()).count()
    }
}
