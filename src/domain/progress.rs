use std::fmt;
use std::ops::Range;

use serde::Serialize;

use super::ResolutionResult;

/// The stages an order moves through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStep {
    /// Order Placed: the order was received.
    OrderPlaced,
    /// Processing: the order is being prepared.
    Processing,
    /// Shipped: the order left the warehouse.
    Shipped,
    /// Delivered: the order reached the customer.
    Delivered,
}

impl ProgressStep {
    /// All steps in progression order.
    pub const ALL: [ProgressStep; 4] = [
        ProgressStep::OrderPlaced,
        ProgressStep::Processing,
        ProgressStep::Shipped,
        ProgressStep::Delivered,
    ];

    /// Number of steps.
    pub const COUNT: usize = Self::ALL.len();

    /// Canonical status string, as stored in order records.
    pub fn label(&self) -> &'static str {
        match self {
            ProgressStep::OrderPlaced => "Order Placed",
            ProgressStep::Processing => "Processing",
            ProgressStep::Shipped => "Shipped",
            ProgressStep::Delivered => "Delivered",
        }
    }

    /// Zero-based position in [`ProgressStep::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parse a stored status string. Matching is exact.
    pub fn from_label(status: &str) -> Option<ProgressStep> {
        Self::ALL.into_iter().find(|step| step.label() == status)
    }
}

impl fmt::Display for ProgressStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Whether a step or connector has been passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Completed,
    Pending,
}

impl Mark {
    pub fn is_completed(&self) -> bool {
        matches!(self, Mark::Completed)
    }
}

/// Completed/pending marking of the progress indicator.
///
/// Progression is monotonic: reaching step `k` implies every earlier step
/// was passed, so the marking is fully described by the completed count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressMarks {
    completed: usize,
}

impl ProgressMarks {
    /// Marking with every step pending.
    pub fn none() -> Self {
        Self { completed: 0 }
    }

    /// Marking for an order currently at `status_index`.
    pub fn for_index(status_index: usize) -> Self {
        Self { completed: status_index.saturating_add(1).min(ProgressStep::COUNT) }
    }

    /// Marking for a resolution; only `Found` completes any step.
    pub fn from_result(result: &ResolutionResult) -> Self {
        match result {
            ResolutionResult::Found { status_index, .. } => Self::for_index(*status_index),
            ResolutionResult::NotFound { .. } | ResolutionResult::UnknownStatus { .. } => {
                Self::none()
            }
        }
    }

    /// Indices of completed steps.
    pub fn completed_steps(&self) -> Range<usize> {
        0..self.completed
    }

    /// Indices of pending steps.
    pub fn pending_steps(&self) -> Range<usize> {
        self.completed..ProgressStep::COUNT
    }

    pub fn step(&self, index: usize) -> Mark {
        if index < self.completed { Mark::Completed } else { Mark::Pending }
    }

    /// Connector `index` joins step `index` and step `index + 1`.
    pub fn connector(&self, index: usize) -> Mark {
        if index + 1 < self.completed { Mark::Completed } else { Mark::Pending }
    }

    pub fn steps(&self) -> impl Iterator<Item = (ProgressStep, Mark)> + '_ {
        ProgressStep::ALL.into_iter().map(move |step| (step, self.step(step.index())))
    }

    pub fn connectors(&self) -> impl Iterator<Item = Mark> + '_ {
        (0..ProgressStep::COUNT - 1).map(move |index| self.connector(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn labels_roundtrip() {
        for step in ProgressStep::ALL {
            assert_eq!(ProgressStep::from_label(step.label()), Some(step));
        }
    }

    #[test]
    fn indices_follow_declaration_order() {
        for (position, step) in ProgressStep::ALL.iter().enumerate() {
            assert_eq!(step.index(), position);
        }
    }

    #[test]
    fn label_matching_is_exact() {
        assert_eq!(ProgressStep::from_label("shipped"), None);
        assert_eq!(ProgressStep::from_label(" Shipped"), None);
        assert_eq!(ProgressStep::from_label("Cancelled"), None);
    }

    #[test]
    fn delivered_completes_everything() {
        let marks = ProgressMarks::for_index(ProgressStep::Delivered.index());
        assert_eq!(marks.completed_steps(), 0..4);
        assert!(marks.pending_steps().is_empty());
        assert!(marks.connectors().all(|mark| mark.is_completed()));
    }

    #[test]
    fn order_placed_completes_first_step_only() {
        let marks = ProgressMarks::for_index(0);
        assert_eq!(marks.completed_steps(), 0..1);
        assert_eq!(marks.pending_steps(), 1..4);
        assert!(marks.connectors().all(|mark| !mark.is_completed()));
    }

    #[test]
    fn shipped_completes_two_connectors() {
        let marks = ProgressMarks::for_index(2);
        let connectors: Vec<Mark> = marks.connectors().collect();
        assert_eq!(connectors, vec![Mark::Completed, Mark::Completed, Mark::Pending]);
    }

    #[test]
    fn out_of_range_index_saturates_at_delivered() {
        let result = ResolutionResult::Found {
            status_index: usize::MAX,
            status: "Delivered".to_string(),
            details: String::new(),
        };
        let marks = ProgressMarks::from_result(&result);
        assert_eq!(marks, ProgressMarks::for_index(ProgressStep::Delivered.index()));
        assert!(marks.pending_steps().is_empty());
    }

    #[test]
    fn non_found_results_mark_nothing() {
        let result = ResolutionResult::NotFound { queried_id: "IK00000".to_string() };
        let marks = ProgressMarks::from_result(&result);
        assert_eq!(marks, ProgressMarks::none());
        assert_eq!(marks.pending_steps(), 0..4);
    }

    proptest! {
        #[test]
        fn completed_and_pending_partition_the_steps(k in 0usize..ProgressStep::COUNT) {
            let marks = ProgressMarks::for_index(k);
            prop_assert_eq!(marks.completed_steps(), 0..k + 1);
            prop_assert_eq!(marks.pending_steps(), k + 1..ProgressStep::COUNT);
            for (step, mark) in marks.steps() {
                prop_assert_eq!(mark.is_completed(), step.index() <= k);
            }
        }

        #[test]
        fn connectors_complete_only_between_completed_steps(k in 0usize..ProgressStep::COUNT) {
            let marks = ProgressMarks::for_index(k);
            for index in 0..ProgressStep::COUNT - 1 {
                let both = marks.step(index).is_completed() && marks.step(index + 1).is_completed();
                prop_assert_eq!(marks.connector(index).is_completed(), both);
            }
        }
    }
}
