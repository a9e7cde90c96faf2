//! Ordered status vocabularies with time thresholds.

use crate::error::FlowError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use voxdesk_types::ORDER_STATUS_SCHEDULE;

/// One step of a [`StatusFlow`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowStep {
    /// Seconds after creation at which this status becomes due.
    pub after_secs: u64,
    /// Status name.
    pub status: String,
}

/// An ordered list of statuses, each due a fixed time after creation.
///
/// Thresholds strictly increase and status names are unique, so the flow
/// defines a total order over its statuses. It is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FlowStep>", into = "Vec<FlowStep>")]
pub struct StatusFlow {
    steps: Vec<FlowStep>,
}

impl StatusFlow {
    /// Builds a flow from `(threshold_secs, status)` pairs.
    ///
    /// # Errors
    ///
    /// Returns a [`FlowError`] if the list is empty, a threshold does not
    /// strictly increase, or a status name is empty or repeated.
    pub fn new<I, S>(steps: I) -> Result<Self, FlowError>
    where
        I: IntoIterator<Item = (u64, S)>,
        S: Into<String>,
    {
        let steps = steps
            .into_iter()
            .map(|(after_secs, status)| FlowStep {
                after_secs,
                status: status.into(),
            })
            .collect();
        Self::from_steps(steps)
    }

    fn from_steps(steps: Vec<FlowStep>) -> Result<Self, FlowError> {
        if steps.is_empty() {
            return Err(FlowError::Empty);
        }
        for (i, step) in steps.iter().enumerate() {
            if step.status.is_empty() {
                return Err(FlowError::EmptyStatus);
            }
            if steps[..i].iter().any(|s| s.status == step.status) {
                return Err(FlowError::DuplicateStatus(step.status.clone()));
            }
            if let Some(prev) = i.checked_sub(1).map(|p| &steps[p]) {
                if prev.after_secs >= step.after_secs {
                    return Err(FlowError::NotIncreasing {
                        previous: prev.after_secs,
                        next: step.after_secs,
                    });
                }
            }
        }
        Ok(Self { steps })
    }

    /// The grocery delivery flow: received, confirmed, preparing,
    /// out_for_delivery, delivered, thirty seconds apart.
    pub fn order_delivery() -> Self {
        Self {
            steps: ORDER_STATUS_SCHEDULE
                .iter()
                .map(|&(after_secs, status)| FlowStep {
                    after_secs,
                    status: status.to_string(),
                })
                .collect(),
        }
    }

    /// Position of `status` in the flow, if it belongs to it.
    pub fn index_of(&self, status: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.status == status)
    }

    /// Whether `status` belongs to the flow.
    pub fn contains(&self, status: &str) -> bool {
        self.index_of(status).is_some()
    }

    /// Position of the latest step due after `elapsed`: the step with the
    /// greatest threshold that is `<= elapsed`.
    pub fn due_index(&self, elapsed: Duration) -> Option<usize> {
        self.steps
            .iter()
            .rposition(|s| Duration::from_secs(s.after_secs) <= elapsed)
    }

    /// Status name at `index`.
    pub fn status_at(&self, index: usize) -> Option<&str> {
        self.steps.get(index).map(|s| s.status.as_str())
    }

    /// The final status of the flow.
    pub fn terminal(&self) -> &str {
        // Non-empty by construction.
        &self.steps[self.steps.len() - 1].status
    }

    /// Whether `status` is the final status of the flow.
    pub fn is_terminal(&self, status: &str) -> bool {
        self.terminal() == status
    }

    /// Status names in flow order.
    pub fn statuses(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|s| s.status.as_str())
    }

    /// Steps in flow order.
    pub fn steps(&self) -> &[FlowStep] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`; present for symmetry with [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Default for StatusFlow {
    fn default() -> Self {
        Self::order_delivery()
    }
}

impl TryFrom<Vec<FlowStep>> for StatusFlow {
    type Error = FlowError;

    fn try_from(steps: Vec<FlowStep>) -> Result<Self, Self::Error> {
        Self::from_steps(steps)
    }
}

impl From<StatusFlow> for Vec<FlowStep> {
    fn from(flow: StatusFlow) -> Self {
        flow.steps
    }
}
