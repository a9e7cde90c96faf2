//! Forward-only status progression.

use crate::clock::{Clock, SystemClock};
use crate::error::TimestampError;
use crate::flow::StatusFlow;
use crate::timestamp::parse_created_at;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An entity with a creation time and a status drawn from a [`StatusFlow`].
pub trait Tracked {
    /// Identifier used in logs.
    fn id(&self) -> &str;

    /// Raw creation timestamp, if recorded.
    fn created_at(&self) -> Option<&str>;

    /// Current status.
    fn status(&self) -> &str;

    /// Replaces the current status.
    fn set_status(&mut self, status: String);
}

/// A minimal [`Tracked`] record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedEntity {
    /// Identifier used in log lines.
    pub id: String,
    /// Creation time as written by the producer, `None` when absent.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Current status name.
    pub status: String,
}

impl TrackedEntity {
    /// Creates an entity with a creation timestamp.
    pub fn new(
        id: impl Into<String>,
        created_at: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            created_at: Some(created_at.into()),
            status: status.into(),
        }
    }
}

impl Tracked for TrackedEntity {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn set_status(&mut self, status: String) {
        self.status = status;
    }
}

/// What [`advance`] did to an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The status moved forward.
    Advanced {
        /// Status before the call.
        from: String,
        /// Status after the call.
        to: String,
    },
    /// The entity already has the latest due status, or none is due yet.
    Unchanged,
    /// The current status is not part of the flow; the entity is left alone.
    UnknownStatus(String),
    /// The creation time is missing or unreadable; the entity is left alone.
    MalformedTimestamp(TimestampError),
}

impl Advance {
    /// Whether the entity's status changed.
    pub fn changed(&self) -> bool {
        matches!(self, Self::Advanced { .. })
    }
}

/// Moves `entity` to the latest status of `flow` that is due at `now`.
///
/// The due status is the one with the greatest threshold not exceeding the
/// time elapsed since creation. The entity's status changes only if the due
/// status comes strictly later in the flow, so repeated calls with
/// non-decreasing `now` never move it backwards.
///
/// A missing or unparsable creation time and a status outside the flow are
/// reported in the returned [`Advance`] and leave the entity untouched.
pub fn advance<T>(entity: &mut T, flow: &StatusFlow, now: DateTime<Utc>) -> Advance
where
    T: Tracked + ?Sized,
{
    let created_at = match entity.created_at().map(parse_created_at) {
        Some(Ok(ts)) => ts,
        Some(Err(e)) => return malformed(entity, e),
        None => return malformed(entity, TimestampError::Missing),
    };

    let Some(current) = flow.index_of(entity.status()) else {
        tracing::debug!(
            id = entity.id(),
            status = entity.status(),
            "status outside flow, leaving entity unchanged"
        );
        return Advance::UnknownStatus(entity.status().to_string());
    };

    // Negative elapsed time (created in the future) reaches no threshold.
    let Ok(elapsed) = (now - created_at).to_std() else {
        return Advance::Unchanged;
    };

    match flow.due_index(elapsed) {
        Some(due) if due > current => {
            let from = entity.status().to_string();
            let to = flow.status_at(due).unwrap_or_default().to_string();
            entity.set_status(to.clone());
            tracing::info!(id = entity.id(), %from, %to, "status advanced");
            Advance::Advanced { from, to }
        }
        _ => Advance::Unchanged,
    }
}

fn malformed<T: Tracked + ?Sized>(entity: &T, error: TimestampError) -> Advance {
    tracing::warn!(id = entity.id(), %error, "cannot advance entity");
    Advance::MalformedTimestamp(error)
}

/// A [`StatusFlow`] bound to a [`Clock`].
#[derive(Debug, Clone)]
pub struct Progressor<C = SystemClock> {
    flow: StatusFlow,
    clock: C,
}

impl<C: Clock> Progressor<C> {
    /// Creates a progressor reading time from `clock`.
    pub fn new(flow: StatusFlow, clock: C) -> Self {
        Self { flow, clock }
    }

    /// Advances `entity` against the clock's current time.
    pub fn advance<T: Tracked + ?Sized>(&self, entity: &mut T) -> Advance {
        advance(entity, &self.flow, self.clock.now())
    }

    /// The flow entities are advanced through.
    pub fn flow(&self) -> &StatusFlow {
        &self.flow
    }

    /// The clock time is read from.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
