//! Advancing many entities at once.

use crate::clock::Clock;
use crate::progress::{advance, Advance, Progressor, Tracked};

/// Tally of one sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Entities whose status moved forward and was committed.
    pub advanced: usize,
    /// Entities already up to date.
    pub unchanged: usize,
    /// Entities whose status is not in the flow.
    pub unknown_status: usize,
    /// Entities without a usable creation time.
    pub malformed: usize,
    /// Entities that moved forward but whose new status could not be
    /// committed.
    pub failed: usize,
}

impl SweepReport {
    /// Counts one outcome.
    pub fn record(&mut self, outcome: &Advance) {
        match outcome {
            Advance::Advanced { .. } => self.advanced += 1,
            Advance::Unchanged => self.unchanged += 1,
            Advance::UnknownStatus(_) => self.unknown_status += 1,
            Advance::MalformedTimestamp(_) => self.malformed += 1,
        }
    }

    /// Number of entities visited.
    pub fn total(&self) -> usize {
        self.advanced + self.unchanged + self.unknown_status + self.malformed + self.failed
    }
}

/// Advances every entity independently, reading the clock once.
///
/// An entity that cannot be advanced is counted and skipped; it never stops
/// the sweep.
pub fn sweep<'a, T, I, C>(entities: I, progressor: &Progressor<C>) -> SweepReport
where
    T: Tracked + ?Sized + 'a,
    I: IntoIterator<Item = &'a mut T>,
    C: Clock,
{
    sweep_with(entities, progressor, |_| true)
}

/// Like [`sweep`], but hands every advanced entity to `commit`.
///
/// `commit` returns whether the new status was stored. Entities it rejects
/// are counted as [`SweepReport::failed`] instead of advanced.
pub fn sweep_with<'a, T, I, C, F>(
    entities: I,
    progressor: &Progressor<C>,
    mut commit: F,
) -> SweepReport
where
    T: Tracked + ?Sized + 'a,
    I: IntoIterator<Item = &'a mut T>,
    C: Clock,
    F: FnMut(&T) -> bool,
{
    let now = progressor.clock().now();
    let mut report = SweepReport::default();
    for entity in entities {
        let outcome = advance(entity, progressor.flow(), now);
        if outcome.changed() && !commit(&*entity) {
            report.failed += 1;
            continue;
        }
        report.record(&outcome);
    }
    report
}
