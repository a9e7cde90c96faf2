//! Time-driven status progression for tracked entities.
//!
//! A tracked entity (a grocery order, for instance) records when it was
//! created and which status it is in. A [`StatusFlow`] lists the statuses in
//! order, each with the number of seconds after creation at which it is
//! reached. [`advance`] moves an entity to the status it should have by
//! `now`, never backwards.
//!
//! | situation | result |
//! |-----------|--------|
//! | later status is due | status moved forward, [`Advance::Advanced`] |
//! | nothing new is due, or creation time is in the future | [`Advance::Unchanged`] |
//! | current status not in the flow | untouched, [`Advance::UnknownStatus`] |
//! | creation time missing or unreadable | untouched, [`Advance::MalformedTimestamp`] |
//!
//! None of these are errors: `advance` always returns the entity in a valid
//! state and reports what it did. Clock access goes through [`Clock`] so the
//! same code runs against wall-clock time in the worker and fixed time in
//! tests.
//!
//! ```rust,ignore
//! use voxdesk_progress::{Progressor, StatusFlow, SystemClock};
//!
//! let progressor = Progressor::new(StatusFlow::order_delivery(), SystemClock);
//! let outcome = progressor.advance(&mut order);
//! ```

mod clock;
mod error;
mod flow;
mod progress;
mod sweep;
mod timestamp;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{FlowError, TimestampError};
pub use flow::{FlowStep, StatusFlow};
pub use progress::{advance, Advance, Progressor, Tracked, TrackedEntity};
pub use sweep::{sweep, sweep_with, SweepReport};
pub use timestamp::parse_created_at;
