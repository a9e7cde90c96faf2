//! Order sweep worker.
//!
//! The grocery agent writes one JSON file per placed order. This worker
//! periodically reads every order file, advances each order along the
//! delivery [`StatusFlow`](voxdesk_progress::StatusFlow) and writes back the
//! ones whose status changed, so an order checked hours later reads as
//! delivered even if nobody asked about it in between.

pub mod background;
pub mod config;
pub mod store;

pub use background::{run_sweep_once, start_sweep_task};
pub use config::{load_config, Config, ConfigError};
pub use store::{OrderStore, StoreError};
