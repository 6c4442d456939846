//! Domain logic for the tably reservation board.
//!
//! This crate owns everything about reservation records except their
//! delivery to observers:
//!
//! - [`store`] -- the record store seam and its in-memory implementation
//! - [`register`] -- the status register, the serialized mutation
//!   boundary around "the current latest record"
//! - [`rollover`] -- the daily rollover schedule (when a fresh record
//!   replaces the old one)
//! - [`config`] -- typed YAML configuration for the daemon
//!
//! Fan-out to connected observers lives in `tably-server`; this crate
//! never notifies anyone of anything.

pub mod config;
pub mod register;
pub mod rollover;
pub mod store;

pub use config::{ConfigError, DaemonConfig, HttpConfig, LoggingConfig, RolloverConfig};
pub use register::StatusRegister;
pub use rollover::{RolloverSchedule, ScheduleError};
pub use store::{InMemoryStore, RecordStore};
