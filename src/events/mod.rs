//! Dispatchable events: the capability contract and a concrete record.
//!
//! ## Contents
//! - [`Event`] trait the dispatcher routes on (`name`, `payload`, `timestamp`)
//! - [`EventRecord`] ready-made event with a typed payload and sequence number

mod event;

pub use event::{Event, EventRecord};
