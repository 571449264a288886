//! Dispatcher core: registry, fan-out and join.
//!
//! The public API from this module is [`Dispatcher`] plus the pieces it is
//! configured and joined with.
//!
//! Internal modules:
//! - [`dispatcher`]: name-keyed registry and fan-out dispatch;
//! - [`builder`]: dispatcher construction with initial registrations;
//! - [`config`]: dispatcher settings;
//! - [`wait_group`]: counting completion barrier handed to handlers.

mod builder;
mod config;
mod dispatcher;
mod wait_group;

pub use builder::DispatcherBuilder;
pub use config::Config;
pub use dispatcher::Dispatcher;
pub use wait_group::{Done, WaitGroup};
