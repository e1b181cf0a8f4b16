//! Log sinks for hosts and tests.
//!
//! The hub only talks to the `log` facade. [`ChannelLogger`] is a `log::Log` that forwards
//! records over a crossbeam channel, so the diagnostics of handlers running on other threads
//! (caught panics in particular) can be observed and asserted on.

mod channel;

pub use channel::{ChannelLogger, LogRecord};
