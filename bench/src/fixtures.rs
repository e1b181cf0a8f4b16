//! Prepared hubs for dispatch benchmarks.

use std::time::{Duration, Instant};

use crossbeam::channel::{Receiver, unbounded};
use rusty_hub::{Hub, HubConfig, HubError};

/// Event every fixture handler is registered under.
pub const EVENT: &str = "bench";

/// Payload sent by the fanout benchmarks.
#[derive(Debug, Clone, Default)]
pub struct Tick {
    pub frame: u64,
    pub delta_micros: u32,
}

/// A hub with `handlers` [`Tick`] handlers that each signal completion.
pub struct FanoutFixture {
    hub: Hub,
    done: Receiver<u64>,
    handlers: usize,
}

impl FanoutFixture {
    pub fn new(handlers: usize, config: HubConfig) -> Result<Self, HubError> {
        let hub = Hub::with_config(config)?;
        let (tx, done) = unbounded();
        for _ in 0..handlers {
            let tx = tx.clone();
            hub.register(EVENT, move |tick: Tick| {
                let _ = tx.send(tick.frame);
            })?;
        }
        Ok(Self {
            hub,
            done,
            handlers,
        })
    }

    pub fn hub(&self) -> &Hub {
        &self.hub
    }

    /// Send one tick and block until every handler has run. Returns the elapsed time, or
    /// `None` if a handler did not report back within `timeout`.
    pub fn send_and_wait(&self, frame: u64, timeout: Duration) -> Option<Duration> {
        let start = Instant::now();
        self.hub
            .send(
                EVENT,
                Tick {
                    frame,
                    delta_micros: 16_667,
                },
            )
            .ok()?;
        for _ in 0..self.handlers {
            self.done.recv_timeout(timeout).ok()?;
        }
        Some(start.elapsed())
    }
}
