use std::{io, thread};

use crate::hub::HubConfig;

/// Launches units of work without waiting for them.
pub(crate) struct Dispatcher {
    /// Name given to every spawned thread.
    name: String,
}

impl Dispatcher {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Build the dispatcher described by a (validated) config.
    pub(crate) fn from_config(config: &HubConfig) -> Self {
        Self::new(config.thread_name.clone())
    }

    /// Start `work` on a new detached thread and return immediately.
    pub(crate) fn dispatch<F>(&self, work: F) -> io::Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        thread::Builder::new()
            .name(self.name.clone())
            .spawn(work)
            .map(drop)
    }
}
