//! The event hub: named handler registration and fire-and-forget dispatch.
//!
//! # Overview
//!
//! A [`Hub`] maps event names to an ordered list of handlers. Each handler is a
//! [`Callable`] declaring exactly one parameter:
//!
//! - [`handle()`](Hub::handle) accepts any value and rejects it unless it is a `Callable` of
//!   arity one.
//! - [`register()`](Hub::register) accepts a closure directly and only checks the arity.
//! - [`send()`](Hub::send) wraps the value in a [`Payload`] and launches every handler whose
//!   parameter type accepts it. Handlers of other types are skipped.
//!
//! # Concurrency
//!
//! The handler map is a `DashMap`, so `handle` and `send` may be called from any number of
//! threads through a shared reference. `send` clones the `Arc`ed entry list of the event
//! and releases the map before launching anything, which lets handlers register handlers or
//! send events on the same hub.
//!
//! Launched handlers run concurrently and `send` never waits for them. Callers that need
//! completion build their own signal, for example a channel every handler sends on.
//!
//! # Example
//!
//! ```rust,ignore
//! let hub = Arc::new(Hub::new());
//! let (done, finished) = crossbeam::channel::unbounded();
//!
//! hub.register("saved", move |path: String| {
//!     println!("saved {path}");
//!     done.send(()).unwrap();
//! })?;
//!
//! hub.send("saved", String::from("notes.txt"))?;
//! finished.recv()?;
//! ```

mod config;
mod entry;
mod error;

pub use config::HubConfig;
pub use error::HubError;

use std::{
    any::{Any, type_name},
    sync::Arc,
};

use dashmap::DashMap;

use crate::{
    handler::{Callable, IntoCallable, Payload},
    hub::entry::HandlerEntry,
    tasks::Dispatcher,
};

/// Registry of named event handlers and dispatcher of events to them.
pub struct Hub {
    /// Handlers per event name, in registration order.
    handlers: DashMap<String, Vec<Arc<HandlerEntry>>>,

    /// Launches handler invocations.
    dispatcher: Dispatcher,
}

impl Default for Hub {
    fn default() -> Self {
        Self::new()
    }
}

impl Hub {
    /// Creates an empty hub that runs every handler invocation on its own thread.
    pub fn new() -> Self {
        Self {
            handlers: DashMap::new(),
            dispatcher: Dispatcher::new(HubConfig::DEFAULT_THREAD_NAME),
        }
    }

    /// Creates an empty hub configured by `config`.
    pub fn with_config(config: HubConfig) -> Result<Self, HubError> {
        config.validate()?;
        Ok(Self {
            handlers: DashMap::new(),
            dispatcher: Dispatcher::from_config(&config),
        })
    }

    /// Registers `handler` for `event`.
    ///
    /// `handler` may be any value, but only a [`Callable`] taking exactly one parameter is
    /// accepted. Registering the same callable twice yields two invocations per send.
    ///
    /// # Errors
    ///
    /// - [`HubError::NotCallable`] if `handler` is not a `Callable`.
    /// - [`HubError::Arity`] if it does not take exactly one parameter.
    pub fn handle<H>(&self, event: impl Into<String>, handler: H) -> Result<(), HubError>
    where
        H: Any + Send + Sync,
    {
        let event = event.into();
        let boxed: Box<dyn Any + Send + Sync> = Box::new(handler);
        match boxed.downcast::<Callable>() {
            Ok(callable) => self.insert(event, *callable),
            Err(_) => Err(HubError::NotCallable {
                event,
                type_name: type_name::<H>(),
            }),
        }
    }

    /// Registers a closure or function for `event`.
    ///
    /// # Errors
    ///
    /// [`HubError::Arity`] if it does not take exactly one parameter.
    pub fn register<Params>(
        &self,
        event: impl Into<String>,
        handler: impl IntoCallable<Params>,
    ) -> Result<(), HubError> {
        self.insert(event.into(), handler.into_callable())
    }

    fn insert(&self, event: String, callable: Callable) -> Result<(), HubError> {
        let arity = callable.arity();
        let Some(entry) = HandlerEntry::new(callable) else {
            return Err(HubError::Arity { event, arity });
        };
        log::debug!(
            "registered handler for event '{event}' taking {}",
            entry.param()
        );
        self.handlers
            .entry(event)
            .or_default()
            .push(Arc::new(entry));
        Ok(())
    }

    /// Sends `value` to every handler of `event` whose parameter type accepts it.
    ///
    /// Accepting handlers are launched in registration order and run concurrently; this
    /// returns as soon as all of them have been launched, with the number launched. A
    /// known event whose handlers all take other types returns `Ok(0)`. Handler panics are
    /// caught and logged, never returned.
    ///
    /// # Errors
    ///
    /// - [`HubError::UnknownEvent`] if no handler is registered for `event`.
    /// - [`HubError::Dispatch`] if a handler could not be launched.
    pub fn send<T>(&self, event: &str, value: T) -> Result<usize, HubError>
    where
        T: Any + Send + Sync,
    {
        let entries = self.snapshot(event).ok_or_else(|| HubError::UnknownEvent {
            event: event.to_string(),
        })?;
        let payload = Payload::new(value);
        let name: Arc<str> = Arc::from(event);
        let mut launched = 0;

        for entry in entries {
            if !entry.accepts(&payload.tag()) {
                log::trace!(
                    "skipping handler for event '{event}': takes {}, got {}",
                    entry.param(),
                    payload.type_name()
                );
                continue;
            }

            let name = Arc::clone(&name);
            let payload = payload.clone();
            if let Err(source) = self.dispatcher.dispatch(move || {
                entry.invoke(&name, payload);
            }) {
                log::warn!("failed to launch handler for event '{event}': {source}");
                return Err(HubError::Dispatch {
                    event: event.to_string(),
                    source,
                });
            }
            launched += 1;
        }

        log::trace!("launched {launched} handler(s) for event '{event}'");
        Ok(launched)
    }

    /// Clone the handler list of `event`, releasing the map before returning.
    fn snapshot(&self, event: &str) -> Option<Vec<Arc<HandlerEntry>>> {
        self.handlers
            .get(event)
            .map(|entries| entries.value().clone())
            .filter(|entries| !entries.is_empty())
    }

    /// Number of handlers registered for `event`.
    pub fn handler_count(&self, event: &str) -> usize {
        self.handlers
            .get(event)
            .map_or(0, |entries| entries.value().len())
    }

    /// Returns `true` if at least one handler is registered for `event`.
    pub fn is_handled(&self, event: &str) -> bool {
        self.handler_count(event) > 0
    }

    /// Names of all events with handlers, sorted.
    pub fn events(&self) -> Vec<String> {
        let mut events: Vec<String> = self
            .handlers
            .iter()
            .filter(|entry| !entry.value().is_empty())
            .map(|entry| entry.key().clone())
            .collect();
        events.sort();
        events
    }
}
