//! In-process event hub.
//!
//! A [`Hub`] maps event names to handlers. Handlers are type-erased [`Callable`]s that
//! declare exactly one parameter; [`Hub::send`] launches every handler whose parameter type
//! accepts the sent value as an independent unit of work and returns without waiting.
//!
//! ```rust,ignore
//! use rusty_hub::{Hub, callable};
//!
//! let hub = Hub::new();
//! hub.handle("greet", callable(|name: String| println!("hello {name}")))?;
//! hub.send("greet", String::from("world"))?;
//! ```

pub mod handler;
pub mod hub;
pub mod logging;
pub mod tasks;
pub(crate) mod util;

pub use handler::{CallError, Callable, IntoCallable, Payload, TypeTag, callable};
pub use hub::{Hub, HubConfig, HubError};
