use std::{error, fmt, io};

/// Errors returned by [`Hub`](crate::Hub) operations.
///
/// Only misuse of the registration and dispatch API is reported here. A handler's own
/// failure happens after [`send`](crate::Hub::send) has returned and is logged instead.
#[derive(Debug)]
pub enum HubError {
    /// `handle` was given a value that is not a [`Callable`](crate::Callable).
    NotCallable {
        event: String,
        type_name: &'static str,
    },
    /// The handler does not declare exactly one parameter.
    Arity { event: String, arity: usize },
    /// No handler is registered under the event name.
    UnknownEvent { event: String },
    /// A handler invocation could not be launched. Handlers launched before it keep running.
    Dispatch { event: String, source: io::Error },
    /// The hub configuration is invalid.
    Config { reason: String },
}

impl fmt::Display for HubError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HubError::NotCallable { event, type_name } => write!(
                f,
                "handler for event '{event}' is not callable: got a value of type {type_name} \
                 (wrap closures with `callable(..)` or pass them to `Hub::register`)"
            ),
            HubError::Arity { event, arity } => write!(
                f,
                "handler for event '{event}' must take exactly one parameter, it takes {arity}"
            ),
            HubError::UnknownEvent { event } => {
                write!(f, "no handlers registered for event '{event}'")
            }
            HubError::Dispatch { event, source } => {
                write!(f, "failed to dispatch event '{event}': {source}")
            }
            HubError::Config { reason } => write!(f, "invalid hub configuration: {reason}"),
        }
    }
}

impl error::Error for HubError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            HubError::Dispatch { source, .. } => Some(source),
            _ => None,
        }
    }
}
