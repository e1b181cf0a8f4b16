use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    slice,
};

use crate::handler::{Callable, Payload, TypeTag};

/// A registered handler: a one-parameter callable and that parameter's type.
pub(crate) struct HandlerEntry {
    callable: Callable,
    param: TypeTag,
}

impl HandlerEntry {
    /// Wrap `callable`, or return `None` unless it takes exactly one parameter.
    pub(crate) fn new(callable: Callable) -> Option<Self> {
        let [param] = callable.params() else {
            return None;
        };
        let param = *param;
        Some(Self { callable, param })
    }

    #[inline]
    pub(crate) fn param(&self) -> TypeTag {
        self.param
    }

    #[inline]
    pub(crate) fn accepts(&self, value: &TypeTag) -> bool {
        self.param.accepts(value)
    }

    /// Run the handler, containing any panic. Returns `false` if the handler failed.
    pub(crate) fn invoke(&self, event: &str, payload: Payload) -> bool {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            self.callable.call(slice::from_ref(&payload))
        }));
        match result {
            Ok(Ok(())) => true,
            Ok(Err(err)) => {
                log::error!("handler for event '{event}' rejected its argument: {err}");
                false
            }
            Err(panic) => {
                log::error!(
                    "handler for event '{event}' panicked: {}",
                    panic_message(panic.as_ref())
                );
                false
            }
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}
