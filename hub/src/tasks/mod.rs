//! Execution of handler invocations.
//!
//! Every invocation launched by a send is one unit of work on its own detached thread, so
//! all handlers of a send run at the same time no matter how many there are.

mod dispatcher;

pub(crate) use dispatcher::Dispatcher;
