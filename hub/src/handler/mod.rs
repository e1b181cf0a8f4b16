//! Type-erased handlers and the values passed to them.
//!
//! Rust closures carry their parameter types statically, but a hub stores handlers for many
//! payload types under one name. This module erases both sides:
//!
//! - [`Callable`] wraps a function of any arity together with a [`TypeTag`] per declared
//!   parameter. It is built from a closure via [`IntoCallable`] (or [`callable()`]).
//! - [`Payload`] wraps a sent value together with its [`TypeTag`].
//!
//! Assignability is a tag comparison: a parameter accepts a payload when both tags name the
//! same type, or when the parameter itself is declared as [`Payload`], which accepts values
//! of any type.

mod callable;
mod payload;
mod tag;

pub use callable::{CallError, Callable, IntoCallable, callable};
pub use payload::Payload;
pub use tag::TypeTag;
