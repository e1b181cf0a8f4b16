use std::{
    any::{Any, TypeId},
    fmt,
    sync::Arc,
};

use crate::handler::TypeTag;

/// A sent value with its type erased.
///
/// Cloning a payload is cheap: every handler launched by one send shares the same
/// allocation, and typed handlers receive their own clone of the inner value.
///
/// A handler declared with a `Payload` parameter receives the erased value as-is and may
/// inspect it with [`is()`](Self::is) or [`downcast_ref()`](Self::downcast_ref).
#[derive(Clone)]
pub struct Payload {
    value: Arc<dyn Any + Send + Sync>,
    tag: TypeTag,
}

impl Payload {
    /// Wrap a value. Wrapping a `Payload` returns it unchanged rather than nesting it.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        let boxed: Box<dyn Any + Send + Sync> = Box::new(value);
        match boxed.downcast::<Payload>() {
            Ok(payload) => *payload,
            Err(boxed) => Self {
                value: Arc::from(boxed),
                tag: TypeTag::of::<T>(),
            },
        }
    }

    /// The tag of the wrapped value's type.
    #[inline]
    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    /// The wrapped value's type name.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.tag.name()
    }

    /// Returns `true` if the wrapped value is a `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.tag.id() == TypeId::of::<T>()
    }

    /// Borrow the wrapped value as a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.value).downcast_ref::<T>()
    }

    /// Produce an owned `T` for a handler parameter.
    ///
    /// `T` is either the wrapped type, or `Payload` itself for erased parameters.
    pub(crate) fn extract<T: Clone + 'static>(&self) -> Option<T> {
        if let Some(value) = self.downcast_ref::<T>() {
            return Some(value.clone());
        }
        (self as &dyn Any).downcast_ref::<T>().cloned()
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Payload")
            .field("type", &self.tag.name())
            .finish_non_exhaustive()
    }
}
