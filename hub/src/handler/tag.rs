use std::{
    any::{TypeId, type_name},
    fmt,
    hash::{Hash, Hasher},
};

use crate::handler::Payload;

/// Runtime descriptor of a parameter or value type.
///
/// Equality and hashing only consider the [`TypeId`]; the name is kept for diagnostics.
#[derive(Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// The tag describing `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Get the Rust TypeId.
    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Get the type name, as reported by [`std::any::type_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` for the [`Payload`] tag, which accepts any value.
    #[inline]
    pub fn is_erased(&self) -> bool {
        self.id == TypeId::of::<Payload>()
    }

    /// Returns `true` if a parameter with this tag can receive a value tagged `value`.
    #[inline]
    pub fn accepts(&self, value: &TypeTag) -> bool {
        self.is_erased() || self.id == value.id
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeTag").field(&self.name).finish()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
