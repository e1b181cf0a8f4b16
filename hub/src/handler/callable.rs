//! Type-erased function values.
//!
//! [`IntoCallable`] is implemented for every `Fn` with 0 to 26 parameters whose parameter
//! types are `Clone + Send + Sync + 'static`. The conversion records a [`TypeTag`] per
//! parameter, so the arity and parameter types of a handler are known at runtime without
//! calling it.
//!
//! ```rust,ignore
//! let handler = callable(|name: String, times: u32| { /* ... */ });
//! assert_eq!(handler.arity(), 2);
//! assert_eq!(handler.params()[1], TypeTag::of::<u32>());
//! ```

use std::{fmt, iter::Enumerate, slice, sync::Arc};

use crate::{
    all_tuples,
    handler::{Payload, TypeTag},
};

type Invoker = dyn Fn(&[Payload]) -> Result<(), CallError> + Send + Sync;

/// A function of any arity with its parameter types recorded.
#[derive(Clone)]
pub struct Callable {
    params: Arc<[TypeTag]>,
    invoker: Arc<Invoker>,
}

impl Callable {
    /// Build a callable from a closure or function.
    pub fn new<Params>(f: impl IntoCallable<Params>) -> Self {
        f.into_callable()
    }

    /// Build a callable from a parameter list and an invoker that trusts the arguments it is
    /// given to match that list.
    fn from_parts<F>(params: Vec<TypeTag>, invoker: F) -> Self
    where
        F: Fn(&[Payload]) -> Result<(), CallError> + Send + Sync + 'static,
    {
        Self {
            params: params.into(),
            invoker: Arc::new(invoker),
        }
    }

    /// Number of declared parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Declared parameter types, in order.
    #[inline]
    pub fn params(&self) -> &[TypeTag] {
        &self.params
    }

    /// Call the function with erased arguments.
    ///
    /// Every argument must be assignable to the parameter at the same position.
    pub fn call(&self, args: &[Payload]) -> Result<(), CallError> {
        if args.len() != self.params.len() {
            return Err(CallError::Arity {
                expected: self.params.len(),
                got: args.len(),
            });
        }
        for (index, (param, arg)) in self.params.iter().zip(args).enumerate() {
            if !param.accepts(&arg.tag()) {
                return Err(CallError::Type {
                    index,
                    expected: param.name(),
                    got: arg.type_name(),
                });
            }
        }
        (self.invoker)(args)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Shorthand for [`Callable::new`].
pub fn callable<Params>(f: impl IntoCallable<Params>) -> Callable {
    f.into_callable()
}

/// Conversion of functions into [`Callable`]s.
///
/// `Params` is a marker tuple of the parameter types. It keeps the implementations for
/// different arities apart and is inferred from the closure signature, so parameter types
/// must be annotated: `|count: u32| ...`.
pub trait IntoCallable<Params>: Send + Sync + 'static {
    /// Erase the function, recording its parameter types.
    fn into_callable(self) -> Callable;
}

impl IntoCallable<Callable> for Callable {
    fn into_callable(self) -> Callable {
        self
    }
}

impl<Func> IntoCallable<()> for Func
where
    Func: Fn() + Send + Sync + 'static,
{
    fn into_callable(self) -> Callable {
        Callable::from_parts(Vec::new(), move |_args: &[Payload]| {
            self();
            Ok(())
        })
    }
}

/// Pull the next argument out of the list as a `T`.
fn next_argument<T: Clone + 'static>(
    args: &mut Enumerate<slice::Iter<'_, Payload>>,
    expected: usize,
    got: usize,
) -> Result<T, CallError> {
    let (index, payload) = args.next().ok_or(CallError::Arity { expected, got })?;
    payload.extract::<T>().ok_or(CallError::Type {
        index,
        expected: std::any::type_name::<T>(),
        got: payload.type_name(),
    })
}

macro_rules! callable_function {
    ($($param:ident),*) => {
        impl<Func, $($param),*> IntoCallable<($($param,)*)> for Func
        where
            Func: Fn($($param),*) + Send + Sync + 'static,
            $($param: Clone + Send + Sync + 'static,)*
        {
            fn into_callable(self) -> Callable {
                let params = vec![$(TypeTag::of::<$param>()),*];
                let expected = params.len();
                Callable::from_parts(params, move |args: &[Payload]| {
                    let got = args.len();
                    let mut args = args.iter().enumerate();
                    $(
                        #[allow(non_snake_case)]
                        let $param = next_argument::<$param>(&mut args, expected, got)?;
                    )*
                    self($($param),*);
                    Ok(())
                })
            }
        }
    };
}

all_tuples!(callable_function);

/// Failure to call a [`Callable`] with a given argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    /// The argument count differs from the declared parameter count.
    Arity { expected: usize, got: usize },
    /// An argument is not assignable to its parameter.
    Type {
        index: usize,
        expected: &'static str,
        got: &'static str,
    },
}

impl fmt::Display for CallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallError::Arity { expected, got } => {
                write!(f, "expected {expected} argument(s), got {got}")
            }
            CallError::Type {
                index,
                expected,
                got,
            } => write!(
                f,
                "argument {index} has type {got}, parameter expects {expected}"
            ),
        }
    }
}

impl std::error::Error for CallError {}
