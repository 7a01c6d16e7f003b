//! Function-composition pipelining.
//!
//! A pipeline threads a value through an ordered list of unary functions, left
//! to right, so that `pipe(v, [f, g, h])` is `h(g(f(v)))`. Three flavours are
//! provided:
//!
//! - [`pipe`] and [`try_pipe`] for lists of same-type transformations (`T -> T`),
//!   the plain and the fallible form.
//! - [`Pipeline`], an owned and reusable list of stages.
//! - The [`pipe!`](crate::pipe!) macro for chains where each function may change
//!   the type of the value. Mismatched stages are rejected at compile time.

use std::fmt;

/// Apply each function in `funcs` to the output of the previous one, starting
/// from `value`.
///
/// An empty list of functions returns `value` unchanged.
///
/// # Examples
///
/// ```
/// # use fx_lib::pipe;
/// let funcs: [fn(i32) -> i32; 2] = [|x| x + 1, |x| x * 10];
/// assert_eq!(pipe(4, funcs), 50);
/// ```
pub fn pipe<T, F, I>(value: T, funcs: I) -> T
where
    I: IntoIterator<Item = F>,
    F: FnOnce(T) -> T,
{
    funcs.into_iter().fold(value, |current, func| func(current))
}

/// Fallible form of [`pipe`].
///
/// Stops at the first function returning `Err` and hands that error back to
/// the caller as-is. Functions after the failing one are not invoked.
///
/// # Errors
///
/// Returns the first error produced by any of the supplied functions.
pub fn try_pipe<T, E, F, I>(value: T, funcs: I) -> Result<T, E>
where
    I: IntoIterator<Item = F>,
    F: FnOnce(T) -> Result<T, E>,
{
    funcs.into_iter().try_fold(value, |current, func| func(current))
}

/// Thread a value through a chain of functions that may each change its type.
///
/// `pipe!(v, f, g, h)` expands to `h(g(f(v)))`; `pipe!(v)` is `v`.
///
/// ```
/// # use fx_lib::pipe;
/// let len = pipe!("  hello ", str::trim, str::len, |n: usize| n * 2);
/// assert_eq!(len, 10);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $($func:expr),+ $(,)?) => {{
        let value = $value;
        $(
            let value = ($func)(value);
        )+
        value
    }};
}

type Stage<T> = Box<dyn Fn(T) -> T + Send + Sync>;

/// An owned, reusable sequence of `T -> T` stages.
///
/// Stages run in the order they were added. Applying an empty pipeline is the
/// identity.
pub struct Pipeline<T> {
    stages: Vec<Stage<T>>,
}

impl<T> Pipeline<T> {
    /// Create an empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage to the end of the pipeline.
    #[must_use]
    pub fn then<F>(mut self, func: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.stages.push(Box::new(func));
        self
    }

    /// Number of stages in the pipeline.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run `value` through every stage.
    pub fn apply(&self, value: T) -> T {
        pipe(value, self.stages.iter())
    }
}

impl<T> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}
