//! Two small algebraic containers and their combinators.
//!
//! [`Maybe`] holds a value or nothing. [`Either`] holds exactly one of two
//! values, with `Right` conventionally carrying success and `Left` carrying
//! the alternate outcome.
//!
//! ```rust
//! use functional_monads::{just, left, right, Either};
//!
//! let n = just(5).bind(|x| just(x + 1)).get_or_else(0);
//! assert_eq!(n, 6);
//!
//! let parsed: Either<String, i32> = right(42);
//! let msg = parsed
//!     .bind_right(|x| if x > 0 { right(x * 2) } else { left("not positive".to_string()) })
//!     .fold(|e| format!("Error: {e}"), |v| format!("Success: {v}"));
//! assert_eq!(msg, "Success: 84");
//! ```

mod either;
mod error;
mod functor;
mod maybe;
mod nullable;

pub use either::{left, right, Either};
pub use error::{Error, Result};
pub use functor::{Compose, Functor, Monad, PartiallyApplied};
pub use maybe::{just, nothing, try_just, Maybe};
pub use nullable::Nullable;
