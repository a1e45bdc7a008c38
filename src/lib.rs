#![deny(missing_docs)]
#![warn(clippy::unwrap_used)]

//! `seqrange` generates arithmetic sequences of numbers that work like the `range` included in
//! Python 3. A [Range] is described by either:
//! - a single number representing the stop value (implicitly starting at 0)
//! - two numbers representing the start and stop values
//! - three numbers representing the start, stop and step values
//!
//! The sequence can be iterated lazily (each iteration starts over from `start`), collected into
//! a `Vec`, or transformed eagerly with `map` and `filter`.
//!
//! # Examples
//!
//! ```
//! use seqrange::Range;
//!
//! let tens = Range::new(0, 50, 10).expect("Could not create range");
//! assert_eq!(tens.to_vec().expect("Could not collect range"), vec![0, 10, 20, 30, 40]);
//!
//! // The same range can be iterated any number of times
//! let sum: i32 = tens.iter().sum();
//! assert_eq!(sum, 100);
//!
//! // Using `lazy` to consume an infinite sequence
//! let mut naturals = Range::from_stop(f64::INFINITY).expect("Could not create range").lazy();
//! assert_eq!(naturals.next(), Some(0.0));
//! assert_eq!(naturals.next(), Some(1.0));
//! assert_eq!(naturals.next(), Some(2.0));
//! ```

/// We'll put our errors in an `errors` module, and other modules in this crate will `use errors::*;`
/// to get access to everything `error_chain` creates.
pub mod errors;

/// `number` defines the numeric types a [Range] can produce
pub mod number;

/// `validation` defines the checks applied to a [Range] when it is constructed
pub mod validation;

/// `range` defines the [Range] sequence descriptor and its eager operations
pub mod range;

/// `cursor` defines the lazy [Cursor] that walks a [Range] one value at a time
pub mod cursor;

pub use crate::cursor::Cursor;
pub use crate::number::Number;
pub use crate::range::Range;
