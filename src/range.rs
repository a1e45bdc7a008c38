use std::fmt;

use log::{debug, trace};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_derive::{Deserialize, Serialize};
use serde_json::Value;

use crate::cursor::Cursor;
use crate::errors::{bail, Error, ErrorKind, Result};
use crate::number::Number;
use crate::validation::Validate;

/// A [Range] describes the arithmetic sequence `start, start + step, start + 2*step, ...` of
/// all the values that are less than `stop`. If `start >= stop`, or the `step` is negative,
/// the sequence is empty.
///
/// A [Range] is immutable once created. Every call to [Range::lazy] or [Range::iter] returns a
/// new, independent [Cursor] that starts from `start`.
///
/// A [Range] can be deserialized from a positional array, `[stop]`, `[start, stop]` or
/// `[start, stop, step]`, or from a map with optional `start`, `stop` and `step` entries. It is
/// validated in the same way as by [Range::new].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RangeArgs<T>", bound(deserialize = "T: Number + serde::Deserialize<'de>"))]
pub struct Range<T> {
    start: T,
    stop: T,
    step: T,
}

/// The forms a [Range] can be deserialized from
#[derive(Deserialize)]
#[serde(untagged)]
enum RangeArgs<T> {
    Positional(Vec<T>),
    Named {
        start: Option<T>,
        stop: Option<T>,
        step: Option<T>,
    },
}

impl<T: Number> TryFrom<RangeArgs<T>> for Range<T> {
    type Error = Error;

    fn try_from(args: RangeArgs<T>) -> Result<Self> {
        match args {
            RangeArgs::Positional(values) => Range::from_args(&values),
            RangeArgs::Named { start, stop, step } => Range::new(
                start.unwrap_or(T::ZERO),
                stop.unwrap_or(T::ZERO),
                step.unwrap_or(T::ONE),
            ),
        }
    }
}

/// An empty range, `start` and `stop` are both zero
impl<T: Number> Default for Range<T> {
    fn default() -> Self {
        Range::unchecked(T::ZERO, T::ZERO, T::ONE)
    }
}

impl<T: Number> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.step == T::ONE {
            write!(f, "range({}, {})", self.start, self.stop)
        } else {
            write!(f, "range({}, {}, {})", self.start, self.stop, self.step)
        }
    }
}

impl<T: Number> Range<T> {
    pub(crate) fn unchecked(start: T, stop: T, step: T) -> Self {
        Range { start, stop, step }
    }

    /// Create a new [Range] from `start` (inclusive) to `stop` (exclusive) advancing by `step`
    ///
    /// # Errors
    ///
    /// Returns `Err` if `step` is zero, any parameter is NaN, or `start` or `step` is infinite
    pub fn new(start: T, stop: T, step: T) -> Result<Self> {
        let range = Range::unchecked(start, stop, step);
        range.validate()?;

        if step < T::ZERO && start < stop {
            debug!("{} has a negative step and will produce no values", range);
        }
        trace!("Created {}", range);

        Ok(range)
    }

    /// Create a new [Range] from zero up to `stop`, advancing by one
    ///
    /// # Errors
    ///
    /// Returns `Err` if `stop` is NaN
    pub fn from_stop(stop: T) -> Result<Self> {
        Range::new(T::ZERO, stop, T::ONE)
    }

    /// Create a new [Range] from `start` up to `stop`, advancing by one
    ///
    /// # Errors
    ///
    /// Returns `Err` if either parameter is NaN or `start` is infinite
    pub fn from_start_stop(start: T, stop: T) -> Result<Self> {
        Range::new(start, stop, T::ONE)
    }

    /// Create a new [Range] from positional arguments, interpreted by how many there are:
    ///
    /// | Arguments                | Range                       |
    /// |--------------------------|-----------------------------|
    /// | `[]`                     | empty, as [Range::default]  |
    /// | `[stop]`                 | [Range::from_stop]          |
    /// | `[start, stop]`          | [Range::from_start_stop]    |
    /// | `[start, stop, step]`    | [Range::new]                |
    ///
    /// # Errors
    ///
    /// Returns `Err` if more than three arguments are supplied or the range does not validate
    pub fn from_args(args: &[T]) -> Result<Self> {
        match *args {
            [] => Ok(Range::default()),
            [stop] => Range::from_stop(stop),
            [start, stop] => Range::from_start_stop(start, stop),
            [start, stop, step] => Range::new(start, stop, step),
            _ => bail!(ErrorKind::TooManyArguments(args.len())),
        }
    }

    /// Create a [Range] from a JSON value, in any of the forms it can be deserialized from
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value cannot be deserialized or the range does not validate
    pub fn from_json(value: Value) -> Result<Self>
    where
        T: DeserializeOwned,
    {
        Ok(serde_json::from_value(value)?)
    }

    /// The first value of the sequence (if it is not empty)
    pub fn start(&self) -> T {
        self.start
    }

    /// The exclusive upper bound of the sequence
    pub fn stop(&self) -> T {
        self.stop
    }

    /// The difference between consecutive values
    pub fn step(&self) -> T {
        self.step
    }

    /// The length `(stop - start) / step` as a `f64`.
    ///
    /// This is not rounded, so it is fractional when `step` does not evenly divide the span,
    /// and negative when `start > stop`. Use [Range::len] for the number of values produced.
    pub fn length(&self) -> f64 {
        (self.stop.to_f64() - self.start.to_f64()) / self.step.to_f64()
    }

    /// The number of values in the sequence, or `None` if it is unbounded (or for integer
    /// ranges, too long to count in a `usize`)
    pub fn len(&self) -> Option<usize> {
        T::steps(self.start, self.stop, self.step)
    }

    /// Return `true` if the sequence produces no values
    pub fn is_empty(&self) -> bool {
        !(self.start < self.stop) || self.step < T::ZERO
    }

    /// Return `true` if the sequence never ends, as `stop` is infinite
    pub fn is_unbounded(&self) -> bool {
        !self.is_empty() && !self.stop.is_finite()
    }

    /// Return `true` if `value` is one of the values of the sequence
    pub fn contains(&self, value: T) -> bool {
        !self.is_empty()
            && value >= self.start
            && value < self.stop
            && T::on_step(self.start, self.step, value)
    }

    /// Return a new [Cursor] that can be advanced one value at a time. This is the way to
    /// consume an unbounded sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqrange::Range;
    ///
    /// let mut cursor = Range::from_stop(2).expect("Could not create range").lazy();
    /// assert_eq!(cursor.next(), Some(0));
    /// assert_eq!(cursor.next(), Some(1));
    /// assert_eq!(cursor.next(), None);
    /// assert!(cursor.is_exhausted());
    /// ```
    pub fn lazy(&self) -> Cursor<T> {
        Cursor::new(self)
    }

    /// Return a new iterator over the values of the sequence
    pub fn iter(&self) -> Cursor<T> {
        self.lazy()
    }

    fn bounded(&self) -> Result<()> {
        if self.is_unbounded() {
            bail!(ErrorKind::Unbounded(self.to_string()));
        }

        Ok(())
    }

    /// Collect all the values of the sequence, in order, into a `Vec`
    ///
    /// # Errors
    ///
    /// Returns `Err` if the sequence is unbounded
    pub fn to_vec(&self) -> Result<Vec<T>> {
        self.bounded()?;
        Ok(self.lazy().collect())
    }

    /// Apply `transform` to every value of the sequence, in order, and collect the results.
    ///
    /// `transform` is called with the value, its index in the sequence and this [Range].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the sequence is unbounded
    pub fn map<U, F>(&self, mut transform: F) -> Result<Vec<U>>
    where
        F: FnMut(T, usize, &Self) -> U,
    {
        self.bounded()?;
        Ok(self
            .lazy()
            .enumerate()
            .map(|(index, value)| transform(value, index, self))
            .collect())
    }

    /// Collect the values of the sequence for which `predicate` returns `true`, in order.
    ///
    /// `predicate` is called with the value, its index in the sequence and this [Range].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the sequence is unbounded
    pub fn filter<F>(&self, mut predicate: F) -> Result<Vec<T>>
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        self.bounded()?;
        Ok(self
            .lazy()
            .enumerate()
            .filter(|(index, value)| predicate(value, *index, self))
            .map(|(_, value)| value)
            .collect())
    }

    /// Split the sequence into a bottom and a top [Range] that together produce the same values.
    /// The split is made at the value with index `len / 2`, which starts the top range.
    ///
    /// Returns `None` if the sequence has fewer than two values or is unbounded.
    pub fn split(&self) -> Option<(Self, Self)> {
        let count = self.len()?;
        if count < 2 {
            return None;
        }

        let middle = self.start.offset(self.step, count / 2)?;
        Some((
            Range::unchecked(self.start, middle, self.step),
            Range::unchecked(middle, self.stop, self.step),
        ))
    }

    /// Collect the values of the sequence into a JSON array
    ///
    /// # Errors
    ///
    /// Returns `Err` if the sequence is unbounded or a value cannot be represented in JSON
    pub fn to_json(&self) -> Result<Value>
    where
        T: Serialize,
    {
        Ok(serde_json::to_value(self.to_vec()?)?)
    }
}

impl<'a, T: Number> IntoIterator for &'a Range<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.lazy()
    }
}

impl<T: Number> IntoIterator for Range<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.lazy()
    }
}
