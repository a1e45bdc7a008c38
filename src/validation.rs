use crate::errors::{bail, ErrorKind, Result};
use crate::number::Number;
use crate::range::Range;

/// The `Validate` trait is used to check that a value obeys constraints that cannot be
/// expressed in its type
pub trait Validate {
    /// Validate that the value is valid for use
    ///
    /// # Errors
    ///
    /// Will return `Err` if the value is not valid for this type
    fn validate(&self) -> Result<()>;
}

impl<T: Number> Validate for Range<T> {
    /// A [Range] is valid when no parameter is NaN, `start` and `step` are finite and `step`
    /// is not zero. `stop` may be infinite, which makes an unbounded sequence.
    fn validate(&self) -> Result<()> {
        for (field, value) in [("start", self.start()), ("stop", self.stop()), ("step", self.step())] {
            if value.is_nan() {
                bail!(ErrorKind::NotANumber(field.into()));
            }
        }

        if !self.start().is_finite() {
            bail!(ErrorKind::NotFinite("start".into()));
        }

        if !self.step().is_finite() {
            bail!(ErrorKind::NotFinite("step".into()));
        }

        if self.step() == T::ZERO {
            bail!(ErrorKind::ZeroStep);
        }

        Ok(())
    }
}
