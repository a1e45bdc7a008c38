use std::iter::FusedIterator;

use crate::number::Number;
use crate::range::Range;

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Ready(usize),
    Exhausted,
}

/// A [Cursor] walks the values of a [Range] one at a time, doing no work until it is advanced
/// with `next()`.
///
/// `next()` returns `Some(value)` while the sequence has values, and `None` once it is
/// exhausted. Exhaustion is final: every later call also returns `None`. A cursor over an
/// unbounded [Range] is never exhausted.
///
/// The k-th value is calculated as `start + step * k`, so float sequences do not drift from
/// the values counted by [Range::len].
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    state: State,
    start: T,
    stop: T,
    step: T,
    last: Option<T>,
}

impl<T: Number> Cursor<T> {
    pub(crate) fn new(range: &Range<T>) -> Self {
        let state = if range.is_empty() {
            State::Exhausted
        } else {
            State::Ready(0)
        };

        Cursor {
            state,
            start: range.start(),
            stop: range.stop(),
            step: range.step(),
            last: None,
        }
    }

    /// Return `true` once the cursor has produced its last value and been advanced past it
    pub fn is_exhausted(&self) -> bool {
        self.state == State::Exhausted
    }
}

impl<T: Number> Iterator for Cursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let State::Ready(index) = self.state {
            if let Some(value) = self.start.offset(self.step, index) {
                // a float step below the precision of the value makes no progress
                let progressed = self.last.map_or(true, |last| value > last);
                if value < self.stop && progressed {
                    self.state = index.checked_add(1).map_or(State::Exhausted, State::Ready);
                    self.last = Some(value);
                    return Some(value);
                }
            }
        }

        self.state = State::Exhausted;
        None
    }
}

impl<T: Number> FusedIterator for Cursor<T> {}
