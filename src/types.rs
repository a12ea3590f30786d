//! Core types for the state-history backends.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the trace timebase (typically nanoseconds since trace start).
pub type Time = i64;

/// Attribute identifier ("quark"), assigned by an external attribute
/// registry. Doubles as the index into query slot buffers, so it is
/// non-negative by construction.
pub type Quark = usize;

/// Opaque payload carried by an interval.
///
/// Storage never inspects the value beyond cloning it; the variants mirror
/// the state-value types the upstream state system produces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StateValue {
    Null,
    Int(i32),
    Long(i64),
    Double(f64),
    Str(String),
}

impl StateValue {
    /// Whether this is the null value.
    pub fn is_null(&self) -> bool {
        matches!(self, StateValue::Null)
    }
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateValue::Null => write!(f, "null"),
            StateValue::Int(v) => write!(f, "{}", v),
            StateValue::Long(v) => write!(f, "{}", v),
            StateValue::Double(v) => write!(f, "{}", v),
            StateValue::Str(v) => write!(f, "{}", v),
        }
    }
}

impl From<i32> for StateValue {
    fn from(v: i32) -> Self {
        StateValue::Int(v)
    }
}

impl From<i64> for StateValue {
    fn from(v: i64) -> Self {
        StateValue::Long(v)
    }
}

impl From<f64> for StateValue {
    fn from(v: f64) -> Self {
        StateValue::Double(v)
    }
}

impl From<&str> for StateValue {
    fn from(v: &str) -> Self {
        StateValue::Str(v.to_string())
    }
}

/// A closed time range `[start, end]` during which one attribute held one
/// value.
///
/// Intervals are immutable once inserted; `start <= end` is enforced at
/// insertion time by the owning backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Start of the range (inclusive).
    pub start: Time,

    /// End of the range (inclusive).
    pub end: Time,

    /// The attribute this interval belongs to.
    pub attribute: Quark,

    /// The value the attribute held over `[start, end]`.
    pub value: StateValue,
}

impl Interval {
    /// Create a new interval.
    pub fn new(start: Time, end: Time, attribute: Quark, value: StateValue) -> Self {
        Self {
            start,
            end,
            attribute,
            value,
        }
    }

    /// Whether `t` falls inside `[start, end]`.
    pub fn contains(&self, t: Time) -> bool {
        self.start <= t && t <= self.end
    }

    /// Whether this interval intersects the closed range `[min, max]`.
    pub fn intersects(&self, min: Time, max: Time) -> bool {
        self.start <= max && self.end >= min
    }

    /// The storage ordering key: end time primary, attribute as tie-break.
    ///
    /// Two attributes may close intervals at the identical timestamp, so the
    /// end time alone is not a unique position in the store.
    pub(crate) fn sort_key(&self) -> (Time, Quark) {
        (self.end, self.attribute)
    }
}

/// An inclusive `[min, max]` bound used to filter 2D queries, over either
/// quarks or times.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeCondition<T> {
    min: T,
    max: T,
}

impl<T: Copy + Ord> RangeCondition<T> {
    /// Bound covering `[min, max]`. Returns `None` if `min > max`.
    pub fn new(min: T, max: T) -> Option<Self> {
        if min <= max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Bound covering the single element `value`.
    pub fn singleton(value: T) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> T {
        self.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> T {
        self.max
    }

    /// Whether `value` falls inside the bound.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}
