//! History backend implementations.
//!
//! A backend is a pluggable storage strategy for the attribute/interval
//! history, selected by the owning state-system engine. Every backend
//! satisfies the same [`StateHistoryBackend`] contract, so the engine stays
//! backend-agnostic: the in-memory store keeps full query capability, the
//! null backend drops everything for forward-only state tracking, and a
//! disk-backed backend (out of scope here) can slot in behind the same trait.

mod in_memory;
mod null;

pub use in_memory::InMemoryBackend;
pub use null::NullBackend;

use crate::error::Result;
use crate::types::{Interval, Quark, RangeCondition, StateValue, Time};

/// The contract between the state-system engine and its history storage.
///
/// All methods take `&self`; implementations that hold mutable state guard it
/// internally so one writer and any number of readers can share a backend
/// across threads.
pub trait StateHistoryBackend: Send + Sync {
    /// The state-system id this backend belongs to, used in diagnostics.
    fn ssid(&self) -> &str;

    /// Start time of the history.
    fn start_time(&self) -> Time;

    /// Current end time of the history (its high-water mark).
    fn end_time(&self) -> Time;

    /// Insert a past-state interval `[start, end]` for `attribute`.
    ///
    /// Fails with [`HistoryError::IntervalOutOfRange`] if `start > end` or
    /// `start` lies before the history's start time.
    ///
    /// [`HistoryError::IntervalOutOfRange`]: crate::HistoryError::IntervalOutOfRange
    fn insert(&self, start: Time, end: Time, attribute: Quark, value: StateValue) -> Result<()>;

    /// Fill `out` with, for each attribute that has one, the interval
    /// covering time `t`. Slot `out[q]` receives attribute `q`'s interval;
    /// slots for attributes with no coverage at `t` are left untouched, so
    /// callers must treat an untouched slot as "no data".
    ///
    /// Fails with [`HistoryError::TimeOutOfRange`] if `t` lies outside
    /// `[start_time, end_time]`.
    ///
    /// [`HistoryError::TimeOutOfRange`]: crate::HistoryError::TimeOutOfRange
    fn query(&self, out: &mut [Option<Interval>], t: Time) -> Result<()>;

    /// The interval covering time `t` for a single attribute, or `None` if
    /// the attribute has no coverage there. Same bounds check as [`query`].
    ///
    /// [`query`]: StateHistoryBackend::query
    fn query_single(&self, t: Time, attribute: Quark) -> Result<Option<Interval>>;

    /// All intervals whose attribute falls in `quarks` and whose `[start,
    /// end]` intersects `[times.min(), times.max()]`.
    ///
    /// The result is a finite, single-pass snapshot taken at call time; a
    /// concurrent insert after the call does not appear in it. Iteration
    /// order follows the store's internal (end, attribute) order, which is
    /// not start-time order. An out-of-range query yields an empty sequence,
    /// never an error.
    fn query_2d(
        &self,
        quarks: RangeCondition<Quark>,
        times: RangeCondition<Time>,
    ) -> Box<dyn Iterator<Item = Interval> + Send>;

    /// Signal that history building is done and `end_time` is final.
    fn finished_building(&self, end_time: Time);

    /// Release the backend's resources. No interval survives disposal.
    fn dispose(&self);

    /// Whether this backend can persist its history and read it back later.
    /// Callers needing persistence must probe this and pick a disk-backed
    /// backend when it returns `false`.
    fn supports_read_back(&self) -> bool {
        false
    }
}
