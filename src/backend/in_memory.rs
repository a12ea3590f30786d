//! Volatile in-memory history backend.

use crate::backend::StateHistoryBackend;
use crate::error::{HistoryError, Result};
use crate::types::{Interval, Quark, RangeCondition, StateValue, Time};
use parking_lot::Mutex;
use tracing::{debug, trace};

/// Mutable store state, guarded as a unit so `latest_time` can never be
/// observed ahead of the interval that set it.
struct Inner {
    /// Intervals sorted by (end, attribute). Duplicates are kept.
    intervals: Vec<Interval>,

    /// High-water mark: the largest end time ever inserted, or the history
    /// start while the store is empty. Only ever advances.
    latest_time: Time,
}

/// History backend that keeps the whole interval history in memory.
///
/// Intervals live in a vector sorted by (end time, attribute), maintained by
/// binary insertion. History building is append-heavy and near-sorted by end
/// time, so insertions land at or near the tail, and every point query
/// reduces to one binary search plus a short forward walk.
///
/// Memory use grows without bound with the number of inserted intervals, so
/// this backend is only suitable for small histories; larger ones belong in a
/// disk-backed backend.
pub struct InMemoryBackend {
    ssid: String,
    start_time: Time,
    inner: Mutex<Inner>,
}

impl InMemoryBackend {
    /// Create an empty history starting at `start_time`.
    pub fn new(ssid: impl Into<String>, start_time: Time) -> Self {
        Self {
            ssid: ssid.into(),
            start_time,
            inner: Mutex::new(Inner {
                intervals: Vec::new(),
                latest_time: start_time,
            }),
        }
    }

    /// Number of intervals currently stored.
    pub fn count(&self) -> usize {
        self.inner.lock().intervals.len()
    }

    /// Index of the first stored interval with `end >= t`.
    ///
    /// Everything before this index ended strictly before `t` and cannot
    /// cover it; everything at or after it is a candidate.
    fn search_from(intervals: &[Interval], t: Time) -> usize {
        intervals.partition_point(|iv| iv.end < t)
    }

    fn check_query_time(&self, t: Time, latest: Time) -> Result<()> {
        if t < self.start_time || t > latest {
            return Err(HistoryError::TimeOutOfRange {
                ssid: self.ssid.clone(),
                time: t,
                start: self.start_time,
                end: latest,
            });
        }
        Ok(())
    }
}

impl StateHistoryBackend for InMemoryBackend {
    fn ssid(&self) -> &str {
        &self.ssid
    }

    fn start_time(&self) -> Time {
        self.start_time
    }

    fn end_time(&self) -> Time {
        self.inner.lock().latest_time
    }

    fn insert(&self, start: Time, end: Time, attribute: Quark, value: StateValue) -> Result<()> {
        if start > end || start < self.start_time {
            return Err(HistoryError::IntervalOutOfRange {
                ssid: self.ssid.clone(),
                start,
                end,
                history_start: self.start_time,
            });
        }

        trace!(start, end, attribute, "inserting interval");

        let interval = Interval::new(start, end, attribute, value);
        let mut inner = self.inner.lock();

        // Equal keys insert after existing entries, so near-sorted input
        // degenerates to a push at the tail.
        let pos = inner
            .intervals
            .partition_point(|iv| iv.sort_key() <= interval.sort_key());
        inner.intervals.insert(pos, interval);

        if end > inner.latest_time {
            inner.latest_time = end;
        }

        Ok(())
    }

    fn query(&self, out: &mut [Option<Interval>], t: Time) -> Result<()> {
        let inner = self.inner.lock();
        self.check_query_time(t, inner.latest_time)?;

        let mut remaining = out.iter().filter(|slot| slot.is_none()).count();

        // Walk the tail of end-time order: the first candidate seen for an
        // attribute is its covering interval closest to t from above.
        for iv in &inner.intervals[Self::search_from(&inner.intervals, t)..] {
            if remaining == 0 {
                break;
            }
            if iv.start > t {
                continue;
            }
            if let Some(slot) = out.get_mut(iv.attribute) {
                if slot.is_none() {
                    *slot = Some(iv.clone());
                    remaining -= 1;
                }
            }
        }

        Ok(())
    }

    fn query_single(&self, t: Time, attribute: Quark) -> Result<Option<Interval>> {
        let inner = self.inner.lock();
        self.check_query_time(t, inner.latest_time)?;

        let found = inner.intervals[Self::search_from(&inner.intervals, t)..]
            .iter()
            .find(|iv| iv.attribute == attribute && iv.start <= t)
            .cloned();

        Ok(found)
    }

    fn query_2d(
        &self,
        quarks: RangeCondition<Quark>,
        times: RangeCondition<Time>,
    ) -> Box<dyn Iterator<Item = Interval> + Send> {
        let inner = self.inner.lock();

        // Lower bound on the sort key: nothing before (times.min, quarks.min)
        // can both intersect the time range and carry an in-range quark.
        let from = inner
            .intervals
            .partition_point(|iv| iv.sort_key() < (times.min(), quarks.min()));

        // Snapshot under the lock; streaming an unlocked view would race
        // concurrent inserts into the backing vector.
        let matches: Vec<Interval> = inner.intervals[from..]
            .iter()
            .filter(|iv| quarks.contains(iv.attribute) && iv.intersects(times.min(), times.max()))
            .cloned()
            .collect();

        Box::new(matches.into_iter())
    }

    fn finished_building(&self, _end_time: Time) {
        // Nothing to flush; the store already holds its final state.
    }

    fn dispose(&self) {
        let mut inner = self.inner.lock();
        debug!(
            ssid = %self.ssid,
            intervals = inner.intervals.len(),
            "disposing in-memory history"
        );
        inner.intervals.clear();
    }
}
