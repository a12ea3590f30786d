//! History backend that discards everything it receives.

use crate::backend::StateHistoryBackend;
use crate::error::Result;
use crate::types::{Interval, Quark, RangeCondition, StateValue, Time};

/// Backend for state systems that only track current state and never replay
/// history.
///
/// Every insert is accepted and dropped, every query comes back empty, and
/// the history range is pinned to `[0, 0]`. Inserts are not validated: an
/// interval about to be discarded cannot corrupt anything, and erroring on it
/// would break drop-in interchangeability with the real backends.
pub struct NullBackend {
    ssid: String,
}

impl NullBackend {
    /// Create a discarding backend for the given state system.
    pub fn new(ssid: impl Into<String>) -> Self {
        Self { ssid: ssid.into() }
    }
}

impl StateHistoryBackend for NullBackend {
    fn ssid(&self) -> &str {
        &self.ssid
    }

    fn start_time(&self) -> Time {
        0
    }

    fn end_time(&self) -> Time {
        0
    }

    fn insert(&self, _start: Time, _end: Time, _attribute: Quark, _value: StateValue) -> Result<()> {
        Ok(())
    }

    fn query(&self, _out: &mut [Option<Interval>], _t: Time) -> Result<()> {
        // An empty history is a valid answer; every slot stays "no data".
        Ok(())
    }

    fn query_single(&self, _t: Time, _attribute: Quark) -> Result<Option<Interval>> {
        Ok(None)
    }

    fn query_2d(
        &self,
        _quarks: RangeCondition<Quark>,
        _times: RangeCondition<Time>,
    ) -> Box<dyn Iterator<Item = Interval> + Send> {
        Box::new(std::iter::empty())
    }

    fn finished_building(&self, _end_time: Time) {}

    fn dispose(&self) {}
}
