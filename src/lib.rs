//! # State History
//!
//! In-memory interval store backends for a trace state-system engine.
//!
//! A state system tracks, for every attribute of a trace (identified by an
//! integer "quark"), which value it held over which time range. This crate
//! provides the history side of that: time-indexed storage of closed
//! `[start, end]` attribute/value intervals that answers "what was attribute
//! A at time T" and "which intervals intersect this attribute/time window".
//!
//! ## Core Concepts
//!
//! - **Intervals**: Immutable `[start, end]` / attribute / value records,
//!   appended once and never mutated
//! - **Backends**: Pluggable storage behind one [`StateHistoryBackend`]
//!   contract — [`InMemoryBackend`] keeps the full history queryable,
//!   [`NullBackend`] discards it for forward-only state tracking
//! - **Queries**: Point queries per attribute or across all attributes, and
//!   2D attribute-range x time-range queries
//!
//! ## Example
//!
//! ```
//! use state_history::{InMemoryBackend, StateHistoryBackend, StateValue};
//!
//! let history = InMemoryBackend::new("my-trace", 0);
//!
//! // The CPU 0 "current thread" attribute held tid 42 over [0, 100].
//! history.insert(0, 100, 0, StateValue::Int(42))?;
//!
//! let interval = history.query_single(50, 0)?.unwrap();
//! assert_eq!(interval.value, StateValue::Int(42));
//! # Ok::<(), state_history::HistoryError>(())
//! ```
//!
//! Everything is held in memory with no bound on growth, so the in-memory
//! backend suits small histories only; persistence belongs to a disk-backed
//! implementation of the same contract.

pub mod backend;
pub mod error;
pub mod types;

// Re-exports
pub use backend::{InMemoryBackend, NullBackend, StateHistoryBackend};
pub use error::{HistoryError, Result};
pub use types::{Interval, Quark, RangeCondition, StateValue, Time};
