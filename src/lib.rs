//! Double-ended priority queue with pluggable backing stores.
//!
//! A [`PriorityQueue`] holds (item, priority) pairs and removes either the
//! minimum- or the maximum-priority item, interchangeably, from the same
//! collection - for callers that need both "next most urgent" and "next
//! least urgent" without keeping two heaps in sync (scheduling, load
//! shedding, bounded-window analytics).
//!
//! # Design
//!
//! The queue is a thin facade over one [`Store`], selected at construction:
//!
//! ```text
//! PriorityQueue ──owns──► Store (trait)
//!                           ├── IntervalHeapStore   - array-backed, default
//!                           └── SortedStore         - B-tree multiset, oracle
//! ```
//!
//! The interval heap is the engineered path: a single dense array holding a
//! complete binary tree of (lo, hi) pairs that maintains a min-heap order on
//! the lo side and a max-heap order on the hi side simultaneously. The
//! sorted store implements the same contract on a `BTreeMap` keyed by
//! (priority, insertion sequence); it exists for cross-validation and as the
//! simple choice when performance is not the point.
//!
//! | Strategy | Insert | Extract min/max | Memory |
//! |----------|--------|-----------------|--------|
//! | [`IntervalHeapStore`] | O(log n) swaps | O(log n) swaps | one dense array |
//! | [`SortedStore`] | O(log n) | O(log n) | B-tree nodes |
//!
//! # Quick start
//!
//! ```
//! use depq::PriorityQueue;
//!
//! let mut queue: PriorityQueue<&str, i32> = PriorityQueue::interval_heap();
//! queue.enqueue("flush", 10);
//! queue.enqueue("urgent", -3);
//! queue.enqueue("compact", 42);
//!
//! assert_eq!(queue.dequeue_min(), Ok("urgent"));
//! assert_eq!(queue.dequeue_max(), Ok("compact"));
//! assert_eq!(queue.dequeue_min(), Ok("flush"));
//!
//! // Draining past empty is an expected, recoverable condition.
//! assert!(queue.dequeue_min().is_err());
//! ```
//!
//! # Priorities
//!
//! Priorities need a total order (`Ord`) and nothing else; items are never
//! compared. Equal priorities are kept as distinct entries - each enqueued
//! item comes back exactly once, in no guaranteed tie order.
//!
//! # Concurrency
//!
//! Single-threaded by design. Both heap orders span the whole structure, so
//! the natural concurrent adaptation is one exclusive lock around the store,
//! not a partitioned redesign.

#![warn(missing_docs)]

mod entry;
mod interval;
mod queue;
mod sorted;
mod store;

pub use interval::IntervalHeapStore;
pub use queue::PriorityQueue;
pub use sorted::SortedStore;
pub use store::{EmptyQueue, Store};
