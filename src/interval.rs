//! Interval-heap store - the core double-ended strategy.
//!
//! An interval heap is a complete binary tree whose nodes each hold a pair
//! of entries `(lo, hi)` with `lo <= hi`, so every node describes a closed
//! priority interval. A child's interval is contained in its parent's, which
//! keeps the global minimum in the root's lo slot and the global maximum in
//! the root's hi slot: one array serves both extraction directions.
//!
//! Nodes are stored flat in a single growable array. Node `n` occupies slots
//! `2n` (lo) and `2n + 1` (hi); the last node may hold a lone lo. Slot
//! layout for a 13-entry heap (numbers are slot offsets):
//!
//! ```text
//!             (0 1)
//!            /     \
//!       (2 3)       (4 5)
//!       /   \       /    \
//!    (6 7) (8 9) (10 11) (12 --)
//! ```
//!
//! Every mutation restores three invariants before returning:
//!
//! 1. per-node: `lo.priority <= hi.priority`
//! 2. min side: `parent.lo <= child.lo`
//! 3. max side: `parent.hi >= child.hi`
//!
//! A lone-lo node contributes its single entry to both sides. Insert and
//! both extractions are O(log n) swaps; the dense array gives O(n) memory
//! and cache-friendly traversal.

use crate::entry::Entry;
use crate::store::{EmptyQueue, Store};

// ============================================================================
// Slot arithmetic
// ============================================================================

/// Clears the low bit: the lo slot of the node containing slot `i`.
#[inline]
const fn lo_slot(i: usize) -> usize {
    i & !1
}

/// Returns `true` if slot `i` belongs to the root node.
#[inline]
const fn is_root(i: usize) -> bool {
    i < 2
}

/// The lo slot of the parent of the node containing slot `i`.
///
/// Must not be called on a root slot.
#[inline]
const fn parent_lo(i: usize) -> usize {
    lo_slot((i - 2) / 2)
}

// ============================================================================
// IntervalHeapStore
// ============================================================================

/// An array-backed interval heap store.
///
/// Supports O(log n) insert and extraction of either the minimum- or the
/// maximum-priority entry from the same structure. Priorities only need a
/// total order; items are never compared, and duplicate priorities are kept
/// as distinct entries with no tie-order guarantee.
///
/// # Example
///
/// ```
/// use depq::IntervalHeapStore;
///
/// let mut store: IntervalHeapStore<&str, i64> = IntervalHeapStore::new();
/// store.insert("deadline", 40);
/// store.insert("idle-scan", 900);
/// store.insert("heartbeat", 250);
///
/// assert_eq!(store.peek_min(), Some((&"deadline", &40)));
/// assert_eq!(store.peek_max(), Some((&"idle-scan", &900)));
///
/// assert_eq!(store.extract_min(), Ok("deadline"));
/// assert_eq!(store.extract_max(), Ok("idle-scan"));
/// assert_eq!(store.extract_max(), Ok("heartbeat"));
/// assert!(store.extract_max().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct IntervalHeapStore<T, P: Ord> {
    /// Entries in flat node order, dense: occupied slots are exactly
    /// `0..data.len()`.
    data: Vec<Entry<T, P>>,
}

impl<T, P: Ord> IntervalHeapStore<T, P> {
    /// Creates an empty store.
    #[inline]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty store with room for `capacity` entries before
    /// reallocating.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the store.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the store holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of entries the store can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more entries.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Removes all entries from the store.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Inserts an item with the given priority in O(log n) swaps.
    pub fn insert(&mut self, item: T, priority: P) {
        self.data.push(Entry::new(item, priority));
        self.swim();
        debug_assert!(self.is_valid());
    }

    /// Removes and returns an item with the smallest priority.
    ///
    /// # Errors
    ///
    /// Returns `Err(EmptyQueue)` if the store is empty.
    pub fn extract_min(&mut self) -> Result<T, EmptyQueue> {
        let min = match self.data.len() {
            0 => return Err(EmptyQueue),
            // Root-only heap: the survivor (if any) is a valid lone node.
            1..=2 => self.data.swap_remove(0),
            _ => {
                // The last slot refills the vacated root lo, then sinks.
                let min = self.data.swap_remove(0);
                self.sink_min();
                min
            }
        };
        debug_assert!(self.is_valid());
        Ok(min.into_item())
    }

    /// Removes and returns an item with the largest priority.
    ///
    /// # Errors
    ///
    /// Returns `Err(EmptyQueue)` if the store is empty.
    pub fn extract_max(&mut self) -> Result<T, EmptyQueue> {
        let max = match self.data.len() {
            // With zero, one, or two entries the maximum is the last slot.
            0..=2 => self.data.pop().ok_or(EmptyQueue)?,
            _ => {
                let max = self.data.swap_remove(1);
                self.sink_max();
                max
            }
        };
        debug_assert!(self.is_valid());
        Ok(max.into_item())
    }

    /// Returns the minimum item and its priority without removing them.
    #[inline]
    pub fn peek_min(&self) -> Option<(&T, &P)> {
        self.data.first().map(|e| (e.item(), e.priority()))
    }

    /// Returns the maximum item and its priority without removing them.
    #[inline]
    pub fn peek_max(&self) -> Option<(&T, &P)> {
        match self.data.len() {
            0 => None,
            1 => self.data.first().map(|e| (e.item(), e.priority())),
            _ => self.data.get(1).map(|e| (e.item(), e.priority())),
        }
    }

    // ========================================================================
    // Invariant restoration
    // ========================================================================

    /// Bubbles the freshly appended entry into place.
    ///
    /// `data[..len - 1]` is a valid interval heap on entry. The new slot is
    /// either a lone lo opening a new node (then `lo == hi` below and the
    /// entry acts as both ends) or a hi completing the last node (then its
    /// own pair is repaired first). Afterwards the pair climbs: an entry
    /// smaller than the parent's lo ascends the min side, one larger than
    /// the parent's hi ascends the max side, and an entry inside the
    /// parent's interval is already placed.
    fn swim(&mut self) {
        let mut hi = self.data.len() - 1;
        let mut lo = lo_slot(hi);
        if self.gt(lo, hi) {
            self.data.swap(lo, hi);
        }
        while !is_root(lo) {
            let par_lo = parent_lo(lo);
            let par_hi = par_lo + 1;
            if self.lt(lo, par_lo) {
                self.data.swap(lo, par_lo);
            } else if self.gt(hi, par_hi) {
                self.data.swap(hi, par_hi);
            } else {
                return;
            }
            // A swap on one side cannot break the pair: the value arriving
            // from the parent bounds the slot it replaces.
            lo = par_lo;
            hi = par_hi;
        }
    }

    /// Sinks the relocated root lo down the min side.
    ///
    /// At each node, swap with the smaller child lo if it undercuts the
    /// sinking entry, then repair that child's own pair before descending
    /// further. Comparisons guard on occupancy: the last node may have no
    /// hi slot.
    fn sink_min(&mut self) {
        let mut lo = 0;
        loop {
            // Lo slots of the two child nodes.
            let c1 = 2 * lo + 2;
            let c2 = c1 + 2;
            if self.data.len() <= c1 {
                return;
            }
            let child = if self.data.len() <= c2 || self.lt(c1, c2) {
                c1
            } else {
                c2
            };
            if self.lt(child, lo) {
                self.data.swap(child, lo);
                lo = child;
                let hi = lo + 1;
                if hi < self.data.len() && self.gt(lo, hi) {
                    self.data.swap(lo, hi);
                }
            } else {
                return;
            }
        }
    }

    /// Sinks the relocated root hi down the max side.
    ///
    /// Mirror of [`sink_min`](Self::sink_min). A lone-lo last node never
    /// needs direct comparison here: the entry that refilled the root was
    /// its former hi partner, and the sinking value only grows through pair
    /// repairs, so the max order over that node holds by construction.
    fn sink_max(&mut self) {
        let mut hi = 1;
        loop {
            // Hi slots of the two child nodes.
            let c1 = 2 * hi + 1;
            let c2 = c1 + 2;
            if self.data.len() <= c1 {
                return;
            }
            let child = if self.data.len() <= c2 || self.gt(c1, c2) {
                c1
            } else {
                c2
            };
            if self.gt(child, hi) {
                self.data.swap(child, hi);
                hi = child;
                let lo = hi - 1;
                if self.gt(lo, hi) {
                    self.data.swap(lo, hi);
                }
            } else {
                return;
            }
        }
    }

    // ========================================================================
    // Comparisons and validation
    // ========================================================================

    /// Returns `true` if the entry at slot `a` has strictly smaller priority
    /// than the one at slot `b`.
    #[inline]
    fn lt(&self, a: usize, b: usize) -> bool {
        self.data[a].priority() < self.data[b].priority()
    }

    /// Returns `true` if the entry at slot `a` has strictly larger priority
    /// than the one at slot `b`.
    #[inline]
    fn gt(&self, a: usize, b: usize) -> bool {
        self.data[a].priority() > self.data[b].priority()
    }

    /// Checks the full interval-heap invariant. Checked via `debug_assert!`
    /// at operation boundaries; a violation is a bug, never a recoverable
    /// state. Density holds structurally: entries live in `0..len` of one
    /// `Vec`.
    fn is_valid(&self) -> bool {
        let mut nodes = self.data.chunks(2);
        match nodes.next() {
            Some(root) if root.len() == 2 => {
                root[0].priority() <= root[1].priority()
                    && nodes.enumerate().all(|(i, node)| {
                        // This is node i + 1; its parent's lo slot is i & !1.
                        let par_lo = i & !1;
                        let lo = node[0].priority();
                        let hi = node[node.len() - 1].priority();
                        lo <= hi
                            && self.data[par_lo].priority() <= lo
                            && hi <= self.data[par_lo + 1].priority()
                    })
            }
            _ => true,
        }
    }
}

impl<T, P: Ord> Default for IntervalHeapStore<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> Store<T, P> for IntervalHeapStore<T, P> {
    #[inline]
    fn insert(&mut self, item: T, priority: P) {
        IntervalHeapStore::insert(self, item, priority);
    }

    #[inline]
    fn extract_min(&mut self) -> Result<T, EmptyQueue> {
        IntervalHeapStore::extract_min(self)
    }

    #[inline]
    fn extract_max(&mut self) -> Result<T, EmptyQueue> {
        IntervalHeapStore::extract_max(self)
    }

    #[inline]
    fn peek_min(&self) -> Option<(&T, &P)> {
        IntervalHeapStore::peek_min(self)
    }

    #[inline]
    fn peek_max(&self) -> Option<(&T, &P)> {
        IntervalHeapStore::peek_max(self)
    }

    #[inline]
    fn len(&self) -> usize {
        IntervalHeapStore::len(self)
    }
}
