//! Internal (item, priority) pairing stored by the backing strategies.

/// An immutable pairing of an item and its priority.
///
/// Ordering between entries consults the priority only; items are never
/// compared, so entries with equal priorities stay distinct.
#[derive(Debug, Clone)]
pub(crate) struct Entry<T, P> {
    item: T,
    priority: P,
}

impl<T, P> Entry<T, P> {
    #[inline]
    pub(crate) const fn new(item: T, priority: P) -> Self {
        Self { item, priority }
    }

    #[inline]
    pub(crate) fn item(&self) -> &T {
        &self.item
    }

    #[inline]
    pub(crate) fn priority(&self) -> &P {
        &self.priority
    }

    /// Consumes the entry, releasing ownership of the item to the caller.
    #[inline]
    pub(crate) fn into_item(self) -> T {
        self.item
    }
}
