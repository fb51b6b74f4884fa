//! Collection state for one resource list (materials, chemicals, users).
//!
//! DESIGN
//! ======
//! Each page owns one `RwSignal<CollectionState<T>>` and injects it into its
//! list view. Only the list view writes to it, and only in response to a
//! refresh or delete completing. Modals and rows never touch it directly.
//!
//! There is no cache and no request coalescing: every refresh re-issues the
//! list call and the last one to complete replaces `items`.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use std::collections::BTreeSet;

/// What a list view shows in place of (or as) its rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListPhase {
    /// No list call has completed yet, or one is outstanding before any
    /// success.
    Loading,
    /// Every completed list call failed.
    Unavailable,
    /// Items from the last successful call.
    Ready,
}

/// Items of one resource kind plus in-flight bookkeeping.
#[derive(Clone, Debug)]
pub struct CollectionState<T> {
    pub items: Vec<T>,
    /// At least one list call is outstanding.
    pub loading: bool,
    /// A list call has succeeded at least once.
    pub loaded: bool,
    /// A list call has completed at least once, successfully or not.
    pub attempted: bool,
    /// Number of list calls issued and not yet completed.
    pub in_flight: u32,
    /// Ids with a delete call outstanding.
    pub pending_deletes: BTreeSet<i64>,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            loaded: false,
            attempted: false,
            in_flight: 0,
            pending_deletes: BTreeSet::new(),
        }
    }
}

impl<T> CollectionState<T> {
    /// Record that a list call was issued.
    pub fn begin_refresh(&mut self) {
        self.in_flight = self.in_flight.saturating_add(1);
        self.loading = true;
    }

    /// Apply a completed list call. `None` (failed call) keeps the previous
    /// items untouched.
    pub fn finish_refresh(&mut self, result: Option<Vec<T>>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.loading = self.in_flight > 0;
        self.attempted = true;
        if let Some(items) = result {
            self.items = items;
            self.loaded = true;
        }
    }

    /// Record that a delete call for `id` was issued.
    pub fn begin_delete(&mut self, id: i64) {
        self.pending_deletes.insert(id);
    }

    /// Clear the pending flag for `id`. The row itself leaves the list on the
    /// refresh that follows a successful delete.
    pub fn finish_delete(&mut self, id: i64) {
        self.pending_deletes.remove(&id);
    }

    #[must_use]
    pub fn is_deleting(&self, id: i64) -> bool {
        self.pending_deletes.contains(&id)
    }

    /// Initial renders, server-side included, show the loading state.
    #[must_use]
    pub fn phase(&self) -> ListPhase {
        if self.loaded {
            ListPhase::Ready
        } else if self.loading || !self.attempted {
            ListPhase::Loading
        } else {
            ListPhase::Unavailable
        }
    }

    /// Nothing to show once loading settles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
