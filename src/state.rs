use std::cell::{Ref, RefCell};

use crate::data::filter::{FilterState, FilteredCache};
use crate::data::model::TipsDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is loaded once and never mutated; `filter` is written only by
/// the side-panel event path. Consumers read the derived subset through
/// [`AppState::filtered`], which goes through a single-slot memo, so the
/// subset they observe is always consistent with the filter at read time.
pub struct AppState {
    dataset: TipsDataset,

    /// Current filter constraints.
    pub filter: FilterState,

    /// Memo slot for the derived subset. Interior mutability so consumers
    /// can read through a shared reference without owning the recompute.
    cache: RefCell<FilteredCache>,
}

impl AppState {
    pub fn new(dataset: TipsDataset) -> Self {
        let filter = FilterState::full(&dataset);
        AppState {
            dataset,
            filter,
            cache: RefCell::new(FilteredCache::default()),
        }
    }

    pub fn dataset(&self) -> &TipsDataset {
        &self.dataset
    }

    /// Indices of records passing the current filter, via the memo slot.
    ///
    /// Lazy: recomputes only when the filter differs from the cached key.
    /// The `borrow_mut` happens strictly before the returned `Ref` is
    /// created, and filter mutation requires `&mut self`, so no consumer
    /// can hold a borrow across an invalidation.
    pub fn filtered(&self) -> Ref<'_, [usize]> {
        if !self.cache.borrow().is_warm(&self.filter) {
            self.cache.borrow_mut().refresh(&self.dataset, &self.filter);
        }
        Ref::map(self.cache.borrow(), |cache| cache.indices())
    }

    /// Number of records passing the current filter.
    pub fn visible_count(&self) -> usize {
        self.filtered().len()
    }

    /// Restore the full bill extent and select both meal times.
    pub fn reset_filters(&mut self) {
        self.filter = FilterState::full(&self.dataset);
    }
}
