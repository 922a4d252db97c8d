use std::collections::BTreeSet;

use super::model::{MealTime, TipsDataset};

// ---------------------------------------------------------------------------
// Filter state: the two user-adjustable constraints
// ---------------------------------------------------------------------------

/// Current filter constraints: a total-bill range (inclusive on both ends)
/// and the set of selected meal times. Only the UI event path mutates this.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub bill_range: (f64, f64),
    pub times: BTreeSet<MealTime>,
}

impl FilterState {
    /// The unconstrained state: full bill extent, every meal time selected.
    /// Also what the reset button restores.
    pub fn full(dataset: &TipsDataset) -> Self {
        FilterState {
            bill_range: dataset.bill_extent,
            times: MealTime::ALL.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Derivation: filter state → row indices
// ---------------------------------------------------------------------------

/// Return indices of records that pass both predicates, in dataset order.
///
/// A record passes when:
/// * its total bill lies within `bill_range` (inclusive), and
/// * its meal time is in the selected set (empty set → nothing passes).
pub fn filter_rows(dataset: &TipsDataset, filter: &FilterState) -> Vec<usize> {
    let (lo, hi) = filter.bill_range;
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            rec.total_bill >= lo && rec.total_bill <= hi && filter.times.contains(&rec.time)
        })
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Single-slot memo over the filter state
// ---------------------------------------------------------------------------

/// Caches the indices for the most recent filter state only. Every read
/// compares against the cached key, so a stale slot can never be observed.
#[derive(Debug, Default)]
pub struct FilteredCache {
    key: Option<FilterState>,
    indices: Vec<usize>,
}

impl FilteredCache {
    /// Whether the slot already holds the result for `filter`.
    pub fn is_warm(&self, filter: &FilterState) -> bool {
        self.key.as_ref() == Some(filter)
    }

    /// Recompute the slot for `filter`.
    pub fn refresh(&mut self, dataset: &TipsDataset, filter: &FilterState) {
        self.indices = filter_rows(dataset, filter);
        self.key = Some(filter.clone());
    }

    /// The cached indices. Only meaningful after a `refresh`.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Day, Sex, TipRecord};

    fn record(total_bill: f64, day: Day, time: MealTime) -> TipRecord {
        TipRecord {
            total_bill,
            tip: total_bill * 0.15,
            sex: Sex::Male,
            smoker: false,
            day,
            time,
            size: 2,
        }
    }

    fn sample_dataset() -> TipsDataset {
        TipsDataset::from_records(vec![
            record(8.50, Day::Thur, MealTime::Lunch),
            record(12.00, Day::Thur, MealTime::Lunch),
            record(15.75, Day::Fri, MealTime::Dinner),
            record(20.00, Day::Sat, MealTime::Dinner),
            record(33.20, Day::Sun, MealTime::Dinner),
        ])
    }

    fn lunch_only() -> BTreeSet<MealTime> {
        [MealTime::Lunch].into_iter().collect()
    }

    #[test]
    fn full_filter_passes_everything() {
        let ds = sample_dataset();
        let rows = filter_rows(&ds, &FilterState::full(&ds));
        assert_eq!(rows, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let ds = sample_dataset();
        let filter = FilterState {
            bill_range: (12.00, 20.00),
            times: MealTime::ALL.into_iter().collect(),
        };
        let rows = filter_rows(&ds, &filter);
        assert_eq!(rows, vec![1, 2, 3]);
        for &i in &rows {
            let bill = ds.records[i].total_bill;
            assert!((12.00..=20.00).contains(&bill));
        }
    }

    #[test]
    fn time_values_are_subset_of_selection() {
        let ds = sample_dataset();
        let filter = FilterState {
            bill_range: ds.bill_extent,
            times: lunch_only(),
        };
        for &i in &filter_rows(&ds, &filter) {
            assert_eq!(ds.records[i].time, MealTime::Lunch);
        }
    }

    #[test]
    fn predicates_combine_with_and() {
        let ds = sample_dataset();
        let filter = FilterState {
            bill_range: (10.0, 20.0),
            times: lunch_only(),
        };
        // Row 1 is the only lunch sitting with a bill in [10, 20].
        assert_eq!(filter_rows(&ds, &filter), vec![1]);
    }

    #[test]
    fn empty_time_selection_yields_empty_subset() {
        let ds = sample_dataset();
        let filter = FilterState {
            bill_range: ds.bill_extent,
            times: BTreeSet::new(),
        };
        assert!(filter_rows(&ds, &filter).is_empty());
    }

    #[test]
    fn derivation_is_deterministic() {
        let ds = sample_dataset();
        let filter = FilterState {
            bill_range: (9.0, 21.0),
            times: MealTime::ALL.into_iter().collect(),
        };
        assert_eq!(filter_rows(&ds, &filter), filter_rows(&ds, &filter));
    }

    #[test]
    fn cache_warms_on_refresh_and_invalidates_on_change() {
        let ds = sample_dataset();
        let mut cache = FilteredCache::default();
        let full = FilterState::full(&ds);

        assert!(!cache.is_warm(&full));
        cache.refresh(&ds, &full);
        assert!(cache.is_warm(&full));
        assert_eq!(cache.indices(), &[0, 1, 2, 3, 4]);

        // A different filter misses the single slot...
        let narrowed = FilterState {
            bill_range: (10.0, 20.0),
            times: lunch_only(),
        };
        assert!(!cache.is_warm(&narrowed));

        // ...and refreshing replaces it, forgetting the previous key.
        cache.refresh(&ds, &narrowed);
        assert!(cache.is_warm(&narrowed));
        assert!(!cache.is_warm(&full));
        assert_eq!(cache.indices(), &[1]);
    }
}
