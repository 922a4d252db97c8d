/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  assets/tips.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse embedded CSV → TipsDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ TipsDataset │  Vec<TipRecord>, bill extent
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  bill range ∧ meal-time set → filtered indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
