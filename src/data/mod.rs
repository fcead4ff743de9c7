/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  chicago.csv / new_york_city.csv / washington.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<RideRecord>, demographics flag
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  month / weekday predicates → filtered Dataset
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
