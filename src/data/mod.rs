/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → SalaryDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ SalaryDataset │  Vec<Record>, distinct-value registry
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  conjunctive column predicates → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌────────────────────────┐
///   │  metrics / aggregate    │  KPIs + four chart tables
///   └────────────────────────┘
/// ```
///
/// Everything below the loader is a pure function of `(dataset, indices)`;
/// the empty view is a valid input everywhere and yields empty outputs.

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod metrics;
pub mod model;
