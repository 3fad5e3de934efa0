//! Data layer: core types, loading, derivation, ranking, and summaries.
//!
//! Architecture:
//! ```text
//!  summary.csv
//!       │
//!       ▼
//!  ┌──────────┐
//!  │  loader   │  parse CSV (list literals via `literal`) → PackageDataset
//!  └──────────┘     cached process-wide by (path, mtime)
//!       │
//!       ▼
//!  ┌────────────────┐
//!  │ PackageDataset  │  Vec<PackageRecord>, immutable
//!  └────────────────┘
//!       │
//!       ├──► derive  – layer columns + ordinal encodings (parcoords axes)
//!       ├──► rank    – weighted fractional-rank score → ordered rows
//!       └──► stats   – min / max / median / argmin per metric (KPIs)
//! ```

pub mod derive;
pub mod literal;
pub mod loader;
pub mod model;
pub mod rank;
pub mod stats;
