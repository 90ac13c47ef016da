/// Data layer: loading, cleaning, filtering and word counts.
///
/// Architecture:
/// ```text
///   metadata.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → RawTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ cleaner  │  required columns, drop untitled rows, parse dates → CleanedDataset
///   └──────────┘
///        │            (cache: one CleanedDataset per path + mtime)
///        ▼
///   ┌──────────┐
///   │ pipeline │──► filter: year slices, grouped counts
///   └──────────┘──► words:  title word frequencies
/// ```

pub mod cache;
pub mod cleaner;
pub mod dates;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod words;
