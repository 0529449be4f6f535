//! Data layer: core types, loading, and the cleaning pipeline.
//!
//! Architecture:
//! ```text
//!        data.csv
//!            │
//!            ▼
//!      ┌──────────┐
//!      │  loader  │  header + rows → ColumnTable
//!      └──────────┘
//!            │  year, median_rent, CPI
//!            ▼
//!      ┌──────────┐
//!      │  filter  │  drop rows with an "NA" cell → AlignedTriple
//!      └──────────┘
//!            │
//!            ▼
//!      ┌───────────┐
//!      │ transform │  fill_gaps → CleanedSeries
//!      │           │  adjust_for_inflation → AdjustedSeries
//!      └───────────┘
//!            │
//!            ▼
//!        RentChart (pipeline)
//! ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod transform;
