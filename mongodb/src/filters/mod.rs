//! Query filter system
//!
//! Provides the filter model for variant repository queries and the collector
//! that assembles a filter list from optional search parameters.
//!
//! ## Usage
//!
//! ```
//! use variation_commons_mongodb::filters::FilterCollector;
//!
//! let studies = vec!["PRJEB1".to_string(), "PRJEB2".to_string()];
//! let filters = FilterCollector::new()
//!     .with_maf(Some("<0.01"))
//!     .with_studies(Some(&studies))
//!     .build();
//! assert_eq!(filters.len(), 2);
//! ```

mod collector;
mod types;

pub use collector::FilterCollector;
pub use types::{Filter, RelationalOperator, fields};
