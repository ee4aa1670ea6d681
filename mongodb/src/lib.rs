//! Query-filter composition for the MongoDB-backed variant store.
//!
//! The variant repository accepts an ordered list of [`Filter`]s and folds
//! them into a native store query. This crate builds that list: a
//! [`FilterCollector`] inspects the optional search parameters a caller
//! supplies and appends one filter per parameter that is actually present.
//! Executing the resulting query is the repository's job, not this crate's.
//!
//! [`Filter`]: filters::Filter
//! [`FilterCollector`]: filters::FilterCollector

pub mod filters;
