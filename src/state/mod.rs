//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `VisitTable`: per-page visit counts, the crawl's memo and its result
//! - `Visit`: whether a recorded visit was the first or a repeat

mod visit_table;

// Re-export main types
pub use visit_table::{Visit, VisitTable};
