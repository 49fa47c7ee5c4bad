//! High-level operations over the roster.

pub mod report;

pub use report::{gpa_ranking, rank_order, statistics, GpaExtreme, Statistics};
