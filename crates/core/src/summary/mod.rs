//! Summary module - the localized result card built from a plan and its projection.

mod summary_model;


pub use summary_model::{AmountLine, PeriodLine, ResultSummary, Timeline, Verdict};
