//! Projection module - turns a plan into its derived financial summary.

mod projection_calculator;
mod projection_model;


pub use projection_calculator::{project, working_progress_percent};
pub use projection_model::ProjectionResult;
