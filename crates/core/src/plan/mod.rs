//! Plan module - the user's retirement scenario and its invariants.

mod plan_model;

#[cfg(test)]
mod plan_model_tests;

pub use plan_model::PlanInput;
