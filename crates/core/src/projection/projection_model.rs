use serde::{Deserialize, Serialize};

/// Derived summary of a plan. Recomputed on every evaluation, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub working_years: u32,
    pub working_months: u32,
    pub retirement_years: u32,
    pub retirement_months: u32,
    pub total_savings: i64,
    pub total_expenses: i64,
    /// `total_savings - total_expenses`; negative means a shortfall.
    pub balance: i64,
    pub is_sufficient: bool,
    /// Share of the span from start age to life expectancy spent working, `0..=100`.
    pub working_progress_percent: u32,
}

impl ProjectionResult {
    /// Amount left over after retirement, zero when short.
    pub fn surplus(&self) -> u64 {
        if self.balance > 0 {
            self.balance.unsigned_abs()
        } else {
            0
        }
    }

    /// Amount missing to cover retirement, zero when sufficient.
    pub fn shortfall(&self) -> u64 {
        if self.balance < 0 {
            self.balance.unsigned_abs()
        } else {
            0
        }
    }
}
