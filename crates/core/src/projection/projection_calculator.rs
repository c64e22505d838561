use log::debug;

use crate::constants::MONTHS_PER_YEAR;
use crate::errors::{Result, ValidationError};
use crate::plan::PlanInput;

use super::projection_model::ProjectionResult;

/// Derives the full projection for a plan.
///
/// The plan is validated first; a plan violating
/// `0 < start_age < retire_age < life_expectancy` or carrying a negative amount
/// yields `Error::InvalidInput`. Zero savings or zero expenses are valid.
/// All arithmetic is integer and checked.
pub fn project(input: &PlanInput) -> Result<ProjectionResult> {
    input.validate()?;

    let working_years = input.retire_age - input.start_age;
    let retirement_years = input.life_expectancy - input.retire_age;
    let working_months = to_months(working_years, "workingMonths")?;
    let retirement_months = to_months(retirement_years, "retirementMonths")?;

    let total_savings = input
        .monthly_savings
        .checked_mul(i64::from(working_months))
        .ok_or(ValidationError::Overflow {
            field: "totalSavings",
        })?;
    let total_expenses = input
        .monthly_expense
        .checked_mul(i64::from(retirement_months))
        .ok_or(ValidationError::Overflow {
            field: "totalExpenses",
        })?;
    // Both totals are non-negative, so the difference cannot overflow.
    let balance = total_savings - total_expenses;

    let result = ProjectionResult {
        working_years,
        working_months,
        retirement_years,
        retirement_months,
        total_savings,
        total_expenses,
        balance,
        is_sufficient: total_savings >= total_expenses,
        working_progress_percent: working_progress_percent(
            input.start_age,
            input.retire_age,
            input.life_expectancy,
        ),
    };

    debug!(
        "Projected plan: {} working years, {} retirement years, balance {}",
        result.working_years, result.retirement_years, result.balance
    );
    Ok(result)
}

/// Percent of the span `start_age..life_expectancy` spent working, floored.
///
/// Total over any ages: an empty or inverted span yields 0, and the result is
/// clamped to `0..=100`.
pub fn working_progress_percent(start_age: u32, retire_age: u32, life_expectancy: u32) -> u32 {
    let life_span = life_expectancy.saturating_sub(start_age);
    if life_span == 0 {
        return 0;
    }
    let working = retire_age.saturating_sub(start_age).min(life_span);
    // u64 keeps `100 * working` from overflowing for large ages
    let percent = u64::from(working) * 100 / u64::from(life_span);
    percent as u32
}

fn to_months(years: u32, field: &'static str) -> Result<u32> {
    years
        .checked_mul(MONTHS_PER_YEAR)
        .ok_or_else(|| ValidationError::Overflow { field }.into())
}
