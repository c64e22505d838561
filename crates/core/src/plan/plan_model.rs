//! Plan domain models.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::errors::ValidationError;
use crate::i18n::Locale;

/// One person's retirement scenario.
///
/// Ages are whole years. Monetary fields are whole currency units per month.
/// `monthly_salary` is informational and does not feed the projection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanInput {
    pub display_name: String,
    pub avatar_ref: String,
    pub start_age: u32,
    pub monthly_salary: i64,
    pub monthly_savings: i64,
    pub retire_age: u32,
    pub monthly_expense: i64,
    pub life_expectancy: u32,
}

impl Default for PlanInput {
    /// The plan a shared link decodes to when every field is missing.
    fn default() -> Self {
        PlanInput {
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            avatar_ref: DEFAULT_AVATAR.to_string(),
            start_age: DEFAULT_START_AGE,
            monthly_salary: DEFAULT_MONTHLY_SALARY,
            monthly_savings: DEFAULT_MONTHLY_SAVINGS,
            retire_age: DEFAULT_RETIRE_AGE,
            monthly_expense: DEFAULT_MONTHLY_EXPENSE,
            life_expectancy: DEFAULT_LIFE_EXPECTANCY,
        }
    }
}

impl PlanInput {
    /// Starting values of the input wizard. Amounts are scaled to the
    /// locale's currency; name and avatar start empty.
    pub fn starter(locale: Locale) -> Self {
        let (monthly_salary, monthly_savings, monthly_expense) = match locale {
            Locale::Th => (30_000, 5_000, 20_000),
            Locale::En => (1_000, 200, 800),
        };
        PlanInput {
            display_name: String::new(),
            avatar_ref: String::new(),
            start_age: DEFAULT_START_AGE,
            monthly_salary,
            monthly_savings,
            retire_age: DEFAULT_RETIRE_AGE,
            monthly_expense,
            life_expectancy: DEFAULT_LIFE_EXPECTANCY,
        }
    }

    /// Name to show on the result card.
    pub fn display_name_or_default(&self) -> &str {
        if self.display_name.trim().is_empty() {
            DEFAULT_DISPLAY_NAME
        } else {
            &self.display_name
        }
    }

    /// Avatar to show on the result card.
    pub fn avatar_or_default(&self) -> &str {
        if self.avatar_ref.is_empty() {
            DEFAULT_AVATAR
        } else {
            &self.avatar_ref
        }
    }

    /// Checks the cross-field invariants required before projecting:
    /// `0 < start_age < retire_age < life_expectancy` and no negative amount.
    ///
    /// The wizard enforces some of these per step, but a plan can also come
    /// from a shared link, so every field is re-checked here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.start_age == 0 {
            return Err(ValidationError::NonPositiveStartAge);
        }
        if self.retire_age <= self.start_age {
            return Err(ValidationError::RetireNotAfterStart {
                start_age: self.start_age,
                retire_age: self.retire_age,
            });
        }
        if self.life_expectancy <= self.retire_age {
            return Err(ValidationError::LifeNotAfterRetire {
                retire_age: self.retire_age,
                life_expectancy: self.life_expectancy,
            });
        }

        for (field, value) in [
            ("monthlySalary", self.monthly_salary),
            ("monthlySavings", self.monthly_savings),
            ("monthlyExpense", self.monthly_expense),
        ] {
            if value < 0 {
                return Err(ValidationError::NegativeAmount { field, value });
            }
        }
        Ok(())
    }
}
