//! Tests for the plan model.

#[cfg(test)]
mod tests {
    use crate::constants::{DEFAULT_AVATAR, DEFAULT_DISPLAY_NAME};
    use crate::errors::ValidationError;
    use crate::i18n::Locale;
    use crate::plan::PlanInput;

    fn create_test_plan() -> PlanInput {
        PlanInput {
            display_name: "Jinnawat".to_string(),
            avatar_ref: "/avatar/Adam.png".to_string(),
            start_age: 22,
            monthly_salary: 30_000,
            monthly_savings: 5_000,
            retire_age: 60,
            monthly_expense: 20_000,
            life_expectancy: 80,
        }
    }

    // ==================== Defaults ====================

    #[test]
    fn test_default_plan_matches_link_defaults() {
        let plan = PlanInput::default();
        assert_eq!(plan.display_name, "Anonymous");
        assert_eq!(plan.avatar_ref, "/avatar/Tisha.png");
        assert_eq!(plan.start_age, 22);
        assert_eq!(plan.monthly_salary, 30_000);
        assert_eq!(plan.monthly_savings, 5_000);
        assert_eq!(plan.retire_age, 60);
        assert_eq!(plan.monthly_expense, 20_000);
        assert_eq!(plan.life_expectancy, 80);
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn test_starter_plan_per_locale() {
        let th = PlanInput::starter(Locale::Th);
        assert_eq!(
            (th.monthly_salary, th.monthly_savings, th.monthly_expense),
            (30_000, 5_000, 20_000)
        );
        let en = PlanInput::starter(Locale::En);
        assert_eq!(
            (en.monthly_salary, en.monthly_savings, en.monthly_expense),
            (1_000, 200, 800)
        );
        assert!(en.display_name.is_empty());
        assert!(en.validate().is_ok());
    }

    #[test]
    fn test_display_fallbacks() {
        let mut plan = create_test_plan();
        assert_eq!(plan.display_name_or_default(), "Jinnawat");
        plan.display_name = "  ".to_string();
        plan.avatar_ref.clear();
        assert_eq!(plan.display_name_or_default(), DEFAULT_DISPLAY_NAME);
        assert_eq!(plan.avatar_or_default(), DEFAULT_AVATAR);
    }

    // ==================== Validation ====================

    #[test]
    fn test_zero_start_age_is_rejected() {
        let mut plan = create_test_plan();
        plan.start_age = 0;
        assert_eq!(plan.validate(), Err(ValidationError::NonPositiveStartAge));
    }

    #[test]
    fn test_retire_age_equal_to_start_age_is_rejected() {
        let mut plan = create_test_plan();
        plan.retire_age = plan.start_age;
        assert_eq!(
            plan.validate(),
            Err(ValidationError::RetireNotAfterStart {
                start_age: 22,
                retire_age: 22
            })
        );
    }

    #[test]
    fn test_life_expectancy_not_after_retirement_is_rejected() {
        let mut plan = create_test_plan();
        plan.life_expectancy = 60;
        let err = plan.validate().unwrap_err();
        assert_eq!(err.field(), "lifeExpectancy");

        plan.life_expectancy = 40;
        assert!(plan.validate().is_err());
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let mut plan = create_test_plan();
        plan.monthly_expense = -1;
        assert_eq!(
            plan.validate(),
            Err(ValidationError::NegativeAmount {
                field: "monthlyExpense",
                value: -1
            })
        );
    }

    #[test]
    fn test_zero_amounts_are_valid() {
        let mut plan = create_test_plan();
        plan.monthly_salary = 0;
        plan.monthly_savings = 0;
        plan.monthly_expense = 0;
        assert!(plan.validate().is_ok());
    }

    // ==================== Serialization ====================

    #[test]
    fn test_plan_serializes_camel_case() {
        let json = serde_json::to_value(create_test_plan()).unwrap();
        assert_eq!(json["displayName"], "Jinnawat");
        assert_eq!(json["startAge"], 22);
        assert_eq!(json["lifeExpectancy"], 80);
        assert_eq!(json["monthlySavings"], 5_000);
    }
}
