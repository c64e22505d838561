//! Typed translation catalog.
//!
//! Every user-facing string is addressed by a [`MessageKey`] variant instead of a
//! free-form string. Templates may contain `{{param}}` placeholders which
//! [`render`] substitutes.

use super::locale::Locale;
use crate::errors::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    // Landing
    LandingTitle,
    LandingSubtitle,
    LandingWhyTitle,
    LandingWhyPoint1,
    LandingWhyPoint2,
    LandingWhyPoint3,
    LandingWhyPoint4,
    LandingCta,

    // Form
    FormTitle,
    FormStep,
    FormOf,
    FormWhoAreYou,
    FormYourName,
    FormSelectAvatar,
    FormStartAgeLabel,
    FormStartAgeUnit,
    FormSalaryLabel,
    FormMonthlySavingsLabel,
    FormRetireAgeLabel,
    FormRetireAgeUnit,
    FormMonthlyExpenseLabel,
    FormLifeExpectancyLabel,
    FormLifeExpectancyUnit,
    FormNext,
    FormBack,
    FormCalculate,
    FormNamePlaceholder,
    FormUploadAvatar,
    FormStartAgePlaceholder,
    FormSalaryPlaceholder,
    FormSalaryUnit,
    FormMonthlySavingsPlaceholder,
    FormMonthlySavingsUnit,
    FormRetireAgePlaceholder,
    FormMonthlyExpensePlaceholder,
    FormMonthlyExpenseUnit,
    FormLifeExpectancyPlaceholder,

    // Results
    ResultsTitle,
    ResultsPlanFor,
    ResultsSummary,
    ResultsWorkPeriod,
    ResultsRetirePeriod,
    ResultsYears,
    ResultsMonths,
    ResultsOr,
    ResultsTotalSavings,
    ResultsTotalExpense,
    ResultsWorking,
    ResultsRetired,
    ResultsTimeline,
    ResultsSufficient,
    ResultsInsufficient,
    ResultsSurplus,
    ResultsShortfall,
    ResultsPerMonth,
    ResultsSave,
    ResultsShare,

    // Share
    ShareTitle,
    ShareLink,
    ShareFacebook,
    ShareLine,
    ShareMessage,
    ShareUrlLabel,
    ShareCopied,

    // Donation
    DonationTitle,
    DonationSubtitle,
    DonationPromptpay,
    DonationBank,
    DonationThanks,
    DonationClose,

    // Validation
    ValidationStartAge,
    ValidationRetireAge,
    ValidationLifeExpectancy,
    ValidationNegativeAmount,
    ValidationOverflow,

    // Common
    CommonAge,
    CommonYear,
    CommonMonth,
    CommonClose,
    CommonBaht,
    CommonDarkMode,
    CommonLightMode,
}

impl MessageKey {
    pub const ALL: [MessageKey; 82] = [
        MessageKey::LandingTitle,
        MessageKey::LandingSubtitle,
        MessageKey::LandingWhyTitle,
        MessageKey::LandingWhyPoint1,
        MessageKey::LandingWhyPoint2,
        MessageKey::LandingWhyPoint3,
        MessageKey::LandingWhyPoint4,
        MessageKey::LandingCta,
        MessageKey::FormTitle,
        MessageKey::FormStep,
        MessageKey::FormOf,
        MessageKey::FormWhoAreYou,
        MessageKey::FormYourName,
        MessageKey::FormSelectAvatar,
        MessageKey::FormStartAgeLabel,
        MessageKey::FormStartAgeUnit,
        MessageKey::FormSalaryLabel,
        MessageKey::FormMonthlySavingsLabel,
        MessageKey::FormRetireAgeLabel,
        MessageKey::FormRetireAgeUnit,
        MessageKey::FormMonthlyExpenseLabel,
        MessageKey::FormLifeExpectancyLabel,
        MessageKey::FormLifeExpectancyUnit,
        MessageKey::FormNext,
        MessageKey::FormBack,
        MessageKey::FormCalculate,
        MessageKey::FormNamePlaceholder,
        MessageKey::FormUploadAvatar,
        MessageKey::FormStartAgePlaceholder,
        MessageKey::FormSalaryPlaceholder,
        MessageKey::FormSalaryUnit,
        MessageKey::FormMonthlySavingsPlaceholder,
        MessageKey::FormMonthlySavingsUnit,
        MessageKey::FormRetireAgePlaceholder,
        MessageKey::FormMonthlyExpensePlaceholder,
        MessageKey::FormMonthlyExpenseUnit,
        MessageKey::FormLifeExpectancyPlaceholder,
        MessageKey::ResultsTitle,
        MessageKey::ResultsPlanFor,
        MessageKey::ResultsSummary,
        MessageKey::ResultsWorkPeriod,
        MessageKey::ResultsRetirePeriod,
        MessageKey::ResultsYears,
        MessageKey::ResultsMonths,
        MessageKey::ResultsOr,
        MessageKey::ResultsTotalSavings,
        MessageKey::ResultsTotalExpense,
        MessageKey::ResultsWorking,
        MessageKey::ResultsRetired,
        MessageKey::ResultsTimeline,
        MessageKey::ResultsSufficient,
        MessageKey::ResultsInsufficient,
        MessageKey::ResultsSurplus,
        MessageKey::ResultsShortfall,
        MessageKey::ResultsPerMonth,
        MessageKey::ResultsSave,
        MessageKey::ResultsShare,
        MessageKey::ShareTitle,
        MessageKey::ShareLink,
        MessageKey::ShareFacebook,
        MessageKey::ShareLine,
        MessageKey::ShareMessage,
        MessageKey::ShareUrlLabel,
        MessageKey::ShareCopied,
        MessageKey::DonationTitle,
        MessageKey::DonationSubtitle,
        MessageKey::DonationPromptpay,
        MessageKey::DonationBank,
        MessageKey::DonationThanks,
        MessageKey::DonationClose,
        MessageKey::ValidationStartAge,
        MessageKey::ValidationRetireAge,
        MessageKey::ValidationLifeExpectancy,
        MessageKey::ValidationNegativeAmount,
        MessageKey::ValidationOverflow,
        MessageKey::CommonAge,
        MessageKey::CommonYear,
        MessageKey::CommonMonth,
        MessageKey::CommonClose,
        MessageKey::CommonBaht,
        MessageKey::CommonDarkMode,
        MessageKey::CommonLightMode,
    ];

    /// Stable dotted identifier, also the fallback text for a missing entry.
    pub fn id(&self) -> &'static str {
        match self {
            MessageKey::LandingTitle => "landing.title",
            MessageKey::LandingSubtitle => "landing.subtitle",
            MessageKey::LandingWhyTitle => "landing.why.title",
            MessageKey::LandingWhyPoint1 => "landing.why.point1",
            MessageKey::LandingWhyPoint2 => "landing.why.point2",
            MessageKey::LandingWhyPoint3 => "landing.why.point3",
            MessageKey::LandingWhyPoint4 => "landing.why.point4",
            MessageKey::LandingCta => "landing.cta",
            MessageKey::FormTitle => "form.title",
            MessageKey::FormStep => "form.step",
            MessageKey::FormOf => "form.of",
            MessageKey::FormWhoAreYou => "form.whoAreYou",
            MessageKey::FormYourName => "form.yourName",
            MessageKey::FormSelectAvatar => "form.selectAvatar",
            MessageKey::FormStartAgeLabel => "form.startAge.label",
            MessageKey::FormStartAgeUnit => "form.startAge.unit",
            MessageKey::FormSalaryLabel => "form.salary.label",
            MessageKey::FormMonthlySavingsLabel => "form.monthlySavings.label",
            MessageKey::FormRetireAgeLabel => "form.retireAge.label",
            MessageKey::FormRetireAgeUnit => "form.retireAge.unit",
            MessageKey::FormMonthlyExpenseLabel => "form.monthlyExpense.label",
            MessageKey::FormLifeExpectancyLabel => "form.lifeExpectancy.label",
            MessageKey::FormLifeExpectancyUnit => "form.lifeExpectancy.unit",
            MessageKey::ResultsTitle => "results.title",
            MessageKey::ResultsPlanFor => "results.planFor",
            MessageKey::ResultsSummary => "results.summary",
            MessageKey::ResultsWorkPeriod => "results.workPeriod",
            MessageKey::ResultsRetirePeriod => "results.retirePeriod",
            MessageKey::ResultsYears => "results.years",
            MessageKey::ResultsMonths => "results.months",
            MessageKey::ResultsOr => "results.or",
            MessageKey::ResultsTotalSavings => "results.totalSavings",
            MessageKey::ResultsTotalExpense => "results.totalExpense",
            MessageKey::ResultsWorking => "results.working",
            MessageKey::ResultsRetired => "results.retired",
            MessageKey::ResultsTimeline => "results.timeline",
            MessageKey::ResultsSufficient => "results.sufficient",
            MessageKey::ResultsInsufficient => "results.insufficient",
            MessageKey::ResultsSurplus => "results.surplus",
            MessageKey::ResultsShortfall => "results.shortfall",
            MessageKey::ShareTitle => "share.title",
            MessageKey::ShareLink => "share.link",
            MessageKey::ShareFacebook => "share.facebook",
            MessageKey::ShareLine => "share.line",
            MessageKey::ShareMessage => "share.message",
            MessageKey::ShareUrlLabel => "share.urlLabel",
            MessageKey::ValidationStartAge => "validation.startAge",
            MessageKey::ValidationRetireAge => "validation.retireAge",
            MessageKey::ValidationLifeExpectancy => "validation.lifeExpectancy",
            MessageKey::ValidationNegativeAmount => "validation.negativeAmount",
            MessageKey::ValidationOverflow => "validation.overflow",
            MessageKey::CommonAge => "common.age",
            MessageKey::CommonYear => "common.year",
            MessageKey::CommonMonth => "common.month",
            MessageKey::FormNext => "form.next",
            MessageKey::FormBack => "form.back",
            MessageKey::FormCalculate => "form.calculate",
            MessageKey::FormNamePlaceholder => "form.namePlaceholder",
            MessageKey::FormUploadAvatar => "form.uploadAvatar",
            MessageKey::FormStartAgePlaceholder => "form.startAge.placeholder",
            MessageKey::FormSalaryPlaceholder => "form.salary.placeholder",
            MessageKey::FormSalaryUnit => "form.salary.unit",
            MessageKey::FormMonthlySavingsPlaceholder => "form.monthlySavings.placeholder",
            MessageKey::FormMonthlySavingsUnit => "form.monthlySavings.unit",
            MessageKey::FormRetireAgePlaceholder => "form.retireAge.placeholder",
            MessageKey::FormMonthlyExpensePlaceholder => "form.monthlyExpense.placeholder",
            MessageKey::FormMonthlyExpenseUnit => "form.monthlyExpense.unit",
            MessageKey::FormLifeExpectancyPlaceholder => "form.lifeExpectancy.placeholder",
            MessageKey::ResultsPerMonth => "results.perMonth",
            MessageKey::ResultsSave => "results.save",
            MessageKey::ResultsShare => "results.share",
            MessageKey::ShareCopied => "share.copied",
            MessageKey::DonationTitle => "donation.title",
            MessageKey::DonationSubtitle => "donation.subtitle",
            MessageKey::DonationPromptpay => "donation.promptpay",
            MessageKey::DonationBank => "donation.bank",
            MessageKey::DonationThanks => "donation.thanks",
            MessageKey::DonationClose => "donation.close",
            MessageKey::CommonClose => "common.close",
            MessageKey::CommonBaht => "common.baht",
            MessageKey::CommonDarkMode => "common.darkMode",
            MessageKey::CommonLightMode => "common.lightMode",
        }
    }

    /// Message used to explain a rejected plan.
    pub fn for_validation(err: &ValidationError) -> MessageKey {
        match err {
            ValidationError::NonPositiveStartAge => MessageKey::ValidationStartAge,
            ValidationError::RetireNotAfterStart { .. } => MessageKey::ValidationRetireAge,
            ValidationError::LifeNotAfterRetire { .. } => MessageKey::ValidationLifeExpectancy,
            ValidationError::NegativeAmount { .. } => MessageKey::ValidationNegativeAmount,
            ValidationError::Overflow { .. } => MessageKey::ValidationOverflow,
        }
    }

    fn th(&self) -> Option<&'static str> {
        let text = match self {
            MessageKey::LandingTitle => "วางแผนเกษียณ",
            MessageKey::LandingSubtitle => "วางแผนเกษียณเพื่ออนาคตที่มั่นคงของคุณ",
            MessageKey::LandingWhyTitle => "ทำไมต้องวางแผนเกษียณ?",
            MessageKey::LandingWhyPoint1 => "เงินเฟ้อทำให้ค่าครองชีพสูงขึ้นเรื่อยๆ",
            MessageKey::LandingWhyPoint2 => "เงินเดือนหลังเกษียณอาจไม่เพียงพอ",
            MessageKey::LandingWhyPoint3 => "ออมเงินตั้งแต่วันนี้อนาคตมั่นคง",
            MessageKey::LandingWhyPoint4 => "ลงทุนระยะยาวสร้างผลตอบแทนที่ดี",
            MessageKey::LandingCta => "วางแผนเกษียณกัน!",
            MessageKey::FormTitle => "แนะนำตัวหน่อยสิ!",
            MessageKey::FormStep => "ขั้นตอนที่",
            MessageKey::FormOf => "จาก",
            MessageKey::FormWhoAreYou => "เธอคือใคร?",
            MessageKey::FormYourName => "ชื่อของเธอละ?",
            MessageKey::FormSelectAvatar => "เลือกอวตาร",
            MessageKey::FormStartAgeLabel => "เธอเริ่มทำงานตอนอายุเท่าไหร่?",
            MessageKey::FormStartAgeUnit => "ปี",
            MessageKey::FormSalaryLabel => "เงินเดือนที่ได้รับล่ะ?",
            MessageKey::FormMonthlySavingsLabel => "แล้วออมเงินเดือนละเท่าไหร่?",
            MessageKey::FormRetireAgeLabel => "คิดว่าจะเกษียณตอนอายุเท่าไหร่?",
            MessageKey::FormRetireAgeUnit => "ปี",
            MessageKey::FormMonthlyExpenseLabel => "จะใช้เงินเกษียณเดือนละเท่าไหร่?",
            MessageKey::FormLifeExpectancyLabel => "คิดว่าจะมีชีวิตอยู่ถึงเมื่อไหร่?",
            MessageKey::FormLifeExpectancyUnit => "ปี",
            MessageKey::ResultsTitle => "ผลลัพธ์",
            MessageKey::ResultsPlanFor => "ฉันคือ",
            MessageKey::ResultsSummary => "{{name}}",
            MessageKey::ResultsWorkPeriod => "ฉันจะทำงาน",
            MessageKey::ResultsRetirePeriod => "ใช้ชีวิตเกษียณ",
            MessageKey::ResultsYears => "ปี",
            MessageKey::ResultsMonths => "เดือน",
            MessageKey::ResultsOr => "หรือ",
            MessageKey::ResultsTotalSavings => "เงินออมตลอดช่วงทำงาน",
            MessageKey::ResultsTotalExpense => "ต้องการใช้เงินหลังเกษียณ",
            MessageKey::ResultsWorking => "ทำงาน",
            MessageKey::ResultsRetired => "เกษียณ",
            MessageKey::ResultsTimeline => "เส้นทางชีวิต",
            MessageKey::ResultsSufficient => "เพียงพอ!",
            MessageKey::ResultsInsufficient => "ไม่เพียงพอ",
            MessageKey::ResultsSurplus => "ฉันจะมีเงินเหลืออีก {{amount}}",
            MessageKey::ResultsShortfall => "ฉันขาดเงินอีก {{amount}}",
            MessageKey::ShareTitle => "แชร์",
            MessageKey::ShareLink => "คัดลอกลิงก์",
            MessageKey::ShareFacebook => "แชร์ใน Facebook",
            MessageKey::ShareLine => "แชร์ใน Line",
            MessageKey::ShareMessage => "ฉันได้วางแผนเกษียณแล้ว! มาดูผลการคำนวณของฉัน",
            MessageKey::ShareUrlLabel => "ลิงก์สำหรับแชร์:",
            MessageKey::ValidationStartAge => "อายุเริ่มทำงานต้องมากกว่า 0",
            MessageKey::ValidationRetireAge => {
                "อายุเกษียณ ({{retireAge}}) ต้องมากกว่าอายุเริ่มทำงาน ({{startAge}})"
            }
            MessageKey::ValidationLifeExpectancy => {
                "อายุขัย ({{lifeExpectancy}}) ต้องมากกว่าอายุเกษียณ ({{retireAge}})"
            }
            MessageKey::ValidationNegativeAmount => "{{field}} ต้องไม่ติดลบ",
            MessageKey::ValidationOverflow => "ตัวเลขใหญ่เกินกว่าจะคำนวณได้ ({{field}})",
            MessageKey::CommonAge => "อายุ",
            MessageKey::CommonYear => "ปี",
            MessageKey::CommonMonth => "เดือน",
            MessageKey::FormNext => "ถัดไป",
            MessageKey::FormBack => "กลับ",
            MessageKey::FormCalculate => "คำนวณผล",
            MessageKey::FormNamePlaceholder => "เช่น Jinnawat.Finance",
            MessageKey::FormUploadAvatar => "อัปโหลดรูปภาพ",
            MessageKey::FormStartAgePlaceholder => "เช่น 22",
            MessageKey::FormSalaryPlaceholder => "เช่น 30,000",
            MessageKey::FormSalaryUnit => "บาท",
            MessageKey::FormMonthlySavingsPlaceholder => "เช่น 5,000",
            MessageKey::FormMonthlySavingsUnit => "บาท",
            MessageKey::FormRetireAgePlaceholder => "เช่น 60",
            MessageKey::FormMonthlyExpensePlaceholder => "เช่น 20,000",
            MessageKey::FormMonthlyExpenseUnit => "บาท",
            MessageKey::FormLifeExpectancyPlaceholder => "เช่น 80",
            MessageKey::ResultsPerMonth => "เดือนละ",
            MessageKey::ResultsSave => "บันทึก",
            MessageKey::ResultsShare => "แชร์",
            MessageKey::ShareCopied => "คัดลอกแล้ว!",
            MessageKey::DonationTitle => "สนับสนุนนักพัฒนา",
            MessageKey::DonationSubtitle => "หากคุณชอบเครื่องมือนี้ สามารถสนับสนุนการพัฒนาได้",
            MessageKey::DonationPromptpay => "โอนผ่าน PromptPay",
            MessageKey::DonationBank => "ธนาคารกรุงเทพ",
            MessageKey::DonationThanks => "ขอบคุณสำหรับการสนับสนุน!",
            MessageKey::DonationClose => "ปิด",
            MessageKey::CommonClose => "ปิด",
            MessageKey::CommonBaht => "บาท",
            MessageKey::CommonDarkMode => "โหมดมืด",
            MessageKey::CommonLightMode => "โหมดสว่าง",
        };
        Some(text)
    }

    fn en(&self) -> Option<&'static str> {
        let text = match self {
            MessageKey::LandingTitle => "Retirement Planning",
            MessageKey::LandingSubtitle => "Start planning your finances for a secure future",
            MessageKey::LandingWhyTitle => "Why Plan for Retirement?",
            MessageKey::LandingWhyPoint1 => "Inflation increases cost of living over time",
            MessageKey::LandingWhyPoint2 => "Post-retirement income may not be sufficient",
            MessageKey::LandingWhyPoint3 => "Saving from today ensures a secure future",
            MessageKey::LandingWhyPoint4 => "Long-term investments provide good returns",
            MessageKey::LandingCta => "Start Retirement Calculator",
            MessageKey::FormTitle => "Retirement Planning Information",
            MessageKey::FormStep => "Step",
            MessageKey::FormOf => "of",
            MessageKey::FormWhoAreYou => "Who are you?",
            MessageKey::FormYourName => "Your Name",
            MessageKey::FormSelectAvatar => "Select Avatar",
            MessageKey::FormStartAgeLabel => "What age did you start working?",
            MessageKey::FormSalaryLabel => "What is your monthly salary?",
            MessageKey::FormMonthlySavingsLabel => "How much do you save monthly?",
            MessageKey::FormRetireAgeLabel => "At what age will you retire?",
            MessageKey::FormMonthlyExpenseLabel => {
                "How much do you need monthly after retirement?"
            }
            MessageKey::FormLifeExpectancyLabel => "What is your expected lifespan?",
            // Age units are only spelled out in Thai
            MessageKey::FormStartAgeUnit
            | MessageKey::FormRetireAgeUnit
            | MessageKey::FormLifeExpectancyUnit => return None,
            MessageKey::ResultsTitle => "Retirement Planning Results",
            MessageKey::ResultsPlanFor => "Retirement Plan for {{name}}",
            MessageKey::ResultsSummary => "Summary of your retirement planning calculations",
            MessageKey::ResultsWorkPeriod => "Total working period",
            MessageKey::ResultsRetirePeriod => "Life after retirement",
            MessageKey::ResultsYears => "years",
            MessageKey::ResultsMonths => "months",
            MessageKey::ResultsOr => "or",
            MessageKey::ResultsTotalSavings => "Total savings during working period",
            MessageKey::ResultsTotalExpense => "Total expenses needed after retirement",
            MessageKey::ResultsWorking => "Working",
            MessageKey::ResultsRetired => "Retired",
            MessageKey::ResultsTimeline => "Life Timeline",
            MessageKey::ResultsSufficient => "Sufficient!",
            MessageKey::ResultsInsufficient => "Insufficient",
            MessageKey::ResultsSurplus => "You'll have a surplus of {{amount}}",
            MessageKey::ResultsShortfall => "You're short by {{amount}}",
            MessageKey::ShareTitle => "Share Results",
            MessageKey::ShareLink => "Copy Link",
            MessageKey::ShareFacebook => "Share on Facebook",
            MessageKey::ShareLine => "Share on Line",
            MessageKey::ShareMessage => {
                "I just planned my retirement! Check out my calculation results"
            }
            MessageKey::ShareUrlLabel => "Share URL:",
            MessageKey::ValidationStartAge => "Start age must be greater than 0",
            MessageKey::ValidationRetireAge => {
                "Retire age ({{retireAge}}) must be greater than start age ({{startAge}})"
            }
            MessageKey::ValidationLifeExpectancy => {
                "Life expectancy ({{lifeExpectancy}}) must be greater than retire age ({{retireAge}})"
            }
            MessageKey::ValidationNegativeAmount => "{{field}} must not be negative",
            MessageKey::ValidationOverflow => "Numbers are too large to calculate ({{field}})",
            MessageKey::CommonAge => "age",
            MessageKey::CommonYear => "year",
            MessageKey::CommonMonth => "month",
            MessageKey::FormNext => "Next",
            MessageKey::FormBack => "Back",
            MessageKey::FormCalculate => "Calculate",
            MessageKey::FormNamePlaceholder => "e.g. John Doe",
            MessageKey::FormUploadAvatar => "Upload Image",
            MessageKey::FormStartAgePlaceholder => "e.g. 22",
            MessageKey::FormSalaryPlaceholder => "e.g. 1,000",
            MessageKey::FormSalaryUnit => "USD",
            MessageKey::FormMonthlySavingsPlaceholder => "e.g. 200",
            MessageKey::FormMonthlySavingsUnit => "USD",
            MessageKey::FormRetireAgePlaceholder => "e.g. 60",
            MessageKey::FormMonthlyExpensePlaceholder => "e.g. 800",
            MessageKey::FormMonthlyExpenseUnit => "USD",
            MessageKey::FormLifeExpectancyPlaceholder => "e.g. 80",
            MessageKey::ResultsPerMonth => "per month",
            MessageKey::ResultsSave => "Save",
            MessageKey::ResultsShare => "Share",
            MessageKey::ShareCopied => "Copied!",
            MessageKey::DonationTitle => "Support the Developer",
            MessageKey::DonationSubtitle => {
                "If you like this tool, you can support its development"
            }
            MessageKey::DonationPromptpay => "Transfer via PromptPay",
            MessageKey::DonationBank => "Bangkok Bank",
            MessageKey::DonationThanks => "Thank you for your support!",
            MessageKey::DonationClose => "Close",
            MessageKey::CommonClose => "Close",
            MessageKey::CommonBaht => "USD",
            MessageKey::CommonDarkMode => "Dark Mode",
            MessageKey::CommonLightMode => "Light Mode",
        };
        Some(text)
    }
}

/// Looks up the template for `key`, falling back to its dotted id.
pub fn translate(key: MessageKey, locale: Locale) -> &'static str {
    let template = match locale {
        Locale::Th => key.th(),
        Locale::En => key.en(),
    };
    template.unwrap_or_else(|| key.id())
}

/// Translates `key` and replaces every `{{name}}` placeholder found in `params`.
/// Placeholders without a matching parameter are left as-is.
pub fn render(key: MessageKey, locale: Locale, params: &[(&str, &str)]) -> String {
    let mut text = translate(key, locale).to_string();
    for (name, value) in params {
        let placeholder = format!("{{{{{}}}}}", name);
        if text.contains(&placeholder) {
            text = text.replace(&placeholder, value);
        }
    }
    text
}

/// Localized explanation of a rejected plan.
pub fn validation_message(err: &ValidationError, locale: Locale) -> String {
    let key = MessageKey::for_validation(err);
    match err {
        ValidationError::NonPositiveStartAge => render(key, locale, &[]),
        ValidationError::RetireNotAfterStart {
            start_age,
            retire_age,
        } => {
            let start_age = start_age.to_string();
            let retire_age = retire_age.to_string();
            render(
                key,
                locale,
                &[
                    ("startAge", start_age.as_str()),
                    ("retireAge", retire_age.as_str()),
                ],
            )
        }
        ValidationError::LifeNotAfterRetire {
            retire_age,
            life_expectancy,
        } => {
            let retire_age = retire_age.to_string();
            let life_expectancy = life_expectancy.to_string();
            render(
                key,
                locale,
                &[
                    ("retireAge", retire_age.as_str()),
                    ("lifeExpectancy", life_expectancy.as_str()),
                ],
            )
        }
        ValidationError::NegativeAmount { field, .. } | ValidationError::Overflow { field } => {
            render(key, locale, &[("field", *field)])
        }
    }
}
