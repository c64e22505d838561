use serde::Serialize;

use crate::i18n::{format_amount, format_number, render, translate, Locale, MessageKey};
use crate::plan::PlanInput;
use crate::projection::ProjectionResult;
use crate::theme::Theme;

const TIMELINE_WIDTH: u32 = 20;

/// A duration shown in years with its month equivalent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodLine {
    pub label: String,
    pub years: String,
    pub months: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountLine {
    pub label: String,
    pub value: String,
}

/// Start, retirement and end of life with the working share of that span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub title: String,
    pub start: String,
    pub retire: String,
    pub end: String,
    pub progress_percent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub is_sufficient: bool,
    pub headline: String,
    pub detail: String,
}

/// Every piece of text on the result card, already localized and formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub locale: Locale,
    pub theme_class: Option<String>,
    pub avatar: String,
    pub heading: String,
    pub title: String,
    pub work_period: PeriodLine,
    pub retire_period: PeriodLine,
    pub timeline: Timeline,
    pub total_savings: AmountLine,
    pub total_expenses: AmountLine,
    pub verdict: Verdict,
}

impl ResultSummary {
    pub fn build(
        plan: &PlanInput,
        projection: &ProjectionResult,
        locale: Locale,
        theme: Option<Theme>,
    ) -> Self {
        let name = plan.display_name_or_default();
        let t = |key: MessageKey| translate(key, locale);

        let period = |label: MessageKey, years: u32, months: u32| PeriodLine {
            label: t(label).to_string(),
            years: format!("{} {}", years, t(MessageKey::ResultsYears)),
            months: format!(
                "{} {} {}",
                t(MessageKey::ResultsOr),
                format_number(i64::from(months), locale),
                t(MessageKey::ResultsMonths)
            ),
        };
        let age = |value: u32| {
            format!(
                "{} {} {}",
                t(MessageKey::CommonAge),
                value,
                t(MessageKey::CommonYear)
            )
        };

        let verdict = if projection.is_sufficient {
            let amount = format_amount(projection.balance, locale);
            Verdict {
                is_sufficient: true,
                headline: format!("✅ {}", t(MessageKey::ResultsSufficient)),
                detail: render(
                    MessageKey::ResultsSurplus,
                    locale,
                    &[("amount", amount.as_str())],
                ),
            }
        } else {
            let amount = format_amount(projection.balance.saturating_abs(), locale);
            Verdict {
                is_sufficient: false,
                headline: format!("⚠️ {}", t(MessageKey::ResultsInsufficient)),
                detail: render(
                    MessageKey::ResultsShortfall,
                    locale,
                    &[("amount", amount.as_str())],
                ),
            }
        };

        ResultSummary {
            locale,
            theme_class: theme.map(|theme| theme.css_class().to_string()),
            avatar: plan.avatar_or_default().to_string(),
            heading: render(MessageKey::ResultsPlanFor, locale, &[("name", name)]),
            title: render(MessageKey::ResultsSummary, locale, &[("name", name)]),
            work_period: period(
                MessageKey::ResultsWorkPeriod,
                projection.working_years,
                projection.working_months,
            ),
            retire_period: period(
                MessageKey::ResultsRetirePeriod,
                projection.retirement_years,
                projection.retirement_months,
            ),
            timeline: Timeline {
                title: t(MessageKey::ResultsTimeline).to_string(),
                start: age(plan.start_age),
                retire: age(plan.retire_age),
                end: age(plan.life_expectancy),
                progress_percent: projection.working_progress_percent,
            },
            total_savings: AmountLine {
                label: t(MessageKey::ResultsTotalSavings).to_string(),
                value: format_amount(projection.total_savings, locale),
            },
            total_expenses: AmountLine {
                label: t(MessageKey::ResultsTotalExpense).to_string(),
                value: format_amount(projection.total_expenses, locale),
            },
            verdict,
        }
    }

    /// Plain-text rendering, one card section per block.
    pub fn to_text(&self) -> String {
        let filled = self.timeline.progress_percent.min(100) * TIMELINE_WIDTH / 100;
        let bar = format!(
            "[{}{}] {}%",
            "#".repeat(filled as usize),
            "-".repeat((TIMELINE_WIDTH - filled) as usize),
            self.timeline.progress_percent
        );

        let lines = [
            self.heading.clone(),
            self.title.clone(),
            String::new(),
            format!(
                "{}: {} ({})",
                self.work_period.label, self.work_period.years, self.work_period.months
            ),
            format!(
                "{}: {} ({})",
                self.retire_period.label, self.retire_period.years, self.retire_period.months
            ),
            String::new(),
            self.timeline.title.clone(),
            bar,
            format!(
                "{} | {} | {}",
                self.timeline.start, self.timeline.retire, self.timeline.end
            ),
            String::new(),
            format!("{}: {}", self.total_savings.label, self.total_savings.value),
            format!("{}: {}", self.total_expenses.label, self.total_expenses.value),
            String::new(),
            self.verdict.headline.clone(),
            self.verdict.detail.clone(),
        ];
        lines.join("\n")
    }
}
