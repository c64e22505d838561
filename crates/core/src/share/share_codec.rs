use log::warn;
use std::collections::BTreeMap;

use crate::constants::*;
use crate::plan::PlanInput;

pub const KEY_NAME: &str = "name";
pub const KEY_AVATAR: &str = "avatar";
pub const KEY_START_AGE: &str = "startAge";
pub const KEY_SALARY: &str = "salary";
pub const KEY_MONTHLY_SAVINGS: &str = "monthlySavings";
pub const KEY_RETIRE_AGE: &str = "retireAge";
pub const KEY_MONTHLY_EXPENSE: &str = "monthlyExpense";
pub const KEY_LIFE_EXPECTANCY: &str = "lifeExpectancy";

/// Every key a plan is encoded under.
pub const PLAN_KEYS: [&str; 8] = [
    KEY_NAME,
    KEY_AVATAR,
    KEY_START_AGE,
    KEY_SALARY,
    KEY_MONTHLY_SAVINGS,
    KEY_RETIRE_AGE,
    KEY_MONTHLY_EXPENSE,
    KEY_LIFE_EXPECTANCY,
];

/// Flattens a plan into one entry per field. Numbers are base-10; name and
/// avatar are passed through unescaped.
pub fn encode(input: &PlanInput) -> BTreeMap<String, String> {
    [
        (KEY_NAME, input.display_name.clone()),
        (KEY_AVATAR, input.avatar_ref.clone()),
        (KEY_START_AGE, input.start_age.to_string()),
        (KEY_SALARY, input.monthly_salary.to_string()),
        (KEY_MONTHLY_SAVINGS, input.monthly_savings.to_string()),
        (KEY_RETIRE_AGE, input.retire_age.to_string()),
        (KEY_MONTHLY_EXPENSE, input.monthly_expense.to_string()),
        (KEY_LIFE_EXPECTANCY, input.life_expectancy.to_string()),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value))
    .collect()
}

/// Rebuilds a plan from key/value pairs. Never fails.
///
/// A missing key or an unparseable value takes the field's default. Keys are
/// case-sensitive and unknown keys are ignored; for a repeated key the first
/// occurrence wins. Cross-field ordering is not checked here.
pub fn decode<I, K, V>(fields: I) -> PlanInput
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let fields = first_values(fields);
    let text = |key: &str, default: &str| -> String {
        fields
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    };

    PlanInput {
        display_name: text(KEY_NAME, DEFAULT_DISPLAY_NAME),
        avatar_ref: text(KEY_AVATAR, DEFAULT_AVATAR),
        start_age: number(&fields, KEY_START_AGE, DEFAULT_START_AGE),
        monthly_salary: number(&fields, KEY_SALARY, DEFAULT_MONTHLY_SALARY),
        monthly_savings: number(&fields, KEY_MONTHLY_SAVINGS, DEFAULT_MONTHLY_SAVINGS),
        retire_age: number(&fields, KEY_RETIRE_AGE, DEFAULT_RETIRE_AGE),
        monthly_expense: number(&fields, KEY_MONTHLY_EXPENSE, DEFAULT_MONTHLY_EXPENSE),
        life_expectancy: number(&fields, KEY_LIFE_EXPECTANCY, DEFAULT_LIFE_EXPECTANCY),
    }
}

/// A link only counts as a shared result when it carries a start age.
pub fn is_shared_plan<I, K, V>(fields: I) -> bool
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    fields
        .into_iter()
        .any(|(key, _)| key.as_ref() == KEY_START_AGE)
}

fn first_values<I, K, V>(fields: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut map = BTreeMap::new();
    for (key, value) in fields {
        map.entry(key.as_ref().to_string())
            .or_insert_with(|| value.as_ref().to_string());
    }
    map
}

fn number<T>(fields: &BTreeMap<String, String>, key: &str, default: T) -> T
where
    T: TryFrom<i64> + Copy,
{
    let Some(raw) = fields.get(key) else {
        return default;
    };
    match parse_leading_int(raw).and_then(|n| T::try_from(n).ok()) {
        Some(value) => value,
        None => {
            warn!("Shared link field '{}' has unusable value {:?}, using default", key, raw);
            default
        }
    }
}

/// Integer parsing in the manner of a browser's `parseInt(s)` without a radix:
/// leading whitespace is skipped, an optional sign is read, a `0x`/`0X` prefix
/// switches to hexadecimal, then as many digits as follow are taken. Trailing
/// text is ignored. Returns `None` when no digit is found or the digits do not
/// fit in an `i64`.
pub(crate) fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let digits_len = rest
        .bytes()
        .take_while(|b| char::from(*b).is_digit(radix))
        .count();
    if digits_len == 0 {
        return None;
    }
    let digits = &rest[..digits_len];
    let magnitude = i128::from_str_radix(digits, radix).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}
