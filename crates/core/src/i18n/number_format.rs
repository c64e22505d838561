use super::locale::Locale;

const GROUP_SIZE: usize = 3;

/// Digit-group separator for a locale. `th-TH` and `en-US` both group with commas.
fn group_separator(locale: Locale) -> char {
    match locale {
        Locale::Th | Locale::En => ',',
    }
}

/// Formats an integer with the locale's digit grouping, e.g. `-2520000` → `-2,520,000`.
pub fn format_number(value: i64, locale: Locale) -> String {
    let separator = group_separator(locale);
    // unsigned_abs keeps i64::MIN representable
    let digits = value.unsigned_abs().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / GROUP_SIZE + 1);
    if value < 0 {
        out.push('-');
    }
    let lead = digits.len() % GROUP_SIZE;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + GROUP_SIZE - lead) % GROUP_SIZE == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Formats an amount followed by the locale's currency unit.
pub fn format_amount(value: i64, locale: Locale) -> String {
    format!("{} {}", format_number(value, locale), locale.currency_unit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers_are_not_grouped() {
        assert_eq!(format_number(0, Locale::En), "0");
        assert_eq!(format_number(7, Locale::Th), "7");
        assert_eq!(format_number(999, Locale::En), "999");
        assert_eq!(format_number(-999, Locale::En), "-999");
    }

    #[test]
    fn test_grouping_by_thousands() {
        assert_eq!(format_number(1_000, Locale::En), "1,000");
        assert_eq!(format_number(456, Locale::Th), "456");
        assert_eq!(format_number(2_280_000, Locale::Th), "2,280,000");
        assert_eq!(format_number(12_345_678, Locale::En), "12,345,678");
        assert_eq!(format_number(-2_520_000, Locale::En), "-2,520,000");
    }

    #[test]
    fn test_extreme_values() {
        assert_eq!(format_number(i64::MAX, Locale::En), "9,223,372,036,854,775,807");
        assert_eq!(format_number(i64::MIN, Locale::Th), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_format_amount_appends_currency_unit() {
        assert_eq!(format_amount(4_800_000, Locale::Th), "4,800,000 บาท");
        assert_eq!(format_amount(1_200_000, Locale::En), "1,200,000 USD");
    }
}
