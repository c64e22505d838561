//! Tests for the shared-link codec and share URLs.

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use url::Url;

    use crate::i18n::Locale;
    use crate::plan::PlanInput;
    use crate::share::share_codec::parse_leading_int;
    use crate::share::{decode, encode, is_shared_plan, ShareLink, SocialNetwork, PLAN_KEYS};

    fn create_test_plan() -> PlanInput {
        PlanInput {
            display_name: "Jinnawat.Finance".to_string(),
            avatar_ref: "/avatar/Maria.png".to_string(),
            start_age: 25,
            monthly_salary: 45_000,
            monthly_savings: 10_000,
            retire_age: 65,
            monthly_expense: 15_000,
            life_expectancy: 85,
        }
    }

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // ==================== encode ====================

    #[test]
    fn test_encode_emits_one_entry_per_field() {
        let fields = encode(&create_test_plan());
        assert_eq!(fields.len(), PLAN_KEYS.len());
        for key in PLAN_KEYS {
            assert!(fields.contains_key(key), "missing key {}", key);
        }
        assert_eq!(fields["name"], "Jinnawat.Finance");
        assert_eq!(fields["avatar"], "/avatar/Maria.png");
        assert_eq!(fields["startAge"], "25");
        assert_eq!(fields["salary"], "45000");
        assert_eq!(fields["monthlySavings"], "10000");
        assert_eq!(fields["retireAge"], "65");
        assert_eq!(fields["monthlyExpense"], "15000");
        assert_eq!(fields["lifeExpectancy"], "85");
    }

    #[test]
    fn test_decode_reverses_encode() {
        let plan = create_test_plan();
        assert_eq!(decode(&encode(&plan)), plan);

        let mut unnamed = plan;
        unnamed.display_name.clear();
        assert_eq!(decode(&encode(&unnamed)), unnamed);
    }

    // ==================== decode defaults ====================

    #[test]
    fn test_decode_empty_map_yields_defaults() {
        let plan = decode(BTreeMap::<String, String>::new());
        assert_eq!(plan.start_age, 22);
        assert_eq!(plan.retire_age, 60);
        assert_eq!(plan.life_expectancy, 80);
        assert_eq!(plan.monthly_savings, 5_000);
        assert_eq!(plan.monthly_expense, 20_000);
        assert_eq!(plan.monthly_salary, 30_000);
        assert_eq!(plan.display_name, "Anonymous");
        assert_eq!(plan.avatar_ref, "/avatar/Tisha.png");
        assert_eq!(plan, PlanInput::default());
    }

    #[test]
    fn test_decode_garbage_values_fall_back_per_field() {
        let plan = decode(pairs(&[
            ("startAge", "abc"),
            ("retireAge", "-5"),
            ("lifeExpectancy", ""),
            ("monthlySavings", "99999999999999999999999"),
            ("monthlyExpense", "12000"),
        ]));
        assert_eq!(plan.start_age, 22);
        assert_eq!(plan.retire_age, 60);
        assert_eq!(plan.life_expectancy, 80);
        assert_eq!(plan.monthly_savings, 5_000);
        assert_eq!(plan.monthly_expense, 12_000);
    }

    #[test]
    fn test_decode_reads_leading_digits() {
        let plan = decode(pairs(&[
            ("startAge", " 23 years"),
            ("retireAge", "61.9"),
            ("salary", "+40000"),
            ("monthlyExpense", "-100"),
        ]));
        assert_eq!(plan.start_age, 23);
        assert_eq!(plan.retire_age, 61);
        assert_eq!(plan.monthly_salary, 40_000);
        // Negative amounts decode as-is and are rejected by validation
        assert_eq!(plan.monthly_expense, -100);
        assert!(plan.validate().is_err());
    }

    #[test]
    fn test_decode_keys_are_case_sensitive() {
        let plan = decode(pairs(&[("startage", "30"), ("RetireAge", "50")]));
        assert_eq!(plan.start_age, 22);
        assert_eq!(plan.retire_age, 60);
    }

    #[test]
    fn test_decode_first_duplicate_wins() {
        let plan = decode(pairs(&[("startAge", "30"), ("startAge", "40")]));
        assert_eq!(plan.start_age, 30);
    }

    #[test]
    fn test_decode_does_not_check_ordering() {
        let plan = decode(pairs(&[("startAge", "70"), ("retireAge", "60")]));
        assert_eq!((plan.start_age, plan.retire_age), (70, 60));
        assert!(plan.validate().is_err());
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  -7x"), Some(-7));
        assert_eq!(parse_leading_int("3e5"), Some(3));
        assert_eq!(parse_leading_int("x3"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("๒๒"), None);
        assert_eq!(parse_leading_int(&i64::MIN.to_string()), Some(i64::MIN));
        assert_eq!(parse_leading_int("9223372036854775808"), None);
    }

    #[test]
    fn test_parse_leading_int_reads_hex_prefix() {
        assert_eq!(parse_leading_int("0x10"), Some(16));
        assert_eq!(parse_leading_int(" -0X1fzz"), Some(-31));
        assert_eq!(parse_leading_int("0x"), None);
        assert_eq!(parse_leading_int("0xg"), None);
        assert_eq!(parse_leading_int("010"), Some(10));
    }

    #[test]
    fn test_decode_hex_age() {
        let plan = decode(pairs(&[("startAge", "0x10")]));
        assert_eq!(plan.start_age, 16);
    }

    #[test]
    fn test_is_shared_plan_requires_start_age() {
        assert!(is_shared_plan(pairs(&[("startAge", "")])));
        assert!(!is_shared_plan(pairs(&[("retireAge", "60"), ("lang", "en")])));
        assert!(!is_shared_plan(Vec::<(String, String)>::new()));
    }

    // ==================== ShareLink ====================

    #[test]
    fn test_share_link_round_trip() {
        let base = Url::parse("https://retire.example.com/?ref=old#top").unwrap();
        let plan = PlanInput {
            display_name: "สมชาย & Co".to_string(),
            ..create_test_plan()
        };
        let link = ShareLink::new(&base, &plan, Locale::En);

        assert!(link.as_str().starts_with("https://retire.example.com/?"));
        assert!(!link.as_str().contains("ref=old"));
        assert!(!link.as_str().contains('#'));
        assert!(link.as_str().contains("lang=en"));

        let reparsed = ShareLink::parse(link.as_str()).unwrap();
        let shared = reparsed.shared_plan().unwrap();
        assert_eq!(shared.plan, plan);
        assert_eq!(shared.locale, Some(Locale::En));
    }

    #[test]
    fn test_share_link_leaves_out_uploaded_avatar() {
        let base = Url::parse("https://retire.example.com/").unwrap();
        let plan = PlanInput {
            avatar_ref: format!("data:image/png;base64,{}", "A".repeat(4096)),
            ..create_test_plan()
        };
        let link = ShareLink::new(&base, &plan, Locale::Th);

        assert!(!link.as_str().contains("avatar="));
        assert!(link.as_str().len() < 512);
        let shared = link.shared_plan().unwrap();
        assert_eq!(shared.plan.avatar_ref, "/avatar/Tisha.png");
        assert_eq!(shared.plan.display_name, plan.display_name);
        assert_eq!(shared.plan.start_age, plan.start_age);
    }

    #[test]
    fn test_share_link_keeps_builtin_and_empty_avatar() {
        let base = Url::parse("https://retire.example.com/").unwrap();
        let builtin = create_test_plan();
        let shared = ShareLink::new(&base, &builtin, Locale::En).shared_plan().unwrap();
        assert_eq!(shared.plan.avatar_ref, "/avatar/Maria.png");

        let empty = PlanInput {
            avatar_ref: String::new(),
            ..create_test_plan()
        };
        let shared = ShareLink::new(&base, &empty, Locale::En).shared_plan().unwrap();
        assert_eq!(shared.plan, empty);
    }

    #[test]
    fn test_share_link_without_start_age_is_not_a_shared_plan() {
        let link = ShareLink::parse("https://retire.example.com/?lang=th").unwrap();
        assert!(link.shared_plan().is_none());
    }

    #[test]
    fn test_share_link_with_unknown_lang() {
        let link = ShareLink::parse("https://retire.example.com/?startAge=30&lang=fr").unwrap();
        let shared = link.shared_plan().unwrap();
        assert_eq!(shared.locale, None);
        assert_eq!(shared.plan.start_age, 30);
        assert_eq!(shared.plan.display_name, "Anonymous");
    }

    #[test]
    fn test_share_link_rejects_malformed_url() {
        assert!(ShareLink::parse("not a url").is_err());
    }

    #[test]
    fn test_social_share_urls() {
        let link = "https://retire.example.com/?startAge=22&lang=en";

        let facebook = SocialNetwork::Facebook.share_url(link, Locale::En);
        assert!(facebook.starts_with("https://www.facebook.com/sharer/sharer.php?u="));
        let parsed = Url::parse(&facebook).unwrap();
        let query: BTreeMap<String, String> = parsed.query_pairs().into_owned().collect();
        assert_eq!(query["u"], link);
        assert_eq!(
            query["quote"],
            "I just planned my retirement! Check out my calculation results"
        );

        let line = SocialNetwork::Line.share_url(link, Locale::Th);
        let parsed = Url::parse(&line).unwrap();
        assert_eq!(parsed.host_str(), Some("social-plugins.line.me"));
        let query: BTreeMap<String, String> = parsed.query_pairs().into_owned().collect();
        assert_eq!(query["url"], link);
        assert_eq!(query["text"], "ฉันได้วางแผนเกษียณแล้ว! มาดูผลการคำนวณของฉัน");
    }

    #[test]
    fn test_social_network_parsing() {
        assert_eq!("Facebook".parse::<SocialNetwork>().unwrap(), SocialNetwork::Facebook);
        assert_eq!("line".parse::<SocialNetwork>().unwrap(), SocialNetwork::Line);
        assert!("twitter".parse::<SocialNetwork>().is_err());
        assert_eq!(SocialNetwork::Line.label(Locale::En), "Share on Line");
    }
}
