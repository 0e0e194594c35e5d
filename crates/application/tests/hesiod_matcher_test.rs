use hesiod_tip_application::use_cases::hesiod::{CHAIN_NAME, HASH_NAME, HEIGHT_NAME, TIME_NAME};
use hesiod_tip_application::use_cases::HesiodMatcher;
use hesiod_tip_domain::{DnsClass, HesiodField, HesiodQuestion, MatchResult, RecordType};

fn hs_txt(name: &str) -> HesiodQuestion {
    HesiodQuestion::new(name, DnsClass::HS, RecordType::TXT)
}

#[test]
fn test_reserved_names_request_documented_fields() {
    let cases: [(&str, &[HesiodField]); 4] = [
        (HASH_NAME, &[HesiodField::Hash]),
        (HEIGHT_NAME, &[HesiodField::Height]),
        (TIME_NAME, &[HesiodField::Time]),
        (
            CHAIN_NAME,
            &[HesiodField::Hash, HesiodField::Height, HesiodField::Time],
        ),
    ];

    for (name, expected) in cases {
        let result = HesiodMatcher::match_question(&hs_txt(name));
        assert_eq!(result.requested(), expected, "name {}", name);
    }
}

#[test]
fn test_reserved_names_match_case_insensitively() {
    for name in ["HASH.TIP.CHAIN.HNSD.", "Chain.Hnsd.", "time.TIP.chain.hnsd."] {
        assert!(HesiodMatcher::match_question(&hs_txt(name)).is_match(), "{}", name);
    }
}

#[test]
fn test_internet_class_falls_through() {
    let q = HesiodQuestion::new(HASH_NAME, DnsClass::IN, RecordType::TXT);
    assert_eq!(HesiodMatcher::match_question(&q), MatchResult::NoMatch);
}

#[test]
fn test_non_txt_type_falls_through() {
    for rt in [RecordType::A, RecordType::AAAA, RecordType::ANY, RecordType::Unknown(99)] {
        let q = HesiodQuestion::new(CHAIN_NAME, DnsClass::HS, rt);
        assert_eq!(HesiodMatcher::match_question(&q), MatchResult::NoMatch, "{}", rt);
    }
}

#[test]
fn test_any_class_falls_through() {
    let q = HesiodQuestion::new(CHAIN_NAME, DnsClass::ANY, RecordType::TXT);
    assert_eq!(HesiodMatcher::match_question(&q), MatchResult::NoMatch);
}

#[test]
fn test_names_near_the_reserved_set_do_not_match() {
    for name in [
        "hash.tip.chain.hnsd",
        "chain.hnsd",
        "tip.chain.hnsd.",
        "hnsd.",
        "foo.chain.hnsd.",
        "xhash.tip.chain.hnsd.",
        "hash.tip.chain.hnsd.example.",
        "hash..tip.chain.hnsd.",
        "example.com.",
        "",
    ] {
        assert_eq!(
            HesiodMatcher::match_question(&hs_txt(name)),
            MatchResult::NoMatch,
            "{:?} should not match",
            name
        );
    }
}
