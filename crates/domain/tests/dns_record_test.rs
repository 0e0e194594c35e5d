use hesiod_tip_domain::{DnsClass, RecordType};

#[test]
fn test_record_type_codes_round_trip() {
    for rt in [
        RecordType::A,
        RecordType::NS,
        RecordType::TXT,
        RecordType::AAAA,
        RecordType::ANY,
    ] {
        assert_eq!(RecordType::from_u16(rt.to_u16()), rt);
    }
}

#[test]
fn test_record_type_unknown_code_is_preserved() {
    let rt = RecordType::from_u16(65);
    assert_eq!(rt, RecordType::Unknown(65));
    assert_eq!(rt.to_u16(), 65);
    assert_eq!(rt.to_string(), "TYPE65");
}

#[test]
fn test_record_type_from_str() {
    assert_eq!("txt".parse::<RecordType>().unwrap(), RecordType::TXT);
    assert_eq!("TYPE16".parse::<RecordType>().unwrap(), RecordType::TXT);
    assert!("BOGUS".parse::<RecordType>().is_err());
}

#[test]
fn test_hesiod_class_code() {
    assert_eq!(DnsClass::HS.to_u16(), 4);
    assert_eq!(DnsClass::from_u16(4), DnsClass::HS);
    assert_eq!(DnsClass::from_u16(1), DnsClass::IN);
    assert_eq!(DnsClass::from_u16(42), DnsClass::Unknown(42));
}

#[test]
fn test_dns_class_from_str() {
    assert_eq!("hs".parse::<DnsClass>().unwrap(), DnsClass::HS);
    assert_eq!("IN".parse::<DnsClass>().unwrap(), DnsClass::IN);
    assert_eq!("CLASS4".parse::<DnsClass>().unwrap(), DnsClass::HS);
    assert!("XX".parse::<DnsClass>().is_err());
}
