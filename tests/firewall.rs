//! Behavioral tests for the address allowlist.

use config_writer::firewall::{AddressAllowlist, Decision, DenyReason};
use proptest::prelude::*;

const RANGES: &str = "10.0.0.0/8,192.168.0.0/24,::/1";

const PREFIXES: [&str; 3] = ["10.0.0.0/8", "192.168.0.0/24", "::/1"];

const PROBES: [&str; 12] = [
    "10.1.2.3:34",
    "127.0.0.1:1234",
    "[::10]:4",
    "[8fff::]:40",
    "[::1]:4",
    "192.168.0.77:443",
    "192.168.1.77:443",
    "8.8.8.8.1:234",
    ":80",
    "10.0.0.0",
    "not-an-address",
    "[::ffff:10.1.2.3]:80",
];

fn outcomes(fw: &AddressAllowlist) -> Vec<bool> {
    PROBES.iter().map(|probe| fw.is_authorized(probe)).collect()
}

#[test]
fn test_bad_ranges() {
    let fw = AddressAllowlist::new("1/2");
    assert!(fw.is_err());
}

#[test]
fn test_zero_padded_prefix_length() {
    assert!(AddressAllowlist::new("10.0.0.0/08").is_err());
    assert!(AddressAllowlist::new("2001:db8::/032").is_err());
    assert!(AddressAllowlist::new("10.0.0.0/8").is_ok());
}

#[test]
fn test_allow_if_no_ranges() {
    let fw = AddressAllowlist::new("").unwrap();
    assert!(fw.is_permit_all());
    assert!(fw.is_authorized("127.0.0.1:1234"));
    assert!(fw.is_authorized("8.8.8.8.1:234"));
    assert!(fw.is_authorized("10.1.2.3:34"));
    assert!(fw.is_authorized("[::1]:4"));
}

#[test]
fn test_with_ranges() {
    let fw = AddressAllowlist::new(RANGES).unwrap();
    assert!(!fw.is_authorized("127.0.0.1:1234"));
    assert!(!fw.is_authorized("8.8.8.8.1:234"));
    assert!(fw.is_authorized("10.1.2.3:34"));
    assert!(fw.is_authorized("[::10]:4"));
    assert!(!fw.is_authorized("[8fff::]:40"));
}

#[test]
fn test_malformed_addresses() {
    let fw = AddressAllowlist::new("").unwrap();
    assert!(fw.is_authorized(":80"), "no IP address");
    assert!(fw.is_authorized("8.8.8.8"), "no port");
    assert!(fw.is_authorized("not-an-address"));

    let fw = AddressAllowlist::new(RANGES).unwrap();
    assert!(!fw.is_authorized(":80"), "no IP address");
    assert!(!fw.is_authorized("10.0.0.0"), "no port");
    assert!(!fw.is_authorized("[::1:80"), "bracket mismatch");
    assert!(!fw.is_authorized("::1:80"), "unbracketed IPv6");
    assert!(!fw.is_authorized("10.1.2.3:99999"), "port out of range");
    assert!(!fw.is_authorized(""));
}

#[test]
fn test_ipv4_never_matches_ipv6_prefix() {
    let fw = AddressAllowlist::new("::/0").unwrap();
    assert!(fw.is_authorized("[2001:db8::1]:80"));
    assert_eq!(
        fw.evaluate("10.1.2.3:80"),
        Decision::Denied(DenyReason::NotInAllowedPrefix)
    );
}

#[test]
fn test_ipv6_never_matches_ipv4_prefix() {
    let fw = AddressAllowlist::new("0.0.0.0/0").unwrap();
    assert!(fw.is_authorized("203.0.113.9:80"));
    assert!(!fw.is_authorized("[::1]:80"));
}

#[test]
fn test_ipv4_mapped_ipv6_is_not_unmapped() {
    let fw = AddressAllowlist::new("10.0.0.0/8").unwrap();
    assert!(!fw.is_authorized("[::ffff:10.1.2.3]:80"));

    let fw = AddressAllowlist::new("::ffff:0:0/96").unwrap();
    assert!(fw.is_authorized("[::ffff:10.1.2.3]:80"));
    assert!(!fw.is_authorized("10.1.2.3:80"));
}

#[test]
fn test_repeated_calls_are_stable() {
    let fw = AddressAllowlist::new(RANGES).unwrap();
    let first = outcomes(&fw);
    for _ in 0..5 {
        assert_eq!(outcomes(&fw), first);
    }
}

#[test]
fn test_shared_across_threads() {
    let fw = std::sync::Arc::new(AddressAllowlist::new(RANGES).unwrap());
    let expected = outcomes(&fw);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let fw = std::sync::Arc::clone(&fw);
            std::thread::spawn(move || outcomes(&fw))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

fn arb_separator() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(","),
        Just(" "),
        Just(", "),
        Just(" , "),
        Just("\t"),
        Just(",,"),
        Just("\n"),
    ]
}

proptest! {
    /// Property: any mix of separators and any prefix order yields the same decisions
    #[test]
    fn proptest_separator_and_order_invariance(
        order in Just(PREFIXES.to_vec()).prop_shuffle(),
        separators in prop::collection::vec(arb_separator(), 2),
        leading in arb_separator(),
        trailing in arb_separator(),
    ) {
        let mut raw = String::from(leading);
        raw.push_str(order[0]);
        raw.push_str(separators[0]);
        raw.push_str(order[1]);
        raw.push_str(separators[1]);
        raw.push_str(order[2]);
        raw.push_str(trailing);

        let baseline = AddressAllowlist::new(RANGES).unwrap();
        let fw = AddressAllowlist::new(&raw).unwrap();

        prop_assert_eq!(fw.prefixes().len(), 3);
        prop_assert_eq!(outcomes(&fw), outcomes(&baseline));
    }

    /// Property: decisions never panic and are repeatable for arbitrary input
    #[test]
    fn proptest_arbitrary_input_is_stable(raw in ".{0,40}") {
        let fw = AddressAllowlist::new(RANGES).unwrap();
        let first = fw.is_authorized(&raw);
        prop_assert_eq!(fw.is_authorized(&raw), first);

        let open = AddressAllowlist::new("").unwrap();
        prop_assert!(open.is_authorized(&raw));
    }

    /// Property: every IPv4 address inside 10.0.0.0/8 is authorized on any port
    #[test]
    fn proptest_ten_slash_eight(b in any::<u8>(), c in any::<u8>(), d in any::<u8>(), port in any::<u16>()) {
        let fw = AddressAllowlist::new(RANGES).unwrap();
        let raw = format!("10.{}.{}.{}:{}", b, c, d, port);
        prop_assert!(fw.is_authorized(&raw));
    }
}
