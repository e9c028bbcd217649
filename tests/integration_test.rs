//! Integration tests for subnet-calc
//!
//! These tests run the public entry point end to end, from input text to rendered output.

use std::net::Ipv4Addr;
use subnet_calc::{
    compute_subnet,
    output::{render, OutputFormat},
    AddressClass, AddressFault, DegenerateRange, SubnetError,
};

#[test]
fn test_default_page_values() {
    let facts = compute_subnet("10.21.150.251", "/24").expect("Failed to compute subnet");

    assert_eq!(facts.network, Ipv4Addr::new(10, 21, 150, 0));
    assert_eq!(facts.mask, Ipv4Addr::new(255, 255, 255, 0));
    assert_eq!(facts.broadcast, Ipv4Addr::new(10, 21, 150, 255));
    assert_eq!(facts.first_host, Some(Ipv4Addr::new(10, 21, 150, 1)));
    assert_eq!(facts.last_host, Some(Ipv4Addr::new(10, 21, 150, 254)));
    assert_eq!(facts.usable_hosts, 254);
    assert_eq!(facts.class, AddressClass::A);
}

#[test]
fn test_small_subnet() {
    let facts = compute_subnet("192.168.1.10", "/30").expect("Failed to compute subnet");

    assert_eq!(facts.network, Ipv4Addr::new(192, 168, 1, 8));
    assert_eq!(facts.broadcast, Ipv4Addr::new(192, 168, 1, 11));
    assert_eq!(facts.first_host, Some(Ipv4Addr::new(192, 168, 1, 9)));
    assert_eq!(facts.last_host, Some(Ipv4Addr::new(192, 168, 1, 10)));
    assert_eq!(facts.usable_hosts, 2);
    assert_eq!(facts.class, AddressClass::C);
}

#[test]
fn test_class_b_sixteen() {
    let facts = compute_subnet("172.16.0.1", "/16").expect("Failed to compute subnet");

    assert_eq!(facts.network, Ipv4Addr::new(172, 16, 0, 0));
    assert_eq!(facts.broadcast, Ipv4Addr::new(172, 16, 255, 255));
    assert_eq!(facts.usable_hosts, 65534);
    assert_eq!(facts.class, AddressClass::B);
}

#[test]
fn test_single_host_is_flagged_not_clamped() {
    let facts = compute_subnet("8.8.8.8", "/32").expect("Degenerate range must still produce facts");

    assert_eq!(facts.network, Ipv4Addr::new(8, 8, 8, 8));
    assert_eq!(facts.broadcast, Ipv4Addr::new(8, 8, 8, 8));
    assert_eq!(facts.usable_hosts, -1);
    assert_eq!(facts.degenerate, Some(DegenerateRange::SingleHost));
    assert_eq!(facts.first_host, None);
    assert_eq!(facts.last_host, None);
}

#[test]
fn test_malformed_address_produces_no_facts() {
    let err = compute_subnet("10.21.150", "/24").expect_err("Three octets must be rejected");

    assert_eq!(
        err,
        SubnetError::MalformedAddress {
            input: "10.21.150".to_string(),
            reason: AddressFault::SegmentCount(3),
        }
    );
}

#[test]
fn test_idempotent_output() {
    for format in [OutputFormat::Table, OutputFormat::Csv, OutputFormat::Json] {
        let first = compute_subnet("10.21.150.251", "/24").unwrap();
        let second = compute_subnet("10.21.150.251", "/24").unwrap();
        assert_eq!(first, second);
        assert_eq!(
            render(&first, format).unwrap(),
            render(&second, format).unwrap(),
            "{format:?} output differs between calls"
        );
    }
}

#[test]
fn test_csv_output_rows() {
    let facts = compute_subnet("192.168.1.10", "30").unwrap();
    let csv = render(&facts, OutputFormat::Csv).unwrap();

    assert_eq!(
        csv,
        [
            r#""property","value""#,
            r#""Network Address","192.168.1.8""#,
            r#""Subnet Mask","255.255.255.252""#,
            r#""Binary Subnet Mask","11111111.11111111.11111111.11111100""#,
            r#""Broadcast Address","192.168.1.11""#,
            r#""First Host","192.168.1.9""#,
            r#""Last Host","192.168.1.10""#,
            r#""Number of Usable Hosts","2""#,
            r#""Network Class","Class C""#,
        ]
        .join("\n")
    );
}
