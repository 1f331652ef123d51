//! Integration tests for subnet-calc
//!
//! These tests exercise the public API from validation through resolution.

use std::net::Ipv4Addr;
use subnet_calc::models::{
    is_valid_ipv4, mask_for_prefix, to_address, to_integer, wildcard_mask, AddressType,
    MAX_LENGTH,
};
use subnet_calc::processing::{
    address_type, calculate_subnet, common_prefixes, total_steps, troubleshooting_categories,
    try_calculate_subnet,
};

const SAMPLE_ADDRESSES: [&str; 8] = [
    "0.0.0.0",
    "10.0.0.5",
    "127.0.0.1",
    "128.0.0.0",
    "172.16.0.1",
    "192.168.1.100",
    "203.0.113.77",
    "255.255.255.255",
];

#[test]
fn test_literal_scenarios() {
    let r = calculate_subnet("192.168.1.100", 24);
    assert_eq!(r.network_address.to_string(), "192.168.1.0");
    assert_eq!(r.broadcast_address.to_string(), "192.168.1.255");
    assert_eq!(r.first_host.to_string(), "192.168.1.1");
    assert_eq!(r.last_host.to_string(), "192.168.1.254");
    assert_eq!(r.usable_hosts, 254);
    assert_eq!(r.total_hosts, 256);
    assert_eq!(r.subnet_mask.to_string(), "255.255.255.0");
    assert_eq!(r.wildcard_mask.to_string(), "0.0.0.255");

    let r = calculate_subnet("10.0.0.5", 31);
    assert_eq!(r.network_address.to_string(), "10.0.0.4");
    assert_eq!(r.broadcast_address.to_string(), "10.0.0.5");
    assert_eq!(r.first_host.to_string(), "10.0.0.4");
    assert_eq!(r.last_host.to_string(), "10.0.0.5");
    assert_eq!(r.usable_hosts, 2);

    let r = calculate_subnet("10.0.0.5", 32);
    assert_eq!(r.network_address.to_string(), "10.0.0.5");
    assert_eq!(r.broadcast_address.to_string(), "10.0.0.5");
    assert_eq!(r.first_host, r.last_host);
    assert_eq!(r.first_host.to_string(), "10.0.0.5");
    assert_eq!(r.usable_hosts, 1);

    let r = calculate_subnet("172.16.0.1", 0);
    assert_eq!(r.network_address.to_string(), "0.0.0.0");
    assert_eq!(r.broadcast_address.to_string(), "255.255.255.255");
    assert_eq!(r.total_hosts, 4294967296);

    assert_eq!(address_type("192.168.1.1"), AddressType::Private);
    assert_eq!(address_type("127.0.0.1"), AddressType::Loopback);
    assert_eq!(address_type("8.8.8.8"), AddressType::Public);

    assert!(!is_valid_ipv4("256.1.1.1"));
    assert!(is_valid_ipv4("192.168.1.1"));
}

#[test]
fn test_address_round_trip() {
    for ip in SAMPLE_ADDRESSES {
        assert_eq!(to_address(to_integer(ip)), ip);
        assert_eq!(to_integer(ip), u32::from(ip.parse::<Ipv4Addr>().unwrap()));
    }
}

#[test]
fn test_network_contains_address_for_every_prefix() {
    for ip in SAMPLE_ADDRESSES {
        let addr = to_integer(ip);
        for p in 0..=MAX_LENGTH {
            let r = calculate_subnet(ip, p);
            let network = u32::from(r.network_address);
            let broadcast = u32::from(r.broadcast_address);
            assert!(network <= addr && addr <= broadcast, "{ip}/{p}");
            assert!(u32::from(r.first_host) <= u32::from(r.last_host), "{ip}/{p}");
            assert!(network <= u32::from(r.first_host), "{ip}/{p}");
            assert!(u32::from(r.last_host) <= broadcast, "{ip}/{p}");
            assert_eq!(broadcast - network, (r.total_hosts - 1) as u32, "{ip}/{p}");
            assert_eq!(u32::from(r.subnet_mask), mask_for_prefix(p));
            assert_eq!(
                r.wildcard_mask.to_string(),
                wildcard_mask(&r.subnet_mask.to_string())
            );
        }
    }
}

#[test]
fn test_mask_has_prefix_leading_ones() {
    for p in 0..=MAX_LENGTH {
        let mask = mask_for_prefix(p);
        assert_eq!(mask.leading_ones(), p as u32);
        assert_eq!(mask.trailing_zeros(), 32 - p as u32);
    }
}

#[test]
fn test_resolve_is_idempotent() {
    for ip in SAMPLE_ADDRESSES {
        for p in [0, 1, 8, 24, 30, 31, 32] {
            assert_eq!(calculate_subnet(ip, p), calculate_subnet(ip, p));
        }
    }
}

#[test]
fn test_leading_zeros_are_normalized() {
    let r = try_calculate_subnet("192.168.001.010", 24).unwrap();
    assert_eq!(r.ip_address, Ipv4Addr::new(192, 168, 1, 10));
    assert_eq!(r, calculate_subnet("192.168.1.10", 24));
}

#[test]
fn test_calculations_across_threads() {
    let handles: Vec<_> = SAMPLE_ADDRESSES
        .into_iter()
        .map(|ip| std::thread::spawn(move || calculate_subnet(ip, 20)))
        .collect();
    for (handle, ip) in handles.into_iter().zip(SAMPLE_ADDRESSES) {
        assert_eq!(handle.join().unwrap(), calculate_subnet(ip, 20));
    }
}

#[test]
fn test_guide_and_reference_tables() {
    let categories = troubleshooting_categories().expect("guide should load");
    assert!(!categories.is_empty());
    assert_eq!(
        total_steps().unwrap(),
        categories.iter().map(|c| c.steps.len()).sum::<usize>()
    );
    let labels: Vec<String> = common_prefixes().into_iter().map(|p| p.label).collect();
    assert!(labels.contains(&"/28 - 14 hosts".to_string()));
}
