//! Subnet resolution.
//!
//! Turns an address and prefix length into a [`SubnetResult`].

use super::classify::{class_of, type_of};
use crate::models::{
    binary_grouped_mask, broadcast_addr, is_valid_ipv4, mask_for_prefix, network_addr,
    to_integer, SubnetResult, MAX_LENGTH,
};
use colored::Colorize;
use std::error::Error;
use std::net::Ipv4Addr;

/// Total number of addresses in a subnet, 2^(32 - prefix).
///
/// # Examples
/// ```
/// use subnet_calc::processing::total_hosts;
/// assert_eq!(total_hosts(0), 4_294_967_296);
/// assert_eq!(total_hosts(24), 256);
/// ```
pub fn total_hosts(prefix: u8) -> u64 {
    1u64 << (MAX_LENGTH - prefix.min(MAX_LENGTH))
}

/// Number of usable host addresses.
///
/// /32 is a single host and /31 is a point-to-point link with both
/// addresses usable. Everything else loses the network and broadcast address.
pub fn usable_hosts(prefix: u8) -> u64 {
    match prefix.min(MAX_LENGTH) {
        32 => 1,
        31 => 2,
        p => total_hosts(p) - 2,
    }
}

/// First and last usable host of the subnet [network, broadcast].
fn host_range(network: u32, broadcast: u32, prefix: u8) -> (u32, u32) {
    match prefix {
        32 => (network, network),
        31 => (network, broadcast),
        _ => (network + 1, broadcast - 1),
    }
}

/// Calculate the subnet details for a dotted-decimal address and prefix length.
///
/// The address must have passed [`is_valid_ipv4`] and the prefix must be in
/// 0..=32. Invalid input does not panic, but the result is unspecified: use
/// [`try_calculate_subnet`] when the input comes from a user.
///
/// # Examples
/// ```
/// use subnet_calc::processing::calculate_subnet;
/// let r = calculate_subnet("192.168.1.100", 24);
/// assert_eq!(r.network_address.to_string(), "192.168.1.0");
/// assert_eq!(r.usable_hosts, 254);
/// ```
pub fn calculate_subnet(address: &str, prefix: u8) -> SubnetResult {
    let prefix = prefix.min(MAX_LENGTH);
    let addr = to_integer(address);
    let mask = mask_for_prefix(prefix);
    let network = network_addr(addr, prefix);
    let broadcast = broadcast_addr(addr, prefix);
    let (first, last) = host_range(network, broadcast, prefix);

    log::trace!(
        "calculate_subnet({address}/{prefix}) addr={addr:#010x} mask={mask:#010x} net={network:#010x} bc={broadcast:#010x}"
    );

    SubnetResult {
        ip_address: Ipv4Addr::from(addr),
        cidr: prefix,
        subnet_mask: Ipv4Addr::from(mask),
        network_address: Ipv4Addr::from(network),
        broadcast_address: Ipv4Addr::from(broadcast),
        first_host: Ipv4Addr::from(first),
        last_host: Ipv4Addr::from(last),
        total_hosts: total_hosts(prefix),
        usable_hosts: usable_hosts(prefix),
        ip_class: class_of(addr),
        ip_type: type_of(addr),
        binary_subnet_mask: binary_grouped_mask(prefix),
        wildcard_mask: Ipv4Addr::from(!mask),
    }
}

/// Validate the input, then [`calculate_subnet`].
pub fn try_calculate_subnet(address: &str, prefix: u8) -> Result<SubnetResult, Box<dyn Error>> {
    if !is_valid_ipv4(address) {
        log::warn!("rejected address {}", address.on_red());
        return Err(format!("Invalid address {address}").into());
    }
    if prefix > MAX_LENGTH {
        log::warn!("rejected prefix /{prefix}");
        return Err("Network length is too long".into());
    }
    let result = calculate_subnet(address, prefix);
    log::debug!("Resolved {result}");
    Ok(result)
}
