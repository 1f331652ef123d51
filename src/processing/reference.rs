//! Quick reference of commonly used prefix lengths.

use super::resolver::{calculate_subnet, usable_hosts};
use crate::models::{PrefixReference, SubnetResult};
use crate::output::format_number;

/// Prefixes offered by the quick reference, largest network first.
pub const COMMON_PREFIXES: [u8; 11] = [8, 16, 24, 25, 26, 27, 28, 29, 30, 31, 32];

/// Label for a prefix, e.g. `/24 - 254 hosts` or `/31 - 2 hosts (P2P)`.
pub fn prefix_label(cidr: u8) -> String {
    let hosts = usable_hosts(cidr);
    match cidr {
        31 => format!("/{cidr} - {} hosts (P2P)", format_number(hosts)),
        32 => format!("/{cidr} - 1 host"),
        _ => format!("/{cidr} - {} hosts", format_number(hosts)),
    }
}

/// The quick-reference table.
pub fn common_prefixes() -> Vec<PrefixReference> {
    COMMON_PREFIXES
        .iter()
        .map(|&cidr| PrefixReference {
            cidr,
            label: prefix_label(cidr),
        })
        .collect()
}

/// Resolve one address against every prefix of the quick reference.
///
/// Same precondition as [`calculate_subnet`]: the address must be valid.
pub fn resolve_common_prefixes(address: &str) -> Vec<SubnetResult> {
    COMMON_PREFIXES
        .iter()
        .map(|&cidr| calculate_subnet(address, cidr))
        .collect()
}
