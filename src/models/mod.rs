//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`] and the address codec / mask helpers
//! - [`SubnetResult`] - everything derived from an address and prefix
//! - [`TroubleshootingCategory`] and [`TroubleshootingStep`] - static guide data

mod ipv4;
mod subnet;
mod troubleshooting;

// Re-export public types
pub use ipv4::{
    binary_grouped_mask, broadcast_addr, is_valid_ipv4, mask_for_prefix, network_addr,
    parse_addr, to_address, to_integer, wildcard_mask, Ipv4, MAX_LENGTH,
};
pub use subnet::{AddressClass, AddressType, PrefixReference, SubnetResult};
pub use troubleshooting::{TroubleshootingCategory, TroubleshootingStep};
