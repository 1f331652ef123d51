//! IPv4 address and CIDR notation utilities.
//!
//! Provides the dotted-decimal codec, the address validator, subnet mask
//! derivation and the [`Ipv4`] struct for an address with a prefix length.
//! All arithmetic is done on `u32` so addresses >= 128.0.0.0 never sign-extend.

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    // Four groups of 0-255. One or two leading zeros are allowed ("001").
    static ref IPV4_RE: Regex = Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$"
    )
    .expect("Invalid Regex?");
}

/// Check that `text` is a dotted-decimal IPv4 address.
///
/// Leading zeros inside an octet are accepted (`192.168.001.1`) and are
/// normalized away by [`to_integer`]. Surrounding whitespace is rejected.
///
/// # Examples
/// ```
/// use subnet_calc::models::is_valid_ipv4;
/// assert!(is_valid_ipv4("192.168.1.1"));
/// assert!(!is_valid_ipv4("256.1.1.1"));
/// ```
pub fn is_valid_ipv4(text: &str) -> bool {
    IPV4_RE.is_match(text)
}

/// Pack a dotted-decimal address into a big-endian `u32`.
///
/// The caller must have checked the text with [`is_valid_ipv4`]. On text that
/// fails validation the result is unspecified: unparsable groups read as 0,
/// missing groups are zero-filled and extra groups are ignored.
pub fn to_integer(address: &str) -> u32 {
    address
        .split('.')
        .take(4)
        .map(|part| part.parse::<u32>().unwrap_or(0) & 0xFF)
        .pad_using(4, |_| 0)
        .fold(0u32, |acc, octet| (acc << 8) | octet)
}

/// Format a `u32` as a dotted-decimal address.
pub fn to_address(value: u32) -> String {
    [24u32, 16, 8, 0]
        .iter()
        .map(|shift| (value >> shift) & 0xFF)
        .join(".")
}

/// Convert a prefix length to a subnet mask as u32.
///
/// Prefixes above 32 saturate to the all-ones mask.
///
/// # Examples
/// ```
/// use subnet_calc::models::mask_for_prefix;
/// assert_eq!(mask_for_prefix(24), 0xFFFFFF00);
/// assert_eq!(mask_for_prefix(0), 0);
/// ```
pub fn mask_for_prefix(prefix: u8) -> u32 {
    match prefix.min(MAX_LENGTH) {
        // u32 << 32 overflows, so the empty mask is spelled out
        0 => 0,
        len => u32::MAX << (MAX_LENGTH - len),
    }
}

/// Subnet mask as 32 binary digits in four dot-separated groups of eight.
pub fn binary_grouped_mask(prefix: u8) -> String {
    let bits = format!("{:032b}", mask_for_prefix(prefix));
    bits.as_bytes()
        .chunks(8)
        .map(|group| String::from_utf8_lossy(group).into_owned())
        .join(".")
}

/// Wildcard (inverse) mask of a dotted-decimal subnet mask, `255 - octet` per octet.
///
/// # Examples
/// ```
/// use subnet_calc::models::wildcard_mask;
/// assert_eq!(wildcard_mask("255.255.255.0"), "0.0.0.255");
/// ```
pub fn wildcard_mask(subnet_mask: &str) -> String {
    to_address(!to_integer(subnet_mask))
}

/// Network address (host bits cleared) for an address and prefix length.
pub fn network_addr(addr: u32, len: u8) -> u32 {
    addr & mask_for_prefix(len)
}

/// Broadcast address (host bits set) for an address and prefix length.
pub fn broadcast_addr(addr: u32, len: u8) -> u32 {
    let mask = mask_for_prefix(len);
    (addr & mask) | !mask
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or("Invalid address/mask")?;
        let addr = parse_addr(addr)?;
        let mask: u8 = mask
            .parse()
            .map_err(|_| format!("Invalid mask {mask}"))?;
        if mask > MAX_LENGTH {
            return Err("Network length is too long".into());
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(network_addr(u32::from(self.addr), self.mask))
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(broadcast_addr(u32::from(self.addr), self.mask))
    }

    /// Check whether `ip` falls inside this subnet.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.lo() <= ip && ip <= self.hi()
    }
}

impl FromStr for Ipv4 {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

/// Validate and parse a dotted-decimal address, tolerating leading zeros.
pub fn parse_addr(text: &str) -> Result<Ipv4Addr, Box<dyn Error>> {
    if !is_valid_ipv4(text) {
        return Err(format!("Invalid address {text}").into());
    }
    Ok(Ipv4Addr::from(to_integer(text)))
}
