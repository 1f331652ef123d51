//! Subnet calculation result model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// Legacy classful address class, taken from the first octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressClass {
    A,
    B,
    C,
    /// 224-239.
    DMulticast,
    /// 240-255.
    EReserved,
    /// First octet 0 or 127.
    Unknown,
}

impl AddressClass {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::DMulticast => "D (Multicast)",
            AddressClass::EReserved => "E (Reserved)",
            AddressClass::Unknown => "Unknown",
        }
    }
}

/// Special-use category of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    Private,
    Loopback,
    LinkLocal,
    Multicast,
    Reserved,
    Public,
}

impl AddressType {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            AddressType::Private => "Private (RFC 1918)",
            AddressType::Loopback => "Loopback",
            AddressType::LinkLocal => "Link-Local (APIPA)",
            AddressType::Multicast => "Multicast",
            AddressType::Reserved => "Reserved",
            AddressType::Public => "Public",
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for AddressClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl Serialize for AddressType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

/// Everything derived from one (address, prefix) pair.
///
/// Built fresh by [`crate::processing::calculate_subnet`]; never mutated.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetResult {
    /// Input address, normalized (leading zeros dropped).
    pub ip_address: Ipv4Addr,
    /// Prefix length (0-32).
    pub cidr: u8,
    pub subnet_mask: Ipv4Addr,
    pub network_address: Ipv4Addr,
    pub broadcast_address: Ipv4Addr,
    pub first_host: Ipv4Addr,
    pub last_host: Ipv4Addr,
    /// 2^(32 - cidr), up to 4294967296 for /0.
    pub total_hosts: u64,
    pub usable_hosts: u64,
    pub ip_class: AddressClass,
    pub ip_type: AddressType,
    /// e.g. `11111111.11111111.11111111.00000000`
    pub binary_subnet_mask: String,
    pub wildcard_mask: Ipv4Addr,
}

impl SubnetResult {
    /// CIDR notation of the network, e.g. `192.168.1.0/24`.
    pub fn network_cidr(&self) -> String {
        format!("{}/{}", self.network_address, self.cidr)
    }
}

impl fmt::Display for SubnetResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} net={} bc={} hosts={}-{} ({} usable)",
            self.ip_address,
            self.cidr,
            self.network_address,
            self.broadcast_address,
            self.first_host,
            self.last_host,
            self.usable_hosts
        )
    }
}

/// A prefix length paired with its quick-reference label.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PrefixReference {
    pub cidr: u8,
    /// e.g. `/24 - 254 hosts`
    pub label: String,
}
