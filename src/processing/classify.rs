//! Address classification.
//!
//! Two independent views of an address: the legacy classful range of the
//! first octet, and the special-use block it belongs to.

use crate::models::{to_integer, AddressClass, AddressType};

/// Classful address class of a dotted-decimal address.
///
/// First octets 0 and 127 fall outside every class and give
/// [`AddressClass::Unknown`], even though 127 is loopback.
pub fn address_class(address: &str) -> AddressClass {
    class_of(to_integer(address))
}

/// Special-use category of a dotted-decimal address.
pub fn address_type(address: &str) -> AddressType {
    type_of(to_integer(address))
}

pub(crate) fn class_of(addr: u32) -> AddressClass {
    match addr.to_be_bytes()[0] {
        1..=126 => AddressClass::A,
        128..=191 => AddressClass::B,
        192..=223 => AddressClass::C,
        224..=239 => AddressClass::DMulticast,
        240..=255 => AddressClass::EReserved,
        _ => AddressClass::Unknown,
    }
}

pub(crate) fn type_of(addr: u32) -> AddressType {
    let [first, second, _, _] = addr.to_be_bytes();
    // first match wins, checked in this order
    match (first, second) {
        (10, _) => AddressType::Private,
        (172, 16..=31) => AddressType::Private,
        (192, 168) => AddressType::Private,
        (127, _) => AddressType::Loopback,
        (169, 254) => AddressType::LinkLocal,
        (224..=239, _) => AddressType::Multicast,
        (240..=255, _) => AddressType::Reserved,
        _ => AddressType::Public,
    }
}
