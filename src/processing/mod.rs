//! Subnet calculation and guide logic.
//!
//! This module contains the business logic:
//! - [`resolver`] - network/broadcast/host range for an address and prefix
//! - [`classify`] - classful and special-use classification
//! - [`reference`] - common prefix quick reference
//! - [`guide`] - static troubleshooting guide

mod classify;
mod guide;
mod reference;
mod resolver;

// Re-export public functions
pub use classify::{address_class, address_type};
pub use guide::{find_category, find_step, total_steps, troubleshooting_categories};
pub use reference::{common_prefixes, prefix_label, resolve_common_prefixes, COMMON_PREFIXES};
pub use resolver::{calculate_subnet, total_hosts, try_calculate_subnet, usable_hosts};
