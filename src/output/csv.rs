//! CSV output formatting for subnet results.

use crate::models::SubnetResult;
use crate::processing::prefix_label;

use super::terminal::format_field;

/// CSV header matching [`csv_row`].
pub const CSV_HEADER: &str = r#""cidr","label","network","broadcast","first_host","last_host","usable_hosts","total_hosts","subnet_mask","wildcard_mask","ip_class","ip_type""#;

/// Render one result as a CSV row, fields quoted and padded for reading in a terminal.
pub fn csv_row(r: &SubnetResult) -> String {
    [
        format_field(format!("/{}", r.cidr), 5),
        format_field(prefix_label(r.cidr), 24),
        format_field(r.network_address, 17),
        format_field(r.broadcast_address, 17),
        format_field(r.first_host, 17),
        format_field(r.last_host, 17),
        format_field(r.usable_hosts, 12),
        format_field(r.total_hosts, 12),
        format_field(r.subnet_mask, 17),
        format_field(r.wildcard_mask, 17),
        format_field(r.ip_class, 15),
        format_field(r.ip_type, 20),
    ]
    .join(",")
}

/// Print results as CSV to stdout.
pub fn subnet_print(results: &[SubnetResult]) {
    log::info!("#Start subnet_print() rows={}", results.len());
    println!("{CSV_HEADER}");
    for r in results {
        println!("{}", csv_row(r));
    }
}
