//! Terminal output utilities.
//!
//! Provides formatting helpers and coloured renderings for terminal output.

use crate::models::{SubnetResult, TroubleshootingCategory};
use colored::Colorize;
use itertools::Itertools;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

/// Format a number with comma thousands separators.
///
/// # Examples
/// ```
/// use subnet_calc::output::format_number;
/// assert_eq!(format_number(16777214), "16,777,214");
/// ```
pub fn format_number(num: u64) -> String {
    let digits = num.to_string();
    let head = digits.len() % 3;
    let mut groups: Vec<&str> = Vec::new();
    if head > 0 {
        groups.push(&digits[..head]);
    }
    groups.extend(
        (head..digits.len())
            .step_by(3)
            .map(|i| &digits[i..i + 3]),
    );
    groups.join(",")
}

fn row(label: &str, value: impl ToString) -> String {
    format!("{:<20} {}", format!("{label}:"), value.to_string())
}

/// Render a subnet result as labelled lines.
pub fn render_subnet_result(r: &SubnetResult) -> String {
    let lines = [
        row("IP Address", r.ip_address),
        row("CIDR Notation", format!("/{}", r.cidr)),
        row("Subnet Mask", r.subnet_mask),
        row("Network Address", r.network_address),
        row("Broadcast Address", r.broadcast_address),
        row("First Host", r.first_host),
        row("Last Host", r.last_host),
        row("Total Addresses", format_number(r.total_hosts)),
        row("Usable Hosts", format_number(r.usable_hosts).green().bold()),
        row("IP Class", r.ip_class),
        row("IP Type", r.ip_type),
        row("Wildcard Mask", r.wildcard_mask),
        row("Binary Subnet Mask", &r.binary_subnet_mask),
    ];
    format!(
        "{}\n{}",
        format!("Subnet details for {}/{}", r.ip_address, r.cidr).bold(),
        lines.iter().join("\n")
    )
}

/// Render one troubleshooting category with its numbered steps.
pub fn render_category(category: &TroubleshootingCategory) -> String {
    let mut out = vec![format!(
        "{} [{}] ({} steps)\n  {}",
        category.title.bold(),
        category.id,
        category.steps.len(),
        category.description
    )];
    for (i, step) in category.steps.iter().enumerate() {
        out.push(format!("  {}. {} ({})", i + 1, step.title.bold(), step.id));
        out.push(format!("     {}", step.description));
        for cmd in step.commands.iter() {
            out.push(format!("       $ {}", cmd.cyan()));
        }
        if let Some(expected) = &step.expected_result {
            out.push(format!("     Expected: {}", expected.green()));
        }
        if let Some(tip) = &step.trouble_tip {
            out.push(format!("     Tip: {}", tip.yellow()));
        }
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TroubleshootingStep;
    use crate::processing::calculate_subnet;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(254), "254");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(65534), "65,534");
        assert_eq!(format_number(16777214), "16,777,214");
        assert_eq!(format_number(4294967296), "4,294,967,296");
    }

    #[test]
    fn test_render_subnet_result() {
        colored::control::set_override(false);
        let text = render_subnet_result(&calculate_subnet("192.168.1.100", 24));
        assert!(text.starts_with("Subnet details for 192.168.1.100/24"));
        assert!(text.contains("Network Address:     192.168.1.0"));
        assert!(text.contains("Usable Hosts:        254"));
        assert!(text.contains("IP Type:             Private (RFC 1918)"));
        assert!(text.contains("11111111.11111111.11111111.00000000"));
    }

    #[test]
    fn test_render_category() {
        colored::control::set_override(false);
        let category = TroubleshootingCategory {
            id: "c".to_string(),
            title: "Cat".to_string(),
            description: "desc".to_string(),
            icon: "Network".to_string(),
            steps: vec![TroubleshootingStep {
                id: "s1".to_string(),
                title: "Step".to_string(),
                description: "do it".to_string(),
                commands: vec!["ping 1.1.1.1".to_string()],
                expected_result: None,
                trouble_tip: Some("retry".to_string()),
            }],
        };
        let text = render_category(&category);
        assert!(text.contains("Cat [c] (1 steps)"));
        assert!(text.contains("1. Step (s1)"));
        assert!(text.contains("$ ping 1.1.1.1"));
        assert!(text.contains("Tip: retry"));
        assert!(!text.contains("Expected:"));
    }
}
