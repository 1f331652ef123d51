use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "IPv4 subnet calculator and network troubleshooting checklist"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Calculate subnet details for an address, e.g. `calc 192.168.1.100/24`
    Calc {
        /// IPv4 address, optionally with /PREFIX. Defaults to the configured address.
        address: Option<String>,

        /// Prefix length 0-32, used when ADDRESS has no /PREFIX
        prefix: Option<u8>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Resolve an address against the common prefix lengths (/8 ... /32) as CSV
    Table {
        /// IPv4 address. Defaults to the configured address.
        address: Option<String>,
    },
    /// Print the troubleshooting checklist
    Guide {
        /// Only show one category (connectivity, performance, dns, security, wireless)
        #[arg(long)]
        category: Option<String>,
    },
    /// Print the wildcard mask of a dotted-decimal subnet mask
    Wildcard {
        /// Subnet mask, e.g. 255.255.255.0
        mask: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
    Csv,
}

impl Cli {
    /// Parse CLI arguments from process args.
    pub fn from_args() -> Self {
        Self::parse()
    }
}
