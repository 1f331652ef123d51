//! IPv4 subnet calculator with a static network troubleshooting checklist.
//!
//! The arithmetic core lives in [`models`] (address codec, validator, masks)
//! and [`processing`] (resolver, classifier, guide table). [`output`],
//! [`cli`] and [`config`] make up the command-line front end.

pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod processing;

use cli::{Command, Format};
use config::Config;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::encode::pattern::PatternEncoder;
use models::{is_valid_ipv4, wildcard_mask, Ipv4, SubnetResult};
use std::error::Error;
use std::path::Path;

/// Initialise log4rs from the configured yaml file, or log warnings to stderr.
pub fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    if Path::new(&config.log_config).exists() {
        log4rs::init_file(&config.log_config, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", config.log_config))?;
        return Ok(());
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();
    let log_config = log4rs::config::Config::builder()
        .appender(log4rs::config::Appender::builder().build("stderr", Box::new(stderr)))
        .build(
            log4rs::config::Root::builder()
                .appender("stderr")
                .build(LevelFilter::Warn),
        )?;
    log4rs::init_config(log_config)?;
    Ok(())
}

/// Resolve command-line input into a subnet result.
///
/// `address` may carry its own `/PREFIX`. Missing parts come from `config`.
pub fn resolve_input(
    address: Option<&str>,
    prefix: Option<u8>,
    config: &Config,
) -> Result<SubnetResult, Box<dyn Error>> {
    let address = address.unwrap_or(&config.default_address).trim();
    if address.contains('/') {
        if prefix.is_some() {
            return Err(format!("Prefix given twice for {address}").into());
        }
        let cidr = Ipv4::new(address)?;
        return processing::try_calculate_subnet(&cidr.addr.to_string(), cidr.mask);
    }
    processing::try_calculate_subnet(address, prefix.unwrap_or(config.default_prefix))
}

/// Execute one CLI command, printing to stdout.
pub fn run(command: Command, config: &Config) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Calc {
            address,
            prefix,
            format,
        } => {
            let result = resolve_input(address.as_deref(), prefix, config)?;
            log::info!("calc {}", result.network_cidr());
            match format {
                Format::Text => println!("{}", output::render_subnet_result(&result)),
                Format::Json => println!("{}", output::to_json(&result)?),
                Format::Csv => output::subnet_print(std::slice::from_ref(&result)),
            }
        }
        Command::Table { address } => {
            let address = address.unwrap_or_else(|| config.default_address.clone());
            if !is_valid_ipv4(&address) {
                return Err(format!("Invalid address {address}").into());
            }
            output::subnet_print(&processing::resolve_common_prefixes(&address));
        }
        Command::Guide { category } => {
            let categories = match category {
                Some(id) => vec![processing::find_category(&id)?
                    .ok_or_else(|| format!("Unknown category {id}"))?],
                None => processing::troubleshooting_categories()?.iter().collect(),
            };
            log::info!("guide categories={} total_steps={}", categories.len(), processing::total_steps()?);
            for c in categories {
                println!("{}\n", output::render_category(c));
            }
        }
        Command::Wildcard { mask } => {
            if !is_valid_ipv4(&mask) {
                return Err(format!("Invalid mask {mask}").into());
            }
            println!("{}", wildcard_mask(&mask));
        }
    }
    Ok(())
}
