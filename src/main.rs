use std::error::Error;
use subnet_calc::cli::Cli;
use subnet_calc::config::Config;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    subnet_calc::init_logging(&config)?;
    log::info!("#Start main()");

    let cli = Cli::from_args();
    subnet_calc::run(cli.command, &config)?;

    log::info!("#End main()");
    Ok(())
}
