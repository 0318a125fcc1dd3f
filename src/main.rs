use anyhow::bail;
use clap::Parser;
use tracing::{debug, error};
use vaultenv::cli::Cli;
use vaultenv::config::{validate_config, Config};
use vaultenv::{logging, output, pipeline};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.debug);

    let config = Config::from_cli(&cli)?;
    let errors = validate_config(&config);
    if !errors.is_empty() {
        for e in &errors {
            error!("Invalid configuration: {e}");
        }
        bail!("{} configuration error(s)", errors.len());
    }

    let resolved = pipeline::run(&config).await?;
    debug!("Writing {} export line(s)", resolved.len());
    output::write_exports(std::io::stdout().lock(), &resolved)?;

    Ok(())
}
