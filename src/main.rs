use anyhow::{Context, Result};
use mdpage::Config;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let output_path = mdpage::generate(&config).context("Failed to build page")?;

    println!(
        "Built {} from {}",
        output_path.display(),
        config.source.display()
    );

    Ok(())
}
