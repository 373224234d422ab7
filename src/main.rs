use anyhow::{Context, Result};
use clap::Parser;
use emoji_catalog::cli::Cli;
use emoji_catalog::data::{loader, schema};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let groups = loader::load_file(&cli.emoji_test).context("Failed to parse emoji test data")?;
    let catalog = schema::to_catalog(&groups);
    schema::write_plist(&cli.out, &catalog).context("Failed to write catalog")?;

    println!(
        "Wrote {} groups: {} top-level items: {}",
        cli.out.display(),
        catalog.group_count(),
        catalog.item_count()
    );
    Ok(())
}
