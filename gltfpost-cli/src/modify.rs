//! CLI interface for glTF post-processing

use crate::cli::Cli;
use anyhow::Context;
use gltfpost::operations::process_file;

pub fn execute(cli: &Cli) -> anyhow::Result<()> {
    let options = cli.options()?;
    tracing::debug!("Options: {:?}", options);

    let report = process_file(&cli.input, &cli.output, &options).with_context(|| {
        format!(
            "Failed to process {} -> {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    tracing::info!("{}", report.summary());
    println!("✓ Wrote {}", cli.output.display());
    Ok(())
}
