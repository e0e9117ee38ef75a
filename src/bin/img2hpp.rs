use anyhow::{Context, Result};
use clap::Parser;
use inr_pixels::{cli::EncodeCli, run_encode, Logger};

fn run(logger: &mut Logger, cli: EncodeCli) -> Result<()> {
    let options = cli.into_options().map_err(anyhow::Error::msg)?;
    let report = run_encode(logger, &options)
        .with_context(|| format!("Error processing image {}", options.input.display()))?;
    logger.info(format!(
        "{}x{} image, {} values",
        report.dims.width, report.dims.height, report.values
    ));
    Ok(())
}

fn main() {
    let cli = EncodeCli::parse();
    let mut logger = match Logger::from_env("img2hpp") {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("error: open JSON log: {err}");
            std::process::exit(1);
        }
    };
    if let Err(err) = run(&mut logger, cli) {
        logger.error(format!("error: {err:#}"));
        std::process::exit(1);
    }
}
