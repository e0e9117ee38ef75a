use anyhow::{Context, Result};
use clap::Parser;
use inr_pixels::{cli::DecodeCli, run_decode, Logger};

fn run(logger: &mut Logger, cli: DecodeCli) -> Result<()> {
    let options = cli.into_options();
    // a failed delete is already logged as a warning and is not fatal
    run_decode(logger, &options).with_context(|| {
        format!(
            "Error generating image from {}",
            options.text_path().display()
        )
    })?;
    Ok(())
}

fn main() {
    let cli = DecodeCli::parse();
    let mut logger = match Logger::from_env("txt2png") {
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
