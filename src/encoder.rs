use std::path::PathBuf;

use crate::{
    error::Result,
    format::{render_grid, render_header},
    io::{load_grayscale, write_text},
    logging::Logger,
    types::Dimensions,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// C++ header with `width`, `height` and the `expected` vector.
    Header,
    /// Comma-separated rows, the layout `txt2png` reads.
    Grid { precision: usize },
}

#[derive(Clone, Debug)]
pub struct EncodeOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from("img/img.png"),
            output: PathBuf::from("img/img.hpp"),
            format: OutputFormat::Header,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeReport {
    pub output: PathBuf,
    pub dims: Dimensions,
    pub values: usize,
}

/// Load the input image as grayscale and write its normalized values.
///
/// The output is rendered in memory first, so a failed load leaves any
/// existing output file untouched.
pub fn run_encode(logger: &mut Logger, opts: &EncodeOptions) -> Result<EncodeReport> {
    let buffer = load_grayscale(&opts.input)?;
    let contents = match opts.format {
        OutputFormat::Header => render_header(&buffer),
        OutputFormat::Grid { precision } => render_grid(&buffer, precision),
    };
    write_text(&opts.output, &contents)?;

    logger.info(format!(
        "Image successfully processed and saved to {}",
        opts.output.display()
    ));

    Ok(EncodeReport {
        output: opts.output.clone(),
        dims: buffer.dims(),
        values: buffer.pixels().len(),
    })
}
