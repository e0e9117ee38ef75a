use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::{
    decoder::DecodeOptions,
    encoder::{EncodeOptions, OutputFormat},
    format::GRID_PRECISION,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// C++ header with `width`, `height` and `expected`
    Hpp,
    /// Comma-separated rows, readable by txt2png
    Grid,
}

#[derive(Debug, Parser)]
#[command(name = "img2hpp")]
#[command(about = "Convert an image into a header of normalized grayscale values")]
pub struct EncodeCli {
    /// Image to read (any format the build supports)
    #[arg(long, default_value = "img/img.png")]
    pub input: PathBuf,
    /// Destination file, overwritten on success
    #[arg(long, default_value = "img/img.hpp")]
    pub output: PathBuf,
    #[arg(long, value_enum, default_value_t = FormatArg::Hpp)]
    pub format: FormatArg,
    /// Decimal places for `--format grid` (default: 10)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=17))]
    pub precision: Option<u8>,
}

impl EncodeCli {
    pub fn into_options(self) -> Result<EncodeOptions, String> {
        let format = match (self.format, self.precision) {
            (FormatArg::Hpp, None) => OutputFormat::Header,
            (FormatArg::Hpp, Some(_)) => {
                return Err("--precision only applies to --format grid".to_owned());
            }
            (FormatArg::Grid, precision) => OutputFormat::Grid {
                precision: precision.map_or(GRID_PRECISION, usize::from),
            },
        };
        Ok(EncodeOptions {
            input: self.input,
            output: self.output,
            format,
        })
    }
}

#[derive(Debug, Parser)]
#[command(name = "txt2png")]
#[command(about = "Render <NAME>.txt pixel rows into <NAME>.png and delete the text file")]
pub struct DecodeCli {
    /// Base name without extension
    pub name: PathBuf,
    /// Keep <NAME>.txt after the image is written
    #[arg(long)]
    pub keep: bool,
}

impl DecodeCli {
    pub fn into_options(self) -> DecodeOptions {
        DecodeOptions {
            name: self.name,
            keep_text: self.keep,
        }
    }
}
