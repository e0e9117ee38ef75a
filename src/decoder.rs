use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    error::{ConvertError, Result},
    format::{parse_rows, reshape},
    io::{read_text, save_gray_png},
    logging::Logger,
    types::Dimensions,
};

#[derive(Clone, Debug)]
pub struct DecodeOptions {
    /// Base name without extension; `.txt` is read and `.png` written.
    pub name: PathBuf,
    pub keep_text: bool,
}

impl DecodeOptions {
    pub fn new(name: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            keep_text: false,
        }
    }

    pub fn text_path(&self) -> PathBuf {
        self.with_suffix(".txt")
    }

    pub fn image_path(&self) -> PathBuf {
        self.with_suffix(".png")
    }

    // appended, not replaced: "res.v2" -> "res.v2.txt"
    fn with_suffix(&self, suffix: &str) -> PathBuf {
        let mut raw = OsString::from(self.name.as_os_str());
        raw.push(suffix);
        PathBuf::from(raw)
    }
}

#[derive(Debug)]
pub enum Cleanup {
    Deleted,
    Kept,
    /// The image was written but the text file could not be removed.
    Failed(io::Error),
}

#[derive(Debug)]
pub struct DecodeReport {
    pub image: PathBuf,
    pub dims: Dimensions,
    pub cleanup: Cleanup,
}

/// Render `<name>.txt` into `<name>.png`, then delete the text file.
///
/// The text file is only touched after the image has been written. A failed
/// delete is logged and reported in [`DecodeReport::cleanup`]; it does not
/// turn the conversion into an error.
pub fn run_decode(logger: &mut Logger, opts: &DecodeOptions) -> Result<DecodeReport> {
    let text_path = opts.text_path();
    let image_path = opts.image_path();

    let contents = read_text(&text_path)?;
    let buffer = parse_rows(&contents)
        .and_then(|rows| reshape(&rows))
        .map_err(|source| ConvertError::Grid {
            path: text_path.clone(),
            source,
        })?;

    save_gray_png(&image_path, &buffer)?;
    logger.info(format!(
        "Image successfully saved as {}",
        image_path.display()
    ));

    let cleanup = if opts.keep_text {
        Cleanup::Kept
    } else {
        remove_text(logger, &text_path)
    };

    Ok(DecodeReport {
        image: image_path,
        dims: buffer.dims(),
        cleanup,
    })
}

/// Delete the consumed text file. Failure is logged as a warning only.
fn remove_text(logger: &mut Logger, path: &Path) -> Cleanup {
    match fs::remove_file(path) {
        Ok(()) => {
            logger.info(format!("Deleted {}", path.display()));
            Cleanup::Deleted
        }
        Err(err) => {
            logger.warn(format!("Error deleting file {}: {err}", path.display()));
            Cleanup::Failed(err)
        }
    }
}
