use std::{fs, path::Path};

use image::{
    error::{ParameterError, ParameterErrorKind},
    GrayImage, ImageBuffer, ImageError, ImageFormat,
};

use crate::{
    error::{ConvertError, Result},
    types::{Dimensions, GrayBuffer},
};

/// Open any supported raster image and convert it to 8-bit luma.
pub fn load_grayscale(path: &Path) -> Result<GrayBuffer> {
    let img = image::open(path)
        .map_err(|err| match err {
            ImageError::IoError(source) => ConvertError::Read {
                path: path.to_path_buf(),
                source,
            },
            source => ConvertError::Decode {
                path: path.to_path_buf(),
                source,
            },
        })?
        .into_luma8();

    let dims = Dimensions::new(img.width(), img.height());
    GrayBuffer::from_raw(dims, img.into_raw()).ok_or_else(|| ConvertError::EmptyImage {
        path: path.to_path_buf(),
    })
}

/// Write `buffer` as a single-channel PNG regardless of the path's extension.
pub fn save_gray_png(path: &Path, buffer: &GrayBuffer) -> Result<()> {
    ensure_parent_dir(path)?;
    let img = gray_image(path, buffer.dims(), buffer.pixels().to_vec())?;
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|err| match err {
            ImageError::IoError(source) => ConvertError::Write {
                path: path.to_path_buf(),
                source,
            },
            source => ConvertError::Encode {
                path: path.to_path_buf(),
                source,
            },
        })
}

// A `GrayBuffer` always matches its dims; raw parts keep the mismatch on the
// write side of the error split.
fn gray_image(path: &Path, dims: Dimensions, pixels: Vec<u8>) -> Result<GrayImage> {
    ImageBuffer::from_raw(dims.width, dims.height, pixels).ok_or_else(|| ConvertError::Encode {
        path: path.to_path_buf(),
        source: ImageError::Parameter(ParameterError::from_kind(
            ParameterErrorKind::DimensionMismatch,
        )),
    })
}

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the full contents in one call; nothing is created before the
/// caller has the complete text.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, contents).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| ConvertError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
