//! Text layouts for pixel data.
//!
//! Two layouts exist:
//! - the C++ header fragment consumed by the trainer (`render_header`),
//! - the comma-separated row grid the trainer writes back (`render_grid`,
//!   `parse_rows`, `reshape`).
//!
//! Everything here is pure; file access lives in [`crate::io`].

use std::fmt::Write as _;

use thiserror::Error;

use crate::types::{Dimensions, GrayBuffer};

/// Decimal places used for values in the header fragment.
pub const HEADER_PRECISION: usize = 6;
/// Decimal places the trainer uses when it writes a value grid.
pub const GRID_PRECISION: usize = 10;

const MAX_LEVEL: f64 = 255.0;

#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("line {line}, column {column}: '{token}' is not a number")]
    InvalidToken {
        line: usize,
        column: usize,
        token: String,
    },
    #[error("line {line}: expected {expected} values like the first row, found {found}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("grid of {width}x{height} values is too large")]
    TooLarge { width: usize, height: usize },
    #[error("no pixel rows")]
    Empty,
}

/// One non-empty input line and the values parsed from it.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelRow {
    /// 1-based line number in the source text.
    pub line: usize,
    pub values: Vec<f64>,
}

pub fn normalize(pixel: u8) -> f64 {
    f64::from(pixel) / MAX_LEVEL
}

/// Map a normalized value back to a gray level. Out-of-range input
/// saturates, halves round away from zero, NaN maps to 0.
pub fn to_pixel(value: f64) -> u8 {
    let scaled = (value.clamp(0.0, 1.0) * MAX_LEVEL).round();
    scaled.clamp(0.0, MAX_LEVEL) as u8
}

/// Render the header fragment: a `<vector>` include, `width`/`height`
/// constants and the `expected` list with one source line per image row.
pub fn render_header(buffer: &GrayBuffer) -> String {
    let pixels = buffer.pixels();
    let width = buffer.width() as usize;
    // "0.000000," per value, "\n\t" per row
    let capacity = 96 + pixels.len() * (HEADER_PRECISION + 3) + buffer.height() as usize * 2;
    let mut out = String::with_capacity(capacity);

    out.push_str("#include <vector>\n");
    let _ = writeln!(
        out,
        "const int width = {}, height = {};",
        buffer.width(),
        buffer.height()
    );
    out.push_str("const std::vector<double> expected = {");

    let last = pixels.len() - 1;
    for (idx, &px) in pixels.iter().enumerate() {
        if idx % width == 0 {
            out.push_str("\n\t");
        }
        let _ = write!(out, "{:.*}", HEADER_PRECISION, normalize(px));
        if idx != last {
            out.push(',');
        }
    }
    out.push_str("\n};\n");
    out
}

/// Render the row grid read by [`parse_rows`]: rows separated by `\n`,
/// values by `,`, no newline after the last row.
pub fn render_grid(buffer: &GrayBuffer, precision: usize) -> String {
    let mut out = String::with_capacity(buffer.pixels().len() * (precision + 3));
    for (row_idx, row) in buffer.rows().enumerate() {
        if row_idx > 0 {
            out.push('\n');
        }
        for (col, &px) in row.iter().enumerate() {
            if col > 0 {
                out.push(',');
            }
            let _ = write!(out, "{:.*}", precision, normalize(px));
        }
    }
    out
}

/// Split text into rows of values. Lines without any value are skipped and
/// empty tokens are ignored, so trailing commas are harmless. A leading
/// UTF-8 byte order mark is dropped.
pub fn parse_rows(text: &str) -> Result<Vec<PixelRow>, GridError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rows = Vec::new();
    for (line_idx, line) in text.split('\n').enumerate() {
        let mut values = Vec::new();
        for (col_idx, token) in line.split(',').enumerate() {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            // also accepts "inf"/"infinity"/"nan" in any case; to_pixel saturates them
            let value = token
                .parse::<f64>()
                .map_err(|_| GridError::InvalidToken {
                    line: line_idx + 1,
                    column: col_idx + 1,
                    token: token.to_owned(),
                })?;
            values.push(value);
        }
        if !values.is_empty() {
            rows.push(PixelRow {
                line: line_idx + 1,
                values,
            });
        }
    }
    Ok(rows)
}

/// Flatten rows into a gray buffer. The first row fixes the width; every
/// other row must match it.
pub fn reshape(rows: &[PixelRow]) -> Result<GrayBuffer, GridError> {
    let first = rows.first().ok_or(GridError::Empty)?;
    let width = first.values.len();
    let height = rows.len();

    let mut pixels = Vec::with_capacity(width * height);
    for row in rows {
        if row.values.len() != width {
            return Err(GridError::Ragged {
                line: row.line,
                expected: width,
                found: row.values.len(),
            });
        }
        pixels.extend(row.values.iter().copied().map(to_pixel));
    }

    let too_large = || GridError::TooLarge { width, height };
    let dims = Dimensions::new(
        u32::try_from(width).map_err(|_| too_large())?,
        u32::try_from(height).map_err(|_| too_large())?,
    );
    GrayBuffer::from_raw(dims, pixels).ok_or(GridError::Empty)
}
