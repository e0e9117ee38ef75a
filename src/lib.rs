//! Converters between grayscale images and the pixel literals used to train
//! implicit neural representations.
//!
//! - `img2hpp` ([`encoder`]): image → C++ header with normalized values.
//! - `txt2png` ([`decoder`]): comma-separated value rows → grayscale PNG.

pub mod cli;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod format;
pub mod io;
pub mod logging;
pub mod types;

pub use crate::decoder::{run_decode, Cleanup, DecodeOptions, DecodeReport};
pub use crate::encoder::{run_encode, EncodeOptions, EncodeReport, OutputFormat};
pub use crate::error::{ConvertError, ErrorKind, Result};
pub use crate::logging::Logger;
pub use crate::types::{Dimensions, GrayBuffer};
