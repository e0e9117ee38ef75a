use std::{io, path::PathBuf};

use thiserror::Error;

use crate::format::GridError;

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Which side of a conversion failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input missing, corrupt or unparseable.
    Read,
    /// Destination could not be created or encoded.
    Write,
}

/// Errors that can occur while converting between images and pixel text.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode image {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("image {} has no pixels", path.display())]
    EmptyImage { path: PathBuf },
    #[error("invalid pixel data in {}", path.display())]
    Grid {
        path: PathBuf,
        #[source]
        source: GridError,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode image {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Read { .. } | Self::Decode { .. } | Self::EmptyImage { .. } | Self::Grid { .. } => {
                ErrorKind::Read
            }
            Self::Write { .. } | Self::Encode { .. } => ErrorKind::Write,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn grid_errors_are_read_side_and_keep_their_source() {
        let err = ConvertError::Grid {
            path: PathBuf::from("res.txt"),
            source: GridError::Empty,
        };
        assert_eq!(err.kind(), ErrorKind::Read);
        assert_eq!(err.to_string(), "invalid pixel data in res.txt");
        assert!(err.source().is_some());
    }

    #[test]
    fn write_errors_are_write_side() {
        let err = ConvertError::Write {
            path: PathBuf::from("img/img.hpp"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.kind(), ErrorKind::Write);
    }
}
