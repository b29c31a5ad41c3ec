// SPDX-License-Identifier: MPL-2.0
use image_rs::ImageError;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requested icon edge length is outside `1..=MAX_ICON_SIZE`.
    InvalidSize(u32),
    Io(String),
    Encode(String),
}

impl Error {
    /// Wraps an I/O failure with the path it happened on.
    pub fn io_at(path: &Path, err: impl fmt::Display) -> Self {
        Error::Io(format!("{}: {}", path.display(), err))
    }

    /// Wraps an encoder failure with the path being written.
    pub fn encode_at(path: &Path, err: impl fmt::Display) -> Self {
        Error::Encode(format!("{}: {}", path.display(), err))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSize(size) => write!(
                f,
                "Invalid icon size {}: expected 1..={}",
                size,
                crate::config::MAX_ICON_SIZE
            ),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Encode(e) => write!(f, "Encode Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::IoError(io) => Error::Io(io.to_string()),
            other => Error::Encode(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn io_at_names_the_path() {
        let err = Error::io_at(Path::new("icons/icon-512x512.png"), "permission denied");
        let message = err.to_string();
        assert!(message.contains("icons/icon-512x512.png"));
        assert!(message.contains("permission denied"));
    }

    #[test]
    fn invalid_size_mentions_bounds() {
        let message = Error::InvalidSize(0).to_string();
        assert!(message.contains("Invalid icon size 0"));
        assert!(message.contains(&crate::config::MAX_ICON_SIZE.to_string()));
    }

    #[test]
    fn image_io_error_maps_to_io_variant() {
        let err: Error = ImageError::IoError(std::io::Error::other("gone")).into();
        assert!(matches!(err, Error::Io(message) if message.contains("gone")));
    }
}
