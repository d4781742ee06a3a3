// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Asset(AssetError),
}

/// Specific error types for procedural scene assets.
/// Raised by mesh builders before an asset reaches the sanitation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// A builder produced no vertices at all.
    EmptyGeometry,

    /// Position and normal arrays disagree in length.
    RaggedAttributes { positions: usize, normals: usize },

    /// An attribute array length is not a multiple of three components.
    PartialVertex { attribute: &'static str, len: usize },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::EmptyGeometry => write!(f, "mesh builder produced no vertices"),
            AssetError::RaggedAttributes { positions, normals } => write!(
                f,
                "position/normal length mismatch: {} vs {}",
                positions, normals
            ),
            AssetError::PartialVertex { attribute, len } => write!(
                f,
                "{} array length {} is not a multiple of 3",
                attribute, len
            ),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Asset(e) => write!(f, "Asset Error: {}", e),
        }
    }
}

impl From<AssetError> for Error {
    fn from(err: AssetError) -> Self {
        Error::Asset(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
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
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn asset_error_converts_to_error() {
        let err: Error = AssetError::EmptyGeometry.into();
        assert!(matches!(err, Error::Asset(AssetError::EmptyGeometry)));
    }

    #[test]
    fn ragged_attributes_display_names_both_lengths() {
        let err = AssetError::RaggedAttributes {
            positions: 9,
            normals: 6,
        };
        let text = format!("{}", err);
        assert!(text.contains('9'));
        assert!(text.contains('6'));
    }

    #[test]
    fn partial_vertex_display_names_attribute() {
        let err = AssetError::PartialVertex {
            attribute: "position",
            len: 7,
        };
        assert!(format!("{}", err).contains("position"));
    }
}
