//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid configuration, oversized export requests, missing lattice points,
//! and generic errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(
        "export of {width}x{height} px exceeds raster limits, largest usable factor is {max_factor:.2}"
    )]
    ExportTooLarge {
        width: u64,
        height: u64,
        max_factor: f32,
    },

    #[error("unknown lattice point '{id}'")]
    MissingPoint { id: String },

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_uses_other_variant() {
        let err: Error = String::from("boom").into();
        matches!(err, Error::Other(_))
            .then_some(())
            .expect("expected Other variant");
    }

    #[test]
    fn from_str_allocates_owned_message() {
        let err: Error = "issue".into();
        assert!(matches!(err, Error::Other(ref msg) if msg == "issue"));
    }

    #[test]
    fn export_too_large_names_the_usable_factor() {
        let err = Error::ExportTooLarge {
            width: 20_000,
            height: 400,
            max_factor: 3.25,
        };
        let text = err.to_string();
        assert!(text.contains("20000x400"));
        assert!(text.contains("3.25"));
    }
}
