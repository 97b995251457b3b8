//! Error types.
//!
//! Only puzzle loading can fail. Everything the player does is either applied
//! or ignored, and guess rejections are reported through `GuessOutcome`.

use thiserror::Error;

use super::config::{GROUP_COUNT, GROUP_SIZE};

/// Construction input does not have the 4 groups x 5 fields shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("must have {} groups, found {found}", GROUP_COUNT)]
    WrongGroupCount { found: usize },

    #[error("group {group} must contain {} words and a label, found {found} fields", GROUP_SIZE)]
    WrongGroupLength { group: usize, found: usize },
}

/// A share code could not be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareCodeError {
    #[error("share code is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("share code does not decode to UTF-8 text")]
    Utf8,
}

/// Loading a puzzle from a share code failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error(transparent)]
    Code(#[from] ShareCodeError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}
