use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseAnswerError {
    #[error("invalid side: {0:?}")]
    InvalidSide(String),
    #[error("invalid preservation judgment: {0:?}")]
    InvalidJudgment(String),
}

//
// ─── SIDE ─────────────────────────────────────────────────────────────────────
//

/// Left (`A`) or right (`B`) position of an image in a comparison pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Side::A => "A",
            Side::B => "B",
        }
    }

    /// Caption shown under the image on this side.
    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            Side::A => "Image A",
            Side::B => "Image B",
        }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = ParseAnswerError;

    /// Accepts `A`/`B` and the captions `Image A`/`Image B`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let letter = trimmed
            .strip_prefix("Image ")
            .or_else(|| trimmed.strip_prefix("image "))
            .unwrap_or(trimmed);
        match letter {
            "A" | "a" => Ok(Side::A),
            "B" | "b" => Ok(Side::B),
            _ => Err(ParseAnswerError::InvalidSide(s.to_string())),
        }
    }
}

//
// ─── PRESERVATION JUDGMENT ────────────────────────────────────────────────────
//

/// Whether the anatomical structures of the source survive in the generated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreservationJudgment {
    Yes,
    No,
}

impl PreservationJudgment {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PreservationJudgment::Yes => "Yes",
            PreservationJudgment::No => "No",
        }
    }
}

impl fmt::Display for PreservationJudgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreservationJudgment {
    type Err = ParseAnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" => Ok(PreservationJudgment::Yes),
            "no" => Ok(PreservationJudgment::No),
            _ => Err(ParseAnswerError::InvalidJudgment(s.to_string())),
        }
    }
}
