use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Consumer-facing letter bucketing a Nutri-Score into one of five categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutriGrade {
    A,
    B,
    C,
    D,
    E,
}

impl NutriGrade {
    /// Bucket a score into its grade. The ranges cover every integer, so
    /// classification cannot fail.
    pub const fn from_score(score: i16) -> Self {
        if score <= -1 {
            Self::A
        } else if score <= 2 {
            Self::B
        } else if score <= 10 {
            Self::C
        } else if score <= 18 {
            Self::D
        } else {
            Self::E
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Self::A => 'a',
            Self::B => 'b',
            Self::C => 'c',
            Self::D => 'd',
            Self::E => 'e',
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
            Self::E => "e",
        }
    }
}

impl fmt::Display for NutriGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error raised when grade text from a dataset is not one of `a`..`e`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized nutrition grade '{0}'")]
pub struct ParseGradeError(pub String);

impl FromStr for NutriGrade {
    type Err = ParseGradeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            "c" => Ok(Self::C),
            "d" => Ok(Self::D),
            "e" => Ok(Self::E),
            other => Err(ParseGradeError(other.to_string())),
        }
    }
}
