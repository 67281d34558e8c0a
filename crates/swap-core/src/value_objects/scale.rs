//! Bounded 1-5 scores: proficiency of a user skill and feedback rating

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

const MIN: i16 = 1;
const MAX: i16 = 5;

/// Self-assessed proficiency, 1 (beginner) to 5 (expert)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub struct Proficiency(i16);

impl Proficiency {
    pub const DEFAULT: Self = Self(3);

    pub fn new(level: i16) -> Result<Self, DomainError> {
        if (MIN..=MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(DomainError::InvalidProficiency(level))
        }
    }

    #[inline]
    pub const fn value(self) -> i16 {
        self.0
    }
}

impl Default for Proficiency {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Feedback score, 1 to 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub struct Rating(i16);

impl Rating {
    pub fn new(score: i16) -> Result<Self, DomainError> {
        if (MIN..=MAX).contains(&score) {
            Ok(Self(score))
        } else {
            Err(DomainError::InvalidRating(score))
        }
    }

    #[inline]
    pub const fn value(self) -> i16 {
        self.0
    }
}

macro_rules! scale_conversions {
    ($ty:ident) => {
        impl TryFrom<i16> for $ty {
            type Error = DomainError;

            fn try_from(value: i16) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$ty> for i16 {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

scale_conversions!(Proficiency);
scale_conversions!(Rating);
