use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

pub const MIN_YEAR: i32 = 2015;
pub const MAX_YEAR: i32 = 2030;
pub const MAX_DAY: i32 = 25;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("Invalid year: {0}")]
    Year(i32),
    #[error("Invalid day: {0}")]
    Day(i32),
}

/// One puzzle, keyed by `(year, day)`. Orders by year, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SolutionId {
    pub year: i32,
    pub day: i32,
}

impl SolutionId {
    /// Validates user-supplied values against the supported event range.
    pub fn new(year: i32, day: i32) -> Result<Self, IdError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(IdError::Year(year));
        }
        if !(1..=MAX_DAY).contains(&day) {
            return Err(IdError::Day(day));
        }
        Ok(Self { year, day })
    }

    pub fn dir_name(&self) -> String {
        format!("day{:02}", self.day)
    }

    /// `<year>/day<NN>`, relative to either `src/` or `data/`.
    pub fn rel_path(&self) -> PathBuf {
        PathBuf::from(self.year.to_string()).join(self.dir_name())
    }
}

impl fmt::Display for SolutionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Day {:02}", self.year, self.day)
    }
}
