//! Genomic regions
//!
//! A region is a chromosome with an independently-optional lower and upper
//! coordinate bound. Query layers also use chromosome-less regions as plain
//! coordinate ranges (e.g. "start position between 100 and 200").

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A coordinate range, each bound independently optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub chromosome: Option<String>,
    pub start: Option<u64>,
    pub end: Option<u64>,
}

impl Region {
    pub fn new(chromosome: impl Into<String>, start: Option<u64>, end: Option<u64>) -> Self {
        Self {
            chromosome: Some(chromosome.into()),
            start,
            end,
        }
    }

    /// A chromosome-less coordinate range, as used for range lookups
    pub fn range(start: Option<u64>, end: Option<u64>) -> Self {
        Self {
            chromosome: None,
            start,
            end,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref chromosome) = self.chromosome {
            f.write_str(chromosome)?;
        }
        match (self.start, self.end) {
            (Some(start), Some(end)) => write!(f, ":{}-{}", start, end),
            (Some(start), None) => write!(f, ":{}", start),
            (None, Some(end)) => write!(f, ":-{}", end),
            (None, None) => Ok(()),
        }
    }
}

impl FromStr for Region {
    type Err = ParseError;

    /// Parses `chr`, `chr:start` and `chr:start-end`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidRegion(s.to_string());

        let (chromosome, coords) = match s.split_once(':') {
            None => (s, None),
            Some((chromosome, coords)) => (chromosome, Some(coords)),
        };
        if chromosome.is_empty() || chromosome.contains('-') {
            return Err(invalid());
        }

        let (start, end) = match coords {
            None => (None, None),
            Some(coords) => match coords.split_once('-') {
                None => {
                    let start = coords.parse::<u64>().map_err(|_| invalid())?;
                    (Some(start), None)
                }
                Some((start, end)) => {
                    let start = start.parse::<u64>().map_err(|_| invalid())?;
                    let end = end.parse::<u64>().map_err(|_| invalid())?;
                    (Some(start), Some(end))
                }
            },
        };

        Ok(Self {
            chromosome: Some(chromosome.to_string()),
            start,
            end,
        })
    }
}
