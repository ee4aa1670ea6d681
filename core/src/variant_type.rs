//! Variant classification
//!
//! The sequence-ontology-aligned classification used across all store
//! backends for consistent typing of variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Types of genomic variation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariantType {
    /// Single nucleotide variant
    Snv,
    /// Multi-nucleotide variant, reference and alternate of equal length
    Mnv,
    /// Insertion or deletion
    Indel,
    /// Structural variant
    Sv,
    /// Copy-number variant
    Cnv,
    /// Reference-matching block, no variation
    NoVariation,
    /// Symbolic allele such as `<DEL>` or `<INS:ME:ALU>`
    Symbolic,
    /// Mixture of the above in a single record
    Mixed,
}

impl VariantType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Snv => "SNV",
            Self::Mnv => "MNV",
            Self::Indel => "INDEL",
            Self::Sv => "SV",
            Self::Cnv => "CNV",
            Self::NoVariation => "NO_VARIATION",
            Self::Symbolic => "SYMBOLIC",
            Self::Mixed => "MIXED",
        }
    }
}

impl fmt::Display for VariantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariantType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SNV" => Ok(Self::Snv),
            "MNV" => Ok(Self::Mnv),
            "INDEL" => Ok(Self::Indel),
            "SV" => Ok(Self::Sv),
            "CNV" => Ok(Self::Cnv),
            "NO_VARIATION" => Ok(Self::NoVariation),
            "SYMBOLIC" => Ok(Self::Symbolic),
            "MIXED" => Ok(Self::Mixed),
            _ => Err(ParseError::UnknownVariantType(s.to_string())),
        }
    }
}
