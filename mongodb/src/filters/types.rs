//! Filter type definitions
//!
//! Defines the filter values the collector produces. Each variant names the
//! store field it predicates on and carries the raw operand(s); translating
//! a filter into a native store query is left to the repository layer.

use serde::{Deserialize, Serialize};
use variation_commons_core::VariantType;

/// Document field paths the filters predicate on
pub mod fields {
    pub const MAF: &str = "st.maf";
    pub const POLYPHEN: &str = "annot.ct.polyphen.sc";
    pub const SIFT: &str = "annot.ct.sift.sc";
    pub const STUDY: &str = "files.sid";
    pub const CONSEQUENCE_TYPE: &str = "annot.ct.so";
    pub const FILE: &str = "files.fid";
    pub const TYPE: &str = "type";
    pub const ALTERNATE: &str = "alt";
    pub const REFERENCE: &str = "ref";
    pub const START: &str = "start";
    pub const END: &str = "end";
}

/// Comparison direction for coordinate filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationalOperator {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "<=")]
    Lte,
}

/// Filter values for variant repository queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Filter {
    Maf {
        value: String,
    },
    PolyphenScore {
        value: String,
    },
    SiftScore {
        value: String,
    },
    Study {
        studies: Vec<String>,
    },
    ConsequenceType {
        terms: Vec<String>,
    },
    File {
        files: Vec<String>,
    },
    VariantType {
        types: Vec<VariantType>,
    },
    Alternate {
        alternates: Vec<String>,
    },
    ReferenceBases {
        bases: Vec<String>,
    },
    Start {
        value: u64,
        operator: RelationalOperator,
    },
    End {
        value: u64,
        operator: RelationalOperator,
    },
}

impl Filter {
    /// The store field this filter predicates on
    pub fn field(&self) -> &'static str {
        match self {
            Self::Maf { .. } => fields::MAF,
            Self::PolyphenScore { .. } => fields::POLYPHEN,
            Self::SiftScore { .. } => fields::SIFT,
            Self::Study { .. } => fields::STUDY,
            Self::ConsequenceType { .. } => fields::CONSEQUENCE_TYPE,
            Self::File { .. } => fields::FILE,
            Self::VariantType { .. } => fields::TYPE,
            Self::Alternate { .. } => fields::ALTERNATE,
            Self::ReferenceBases { .. } => fields::REFERENCE,
            Self::Start { .. } => fields::START,
            Self::End { .. } => fields::END,
        }
    }
}
