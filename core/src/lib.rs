//! Core value types shared by the variation archive crates.
//!
//! Holds the models that query layers and repositories exchange: genomic
//! [`Region`]s and the [`VariantType`] classification. These types carry no
//! store-specific behavior; translating them into actual store queries is the
//! job of the store-facing crates.

mod error;
mod region;
mod variant_type;

pub use error::ParseError;
pub use region::Region;
pub use variant_type::VariantType;
