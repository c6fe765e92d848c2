//! Core data types shared by the resolver and the state detector.
//!
//! ## Module Structure
//!
//! - `attributes`: Ordered attribute maps (AttributeMap, DefaultAttributeTranslations)
//! - `catalog`: Catalog entities (Product, Term, Language and their identifiers)

pub mod attributes;
pub mod catalog;

pub use attributes::{AttributeMap, DefaultAttributeTranslations};
pub use catalog::{Language, Product, ProductId, ProductType, Term, TermId};
