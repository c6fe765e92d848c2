//! Core translation logic.
//!
//! Two leaf components, both pure functions of the store they are given:
//!
//! - `resolve`: `AttributeTranslationResolver` maps a variable product's
//!   default attributes into every language.
//! - `detect`: `VariableProductStateDetector` recognizes simple translation
//!   drafts that are really variable products waiting to be promoted.
//!
//! ## Module Structure
//!
//! - `data`: Catalog entities and ordered attribute maps
//! - `store`: Read-only lookup traits implemented by the host
//! - `snapshot`: JSON-backed implementation of the lookup traits
//! - `translations`: Product/term translation lookups

pub mod data;
pub mod detect;
pub mod resolve;
pub mod snapshot;
pub mod store;
pub mod translations;

pub use data::{
    AttributeMap, DefaultAttributeTranslations, Language, Product, ProductId, ProductType, Term,
    TermId,
};
pub use detect::{
    ProductRef, ProductState, RequestContext, ScreenContext, VariableProductStateDetector,
    is_pending_variable_product,
};
pub use resolve::{
    AttributeNode, AttributeTranslationResolver, SkipReason, resolve_default_attribute_translations,
};
pub use snapshot::CatalogSnapshot;
pub use store::{LanguageRegistry, ProductRepository, TermRepository};
