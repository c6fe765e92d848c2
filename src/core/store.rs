//! Read-only lookups supplied by the host store.
//!
//! The resolver and detector never reach for global state. Everything they
//! read comes through these traits, which the host implements over its own
//! product, term and language storage. `CatalogSnapshot` is the in-crate
//! implementation backed by a JSON file.
//!
//! All lookups are advisory: the host may change its data between two calls,
//! so a missing answer is always a normal outcome, never an error.

use super::data::{AttributeMap, Language, Product, ProductId, Term, TermId};

/// Product lookups.
pub trait ProductRepository {
    /// Fetch a product by id.
    fn product(&self, id: ProductId) -> Option<Product>;

    /// Default attributes of a product, in declaration order.
    fn default_attributes(&self, product: &Product) -> AttributeMap {
        product.default_attributes.clone()
    }

    /// Number of variation children attached to a product.
    fn count_variation_children(&self, id: ProductId) -> usize;

    /// Translations of a product as `(language slug, product id)` pairs.
    ///
    /// The product itself is listed under its own language.
    fn product_translations(&self, id: ProductId) -> Vec<(String, ProductId)>;
}

/// Taxonomy term lookups.
pub trait TermRepository {
    /// Find the term named `name` in `taxonomy`.
    fn find_term_by_name(&self, taxonomy: &str, name: &str) -> Option<Term>;

    /// Fetch a term by id, restricted to `taxonomy`.
    fn term(&self, id: TermId, taxonomy: &str) -> Option<Term>;

    /// Id of the term's counterpart in `language`.
    fn translate_term(&self, id: TermId, language: &str) -> Option<TermId>;

    /// Whether the attribute `key` names a taxonomy with per-language terms.
    fn is_taxonomy_backed(&self, key: &str) -> bool;

    /// Translations of a term as `(language slug, term id)` pairs.
    fn term_translations(&self, id: TermId) -> Vec<(String, TermId)>;
}

/// Configured store languages.
pub trait LanguageRegistry {
    /// All configured languages, in configuration order.
    fn languages(&self) -> Vec<Language>;

    fn default_language(&self) -> Option<Language> {
        self.languages().into_iter().find(|l| l.is_default)
    }
}
