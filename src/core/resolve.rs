//! Default-attribute translation.
//!
//! A variable product pre-selects one value per attribute (its default
//! attributes). When the product is copied into another language, those
//! selections have to point at the same options in that language:
//!
//! - Taxonomy-backed attributes (e.g., `pa_color`) store a term *name*. The
//!   term is looked up once, then translated per language through the term
//!   translation index, and the translated term's slug becomes the value.
//! - Local attributes store free text with no cross-language identity. They
//!   are copied verbatim into every language.
//!
//! Anything that cannot be resolved is left out of that language's map.
//! Catalogs are often partially translated, so a gap is reported through
//! `tracing` and never as an error.

use std::fmt;

use tracing::{debug, trace};

use super::{
    data::{AttributeMap, DefaultAttributeTranslations, ProductId, TermId},
    store::{LanguageRegistry, ProductRepository, TermRepository},
};

/// A classified default attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeNode {
    /// Value backed by a term of a translated taxonomy.
    Taxonomy { term_id: TermId, taxonomy: String },
    /// Language-invariant value, copied as-is.
    Local { key: String, value: String },
}

/// Why a taxonomy-backed attribute is missing from a language's map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No term with the selected name exists in the taxonomy.
    TermNotFound,
    /// The term has no counterpart in the language.
    NotTranslated,
    /// The translation index points at a term that cannot be fetched.
    DanglingTranslation,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TermNotFound => write!(f, "term not found"),
            SkipReason::NotTranslated => write!(f, "term not translated"),
            SkipReason::DanglingTranslation => write!(f, "translated term not found"),
        }
    }
}

/// Computes a variable product's default attributes in every language.
///
/// Holds only borrowed lookups, so a resolver is cheap to build per request
/// and every call reads the current state of the store.
pub struct AttributeTranslationResolver<'a> {
    products: &'a dyn ProductRepository,
    terms: &'a dyn TermRepository,
    languages: &'a dyn LanguageRegistry,
}

impl<'a> AttributeTranslationResolver<'a> {
    pub fn new(
        products: &'a dyn ProductRepository,
        terms: &'a dyn TermRepository,
        languages: &'a dyn LanguageRegistry,
    ) -> Self {
        Self {
            products,
            terms,
            languages,
        }
    }

    /// Resolve the default attributes of `product_id`.
    ///
    /// With `language` set, only that language is resolved; otherwise every
    /// configured language is, the default language included. An empty
    /// `language` counts as unset. The result is empty when the product is
    /// unknown, not variable, or has no default attributes.
    pub fn resolve(
        &self,
        product_id: ProductId,
        language: Option<&str>,
    ) -> DefaultAttributeTranslations {
        let mut result = DefaultAttributeTranslations::new();

        let Some(product) = self.products.product(product_id) else {
            debug!(product = %product_id, "product not found, no default attributes");
            return result;
        };
        if !product.is_variable() {
            trace!(
                product = %product_id,
                product_type = %product.product_type,
                "not a variable product"
            );
            return result;
        }

        let attributes = self.products.default_attributes(&product);
        if attributes.is_empty() {
            return result;
        }

        let nodes = self.classify(&attributes);

        let languages: Vec<String> = match language.filter(|l| !l.is_empty()) {
            Some(language) => vec![language.to_string()],
            None => self
                .languages
                .languages()
                .into_iter()
                .map(|l| l.slug)
                .collect(),
        };

        for language in languages {
            let translated = self.translate_nodes(&nodes, &language);
            result.insert(language, translated);
        }

        result
    }

    /// Split default attributes into taxonomy and local nodes, keeping order.
    ///
    /// A taxonomy-backed key whose term cannot be found yields no node at
    /// all, so it is absent from every language.
    pub fn classify(&self, attributes: &AttributeMap) -> Vec<AttributeNode> {
        let mut nodes = Vec::with_capacity(attributes.len());

        for (key, value) in attributes.iter() {
            if !self.terms.is_taxonomy_backed(key) {
                trace!(attribute = key, "local attribute");
                nodes.push(AttributeNode::Local {
                    key: key.to_string(),
                    value: value.to_string(),
                });
                continue;
            }

            match self.terms.find_term_by_name(key, value) {
                Some(term) => nodes.push(AttributeNode::Taxonomy {
                    term_id: term.id,
                    taxonomy: term.taxonomy,
                }),
                None => debug!(
                    attribute = key,
                    value,
                    reason = %SkipReason::TermNotFound,
                    "skipping default attribute"
                ),
            }
        }

        nodes
    }

    /// Build one language's attribute map from classified nodes.
    ///
    /// Each call builds a fresh map, so maps of different languages never
    /// share storage.
    pub fn translate_nodes(&self, nodes: &[AttributeNode], language: &str) -> AttributeMap {
        let mut map = AttributeMap::new();

        for node in nodes {
            match node {
                AttributeNode::Taxonomy { term_id, taxonomy } => {
                    match self.translate_term(*term_id, taxonomy, language) {
                        Ok((taxonomy, slug)) => {
                            map.insert(taxonomy, slug);
                        }
                        Err(reason) => debug!(
                            term = %term_id,
                            taxonomy = taxonomy.as_str(),
                            language,
                            %reason,
                            "skipping default attribute"
                        ),
                    }
                }
                AttributeNode::Local { key, value } => {
                    map.insert(key.clone(), value.clone());
                }
            }
        }

        map
    }

    fn translate_term(
        &self,
        term_id: TermId,
        taxonomy: &str,
        language: &str,
    ) -> Result<(String, String), SkipReason> {
        let translated_id = self
            .terms
            .translate_term(term_id, language)
            .ok_or(SkipReason::NotTranslated)?;
        let term = self
            .terms
            .term(translated_id, taxonomy)
            .ok_or(SkipReason::DanglingTranslation)?;
        Ok((term.taxonomy, term.slug))
    }
}

/// Resolve default attribute translations of a product.
///
/// Convenience wrapper around [`AttributeTranslationResolver::resolve`].
pub fn resolve_default_attribute_translations(
    products: &dyn ProductRepository,
    terms: &dyn TermRepository,
    languages: &dyn LanguageRegistry,
    product_id: ProductId,
    language: Option<&str>,
) -> DefaultAttributeTranslations {
    AttributeTranslationResolver::new(products, terms, languages).resolve(product_id, language)
}
