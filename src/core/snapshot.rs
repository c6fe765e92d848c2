//! JSON catalog snapshot.
//!
//! An in-memory implementation of the store traits, loaded from a JSON export
//! of the host catalog:
//!
//! ```json
//! {
//!   "languages": [{"slug": "en", "name": "English", "default": true}],
//!   "taxonomies": ["pa_color"],
//!   "terms": [
//!     {"id": 1, "taxonomy": "pa_color", "slug": "red", "name": "Red",
//!      "translations": {"en": 1, "fr": 2}}
//!   ],
//!   "products": [
//!     {"id": 10, "type": "variable", "defaultAttributes": {"pa_color": "Red"},
//!      "variations": [11, 12], "translations": {"en": 10, "fr": 20}}
//!   ]
//! }
//! ```
//!
//! A term or product lists itself under its own language in `translations`.
//! Translations keep their document order.

use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Deserializer, de::DeserializeOwned, de::Error as _};
use serde_json::{Map, Value};

use super::{
    data::{AttributeMap, Language, Product, ProductId, ProductType, Term, TermId},
    store::{LanguageRegistry, ProductRepository, TermRepository},
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotFile {
    #[serde(default)]
    languages: Vec<Language>,
    #[serde(default)]
    taxonomies: Vec<String>,
    #[serde(default)]
    terms: Vec<TermRecord>,
    #[serde(default)]
    products: Vec<ProductRecord>,
}

#[derive(Debug, Clone, Deserialize)]
struct TermRecord {
    #[serde(flatten)]
    term: Term,
    #[serde(default, deserialize_with = "ordered_pairs")]
    translations: Vec<(String, TermId)>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    id: ProductId,
    #[serde(rename = "type")]
    product_type: ProductType,
    #[serde(default)]
    default_attributes: AttributeMap,
    #[serde(default)]
    variations: Vec<ProductId>,
    #[serde(default, deserialize_with = "ordered_pairs")]
    translations: Vec<(String, ProductId)>,
}

/// Read a `{"lang": id}` object as pairs, in document order.
fn ordered_pairs<'de, D, Id>(deserializer: D) -> Result<Vec<(String, Id)>, D::Error>
where
    D: Deserializer<'de>,
    Id: DeserializeOwned,
{
    Map::<String, Value>::deserialize(deserializer)?
        .into_iter()
        .map(|(lang, id)| {
            let id = serde_json::from_value::<Id>(id)
                .map_err(|e| D::Error::custom(format!("translation \"{}\": {}", lang, e)))?;
            Ok::<_, D::Error>((lang, id))
        })
        .collect()
}

fn translation_of<Id: Copy>(translations: &[(String, Id)], language: &str) -> Option<Id> {
    translations
        .iter()
        .find(|(lang, _)| lang == language)
        .map(|(_, id)| *id)
}

impl ProductRecord {
    fn to_product(&self) -> Product {
        Product::new(self.id, self.product_type.clone())
            .with_default_attributes(self.default_attributes.clone())
    }
}

/// In-memory catalog implementing every store trait.
#[derive(Debug, Default, Clone)]
pub struct CatalogSnapshot {
    languages: Vec<Language>,
    taxonomies: HashSet<String>,
    /// Terms in document order; `find_term_by_name` returns the first match.
    terms: Vec<TermRecord>,
    term_index: HashMap<TermId, usize>,
    products: HashMap<ProductId, ProductRecord>,
}

impl CatalogSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {:?}", path))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse catalog file: {:?}", path))
    }

    /// Parse a snapshot from JSON text.
    ///
    /// Duplicate product or term ids are rejected.
    pub fn from_json(content: &str) -> Result<Self> {
        let file: SnapshotFile = serde_json::from_str(content)?;

        let mut snapshot = Self::new();
        for language in file.languages {
            if snapshot.language(&language.slug).is_some() {
                bail!("Duplicate language \"{}\"", language.slug);
            }
            snapshot.languages.push(language);
        }
        snapshot.taxonomies.extend(file.taxonomies);
        for record in file.terms {
            if snapshot.term_index.contains_key(&record.term.id) {
                bail!("Duplicate term id {}", record.term.id);
            }
            snapshot.insert_term(record);
        }
        for record in file.products {
            if snapshot.products.contains_key(&record.id) {
                bail!("Duplicate product id {}", record.id);
            }
            snapshot.products.insert(record.id, record);
        }

        Ok(snapshot)
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.languages.retain(|l| l.slug != language.slug);
        self.languages.push(language);
        self
    }

    /// Mark a taxonomy as translated (its terms have per-language copies).
    pub fn with_taxonomy(mut self, taxonomy: impl Into<String>) -> Self {
        self.taxonomies.insert(taxonomy.into());
        self
    }

    /// Add or replace a term together with its translations.
    pub fn with_term(mut self, term: Term, translations: &[(&str, TermId)]) -> Self {
        self.insert_term(TermRecord {
            term,
            translations: translations
                .iter()
                .map(|(lang, id)| (lang.to_string(), *id))
                .collect(),
        });
        self
    }

    /// Add or replace a product with its variation children and translations.
    pub fn with_product(
        mut self,
        product: Product,
        variations: &[ProductId],
        translations: &[(&str, ProductId)],
    ) -> Self {
        let record = ProductRecord {
            id: product.id,
            product_type: product.product_type,
            default_attributes: product.default_attributes,
            variations: variations.to_vec(),
            translations: translations
                .iter()
                .map(|(lang, id)| (lang.to_string(), *id))
                .collect(),
        };
        self.products.insert(record.id, record);
        self
    }

    pub fn language(&self, slug: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.slug == slug)
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    fn insert_term(&mut self, record: TermRecord) {
        match self.term_index.get(&record.term.id) {
            Some(&index) => self.terms[index] = record,
            None => {
                self.term_index.insert(record.term.id, self.terms.len());
                self.terms.push(record);
            }
        }
    }

    fn term_record(&self, id: TermId) -> Option<&TermRecord> {
        self.term_index.get(&id).map(|&index| &self.terms[index])
    }
}

impl ProductRepository for CatalogSnapshot {
    fn product(&self, id: ProductId) -> Option<Product> {
        self.products.get(&id).map(ProductRecord::to_product)
    }

    fn count_variation_children(&self, id: ProductId) -> usize {
        self.products.get(&id).map_or(0, |p| p.variations.len())
    }

    fn product_translations(&self, id: ProductId) -> Vec<(String, ProductId)> {
        self.products
            .get(&id)
            .map_or_else(Vec::new, |p| p.translations.clone())
    }
}

impl TermRepository for CatalogSnapshot {
    fn find_term_by_name(&self, taxonomy: &str, name: &str) -> Option<Term> {
        self.terms
            .iter()
            .find(|r| r.term.taxonomy == taxonomy && r.term.name == name)
            .map(|r| r.term.clone())
    }

    fn term(&self, id: TermId, taxonomy: &str) -> Option<Term> {
        self.term_record(id)
            .filter(|r| r.term.taxonomy == taxonomy)
            .map(|r| r.term.clone())
    }

    fn translate_term(&self, id: TermId, language: &str) -> Option<TermId> {
        translation_of(&self.term_record(id)?.translations, language)
    }

    fn is_taxonomy_backed(&self, key: &str) -> bool {
        self.taxonomies.contains(key)
    }

    fn term_translations(&self, id: TermId) -> Vec<(String, TermId)> {
        self.term_record(id)
            .map_or_else(Vec::new, |r| r.translations.clone())
    }
}

impl LanguageRegistry for CatalogSnapshot {
    fn languages(&self) -> Vec<Language> {
        self.languages.clone()
    }
}
