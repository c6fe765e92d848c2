//! Translation lookups for products, terms and languages.

use super::{
    data::{Language, Product, ProductId, TermId},
    store::{LanguageRegistry, ProductRepository, TermRepository},
};

/// Translations of a product, as `(language slug, product id)` pairs.
///
/// With `exclude_default`, the default language is left out.
pub fn product_translations(
    products: &dyn ProductRepository,
    languages: &dyn LanguageRegistry,
    id: ProductId,
    exclude_default: bool,
) -> Vec<(String, ProductId)> {
    let translations = products.product_translations(id);
    without_default(translations, languages, exclude_default)
}

/// Translations of a term, as `(language slug, term id)` pairs.
///
/// With `exclude_default`, the default language is left out.
pub fn term_translations(
    terms: &dyn TermRepository,
    languages: &dyn LanguageRegistry,
    id: TermId,
    exclude_default: bool,
) -> Vec<(String, TermId)> {
    let translations = terms.term_translations(id);
    without_default(translations, languages, exclude_default)
}

/// The translation of a product in `language`.
///
/// Falls back to the product itself when it has no translation in that
/// language, or when the translation cannot be fetched. `None` only when
/// `id` itself is unknown.
pub fn product_translation(
    products: &dyn ProductRepository,
    id: ProductId,
    language: &str,
) -> Option<Product> {
    let product = products.product(id)?;

    let translated = products
        .product_translations(id)
        .into_iter()
        .find(|(lang, _)| lang == language)
        .and_then(|(_, translated_id)| products.product(translated_id));

    Some(translated.unwrap_or(product))
}

/// Find a configured language by slug.
pub fn language_entity(languages: &dyn LanguageRegistry, slug: &str) -> Option<Language> {
    languages.languages().into_iter().find(|l| l.slug == slug)
}

fn without_default<Id>(
    mut translations: Vec<(String, Id)>,
    languages: &dyn LanguageRegistry,
    exclude_default: bool,
) -> Vec<(String, Id)> {
    if exclude_default && let Some(default) = languages.default_language() {
        translations.retain(|(lang, _)| *lang != default.slug);
    }
    translations
}
