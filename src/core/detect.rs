//! Variable-product transitional state.
//!
//! Translating a variable product happens in two steps. The translation is
//! first duplicated as a plain "simple" product, and only later promoted to
//! "variable" once its variations have been copied over. Between the two
//! steps the draft looks simple but must not be treated as a final simple
//! product.
//!
//! The state is never stored. It is recomputed from the product and the
//! current request on every call:
//!
//! ```text
//! SimpleFinal --(translation duplicated)--> SimplePendingVariable --(promoted)--> Variable
//! ```

use std::fmt;

use serde::Serialize;
use tracing::trace;

use super::{
    data::{Product, ProductId, ProductType},
    store::ProductRepository,
};

/// Post type of the product edit screens.
pub const PRODUCT_POST_TYPE: &str = "product";

/// Screen action of the "add new" screen.
pub const ADD_ACTION: &str = "add";

/// A product given either by id or as an already fetched entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductRef {
    Id(ProductId),
    Entity(Product),
}

impl From<ProductId> for ProductRef {
    fn from(id: ProductId) -> Self {
        ProductRef::Id(id)
    }
}

impl From<Product> for ProductRef {
    fn from(product: Product) -> Self {
        ProductRef::Entity(product)
    }
}

/// The admin screen the current request renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenContext {
    pub post_type: String,
    pub action: String,
}

impl ScreenContext {
    pub fn new(post_type: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            post_type: post_type.into(),
            action: action.into(),
        }
    }

    /// The "add new product" screen.
    pub fn add_new_product() -> Self {
        Self::new(PRODUCT_POST_TYPE, ADD_ACTION)
    }

    pub fn is_add_new_product(&self) -> bool {
        self.post_type == PRODUCT_POST_TYPE && self.action == ADD_ACTION
    }
}

/// What the host knows about the current request.
///
/// Every field is optional; a missing field counts as "no".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub screen: Option<ScreenContext>,
    /// Source post of a translation being created (`from_post`).
    pub from_post: Option<ProductId>,
    /// Language of a translation being created (`new_lang`).
    pub new_lang: Option<String>,
    /// Variation children count, when the host already has it.
    /// Looked up through the product repository otherwise.
    pub variation_children: Option<usize>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_screen(mut self, screen: ScreenContext) -> Self {
        self.screen = Some(screen);
        self
    }

    /// Mark the request as a translation duplication of `from_post` into `new_lang`.
    pub fn with_translation(mut self, from_post: ProductId, new_lang: impl Into<String>) -> Self {
        self.from_post = Some(from_post);
        self.new_lang = Some(new_lang.into());
        self
    }

    pub fn with_variation_children(mut self, count: usize) -> Self {
        self.variation_children = Some(count);
        self
    }

    pub fn is_add_new_product(&self) -> bool {
        self.screen
            .as_ref()
            .is_some_and(ScreenContext::is_add_new_product)
    }

    /// Both translation markers are present.
    pub fn is_translation_duplication(&self) -> bool {
        self.from_post.is_some() && self.new_lang.is_some()
    }
}

/// Classification of a product with respect to variations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductState {
    /// A simple product that is meant to stay simple.
    SimpleFinal,
    /// A simple translation draft of a variable product, not yet promoted.
    SimplePendingVariable,
    Variable,
    /// Any other product type (grouped, external, ...).
    Other,
}

impl ProductState {
    pub fn is_variable_or_pending(self) -> bool {
        matches!(
            self,
            ProductState::Variable | ProductState::SimplePendingVariable
        )
    }
}

impl fmt::Display for ProductState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductState::SimpleFinal => write!(f, "simple"),
            ProductState::SimplePendingVariable => write!(f, "simple (pending variable)"),
            ProductState::Variable => write!(f, "variable"),
            ProductState::Other => write!(f, "other"),
        }
    }
}

/// Detects simple products that are really variable products mid-translation.
pub struct VariableProductStateDetector<'a> {
    products: &'a dyn ProductRepository,
}

impl<'a> VariableProductStateDetector<'a> {
    pub fn new(products: &'a dyn ProductRepository) -> Self {
        Self { products }
    }

    /// Classify a product, or `None` when an id does not resolve to a product.
    pub fn classify(
        &self,
        product: impl Into<ProductRef>,
        context: &RequestContext,
    ) -> Option<ProductState> {
        let product = match product.into() {
            ProductRef::Id(id) => self.products.product(id)?,
            ProductRef::Entity(product) => product,
        };

        let state = match product.product_type {
            ProductType::Variable => ProductState::Variable,
            ProductType::Simple if self.is_pending(&product, context) => {
                ProductState::SimplePendingVariable
            }
            ProductType::Simple => ProductState::SimpleFinal,
            _ => ProductState::Other,
        };
        trace!(product = %product.id, %state, "classified product");

        Some(state)
    }

    /// True only for a simple product on the "add new product" screen of a
    /// translation duplication request, that already has variations.
    pub fn is_pending_variable_product(
        &self,
        product: impl Into<ProductRef>,
        context: &RequestContext,
    ) -> bool {
        self.classify(product, context) == Some(ProductState::SimplePendingVariable)
    }

    /// True for variable products and for pending-variable drafts.
    pub fn maybe_variable_product(
        &self,
        product: impl Into<ProductRef>,
        context: &RequestContext,
    ) -> bool {
        self.classify(product, context)
            .is_some_and(ProductState::is_variable_or_pending)
    }

    fn is_pending(&self, product: &Product, context: &RequestContext) -> bool {
        if !context.is_add_new_product() || !context.is_translation_duplication() {
            return false;
        }
        let children = context
            .variation_children
            .unwrap_or_else(|| self.products.count_variation_children(product.id));
        children > 0
    }
}

/// Whether a product is a simple draft awaiting promotion to variable.
///
/// Convenience wrapper around [`VariableProductStateDetector::is_pending_variable_product`].
pub fn is_pending_variable_product(
    products: &dyn ProductRepository,
    product: impl Into<ProductRef>,
    context: &RequestContext,
) -> bool {
    VariableProductStateDetector::new(products).is_pending_variable_product(product, context)
}
