use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::AttributeMap;

/// Identifier of a product (or a product variation) in the host store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a taxonomy term in the host store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermId(pub u64);

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product type as reported by the host store.
///
/// Only `Simple` and `Variable` drive any behavior here. Other types are
/// carried through so they can be reported, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductType {
    Simple,
    Variable,
    Grouped,
    External,
    Other(String),
}

impl ProductType {
    pub fn as_str(&self) -> &str {
        match self {
            ProductType::Simple => "simple",
            ProductType::Variable => "variable",
            ProductType::Grouped => "grouped",
            ProductType::External => "external",
            ProductType::Other(name) => name,
        }
    }
}

impl FromStr for ProductType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "simple" => ProductType::Simple,
            "variable" => ProductType::Variable,
            "grouped" => ProductType::Grouped,
            "external" => ProductType::External,
            other => ProductType::Other(other.to_string()),
        })
    }
}

impl From<String> for ProductType {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(product_type) => product_type,
            Err(never) => match never {},
        }
    }
}

impl From<ProductType> for String {
    fn from(value: ProductType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog product, read-only from this crate's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub product_type: ProductType,
    /// Pre-selected variation attributes, in declaration order.
    pub default_attributes: AttributeMap,
}

impl Product {
    pub fn new(id: ProductId, product_type: ProductType) -> Self {
        Self {
            id,
            product_type,
            default_attributes: AttributeMap::new(),
        }
    }

    pub fn with_default_attributes(mut self, attributes: AttributeMap) -> Self {
        self.default_attributes = attributes;
        self
    }

    pub fn is_variable(&self) -> bool {
        self.product_type == ProductType::Variable
    }

    pub fn is_simple(&self) -> bool {
        self.product_type == ProductType::Simple
    }
}

/// A term in a (possibly translated) taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: TermId,
    /// Taxonomy name, which is also the attribute key (e.g., "pa_color").
    pub taxonomy: String,
    pub slug: String,
    /// Human-readable name, the value stored in default attributes.
    pub name: String,
}

impl Term {
    pub fn new(
        id: TermId,
        taxonomy: impl Into<String>,
        slug: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            taxonomy: taxonomy.into(),
            slug: slug.into(),
            name: name.into(),
        }
    }
}

/// A configured store language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Language slug (e.g., "en", "fr").
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "default")]
    pub is_default: bool,
}

impl Language {
    pub fn new(slug: impl Into<String>, name: impl Into<String>, is_default: bool) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            is_default,
        }
    }
}
