//! Polycat - default-attribute translation for multilingual store catalogs
//!
//! Keeps variable products consistent across the language copies of a
//! catalog. Given a variable product, polycat computes its default attribute
//! selection in every configured language, translating taxonomy-backed values
//! through the term translation index and copying local values as-is. It also
//! recognizes simple translation drafts that are really variable products
//! waiting to be promoted.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands over a catalog snapshot)
//! - `config`: Configuration file loading and parsing
//! - `core`: Resolver, state detector and the store traits they read from

pub mod cli;
pub mod config;
pub mod core;
