//! Core library for the catalog-import command line application.
//!
//! The library turns Shopify-style CSV product exports into a normalized
//! in-memory catalog. The modules are structured to keep responsibilities
//! narrow and composable: the CSV tokenizer and the soft-failing HTTP loader
//! live under [`io`], data representations inside [`model`], the row
//! aggregation in [`catalog`], and the orchestration entry points under
//! [`import`].

pub mod catalog;
pub mod error;
pub mod import;
pub mod io;
pub mod model;

pub use error::{ImportError, Result};
