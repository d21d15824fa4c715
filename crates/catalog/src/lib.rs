//! Catalog domain module.
//!
//! This crate contains the product record and the pure helpers around it
//! (draft validation, category filtering, sample data), implemented as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod category;
pub mod draft;
pub mod product;
pub mod sample;

pub use category::{CATEGORY_ALL, distinct_categories, filter_by_category};
pub use draft::ProductDraft;
pub use product::{LOW_STOCK_THRESHOLD, Product};
pub use sample::sample_catalog;
