#![forbid(unsafe_code)]

//! Core domain model and business logic for the MyChef recipe service.
//!
//! This crate provides:
//! - Domain types (recipes, ingredients, plans, grocery lists)
//! - Catalog loading (remote source, local archive, bundled fallback)
//! - Ingredient filtering and per-request category pools
//! - Weekly meal planning and quick dish recommendation
//! - Ingredient aggregation and shopping bucket classification

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod random;
pub mod loader;
pub mod filter;
pub mod pools;
pub mod aggregate;
pub mod shopping;
pub mod planner;
pub mod recommend;
pub mod cookbook;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::bundled_catalog;
pub use config::Config;
pub use loader::{load_archive, load_catalog};
pub use random::{IndexSource, RngSource, SequenceSource};
pub use aggregate::aggregate_ingredients;
pub use cookbook::{Cookbook, MealRequest, MAX_PEOPLE, MIN_PEOPLE};
