//! Catalog Module - Static Hand-Curated Tables
//!
//! The standards catalog and its annotation tables (health, known-safe,
//! compatibility, gas, L2). Immutable after process start; integrity is
//! checked once at startup via `validate_catalog`.

pub mod compat;
pub mod gas;
pub mod health;
pub mod standards;
pub mod validate;

pub use compat::get_rule;
pub use gas::{get_gas_profile, get_l2_support};
pub use health::{get_health, is_known_safe};
pub use standards::{
    all_standards, categories, get_standard, is_known_standard, search_standards,
    standards_by_category,
};
pub use validate::validate_catalog;
