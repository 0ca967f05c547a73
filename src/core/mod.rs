//! Core Module - Business Logic
//!
//! The three independent leaves: pattern scanning, compatibility lookup,
//! and AI recommendation. None depends on the others; all read the same
//! static catalog tables.

pub mod compat;
pub mod recommend;
pub mod scanner;

pub use compat::compare;
pub use recommend::{build_system_prompt, recommend};
pub use scanner::scan;
