//! URL handling module for Link-Census
//!
//! This module provides URL normalization (the page identity used for
//! deduplication), seed preparation, and origin membership tests.

mod domain;
mod normalize;
mod origin;
mod seed;

// Re-export main functions
pub use domain::base_token;
pub use normalize::normalize_url;
pub use origin::{Origin, OriginPolicy};
pub use seed::prepare_seed;
