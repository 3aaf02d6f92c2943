//! Prelude module for jalali_jdn crate.
//!
//! Re-exports commonly used derive macros from derive_more.

#[allow(unused_imports)]
pub use derive_more::{From, Into};
