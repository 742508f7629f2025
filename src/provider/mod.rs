//! Search provider module
//!
//! Defines the provider wire contract, the [`SearchBackend`] trait and the
//! Exa implementation of it.

mod exa;
mod traits;
mod types;

pub use exa::ExaBackend;
pub use traits::*;
pub use types::*;
