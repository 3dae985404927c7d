//! Command implementations for droid-cli

pub mod completions;
pub mod keys;
pub mod resolve;

pub use completions::run_completions;
pub use keys::run_keys;
pub use resolve::{run_check, run_resolve};
