//! Shared test utilities for the droid-config workspace.
//!
//! Dev-dependency only. Provides a [`TestProject`] laid out like a Flutter
//! app with an Android wrapper, plus canned descriptor contents.

pub mod project;

pub use project::{TestProject, WF3_DESCRIPTOR, WF3_LOCAL_PROPERTIES};
