//! Leave policy configuration loading.
//!
//! Policies are explicit values passed into every calculation; this module
//! only provides the file-format plumbing to obtain one.

mod loader;

pub use loader::PolicyLoader;
