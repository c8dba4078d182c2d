//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and writes its results to the given output.

pub mod completions;
pub mod config;
pub mod discover;
pub mod interests;
pub mod trails;

// Re-export execute functions for convenience
pub use completions::execute as completions;
pub use config::execute as config;
pub use discover::execute as discover;
pub use interests::execute as interests;
pub use trails::execute as trails;
