//! Small display helpers used next to the formatters.

pub mod collections;
pub mod layout;
pub mod text;

// Re-exports for convenience
pub use collections::*;
pub use layout::*;
pub use text::*;
