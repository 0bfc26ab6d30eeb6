// Types representing a parsed HED annotation string

mod types;

// Re-export all public symbols
pub use types::*;
