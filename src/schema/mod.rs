// Read-only schema attribute dictionaries

mod dictionaries;

// Re-export all public symbols
pub use dictionaries::*;
