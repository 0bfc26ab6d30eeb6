//! Parsing and validation of HED (Hierarchical Event Descriptor) annotation
//! strings: comma-delimited tag paths, parenthesized groups, tilde role
//! separators, and curly-brace attribute groups, checked syntactically and
//! against a versioned schema's attribute dictionaries.

pub mod language;
pub mod parsing;
pub mod problem;
pub mod schema;
pub mod validation;

mod regex;
