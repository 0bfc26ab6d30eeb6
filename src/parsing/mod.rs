//! parser for HED annotation strings

use tracing::debug;

use crate::language::ParsedHedString;
use crate::problem::Issue;

pub mod parser;
pub mod tokenizer;

/// Parse an annotation string into a ParsedHedString, or return the list
/// of issues encountered. Issues raised during parsing (illegal characters,
/// malformed attribute-group braces) leave the structure undefined, so the
/// two never travel together.
pub fn parse(content: &str) -> Result<ParsedHedString<'_>, Vec<Issue>> {
    let (parsed, issues) = parser::parse_hed_string(content);

    if issues.is_empty() {
        let tags = parsed
            .tags
            .len();
        let groups = parsed
            .top_level_groups
            .len();
        debug!(
            "Found {} tag{} and {} group{}",
            tags,
            if tags == 1 { "" } else { "s" },
            groups,
            if groups == 1 { "" } else { "s" }
        );
        Ok(parsed)
    } else {
        debug!("issues: {}", issues.len());
        Err(issues)
    }
}
