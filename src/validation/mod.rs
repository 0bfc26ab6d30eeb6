//! Sequencing the syntactic and semantic validation of annotation strings

pub mod rules;
pub mod units;

use serde::Serialize;
use tracing::debug;

use crate::parsing::tokenizer::check_hed_string_structure;
use crate::problem::{Issue, IssueKind};
use crate::schema::SchemaDictionaries;

#[derive(Debug, Default, Clone, Copy)]
pub struct ValidationOptions {
    /// Append advisory issues to the result. Never changes which errors
    /// are reported.
    pub check_for_warnings: bool,
    /// Accept a literal '#' wherever a numeric value is required.
    pub allow_placeholders: bool,
}

/// The outcome of validating one annotation string. The string is valid
/// iff the issue list is empty; warnings, when requested, count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub issues: Vec<Issue>,
}

impl ValidationResult {
    fn from_issues(issues: Vec<Issue>) -> ValidationResult {
        ValidationResult {
            is_valid: issues.is_empty(),
            issues,
        }
    }
}

/// Validate a bare annotation string: character substitution, structural
/// check, parse, then the per-tag semantic rules when a schema is supplied
/// (passing no schema gives syntax-only validation). Required-tag and
/// duplicate/uniqueness enforcement belong to event validation.
pub fn validate_hed_string(
    hed_string: &str,
    schema: Option<&SchemaDictionaries>,
    options: &ValidationOptions,
) -> ValidationResult {
    validate(hed_string, schema, options, false)
}

/// Validate a full annotation event string: everything the bare string
/// validation does, plus per-level duplicate, unique-prefix, and
/// required-prefix enforcement.
pub fn validate_hed_event(
    hed_string: &str,
    schema: Option<&SchemaDictionaries>,
    options: &ValidationOptions,
) -> ValidationResult {
    validate(hed_string, schema, options, true)
}

fn validate(
    hed_string: &str,
    schema: Option<&SchemaDictionaries>,
    options: &ValidationOptions,
    event_level: bool,
) -> ValidationResult {
    let (cleaned, substitutions) = substitute_characters(hed_string);

    // any structural issue leaves the group structure undefined, so stop
    let structural = check_hed_string_structure(&cleaned);
    if !structural.is_empty() {
        debug!("structural issues: {}", structural.len());
        return finish(substitutions, structural, options);
    }

    let parsed = match crate::parsing::parse(&cleaned) {
        Ok(parsed) => parsed,
        Err(parse_issues) => return finish(substitutions, parse_issues, options),
    };

    // the semantic rules all accumulate; none aborts the others
    let mut issues = Vec::new();
    if let Some(schema) = schema {
        issues.extend(rules::validate_individual_tags(&parsed, schema, options));
    }
    issues.extend(rules::validate_hed_tag_groups(&parsed));
    if event_level {
        issues.extend(rules::validate_hed_tag_levels(&parsed));
        if let Some(schema) = schema {
            issues.extend(rules::check_for_multiple_unique_tags(&parsed, schema));
            issues.extend(rules::check_for_required_tags(&parsed, schema));
        }
    }

    finish(substitutions, issues, options)
}

/// Illegal control characters are replaced with a space before any other
/// processing. The substitutions are reported as advisory issues and never
/// abort validation.
fn substitute_characters(input: &str) -> (String, Vec<Issue>) {
    let mut output = String::with_capacity(input.len());
    let mut issues = Vec::new();

    for (i, c) in input.char_indices() {
        if c.is_control() {
            output.push(' ');
            issues.push(Issue::warning(IssueKind::InvalidCharacter {
                character: c,
                index: i,
            }));
        } else {
            output.push(c);
        }
    }

    (output, issues)
}

fn finish(
    substitutions: Vec<Issue>,
    mut issues: Vec<Issue>,
    options: &ValidationOptions,
) -> ValidationResult {
    let mut all = substitutions;
    all.append(&mut issues);
    if !options.check_for_warnings {
        all.retain(|issue| !issue.is_warning());
    }
    ValidationResult::from_issues(all)
}
