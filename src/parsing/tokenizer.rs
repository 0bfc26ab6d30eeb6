//! Splitting a raw annotation string into tags, tildes, and group substrings

use std::borrow::Cow;

use crate::problem::{Issue, IssueKind};

/// One token of the flat top-level scan. A parenthesized or curly-brace
/// group stays a single `Tag` token, delimiters inside it untouched; the
/// group resolver re-tokenizes its interior. Offsets are byte positions in
/// the scanned string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HedToken<'i> {
    Tag(Cow<'i, str>, usize),
    Tilde(usize),
}

/// Split a HED string on the commas and tildes that sit outside any group.
///
/// A single left-to-right scan tracks one shared depth counter pair for
/// parentheses and curly braces together; an attribute group nests like an
/// ordinary group as far as delimiters are concerned. Double quotes are
/// elided from the output but not depth-tracked. Square brackets are always
/// illegal and forcibly close the current token.
pub fn split_hed_string(source: &str) -> (Vec<HedToken<'_>>, Vec<Issue>) {
    let mut tokens = Vec::new();
    let mut issues = Vec::new();
    let mut open_count = 0;
    let mut close_count = 0;
    let mut start = 0;
    let mut last_delimiter: Option<(char, usize)> = None;

    for (i, c) in source.char_indices() {
        match c {
            '(' | '{' => {
                open_count += 1;
                last_delimiter = None;
            }
            ')' | '}' => {
                close_count += 1;
                last_delimiter = None;
            }
            '[' | ']' => {
                issues.push(Issue::new(IssueKind::InvalidCharacter {
                    character: c,
                    index: i,
                }));
                flush(source, start, i, &mut tokens);
                start = i + 1;
                last_delimiter = None;
            }
            ',' | '~' if open_count == close_count => {
                if flush(source, start, i, &mut tokens) {
                    last_delimiter = Some((c, i));
                } else {
                    issues.push(Issue::new(IssueKind::ExtraDelimiter {
                        character: c,
                        index: i,
                    }));
                    // already reported; the end-of-string check must not
                    // report it a second time
                    last_delimiter = None;
                }
                if c == '~' {
                    tokens.push(HedToken::Tilde(i));
                }
                start = i + 1;
            }
            '"' => {}
            c if c.is_whitespace() => {}
            _ => {
                last_delimiter = None;
            }
        }
    }

    if !flush(source, start, source.len(), &mut tokens) {
        // the string ended in a dangling comma or tilde
        if let Some((c, i)) = last_delimiter {
            issues.push(Issue::new(IssueKind::ExtraDelimiter {
                character: c,
                index: i,
            }));
        }
    }

    (tokens, issues)
}

/// Close the current token span, trimming whitespace and eliding quotes.
/// Returns false when nothing meaningful had accumulated.
fn flush<'i>(source: &'i str, start: usize, end: usize, tokens: &mut Vec<HedToken<'i>>) -> bool {
    let span = &source[start..end];
    let trimmed = span.trim();
    if trimmed.is_empty() {
        return false;
    }

    let offset = start + (span.len() - span.trim_start().len());

    let text = if trimmed.contains('"') {
        let stripped = trimmed
            .chars()
            .filter(|c| *c != '"')
            .collect::<String>();
        let stripped = stripped
            .trim()
            .to_string();
        if stripped.is_empty() {
            return false;
        }
        Cow::Owned(stripped)
    } else {
        Cow::Borrowed(trimmed)
    };

    tokens.push(HedToken::Tag(text, offset));
    true
}

/// Unequal parenthesis counts leave the group structure undefined, so this
/// is checked before any parsing is attempted.
pub fn count_tag_group_parentheses(source: &str) -> Option<Issue> {
    let opening = source
        .matches('(')
        .count();
    let closing = source
        .matches(')')
        .count();

    if opening != closing {
        Some(Issue::new(IssueKind::Parentheses { opening, closing }))
    } else {
        None
    }
}

/// A closing parenthesis or closing brace must be followed by a delimiter
/// or another closing bracket; anything else means the comma after the
/// group was forgotten.
fn find_comma_issues(source: &str) -> Option<Issue> {
    let mut current_tag = String::new();
    let mut last_meaningful: Option<char> = None;

    for c in source.chars() {
        current_tag.push(c);
        if c == ',' || c == '~' {
            current_tag.clear();
            last_meaningful = Some(c);
            continue;
        }
        if c.is_whitespace() {
            continue;
        }
        if matches!(last_meaningful, Some(')' | '}')) && c != ')' && c != '}' {
            return Some(Issue::new(IssueKind::CommaMissing {
                tag: current_tag
                    .trim()
                    .to_string(),
            }));
        }
        last_meaningful = Some(c);
    }

    None
}

/// The full-string structural check run before parsing: parenthesis count
/// balance, missing commas after groups, and the delimiter and character
/// issues from the top-level scan. Any issue found here is fatal to the
/// validation of the string.
pub fn check_hed_string_structure(source: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    if let Some(issue) = count_tag_group_parentheses(source) {
        issues.push(issue);
    }
    if let Some(issue) = find_comma_issues(source) {
        issues.push(issue);
    }

    let (_, mut delimiter_issues) = split_hed_string(source);
    issues.append(&mut delimiter_issues);

    issues
}
