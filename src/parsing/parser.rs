//! Resolving the flat token list into tags, groups, and top-level tags

use std::borrow::Cow;
use std::ops::Range;

use crate::language::{HedGroup, HedGroupEntry, HedTag, ParsedHedString, ATTRIBUTE_GROUP_PREFIX};
use crate::parsing::tokenizer::{split_hed_string, HedToken};
use crate::problem::{Issue, IssueKind};

/// Parse a HED string into its structured form, returning the structure
/// together with any issues the scan raised. Callers treat a non-empty
/// issue list as fatal; the structure is not meaningful in that case.
pub fn parse_hed_string(source: &str) -> (ParsedHedString<'_>, Vec<Issue>) {
    let (tokens, mut issues) = split_hed_string(source);
    let mut parsed = ParsedHedString::default();

    for token in tokens {
        match token {
            HedToken::Tilde(offset) => {
                let tag = HedTag::tilde(offset);
                parsed.note_tag(&tag);
                parsed
                    .top_level_tags
                    .push(tag);
            }
            HedToken::Tag(text, offset) => {
                if is_group_token(&text) {
                    let group = resolve_group(text, offset, &mut parsed, &mut issues);
                    parsed
                        .top_level_groups
                        .push(group);
                } else if is_attribute_group_token(&text) {
                    if let Some(group) =
                        resolve_attribute_group(text, offset, &mut parsed, &mut issues)
                    {
                        parsed
                            .top_level_groups
                            .push(group);
                    }
                } else {
                    let tag = HedTag::new(text, offset);
                    parsed.note_tag(&tag);
                    parsed
                        .top_level_tags
                        .push(tag);
                }
            }
        }
    }

    (parsed, issues)
}

/// A token is a group when, trimmed, it is wrapped in parentheses. The
/// tokenizer trims before emitting.
fn is_group_token(text: &str) -> bool {
    text.starts_with('(') && text.ends_with(')')
}

/// Any curly brace makes a token an attribute group candidate; a stray
/// closing brace is reported from the same place as an unclosed pair.
fn is_attribute_group_token(text: &str) -> bool {
    text.contains('{') || text.contains('}')
}

/// Strip the parentheses off a group token, re-tokenize the interior, and
/// classify each member, recursing into nested groups. Children are
/// completed before the parent group is assembled.
fn resolve_group<'i>(
    text: Cow<'i, str>,
    offset: usize,
    parsed: &mut ParsedHedString<'i>,
    issues: &mut Vec<Issue>,
) -> HedGroup<'i> {
    let end = text.len() - 1;
    let (tokens, mut sub_issues) = split_token_interior(&text, 1..end, offset + 1);
    issues.append(&mut sub_issues);

    let entries = resolve_members(tokens, offset + 1, parsed, issues);

    HedGroup {
        entries,
        original: text,
        offset,
    }
}

fn resolve_members<'i>(
    tokens: Vec<HedToken<'i>>,
    base: usize,
    parsed: &mut ParsedHedString<'i>,
    issues: &mut Vec<Issue>,
) -> Vec<HedGroupEntry<'i>> {
    let mut entries = Vec::new();

    for token in tokens {
        match token {
            HedToken::Tilde(offset) => {
                let tag = HedTag::tilde(base + offset);
                parsed.note_tag(&tag);
                entries.push(HedGroupEntry::Tilde(tag));
            }
            HedToken::Tag(text, offset) => {
                let offset = base + offset;
                if is_group_token(&text) {
                    let group = resolve_group(text, offset, parsed, issues);
                    entries.push(HedGroupEntry::Group(group));
                } else if is_attribute_group_token(&text) {
                    if let Some(group) = resolve_attribute_group(text, offset, parsed, issues) {
                        entries.push(HedGroupEntry::Group(group));
                    }
                } else {
                    let tag = HedTag::new(text, offset);
                    parsed.note_tag(&tag);
                    entries.push(HedGroupEntry::Tag(tag));
                }
            }
        }
    }

    entries
}

/// An attribute group is a primary tag followed by a brace-delimited list
/// of qualifier values. Each value is synthesized into a full tag path by
/// prefixing the attribute namespace, and the primary tag plus synthesized
/// tags form one new group.
fn resolve_attribute_group<'i>(
    text: Cow<'i, str>,
    offset: usize,
    parsed: &mut ParsedHedString<'i>,
    issues: &mut Vec<Issue>,
) -> Option<HedGroup<'i>> {
    let open = text.find('{');
    let close = text.find('}');

    let (open, close) = match (open, close) {
        (Some(open), Some(close)) if open < close => (open, close),
        // unclosed opening brace
        (Some(open), None) => {
            issues.push(Issue::new(IssueKind::AttributeGroupBraces {
                index: offset + open,
            }));
            return None;
        }
        // closing brace with no opening one before it
        (_, Some(close)) => {
            issues.push(Issue::new(IssueKind::AttributeGroupBraces {
                index: offset + close,
            }));
            return None;
        }
        (None, None) => return None,
    };

    // a brace group ends the token; any text after it got lost
    let trailing = &text[close + 1..];
    if !trailing
        .trim()
        .is_empty()
    {
        let start = close + 1 + (trailing.len() - trailing.trim_start().len());
        issues.push(Issue::new(IssueKind::AttributeGroupBraces {
            index: offset + start,
        }));
        return None;
    }

    let mut entries = Vec::new();

    let primary = &text[..open];
    let trimmed = primary.trim();
    if !trimmed.is_empty() {
        let start = primary.len() - primary.trim_start().len();
        let raw = slice_token(&text, start..start + trimmed.len());
        let tag = HedTag::new(raw, offset + start);
        parsed.note_tag(&tag);
        entries.push(HedGroupEntry::Tag(tag));
    }

    let (tokens, mut sub_issues) = split_token_interior(&text, open + 1..close, offset + open + 1);
    issues.append(&mut sub_issues);

    for token in tokens {
        match token {
            HedToken::Tilde(i) => {
                let tag = HedTag::tilde(offset + open + 1 + i);
                parsed.note_tag(&tag);
                entries.push(HedGroupEntry::Tilde(tag));
            }
            HedToken::Tag(attribute, i) => {
                let raw = Cow::Owned(format!("{}{}", ATTRIBUTE_GROUP_PREFIX, attribute));
                let tag = HedTag::new(raw, offset + open + 1 + i);
                parsed.note_tag(&tag);
                entries.push(HedGroupEntry::Tag(tag));
            }
        }
    }

    Some(HedGroup {
        entries,
        original: text,
        offset,
    })
}

/// Re-tokenize a range of a token. The interior of a borrowed token is
/// itself borrowed from the source string; the interior of an owned token
/// (one that had quotes elided) yields owned tokens. Issue indices are
/// shifted by `base` so they point into the original string, not the
/// interior.
fn split_token_interior<'i>(
    text: &Cow<'i, str>,
    range: Range<usize>,
    base: usize,
) -> (Vec<HedToken<'i>>, Vec<Issue>) {
    let (tokens, issues) = match text {
        Cow::Borrowed(s) => {
            let s: &'i str = *s;
            split_hed_string(&s[range])
        }
        Cow::Owned(s) => {
            let (tokens, issues) = split_hed_string(&s[range]);
            (
                tokens
                    .into_iter()
                    .map(own_token)
                    .collect(),
                issues,
            )
        }
    };

    let issues = issues
        .into_iter()
        .map(|issue| rebase_issue(issue, base))
        .collect();

    (tokens, issues)
}

fn rebase_issue(issue: Issue, base: usize) -> Issue {
    let kind = match issue.kind {
        IssueKind::InvalidCharacter { character, index } => IssueKind::InvalidCharacter {
            character,
            index: base + index,
        },
        IssueKind::ExtraDelimiter { character, index } => IssueKind::ExtraDelimiter {
            character,
            index: base + index,
        },
        kind => kind,
    };
    Issue {
        kind,
        severity: issue.severity,
    }
}

fn slice_token<'i>(text: &Cow<'i, str>, range: Range<usize>) -> Cow<'i, str> {
    match text {
        Cow::Borrowed(s) => {
            let s: &'i str = *s;
            Cow::Borrowed(&s[range])
        }
        Cow::Owned(s) => Cow::Owned(s[range].to_string()),
    }
}

fn own_token<'a, 'b>(token: HedToken<'a>) -> HedToken<'b> {
    match token {
        HedToken::Tag(text, offset) => HedToken::Tag(Cow::Owned(text.into_owned()), offset),
        HedToken::Tilde(offset) => HedToken::Tilde(offset),
    }
}
