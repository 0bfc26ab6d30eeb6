//! Types representing the structure of a HED annotation string

use std::borrow::Cow;

/// The delimiter separating positional roles within a group.
pub const TILDE: &str = "~";

/// Namespace prepended to the bare values found inside a curly-brace
/// attribute group, turning them into full tag paths.
pub const ATTRIBUTE_GROUP_PREFIX: &str = "Attribute/";

/// Normalize a raw tag into its canonical form: strip a single wrapping
/// double-quote at either end, then a single leading or trailing path
/// separator, then lowercase. Two tags are semantically equal iff their
/// formatted forms are equal. Formatting is idempotent.
pub fn format_hed_tag(tag: &str) -> String {
    let tag = tag.trim();
    let tag = tag
        .strip_prefix('"')
        .unwrap_or(tag);
    let tag = tag
        .strip_suffix('"')
        .unwrap_or(tag);
    let tag = tag
        .strip_prefix('/')
        .unwrap_or(tag);
    let tag = tag
        .strip_suffix('/')
        .unwrap_or(tag);
    tag.to_lowercase()
}

/// A single tag as written by the user, together with its canonical form.
/// The raw text is borrowed from the source string except for the
/// pseudo-tags synthesized from attribute groups, which are owned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HedTag<'i> {
    pub raw: Cow<'i, str>,
    pub formatted: String,
    pub offset: usize,
}

impl<'i> HedTag<'i> {
    pub fn new(raw: Cow<'i, str>, offset: usize) -> HedTag<'i> {
        let formatted = format_hed_tag(&raw);
        HedTag {
            raw,
            formatted,
            offset,
        }
    }

    pub fn tilde(offset: usize) -> HedTag<'i> {
        HedTag::new(Cow::Borrowed(TILDE), offset)
    }

    pub fn is_tilde(&self) -> bool {
        self.formatted == TILDE
    }

    /// The final path segment of the canonical form; for value-taking tags
    /// this is the value.
    pub fn name(&self) -> &str {
        self.formatted
            .rsplit('/')
            .next()
            .unwrap_or(&self.formatted)
    }

    /// The final path segment of the raw text, preserving the original
    /// capitalization. Unit symbols are matched case-sensitively against
    /// this.
    pub fn raw_name(&self) -> &str {
        let raw = self
            .raw
            .trim();
        let raw = raw
            .strip_suffix('/')
            .unwrap_or(raw);
        raw.rsplit('/')
            .next()
            .unwrap_or(raw)
    }

    /// The canonical form with the final segment removed, if there is more
    /// than one segment.
    pub fn parent(&self) -> Option<&str> {
        self.formatted
            .rfind('/')
            .map(|i| &self.formatted[..i])
    }

    /// The key under which a value-taking ancestor of this tag would be
    /// listed: the parent path with the value segment replaced by '#'.
    pub fn takes_value_form(&self) -> Option<String> {
        self.parent()
            .map(|parent| format!("{}/#", parent))
    }

    /// Every proper prefix of this tag ending at a path separator, longest
    /// first.
    pub fn ancestors(&self) -> Vec<&str> {
        let mut result = Vec::new();
        let mut rest = self
            .formatted
            .as_str();
        while let Some(i) = rest.rfind('/') {
            rest = &rest[..i];
            result.push(rest);
        }
        result
    }
}

/// One member of a group. Nested groups are owned by their parent and are
/// treated as opaque single units by the per-level semantic checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HedGroupEntry<'i> {
    Tag(HedTag<'i>),
    Tilde(HedTag<'i>),
    Group(HedGroup<'i>),
}

/// A parenthesized (or curly-brace attribute) cluster of tags and nested
/// groups, with the original source text retained for issue messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HedGroup<'i> {
    pub entries: Vec<HedGroupEntry<'i>>,
    pub original: Cow<'i, str>,
    pub offset: usize,
}

impl<'i> HedGroup<'i> {
    /// The direct tag members of this group, excluding tildes and nested
    /// groups.
    pub fn tags(&self) -> Vec<&HedTag<'i>> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                HedGroupEntry::Tag(tag) => Some(tag),
                _ => None,
            })
            .collect()
    }

    pub fn tilde_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, HedGroupEntry::Tilde(_)))
            .count()
    }
}

/// The result of parsing one annotation string. Immutable once parsing
/// completes; discarded after validation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedHedString<'i> {
    /// Every tag appearing anywhere in the string, in order of first
    /// appearance, deduplicated by formatted form.
    pub tags: Vec<HedTag<'i>>,
    /// Tags appearing outside any group, in order, duplicates preserved.
    pub top_level_tags: Vec<HedTag<'i>>,
    /// The group trees, in source order. Each group owns its children.
    pub top_level_groups: Vec<HedGroup<'i>>,
}

impl<'i> ParsedHedString<'i> {
    /// Record a tag in the unique tag list unless an equal one is already
    /// present.
    pub fn note_tag(&mut self, tag: &HedTag<'i>) {
        if !self
            .tags
            .iter()
            .any(|t| t.formatted == tag.formatted)
        {
            self.tags
                .push(tag.clone());
        }
    }

    /// All groups in the string, children before parents.
    pub fn all_groups(&self) -> Vec<&HedGroup<'i>> {
        fn visit<'a, 'i>(group: &'a HedGroup<'i>, acc: &mut Vec<&'a HedGroup<'i>>) {
            for entry in &group.entries {
                if let HedGroupEntry::Group(child) = entry {
                    visit(child, acc);
                }
            }
            acc.push(group);
        }

        let mut acc = Vec::new();
        for group in &self.top_level_groups {
            visit(group, &mut acc);
        }
        acc
    }
}
