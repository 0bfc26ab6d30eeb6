//! The schema-driven semantic rules
//!
//! Each rule is an independent, side-effect-free pass over the parsed
//! structure and the schema dictionaries. None of them abort: every tag and
//! every rule is evaluated even after earlier ones have failed, so a single
//! validation surfaces the complete issue set.

use crate::compile;
use crate::language::{HedGroupEntry, HedTag, ParsedHedString};
use crate::problem::{Issue, IssueKind};
use crate::schema::{SchemaDictionaries, CLOCK_TIME_UNIT_CLASS, DATE_TIME_UNIT_CLASS};
use crate::validation::units::{is_clock_face_time, is_date_time, is_valid_value, strip_off_units};
use crate::validation::ValidationOptions;

/// Run the per-tag checks over every tag in the string: the top-level list
/// and the direct members of each group, tracking the preceding tag within
/// each list for the missing-comma heuristic. The tracker resets at tildes
/// and at groups; the heuristic never crosses either boundary.
pub fn validate_individual_tags(
    parsed: &ParsedHedString,
    schema: &SchemaDictionaries,
    options: &ValidationOptions,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    // top-level tags and groups interleave; recover source order by offset
    let mut sequence = parsed
        .top_level_tags
        .iter()
        .map(|tag| (tag.offset, Some(tag)))
        .collect::<Vec<(usize, Option<&HedTag>)>>();
    for group in &parsed.top_level_groups {
        sequence.push((group.offset, None));
    }
    sequence.sort_by_key(|(offset, _)| *offset);

    let mut previous: Option<&HedTag> = None;
    for (_, entry) in sequence {
        match entry {
            Some(tag) if !tag.is_tilde() => {
                check_tag(tag, previous, schema, options, &mut issues);
                previous = Some(tag);
            }
            _ => previous = None,
        }
    }

    for group in parsed.all_groups() {
        let mut previous: Option<&HedTag> = None;
        for entry in &group.entries {
            match entry {
                HedGroupEntry::Tag(tag) => {
                    check_tag(tag, previous, schema, options, &mut issues);
                    previous = Some(tag);
                }
                _ => previous = None,
            }
        }
    }

    issues
}

fn check_tag(
    tag: &HedTag,
    previous: Option<&HedTag>,
    schema: &SchemaDictionaries,
    options: &ValidationOptions,
    issues: &mut Vec<Issue>,
) {
    check_if_tag_is_valid(tag, previous, schema, issues);
    check_capitalization(tag, schema, issues);
    check_if_tag_requires_child(tag, schema, issues);
    check_unit_class_units(tag, schema, options, issues);
    check_placeholder(tag, options, issues);
}

/// A tag is valid when it is a literal schema entry, when a value-taking
/// ancestor exists for it, or when it is the tilde. Otherwise it is either
/// a permitted extension under an extension-allowed ancestor, the spilled
/// value of the preceding value-taking tag, or simply invalid.
fn check_if_tag_is_valid(
    tag: &HedTag,
    previous: Option<&HedTag>,
    schema: &SchemaDictionaries,
    issues: &mut Vec<Issue>,
) {
    if schema.is_tag_known(&tag.formatted) {
        return;
    }
    if let Some(form) = tag.takes_value_form() {
        if schema.takes_value(&form) {
            return;
        }
    }

    let previous_takes_value = previous
        .and_then(|p| p.takes_value_form())
        .map(|form| schema.takes_value(&form))
        .unwrap_or(false);
    if previous_takes_value {
        // the preceding tag's value should have consumed this text, so the
        // more likely mistake is a comma inside that value
        issues.push(Issue::new(IssueKind::ExtraCommaOrInvalid {
            previous_tag: previous
                .map(|p| {
                    p.raw
                        .to_string()
                })
                .unwrap_or_default(),
            tag: tag
                .raw
                .to_string(),
        }));
        return;
    }

    let extension_allowed = tag
        .ancestors()
        .iter()
        .any(|ancestor| schema.extension_allowed(ancestor));
    if extension_allowed {
        issues.push(Issue::new(IssueKind::Extension {
            tag: tag
                .raw
                .to_string(),
        }));
    } else {
        issues.push(Issue::new(IssueKind::InvalidTag {
            tag: tag
                .raw
                .to_string(),
        }));
    }
}

/// Every path segment must start capitalized or contain a camel case word;
/// the value segment of a value-taking tag is exempt. One warning names the
/// whole original tag.
fn check_capitalization(tag: &HedTag, schema: &SchemaDictionaries, issues: &mut Vec<Issue>) {
    let mut names = tag
        .raw
        .split('/')
        .collect::<Vec<&str>>();

    let takes_value = tag
        .takes_value_form()
        .map(|form| schema.takes_value(&form))
        .unwrap_or(false);
    if takes_value {
        names.pop();
    }

    for name in names {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        let starts_lowercase = name
            .chars()
            .next()
            .map_or(false, |c| c.is_lowercase());
        let camel_case = compile!(r"([A-Z]+\s*[a-z]*)+");
        if starts_lowercase && !camel_case.is_match(name) {
            issues.push(Issue::new(IssueKind::Capitalization {
                tag: tag
                    .raw
                    .to_string(),
            }));
            return;
        }
    }
}

/// A tag listed as requiring a child must not itself be the leaf.
fn check_if_tag_requires_child(
    tag: &HedTag,
    schema: &SchemaDictionaries,
    issues: &mut Vec<Issue>,
) {
    if schema.requires_child(&tag.formatted) {
        issues.push(Issue::new(IssueKind::ChildRequired {
            tag: tag
                .raw
                .to_string(),
        }));
    }
}

/// For tags whose value-taking ancestor declares unit classes: a bare
/// numeric value means the default unit is being assumed (advisory), and a
/// value with trailing text must reduce to a valid number after unit
/// stripping (error, listing the legal units).
fn check_unit_class_units(
    tag: &HedTag,
    schema: &SchemaDictionaries,
    options: &ValidationOptions,
    issues: &mut Vec<Issue>,
) {
    let Some(form) = tag.takes_value_form() else {
        return;
    };
    let classes = schema.unit_classes_for(&form);
    if classes.is_empty() {
        return;
    }

    let original_value = tag.raw_name();
    let formatted_value = tag.name();

    // date and clock face values in the matching classes need no unit
    if classes
        .iter()
        .any(|class| class == DATE_TIME_UNIT_CLASS)
        && is_date_time(original_value)
    {
        return;
    }
    if classes
        .iter()
        .any(|class| class == CLOCK_TIME_UNIT_CLASS)
        && is_clock_face_time(original_value)
    {
        return;
    }

    if is_valid_value(formatted_value, options.allow_placeholders) {
        if let Some(default_unit) = schema.default_unit_for(&form) {
            issues.push(Issue::new(IssueKind::UnitClassDefaultUsed {
                tag: tag
                    .raw
                    .to_string(),
                default_unit: default_unit.to_string(),
            }));
        }
        return;
    }

    // an enumerated literal child such as a named value needs no unit
    if schema.is_tag_known(&tag.formatted) {
        return;
    }

    let mut units: Vec<String> = Vec::new();
    for class in classes {
        for unit in schema.units_for(class) {
            if !units.contains(unit) {
                units.push(unit.clone());
            }
        }
    }

    let stripped = strip_off_units(original_value, formatted_value, &units, schema);
    if !is_valid_value(&stripped.to_lowercase(), options.allow_placeholders) {
        let mut sorted = units;
        sorted.sort();
        issues.push(Issue::new(IssueKind::UnitClassInvalidUnit {
            tag: tag
                .raw
                .to_string(),
            unit_class_units: sorted.join(","),
        }));
    }
}

/// The placeholder marker is only legal when the caller enables it.
fn check_placeholder(tag: &HedTag, options: &ValidationOptions, issues: &mut Vec<Issue>) {
    if !options.allow_placeholders
        && tag
            .formatted
            .contains('#')
    {
        issues.push(Issue::new(IssueKind::InvalidPlaceholder {
            tag: tag
                .raw
                .to_string(),
        }));
    }
}

/// Two tags at the same level with equal canonical forms are duplicates.
/// A nested group is opaque to the level containing it; its own members
/// are checked separately when the group itself is visited.
pub fn validate_hed_tag_levels(parsed: &ParsedHedString) -> Vec<Issue> {
    let mut issues = Vec::new();

    let top = parsed
        .top_level_tags
        .iter()
        .collect::<Vec<&HedTag>>();
    check_for_duplicate_tags(&top, &mut issues);

    for group in parsed.all_groups() {
        check_for_duplicate_tags(&group.tags(), &mut issues);
    }

    issues
}

fn check_for_duplicate_tags(tags: &[&HedTag], issues: &mut Vec<Issue>) {
    let mut flagged = vec![false; tags.len()];

    for i in 0..tags.len() {
        if flagged[i] || tags[i].is_tilde() {
            continue;
        }
        for j in i + 1..tags.len() {
            if flagged[j] {
                continue;
            }
            if tags[i].formatted == tags[j].formatted {
                flagged[i] = true;
                flagged[j] = true;
                // report the original text when the two differ only in
                // case, otherwise the canonical form
                let text = if tags[i].raw == tags[j].raw {
                    tags[i]
                        .formatted
                        .clone()
                } else {
                    tags[i]
                        .raw
                        .to_string()
                };
                issues.push(Issue::new(IssueKind::DuplicateTag { tag: text }));
                break;
            }
        }
    }
}

/// At most one tag in the whole string may start with a schema-declared
/// unique prefix. Occurrences are counted across every level, so the same
/// unique tag repeated verbatim, or repeated inside a group, still trips
/// the check.
pub fn check_for_multiple_unique_tags(
    parsed: &ParsedHedString,
    schema: &SchemaDictionaries,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    let mut occurrences = parsed
        .top_level_tags
        .iter()
        .collect::<Vec<&HedTag>>();
    for group in parsed.all_groups() {
        occurrences.extend(group.tags());
    }

    for prefix in schema.unique_prefixes() {
        let count = occurrences
            .iter()
            .filter(|tag| {
                tag.formatted
                    .starts_with(prefix.as_str())
            })
            .count();
        if count > 1 {
            issues.push(Issue::new(IssueKind::MultipleUniqueTags {
                tag_prefix: prefix.clone(),
            }));
        }
    }

    issues
}

/// Every schema-declared required prefix must be carried by at least one
/// top-level tag.
pub fn check_for_required_tags(
    parsed: &ParsedHedString,
    schema: &SchemaDictionaries,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    for prefix in schema.required_prefixes() {
        let present = parsed
            .top_level_tags
            .iter()
            .any(|tag| {
                tag.formatted
                    .starts_with(prefix.as_str())
            });
        if !present {
            issues.push(Issue::new(IssueKind::RequiredPrefixMissing {
                tag_prefix: prefix.clone(),
            }));
        }
    }

    issues
}

/// Tildes partition a group into at most three positional roles; the limit
/// of two per group is a protocol constant, not configurable.
pub fn validate_hed_tag_groups(parsed: &ParsedHedString) -> Vec<Issue> {
    let mut issues = Vec::new();

    for group in parsed.all_groups() {
        if group.tilde_count() > 2 {
            issues.push(Issue::new(IssueKind::TooManyTildes {
                group: group
                    .original
                    .to_string(),
            }));
        }
    }

    issues
}
