use crate::problem::IssueKind;

/// Generate the human-readable message for an issue. These are the texts
/// shown by the command line tool; callers wanting localized or styled
/// output should match on the kind instead.
pub fn describe(kind: &IssueKind) -> String {
    match kind {
        IssueKind::InvalidCharacter { character, index } => {
            format!("Invalid character '{}' at index {}", character, index)
        }
        IssueKind::Parentheses { opening, closing } => format!(
            "Number of opening and closing parentheses are unequal: {} opening, {} closing",
            opening, closing
        ),
        IssueKind::ExtraDelimiter { character, index } => format!(
            "Extra delimiter '{}' at index {}",
            character, index
        ),
        IssueKind::CommaMissing { tag } => {
            format!("Comma missing after '{}'", tag)
        }
        IssueKind::InvalidTag { tag } => format!("Invalid tag '{}'", tag),
        IssueKind::ExtraCommaOrInvalid { previous_tag, tag } => format!(
            "Either '{}' contains a comma when it should not, or '{}' is not a valid tag",
            previous_tag, tag
        ),
        IssueKind::Extension { tag } => {
            format!("Tag extension found: '{}'", tag)
        }
        IssueKind::Capitalization { tag } => format!(
            "First word not capitalized or camel case: '{}'",
            tag
        ),
        IssueKind::ChildRequired { tag } => {
            format!("Descendant tag required for '{}'", tag)
        }
        IssueKind::UnitClassDefaultUsed { tag, default_unit } => format!(
            "No unit specified on '{}'; using '{}' as the default",
            tag, default_unit
        ),
        IssueKind::UnitClassInvalidUnit {
            tag,
            unit_class_units,
        } => format!(
            "Invalid unit on '{}'; valid units are '{}'",
            tag, unit_class_units
        ),
        IssueKind::DuplicateTag { tag } => {
            format!("Duplicate tag '{}'", tag)
        }
        IssueKind::MultipleUniqueTags { tag_prefix } => format!(
            "Multiple tags with the unique prefix '{}'",
            tag_prefix
        ),
        IssueKind::RequiredPrefixMissing { tag_prefix } => format!(
            "A tag with the prefix '{}' is required",
            tag_prefix
        ),
        IssueKind::TooManyTildes { group } => {
            format!("Too many tildes in the group '{}'", group)
        }
        IssueKind::InvalidPlaceholder { tag } => {
            format!("Invalid placeholder in '{}'", tag)
        }
        IssueKind::AttributeGroupBraces { index } => format!(
            "Mismatched curly braces in the attribute group at index {}",
            index
        ),
    }
}
