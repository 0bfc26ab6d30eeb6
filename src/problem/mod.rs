// Structured issues reported by validation

mod messages;

use std::fmt;

use serde::Serialize;

/// Whether an issue invalidates the string outright or is advisory.
/// Warnings are appended to results only when the caller asks for them;
/// omitting them never changes which errors are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Every rule violation the validator can report, each with its fixed
/// parameter set. Serialized as `{"kind": "...", ...parameters}` with
/// camelCase names throughout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum IssueKind {
    #[serde(rename_all = "camelCase")]
    InvalidCharacter { character: char, index: usize },
    #[serde(rename_all = "camelCase")]
    Parentheses { opening: usize, closing: usize },
    #[serde(rename_all = "camelCase")]
    ExtraDelimiter { character: char, index: usize },
    #[serde(rename_all = "camelCase")]
    CommaMissing { tag: String },
    #[serde(rename_all = "camelCase")]
    InvalidTag { tag: String },
    #[serde(rename_all = "camelCase")]
    ExtraCommaOrInvalid { previous_tag: String, tag: String },
    #[serde(rename_all = "camelCase")]
    Extension { tag: String },
    #[serde(rename_all = "camelCase")]
    Capitalization { tag: String },
    #[serde(rename_all = "camelCase")]
    ChildRequired { tag: String },
    #[serde(rename_all = "camelCase")]
    UnitClassDefaultUsed { tag: String, default_unit: String },
    #[serde(rename_all = "camelCase")]
    UnitClassInvalidUnit { tag: String, unit_class_units: String },
    #[serde(rename_all = "camelCase")]
    DuplicateTag { tag: String },
    #[serde(rename_all = "camelCase")]
    MultipleUniqueTags { tag_prefix: String },
    #[serde(rename_all = "camelCase")]
    RequiredPrefixMissing { tag_prefix: String },
    #[serde(rename_all = "camelCase")]
    TooManyTildes { group: String },
    #[serde(rename_all = "camelCase")]
    InvalidPlaceholder { tag: String },
    #[serde(rename_all = "camelCase")]
    AttributeGroupBraces { index: usize },
}

impl IssueKind {
    /// The severity this kind carries unless overridden at construction.
    /// Extensions, capitalization problems, and assumed default units are
    /// advisory; everything else invalidates the string.
    fn default_severity(&self) -> Severity {
        match self {
            IssueKind::Extension { .. }
            | IssueKind::Capitalization { .. }
            | IssueKind::UnitClassDefaultUsed { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// One reported rule violation. Produced, never mutated, accumulated into
/// insertion-ordered lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    #[serde(flatten)]
    pub kind: IssueKind,
    pub severity: Severity,
}

impl Issue {
    pub fn new(kind: IssueKind) -> Issue {
        let severity = kind.default_severity();
        Issue { kind, severity }
    }

    /// An issue downgraded to advisory regardless of its kind's default,
    /// used for the character substitutions that never abort validation.
    pub fn warning(kind: IssueKind) -> Issue {
        Issue {
            kind,
            severity: Severity::Warning,
        }
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", messages::describe(&self.kind))
    }
}
