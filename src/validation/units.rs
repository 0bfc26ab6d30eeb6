//! Stripping legal units off the trailing value of a unit-class tag

use crate::compile;
use crate::schema::SchemaDictionaries;

/// Units with no distinct plural form.
const UNCOUNTABLE_UNITS: [&str; 1] = ["hertz"];

/// A generic numeric value: integer, decimal, or scientific notation.
pub fn is_number(value: &str) -> bool {
    compile!(r"^[-+]?(\d+(\.\d*)?|\.\d+)([Ee][-+]?\d+)?$").is_match(value)
}

/// A valid terminal value: a number, or the placeholder marker when
/// placeholders are allowed.
pub fn is_valid_value(value: &str, allow_placeholders: bool) -> bool {
    if allow_placeholders && value == "#" {
        return true;
    }
    is_number(value)
}

/// An HH:MM or HH:MM:SS clock face time.
pub fn is_clock_face_time(value: &str) -> bool {
    compile!(r"^([01]\d|2[0-3]):[0-5]\d(:[0-5]\d)?$").is_match(value)
}

/// An ISO-like date, optionally with a time part.
pub fn is_date_time(value: &str) -> bool {
    compile!(r"^\d{4}-\d{2}-\d{2}([T ]([01]\d|2[0-3]):[0-5]\d(:[0-5]\d)?)?$").is_match(value)
}

/// The regular English plural of a unit name.
pub fn pluralize_unit(unit: &str) -> String {
    if UNCOUNTABLE_UNITS.contains(&unit) {
        return unit.to_string();
    }
    if unit.ends_with('s')
        || unit.ends_with('x')
        || unit.ends_with('z')
        || unit.ends_with("ch")
        || unit.ends_with("sh")
    {
        format!("{}es", unit)
    } else if unit.ends_with('y') && !ends_with_vowel_then_y(unit) {
        format!("{}ies", &unit[..unit.len() - 1])
    } else {
        format!("{}s", unit)
    }
}

fn ends_with_vowel_then_y(unit: &str) -> bool {
    let mut chars = unit
        .chars()
        .rev();
    chars.next();
    matches!(chars.next(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}

/// Find a legal unit at either end of the value, remove it, and return the
/// trimmed remainder. Candidate units are tried in descending length order
/// so a longer unit wins over a shorter one that is also a substring of
/// it. Symbol units are matched case-sensitively against the original
/// value, are never pluralized, and take the symbol forms of the SI
/// modifiers; word units are matched case-insensitively against the
/// formatted value, in singular or plural, with the full-word modifiers.
/// When no unit matches, the original value is returned unchanged, which
/// callers treat as "no unit found".
pub fn strip_off_units(
    original_value: &str,
    formatted_value: &str,
    units: &[String],
    schema: &SchemaDictionaries,
) -> String {
    let mut candidates = units
        .iter()
        .map(String::as_str)
        .collect::<Vec<&str>>();
    candidates.sort_by(|a, b| {
        b.len()
            .cmp(&a.len())
            .then_with(|| a.cmp(b))
    });

    for unit in candidates {
        if schema.is_unit_symbol(unit) {
            let mut forms = vec![unit.to_string()];
            for modifier in schema.si_unit_symbol_modifiers() {
                forms.push(format!("{}{}", modifier, unit));
            }
            if let Some(rest) = strip_forms(original_value, &forms) {
                return rest;
            }
        } else {
            let unit = unit.to_lowercase();
            let mut forms = vec![unit.clone(), pluralize_unit(&unit)];
            for modifier in schema.si_unit_modifiers() {
                let modifier = modifier.to_lowercase();
                forms.push(format!("{}{}", modifier, unit));
                forms.push(format!("{}{}", modifier, pluralize_unit(&unit)));
            }
            if let Some(rest) = strip_forms(formatted_value, &forms) {
                return rest;
            }
        }
    }

    original_value.to_string()
}

/// Remove the longest matching form from either end of the value.
fn strip_forms(value: &str, forms: &[String]) -> Option<String> {
    let mut forms = forms
        .iter()
        .map(String::as_str)
        .collect::<Vec<&str>>();
    forms.sort_by(|a, b| {
        b.len()
            .cmp(&a.len())
    });

    for form in forms {
        if form.is_empty() {
            continue;
        }
        if let Some(rest) = value.strip_prefix(form) {
            return Some(
                rest.trim()
                    .to_string(),
            );
        }
        if let Some(rest) = value.strip_suffix(form) {
            return Some(
                rest.trim()
                    .to_string(),
            );
        }
    }

    None
}
