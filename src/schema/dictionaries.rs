//! Attribute dictionaries distilled from one version of the HED schema.
//!
//! The validator consumes these as an opaque, read-only lookup interface;
//! building them from the schema XML is the loader's job, not ours. A
//! dictionary set is built once per schema version and shared by reference
//! across any number of validations.

use std::collections::{HashMap, HashSet};

use crate::language::format_hed_tag;

/// Values in this unit class may be written as an ISO-like date instead of
/// a number with a unit.
pub const DATE_TIME_UNIT_CLASS: &str = "dateTime";

/// Values in this unit class may be written as a clock face time instead of
/// a number with a unit.
pub const CLOCK_TIME_UNIT_CLASS: &str = "clockTime";

/// The attribute lookup tables the semantic rules consult. All tag keys are
/// held in canonical (formatted) form; the construction methods normalize,
/// so hand-built test dictionaries and a real schema loader meet the same
/// invariants.
#[derive(Debug, Default, Clone)]
pub struct SchemaDictionaries {
    tags: HashSet<String>,
    takes_value: HashSet<String>,
    unit_classes: HashMap<String, Vec<String>>,
    unit_class_units: HashMap<String, Vec<String>>,
    unit_class_defaults: HashMap<String, String>,
    tag_defaults: HashMap<String, String>,
    unique: Vec<String>,
    required: Vec<String>,
    requires_child: HashSet<String>,
    extension_allowed: HashSet<String>,
    unit_symbols: HashSet<String>,
    si_unit_modifiers: Vec<String>,
    si_unit_symbol_modifiers: Vec<String>,
}

impl SchemaDictionaries {
    pub fn new() -> SchemaDictionaries {
        SchemaDictionaries::default()
    }

    // construction, used by the schema loader and by tests

    /// Record a literal schema entry, for example "Event/Category/Miss".
    pub fn add_tag(&mut self, tag: &str) {
        self.tags
            .insert(format_hed_tag(tag));
    }

    /// Record a value-taking entry by its placeholder path, for example
    /// "Event/Duration/#".
    pub fn add_takes_value_tag(&mut self, tag: &str) {
        self.takes_value
            .insert(format_hed_tag(tag));
    }

    /// Attach unit classes to a value-taking entry.
    pub fn set_unit_classes(&mut self, tag: &str, classes: &[&str]) {
        self.unit_classes
            .insert(
                format_hed_tag(tag),
                classes
                    .iter()
                    .map(|class| class.to_string())
                    .collect(),
            );
    }

    /// Define a unit class with its legal units and default unit.
    pub fn add_unit_class(&mut self, name: &str, units: &[&str], default_unit: &str) {
        self.unit_class_units
            .insert(
                name.to_string(),
                units
                    .iter()
                    .map(|unit| unit.to_string())
                    .collect(),
            );
        self.unit_class_defaults
            .insert(name.to_string(), default_unit.to_string());
    }

    /// Override the default unit for one value-taking entry.
    pub fn set_tag_default_unit(&mut self, tag: &str, unit: &str) {
        self.tag_defaults
            .insert(format_hed_tag(tag), unit.to_string());
    }

    pub fn add_unique_prefix(&mut self, prefix: &str) {
        self.unique
            .push(format_hed_tag(prefix));
    }

    pub fn add_required_prefix(&mut self, prefix: &str) {
        self.required
            .push(format_hed_tag(prefix));
    }

    pub fn add_requires_child_tag(&mut self, tag: &str) {
        self.requires_child
            .insert(format_hed_tag(tag));
    }

    pub fn add_extension_allowed_tag(&mut self, tag: &str) {
        self.extension_allowed
            .insert(format_hed_tag(tag));
    }

    /// Mark a unit as a symbol: matched case-sensitively, never pluralized,
    /// prefixed by the symbol forms of the SI modifiers.
    pub fn add_unit_symbol(&mut self, unit: &str) {
        self.unit_symbols
            .insert(unit.to_string());
    }

    pub fn set_si_unit_modifiers(&mut self, modifiers: &[&str]) {
        self.si_unit_modifiers = modifiers
            .iter()
            .map(|modifier| modifier.to_string())
            .collect();
    }

    pub fn set_si_unit_symbol_modifiers(&mut self, modifiers: &[&str]) {
        self.si_unit_symbol_modifiers = modifiers
            .iter()
            .map(|modifier| modifier.to_string())
            .collect();
    }

    // lookups, used by the semantic rules

    pub fn is_tag_known(&self, formatted: &str) -> bool {
        self.tags
            .contains(formatted)
    }

    pub fn takes_value(&self, takes_value_form: &str) -> bool {
        self.takes_value
            .contains(takes_value_form)
    }

    pub fn unit_classes_for(&self, takes_value_form: &str) -> &[String] {
        self.unit_classes
            .get(takes_value_form)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn units_for(&self, unit_class: &str) -> &[String] {
        self.unit_class_units
            .get(unit_class)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The unit assumed when a unit-class value carries none: a per-tag
    /// default if one was declared, otherwise the first unit class that
    /// declares one.
    pub fn default_unit_for(&self, takes_value_form: &str) -> Option<&str> {
        if let Some(unit) = self
            .tag_defaults
            .get(takes_value_form)
        {
            return Some(unit);
        }
        self.unit_classes_for(takes_value_form)
            .iter()
            .find_map(|class| {
                self.unit_class_defaults
                    .get(class)
            })
            .map(String::as_str)
    }

    pub fn unique_prefixes(&self) -> &[String] {
        &self.unique
    }

    pub fn required_prefixes(&self) -> &[String] {
        &self.required
    }

    pub fn requires_child(&self, formatted: &str) -> bool {
        self.requires_child
            .contains(formatted)
    }

    pub fn extension_allowed(&self, formatted: &str) -> bool {
        self.extension_allowed
            .contains(formatted)
    }

    pub fn is_unit_symbol(&self, unit: &str) -> bool {
        self.unit_symbols
            .contains(unit)
    }

    pub fn si_unit_modifiers(&self) -> &[String] {
        &self.si_unit_modifiers
    }

    pub fn si_unit_symbol_modifiers(&self) -> &[String] {
        &self.si_unit_symbol_modifiers
    }
}
