#[cfg(test)]
mod verify {
    use hed_validator::schema::SchemaDictionaries;
    use hed_validator::validation::units::strip_off_units;

    fn units(names: &[&str]) -> Vec<String> {
        names
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    #[test]
    fn longer_units_are_tried_first() {
        let schema = SchemaDictionaries::new();
        // were "s" tried first it would leave "3 econd" behind
        let stripped = strip_off_units("3 second", "3 second", &units(&["s", "second"]), &schema);
        assert_eq!(stripped, "3");
    }

    #[test]
    fn word_units_match_case_insensitively_and_pluralized() {
        let schema = SchemaDictionaries::new();
        let stripped = strip_off_units("3 Seconds", "3 seconds", &units(&["second"]), &schema);
        assert_eq!(stripped, "3");
    }

    #[test]
    fn uncountable_units_take_no_plural() {
        let schema = SchemaDictionaries::new();
        let stripped = strip_off_units("3 hertz", "3 hertz", &units(&["hertz"]), &schema);
        assert_eq!(stripped, "3");
    }

    #[test]
    fn symbol_units_match_case_sensitively() {
        let mut schema = SchemaDictionaries::new();
        schema.add_unit_symbol("Hz");

        let stripped = strip_off_units("3 Hz", "3 hz", &units(&["Hz"]), &schema);
        assert_eq!(stripped, "3");

        // the lowercase form is not the symbol, so nothing is stripped
        let stripped = strip_off_units("3 hz", "3 hz", &units(&["Hz"]), &schema);
        assert_eq!(stripped, "3 hz");
    }

    #[test]
    fn si_modifiers_extend_word_units() {
        let mut schema = SchemaDictionaries::new();
        schema.set_si_unit_modifiers(&["milli", "kilo"]);

        let stripped = strip_off_units(
            "3 milliseconds",
            "3 milliseconds",
            &units(&["second"]),
            &schema,
        );
        assert_eq!(stripped, "3");
    }

    #[test]
    fn si_symbol_modifiers_extend_symbol_units() {
        let mut schema = SchemaDictionaries::new();
        schema.add_unit_symbol("s");
        schema.set_si_unit_symbol_modifiers(&["m", "k"]);

        let stripped = strip_off_units("3 ms", "3 ms", &units(&["s"]), &schema);
        assert_eq!(stripped, "3");
    }

    #[test]
    fn units_may_prefix_the_value() {
        let mut schema = SchemaDictionaries::new();
        schema.add_unit_symbol("$");

        let stripped = strip_off_units("$100", "$100", &units(&["$"]), &schema);
        assert_eq!(stripped, "100");
    }

    #[test]
    fn no_match_returns_the_original_value() {
        let schema = SchemaDictionaries::new();
        let stripped = strip_off_units("3 parsecs", "3 parsecs", &units(&["second"]), &schema);
        assert_eq!(stripped, "3 parsecs");
    }
}
