#[cfg(test)]
mod verify {
    use hed_validator::problem::{Issue, IssueKind};
    use hed_validator::validation::{
        validate_hed_event, validate_hed_string, ValidationOptions,
    };

    use crate::support::test_schema;

    fn warnings_on() -> ValidationOptions {
        ValidationOptions {
            check_for_warnings: true,
            ..Default::default()
        }
    }

    #[test]
    fn a_complete_event_passes() {
        let schema = test_schema();
        let result = validate_hed_event(
            "Event/Category/Experimental stimulus,Event/Label/Trial 1,Event/Description/A trial",
            Some(&schema),
            &warnings_on(),
        );
        assert!(result.is_valid);
        assert_eq!(result.issues, vec![]);
    }

    #[test]
    fn a_default_unit_warning_invalidates_when_warnings_count() {
        let schema = test_schema();
        let result = validate_hed_string("Event/Duration/3", Some(&schema), &warnings_on());
        assert!(!result.is_valid);
        assert_eq!(
            result.issues,
            vec![Issue::new(IssueKind::UnitClassDefaultUsed {
                tag: "Event/Duration/3".to_string(),
                default_unit: "s".to_string()
            })]
        );
    }

    #[test]
    fn warnings_are_dropped_by_default() {
        let schema = test_schema();
        let result = validate_hed_string(
            "Event/Duration/3",
            Some(&schema),
            &ValidationOptions::default(),
        );
        assert!(result.is_valid);
        assert_eq!(result.issues, vec![]);
    }

    #[test]
    fn duplicates_are_an_event_level_error() {
        let repeated = "Event/Category/Experimental stimulus,Event/Category/Experimental stimulus";

        let result = validate_hed_event(repeated, None, &ValidationOptions::default());
        assert!(!result.is_valid);
        assert_eq!(
            result.issues,
            vec![Issue::new(IssueKind::DuplicateTag {
                tag: "event/category/experimental stimulus".to_string()
            })]
        );

        // bare string validation does not look for duplicates
        let result = validate_hed_string(repeated, None, &ValidationOptions::default());
        assert!(result.is_valid);
    }

    #[test]
    fn a_unique_tag_repeated_inside_a_group_fails_the_event() {
        let schema = test_schema();
        let result = validate_hed_event(
            "Event/Category/Experimental stimulus,Event/Label/A,Event/Description/D,(Event/Label/A)",
            Some(&schema),
            &ValidationOptions::default(),
        );
        assert!(!result.is_valid);
        assert_eq!(
            result.issues,
            vec![Issue::new(IssueKind::MultipleUniqueTags {
                tag_prefix: "event/label".to_string()
            })]
        );
    }

    #[test]
    fn missing_required_prefixes_fail_only_event_validation() {
        let schema = test_schema();
        let options = ValidationOptions::default();

        let result = validate_hed_string("Item/Object/Vehicle/Bus", Some(&schema), &options);
        assert!(result.is_valid);

        let result = validate_hed_event("Item/Object/Vehicle/Bus", Some(&schema), &options);
        assert!(!result.is_valid);
        assert_eq!(
            result
                .issues
                .len(),
            3
        );
        assert!(result
            .issues
            .iter()
            .all(|issue| matches!(issue.kind, IssueKind::RequiredPrefixMissing { .. })));
    }

    #[test]
    fn structural_problems_stop_validation() {
        let result = validate_hed_string("(A,B", None, &ValidationOptions::default());
        assert!(!result.is_valid);
        assert_eq!(
            result.issues,
            vec![Issue::new(IssueKind::Parentheses {
                opening: 1,
                closing: 0
            })]
        );
    }

    #[test]
    fn parse_problems_stop_semantic_checks() {
        let schema = test_schema();
        let result = validate_hed_string("Tag {A", Some(&schema), &ValidationOptions::default());
        assert!(!result.is_valid);
        assert_eq!(
            result.issues,
            vec![Issue::new(IssueKind::AttributeGroupBraces { index: 4 })]
        );
    }

    #[test]
    fn control_characters_become_spaces_and_advisories() {
        let schema = test_schema();
        let annotated = "Event/Label/A\tB";

        let result = validate_hed_string(annotated, Some(&schema), &warnings_on());
        assert!(!result.is_valid);
        assert_eq!(
            result.issues,
            vec![Issue::warning(IssueKind::InvalidCharacter {
                character: '\t',
                index: 13
            })]
        );

        // the substitution never aborts: with warnings off the string passes
        let result = validate_hed_string(annotated, Some(&schema), &ValidationOptions::default());
        assert!(result.is_valid);
    }

    #[test]
    fn schemaless_validation_is_syntax_only() {
        let result = validate_hed_string(
            "Totally/Unknown/Tag,(a ~ b)",
            None,
            &ValidationOptions::default(),
        );
        assert!(result.is_valid);
    }

    #[test]
    fn results_serialize_as_camel_case_json() {
        let result = validate_hed_event("A,B,A", None, &ValidationOptions::default());

        let json = match serde_json::to_value(&result) {
            Ok(json) => json,
            Err(error) => panic!("serialization failed: {}", error),
        };
        assert_eq!(
            json,
            serde_json::json!({
                "isValid": false,
                "issues": [{
                    "kind": "duplicateTag",
                    "tag": "a",
                    "severity": "error"
                }]
            })
        );
    }
}
