#[cfg(test)]
mod verify {
    use hed_validator::language::{HedGroupEntry, ParsedHedString};
    use hed_validator::parsing::parser::parse_hed_string;
    use hed_validator::problem::{Issue, IssueKind};

    fn parse(content: &str) -> ParsedHedString<'_> {
        let (parsed, issues) = parse_hed_string(content);
        assert_eq!(issues, vec![]);
        parsed
    }

    fn formatted_tags(parsed: &ParsedHedString) -> Vec<String> {
        parsed
            .tags
            .iter()
            .map(|tag| {
                tag.formatted
                    .clone()
            })
            .collect()
    }

    #[test]
    fn tags_and_top_level_tags() {
        let parsed = parse("Event/Category/Experimental stimulus,(A,B),C");

        assert_eq!(
            formatted_tags(&parsed),
            vec!["event/category/experimental stimulus", "a", "b", "c"]
        );

        let top = parsed
            .top_level_tags
            .iter()
            .map(|tag| tag.raw.as_ref())
            .collect::<Vec<&str>>();
        assert_eq!(top, vec!["Event/Category/Experimental stimulus", "C"]);

        assert_eq!(
            parsed
                .top_level_groups
                .len(),
            1
        );
        assert_eq!(parsed.top_level_groups[0].tags().len(), 2);
    }

    #[test]
    fn duplicate_raw_tags_are_recorded_once() {
        let parsed = parse("A,A");
        assert_eq!(
            parsed
                .tags
                .len(),
            1
        );
        // but the top level list preserves both occurrences
        assert_eq!(
            parsed
                .top_level_tags
                .len(),
            2
        );
    }

    #[test]
    fn nested_groups_are_resolved_children_first() {
        let parsed = parse("(A,(B,C))");

        let groups = parsed.all_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].original, "(B,C)");
        assert_eq!(groups[1].original, "(A,(B,C))");

        // the nested group sits inside its parent as a single entry
        let outer = groups[1];
        assert_eq!(outer.entries.len(), 2);
        assert!(matches!(outer.entries[0], HedGroupEntry::Tag(_)));
        assert!(matches!(outer.entries[1], HedGroupEntry::Group(_)));
    }

    #[test]
    fn tildes_inside_groups_are_counted() {
        let parsed = parse("(a ~ b ~ c)");
        assert_eq!(parsed.all_groups()[0].tilde_count(), 2);
    }

    #[test]
    fn attribute_groups_synthesize_full_tag_paths() {
        let parsed = parse("Vehicle/Train {Red, Large}");

        assert_eq!(
            parsed
                .top_level_groups
                .len(),
            1
        );
        let group = &parsed.top_level_groups[0];
        let members = group
            .tags()
            .iter()
            .map(|tag| tag.raw.as_ref())
            .collect::<Vec<&str>>();
        assert_eq!(
            members,
            vec!["Vehicle/Train", "Attribute/Red", "Attribute/Large"]
        );

        assert_eq!(
            formatted_tags(&parsed),
            vec!["vehicle/train", "attribute/red", "attribute/large"]
        );

        // the attribute group token is not a top level tag
        assert_eq!(
            parsed
                .top_level_tags
                .len(),
            0
        );
    }

    #[test]
    fn issues_inside_groups_carry_absolute_positions() {
        let (_, issues) = parse_hed_string("(a,,b)");
        assert_eq!(
            issues,
            vec![Issue::new(IssueKind::ExtraDelimiter {
                character: ',',
                index: 3
            })]
        );

        // one level deeper, the index still points into the whole string
        let (_, issues) = parse_hed_string("x,(a,,b)");
        assert_eq!(
            issues,
            vec![Issue::new(IssueKind::ExtraDelimiter {
                character: ',',
                index: 5
            })]
        );

        let (_, issues) = parse_hed_string("Tag {Red,,Blue}");
        assert_eq!(
            issues,
            vec![Issue::new(IssueKind::ExtraDelimiter {
                character: ',',
                index: 9
            })]
        );
    }

    #[test]
    fn text_after_the_closing_brace_is_reported() {
        let (parsed, issues) = parse_hed_string("Tag {Red} Lost");
        assert_eq!(
            issues,
            vec![Issue::new(IssueKind::AttributeGroupBraces { index: 10 })]
        );
        // nothing is silently kept from the malformed token
        assert_eq!(
            parsed
                .top_level_groups
                .len(),
            0
        );
    }

    #[test]
    fn unclosed_attribute_brace() {
        let (_, issues) = parse_hed_string("Tag {Red");
        assert_eq!(
            issues,
            vec![Issue::new(IssueKind::AttributeGroupBraces { index: 4 })]
        );
    }

    #[test]
    fn closing_brace_before_opening_brace() {
        let (_, issues) = parse_hed_string("Tag }Red{");
        assert_eq!(
            issues,
            vec![Issue::new(IssueKind::AttributeGroupBraces { index: 4 })]
        );
    }

    #[test]
    fn unopened_closing_brace() {
        let (_, issues) = parse_hed_string("Tag Red}");
        assert_eq!(
            issues,
            vec![Issue::new(IssueKind::AttributeGroupBraces { index: 7 })]
        );
    }

    #[test]
    fn tilde_appears_in_the_tag_list() {
        let parsed = parse("a ~ b");
        assert_eq!(formatted_tags(&parsed), vec!["a", "~", "b"]);
        assert_eq!(
            parsed
                .top_level_tags
                .len(),
            3
        );
    }
}
