#[cfg(test)]
mod locales {
    use message_print::language::PluralKind;
    use message_print::parsing;
    use message_print::plurals::{self, PluralRules, RuleTable};

    fn problems(pattern: &str, locale: &str) -> Vec<String> {
        let message = parsing::parse(pattern).unwrap();
        plurals::check(&message, locale, &RuleTable::builtin())
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn every_builtin_locale_has_other() {
        let table = RuleTable::builtin();

        for locale in ["ar", "cy", "de", "en", "es", "fr", "it", "ja", "pl", "pt", "ru", "zh"] {
            let rules = table
                .rules(locale)
                .unwrap_or_else(|| panic!("No builtin rules for {}", locale));

            assert!(rules.defines(PluralKind::Cardinal, "other"), "{}", locale);
            assert!(rules.defines(PluralKind::Ordinal, "other"), "{}", locale);
        }
    }

    #[test]
    fn english_plurals() {
        assert!(problems(
            "{ n, plural, =0 {none} one {# item} other {# items} }",
            "en"
        )
        .is_empty());

        assert_eq!(
            problems("{ n, plural, one {a} few {b} other {c} }", "en"),
            vec!["en has no \"few\" cardinal plural rule"]
        );
    }

    #[test]
    fn ordinals_are_checked_separately() {
        assert!(problems(
            "{ n, selectordinal, one {#st} two {#nd} few {#rd} other {#th} }",
            "en"
        )
        .is_empty());

        assert_eq!(
            problems("{ n, selectordinal, one {#st} other {#th} }", "de"),
            vec!["de has no \"one\" ordinal plural rule"]
        );
    }

    #[test]
    fn regional_locales_fall_back() {
        assert_eq!(
            problems("{ n, plural, one {a} many {b} other {c} }", "en_GB"),
            vec!["en_GB has no \"many\" cardinal plural rule"]
        );
        assert!(problems("{ n, plural, one {a} few {b} many {c} other {d} }", "pl-PL").is_empty());
    }

    #[test]
    fn nested_messages_are_searched() {
        let pattern = "{ g, select, female {{ n, plural, two {x} other {y} }} other {z} }";

        assert_eq!(
            problems(pattern, "ja"),
            vec!["ja has no \"two\" cardinal plural rule"]
        );
        assert!(problems(pattern, "ar").is_empty());
    }

    #[test]
    fn unknown_locales_report_nothing() {
        assert!(problems("{ n, plural, few {a} other {b} }", "tlh").is_empty());
    }

    #[test]
    fn custom_tables_from_json() {
        let table = RuleTable::from_json(r#"{ "xx_YY": { "cardinal": ["one", "other"] } }"#).unwrap();

        assert_eq!(table.closest_locale("xx-yy-latn"), Some("xx-yy"));
        assert_eq!(table.closest_locale("xx"), None);

        let message = parsing::parse("{ n, selectordinal, one {a} other {b} }").unwrap();
        let found = plurals::check(&message, "xx-YY", &table);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, PluralKind::Ordinal);

        assert!(RuleTable::from_json("[1, 2]").is_err());
    }
}
