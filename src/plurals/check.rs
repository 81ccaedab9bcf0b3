use std::fmt;

use tracing::debug;

use crate::language::*;
use crate::plurals::{keywords, PluralRules};

/// A selector keyword that the locale's plural rules never produce, so the
/// branch it labels can never be chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralProblem {
    pub locale: String,
    pub keyword: String,
    pub kind: PluralKind,
}

impl fmt::Display for PluralProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category = match self.kind {
            PluralKind::Cardinal => "cardinal",
            PluralKind::Ordinal => "ordinal",
        };
        write!(
            f,
            "{} has no \"{}\" {} plural rule",
            self.locale, self.keyword, category
        )
    }
}

/// Check the plural and selectordinal keywords of a message against the
/// rules for a locale. "other" and explicit "=N" selectors are always valid.
/// If there are no rules for the locale, nothing is reported.
pub fn check(message: &Message, locale: &str, rules: &impl PluralRules) -> Vec<PluralProblem> {
    let found = keywords(message);
    let mut problems = Vec::new();

    let defined = match rules.rules(locale) {
        Some(defined) => defined,
        None => {
            debug!("No plural rules for locale {}", locale);
            return problems;
        }
    };

    for kind in [PluralKind::Cardinal, PluralKind::Ordinal] {
        for keyword in found.get(kind) {
            if is_always_valid(keyword) || defined.defines(kind, keyword) {
                continue;
            }
            problems.push(PluralProblem {
                locale: locale.to_string(),
                keyword: keyword.clone(),
                kind,
            });
        }
    }

    problems
}

fn is_always_valid(keyword: &str) -> bool {
    keyword == "other" || keyword.starts_with('=')
}
