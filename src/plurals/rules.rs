use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::language::PluralKind;

static BUILTIN: &str = include_str!("../../data/plurals.json");

/// The plural categories a locale defines for cardinal and ordinal numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleRules {
    #[serde(default)]
    pub cardinal: Vec<String>,
    #[serde(default)]
    pub ordinal: Vec<String>,
}

impl LocaleRules {
    pub fn category(&self, kind: PluralKind) -> &[String] {
        match kind {
            PluralKind::Cardinal => &self.cardinal,
            PluralKind::Ordinal => &self.ordinal,
        }
    }

    pub fn defines(&self, kind: PluralKind, keyword: &str) -> bool {
        self.category(kind)
            .iter()
            .any(|defined| defined == keyword)
    }
}

/// Read-only access to locale plural rule data.
pub trait PluralRules {
    /// The rules for the given locale, or for the closest more general
    /// locale available.
    fn rules(&self, locale: &str) -> Option<&LocaleRules>;
}

/// Plural rules held in memory, keyed by locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, LocaleRules>")]
pub struct RuleTable {
    locales: BTreeMap<String, LocaleRules>,
}

impl From<BTreeMap<String, LocaleRules>> for RuleTable {
    fn from(locales: BTreeMap<String, LocaleRules>) -> Self {
        let mut table = RuleTable::new();
        for (locale, rules) in locales {
            table.insert(&locale, rules);
        }
        table
    }
}

impl RuleTable {
    pub fn new() -> RuleTable {
        RuleTable {
            locales: BTreeMap::new(),
        }
    }

    /// A small table of common locales compiled into the program.
    pub fn builtin() -> RuleTable {
        RuleTable::from_json(BUILTIN).unwrap_or_default()
    }

    pub fn from_json(content: &str) -> Result<RuleTable, RulesError> {
        serde_json::from_str(content).map_err(RulesError::Malformed)
    }

    pub fn load(filename: &Path) -> Result<RuleTable, RulesError> {
        let content = std::fs::read_to_string(filename).map_err(|error| {
            debug!(?error);
            RulesError::Unreadable {
                filename: filename.to_path_buf(),
                details: error
                    .kind()
                    .to_string(),
            }
        })?;

        let table = RuleTable::from_json(&content)?;
        debug!(
            "Loaded plural rules for {} locales from {}",
            table
                .locales
                .len(),
            filename.display()
        );
        Ok(table)
    }

    pub fn insert(&mut self, locale: &str, rules: LocaleRules) {
        self.locales
            .insert(normalize(locale), rules);
    }

    pub fn len(&self) -> usize {
        self.locales
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales
            .is_empty()
    }

    /// Find the most specific locale in the table matching the one given,
    /// dropping trailing subtags until something matches: "en-US" falls back
    /// to "en".
    pub fn closest_locale(&self, locale: &str) -> Option<&str> {
        let mut candidate = normalize(locale);

        loop {
            if let Some((found, _)) = self
                .locales
                .get_key_value(&candidate)
            {
                return Some(found.as_str());
            }

            match candidate.rfind('-') {
                Some(i) => candidate.truncate(i),
                None => return None,
            }
        }
    }
}

impl PluralRules for RuleTable {
    fn rules(&self, locale: &str) -> Option<&LocaleRules> {
        let closest = self.closest_locale(locale)?;
        self.locales
            .get(closest)
    }
}

fn normalize(locale: &str) -> String {
    locale
        .trim()
        .replace('_', "-")
        .to_ascii_lowercase()
}

#[derive(Debug)]
pub enum RulesError {
    Unreadable { filename: PathBuf, details: String },
    Malformed(serde_json::Error),
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::Unreadable { filename, details } => write!(
                f,
                "Failed reading plural rules: {}: {}",
                filename.display(),
                details
            ),
            RulesError::Malformed(error) => write!(f, "Invalid plural rules: {}", error),
        }
    }
}

impl std::error::Error for RulesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RulesError::Unreadable { .. } => None,
            RulesError::Malformed(error) => Some(error),
        }
    }
}
