use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::shared::errors::AppResult;

/// Built-in season markers, in priority order
///
/// The `Season <N>`, roman and `Final Season` markers only match when the
/// preceding character is not a colon, so `": Season 2"` is left to the colon
/// rules. The `keep` group re-inserts that preceding character. Any colon
/// left dangling by the other rules is dropped in [`SeasonMarkerRule::strip`].
const DEFAULT_MARKER_RULES: &[(&str, &str)] = &[
    ("season-number", r"(?P<keep>[^:\s])\s+Season\s+\d+\s*$"),
    ("season-roman", r"(?P<keep>[^:\s])\s+Season\s+[IVXLCDM]+\s*$"),
    ("final-season", r"(?P<keep>[^:\s])\s+Final\s+Season\s*$"),
    ("second-season", r"\s+2nd\s+Season\s*$"),
    ("third-season", r"\s+3rd\s+Season\s*$"),
    ("ordinal-season", r"\s+\d+(?:st|nd|rd|th)\s+Season\s*$"),
    ("colon-season-number", r"\s*:\s*Season\s+\d+\s*$"),
    ("colon-season-roman", r"\s*:\s*Season\s+[IVXLCDM]+\s*$"),
    ("colon-final-season", r"\s*:\s*Final\s+Season\s*$"),
    ("short-season", r"\s+S\d+\s*$"),
    ("bare-ordinal", r"\s+\d+(?:st|nd|rd|th)\s*$"),
];

static DEFAULT_CLEANER: Lazy<TitleCleaner> = Lazy::new(|| {
    DEFAULT_MARKER_RULES
        .iter()
        .fold(TitleCleaner::new(), |cleaner, (name, pattern)| {
            cleaner
                .with_rule(name, pattern)
                .expect("built-in season marker pattern should compile")
        })
});

/// One trailing season marker, matched case-insensitively
#[derive(Debug, Clone)]
pub struct SeasonMarkerRule {
    name: String,
    pattern: Regex,
}

impl SeasonMarkerRule {
    pub fn new(name: impl Into<String>, pattern: &str) -> AppResult<Self> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self {
            name: name.into(),
            pattern,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matches(&self, title: &str) -> bool {
        self.pattern.is_match(title)
    }

    /// Strip the marker once, returning `None` when the rule does not apply
    pub fn strip(&self, title: &str) -> Option<String> {
        if !self.pattern.is_match(title) {
            return None;
        }
        let stripped = self.pattern.replace(title, "${keep}");
        Some(stripped.trim_end().trim_end_matches(':').trim().to_string())
    }
}

/// Ordered table of season-marker rules; the first matching rule wins
#[derive(Debug, Clone, Default)]
pub struct TitleCleaner {
    rules: Vec<SeasonMarkerRule>,
}

impl TitleCleaner {
    /// Create a cleaner with no rules
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Cleaner preloaded with the built-in rule table
    pub fn standard() -> Self {
        DEFAULT_CLEANER.clone()
    }

    /// Append a rule after the existing ones
    pub fn with_rule(mut self, name: &str, pattern: &str) -> AppResult<Self> {
        self.rules.push(SeasonMarkerRule::new(name, pattern)?);
        Ok(self)
    }

    /// Strip trailing season markers, leaving clean titles untouched
    ///
    /// Each pass strips with the first matching rule. Passes repeat until no
    /// rule matches, so stacked markers are all removed and the result is
    /// stable under re-application.
    pub fn clean(&self, title: &str) -> String {
        let mut current = title.to_string();
        while let Some(cleaned) = self.strip_once(&current) {
            if cleaned == current {
                break;
            }
            current = cleaned;
        }
        current
    }

    fn strip_once(&self, title: &str) -> Option<String> {
        self.rules.iter().find_map(|rule| {
            let cleaned = rule.strip(title)?;
            log::trace!("After {}: '{}' -> '{}'", rule.name(), title, cleaned);
            Some(cleaned)
        })
    }

    /// Name of the rule that would fire for this title
    pub fn matching_rule(&self, title: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.matches(title))
            .map(SeasonMarkerRule::name)
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(SeasonMarkerRule::name).collect()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

/// Strip a trailing season marker using the built-in rules
pub fn clean_series_title(title: &str) -> String {
    DEFAULT_CLEANER.clean(title)
}
