// src/rules.rs
//! Data-access rule catalog and the line classifier.

use regex::Regex;
use serde::Serialize;

use crate::config::RuleConfig;
use crate::error::Result;

/// What kind of data-access call a line contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MatchCategory {
    StoredProcedure,
    TableQuery,
    None,
}

/// Immutable catalog of method names plus the patterns derived from it.
///
/// Built once per scan and shared by reference, so scans with different
/// catalogs never touch each other.
#[derive(Debug, Clone)]
pub struct RuleSet {
    stored_procedure_methods: Vec<String>,
    table_query_methods: Vec<String>,
    comment_marker: String,
    table_pattern: Regex,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleSet {
    /// The built-in .NET ADO helper catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let rules = RuleConfig::default();
        Self {
            table_pattern: table_regex(&rules.table_prefix)
                .unwrap_or_else(|_| panic!("Invalid Regex")),
            stored_procedure_methods: rules.stored_procedure_methods,
            table_query_methods: rules.table_query_methods,
            comment_marker: rules.comment_marker,
        }
    }

    /// Builds a rule set from loaded configuration.
    ///
    /// # Errors
    /// Returns error if the table prefix yields an invalid pattern.
    pub fn from_config(rules: &RuleConfig) -> Result<Self> {
        Ok(Self {
            stored_procedure_methods: rules.stored_procedure_methods.clone(),
            table_query_methods: rules.table_query_methods.clone(),
            comment_marker: rules.comment_marker.clone(),
            table_pattern: table_regex(&rules.table_prefix)?,
        })
    }

    #[must_use]
    pub fn stored_procedure_methods(&self) -> &[String] {
        &self.stored_procedure_methods
    }

    #[must_use]
    pub fn table_query_methods(&self) -> &[String] {
        &self.table_query_methods
    }

    #[must_use]
    pub fn comment_marker(&self) -> &str {
        &self.comment_marker
    }

    #[must_use]
    pub fn table_pattern(&self) -> &Regex {
        &self.table_pattern
    }

    /// True when the trimmed line starts with the comment marker.
    #[must_use]
    pub fn is_comment(&self, line: &str) -> bool {
        !self.comment_marker.is_empty() && line.trim().starts_with(self.comment_marker.as_str())
    }

    /// Labels a line. Stored-procedure methods win over table-query methods.
    #[must_use]
    pub fn classify(&self, line: &str) -> MatchCategory {
        if self.is_comment(line) {
            return MatchCategory::None;
        }
        if contains_any(line, &self.stored_procedure_methods) {
            return MatchCategory::StoredProcedure;
        }
        if contains_any(line, &self.table_query_methods) {
            return MatchCategory::TableQuery;
        }
        MatchCategory::None
    }
}

/// Free-function form of [`RuleSet::classify`].
#[must_use]
pub fn classify(line: &str, rules: &RuleSet) -> MatchCategory {
    rules.classify(line)
}

// Plain substring containment, no word boundaries.
fn contains_any(line: &str, needles: &[String]) -> bool {
    needles
        .iter()
        .any(|n| !n.is_empty() && line.contains(n.as_str()))
}

fn table_regex(prefix: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(r"(?-u:\b){}(?-u:\w)+", regex::escape(prefix)))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_match_is_not_word_bound() {
        let rules = RuleSet::builtin();
        assert_eq!(
            rules.classify("var r = MyExecuteScalarWrapper(cmd);"),
            MatchCategory::StoredProcedure
        );
    }

    #[test]
    fn empty_method_names_never_match() {
        let cfg = RuleConfig {
            stored_procedure_methods: vec![String::new()],
            table_query_methods: Vec::new(),
            ..RuleConfig::default()
        };
        let rules = RuleSet::from_config(&cfg).unwrap();
        assert_eq!(rules.classify("anything at all"), MatchCategory::None);
    }

    #[test]
    fn custom_prefix_is_escaped() {
        let cfg = RuleConfig {
            table_prefix: "t.".to_string(),
            ..RuleConfig::default()
        };
        let rules = RuleSet::from_config(&cfg).unwrap();
        assert!(rules.table_pattern().is_match("FROM t.Users"));
        assert!(!rules.table_pattern().is_match("FROM txUsers"));
    }

    #[test]
    fn custom_prefix_uses_ascii_word_rules() {
        let cfg = RuleConfig {
            table_prefix: "dbo_".to_string(),
            ..RuleConfig::default()
        };
        let rules = RuleSet::from_config(&cfg).unwrap();
        let hits: Vec<&str> = rules
            .table_pattern()
            .find_iter("FROM ádbo_Orders JOIN dbo_Ñame")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(hits, vec!["dbo_Orders"]);
    }

    #[test]
    fn comment_check_ignores_leading_whitespace() {
        let rules = RuleSet::builtin();
        assert!(rules.is_comment("\t   // ExecuteReader(\"x\")"));
        assert!(!rules.is_comment("x = 1; // ExecuteReader"));
    }
}
