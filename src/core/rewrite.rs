//! Phrase rewriting for clause simplification
//!
//! A [`RuleSet`] is an ordered list of literal phrase substitutions. Rules are
//! applied one after another, each one seeing the output of the previous one.
//! Matching is ASCII case-insensitive. A match written in title case, such as
//! a sentence-initial `Notwithstanding`, gets its replacement capitalized.
//!
//! Callers trim their input before calling [`RuleSet::simplify`]; the engine
//! treats text as opaque and never trims or normalizes whitespace itself.

use regex_lite::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// The built-in legalese substitutions, in application order
pub const DEFAULT_RULES: [(&str, &str); 5] = [
    ("hereinafter", "from now on"),
    ("aforementioned", "mentioned above"),
    ("pursuant to", "under"),
    ("in the event that", "if"),
    ("notwithstanding", "despite"),
];

/// Errors raised while building substitution rules
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// The pattern was empty and would match between every character
    #[error("rule {index}: pattern must not be empty")]
    EmptyPattern { index: usize },

    /// The escaped pattern failed to compile
    #[error("rule {index}: invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        #[source]
        source: regex_lite::Error,
    },
}

/// Serializable description of a rule, as stored in the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub pattern: String,
    pub replacement: String,
}

impl RuleSpec {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    /// The default rule list as specs
    pub fn defaults() -> Vec<RuleSpec> {
        DEFAULT_RULES
            .iter()
            .map(|(pattern, replacement)| RuleSpec::new(*pattern, *replacement))
            .collect()
    }
}

/// A compiled substitution rule
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
    matcher: Regex,
    pattern: String,
    replacement: String,
}

impl SubstitutionRule {
    fn compile(index: usize, spec: &RuleSpec) -> Result<Self, RuleError> {
        if spec.pattern.is_empty() {
            return Err(RuleError::EmptyPattern { index });
        }

        let source = format!("(?i){}", regex_lite::escape(&spec.pattern));
        let matcher = Regex::new(&source).map_err(|source| RuleError::InvalidPattern {
            index,
            pattern: spec.pattern.clone(),
            source,
        })?;

        Ok(Self {
            matcher,
            pattern: spec.pattern.clone(),
            replacement: spec.replacement.clone(),
        })
    }

    /// The literal phrase this rule matches
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The literal text substituted for each match
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replace every match in `text`
    pub fn apply(&self, text: &str) -> String {
        self.matcher
            .replace_all(text, |caps: &Captures<'_>| {
                if is_title_case(&caps[0]) {
                    capitalize(&self.replacement)
                } else {
                    self.replacement.clone()
                }
            })
            .into_owned()
    }
}

/// First character uppercase, no uppercase after it
fn is_title_case(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.is_uppercase() && !chars.any(char::is_uppercase),
        None => false,
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Ordered, immutable set of substitution rules
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<SubstitutionRule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::from_specs(&RuleSpec::defaults()).expect("built-in rewrite rules compile")
    }
}

impl RuleSet {
    /// Compile rules in the given order
    pub fn from_specs(specs: &[RuleSpec]) -> Result<Self, RuleError> {
        let rules = specs
            .iter()
            .enumerate()
            .map(|(index, spec)| SubstitutionRule::compile(index, spec))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[SubstitutionRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rewrite `text` by applying every rule in order
    pub fn simplify(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |current, rule| rule.apply(&current))
    }
}
