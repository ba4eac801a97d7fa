//! Business-domain detection.
//!
//! Scores a small fixed catalog of domain tags by pattern count. Domain
//! only colors the rationale text; it drives no structural decision, so
//! max-selection with first-in-catalog tie-break is all that is needed.

use regex::Regex;

use super::catalog;

/// Fallback tag when no domain pattern matches.
pub const GENERAL_DOMAIN: &str = "general";

/// Detector scoring briefs against the domain pattern catalog.
pub struct DomainDetector {
    rules: Vec<(&'static str, Vec<Regex>)>,
}

impl Default for DomainDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainDetector {
    /// Compile the domain pattern catalog.
    pub fn new() -> Self {
        let rules = catalog::DOMAIN_PATTERNS
            .iter()
            .map(|(domain, patterns)| (*domain, catalog::compile(patterns)))
            .collect();

        Self { rules }
    }

    /// Detect the dominant business domain of a lowercased brief, or
    /// "general" when nothing matches.
    pub fn detect(&self, text: &str) -> &'static str {
        let mut best: (&'static str, usize) = (GENERAL_DOMAIN, 0);

        for (domain, rules) in &self.rules {
            let count = rules.iter().filter(|rule| rule.is_match(text)).count();
            if count > best.1 {
                best = (domain, count);
            }
        }

        best.0
    }
}
