//! Complexity tier classification.
//!
//! Scores a preprocessed brief against five ordered tiers via weighted
//! pattern matching. No ML model required - pure regex matching over the
//! catalog tables.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::catalog;
use super::features::FeatureTag;

/// Flat confidence boost applied whenever any tier pattern fires at all.
/// Tunable heuristic constant, kept for output compatibility.
const CONFIDENCE_BOOST: f32 = 0.2;

/// Confidence reported when no pattern matches and the classifier falls
/// back to the simplest tier.
const NO_SIGNAL_CONFIDENCE: f32 = 0.5;

/// Ordered system complexity tiers. Tiers are cumulative: tier N assumes
/// the capabilities of tier N-1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityTier {
    /// Simple chatbot: basic Q&A, no memory.
    Simple = 1,
    /// Context-aware agent: session memory and personalization.
    Contextual = 2,
    /// Production API: scale, uptime, monitoring.
    Production = 3,
    /// Complex workflow: plan-execute-critique loops.
    Advanced = 4,
    /// Multi-agent system: agent-to-agent coordination.
    Expert = 5,
}

impl fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl ComplexityTier {
    /// All tiers in ascending order. Iteration order doubles as the
    /// tie-break rule: the lowest tier wins a tied score.
    pub const ALL: [ComplexityTier; 5] = [
        ComplexityTier::Simple,
        ComplexityTier::Contextual,
        ComplexityTier::Production,
        ComplexityTier::Advanced,
        ComplexityTier::Expert,
    ];

    /// Numeric tier level (1-5).
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Short tier name.
    pub fn name(self) -> &'static str {
        match self {
            ComplexityTier::Simple => "Simple",
            ComplexityTier::Contextual => "Contextual",
            ComplexityTier::Production => "Production",
            ComplexityTier::Advanced => "Advanced",
            ComplexityTier::Expert => "Expert",
        }
    }

    /// Human-readable tier title for reports.
    pub fn title(self) -> &'static str {
        match self {
            ComplexityTier::Simple => "Tier 1: Simple Chatbot",
            ComplexityTier::Contextual => "Tier 2: Context-Aware Agent",
            ComplexityTier::Production => "Tier 3: Production API",
            ComplexityTier::Advanced => "Tier 4: Complex Workflow",
            ComplexityTier::Expert => "Tier 5: Multi-Agent System",
        }
    }

    /// Rationale sentence used in generated reasoning.
    pub fn rationale(self) -> &'static str {
        match self {
            ComplexityTier::Simple => {
                "Based on your requirements, a simple chatbot architecture is sufficient."
            }
            ComplexityTier::Contextual => {
                "Your use case requires context awareness and memory capabilities."
            }
            ComplexityTier::Production => {
                "This is a production-grade system requiring robust API design and monitoring."
            }
            ComplexityTier::Advanced => {
                "This is a complex workflow requiring planning, execution, and self-improvement loops."
            }
            ComplexityTier::Expert => {
                "This is an expert-level multi-agent system requiring advanced collaboration."
            }
        }
    }

    /// Advisory input/output schema names paired with the tier.
    pub fn schema_pair(self) -> (&'static str, &'static str) {
        match self {
            ComplexityTier::Simple => ("ChatInput", "ChatOutput"),
            ComplexityTier::Contextual => ("ContextAwareInput", "ContextAwareOutput"),
            ComplexityTier::Production => ("APIRequest", "APIResponse"),
            ComplexityTier::Advanced => ("WorkflowInput", "WorkflowOutput"),
            ComplexityTier::Expert => ("CollaborationRequest", "CollaborationResponse"),
        }
    }

    /// Minimal feature set expected at this tier. Unioned into detected
    /// features, never used to override detection.
    pub fn default_features(self) -> &'static [FeatureTag] {
        match self {
            ComplexityTier::Simple => &[],
            ComplexityTier::Contextual => &[FeatureTag::Memory],
            ComplexityTier::Production => &[FeatureTag::Memory, FeatureTag::Monitoring],
            ComplexityTier::Advanced => &[
                FeatureTag::Memory,
                FeatureTag::Monitoring,
                FeatureTag::WorkflowOrchestration,
                FeatureTag::Optimization,
            ],
            ComplexityTier::Expert => &[
                FeatureTag::Memory,
                FeatureTag::Monitoring,
                FeatureTag::WorkflowOrchestration,
                FeatureTag::Optimization,
                FeatureTag::Benchmarking,
            ],
        }
    }

    /// Base development effort range in hours.
    pub fn base_hours(self) -> (u32, u32) {
        match self {
            ComplexityTier::Simple => (2, 4),
            ComplexityTier::Contextual => (4, 8),
            ComplexityTier::Production => (8, 16),
            ComplexityTier::Advanced => (16, 32),
            ComplexityTier::Expert => (32, 64),
        }
    }
}

/// Tier classifier scoring a brief against the five tier pattern sets.
pub struct TierClassifier {
    rules: Vec<(ComplexityTier, Vec<Regex>)>,
}

impl Default for TierClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TierClassifier {
    /// Compile the tier pattern catalog.
    pub fn new() -> Self {
        let rules = vec![
            (ComplexityTier::Simple, catalog::compile(catalog::SIMPLE_PATTERNS)),
            (
                ComplexityTier::Contextual,
                catalog::compile(catalog::CONTEXTUAL_PATTERNS),
            ),
            (
                ComplexityTier::Production,
                catalog::compile(catalog::PRODUCTION_PATTERNS),
            ),
            (
                ComplexityTier::Advanced,
                catalog::compile(catalog::ADVANCED_PATTERNS),
            ),
            (ComplexityTier::Expert, catalog::compile(catalog::EXPERT_PATTERNS)),
        ];

        Self { rules }
    }

    /// Classify a lowercased brief into a tier with a confidence score.
    ///
    /// Each rule contributes at most 1 to its tier's count no matter how
    /// often it matches. The highest count wins; ties break toward the
    /// lower tier. With no signal at all the result is Simple at a fixed
    /// 0.5 confidence.
    pub fn classify(&self, text: &str) -> (ComplexityTier, f32) {
        let mut counts: Vec<(ComplexityTier, usize)> = Vec::with_capacity(self.rules.len());
        for (tier, rules) in &self.rules {
            let count = rules.iter().filter(|rule| rule.is_match(text)).count();
            counts.push((*tier, count));
        }

        let total: usize = counts.iter().map(|(_, count)| count).sum();
        if total == 0 {
            return (ComplexityTier::Simple, NO_SIGNAL_CONFIDENCE);
        }

        // Strict > keeps the lowest tier on ties; rules are in ascending
        // tier order.
        let mut best = (ComplexityTier::Simple, 0usize);
        for (tier, count) in &counts {
            if *count > best.1 {
                best = (*tier, *count);
            }
        }

        let confidence = (best.1 as f32 / total as f32 + CONFIDENCE_BOOST).min(1.0);
        (best.0, confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(ComplexityTier::Simple < ComplexityTier::Contextual);
        assert!(ComplexityTier::Advanced < ComplexityTier::Expert);
        assert_eq!(ComplexityTier::Production.level(), 3);
    }

    #[test]
    fn test_no_signal_defaults_to_simple() {
        let classifier = TierClassifier::new();

        let (tier, confidence) = classifier.classify("zzz qqq xxx");
        assert_eq!(tier, ComplexityTier::Simple);
        assert_eq!(confidence, 0.5);
    }

    #[test]
    fn test_simple_faq_brief() {
        let classifier = TierClassifier::new();

        let (tier, confidence) = classifier.classify("build a simple faq bot");
        assert_eq!(tier, ComplexityTier::Simple);
        assert!(confidence > 0.5);
    }

    #[test]
    fn test_memory_brief_is_contextual() {
        let classifier = TierClassifier::new();

        let (tier, _) = classifier
            .classify("chatbot that remembers user preferences and conversation history");
        assert_eq!(tier, ComplexityTier::Contextual);
    }

    #[test]
    fn test_production_brief() {
        let classifier = TierClassifier::new();

        let (tier, _) = classifier.classify(
            "production api with 99.9% uptime, monitoring, rate limiting, and authentication",
        );
        assert_eq!(tier, ComplexityTier::Production);
    }

    #[test]
    fn test_plan_execute_critique_brief() {
        let classifier = TierClassifier::new();

        let (tier, _) = classifier.classify(
            "agent that plans tasks, executes them, critiques results, and replans based on feedback",
        );
        assert_eq!(tier, ComplexityTier::Advanced);
    }

    #[test]
    fn test_multi_agent_brief() {
        let classifier = TierClassifier::new();

        let (tier, confidence) = classifier.classify(
            "multiple autonomous agents that communicate using a peer protocol and coordinate tasks",
        );
        assert_eq!(tier, ComplexityTier::Expert);
        assert!(confidence >= 0.8);
    }

    #[test]
    fn test_tie_breaks_toward_lower_tier() {
        let classifier = TierClassifier::new();

        // One simple hit ("chatbot") and one production hit ("authentication").
        let (tier, _) = classifier.classify("chatbot with authentication");
        assert_eq!(tier, ComplexityTier::Simple);
    }

    #[test]
    fn test_confidence_bounds() {
        let classifier = TierClassifier::new();

        let briefs = [
            "",
            "simple basic quick chatbot faq respond straightforward",
            "production-grade rest api microservice monitoring scale to millions",
            "agents communicate with each other peer-to-peer agent-to-agent",
        ];

        for brief in briefs {
            let (_, confidence) = classifier.classify(brief);
            assert!(
                (0.0..=1.0).contains(&confidence),
                "confidence out of range for {brief:?}: {confidence}"
            );
        }
    }
}
