//! Architecture advisor - main orchestrator for brief analysis.
//!
//! Coordinates preprocessing, tier classification, feature and integration
//! identification and domain detection, then assembles the immutable
//! recommendation record.
//!
//! `analyze` is a pure function of (brief, pattern catalog): no shared
//! mutable state, no I/O, no failure modes. The compiled catalogs are
//! read-only after construction, so one advisor instance can serve
//! concurrent callers without locking. Only `analyze_file` touches the
//! filesystem, through the ingestion module.

use std::path::Path;

use tracing::debug;

use crate::error::ArchonError;
use crate::ingest;

use super::complexity::{ComplexityTier, TierClassifier};
use super::domain::{DomainDetector, GENERAL_DOMAIN};
use super::features::{FeatureIdentifier, FeatureTag, IntegrationTag};
use super::preprocess;
use super::recommendation::{
    EffortEstimate, FeatureFlags, GenerationParams, Recommendation, SchemaPair,
};

/// Hours added to the effort ceiling per detected feature beyond the
/// tier's default floor. Tunable heuristic constant.
const EXTRA_HOURS_PER_FEATURE: u32 = 2;

/// Rule-based architecture advisor. Construct explicitly and share by
/// reference; there is no process-wide instance.
pub struct ArchitectureAdvisor {
    tiers: TierClassifier,
    features: FeatureIdentifier,
    domains: DomainDetector,
}

impl Default for ArchitectureAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchitectureAdvisor {
    /// Create an advisor with the built-in pattern catalog compiled.
    pub fn new() -> Self {
        Self {
            tiers: TierClassifier::new(),
            features: FeatureIdentifier::new(),
            domains: DomainDetector::new(),
        }
    }

    /// Analyze a natural-language brief and recommend an architecture.
    ///
    /// Never fails: a degenerate brief (empty, whitespace, adversarial)
    /// degrades to a low-confidence tier-1 recommendation. Absence of
    /// signal is a valid classification outcome, not an error.
    pub fn analyze(&self, brief: &str) -> Recommendation {
        let processed = preprocess::preprocess(brief);
        let lowered = processed.to_lowercase();

        let (tier, tier_confidence) = self.tiers.classify(&lowered);
        let features = self.features.identify_features(&lowered, tier);
        let integrations = self.features.identify_integrations(&lowered, tier);
        let domain = self.domains.detect(&lowered);

        debug!(
            tier = tier.level(),
            confidence = tier_confidence as f64,
            domain,
            "brief classified"
        );

        let (input_schema, output_schema) = tier.schema_pair();
        let estimated_effort = estimate_effort(tier, features.len());
        let reasoning = build_reasoning(tier, &features, &integrations, domain);

        let generation_params = GenerationParams {
            tier: tier.level(),
            domain: domain.to_string(),
            features: FeatureFlags::from_tags(&features, &integrations),
            schemas: SchemaPair {
                input: input_schema.to_string(),
                output: output_schema.to_string(),
            },
        };

        Recommendation {
            tier,
            tier_confidence,
            input_schema: input_schema.to_string(),
            output_schema: output_schema.to_string(),
            features,
            integrations,
            domain: domain.to_string(),
            reasoning,
            estimated_effort,
            generation_params,
        }
    }

    /// Ingest a brief document from disk and analyze it. Ingestion errors
    /// propagate untouched; classification itself cannot fail.
    pub fn analyze_file(&self, path: &Path) -> Result<Recommendation, ArchonError> {
        let document = ingest::parse(path)?;
        Ok(self.analyze(&document.text))
    }
}

/// Per-tier base range, ceiling extended for every detected feature beyond
/// the tier's default floor.
fn estimate_effort(tier: ComplexityTier, feature_count: usize) -> EffortEstimate {
    let (min_hours, max_hours) = tier.base_hours();
    let floor = tier.default_features().len();
    let extra = feature_count.saturating_sub(floor) as u32 * EXTRA_HOURS_PER_FEATURE;

    EffortEstimate {
        min_hours,
        max_hours: max_hours + extra,
    }
}

fn build_reasoning(
    tier: ComplexityTier,
    features: &[FeatureTag],
    integrations: &[IntegrationTag],
    domain: &str,
) -> String {
    let mut parts: Vec<String> = vec![tier.rationale().to_string()];

    if domain != GENERAL_DOMAIN {
        parts.push(format!("Detected domain: {}.", capitalize(domain)));
    }

    if !features.is_empty() {
        let names: Vec<&str> = features.iter().map(|tag| tag.label()).collect();
        parts.push(format!("Required features: {}.", names.join(", ")));
    }

    if !integrations.is_empty() {
        let names: Vec<&str> = integrations.iter().map(|tag| tag.label()).collect();
        parts.push(format!("Recommended integrations: {}.", names.join(", ")));
    }

    parts.join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
