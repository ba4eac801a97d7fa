//! Recommendation rendering.
//!
//! Presentation layer over [`Recommendation`]: a serializable key/value
//! shape for automation consumers, a multi-line human-readable report, the
//! tier reference table, and structured error objects for JSON callers.
//! Nothing here feeds back into classification.

use serde::{Deserialize, Serialize};

use crate::advisor::recommendation::{GenerationParams, Recommendation};
use crate::advisor::ComplexityTier;
use crate::error::ArchonError;

/// Machine-readable recommendation shape. Field set is stable; automation
/// callers deserialize this rather than scraping the text report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub tier: u8,
    pub tier_name: String,
    pub confidence: f32,
    pub input_schema: String,
    pub output_schema: String,
    pub features: Vec<String>,
    pub integrations: Vec<String>,
    pub reasoning: String,
    pub estimated_hours: String,
    pub generation_params: GenerationParams,
}

impl From<&Recommendation> for RecommendationReport {
    fn from(rec: &Recommendation) -> Self {
        Self {
            tier: rec.tier.level(),
            tier_name: rec.tier.title().to_string(),
            confidence: rec.tier_confidence,
            input_schema: rec.input_schema.clone(),
            output_schema: rec.output_schema.clone(),
            features: rec.features.iter().map(|tag| tag.label().to_string()).collect(),
            integrations: rec
                .integrations
                .iter()
                .map(|tag| tag.label().to_string())
                .collect(),
            reasoning: rec.reasoning.clone(),
            estimated_hours: rec.estimated_effort.to_string(),
            generation_params: rec.generation_params.clone(),
        }
    }
}

/// Render a recommendation as human-readable multi-line text.
pub fn render_text(rec: &Recommendation) -> String {
    let mut out = String::new();

    out.push_str("Architecture Recommendation\n");
    out.push_str("===========================\n\n");
    out.push_str(&format!("Recommended tier: {}\n", rec.tier.title()));
    out.push_str(&format!(
        "Confidence:       {:.0}%\n",
        rec.tier_confidence * 100.0
    ));
    out.push_str(&format!(
        "Schemas:          {} -> {}\n",
        rec.input_schema, rec.output_schema
    ));

    if !rec.features.is_empty() {
        out.push_str("\nCore features:\n");
        for feature in &rec.features {
            out.push_str(&format!("  - {}\n", feature.label()));
        }
    }

    if !rec.integrations.is_empty() {
        out.push_str("\nIntegrations:\n");
        for integration in &rec.integrations {
            out.push_str(&format!("  - {}\n", integration.label()));
        }
    }

    out.push_str(&format!("\nReasoning:\n  {}\n", rec.reasoning));
    out.push_str(&format!(
        "\nEstimated effort: {} hours\n",
        rec.estimated_effort
    ));

    out
}

/// Render the tier reference table shown before interactive selection.
pub fn tier_reference() -> String {
    let mut out = String::new();
    out.push_str("Complexity tiers (each tier builds on the previous):\n\n");

    for tier in ComplexityTier::ALL {
        let (min_hours, max_hours) = tier.base_hours();
        out.push_str(&format!(
            "  {}  ({}-{} hrs)\n      {}\n",
            tier.title(),
            min_hours,
            max_hours,
            tier.rationale(),
        ));
    }

    out.push_str("\nRecommendations are guidance - choose the tier that fits your needs.\n");
    out
}

/// Map an ingestion error to a structured object for JSON-oriented callers.
pub fn error_value(err: &ArchonError) -> serde_json::Value {
    serde_json::json!({
        "error": {
            "kind": err.kind(),
            "message": err.to_string(),
            "hint": err.remediation(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::ArchitectureAdvisor;
    use std::path::PathBuf;

    #[test]
    fn test_report_shape() {
        let advisor = ArchitectureAdvisor::new();
        let rec = advisor.analyze("Build a simple FAQ bot");

        let report = RecommendationReport::from(&rec);
        assert_eq!(report.tier, 1);
        assert_eq!(report.tier_name, "Tier 1: Simple Chatbot");
        assert_eq!(report.estimated_hours, "2-4");

        let json = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(json["input_schema"], "ChatInput");
        assert_eq!(json["generation_params"]["tier"], 1);
        assert!(json["generation_params"]["features"]["memory"].is_boolean());
    }

    #[test]
    fn test_render_text_contains_confidence_percentage() {
        let advisor = ArchitectureAdvisor::new();
        let rec = advisor.analyze("Build a simple FAQ bot");

        let text = render_text(&rec);
        assert!(text.contains("Recommended tier: Tier 1: Simple Chatbot"));
        assert!(text.contains('%'));
        assert!(text.contains("Estimated effort: 2-4 hours"));
    }

    #[test]
    fn test_render_text_lists_features_as_bullets() {
        let advisor = ArchitectureAdvisor::new();
        let rec = advisor
            .analyze("Chatbot that remembers user preferences and conversation history");

        let text = render_text(&rec);
        assert!(text.contains("  - memory"));
    }

    #[test]
    fn test_tier_reference_lists_all_tiers() {
        let table = tier_reference();
        for tier in ComplexityTier::ALL {
            assert!(table.contains(tier.title()));
        }
    }

    #[test]
    fn test_error_value_shape() {
        let err = ArchonError::EmptyFile {
            path: PathBuf::from("brief.txt"),
        };
        let value = error_value(&err);

        assert_eq!(value["error"]["kind"], "empty");
        assert!(value["error"]["message"].as_str().is_some());
        assert!(value["error"]["hint"].as_str().is_some());
    }
}
