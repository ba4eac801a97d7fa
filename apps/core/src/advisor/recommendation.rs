//! Recommendation record - output structure of one brief analysis.
//!
//! Created once per analysis, immutable after construction, owned by the
//! caller. Serialization-ready for automation consumers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::complexity::ComplexityTier;
use super::features::{FeatureTag, IntegrationTag};

/// Estimated development effort range in hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffortEstimate {
    pub min_hours: u32,
    pub max_hours: u32,
}

impl fmt::Display for EffortEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min_hours, self.max_hours)
    }
}

/// Advisory input/output schema names paired with a tier. Labels only;
/// nothing validates against them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaPair {
    pub input: String,
    pub output: String,
}

/// Per-capability flags mirrored into generation params for downstream
/// scaffolding consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FeatureFlags {
    pub memory: bool,
    pub workflow_orchestration: bool,
    pub external_tool_integration: bool,
    pub agent_to_agent_communication: bool,
    pub monitoring: bool,
    pub optimization: bool,
    pub benchmarking: bool,
    pub platform_integration: bool,
}

impl FeatureFlags {
    /// Build flags from the detected feature and integration sets. An
    /// integration implies its corresponding capability flag.
    pub fn from_tags(features: &[FeatureTag], integrations: &[IntegrationTag]) -> Self {
        let has = |tag: FeatureTag| features.contains(&tag);

        Self {
            memory: has(FeatureTag::Memory),
            workflow_orchestration: has(FeatureTag::WorkflowOrchestration)
                || integrations.contains(&IntegrationTag::WorkflowOrchestration),
            external_tool_integration: has(FeatureTag::ExternalToolIntegration)
                || integrations.contains(&IntegrationTag::Mcp),
            agent_to_agent_communication: has(FeatureTag::AgentToAgentCommunication)
                || integrations.contains(&IntegrationTag::A2a),
            monitoring: has(FeatureTag::Monitoring),
            optimization: has(FeatureTag::Optimization),
            benchmarking: has(FeatureTag::Benchmarking),
            platform_integration: has(FeatureTag::PlatformIntegration)
                || integrations.contains(&IntegrationTag::ManagedPlatform),
        }
    }
}

/// Nested parameter mapping for downstream scaffold generators, mirroring
/// tier, domain, features and schemas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub tier: u8,
    pub domain: String,
    pub features: FeatureFlags,
    pub schemas: SchemaPair,
}

/// Complete architecture recommendation for one brief.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Selected complexity tier.
    pub tier: ComplexityTier,

    /// Normalized confidence in the tier selection (0.0 - 1.0).
    pub tier_confidence: f32,

    /// Advisory schema name for pipeline input.
    pub input_schema: String,

    /// Advisory schema name for pipeline output.
    pub output_schema: String,

    /// Detected plus tier-default capability tags, insertion-ordered.
    pub features: Vec<FeatureTag>,

    /// Detected external-system integrations.
    pub integrations: Vec<IntegrationTag>,

    /// Dominant business domain, "general" when undetected.
    pub domain: String,

    /// Human-readable rationale for the recommendation.
    pub reasoning: String,

    /// Estimated development effort.
    pub estimated_effort: EffortEstimate,

    /// Parameter mirror for downstream consumers.
    pub generation_params: GenerationParams,
}

impl Recommendation {
    /// One-line summary for logging.
    pub fn summary(&self) -> String {
        format!(
            "{} ({:.0}%), features: {}, domain: {}",
            self.tier.title(),
            self.tier_confidence * 100.0,
            self.features.len(),
            self.domain,
        )
    }
}
