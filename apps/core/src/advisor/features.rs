//! Feature and integration identification.
//!
//! Scores a brief against a fixed catalog of capability tags, then overlays
//! the tier's default feature set. Integrations are a smaller catalog
//! detected purely by pattern, with one structural rule for high tiers.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::catalog;
use super::complexity::ComplexityTier;

/// Capability labels attached to a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureTag {
    Memory,
    WorkflowOrchestration,
    ExternalToolIntegration,
    AgentToAgentCommunication,
    Monitoring,
    Optimization,
    Benchmarking,
    PlatformIntegration,
}

impl fmt::Display for FeatureTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FeatureTag {
    /// Detection order; also the display order of detected features.
    pub const ALL: [FeatureTag; 8] = [
        FeatureTag::Memory,
        FeatureTag::WorkflowOrchestration,
        FeatureTag::ExternalToolIntegration,
        FeatureTag::AgentToAgentCommunication,
        FeatureTag::Monitoring,
        FeatureTag::Optimization,
        FeatureTag::Benchmarking,
        FeatureTag::PlatformIntegration,
    ];

    /// Stable string label used in reports and generation params.
    pub fn label(self) -> &'static str {
        match self {
            FeatureTag::Memory => "memory",
            FeatureTag::WorkflowOrchestration => "workflow-orchestration",
            FeatureTag::ExternalToolIntegration => "external-tool-integration",
            FeatureTag::AgentToAgentCommunication => "agent-to-agent-communication",
            FeatureTag::Monitoring => "monitoring",
            FeatureTag::Optimization => "optimization",
            FeatureTag::Benchmarking => "benchmarking",
            FeatureTag::PlatformIntegration => "platform-integration",
        }
    }
}

/// External-system dependency labels, distinct from features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntegrationTag {
    /// MCP-style external tool protocol.
    Mcp,
    /// Agent-to-agent communication protocol.
    A2a,
    /// Managed data/ML platform integration.
    ManagedPlatform,
    /// Workflow orchestration engine.
    WorkflowOrchestration,
}

impl fmt::Display for IntegrationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl IntegrationTag {
    pub fn label(self) -> &'static str {
        match self {
            IntegrationTag::Mcp => "mcp",
            IntegrationTag::A2a => "a2a",
            IntegrationTag::ManagedPlatform => "managed-platform",
            IntegrationTag::WorkflowOrchestration => "workflow-orchestration",
        }
    }
}

/// Identifier scoring briefs against the feature pattern catalog.
pub struct FeatureIdentifier {
    rules: Vec<(FeatureTag, Vec<Regex>)>,
}

impl Default for FeatureIdentifier {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureIdentifier {
    /// Compile the feature pattern catalog.
    pub fn new() -> Self {
        let rules = vec![
            (FeatureTag::Memory, catalog::compile(catalog::MEMORY_PATTERNS)),
            (
                FeatureTag::WorkflowOrchestration,
                catalog::compile(catalog::WORKFLOW_ORCHESTRATION_PATTERNS),
            ),
            (
                FeatureTag::ExternalToolIntegration,
                catalog::compile(catalog::EXTERNAL_TOOL_PATTERNS),
            ),
            (
                FeatureTag::AgentToAgentCommunication,
                catalog::compile(catalog::AGENT_TO_AGENT_PATTERNS),
            ),
            (
                FeatureTag::Monitoring,
                catalog::compile(catalog::MONITORING_PATTERNS),
            ),
            (
                FeatureTag::Optimization,
                catalog::compile(catalog::OPTIMIZATION_PATTERNS),
            ),
            (
                FeatureTag::Benchmarking,
                catalog::compile(catalog::BENCHMARKING_PATTERNS),
            ),
            (
                FeatureTag::PlatformIntegration,
                catalog::compile(catalog::PLATFORM_INTEGRATION_PATTERNS),
            ),
        ];

        Self { rules }
    }

    fn matches(&self, tag: FeatureTag, text: &str) -> bool {
        self.rules
            .iter()
            .find(|(rule_tag, _)| *rule_tag == tag)
            .map(|(_, rules)| rules.iter().any(|rule| rule.is_match(text)))
            .unwrap_or(false)
    }

    /// Identify required features from a lowercased brief: pattern-detected
    /// tags first (in catalog order), then the tier's defaults unioned in.
    pub fn identify_features(&self, text: &str, tier: ComplexityTier) -> Vec<FeatureTag> {
        let mut features: Vec<FeatureTag> = Vec::new();

        for (tag, rules) in &self.rules {
            if rules.iter().any(|rule| rule.is_match(text)) {
                features.push(*tag);
            }
        }

        for default in tier.default_features() {
            if !features.contains(default) {
                features.push(*default);
            }
        }

        features
    }

    /// Identify required integrations from a lowercased brief. Detection
    /// reuses the corresponding feature rule sets; tier 4 and above always
    /// imply a workflow orchestration engine regardless of pattern match.
    pub fn identify_integrations(&self, text: &str, tier: ComplexityTier) -> Vec<IntegrationTag> {
        let mut integrations: Vec<IntegrationTag> = Vec::new();

        if self.matches(FeatureTag::ExternalToolIntegration, text) {
            integrations.push(IntegrationTag::Mcp);
        }
        if self.matches(FeatureTag::AgentToAgentCommunication, text) {
            integrations.push(IntegrationTag::A2a);
        }
        if self.matches(FeatureTag::PlatformIntegration, text) {
            integrations.push(IntegrationTag::ManagedPlatform);
        }

        if tier >= ComplexityTier::Advanced
            && !integrations.contains(&IntegrationTag::WorkflowOrchestration)
        {
            integrations.push(IntegrationTag::WorkflowOrchestration);
        }

        integrations
    }
}
