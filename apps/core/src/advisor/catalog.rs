//! Pattern catalog: the fixed text-matching rule sets behind tier, feature
//! and domain scoring.
//!
//! Patterns live here as plain data so tuning them never touches control
//! flow. They are matched against a lowercased brief, so everything below is
//! lowercase. Rules are deliberately broad (word-boundary anchors with
//! wildcard gaps) to tolerate paraphrase at the cost of occasional false
//! positives.

use regex::Regex;

/// Tier 1: bare simplicity / FAQ vocabulary.
pub(crate) const SIMPLE_PATTERNS: &[&str] = &[
    r"\bsimple\b",
    r"\bbasic\b",
    r"\bquick\b",
    r"\bchatbot\b",
    r"\bfaq\b",
    r"\bquestion.?answer",
    r"\brespond\b",
    r"\bsingle\s+purpose\b",
    r"\bstraightforward\b",
];

/// Tier 2: remember / track / personalize / retain-context phrasing.
pub(crate) const CONTEXTUAL_PATTERNS: &[&str] = &[
    r"\bremember\w*\s+.{0,30}(history|context|conversation|preferences|what|topics)",
    r"\btrack\w*\s+.{0,30}(progress|session|user|student|patient).{0,30}(across|over|throughout)",
    r"\bpersonaliz",
    r"\bconversation\s+history\b",
    r"\bmulti.?turn\b",
    r"\bstore\s+.{0,20}(data|information|preferences)",
    r"\bretain\s+.{0,20}information",
    r"\bcontext\s+(across|throughout)\s+.{0,20}(sessions|conversations|journey)",
    r"\bmaintain.{0,20}context.{0,20}throughout",
    r"\badapt.{0,30}based\s+on.{0,30}(their|user|history)",
];

/// Tier 3: production / SLA / API / auth vocabulary.
pub(crate) const PRODUCTION_PATTERNS: &[&str] = &[
    r"\bproduction.?grade\b",
    r"\brest\s+api\b",
    r"\bmicroservice\b",
    r"\bmonitor",
    r"\bscale\s+to\b",
    r"\bhealth.?check\b",
    r"\b99\.9+%\s+uptime\b",
    r"\bload\s+balanc",
    r"\bauthentication\b",
    r"\bauthorization\b",
];

/// Tier 4: plan-execute-critique-improve / feedback-loop vocabulary.
pub(crate) const ADVANCED_PATTERNS: &[&str] = &[
    r"\bplan\w*\s+.{0,30}execut\w+.{0,30}(critiqu|evaluat|assess)",
    r"\bmulti.?step\s+.{0,20}(workflow|process|task)",
    r"\boptimiz\w+\s+.{0,30}(over\s+time|based\s+on|through)",
    r"\bself.?improv|continuously.?improv|automatically.?improv",
    r"\bfeedback\s+loop",
    r"\bcritiqu\w+.{0,30}(result|output|performance)",
    r"\breplan",
    r"\badaptive\s+(behavior|strateg|approach)",
    r"\blearn\w+\s+from\s+.{0,30}(mistake|outcome|feedback|result|engagement)",
    r"\biterat\w+\s+(improve|refine|enhance|adjust)",
    r"\brevise.{0,20}strateg",
    r"\b(refine|adjust)\s+.{0,20}(approach|strategy|plan)",
    r"\bimprove.{0,20}strateg.{0,20}over\s+time",
    r"\bevaluat\w+.{0,20}(quality|performance).{0,20}(and|then).{0,20}(improv|adjust|refine)",
];

/// Tier 5: multi-agent communication / coordination / discovery vocabulary.
pub(crate) const EXPERT_PATTERNS: &[&str] = &[
    r"\bmultiple\s+.{0,30}agents?\s+.{0,50}(communicate|collaborate|coordinate)",
    r"\bagents?\s+.{0,30}(communicate|collaborate|coordinate)\s+.{0,30}(with\s+)?(each\s+other|together)",
    r"\bagent.?to.?agent",
    r"\bdistributed\s+.{0,20}(system|agents?|network)",
    r"\bpeer.?to.?peer",
    r"\bpeer\s+(protocol|network)\b",
    r"\bagent\s+discovery\b",
    r"\bagents?\s+.{0,30}(discover|find)\s+.{0,30}(each\s+other|other\s+agents)",
    r"\bcross.?platform\s+.{0,30}agents?\b",
    r"\bdecentralized\s+.{0,30}(coordination|agents?)\b",
    r"\bautonomous\s+agents?\s+.{0,30}(collaborate|coordinate|work\s+together)",
    r"\bagents?\s+.{0,30}request\s+.{0,20}(help|consultation)",
    r"\bseparate\s+agents?\s+for\b",
    r"\bspecialized\s+agents?\b.{0,50}(coordinate|collaborate|work\s+together)",
    r"\bagents?\s+for\s+(different|various)\s+.{0,30}(must|should|need).{0,50}(coordinate|collaborate|communicate)",
];

pub(crate) const MEMORY_PATTERNS: &[&str] = &[
    r"\bstore\s+.{0,20}(history|context|data|progress)",
    r"\bremember\w*\s+.{0,30}(previous|past|earlier|what|topic|preference|history|conversation)",
    r"\bretain\s+.{0,20}information",
    r"\btrack\w*\s+.{0,30}(session|user|conversation|progress|student|patient)",
    r"\bcontext\s+across\s+.{0,20}(sessions|interactions|conversation)",
    r"\bmaintain.{0,20}context",
    r"\btrack.{0,20}(weak\s+areas|preferences|history|journey)",
];

pub(crate) const WORKFLOW_ORCHESTRATION_PATTERNS: &[&str] = &[
    r"\bmulti.?step\s+\w+\s+(workflow|process|pipeline)\b",
    r"\bplan\s+and\s+execute\b",
    r"\bstate\s+machine\b",
    r"\borchestrat\w+\s+\w+\s+(tasks|steps)\b",
    r"\bsequential\s+\w+\s+processing\b",
    r"\bworkflow\s+\w+\s+(coordination|management)\b",
];

pub(crate) const EXTERNAL_TOOL_PATTERNS: &[&str] = &[
    r"\bexternal\s+\w+\s+(api|service|tool)\b",
    r"\bintegrat\w+\s+with\s+\w+\s+(third.?party|external)\b",
    r"\bcall\s+\w+\s+(external|remote)\b",
    r"\btool\s+\w+\s+interface\b",
];

pub(crate) const AGENT_TO_AGENT_PATTERNS: &[&str] = &[
    r"\bagents?\s+.{0,30}(communicate|collaborate|coordinate)\s+.{0,30}(with\s+)?each\s+other",
    r"\bpeer.?to.?peer",
    r"\bpeer\s+(protocol|network)\b",
    r"\bagent.?to.?agent",
    r"\bdistributed\s+.{0,20}agents?\b",
    r"\bagents?\s+.{0,30}discover\s+.{0,30}(each\s+other|other\s+agents)",
    r"\bcross.?framework\s+.{0,30}(agent|communication)",
    r"\bagents?\s+.{0,30}request\s+.{0,20}help",
];

pub(crate) const MONITORING_PATTERNS: &[&str] = &[
    r"\bmonitor\s+\w+\s+(performance|health|metrics)\b",
    r"\bobservability\s+\w+\s+(platform|system)\b",
    r"\btrace\s+\w+\s+(execution|requests)\b",
    r"\btrack\s+\w+\s+(metrics|errors|latency)\b",
    r"\btelemetry\s+\w+\s+data\b",
];

pub(crate) const OPTIMIZATION_PATTERNS: &[&str] = &[
    r"\boptimiz\w+\s+.{0,30}(performance|prompts|responses|strategies|criteria)",
    r"\bimprov\w+\s+.{0,30}(over\s+time|through|based\s+on|its\s+\w+|strategies)",
    r"\btune\s+.{0,20}(parameters|models)",
    r"\bself.?learn\w+\s+from\s+.{0,20}(feedback|data)",
    r"\bfeedback\s+loop",
    r"\badaptive\s+.{0,20}(behavior|strategies|approach)",
    r"\blearn\s+from\s+.{0,30}(accepted|rejected|performance)",
    r"\bcontinuously.{0,20}improve",
    r"\bautomatically.{0,20}adjust",
    r"\brefine.{0,20}(criteria|strategies|approach).{0,20}over\s+time",
];

pub(crate) const BENCHMARKING_PATTERNS: &[&str] = &[
    r"\bmeasure\s+\w+\s+(accuracy|performance|quality)\b",
    r"\beval\w+\s+\w+\s+(model|agent|system)\b",
    r"\btest\s+\w+\s+(quality|performance)\b",
    r"\bquality\s+\w+\s+(metrics|assessment)\b",
];

pub(crate) const PLATFORM_INTEGRATION_PATTERNS: &[&str] = &[
    r"\bdatabricks\s+\w+\s+(platform|integration|deployment)\b",
    r"\bunity\s+catalog\s+\w+\s+(for|integration)\b",
    r"\bmlflow\s+\w+\s+(tracking|registry)\b",
    r"\bspark\s+\w+\s+(processing|cluster)\b",
    r"\bdelta\s+lake\s+\w+\s+(storage|tables)\b",
];

/// Business-domain rule sets, in catalog order (first wins on tied scores).
pub(crate) const DOMAIN_PATTERNS: &[(&str, &[&str])] = &[
    ("fraud", &[r"\bfraud\b", r"\bscam\b", r"\brisk\b", r"\bsuspicious\b"]),
    (
        "support",
        &[r"\bsupport\b", r"\bticket\b", r"\bhelp.?desk\b", r"\bcustomer\b"],
    ),
    (
        "analytics",
        &[r"\banalytics\b", r"\binsight\b", r"\bdata\b", r"\breport\b"],
    ),
    (
        "healthcare",
        &[r"\bhealth", r"\bmedical\b", r"\bpatient\b", r"\bdiagnos"],
    ),
    (
        "finance",
        &[r"\bfinance\b", r"\bbanking\b", r"\btrade\b", r"\binvest"],
    ),
    (
        "ecommerce",
        &[r"\becommerce\b", r"\bshopping\b", r"\bproduct\b", r"\bcart\b"],
    ),
    ("hr", &[r"\bhr\b", r"\brecruit", r"\bhiring\b", r"\bemployee\b"]),
    (
        "legal",
        &[r"\blegal\b", r"\bcontract\b", r"\bcompliance\b", r"\bregulat"],
    ),
];

/// Compile a pattern table into matchers.
// NOTE: expect() is acceptable here: every pattern is a compile-time
// constant covered by tests, and a malformed one is an unrecoverable bug.
pub(crate) fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern)
                .unwrap_or_else(|err| panic!("invalid catalog pattern `{pattern}`: {err}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalog_pattern_compiles() {
        for table in [
            SIMPLE_PATTERNS,
            CONTEXTUAL_PATTERNS,
            PRODUCTION_PATTERNS,
            ADVANCED_PATTERNS,
            EXPERT_PATTERNS,
            MEMORY_PATTERNS,
            WORKFLOW_ORCHESTRATION_PATTERNS,
            EXTERNAL_TOOL_PATTERNS,
            AGENT_TO_AGENT_PATTERNS,
            MONITORING_PATTERNS,
            OPTIMIZATION_PATTERNS,
            BENCHMARKING_PATTERNS,
            PLATFORM_INTEGRATION_PATTERNS,
        ] {
            let compiled = compile(table);
            assert_eq!(compiled.len(), table.len());
        }

        for (domain, table) in DOMAIN_PATTERNS {
            let compiled = compile(table);
            assert_eq!(compiled.len(), table.len(), "domain {domain}");
        }
    }

    #[test]
    fn test_patterns_match_lowercased_text_only() {
        // The catalog is matched against lowercased briefs; uppercase
        // literals in a pattern would never fire.
        for table in [SIMPLE_PATTERNS, CONTEXTUAL_PATTERNS, EXPERT_PATTERNS] {
            for pattern in table {
                assert_eq!(
                    pattern.to_lowercase().as_str(),
                    *pattern,
                    "pattern must be lowercase: {pattern}"
                );
            }
        }
    }
}
