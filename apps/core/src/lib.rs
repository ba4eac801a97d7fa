//! Archon architecture advisor.
//!
//! Analyzes natural-language project briefs and recommends an agent
//! pipeline architecture: a complexity tier (1-5), schema pairing,
//! required features, integrations, business domain, rationale and an
//! effort estimate. Briefs arrive as raw text or as documents on disk
//! (plain text, markdown, reStructuredText, PDF, Word).
//!
//! ```no_run
//! use archon_core::advisor::ArchitectureAdvisor;
//!
//! let advisor = ArchitectureAdvisor::new();
//! let rec = advisor.analyze("Build a simple FAQ bot");
//! println!("{}", rec.tier.title());
//! ```

pub mod advisor;
pub mod error;
pub mod ingest;
pub mod report;

pub use advisor::{ArchitectureAdvisor, ComplexityTier, Recommendation};
pub use error::ArchonError;

#[cfg(test)]
mod tests;
