//! Round-trip audit reports.
//!
//! An audit generates samples for the requested tags, checks every one
//! against the predicate half of the registry, and summarizes the outcome.
//! Any failure means the round-trip law is broken for that tag.

use std::collections::BTreeMap;

use serde::Serialize;
use stringy_core::TypeTag;
use stringy_registry::matches;

use crate::config::GenConfig;
use crate::error::GenResult;
use crate::SampleGenerator;

/// How many failing samples to keep per tag for diagnosis.
const FAILURE_KEEP: usize = 5;

/// Audit outcome for one tag.
#[derive(Debug, Clone, Serialize)]
pub struct TagAudit {
    pub tag: String,
    pub samples: usize,
    pub passed: usize,
    pub failed: usize,
    /// First few failing samples, if any.
    pub failures: Vec<String>,
}

/// Audit outcome for a full run.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub seed: u64,
    pub samples_per_tag: usize,
    pub tags: Vec<TagAudit>,
    /// Observed boolean literal frequencies, when the boolean tag was audited.
    pub bool_literals: BTreeMap<String, usize>,
}

impl AuditReport {
    /// Generate and check `samples_per_tag` samples for each tag in `tags`.
    ///
    /// Configuration errors (impossible option sets) propagate; shape
    /// failures are counted in the report instead.
    pub fn run(config: &GenConfig, tags: &[TypeTag], samples_per_tag: usize) -> GenResult<Self> {
        let mut generator = SampleGenerator::new(config.clone());
        let mut audits = Vec::new();
        let mut bool_literals = BTreeMap::new();

        for &tag in tags {
            let mut passed = 0;
            let mut failures = Vec::new();

            for _ in 0..samples_per_tag {
                let sample = generator.sample(tag)?;
                if tag == TypeTag::Bool {
                    *bool_literals.entry(sample.clone()).or_insert(0) += 1;
                }
                if matches(tag, &sample) {
                    passed += 1;
                } else if failures.len() < FAILURE_KEEP {
                    failures.push(sample);
                }
            }

            audits.push(TagAudit {
                tag: tag.to_string(),
                samples: samples_per_tag,
                passed,
                failed: samples_per_tag - passed,
                failures,
            });
        }

        Ok(Self {
            seed: config.seed,
            samples_per_tag,
            tags: audits,
            bool_literals,
        })
    }

    /// Total shape failures across all audited tags.
    pub fn total_failed(&self) -> usize {
        self.tags.iter().map(|t| t.failed).sum()
    }

    /// Render as a human-readable text report.
    pub fn render_text(&self) -> String {
        let mut lines = Vec::new();

        lines.push("═══════════════════════════════════════════════".to_string());
        lines.push("          Stringy Round-Trip Audit             ".to_string());
        lines.push("═══════════════════════════════════════════════".to_string());
        lines.push(String::new());
        lines.push(format!("Seed: {}", self.seed));
        lines.push(format!("Samples per tag: {}", self.samples_per_tag));
        lines.push(String::new());

        for audit in &self.tags {
            let status = if audit.failed == 0 { "ok" } else { "FAIL" };
            lines.push(format!(
                "  {:<12} {:>6}/{:<6} {}",
                audit.tag, audit.passed, audit.samples, status
            ));
            for failure in &audit.failures {
                lines.push(format!("      bad sample: {:?}", failure));
            }
        }

        if !self.bool_literals.is_empty() {
            lines.push(String::new());
            lines.push("Boolean literal frequencies:".to_string());
            for (literal, count) in &self.bool_literals {
                lines.push(format!("  {:<8} {}", literal, count));
            }
        }

        lines.push(String::new());
        lines.push(format!("Total failures: {}", self.total_failed()));
        lines.join("\n")
    }

    /// Render as pretty-printed JSON.
    pub fn render_json(&self) -> String {
        // Serialization of these plain structs cannot fail.
        serde_json::to_string_pretty(self).expect("audit report serializes")
    }
}
