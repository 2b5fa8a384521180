//! Incident classification: normalization, detector bank, aggravator count, decision tree.
//!
//! Every stage is pure. [`classify`] is total: any string, including the empty one, yields
//! exactly one [`ChargeLabel`] with the fixed explanation of the rule that produced it.

pub mod aggravators;
mod batch;
pub mod detectors;
mod domain;
mod intake;
mod normalizer;
mod router;
pub mod rules;

#[cfg(test)]
mod tests;

pub use aggravators::AGGRAVATORS;
pub use batch::{classify_batch, BatchImportError, BatchImporter, BatchOutcome, IncidentRecord};
pub use detectors::{Detector, DetectorReport};
pub use domain::{Assessment, ChargeLabel, ClassificationResult};
pub use intake::{IntakeError, IntakePolicy};
pub use router::classification_router;

use aggravators::count_aggravators;
use detectors::DetectorBank;
use normalizer::normalize;
use rules::{decide, RuleSignals};
use tracing::debug;

/// Classify an incident description into a charge tier.
pub fn classify(incident: &str) -> ClassificationResult {
    assess(incident).result
}

/// Classify and keep the detector outputs and the rank of the rule that fired.
pub fn assess(incident: &str) -> Assessment {
    let normalized = normalize(incident);
    let detectors = DetectorBank::evaluate(&normalized);
    let aggravator_count = count_aggravators(&detectors);

    let rule = decide(&RuleSignals {
        report: &detectors,
        aggravator_count,
    });

    debug!(
        rule = rule.rank,
        charge = %rule.label,
        aggravator_count,
        "incident classified"
    );

    Assessment {
        result: rule.result(),
        rule: rule.rank,
        aggravator_count,
        detectors,
    }
}

/// Stateless handle over the classification engine, shared by the HTTP and CLI surfaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChargeClassifier;

impl ChargeClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, incident: &str) -> ClassificationResult {
        classify(incident)
    }

    pub fn assess(&self, incident: &str) -> Assessment {
        assess(incident)
    }
}
