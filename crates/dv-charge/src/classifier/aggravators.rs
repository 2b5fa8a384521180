use super::detectors::{Detector, DetectorReport};

/// Detectors that escalate severity when present.
pub const AGGRAVATORS: [Detector; 6] = [
    Detector::Weapon,
    Detector::PriorDv,
    Detector::MinorVictim,
    Detector::Pregnant,
    Detector::ProtectionOrderViolated,
    Detector::ObstructedCall,
];

pub(crate) fn count_aggravators(report: &DetectorReport) -> u8 {
    AGGRAVATORS
        .iter()
        .filter(|detector| report.get(**detector))
        .count() as u8
}
