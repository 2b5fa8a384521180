use super::detectors::{Detector, DetectorReport};
use super::domain::{ChargeLabel, ClassificationResult};

/// Inputs every rule predicate sees.
pub(crate) struct RuleSignals<'a> {
    pub report: &'a DetectorReport,
    pub aggravator_count: u8,
}

impl RuleSignals<'_> {
    fn has(&self, detector: Detector) -> bool {
        self.report.get(detector)
    }

    fn any(&self, detectors: &[Detector]) -> bool {
        detectors.iter().any(|detector| self.has(*detector))
    }
}

/// One entry of the decision tree.
pub struct Rule {
    pub rank: u8,
    pub label: ChargeLabel,
    pub explanation: &'static str,
    predicate: fn(&RuleSignals<'_>) -> bool,
}

impl Rule {
    pub(crate) fn matches(&self, signals: &RuleSignals<'_>) -> bool {
        (self.predicate)(signals)
    }

    pub fn result(&self) -> ClassificationResult {
        ClassificationResult {
            label: self.label,
            explanation: self.explanation,
        }
    }
}

/// Priority-ordered rules; earlier entries win at every overlap.
pub static RULES: [Rule; 6] = [
    Rule {
        rank: 1,
        label: ChargeLabel::Dvhan,
        explanation: "Great bodily injury occurred with extreme indifference, weapon use, or violation of a protection order.",
        predicate: |s| {
            s.has(Detector::GreatInjury)
                && s.any(&[
                    Detector::ProtectionOrderViolated,
                    Detector::Weapon,
                    Detector::ExtremeIndifference,
                ])
        },
    },
    Rule {
        rank: 2,
        label: ChargeLabel::FirstDegree,
        explanation: "Great bodily injury or extreme indifference with aggravators (e.g., weapon or prior DV).",
        predicate: |s| {
            s.has(Detector::GreatInjury)
                || (s.has(Detector::ExtremeIndifference) && s.aggravator_count >= 1)
        },
    },
    Rule {
        rank: 3,
        label: ChargeLabel::FirstDegree,
        explanation: "Major force used with moderate injury or aggravators like a weapon, prior DV, or protection order.",
        predicate: |s| {
            s.has(Detector::PhysicalMajor)
                && s.any(&[
                    Detector::Weapon,
                    Detector::ProtectionOrderViolated,
                    Detector::PriorDv,
                    Detector::ModerateInjury,
                ])
        },
    },
    Rule {
        rank: 4,
        label: ChargeLabel::FirstDegree,
        explanation: "High-level threat or minor contact with multiple aggravating factors.",
        predicate: |s| {
            (s.has(Detector::ThreatHigh) && s.aggravator_count >= 1)
                || (s.has(Detector::PhysicalMinor) && s.aggravator_count >= 2)
        },
    },
    // Any single aggravator lands here even without an act, threat, or injury.
    Rule {
        rank: 5,
        label: ChargeLabel::SecondDegree,
        explanation: "Moderate injury, moderate-level threat or force, or one major aggravator like blocking 911 or prior DV.",
        predicate: |s| {
            s.any(&[
                Detector::ModerateInjury,
                Detector::PhysicalMajor,
                Detector::ThreatModerate,
                Detector::ObstructedCall,
            ]) || s.aggravator_count >= 1
        },
    },
    Rule {
        rank: 6,
        label: ChargeLabel::ThirdDegree,
        explanation: "Minor contact or low-level verbal threat with no aggravating conditions.",
        predicate: |s| s.any(&[Detector::PhysicalMinor, Detector::ThreatLow]),
    },
];

/// Outcome when no rule matches.
pub static FALLBACK: Rule = Rule {
    rank: 7,
    label: ChargeLabel::NoQualifyingOffense,
    explanation: "No qualifying act, injury, or threat detected under the statutory criteria.",
    predicate: |_| true,
};

pub(crate) fn decide(signals: &RuleSignals<'_>) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| rule.matches(signals))
        .unwrap_or(&FALLBACK)
}

/// Every rule in evaluation order, fallback last.
pub fn ordered_rules() -> impl Iterator<Item = &'static Rule> {
    RULES.iter().chain(std::iter::once(&FALLBACK))
}
