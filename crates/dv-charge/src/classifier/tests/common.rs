use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::classifier::detectors::{Detector, DetectorReport};
use crate::classifier::domain::ChargeLabel;
use crate::classifier::rules::{decide, RuleSignals};
use crate::classifier::{aggravators::count_aggravators, assess, Assessment};

/// Literal incident per decision rule, indexed by rank - 1.
pub(super) const RULE_EXAMPLES: [(u8, &str, ChargeLabel); 7] = [
    (1, "He fractured my jaw with a bat", ChargeLabel::Dvhan),
    (2, "She was hospitalized after the fall", ChargeLabel::FirstDegree),
    (3, "He kicked me and left a black eye", ChargeLabel::FirstDegree),
    (
        4,
        "He pinched me in front of the child while I was pregnant",
        ChargeLabel::FirstDegree,
    ),
    (5, "He threatened to hurt me", ChargeLabel::SecondDegree),
    (6, "He threatened to slap me", ChargeLabel::ThirdDegree),
    (7, "We had an argument", ChargeLabel::NoQualifyingOffense),
];

pub(super) fn assessed(text: &str) -> Assessment {
    assess(text)
}

/// Rank chosen by the decision tree for a hand-built detector report.
pub(super) fn rank_for(detectors: &[Detector]) -> u8 {
    let report = DetectorReport::with(detectors);
    let aggravator_count = count_aggravators(&report);
    decide(&RuleSignals {
        report: &report,
        aggravator_count,
    })
    .rank
}

pub(super) fn assert_fires(text: &str, detector: Detector) {
    let assessment = assessed(text);
    assert!(
        assessment.detectors.get(detector),
        "expected {} to fire for {text:?}, fired: {:?}",
        detector.name(),
        assessment.detectors.fired()
    );
}

pub(super) fn assert_silent(text: &str, detector: Detector) {
    let assessment = assessed(text);
    assert!(
        !assessment.detectors.get(detector),
        "expected {} to stay silent for {text:?}",
        detector.name()
    );
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_status(response: &Response, status: StatusCode) {
    assert_eq!(response.status(), status);
}
