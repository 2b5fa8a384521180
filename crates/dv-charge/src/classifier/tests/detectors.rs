use std::collections::HashSet;

use super::common::*;
use crate::classifier::aggravators::{count_aggravators, AGGRAVATORS};
use crate::classifier::detectors::{Detector, DetectorBank, DetectorReport, CATALOGUE};

#[test]
fn catalogue_covers_every_detector_once() {
    for detector in Detector::ALL {
        let entries = CATALOGUE
            .iter()
            .filter(|(entry, _)| *entry == detector)
            .count();
        assert_eq!(entries, 1, "{} catalogued {entries} times", detector.name());
    }
}

#[test]
fn empty_text_fires_nothing_but_reports_every_detector() {
    let report = DetectorBank::evaluate("");

    assert!(report.fired().is_empty());
    assert_eq!(report.iter().count(), Detector::COUNT);

    let json = serde_json::to_value(report).expect("report serializes");
    let keys = json.as_object().expect("object").len();
    assert_eq!(keys, Detector::COUNT);
    assert_eq!(json["priorDV"], serde_json::Value::Bool(false));
}

#[test]
fn each_detector_fires_on_a_catalogued_phrase() {
    let cases = [
        (Detector::PhysicalMinor, "she pinched him"),
        (Detector::PhysicalMajor, "he choked her"),
        (Detector::PhysicalMajor, "he threw down stairs the laundry"),
        (Detector::ThreatLow, "he threatened to slap her"),
        (Detector::ThreatModerate, "he threaten to harm the dog"),
        (Detector::ThreatHigh, "he threatened to kill her"),
        (Detector::Weapon, "he carried a machete"),
        (Detector::PriorDv, "there is a history of dv"),
        (Detector::PriorDv, "one previous conviction"),
        (Detector::MinorVictim, "a minor was present"),
        (Detector::Pregnant, "she is pregnant"),
        (Detector::ProtectionOrderViolated, "a restraining order was in place"),
        (Detector::ObstructedCall, "he took phone away"),
        (Detector::ObstructedCall, "she dialed 911"),
        (Detector::GreatInjury, "he broke jaw"),
        (Detector::GreatInjury, "he broke his rib"),
        (Detector::GreatInjury, "she lost tooth"),
        (Detector::ModerateInjury, "she needed stitches"),
        (Detector::ModerateInjury, "deep bruises on her arm"),
        (Detector::ExtremeIndifference, "he set on fire the couch"),
        (Detector::ExtremeIndifference, "he pushed into traffic"),
    ];

    for (detector, text) in cases {
        assert_fires(text, detector);
    }
}

const EVERY_ALTERNATIVE: &[(Detector, &[&str])] = &[
    (
        Detector::PhysicalMinor,
        &["slap", "push", "grab", "shove", "poke", "smack", "flick", "tap", "pinch"],
    ),
    (
        Detector::PhysicalMajor,
        &[
            "punch",
            "kick",
            "choked",
            "struck",
            "headbutt",
            "body slam",
            "tackle",
            "elbowed",
            "kneed",
            "bit",
            "burned",
            "cut",
            "hit with object",
            "threw down stairs",
        ],
    ),
    (
        Detector::ThreatLow,
        &["threatened to slap", "threaten to slap", "hit"],
    ),
    (
        Detector::ThreatModerate,
        &[
            "threatened to harm",
            "threaten to harm",
            "hurt",
            "beat",
            "break something",
        ],
    ),
    (
        Detector::ThreatHigh,
        &[
            "threatened to kill",
            "threaten to kill",
            "shoot",
            "stab",
            "burn",
            "strangle",
            "blow up",
            "murder",
        ],
    ),
    (
        Detector::Weapon,
        &["gun", "knife", "bat", "weapon", "firearm", "sword", "crowbar", "machete"],
    ),
    (
        Detector::PriorDv,
        &["prior dv", "previous conviction", "history of dv"],
    ),
    (Detector::MinorVictim, &["child", "minor"]),
    (Detector::Pregnant, &["pregnant"]),
    (
        Detector::ProtectionOrderViolated,
        &["protection order", "restraining order"],
    ),
    (
        Detector::ObstructedCall,
        &["blocked", "took phone", "911", "prevented call"],
    ),
    (
        Detector::GreatInjury,
        &[
            "broke arm",
            "broke leg",
            "broke rib",
            "broke nose",
            "broke jaw",
            "broke her nose",
            "fractured",
            "great injury",
            "serious injury",
            "hospitalized",
            "lost tooth",
            "disfigured",
            "loss of function",
            "internal bleeding",
            "brain injury",
            "stab wound",
            "gunshot",
            "coma",
        ],
    ),
    (
        Detector::ModerateInjury,
        &[
            "concussion",
            "swollen eye",
            "deep bruises",
            "black eye",
            "sprain",
            "minor fracture",
            "stitches",
            "mild bleeding",
        ],
    ),
    (
        Detector::ExtremeIndifference,
        &[
            "ran over",
            "threw off",
            "pushed into traffic",
            "set on fire",
            "smashed head",
            "beat unconscious",
        ],
    ),
];

#[test]
fn every_catalogued_alternative_fires_its_detector() {
    let listed: HashSet<Detector> = EVERY_ALTERNATIVE
        .iter()
        .map(|(detector, _)| *detector)
        .collect();
    assert_eq!(listed.len(), Detector::COUNT, "every detector has phrases listed");

    for (detector, phrases) in EVERY_ALTERNATIVE {
        for phrase in *phrases {
            assert_fires(phrase, *detector);
            assert_fires(&format!("Report: {}.", phrase.to_uppercase()), *detector);
        }
    }
}

#[test]
fn matching_is_case_insensitive() {
    assert_fires("HE SLAPPED ME", Detector::PhysicalMinor);
    assert_fires("Protection Order", Detector::ProtectionOrderViolated);
}

#[test]
fn matching_is_substring_not_whole_word() {
    // "white" contains "hit", "battery" contains "bat".
    assert_fires("she wore a white shirt", Detector::ThreatLow);
    assert_fires("charged with battery", Detector::Weapon);
    // "minor fracture" is both a moderate injury and a minor-victim mention.
    let report = assessed("a minor fracture").detectors;
    assert!(report.get(Detector::ModerateInjury));
    assert!(report.get(Detector::MinorVictim));
}

#[test]
fn threat_prefix_only_binds_the_first_alternative() {
    assert_fires("he said he would stab her", Detector::ThreatHigh);
    assert_fires("it might hurt", Detector::ThreatModerate);
    assert_silent("he threatened to leave", Detector::ThreatHigh);
}

#[test]
fn broken_bone_allows_one_word_between_verb_and_bone() {
    assert_fires("he broke my arm", Detector::GreatInjury);
    assert_silent("he broke the glass", Detector::GreatInjury);
    assert_silent("he broke up with me", Detector::GreatInjury);
}

#[test]
fn detector_names_are_unique_schema_keys() {
    let names: HashSet<&str> = Detector::ALL.iter().map(|detector| detector.name()).collect();
    assert_eq!(names.len(), Detector::COUNT);
    assert!(names.contains("priorDV"));
    assert!(names.contains("protectionOrderViolated"));
}

#[test]
fn aggravator_count_spans_the_six_aggravators() {
    let all = assessed("pregnant, a child, a knife, prior dv, restraining order, took phone");
    assert_eq!(all.aggravator_count, AGGRAVATORS.len() as u8);

    let none = DetectorReport::with(&[
        Detector::PhysicalMajor,
        Detector::GreatInjury,
        Detector::ThreatHigh,
    ]);
    assert_eq!(count_aggravators(&none), 0);

    let two = DetectorReport::with(&[Detector::Weapon, Detector::ObstructedCall, Detector::ThreatLow]);
    assert_eq!(count_aggravators(&two), 2);
}
