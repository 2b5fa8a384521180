use once_cell::sync::Lazy;
use regex::Regex;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Named lexical tests evaluated over normalized incident text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Detector {
    PhysicalMinor,
    PhysicalMajor,
    ThreatLow,
    ThreatModerate,
    ThreatHigh,
    Weapon,
    PriorDv,
    MinorVictim,
    Pregnant,
    ProtectionOrderViolated,
    ObstructedCall,
    GreatInjury,
    ModerateInjury,
    ExtremeIndifference,
}

impl Detector {
    pub const COUNT: usize = 14;

    pub const ALL: [Detector; Detector::COUNT] = [
        Detector::PhysicalMinor,
        Detector::PhysicalMajor,
        Detector::ThreatLow,
        Detector::ThreatModerate,
        Detector::ThreatHigh,
        Detector::Weapon,
        Detector::PriorDv,
        Detector::MinorVictim,
        Detector::Pregnant,
        Detector::ProtectionOrderViolated,
        Detector::ObstructedCall,
        Detector::GreatInjury,
        Detector::ModerateInjury,
        Detector::ExtremeIndifference,
    ];

    /// Stable schema key for this detector.
    pub fn name(self) -> &'static str {
        match self {
            Detector::PhysicalMinor => "physicalMinor",
            Detector::PhysicalMajor => "physicalMajor",
            Detector::ThreatLow => "threatLow",
            Detector::ThreatModerate => "threatModerate",
            Detector::ThreatHigh => "threatHigh",
            Detector::Weapon => "weapon",
            Detector::PriorDv => "priorDV",
            Detector::MinorVictim => "minorVictim",
            Detector::Pregnant => "pregnant",
            Detector::ProtectionOrderViolated => "protectionOrderViolated",
            Detector::ObstructedCall => "obstructedCall",
            Detector::GreatInjury => "greatInjury",
            Detector::ModerateInjury => "moderateInjury",
            Detector::ExtremeIndifference => "extremeIndifference",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Phrase alternatives per detector, matched as unanchored substrings.
///
/// The threat rows keep the source alternation: only the first alternative carries the
/// "threaten(ed) to" prefix, so a bare "hit" or "stab" anywhere in the text fires them.
pub(crate) const CATALOGUE: [(Detector, &str); Detector::COUNT] = [
    (
        Detector::PhysicalMinor,
        r"(slap|push|grab|shove|poke|smack|flick|tap|pinch)",
    ),
    (
        Detector::PhysicalMajor,
        r"(punch|kick|choked|struck|headbutt|body slam|tackle|elbowed|kneed|bit|burned|cut|hit with object|threw down stairs)",
    ),
    (Detector::ThreatLow, r"(threaten(ed)? to slap|hit)"),
    (
        Detector::ThreatModerate,
        r"(threaten(ed)? to harm|hurt|beat|break something)",
    ),
    (
        Detector::ThreatHigh,
        r"(threaten(ed)? to kill|shoot|stab|burn|strangle|blow up|murder)",
    ),
    (
        Detector::Weapon,
        r"(gun|knife|bat|weapon|firearm|sword|crowbar|machete)",
    ),
    (
        Detector::PriorDv,
        r"(prior dv|previous conviction|history of dv)",
    ),
    (Detector::MinorVictim, r"(child|minor)"),
    (Detector::Pregnant, r"(pregnant)"),
    (
        Detector::ProtectionOrderViolated,
        r"(protection order|restraining order)",
    ),
    (
        Detector::ObstructedCall,
        r"(blocked|took phone|911|prevented call)",
    ),
    (
        Detector::GreatInjury,
        r"(broke (\w+ )?(arm|leg|rib|nose|jaw)|fractured|great injury|serious injury|hospitalized|lost tooth|disfigured|loss of function|internal bleeding|brain injury|stab wound|gunshot|coma)",
    ),
    (
        Detector::ModerateInjury,
        r"(concussion|swollen eye|deep bruises|black eye|sprain|minor fracture|stitches|mild bleeding)",
    ),
    (
        Detector::ExtremeIndifference,
        r"(ran over|threw off|pushed into traffic|set on fire|smashed head|beat unconscious)",
    ),
];

static COMPILED: Lazy<Vec<(Detector, Regex)>> = Lazy::new(|| {
    CATALOGUE
        .iter()
        .map(|(detector, pattern)| {
            let regex = Regex::new(pattern).expect("detector catalogue patterns are valid");
            (*detector, regex)
        })
        .collect()
});

/// Evaluates every catalogue entry against normalized text.
pub(crate) struct DetectorBank;

impl DetectorBank {
    pub(crate) fn evaluate(normalized: &str) -> DetectorReport {
        let mut report = DetectorReport::default();
        for (detector, regex) in COMPILED.iter() {
            report.flags[detector.index()] = regex.is_match(normalized);
        }
        report
    }
}

/// Outcome of every detector for one incident. All detectors are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectorReport {
    flags: [bool; Detector::COUNT],
}

impl DetectorReport {
    pub fn get(&self, detector: Detector) -> bool {
        self.flags[detector.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Detector, bool)> + '_ {
        Detector::ALL
            .into_iter()
            .map(move |detector| (detector, self.get(detector)))
    }

    /// Detectors that matched, in catalogue order.
    pub fn fired(&self) -> Vec<Detector> {
        self.iter()
            .filter_map(|(detector, hit)| hit.then_some(detector))
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn with(detectors: &[Detector]) -> Self {
        let mut report = Self::default();
        for detector in detectors {
            report.flags[detector.index()] = true;
        }
        report
    }
}

impl Serialize for DetectorReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Detector::COUNT))?;
        for (detector, hit) in self.iter() {
            map.serialize_entry(detector.name(), &hit)?;
        }
        map.end()
    }
}
