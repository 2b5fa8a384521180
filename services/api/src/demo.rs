use crate::infra::read_incident_text;
use clap::Args;
use dv_charge::error::AppError;
use dv_charge::{
    assess, classify_batch, Assessment, BatchImporter, BatchOutcome, ReferenceKind,
};
use std::path::PathBuf;

const DEMO_INCIDENTS: [&str; 6] = [
    "He threatened to kill me and blocked my phone so I couldn't call 911",
    "He punched me with a knife and broke my arm",
    "He slapped me",
    "He has a prior DV conviction",
    "We had an argument",
    "He grabbed me and shoved me twice",
];

#[derive(Args, Debug, Default)]
pub(crate) struct ClassifyArgs {
    /// Incident description. Read from stdin when omitted.
    pub(crate) text: Option<String>,
    /// Emit the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
    /// Include detector outputs, aggravator count, and the rule that fired
    #[arg(long)]
    pub(crate) signals: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with `id` and `description` columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Emit results as JSON instead of one line per incident
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let ClassifyArgs { text, json, signals } = args;

    let text = match text {
        Some(text) => text,
        None => read_incident_text()?,
    };
    let assessment = assess(&text);

    if json {
        let payload = if signals {
            serde_json::to_value(&assessment)
        } else {
            serde_json::to_value(assessment.result)
        };
        match payload.and_then(|value| serde_json::to_string_pretty(&value)) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => println!("Result unavailable as JSON: {err}"),
        }
    } else {
        render_assessment(&assessment, signals);
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let records = BatchImporter::from_path(&args.csv)?;
    let outcomes = classify_batch(&records);

    if args.json {
        match serde_json::to_string_pretty(&outcomes) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => println!("Results unavailable as JSON: {err}"),
        }
    } else {
        render_batch(&outcomes);
    }

    Ok(())
}

pub(crate) fn run_reference(kind: ReferenceKind) {
    println!("{}", kind.title());
    for example in kind.examples() {
        println!("- {example}");
    }
}

pub(crate) fn run_demo() {
    println!("DV charge classifier demo");
    for incident in DEMO_INCIDENTS {
        println!("\nIncident: {incident}");
        render_assessment(&assess(incident), false);
    }
}

pub(crate) fn render_assessment(assessment: &Assessment, signals: bool) {
    let label = assessment.label();
    println!("Recommended charge: {} ({})", label.title(), label);
    println!("{}", assessment.result.explanation);

    if !signals {
        return;
    }

    println!("\nDecision rule: {}", assessment.rule);
    println!("Aggravating factors: {}", assessment.aggravator_count);
    let fired = assessment.detectors.fired();
    if fired.is_empty() {
        println!("Detectors: none fired");
    } else {
        println!("Detectors fired");
        for detector in fired {
            println!("- {}", detector.name());
        }
    }
}

fn render_batch(outcomes: &[BatchOutcome]) {
    if outcomes.is_empty() {
        println!("No incidents found in export");
        return;
    }

    for outcome in outcomes {
        println!("{}: {} - {}", outcome.id, outcome.charge, outcome.explanation);
    }
    println!(
        "\n{} of {} incidents meet DV criteria",
        qualifying_count(outcomes),
        outcomes.len()
    );
}

fn qualifying_count(outcomes: &[BatchOutcome]) -> usize {
    outcomes
        .iter()
        .filter(|outcome| outcome.charge.is_offense())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dv_charge::ChargeLabel;

    #[test]
    fn qualifying_count_skips_incidents_without_an_offense() {
        let outcomes: Vec<BatchOutcome> = DEMO_INCIDENTS
            .iter()
            .enumerate()
            .map(|(index, incident)| {
                let result = assess(incident).result;
                BatchOutcome {
                    id: index.to_string(),
                    charge: result.label,
                    explanation: result.explanation,
                }
            })
            .collect();

        assert_eq!(outcomes[4].charge, ChargeLabel::NoQualifyingOffense);
        assert_eq!(qualifying_count(&outcomes), DEMO_INCIDENTS.len() - 1);
        assert_eq!(qualifying_count(&[]), 0);
    }
}
