//! Deterministic domestic-violence charge classification.
//!
//! Incident text flows through a lexical detector bank, an aggravator count, and an ordered
//! rule list. The first rule whose predicate holds decides the charge tier.

pub mod classifier;
pub mod config;
pub mod error;
pub mod reference;
pub mod telemetry;

pub use classifier::{
    assess, classify, classify_batch, classification_router, Assessment, BatchImportError,
    BatchImporter, BatchOutcome, ChargeClassifier, ChargeLabel, ClassificationResult, Detector,
    DetectorReport, IncidentRecord, IntakeError, IntakePolicy,
};
pub use reference::ReferenceKind;
