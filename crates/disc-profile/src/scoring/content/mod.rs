//! Fixed descriptive content: per-level statements, trait descriptions, intensity-keyed
//! interpretations, and the narrative report.

mod descriptions;
mod interpretations;
mod report;
mod statements;

pub use descriptions::{catalog, describe, TraitDescription};
pub use interpretations::{
    combination_text, general_text, professional_text, work_pairing_text, CombinationText,
    GeneralInterpretation, GeneralText, Intensity, Interpretations, ProfessionalInterpretation,
    ProfessionalText, Reading, WorkPairingText, MODERATE_CEILING, SIGNIFICANT_CEILING,
};
pub use report::ProfileReport;
pub use statements::{recommendations, strengths, weakness_trigger, weaknesses};
