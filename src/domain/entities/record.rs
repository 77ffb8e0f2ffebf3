//! Clinical record entity: one encounter of a patient.

use chrono::NaiveDate;

/// A clinical encounter belonging to exactly one patient.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Record {
    pub id: i64,
    pub diagnosis: String,
    pub recommendations: String,
    pub treatment: String,
    pub date: NaiveDate,
    pub diagnosis_diff: String,
    pub diagnosis_eco: String,
    pub exams: String,
    pub medications: String,
    pub symptoms: String,
    pub phy_exa: String,
    pub signs: String,
    pub type_pat: String,
    pub observations: String,
    pub id_patient: i64,
}

/// Clinical content of a record.
///
/// The owning patient is fixed at creation and is not part of a replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFields {
    pub diagnosis: String,
    pub recommendations: String,
    pub treatment: String,
    pub date: NaiveDate,
    pub diagnosis_diff: String,
    pub diagnosis_eco: String,
    pub exams: String,
    pub medications: String,
    pub symptoms: String,
    pub phy_exa: String,
    pub signs: String,
    pub type_pat: String,
    pub observations: String,
}

impl Record {
    pub fn from_fields(id: i64, id_patient: i64, fields: RecordFields) -> Self {
        Self {
            id,
            diagnosis: fields.diagnosis,
            recommendations: fields.recommendations,
            treatment: fields.treatment,
            date: fields.date,
            diagnosis_diff: fields.diagnosis_diff,
            diagnosis_eco: fields.diagnosis_eco,
            exams: fields.exams,
            medications: fields.medications,
            symptoms: fields.symptoms,
            phy_exa: fields.phy_exa,
            signs: fields.signs,
            type_pat: fields.type_pat,
            observations: fields.observations,
            id_patient,
        }
    }
}
